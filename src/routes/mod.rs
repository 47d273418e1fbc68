pub mod admin;
pub mod auth;
pub mod classify;
pub mod health;
pub mod history;
pub mod home;
pub mod stats;
pub mod validation;

pub use admin::admin_stats;
pub use auth::{login_user, logout_user, register_user};
pub use classify::classify_image;
pub use health::health_check;
pub use history::{clear_history, get_history};
pub use home::home;
pub use stats::{dashboard, map_markers};
pub use validation::{bearer_token, require_session};
