pub mod account;
pub mod country;
pub mod history;
pub mod rate_limit;
pub mod session;

pub use account::AccountRecord;
pub use country::{seed_rows, CountryStatRecord};
pub use history::ClassificationRecord;
pub use rate_limit::UploadRateRecord;
pub use session::SessionRecord;
