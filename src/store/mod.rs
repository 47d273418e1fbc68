//! Storage interfaces over the embedded database
//!
//! Each store owns the transaction choreography for one table family and
//! exposes append / filter-by-key / bulk-delete-by-key operations, so the
//! persistence mechanism can change without touching calling code. All
//! methods block; handlers call them through `tokio::task::spawn_blocking`.

pub mod credentials;
pub mod history;
pub mod sessions;
pub mod stats;

pub use credentials::CredentialStore;
pub use history::HistoryStore;
pub use sessions::SessionStore;
pub use stats::CountryStatStore;

pub(crate) const BINCODE_CONFIG: bincode::config::Configuration = bincode::config::standard();
