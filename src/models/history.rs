use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ALLOWED_IMAGE_EXTENSIONS, HISTORY_TIME_FORMAT};

/// One logged upload-and-label event
///
/// Immutable once written; read back filtered by username for the
/// history screen and bulk-deleted by username on history clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub username: String,
    /// Name of the uploaded file, as sent by the client
    pub filename: String,
    /// Label the classifier assigned
    pub label: String,
    /// When the upload was classified (Unix timestamp)
    pub recorded_at: i64,
}

impl ClassificationRecord {
    /// Check the filename extension against the accepted image types
    pub fn validate_filename(filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((stem, ext)) => {
                !stem.is_empty() && ALLOWED_IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
            }
            None => false,
        }
    }

    /// Format the record timestamp for display
    pub fn formatted_timestamp(&self) -> String {
        DateTime::from_timestamp(self.recorded_at, 0)
            .unwrap_or_else(Utc::now)
            .format(HISTORY_TIME_FORMAT)
            .to_string()
    }
}
