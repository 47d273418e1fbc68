/// Maximum length of a username or password
/// Matches the entry form's 50-character field cap
pub const MAX_CREDENTIAL_LEN: usize = 50;

/// Maximum decoded upload size in bytes (5MB)
/// Typical phone photos land around 2-3MB
pub const MAX_UPLOAD_SIZE_BYTES: usize = 5_242_880;

/// Warning threshold for large uploads (1MB)
/// Log when uploads exceed this size for monitoring
pub const WARN_UPLOAD_SIZE_BYTES: usize = 1_048_576;

/// File extensions accepted by the classify endpoint
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Maximum classifications per hour per user
pub const MAX_UPLOADS_PER_HOUR: u32 = 30;

/// Maximum classifications per day per user
pub const MAX_UPLOADS_PER_DAY: u32 = 200;

/// Display format for history timestamps
pub const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for blank entry-form fields
pub const ERR_EMPTY_FIELDS: &str = "Username and password must not be empty";

/// Error message for oversized entry-form fields
pub const ERR_FIELD_TOO_LONG: &str = "Username and password are limited to 50 characters";

/// Error message for uploads with an unsupported extension
pub const ERR_INVALID_EXTENSION: &str = "Only jpg, jpeg and png uploads are accepted";

/// Error message for image payloads that are not base64
pub const ERR_INVALID_IMAGE_DATA: &str = "Image data must be valid base64";
