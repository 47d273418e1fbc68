use serde::{Deserialize, Serialize};

use crate::constants::MAX_CREDENTIAL_LEN;

/// Account record stored in redb, keyed by username
/// Uses Unix timestamp for compact storage with bincode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Hex-encoded SHA-256 of salt || password
    pub password_hash: String,
    /// Hex-encoded per-account salt
    pub salt: String,
    /// When the account was created (Unix timestamp)
    pub created_at: i64,
}

impl AccountRecord {
    /// Validate an entry-form field (username or password)
    ///
    /// Blank fields and fields longer than the form cap are rejected.
    pub fn validate_field(value: &str) -> bool {
        !value.is_empty() && value.chars().count() <= MAX_CREDENTIAL_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field() {
        assert!(AccountRecord::validate_field("alice"));
        assert!(AccountRecord::validate_field("a"));
        assert!(AccountRecord::validate_field(&"x".repeat(MAX_CREDENTIAL_LEN)));

        // Blank
        assert!(!AccountRecord::validate_field(""));

        // Over the form cap
        assert!(!AccountRecord::validate_field(
            &"x".repeat(MAX_CREDENTIAL_LEN + 1)
        ));
    }

    #[test]
    fn test_account_record_serialization() {
        let record = AccountRecord {
            password_hash: "ab".repeat(32),
            salt: "cd".repeat(16),
            created_at: 1733788800,
        };

        // Verify bincode serialization works
        let config = bincode::config::standard();
        let bytes = bincode::serde::encode_to_vec(&record, config).unwrap();
        let (deserialized, _): (AccountRecord, _) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();

        assert_eq!(record.password_hash, deserialized.password_hash);
        assert_eq!(record.salt, deserialized.salt);
        assert_eq!(record.created_at, deserialized.created_at);
    }
}
