use serde::{Deserialize, Serialize};

/// Server-side session record, keyed in redb by its bearer token
///
/// Replaces per-connection login flags with an explicit identity object;
/// expiry is checked lazily on lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    /// When the session was created (Unix timestamp)
    pub created_at: i64,
    /// When the session stops being accepted (Unix timestamp)
    pub expires_at: i64,
}

impl SessionRecord {
    /// Create a session starting now with the given time-to-live
    pub fn new(username: &str, now: i64, ttl_secs: u64) -> Self {
        Self {
            username: username.to_string(),
            created_at: now,
            expires_at: now + ttl_secs as i64,
        }
    }

    /// Whether the session has expired as of `now`
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = SessionRecord::new("alice", 1_000_000, 3600);

        assert_eq!(session.username, "alice");
        assert_eq!(session.created_at, 1_000_000);
        assert_eq!(session.expires_at, 1_003_600);
    }

    #[test]
    fn test_is_expired() {
        let session = SessionRecord::new("alice", 1_000_000, 3600);

        assert!(!session.is_expired(1_000_000));
        assert!(!session.is_expired(1_003_599));
        assert!(session.is_expired(1_003_600));
        assert!(session.is_expired(2_000_000));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let session = SessionRecord::new("alice", 1_000_000, 0);
        assert!(session.is_expired(1_000_000));
    }
}
