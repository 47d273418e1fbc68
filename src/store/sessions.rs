use chrono::Utc;
use redb::ReadableTable;

use crate::db::{tables, Db};
use crate::error::{AppError, Result};
use crate::models::SessionRecord;
use crate::security::generate_session_token;
use crate::store::BINCODE_CONFIG;

/// Server-side sessions keyed by opaque bearer tokens
pub struct SessionStore {
    db: Db,
}

impl SessionStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Create a session for a logged-in user, returning its bearer token
    pub fn create(&self, username: &str, ttl_secs: u64) -> Result<String> {
        let token = generate_session_token();
        let record = SessionRecord::new(username, Utc::now().timestamp(), ttl_secs);

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(tables::SESSIONS)?;
            let bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
            table.insert(token.as_str(), bytes.as_slice())?;
        }
        write_txn.commit()?;

        Ok(token)
    }

    /// Resolve a bearer token to its session
    ///
    /// Unknown and expired tokens are both `Unauthorized`; expiry is checked
    /// lazily here rather than by a background sweep.
    pub fn lookup(&self, token: &str) -> Result<SessionRecord> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(tables::SESSIONS)?;

        let Some(bytes) = table.get(token)? else {
            return Err(AppError::Unauthorized);
        };
        let (record, _): (SessionRecord, _) =
            bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG)?;

        if record.is_expired(Utc::now().timestamp()) {
            tracing::info!("Rejected expired session for {}", record.username);
            return Err(AppError::Unauthorized);
        }

        Ok(record)
    }

    /// Remove a session (logout); removing an unknown token is a no-op
    pub fn delete(&self, token: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(tables::SESSIONS)?;
            table.remove(token)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
