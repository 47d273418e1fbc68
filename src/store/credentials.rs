use chrono::Utc;
use redb::{ReadableTable, ReadableTableMetadata};

use crate::db::{tables, Db};
use crate::error::{AppError, Result};
use crate::models::AccountRecord;
use crate::security::{generate_salt, hash_password, verify_password};
use crate::store::BINCODE_CONFIG;

/// Append-only store of (username, salted password hash) pairs
///
/// Usernames are unique with case-sensitive exact matching; accounts are
/// never updated or deleted.
pub struct CredentialStore {
    db: Db,
}

impl CredentialStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Register a new account
    ///
    /// Fails with `DuplicateUsername` if the username is already present.
    /// Otherwise generates a fresh salt, hashes the password, and appends
    /// the record.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(tables::ACCOUNTS)?;

            if table.get(username)?.is_some() {
                tracing::info!("Registration rejected, username taken: {}", username);
                return Err(AppError::DuplicateUsername);
            }

            let salt = generate_salt();
            let record = AccountRecord {
                password_hash: hash_password(password, &salt),
                salt,
                created_at: Utc::now().timestamp(),
            };
            let bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
            table.insert(username, bytes.as_slice())?;
        }
        write_txn.commit()?;

        tracing::info!("New account registered: {}", username);
        Ok(())
    }

    /// True iff an account exists whose username and password both match
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(tables::ACCOUNTS)?;

        let Some(bytes) = table.get(username)? else {
            return Ok(false);
        };
        let (record, _): (AccountRecord, _) =
            bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG)?;

        Ok(verify_password(password, &record.salt, &record.password_hash))
    }

    /// Number of registered accounts
    pub fn count(&self) -> Result<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(tables::ACCOUNTS)?;
        Ok(table.len()?)
    }
}
