use chrono::Utc;
use redb::{ReadableTable, ReadableTableMetadata};

use crate::db::{tables, Db};
use crate::error::Result;
use crate::models::{ClassificationRecord, UploadRateRecord};
use crate::store::BINCODE_CONFIG;

/// Per-user classification history
///
/// Records are keyed by (username, seq) with a monotonic per-user sequence,
/// so one user's rows form a contiguous key range: the filtered history
/// query is a range scan and history clear is a range removal.
pub struct HistoryStore {
    db: Db,
}

/// Next sequence number for a user: one past the highest stored
fn next_seq(
    table: &impl ReadableTable<(&'static str, u64), &'static [u8]>,
    username: &str,
) -> Result<u64> {
    let mut range = table.range((username, 0u64)..=(username, u64::MAX))?;
    Ok(match range.next_back() {
        Some(entry) => entry?.0.value().1 + 1,
        None => 0,
    })
}

impl HistoryStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Append a record, assigning the next per-user sequence number
    pub fn append(&self, record: &ClassificationRecord) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(tables::HISTORY)?;
            let seq = next_seq(&table, &record.username)?;
            let bytes = bincode::serde::encode_to_vec(record, BINCODE_CONFIG)?;
            table.insert((record.username.as_str(), seq), bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Append a record after charging it against the user's upload limits
    ///
    /// Rate limit check and history append share one transaction; if the
    /// limit is exceeded nothing is written.
    pub fn record_upload(&self, record: &ClassificationRecord) -> Result<()> {
        let now = Utc::now().timestamp();

        let write_txn = self.db.begin_write()?;
        {
            let mut limits = write_txn.open_table(tables::UPLOAD_LIMITS)?;
            let mut rate_record = match limits.get(record.username.as_str())? {
                Some(bytes) => {
                    bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG)?.0
                }
                None => UploadRateRecord::new(now),
            };

            // Returns Err(RateLimitExceeded) if limits are exceeded
            rate_record.check_and_increment(now)?;

            let rate_bytes = bincode::serde::encode_to_vec(&rate_record, BINCODE_CONFIG)?;
            limits.insert(record.username.as_str(), rate_bytes.as_slice())?;
            drop(limits);

            let mut table = write_txn.open_table(tables::HISTORY)?;
            let seq = next_seq(&table, &record.username)?;
            let bytes = bincode::serde::encode_to_vec(record, BINCODE_CONFIG)?;
            table.insert((record.username.as_str(), seq), bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// All records for one user, in the order written
    pub fn for_user(&self, username: &str) -> Result<Vec<ClassificationRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(tables::HISTORY)?;

        let mut records = Vec::new();
        for entry in table.range((username, 0u64)..=(username, u64::MAX))? {
            let (_, value) = entry?;
            let (record, _): (ClassificationRecord, _) =
                bincode::serde::decode_from_slice(value.value(), BINCODE_CONFIG)?;
            records.push(record);
        }
        Ok(records)
    }

    /// Remove every record for one user, returning how many were removed
    ///
    /// Other users' records are untouched.
    pub fn clear_user(&self, username: &str) -> Result<usize> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(tables::HISTORY)?;

            let seqs: Vec<u64> = {
                let mut collected = Vec::new();
                for entry in table.range((username, 0u64)..=(username, u64::MAX))? {
                    let (key, _) = entry?;
                    collected.push(key.value().1);
                }
                collected
            };

            for seq in &seqs {
                table.remove((username, *seq))?;
            }
            seqs.len()
        };
        write_txn.commit()?;

        tracing::info!("Cleared {} history records for {}", removed, username);
        Ok(removed)
    }

    /// Total number of stored records across all users
    pub fn count(&self) -> Result<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(tables::HISTORY)?;
        Ok(table.len()?)
    }
}
