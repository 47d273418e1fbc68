use redb::{ReadableTable, ReadableTableMetadata};

use crate::db::{tables, Db};
use crate::error::Result;
use crate::models::{seed_rows, CountryStatRecord};
use crate::store::BINCODE_CONFIG;

/// Static country waste/recycling reference data
///
/// Seeded once when the table is empty, read-only at runtime.
pub struct CountryStatStore {
    db: Db,
}

impl CountryStatStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Write the seed rows if the table is empty
    ///
    /// Returns how many rows were written (zero on every startup but the
    /// first).
    pub fn seed_if_empty(&self) -> Result<usize> {
        let write_txn = self.db.begin_write()?;
        let seeded = {
            let mut table = write_txn.open_table(tables::COUNTRY_STATS)?;
            if table.is_empty()? {
                let rows = seed_rows();
                for row in &rows {
                    let bytes = bincode::serde::encode_to_vec(row, BINCODE_CONFIG)?;
                    table.insert(row.country.as_str(), bytes.as_slice())?;
                }
                rows.len()
            } else {
                0
            }
        };
        write_txn.commit()?;

        if seeded > 0 {
            tracing::info!("Seeded {} country statistics rows", seeded);
        }
        Ok(seeded)
    }

    /// Every country row
    ///
    /// redb iterates keys in order, so rows come back sorted by country name.
    pub fn all(&self) -> Result<Vec<CountryStatRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(tables::COUNTRY_STATS)?;

        let mut stats = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            let (stat, _): (CountryStatRecord, _) =
                bincode::serde::decode_from_slice(value.value(), BINCODE_CONFIG)?;
            stats.push(stat);
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_database;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> CountryStatStore {
        let db = open_database(temp_dir.path().join("test.db")).unwrap();
        CountryStatStore::new(db)
    }

    #[test]
    fn test_seed_if_empty_writes_once() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert_eq!(store.seed_if_empty().unwrap(), 5);

        // Second startup finds the table populated
        assert_eq!(store.seed_if_empty().unwrap(), 0);
        assert_eq!(store.all().unwrap().len(), 5);
    }

    #[test]
    fn test_all_sorted_by_country() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        store.seed_if_empty().unwrap();

        let names: Vec<String> = store.all().unwrap().into_iter().map(|s| s.country).collect();
        assert_eq!(names, ["Brazil", "Germany", "India", "Japan", "USA"]);
    }

    #[test]
    fn test_all_on_empty_table() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert!(store.all().unwrap().is_empty());
    }
}
