use redb::TableDefinition;

/// Accounts table: username -> AccountRecord (serialized)
pub const ACCOUNTS: TableDefinition<&str, &[u8]> = TableDefinition::new("accounts");

/// History table: (username, seq) -> ClassificationRecord (serialized)
/// The per-user sequence keeps one user's rows contiguous and in write order,
/// so a single range scan answers the filtered history query.
pub const HISTORY: TableDefinition<(&str, u64), &[u8]> = TableDefinition::new("history");

/// Sessions table: bearer token (hex) -> SessionRecord (serialized)
pub const SESSIONS: TableDefinition<&str, &[u8]> = TableDefinition::new("sessions");

/// Country statistics table: country name -> CountryStatRecord (serialized)
/// Seeded once on first startup, read-only afterwards.
pub const COUNTRY_STATS: TableDefinition<&str, &[u8]> = TableDefinition::new("country_stats");

/// Upload limits table: username -> UploadRateRecord (serialized)
pub const UPLOAD_LIMITS: TableDefinition<&str, &[u8]> = TableDefinition::new("upload_limits");
