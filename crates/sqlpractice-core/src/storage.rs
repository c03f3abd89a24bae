use crate::models::{ColumnInfo, ResultSet, TableSchema};

use thiserror::Error;

/// Tables every practice store exposes, in display order.
pub const PRACTICE_TABLES: [&str; 2] = ["users", "orders"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Raw engine message, shown to the learner untranslated.
    #[error("{0}")]
    Engine(String),
    #[error("table not found: {0}")]
    TableNotFound(String),
}

pub trait StoreBackend: Send + Sync {
    /// Runs `reset` when the store does not exist yet. Returns true if it seeded.
    fn ensure_initialized(&self) -> Result<bool, StoreError>;

    /// Drops, recreates and reseeds both tables.
    fn reset(&self) -> Result<(), StoreError>;

    /// Runs an already approved read query verbatim.
    fn execute(&self, query: &str) -> Result<ResultSet, StoreError>;

    fn describe(&self, table: &str) -> Result<Vec<ColumnInfo>, StoreError>;

    fn schema_summary(&self) -> Result<Vec<TableSchema>, StoreError> {
        PRACTICE_TABLES
            .iter()
            .map(|table| {
                Ok(TableSchema {
                    name: table.to_string(),
                    columns: self.describe(table)?,
                })
            })
            .collect()
    }
}
