// Re-export the store types so callers only depend on this crate.
pub use sqlpractice_core::{
    ColumnInfo, DataValue, ResultSet, StoreBackend, StoreError, TableSchema, PRACTICE_TABLES,
};
pub use sqlpractice_sqlite::SqliteStore;
