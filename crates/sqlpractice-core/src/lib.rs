//! Core types and traits for SQL Practice store backends.
//!
//! This crate provides the `StoreBackend` trait, the tabular result types and
//! the fixed seed dataset, so engines can live in separate crates.

pub mod models;
pub mod seed;
pub mod storage;

// Re-export key types at crate root for convenience
pub use models::{ColumnInfo, DataValue, ResultSet, TableSchema};
pub use seed::{date_to_str, SeedOrder, SeedUser, SEED_ORDERS, SEED_USERS};
pub use storage::{StoreBackend, StoreError, PRACTICE_TABLES};
