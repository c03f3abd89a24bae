//! Action handlers behind every button in the UI.
//!
//! Each handler is one user action: it takes the session by reference, talks
//! to the store at most once per step, and turns failures into a
//! `PracticeError` the presentation layer can show as a message.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::{
    gate::{self, GateError},
    session::Session,
    storage::{ResultSet, StoreBackend, StoreError, TableSchema},
};

pub const RESET_MESSAGE: &str = "Database reset done";

#[derive(Debug, Error)]
pub enum PracticeError {
    #[error("{}", GateError::EmptyQuery)]
    EmptyQuery,
    #[error("{}", GateError::DisallowedStatement)]
    DisallowedStatement,
    #[error("{0}")]
    Engine(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl PracticeError {
    pub fn kind(&self) -> &'static str {
        match self {
            PracticeError::EmptyQuery => "empty_query",
            PracticeError::DisallowedStatement => "disallowed_statement",
            PracticeError::Engine(_) => "engine_error",
            PracticeError::StoreUnavailable(_) => "store_unavailable",
        }
    }

    /// Empty input is a nudge, not a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, PracticeError::EmptyQuery)
    }
}

impl From<GateError> for PracticeError {
    fn from(e: GateError) -> Self {
        match e {
            GateError::EmptyQuery => PracticeError::EmptyQuery,
            GateError::DisallowedStatement => PracticeError::DisallowedStatement,
        }
    }
}

impl From<StoreError> for PracticeError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Engine(msg) => PracticeError::Engine(msg),
            other => PracticeError::StoreUnavailable(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutput {
    pub result: ResultSet,
    pub message: String,
}

#[derive(Clone)]
pub struct PracticeApp {
    store: Arc<dyn StoreBackend>,
}

impl PracticeApp {
    pub fn new(store: Arc<dyn StoreBackend>) -> Self {
        Self { store }
    }

    /// Seeds the store on first run. Returns true when it had to seed.
    pub fn bootstrap(&self) -> Result<bool, PracticeError> {
        let seeded = self.store.ensure_initialized()?;
        if seeded {
            tracing::info!("Created practice database with sample data");
        }
        Ok(seeded)
    }

    pub fn run(&self, session: &Session) -> Result<QueryOutput, PracticeError> {
        let approved = gate::authorize(&session.sql_input).map_err(|e| {
            tracing::warn!(reason = %e, "Query rejected by gate");
            PracticeError::from(e)
        })?;

        let result = self.store.execute(approved.as_str()).map_err(|e| {
            tracing::warn!(error = %e, "Query failed");
            PracticeError::from(e)
        })?;

        let message = format!("Returned {} rows", result.row_count());
        Ok(QueryOutput { result, message })
    }

    pub fn reset(&self) -> Result<&'static str, PracticeError> {
        self.store.reset()?;
        Ok(RESET_MESSAGE)
    }

    pub fn schema(&self) -> Result<Vec<TableSchema>, PracticeError> {
        Ok(self.store.schema_summary()?)
    }
}
