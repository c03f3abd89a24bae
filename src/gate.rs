//! Allow-list check that keeps learner input to read queries.
//!
//! Only the leading keyword is inspected. The text is not parsed, so stacked
//! statements after a leading `select` are not detected here; the store runs
//! learner queries on a read-only connection.

use thiserror::Error;

const READ_KEYWORD: &str = "select";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Please enter a SQL query.")]
    EmptyQuery,
    #[error("Only SELECT queries are allowed in this beginner app (for safety).")]
    DisallowedStatement,
}

/// Query text that passed the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedQuery(String);

impl ApprovedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn authorize(raw: &str) -> Result<ApprovedQuery, GateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GateError::EmptyQuery);
    }

    let query = trimmed.strip_suffix(';').unwrap_or(trimmed).trim();

    let starts_with_select = query
        .get(..READ_KEYWORD.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(READ_KEYWORD))
        .unwrap_or(false);
    if !starts_with_select {
        return Err(GateError::DisallowedStatement);
    }

    Ok(ApprovedQuery(query.to_string()))
}
