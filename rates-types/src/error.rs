//! Error types for the exchange-rate pipeline.

use chrono::NaiveDate;

/// Domain-level errors (invalid values, business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("Invalid date range: begin {begin} is after end {end}")]
    InvalidDateRange { begin: NaiveDate, end: NaiveDate },
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

/// Fetcher-level errors.
///
/// "No data for this day" is not an error - the source port models it as
/// `Ok(None)`. These variants cover real failures only.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Missing or unusable credentials. Fatal at client construction.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Application-level errors surfaced by the service layer.
///
/// The CLI matches on these to decide its output and exit code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => AppError::BadRequest(e.to_string()),
            RepoError::Database(e) => AppError::Storage(e),
            RepoError::Transaction(e) => AppError::Storage(e),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::Fetch(err.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
