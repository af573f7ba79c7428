//! # Rates Repository
//!
//! Concrete repository implementation (adapter) for the exchange-rate
//! pipeline. This crate provides the SQLite adapter that implements the
//! `RateRepository` port.

pub mod sqlite;
mod types;

#[cfg(test)]
mod sqlite_tests;

pub use sqlite::SqliteRepo;

/// Build and initialize a repository from a database URL.
///
/// This function:
/// 1. Connects to the database (creating the file when missing)
/// 2. Runs the schema migration
/// 3. Returns a ready-to-use repo
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo("sqlite://rates_hist.db?mode=rwc").await?;
/// ```
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteRepo> {
    SqliteRepo::new(database_url).await
}
