//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, in-memory test doubles) implement this trait.

use chrono::NaiveDate;

use crate::domain::{CurrencyCode, DateRange, RateAverage, RateRecord};
use crate::error::RepoError;

/// Persistence port for the `rates_hist` table.
///
/// Uniqueness of `(base, date_ref, currency)` is maintained by caller
/// discipline: the load loop deletes a day's rows before re-inserting them.
/// Implementations are not required to enforce the key at write time.
#[async_trait::async_trait]
pub trait RateRepository: Send + Sync + 'static {
    /// Appends all given rows.
    async fn insert_rates(&self, rows: &[RateRecord]) -> Result<(), RepoError>;

    /// Deletes every row for `date_ref`, regardless of base or currency.
    /// Succeeds as a no-op when nothing matches.
    async fn delete_rates_for(&self, date_ref: NaiveDate) -> Result<(), RepoError>;

    /// Rows with `date_ref` inside the inclusive range and matching `base`,
    /// ordered by date then currency.
    async fn query_range(
        &self,
        range: DateRange,
        base: &CurrencyCode,
    ) -> Result<Vec<RateRecord>, RepoError>;

    /// Mean rate (plus the contributing date bounds) for one
    /// `(base, currency)` pair over the range. `None` when no row in range
    /// carries a usable rate.
    async fn query_average(
        &self,
        range: DateRange,
        base: &CurrencyCode,
        currency: &CurrencyCode,
    ) -> Result<Option<RateAverage>, RepoError>;
}
