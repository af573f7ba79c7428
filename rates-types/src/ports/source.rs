//! Rate source port.
//!
//! This trait defines the interface for daily rate providers.
//! Implementations can be HTTP clients, stub providers, etc.

use chrono::NaiveDate;

use crate::domain::{CurrencyCode, RateRecord};
use crate::error::FetchError;

/// Single-day retrieval port.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Fetches all quotes for `date_ref` against `base`.
    ///
    /// `Ok(None)` means the provider has no data for that day (soft
    /// failure); callers must not write anything for the day in that case.
    /// Every returned record is stamped with the requested `date_ref` and
    /// `base`.
    async fn fetch_day(
        &self,
        date_ref: NaiveDate,
        base: &CurrencyCode,
    ) -> Result<Option<Vec<RateRecord>>, FetchError>;
}
