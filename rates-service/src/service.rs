//! Load orchestration.
//!
//! Drives the per-day fetch → delete → insert loop through the repository
//! and source ports. Contains NO infrastructure logic.

use rates_types::{
    AppError, CurrencyCode, DateRange, DayOutcome, LoadReport, RateRepository, RateSource,
};

/// Per-day load orchestrator.
///
/// Generic over `R: RateRepository` and `S: RateSource` - the adapters are
/// injected at compile time, which keeps the loop testable with in-memory
/// doubles.
pub struct RateLoader<R: RateRepository, S: RateSource> {
    repo: R,
    source: S,
}

impl<R: RateRepository, S: RateSource> RateLoader<R, S> {
    /// Creates a new loader with the given adapters.
    pub fn new(repo: R, source: S) -> Self {
        Self { repo, source }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads every day of the inclusive range, one fetch at a time.
    ///
    /// Days with data are replaced wholesale (delete before insert), which
    /// makes re-runs idempotent. Days the source has no data for leave the
    /// store untouched and are recorded as such. Repository or transport
    /// failures abort the remainder of the run.
    pub async fn load_range(
        &self,
        range: DateRange,
        base: &CurrencyCode,
    ) -> Result<LoadReport, AppError> {
        let mut report = LoadReport::default();

        for day in range.days() {
            match self.source.fetch_day(day, base).await? {
                Some(rows) => {
                    self.repo.delete_rates_for(day).await?;
                    self.repo.insert_rates(&rows).await?;
                    tracing::info!(%day, rows = rows.len(), "loaded rates");
                    report.record(day, DayOutcome::Loaded { rows: rows.len() });
                }
                None => {
                    tracing::info!(%day, "no rates for day, store untouched");
                    report.record(day, DayOutcome::Unavailable);
                }
            }
        }

        Ok(report)
    }
}
