//! Database row structs mapped into domain types.
//!
//! SQLite stores dates as ISO `YYYY-MM-DD` text; parsing back into
//! `NaiveDate` happens here so the rest of the crate only sees domain types.

use sqlx::FromRow;

use rates_types::{CurrencyCode, RateAverage, RateRecord, RepoError};

/// Rate row from the database.
#[derive(FromRow)]
pub struct DbRateRow {
    pub base: String,
    pub date_ref: String,
    pub currency: String,
    pub rate: Option<f64>,
}

impl DbRateRow {
    pub fn into_domain(self) -> Result<RateRecord, RepoError> {
        Ok(RateRecord {
            base: parse_currency(&self.base)?,
            date_ref: parse_date(&self.date_ref)?,
            currency: parse_currency(&self.currency)?,
            rate: self.rate,
        })
    }
}

/// Grouped-average row from the database.
///
/// `avg_rate` is NULL when the group exists but every rate in range is NULL;
/// that case maps to "no result", same as an empty group.
#[derive(FromRow)]
pub struct DbRateAverage {
    pub base: String,
    pub currency: String,
    pub begin_date: String,
    pub end_date: String,
    pub avg_rate: Option<f64>,
}

impl DbRateAverage {
    pub fn into_domain(self) -> Result<Option<RateAverage>, RepoError> {
        let Some(avg_rate) = self.avg_rate else {
            return Ok(None);
        };

        Ok(Some(RateAverage {
            base: parse_currency(&self.base)?,
            currency: parse_currency(&self.currency)?,
            begin_date: parse_date(&self.begin_date)?,
            end_date: parse_date(&self.end_date)?,
            avg_rate,
        }))
    }
}

fn parse_currency(s: &str) -> Result<CurrencyCode, RepoError> {
    CurrencyCode::new(s).map_err(RepoError::Domain)
}

fn parse_date(s: &str) -> Result<chrono::NaiveDate, RepoError> {
    s.parse()
        .map_err(|e| RepoError::Database(format!("invalid date_ref {s:?}: {e}")))
}
