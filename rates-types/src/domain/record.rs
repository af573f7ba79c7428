//! Persisted rate rows and aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::CurrencyCode;

/// One persisted exchange-rate row, keyed by `(base, date_ref, currency)`.
///
/// `rate` is `None` when the pricing API lists the currency without a quote
/// for that day; such rows are excluded from averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Currency all quotes are expressed against.
    pub base: CurrencyCode,
    /// Calendar date the rates refer to.
    pub date_ref: NaiveDate,
    /// Quote currency.
    pub currency: CurrencyCode,
    pub rate: Option<f64>,
}

/// Result of the averaged-rate query for one `(base, currency)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAverage {
    pub base: CurrencyCode,
    pub currency: CurrencyCode,
    /// Earliest `date_ref` contributing to the average.
    pub begin_date: NaiveDate,
    /// Latest `date_ref` contributing to the average.
    pub end_date: NaiveDate,
    /// Unweighted mean over rows with a present rate.
    pub avg_rate: f64,
}
