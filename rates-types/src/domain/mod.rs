//! Domain models for the exchange-rate pipeline.

pub mod currency;
pub mod range;
pub mod record;

pub use currency::CurrencyCode;
pub use range::DateRange;
pub use record::{RateAverage, RateRecord};
