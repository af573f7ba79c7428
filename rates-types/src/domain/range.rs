//! Inclusive calendar-date range.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// An inclusive range of calendar dates `[begin, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    begin: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `begin > end`.
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if begin > end {
            return Err(DomainError::InvalidDateRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Single-day range.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            begin: day,
            end: day,
        }
    }

    pub fn begin(&self) -> NaiveDate {
        self.begin
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range (at least 1).
    pub fn num_days(&self) -> u64 {
        (self.end - self.begin).num_days() as u64 + 1
    }

    /// Iterates the days of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        std::iter::successors(Some(self.begin), move |d| {
            d.checked_add_days(Days::new(1)).filter(|next| *next <= end)
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}
