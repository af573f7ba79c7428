//! Load-run outcome types crossing the service boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What happened to a single day of a load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOutcome {
    /// Rows for the day were replaced with `rows` freshly fetched ones.
    Loaded { rows: usize },
    /// The source had no data; the store was left untouched for this day.
    Unavailable,
}

/// Per-day outcomes of one load run, in range order.
///
/// A run that returns a report completed every day; hard failures abort the
/// run with an error instead of appearing here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub days: Vec<(NaiveDate, DayOutcome)>,
}

impl LoadReport {
    pub fn record(&mut self, date: NaiveDate, outcome: DayOutcome) {
        self.days.push((date, outcome));
    }

    /// Number of days whose rows were replaced.
    pub fn loaded_days(&self) -> usize {
        self.days
            .iter()
            .filter(|(_, o)| matches!(o, DayOutcome::Loaded { .. }))
            .count()
    }

    /// Number of days the source had no data for.
    pub fn unavailable_days(&self) -> usize {
        self.days
            .iter()
            .filter(|(_, o)| matches!(o, DayOutcome::Unavailable))
            .count()
    }

    /// Total rows written across the run.
    pub fn rows_written(&self) -> usize {
        self.days
            .iter()
            .map(|(_, o)| match o {
                DayOutcome::Loaded { rows } => *rows,
                DayOutcome::Unavailable => 0,
            })
            .sum()
    }
}
