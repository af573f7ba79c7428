//! Read-only report views: pivot and average.
//!
//! The views query the store directly and never mutate it; they reflect
//! whatever is persisted, whether or not a load just ran.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;

use rates_types::{AppError, CurrencyCode, DateRange, RateAverage, RateRecord, RateRepository};

/// Historical view: pivoted currency × date table over the range.
pub async fn historical<R: RateRepository>(
    repo: &R,
    range: DateRange,
    base: &CurrencyCode,
) -> Result<RateTable, AppError> {
    let rows = repo.query_range(range, base).await?;
    Ok(RateTable::from_records(&rows))
}

/// Average view: mean rate for one `(base, currency)` pair over the range.
pub async fn average<R: RateRepository>(
    repo: &R,
    range: DateRange,
    base: &CurrencyCode,
    currency: &CurrencyCode,
) -> Result<Option<RateAverage>, AppError> {
    repo.query_average(range, base, currency)
        .await
        .map_err(Into::into)
}

/// Pivot of row-per-(currency, date) records into a currency × date matrix.
///
/// Rows and columns are sorted; cells with no persisted rate stay empty,
/// never zero. Renders as a markdown-style table via `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    dates: Vec<NaiveDate>,
    rows: Vec<(CurrencyCode, Vec<Option<f64>>)>,
}

impl RateTable {
    /// Builds the pivot from query rows.
    pub fn from_records(records: &[RateRecord]) -> Self {
        let dates: BTreeSet<NaiveDate> = records.iter().map(|r| r.date_ref).collect();
        let dates: Vec<NaiveDate> = dates.into_iter().collect();

        let mut cells: BTreeMap<&CurrencyCode, BTreeMap<NaiveDate, f64>> = BTreeMap::new();
        for record in records {
            if let Some(rate) = record.rate {
                cells.entry(&record.currency).or_default().insert(record.date_ref, rate);
            } else {
                cells.entry(&record.currency).or_default();
            }
        }

        let rows = cells
            .into_iter()
            .map(|(currency, by_date)| {
                let row = dates.iter().map(|d| by_date.get(d).copied()).collect();
                (currency.clone(), row)
            })
            .collect();

        Self { dates, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Date columns in ascending order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Currency rows in ascending order, each cell aligned with `dates()`.
    pub fn rows(&self) -> &[(CurrencyCode, Vec<Option<f64>>)] {
        &self.rows
    }

    /// Cell lookup.
    pub fn rate(&self, currency: &CurrencyCode, date: NaiveDate) -> Option<f64> {
        let col = self.dates.iter().position(|d| *d == date)?;
        let (_, row) = self.rows.iter().find(|(c, _)| c == currency)?;
        row[col]
    }
}

impl fmt::Display for RateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = vec!["currency".to_string()];
        header.extend(self.dates.iter().map(|d| d.to_string()));

        let mut lines: Vec<Vec<String>> = Vec::with_capacity(self.rows.len());
        for (currency, row) in &self.rows {
            let mut line = vec![currency.to_string()];
            line.extend(row.iter().map(|cell| match cell {
                Some(rate) => format_rate(*rate),
                None => String::new(),
            }));
            lines.push(line);
        }

        write_table(f, &header, &lines)
    }
}

/// Renders the averaged-rate view; a `None` result becomes a header-only
/// table rather than an error.
pub fn render_average(avg: Option<&RateAverage>) -> String {
    let header: Vec<String> = ["base", "currency", "begin_date", "end_date", "avg_rate"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let lines: Vec<Vec<String>> = avg
        .map(|a| {
            vec![vec![
                a.base.to_string(),
                a.currency.to_string(),
                a.begin_date.to_string(),
                a.end_date.to_string(),
                format_rate(a.avg_rate),
            ]]
        })
        .unwrap_or_default();

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_table(&mut out, &header, &lines);
    out
}

fn format_rate(rate: f64) -> String {
    format!("{rate:.6}")
}

fn write_table<W: fmt::Write + ?Sized>(
    out: &mut W,
    header: &[String],
    lines: &[Vec<String>],
) -> fmt::Result {
    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for line in lines {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    write_row(out, header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;
    for line in lines {
        write_row(out, line, &widths)?;
    }
    Ok(())
}

fn write_row<W: fmt::Write + ?Sized>(
    out: &mut W,
    cells: &[String],
    widths: &[usize],
) -> fmt::Result {
    for (cell, &width) in cells.iter().zip(widths) {
        write!(out, "| {cell:<width$} ")?;
    }
    writeln!(out, "|")
}
