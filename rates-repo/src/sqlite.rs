//! SQLite repository adapter.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use rates_types::{CurrencyCode, DateRange, RateAverage, RateRecord, RateRepository, RepoError};

use crate::types::{DbRateAverage, DbRateRow};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Idempotently creates the `rates_hist` table.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_rates_hist.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RateRepository for SqliteRepo {
    async fn insert_rates(&self, rows: &[RateRecord]) -> Result<(), RepoError> {
        if rows.is_empty() {
            return Ok(());
        }

        // One transaction per batch so a day's rows land atomically.
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        for row in rows {
            sqlx::query(
                r#"INSERT INTO rates_hist (base, date_ref, currency, rate) VALUES (?, ?, ?, ?)"#,
            )
            .bind(row.base.as_str())
            .bind(row.date_ref.to_string())
            .bind(row.currency.as_str())
            .bind(row.rate)
            .execute(&mut *db_tx)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        }

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        tracing::debug!(rows = rows.len(), "inserted rate rows");
        Ok(())
    }

    async fn delete_rates_for(&self, date_ref: NaiveDate) -> Result<(), RepoError> {
        let result = sqlx::query(r#"DELETE FROM rates_hist WHERE date_ref = ?"#)
            .bind(date_ref.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        tracing::debug!(
            %date_ref,
            rows = result.rows_affected(),
            "deleted rate rows for date"
        );
        Ok(())
    }

    async fn query_range(
        &self,
        range: DateRange,
        base: &CurrencyCode,
    ) -> Result<Vec<RateRecord>, RepoError> {
        let rows: Vec<DbRateRow> = sqlx::query_as(
            r#"SELECT base, date_ref, currency, rate
               FROM rates_hist
               WHERE date_ref BETWEEN ? AND ? AND base = ?
               ORDER BY date_ref, currency"#,
        )
        .bind(range.begin().to_string())
        .bind(range.end().to_string())
        .bind(base.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbRateRow::into_domain).collect()
    }

    async fn query_average(
        &self,
        range: DateRange,
        base: &CurrencyCode,
        currency: &CurrencyCode,
    ) -> Result<Option<RateAverage>, RepoError> {
        // AVG ignores NULL rates, so days without a quote drop out of both
        // numerator and denominator.
        let row: Option<DbRateAverage> = sqlx::query_as(
            r#"SELECT base, currency,
                      MIN(date_ref) AS begin_date,
                      MAX(date_ref) AS end_date,
                      AVG(rate) AS avg_rate
               FROM rates_hist
               WHERE currency = ? AND date_ref BETWEEN ? AND ? AND base = ?
               GROUP BY base, currency"#,
        )
        .bind(currency.as_str())
        .bind(range.begin().to_string())
        .bind(range.end().to_string())
        .bind(base.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        match row {
            Some(row) => row.into_domain(),
            None => Ok(None),
        }
    }
}
