//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use rates_types::{CurrencyCode, DateRange, RateRecord, RateRepository};

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn currency(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn record(base: &str, date_ref: &str, cur: &str, rate: Option<f64>) -> RateRecord {
        RateRecord {
            base: currency(base),
            date_ref: date(date_ref),
            currency: currency(cur),
            rate,
        }
    }

    #[tokio::test]
    async fn test_insert_and_query_range() {
        let repo = setup_repo().await;

        repo.insert_rates(&[
            record("EUR", "2021-03-02", "USD", Some(1.4)),
            record("EUR", "2021-03-01", "USD", Some(1.2)),
            record("EUR", "2021-03-01", "GBP", Some(0.85)),
        ])
        .await
        .unwrap();

        let range = DateRange::new(date("2021-03-01"), date("2021-03-02")).unwrap();
        let rows = repo.query_range(range, &currency("EUR")).await.unwrap();

        // Ordered by date then currency.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].currency, currency("GBP"));
        assert_eq!(rows[0].date_ref, date("2021-03-01"));
        assert_eq!(rows[1].currency, currency("USD"));
        assert_eq!(rows[2].date_ref, date("2021-03-02"));
    }

    #[tokio::test]
    async fn test_query_range_bounds_are_inclusive() {
        let repo = setup_repo().await;

        repo.insert_rates(&[
            record("EUR", "2021-02-28", "USD", Some(1.1)),
            record("EUR", "2021-03-01", "USD", Some(1.2)),
            record("EUR", "2021-03-03", "USD", Some(1.3)),
            record("EUR", "2021-03-04", "USD", Some(1.4)),
        ])
        .await
        .unwrap();

        let range = DateRange::new(date("2021-03-01"), date("2021-03-03")).unwrap();
        let rows = repo.query_range(range, &currency("EUR")).await.unwrap();

        let dates: Vec<_> = rows.iter().map(|r| r.date_ref).collect();
        assert_eq!(dates, vec![date("2021-03-01"), date("2021-03-03")]);
    }

    #[tokio::test]
    async fn test_query_range_filters_base() {
        let repo = setup_repo().await;

        repo.insert_rates(&[
            record("EUR", "2021-03-01", "USD", Some(1.2)),
            record("GBP", "2021-03-01", "USD", Some(1.39)),
        ])
        .await
        .unwrap();

        let range = DateRange::single(date("2021-03-01"));
        let rows = repo.query_range(range, &currency("EUR")).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].base, currency("EUR"));
    }

    #[tokio::test]
    async fn test_delete_with_no_matches_is_noop() {
        let repo = setup_repo().await;

        repo.delete_rates_for(date("2021-03-01")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_date() {
        let repo = setup_repo().await;

        repo.insert_rates(&[
            record("EUR", "2021-03-01", "USD", Some(1.2)),
            record("GBP", "2021-03-01", "USD", Some(1.39)),
            record("EUR", "2021-03-02", "USD", Some(1.4)),
        ])
        .await
        .unwrap();

        // Deletion by date crosses bases.
        repo.delete_rates_for(date("2021-03-01")).await.unwrap();

        let range = DateRange::new(date("2021-03-01"), date("2021-03-02")).unwrap();
        let eur = repo.query_range(range, &currency("EUR")).await.unwrap();
        let gbp = repo.query_range(range, &currency("GBP")).await.unwrap();

        assert_eq!(eur.len(), 1);
        assert_eq!(eur[0].date_ref, date("2021-03-02"));
        assert!(gbp.is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_insert_replaces_day() {
        let repo = setup_repo().await;

        repo.insert_rates(&[record("EUR", "2021-03-01", "USD", Some(1.2))])
            .await
            .unwrap();

        repo.delete_rates_for(date("2021-03-01")).await.unwrap();
        repo.insert_rates(&[record("EUR", "2021-03-01", "USD", Some(1.25))])
            .await
            .unwrap();

        let range = DateRange::single(date("2021-03-01"));
        let rows = repo.query_range(range, &currency("EUR")).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rate, Some(1.25));
    }

    #[tokio::test]
    async fn test_insert_empty_batch_is_noop() {
        let repo = setup_repo().await;

        repo.insert_rates(&[]).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_average_mean_and_bounds() {
        let repo = setup_repo().await;

        repo.insert_rates(&[
            record("EUR", "2021-03-01", "USD", Some(1.2)),
            record("EUR", "2021-03-02", "USD", Some(1.4)),
        ])
        .await
        .unwrap();

        let range = DateRange::new(date("2021-03-01"), date("2021-03-02")).unwrap();
        let avg = repo
            .query_average(range, &currency("EUR"), &currency("USD"))
            .await
            .unwrap()
            .unwrap();

        assert!((avg.avg_rate - 1.3).abs() < 1e-9);
        assert_eq!(avg.begin_date, date("2021-03-01"));
        assert_eq!(avg.end_date, date("2021-03-02"));
        assert_eq!(avg.base, currency("EUR"));
        assert_eq!(avg.currency, currency("USD"));
    }

    #[tokio::test]
    async fn test_query_average_no_rows_is_none() {
        let repo = setup_repo().await;

        let range = DateRange::new(date("2021-03-01"), date("2021-03-02")).unwrap();
        let avg = repo
            .query_average(range, &currency("EUR"), &currency("USD"))
            .await
            .unwrap();

        assert!(avg.is_none());
    }

    #[tokio::test]
    async fn test_query_average_skips_null_rates() {
        let repo = setup_repo().await;

        repo.insert_rates(&[
            record("EUR", "2021-03-01", "USD", Some(1.2)),
            record("EUR", "2021-03-02", "USD", None),
            record("EUR", "2021-03-03", "USD", Some(1.4)),
        ])
        .await
        .unwrap();

        let range = DateRange::new(date("2021-03-01"), date("2021-03-03")).unwrap();
        let avg = repo
            .query_average(range, &currency("EUR"), &currency("USD"))
            .await
            .unwrap()
            .unwrap();

        // The NULL day drops out of both numerator and denominator.
        assert!((avg.avg_rate - 1.3).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_query_average_all_null_rates_is_none() {
        let repo = setup_repo().await;

        repo.insert_rates(&[record("EUR", "2021-03-01", "USD", None)])
            .await
            .unwrap();

        let range = DateRange::single(date("2021-03-01"));
        let avg = repo
            .query_average(range, &currency("EUR"), &currency("USD"))
            .await
            .unwrap();

        assert!(avg.is_none());
    }
}
