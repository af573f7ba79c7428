//! # Rates Fetch
//!
//! Typed HTTP client for the Fixer historical-rates API, implementing the
//! `RateSource` port. One request per reference date; "no data for this
//! day" (non-200 or `success: false`) is `Ok(None)`, not an error.

use std::collections::BTreeMap;
use std::env;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use rates_types::{CurrencyCode, FetchError, RateRecord, RateSource};

/// Environment variable holding the Fixer access key.
pub const TOKEN_ENV_VAR: &str = "FIXER_API_TOKEN";

/// Environment variable overriding the API base URL (tests, proxies).
pub const BASE_URL_ENV_VAR: &str = "FIXER_API_URL";

const DEFAULT_BASE_URL: &str = "http://data.fixer.io/api";

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

/// Fixer historical endpoint payload (the fields we consume).
///
/// `rates` keys arrive in a `BTreeMap` so normalized records come out in a
/// deterministic currency order.
#[derive(Debug, Deserialize)]
struct FixerResponse {
    success: bool,
    #[serde(default)]
    rates: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    date: Option<NaiveDate>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// Fixer API client.
pub struct FixerClient {
    base_url: String,
    access_key: String,
    http: Client,
}

impl FixerClient {
    /// Creates a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.into(),
            http: Client::new(),
        }
    }

    /// Creates a client from the environment.
    ///
    /// A missing access key is fatal for the whole run, so this fails at
    /// construction rather than on first request.
    pub fn from_env() -> Result<Self, FetchError> {
        let access_key = env::var(TOKEN_ENV_VAR)
            .map_err(|_| FetchError::Config(format!("missing {TOKEN_ENV_VAR} environment variable")))?;
        let base_url = env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, access_key))
    }

    /// Fetches the quotes for one reference date against `base`.
    ///
    /// GET `{base_url}/{YYYY-MM-DD}?access_key={token}&base={BASE}`
    pub async fn fetch_day(
        &self,
        date_ref: NaiveDate,
        base: &CurrencyCode,
    ) -> Result<Option<Vec<RateRecord>>, FetchError> {
        let url = format!("{}/{}", self.base_url, date_ref);

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("base", base.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            tracing::info!(%date_ref, status = %resp.status(), "no rates available for date");
            return Ok(None);
        }

        let payload: FixerResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        if !payload.success {
            tracing::info!(%date_ref, "provider reported no data for date");
            return Ok(None);
        }

        // The requested date is authoritative for the store key; a divergent
        // echoed date (weekend/holiday fallback) is only worth a warning.
        if let Some(echoed) = payload.date {
            if echoed != date_ref {
                tracing::warn!(%date_ref, %echoed, "provider echoed a different date");
            }
        }

        let records = payload
            .rates
            .into_iter()
            .map(|(code, rate)| {
                let currency = CurrencyCode::new(&code)
                    .map_err(|_| FetchError::Decode(format!("bad currency key {code:?}")))?;
                Ok(RateRecord {
                    base: base.clone(),
                    date_ref,
                    currency,
                    rate,
                })
            })
            .collect::<Result<Vec<_>, FetchError>>()?;

        Ok(Some(records))
    }
}

#[async_trait::async_trait]
impl RateSource for FixerClient {
    async fn fetch_day(
        &self,
        date_ref: NaiveDate,
        base: &CurrencyCode,
    ) -> Result<Option<Vec<RateRecord>>, FetchError> {
        FixerClient::fetch_day(self, date_ref, base).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
