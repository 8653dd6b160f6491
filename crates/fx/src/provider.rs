//! Rate provider client.
//!
//! The provider is queried as `GET <base>[/<api_key>]/latest/<FROM>` and
//! answers with a JSON body carrying a `result` flag and a
//! `conversion_rates` map of currency code to rate relative to `FROM`.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use sitebooks_shared::CurrencyCode;
use sitebooks_shared::config::FxConfig;

use crate::error::ProviderError;

/// Ephemeral table of exchange rates relative to a base currency.
///
/// Fetched fresh on every lookup; no freshness invariant is enforced
/// beyond "fetched now".
#[derive(Debug, Clone)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates a table of rates relative to `base`.
    #[must_use]
    pub fn new(base: CurrencyCode, rates: HashMap<String, Decimal>) -> Self {
        Self { base, rates }
    }

    /// The base currency all rates are relative to.
    #[must_use]
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Looks up the rate for a target currency, if the provider quoted it.
    #[must_use]
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(code.as_str()).copied()
    }
}

/// Source of exchange-rate tables. Seam for stubbing in tests.
pub trait RateSource: Send + Sync {
    /// Fetches the latest rate table for `base`. One attempt, no retry.
    fn latest_rates(
        &self,
        base: &CurrencyCode,
    ) -> impl Future<Output = Result<RateTable, ProviderError>> + Send;
}

/// Wire shape of the provider's `latest` endpoint.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// "success" or "error".
    result: String,
    /// Currency code -> rate relative to the requested base.
    #[serde(default)]
    conversion_rates: HashMap<String, Decimal>,
    /// Machine-readable failure kind, present when `result` is "error".
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

/// HTTP client for the external rate provider.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRateProvider {
    /// Creates a provider client from configuration.
    #[must_use]
    pub fn new(config: &FxConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn latest_url(&self, base: &CurrencyCode) -> String {
        match &self.api_key {
            Some(key) => format!("{}/{key}/latest/{base}", self.base_url),
            None => format!("{}/latest/{base}", self.base_url),
        }
    }
}

impl RateSource for HttpRateProvider {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError> {
        let response = self.client.get(self.latest_url(base)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus(status));
        }

        let body: LatestRatesResponse = response.json().await?;
        if body.result != "success" {
            return Err(ProviderError::Reported(
                body.error_type.unwrap_or(body.result),
            ));
        }

        Ok(RateTable::new(base.clone(), body.conversion_rates))
    }
}
