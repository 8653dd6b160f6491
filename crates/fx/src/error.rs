//! Exchange-rate error types.

use reqwest::StatusCode;
use sitebooks_shared::CurrencyCode;
use thiserror::Error;

/// Failures while talking to the rate provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {0}")]
    HttpStatus(StatusCode),

    /// Provider body flagged the request as failed.
    #[error("provider reported error: {0}")]
    Reported(String),
}

/// Raised when an exchange rate cannot be obtained for a currency pair.
#[derive(Debug, Error)]
pub enum ExchangeRateError {
    /// The provider lookup itself failed.
    #[error("rate lookup {from} -> {to} failed: {source}")]
    Lookup {
        /// Source currency code.
        from: CurrencyCode,
        /// Target currency code.
        to: CurrencyCode,
        /// Underlying provider failure.
        #[source]
        source: ProviderError,
    },

    /// The provider table had no entry for the target currency.
    #[error("no rate for {to} in provider table based on {from}")]
    RateUnavailable {
        /// Source currency code.
        from: CurrencyCode,
        /// Target currency code.
        to: CurrencyCode,
    },
}

impl ExchangeRateError {
    /// Returns the (source, target) currency pair this error refers to.
    #[must_use]
    pub fn currencies(&self) -> (&CurrencyCode, &CurrencyCode) {
        match self {
            Self::Lookup { from, to, .. } | Self::RateUnavailable { from, to } => (from, to),
        }
    }
}
