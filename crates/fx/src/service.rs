//! Conversion and rate-lookup service.

use rust_decimal::Decimal;
use sitebooks_core::currency::{FX_DECIMAL_PLACES, convert_amount};
use sitebooks_shared::CurrencyCode;
use sitebooks_shared::config::FxConfig;
use tracing::{error, warn};

use crate::error::ExchangeRateError;
use crate::provider::{HttpRateProvider, RateSource};

/// Currency conversion service backed by a rate source.
pub struct FxService<S> {
    source: S,
}

impl FxService<HttpRateProvider> {
    /// Creates a service talking to the configured HTTP rate provider.
    #[must_use]
    pub fn from_config(config: &FxConfig) -> Self {
        Self::new(HttpRateProvider::new(config))
    }
}

impl<S: RateSource> FxService<S> {
    /// Creates a service over an arbitrary rate source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Looks up the exchange rate from `from` to `to`. Fail-fast.
    ///
    /// An identity pair returns `1` without touching the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeRateError`] carrying both currency codes if the
    /// provider lookup fails or the table has no entry for `to`.
    pub async fn rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<Decimal, ExchangeRateError> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        let table = self
            .source
            .latest_rates(from)
            .await
            .map_err(|source| ExchangeRateError::Lookup {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;

        table
            .rate_for(to)
            .ok_or_else(|| ExchangeRateError::RateUnavailable {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Converts `amount` from `from` to `to`. Degrade-and-continue.
    ///
    /// Never fails: an identity pair returns `amount` unchanged without a
    /// provider call, and every failure path returns the original amount
    /// after logging a diagnostic. On success the result is
    /// `amount * rate` rounded to [`FX_DECIMAL_PLACES`] with banker's
    /// rounding.
    pub async fn convert(
        &self,
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Decimal {
        if from == to {
            return amount;
        }

        match self.rate(from, to).await {
            Ok(rate) => convert_amount(amount, rate, FX_DECIMAL_PLACES),
            Err(err @ ExchangeRateError::RateUnavailable { .. }) => {
                warn!(%amount, currency = %to, "{err}; returning unconverted amount");
                amount
            }
            Err(err) => {
                error!(%amount, currency = %to, "currency conversion failed: {err}; returning unconverted amount");
                amount
            }
        }
    }
}
