//! Exchange-rate provider client and conversion service for Sitebooks.
//!
//! Two entry points with deliberately different error contracts:
//!
//! - [`FxService::convert`] degrades and continues: every failure path
//!   returns the original amount and logs a diagnostic. Used where an
//!   unconverted amount is an acceptable degraded experience (report and
//!   budget displays).
//! - [`FxService::rate`] fails fast with [`ExchangeRateError`]. Used where
//!   the caller must know a rate could not be obtained.
//!
//! Rates are fetched fresh on every call; there is no cache and no retry.

pub mod error;
pub mod provider;
pub mod service;


pub use error::{ExchangeRateError, ProviderError};
pub use provider::{HttpRateProvider, RateSource, RateTable};
pub use service::FxService;
