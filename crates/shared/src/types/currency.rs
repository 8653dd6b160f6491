//! Currency code type.
//!
//! Amounts themselves are plain `rust_decimal::Decimal` values; the code
//! travels alongside them as a separate parameter. Codes are open-ended
//! (any ISO 4217-like three-letter code), not a closed enum, because the
//! rate provider's table carries whatever currencies it quotes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a valid currency code.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid currency code: {0:?}")]
pub struct InvalidCurrencyCode(pub String);

/// ISO 4217-like currency code (e.g. "USD", "RWF").
///
/// Always stored uppercase; construction rejects anything that is not
/// exactly three ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CurrencyCode(String);

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl CurrencyCode {
    /// Creates a currency code, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCurrencyCode`] unless the input is exactly three
    /// ASCII letters.
    pub fn new(code: &str) -> Result<Self, InvalidCurrencyCode> {
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(InvalidCurrencyCode(code.to_string()))
        }
    }

    /// Returns the code as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = InvalidCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
