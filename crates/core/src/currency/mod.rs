//! Conversion arithmetic for multi-currency amounts.

pub mod conversion;

#[cfg(test)]
mod props;

pub use conversion::{FX_DECIMAL_PLACES, convert_amount, round_amount};
