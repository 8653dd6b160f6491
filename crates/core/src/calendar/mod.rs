//! Calendar day sequences and month-year labels.
//!
//! Every "current ..." operation is a thin wrapper over an explicit-date
//! function; the ambient wall clock is read only at the public call
//! boundary so the actual logic stays deterministic under test.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::CalendarError;
pub use service::{
    current_month_label, current_week, days_in_month, is_today, month_label, parse_month_label,
    week_of,
};
pub use types::{CalendarDay, MonthYear};
