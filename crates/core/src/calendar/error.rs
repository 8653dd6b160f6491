//! Calendar error types.

use thiserror::Error;

/// Calendar-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Year is outside the range chrono can represent.
    #[error("year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    /// Month name was not recognized.
    #[error("unrecognized month name: {0:?}")]
    UnknownMonth(String),

    /// Label was not of the form "<MonthName> <Year>".
    #[error("malformed month-year label: {0:?}")]
    MalformedLabel(String),
}
