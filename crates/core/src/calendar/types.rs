//! Calendar value objects.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Value object describing a single calendar day.
///
/// Produced in bulk (one per day of a month, or seven per week) and never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// 1-based day number within the month.
    pub day: u32,
    /// Abbreviated weekday name (e.g. "Mon").
    pub weekday: String,
    /// Calendar date; serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl CalendarDay {
    /// Builds the descriptor for a single date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            weekday: date.weekday().to_string(),
            date,
        }
    }
}

/// A parsed "<MonthName> <Year>" heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    /// Calendar month.
    pub month: Month,
    /// Calendar year.
    pub year: i32,
}
