//! Calendar operations.
//!
//! Month views always cover the full month (28-31 descriptors); week views
//! always cover exactly 7 days starting on Monday, regardless of the system
//! locale's default week start.

use chrono::{Datelike, Days, Local, Month, NaiveDate};

use super::error::CalendarError;
use super::types::{CalendarDay, MonthYear};

/// Formats a date as "<LongMonthName> <Year>" (e.g. "March 2025").
///
/// Month names are always English; the output round-trips through
/// [`parse_month_label`].
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Returns the label for the current month from the local wall clock.
///
/// Not cached: the value changes across a month boundary.
#[must_use]
pub fn current_month_label() -> String {
    month_label(today())
}

/// Returns one descriptor per day of the given month, in ascending order.
///
/// The sequence length always equals the month's day count (28-31),
/// including leap-year February.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the year cannot be
/// represented as a date.
pub fn days_in_month(month: Month, year: i32) -> Result<Vec<CalendarDay>, CalendarError> {
    let month_number = month.number_from_month();
    let first = NaiveDate::from_ymd_opt(year, month_number, 1)
        .ok_or(CalendarError::YearOutOfRange(year))?;

    // The first day of the following month stepped back one day lands on
    // the last day of the target month for any month length.
    let (next_year, next_month) = if month_number == 12 {
        (year + 1, 1)
    } else {
        (year, month_number + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or(CalendarError::YearOutOfRange(year))?;

    Ok(first
        .iter_days()
        .take(last.day() as usize)
        .map(CalendarDay::from_date)
        .collect())
}

/// Returns the 7 days of the week containing `date`, Monday first.
///
/// Sunday belongs to the week that started 6 days earlier.
#[must_use]
pub fn week_of(date: NaiveDate) -> Vec<CalendarDay> {
    let back = u64::from(date.weekday().num_days_from_monday());
    let monday = date - Days::new(back);
    monday.iter_days().take(7).map(CalendarDay::from_date).collect()
}

/// Returns the current week from the local wall clock, Monday first.
#[must_use]
pub fn current_week() -> Vec<CalendarDay> {
    week_of(today())
}

/// Returns true if `date` is the current local calendar day.
///
/// Compares day, month and year only; the ambient system timezone decides
/// where "today" falls, so behavior near midnight is the caller's concern.
#[must_use]
pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// Parses a "<MonthName> <Year>" label into its parts.
///
/// # Errors
///
/// Returns [`CalendarError::MalformedLabel`] unless the label is exactly
/// two space-separated tokens with a numeric year, and
/// [`CalendarError::UnknownMonth`] if the month name is not recognized.
pub fn parse_month_label(label: &str) -> Result<MonthYear, CalendarError> {
    let mut tokens = label.split(' ');
    let (Some(month_token), Some(year_token), None) =
        (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(CalendarError::MalformedLabel(label.to_string()));
    };

    let month = month_token
        .parse::<Month>()
        .map_err(|_| CalendarError::UnknownMonth(month_token.to_string()))?;
    let year = year_token
        .parse::<i32>()
        .map_err(|_| CalendarError::MalformedLabel(label.to_string()))?;

    Ok(MonthYear { month, year })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
