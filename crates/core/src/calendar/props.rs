//! Property-based tests for calendar operations.

use chrono::{Datelike, Month, NaiveDate};
use proptest::prelude::*;

use super::service::{days_in_month, week_of};

/// Strategy to generate arbitrary dates between 1900 and 2200.
fn arbitrary_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy to generate arbitrary months.
fn arbitrary_month() -> impl Strategy<Value = Month> {
    (1u8..=12).prop_map(|m| Month::try_from(m).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A week always has exactly 7 consecutive ascending days starting on
    /// Monday, for any anchor date.
    #[test]
    fn prop_week_is_seven_days_from_monday(date in arbitrary_date()) {
        let week = week_of(date);
        prop_assert_eq!(week.len(), 7);
        prop_assert_eq!(week[0].weekday.as_str(), "Mon");
        for pair in week.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + chrono::Days::new(1));
        }
        // The anchor date itself is inside the week
        prop_assert!(week.iter().any(|d| d.date == date));
    }

    /// A month view covers the whole month: 28-31 entries, day numbers
    /// matching position, last entry on the month's final day.
    #[test]
    fn prop_month_view_covers_month(month in arbitrary_month(), year in 1900i32..2200) {
        let days = days_in_month(month, year).unwrap();
        prop_assert!((28..=31).contains(&days.len()));
        for (i, day) in days.iter().enumerate() {
            prop_assert_eq!(day.day as usize, i + 1);
            prop_assert_eq!(day.date.day(), day.day);
        }
        let last = days.last().unwrap();
        prop_assert_eq!(last.day as usize, days.len());
    }
}
