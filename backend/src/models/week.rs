//! Week arithmetic helpers.
//!
//! Weeks start on Monday throughout the crate. Biweekly and monthly
//! cadences are phased against a fixed Monday anchor so on-weeks are
//! stable across runs and across machines.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Days-from-CE of 1970-01-05, the Monday used as the cadence anchor.
const ANCHOR_MONDAY_DAYS_FROM_CE: i64 = 719_167;

/// The Monday of the week containing `date`.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Whole weeks between the anchor Monday and `week_start`.
///
/// Negative for weeks before the anchor. The result is exact when
/// `week_start` is a Monday, which every caller guarantees.
pub fn week_offset(week_start: NaiveDate) -> i64 {
    (week_start.num_days_from_ce() as i64 - ANCHOR_MONDAY_DAYS_FROM_CE).div_euclid(7)
}

/// The concrete date of `weekday` within the week starting at `week_start`.
pub fn date_for(week_start: NaiveDate, weekday: Weekday) -> NaiveDate {
    week_start + Duration::days(weekday.num_days_from_monday() as i64)
}

/// All weekdays in Monday-first order.
pub fn weekdays_monday_first() -> [Weekday; 7] {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
}

/// Full English name of a weekday, for views and logs.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Sort Monday-first and drop duplicates in place.
pub fn sort_monday_first(days: &mut Vec<Weekday>) {
    days.sort_by_key(|d| d.num_days_from_monday());
    days.dedup();
}

#[cfg(test)]
#[path = "week_tests.rs"]
mod week_tests;
