//! Proleptic Gregorian calendar arithmetic used by the membership tests.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for a month outside 1..=12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Clamps an anchor day-of-month to the last day of the given month.
#[must_use]
pub fn clamp_day(day: u32, year: i32, month: u32) -> u32 {
    day.min(days_in_month(year, month))
}

/// Signed whole days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Signed calendar months from the month of `from` to the month of `to`,
/// ignoring the day of month.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (i64::from(to.year()) - i64::from(from.year())) * 12 + i64::from(to.month())
        - i64::from(from.month())
}

/// Days from a `from` weekday forward to the next `to` weekday (0..=6).
#[must_use]
pub fn days_until_weekday(from: Weekday, to: Weekday) -> i64 {
    (i64::from(to.num_days_from_sunday()) + 7 - i64::from(from.num_days_from_sunday())) % 7
}

/// `date` moved by `days`, saturating at the ends of the representable
/// calendar.
#[must_use]
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Monday of the week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    shift_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// One-based index of `date` among the same weekdays of its month.
#[must_use]
pub fn weekday_position_in_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// One-based index of `date` among the same weekdays of its year.
#[must_use]
pub fn weekday_position_in_year(date: NaiveDate) -> u32 {
    (date.ordinal() - 1) / 7 + 1
}

/// Whether no later day with the same weekday exists in the month of `date`.
#[must_use]
pub fn is_last_weekday_of_month(date: NaiveDate) -> bool {
    date.day() + 7 > days_in_month(date.year(), date.month())
}

/// Whether no later day with the same weekday exists in the year of `date`.
#[must_use]
pub fn is_last_weekday_of_year(date: NaiveDate) -> bool {
    date.ordinal() + 7 > days_in_year(date.year())
}
