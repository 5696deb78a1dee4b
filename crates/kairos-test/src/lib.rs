//! kairos - integration test support.
//!
//! Re-exports the workspace crates and holds the date helpers shared by the
//! integration tests.

pub use kairos_core;
pub use kairos_rule;

use chrono::NaiveDate;
use kairos_rule::Rule;

/// ## Summary
/// Builds a date from a known-valid triple.
///
/// ## Panics
/// Panics if the triple is not a calendar date; test fixtures only.
#[must_use]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}

/// ## Summary
/// Returns the days of `month` in `days` on which `rule` recurs.
#[must_use]
pub fn matching_days(
    rule: &Rule,
    year: i32,
    month: u32,
    days: impl IntoIterator<Item = u32>,
) -> Vec<u32> {
    days.into_iter()
        .filter(|day| rule.recurs_on(ymd(year, month, *day)))
        .collect()
}

/// ## Summary
/// Asserts that two rules agree on every day in `[from, to]`.
///
/// ## Panics
/// Panics on the first date where the rules disagree.
pub fn assert_extensionally_equal(lhs: &Rule, rhs: &Rule, from: NaiveDate, to: NaiveDate) {
    let mut date = from;
    while date <= to {
        assert_eq!(
            lhs.recurs_on(date),
            rhs.recurs_on(date),
            "rules disagree on {date}"
        );
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
}
