//! Cross-checks against the RFC 5545 expander for the patterns where both
//! models agree.

use chrono::{NaiveDate, NaiveTime};
use kairos_core::options::RuleOptions;
use kairos_rule::Rule;
use kairos_test::ymd;
use rrule::{RRule, Tz, Unvalidated};

const LIMIT: u16 = 60;

fn expand_rrule(start: NaiveDate, rrule_text: &str) -> Vec<NaiveDate> {
    let dt_start = start.and_time(NaiveTime::MIN).and_utc().with_timezone(&Tz::UTC);
    let rrule: RRule<Unvalidated> = rrule_text.parse().expect("valid RRULE");
    let rrule_set = rrule.build(dt_start).expect("valid RRULE set");

    rrule_set
        .all(LIMIT)
        .dates
        .iter()
        .map(|dt| dt.date_naive())
        .collect()
}

fn expand_rule(start: NaiveDate, options: &RuleOptions) -> Vec<NaiveDate> {
    Rule::new(start, options)
        .expect("valid rule")
        .occurrences()
        .take(usize::from(LIMIT))
        .collect()
}

fn assert_parity(start: NaiveDate, options: &RuleOptions, rrule_text: &str) {
    let ours = expand_rule(start, options);
    let theirs = expand_rrule(start, rrule_text);

    assert_eq!(theirs.len(), usize::from(LIMIT), "{rrule_text}");
    assert_eq!(ours, theirs, "{rrule_text}");
}

#[test_log::test]
fn daily_intervals() {
    let start = ymd(2008, 8, 1);

    assert_parity(start, &RuleOptions::every("day"), "FREQ=DAILY");
    assert_parity(start, &RuleOptions::every_second("day"), "FREQ=DAILY;INTERVAL=2");
    assert_parity(start, &RuleOptions::every_nth("day", 10), "FREQ=DAILY;INTERVAL=10");
}

#[test]
fn weekly_intervals() {
    let start = ymd(2008, 8, 27);

    assert_parity(start, &RuleOptions::every("week"), "FREQ=WEEKLY");
    assert_parity(start, &RuleOptions::every_third("week"), "FREQ=WEEKLY;INTERVAL=3");
}

#[test]
fn every_other_wednesday() {
    // 2008-01-02 is a Wednesday, so both models open the cycle on it.
    assert_parity(
        ymd(2008, 1, 2),
        &RuleOptions::every_second("wednesday"),
        "FREQ=WEEKLY;INTERVAL=2;BYDAY=WE",
    );
}

#[test]
fn monthly_and_yearly_mid_month() {
    let start = ymd(2008, 3, 15);

    assert_parity(start, &RuleOptions::every("month"), "FREQ=MONTHLY");
    assert_parity(start, &RuleOptions::every_second("month"), "FREQ=MONTHLY;INTERVAL=2");
    assert_parity(start, &RuleOptions::every("year"), "FREQ=YEARLY");
}

#[test]
fn ordinal_weekdays_of_month() {
    // First and last Thursdays of January 2008.
    assert_parity(
        ymd(2008, 1, 3),
        &RuleOptions::every_first("thursday").of("month"),
        "FREQ=MONTHLY;BYDAY=1TH",
    );
    assert_parity(
        ymd(2008, 1, 31),
        &RuleOptions::every_last("thursday").of("month"),
        "FREQ=MONTHLY;BYDAY=-1TH",
    );
    assert_parity(
        ymd(2008, 1, 17),
        &RuleOptions::every_third("thursday").of("month"),
        "FREQ=MONTHLY;BYDAY=3TH",
    );
}

#[test]
fn weekend_and_workday() {
    assert_parity(
        ymd(2008, 1, 5),
        &RuleOptions::every("weekend"),
        "FREQ=WEEKLY;BYDAY=SA,SU",
    );
    assert_parity(
        ymd(2008, 1, 7),
        &RuleOptions::every("workday"),
        "FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR",
    );
}

#[test]
fn alternate_weekends_and_work_weeks() {
    assert_parity(
        ymd(2008, 1, 5),
        &RuleOptions::every_second("weekend"),
        "FREQ=WEEKLY;INTERVAL=2;BYDAY=SA,SU",
    );
    assert_parity(
        ymd(2008, 1, 7),
        &RuleOptions::every_second("workday"),
        "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,TU,WE,TH,FR",
    );
    assert_parity(
        ymd(2008, 1, 9),
        &RuleOptions::every_third("workday"),
        "FREQ=WEEKLY;INTERVAL=3;BYDAY=MO,TU,WE,TH,FR",
    );
}
