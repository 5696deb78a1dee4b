use chrono::{Datelike, NaiveDate, Weekday};
use kairos_core::options::RuleOptions;
use kairos_rule::Rule;
use kairos_test::ymd;

fn rule(start: &str, options: &RuleOptions) -> Rule {
    Rule::new(start, options).expect("valid rule")
}

#[test_log::test]
fn yields_every_second_day() {
    let r = rule("2008-08-01", &RuleOptions::every_second("day"));

    let dates: Vec<_> = r.occurrences().take(3).collect();

    assert_eq!(dates, vec![ymd(2008, 8, 1), ymd(2008, 8, 3), ymd(2008, 8, 5)]);
}

#[test]
fn weekly_iteration_keeps_the_starting_weekday() {
    let r = rule("2008-08-27", &RuleOptions::every("week"));

    let dates: Vec<_> = r.occurrences().take(4).collect();

    assert_eq!(
        dates,
        vec![ymd(2008, 8, 27), ymd(2008, 9, 3), ymd(2008, 9, 10), ymd(2008, 9, 17)]
    );
    assert!(dates.iter().all(|d| d.weekday() == Weekday::Wed));
}

#[test]
fn every_sunday_and_every_wednesday() {
    let sundays: Vec<_> = rule("2008-08-01", &RuleOptions::every("sunday"))
        .occurrences()
        .take(10)
        .collect();
    let wednesdays: Vec<_> = rule("2008-08-01", &RuleOptions::every("wednesday"))
        .occurrences()
        .take(10)
        .collect();

    assert_eq!(sundays.first(), Some(&ymd(2008, 8, 3)));
    assert_eq!(sundays.last(), Some(&ymd(2008, 10, 5)));
    assert!(sundays.iter().all(|d| d.weekday() == Weekday::Sun));
    assert!(sundays.windows(2).all(|w| (w[1] - w[0]).num_days() == 7));

    assert_eq!(wednesdays.first(), Some(&ymd(2008, 8, 6)));
    assert_eq!(wednesdays.last(), Some(&ymd(2008, 10, 8)));
    assert!(wednesdays.iter().all(|d| d.weekday() == Weekday::Wed));
}

#[test]
fn month_end_anchor_clamps_in_short_months() {
    let r = rule("2008-01-31", &RuleOptions::every("month"));

    let dates: Vec<(u32, u32)> = r
        .occurrences()
        .take(6)
        .map(|d| (d.day(), d.month()))
        .collect();

    assert_eq!(dates, vec![(31, 1), (29, 2), (31, 3), (30, 4), (31, 5), (30, 6)]);
}

#[test]
fn until_ends_iteration() {
    let r = rule(
        "2008-08-27",
        &RuleOptions::every_second("week").with_until("2008-10-1"),
    );

    let dates: Vec<_> = r.occurrences().collect();

    assert_eq!(dates, vec![ymd(2008, 8, 27), ymd(2008, 9, 10), ymd(2008, 9, 24)]);
}

#[test]
fn iteration_restarts_from_the_beginning() {
    let r = rule("2008-08-01", &RuleOptions::every_third("day"));

    let first: Vec<_> = r.occurrences().take(5).collect();
    let second: Vec<_> = r.occurrences().take(5).collect();
    let via_ref: Vec<NaiveDate> = (&r).into_iter().take(5).collect();

    assert_eq!(first, second);
    assert_eq!(first, via_ref);
}

#[test]
fn independent_cursors_over_one_rule() {
    let r = rule("2008-08-01", &RuleOptions::every("day"));

    let mut a = r.occurrences();
    let mut b = r.occurrences();

    assert_eq!(a.next(), Some(ymd(2008, 8, 1)));
    assert_eq!(a.next(), Some(ymd(2008, 8, 2)));
    assert_eq!(b.next(), Some(ymd(2008, 8, 1)));
    assert_eq!(a.cursor(), Some(ymd(2008, 8, 3)));
}

#[test]
fn composite_iteration_in_a_window() {
    let a = rule("2008-08-01", &RuleOptions::every_second("day"));
    let b = rule("2008-08-01", &RuleOptions::every_third("day"));

    let dates: Vec<u32> = (a & b)
        .occurrences_between(ymd(2008, 8, 1), ymd(2008, 8, 31))
        .map(|d| d.day())
        .collect();

    assert_eq!(dates, vec![1, 7, 13, 19, 25, 31]);
}

#[test]
fn workdays_from_a_weekend_date() {
    let r = rule("2008-08-02", &RuleOptions::every("workday"));

    let dates: Vec<u32> = r.occurrences().take(6).map(|d| d.day()).collect();

    assert_eq!(dates, vec![4, 5, 6, 7, 8, 11]);
}
