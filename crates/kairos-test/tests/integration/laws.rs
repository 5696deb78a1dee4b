//! Properties that must hold for every rule, checked over a spread of rule
//! shapes and a multi-year window of dates.

use kairos_core::options::RuleOptions;
use kairos_rule::Rule;
use kairos_test::{assert_extensionally_equal, ymd};

fn sample_rules() -> Vec<Rule> {
    let unbounded = [
        ("2008-01-31", RuleOptions::every("month")),
        ("2008-02-29", RuleOptions::every("year")),
        ("2008-03-05", RuleOptions::every_third("week")),
        ("2008-01-02", RuleOptions::every_second("tuesday")),
        ("2008-01-01", RuleOptions::every_nth("day", 5)),
        ("epoch", RuleOptions::every_last("sunday").of("month")),
        ("epoch", RuleOptions::every_first("monday").of("year")),
        ("epoch", RuleOptions::every("weekend")),
        ("2008-01-07", RuleOptions::every("workday")),
        ("2008-01-06", RuleOptions::every_second("weekend")),
        ("2008-01-09", RuleOptions::every_third("workday")),
    ];
    let bounded = [
        ("2008-02-01", RuleOptions::every("day").with_until("2008-05-31")),
        ("2008-01-04", RuleOptions::every_second("week").with_until("2009-01-01")),
    ];

    unbounded
        .into_iter()
        .chain(bounded)
        .map(|(start, options)| Rule::new(start, &options).expect("valid rule"))
        .collect()
}

fn window() -> impl Iterator<Item = chrono::NaiveDate> {
    ymd(2007, 12, 1).iter_days().take_while(|d| *d <= ymd(2010, 3, 1))
}

#[test_log::test]
fn nothing_before_start_or_after_until() {
    for rule in sample_rules() {
        for date in window() {
            if date < rule.start_date() || rule.until().is_some_and(|until| date > until) {
                assert!(!rule.recurs_on(date), "{rule:?} recurs on {date}");
            }
        }
    }
}

#[test]
fn double_complement() {
    for rule in sample_rules() {
        let twice = rule.clone().complement().complement();
        assert_extensionally_equal(&twice, &rule, ymd(2007, 12, 1), ymd(2010, 3, 1));
    }
}

#[test]
fn de_morgan_and_commutativity() {
    let rules = sample_rules();

    for a in &rules {
        for b in rules.iter().step_by(3) {
            let lhs = a.clone().join(b.clone()).complement();
            let rhs = a.clone().complement().intersect(b.clone().complement());
            assert_extensionally_equal(&lhs, &rhs, ymd(2007, 12, 1), ymd(2009, 1, 1));

            assert_extensionally_equal(
                &a.clone().join(b.clone()),
                &b.clone().join(a.clone()),
                ymd(2007, 12, 1),
                ymd(2009, 1, 1),
            );
            assert_extensionally_equal(
                &a.clone().intersect(b.clone()),
                &b.clone().intersect(a.clone()),
                ymd(2007, 12, 1),
                ymd(2009, 1, 1),
            );
        }
    }
}

#[test]
fn iteration_yields_exactly_the_matching_dates() {
    for rule in sample_rules() {
        let from = ymd(2007, 12, 1);
        let to = ymd(2010, 3, 1);

        let iterated: Vec<_> = rule.occurrences_between(from, to).collect();
        let scanned: Vec<_> = window().filter(|d| rule.recurs_on(*d)).collect();

        assert_eq!(iterated, scanned, "{rule:?}");
    }
}
