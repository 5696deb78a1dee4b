use kairos_core::options::RuleOptions;
use kairos_rule::error::RuleError;
use kairos_rule::{Rule, Schedule};
use kairos_test::ymd;

#[test_log::test]
fn schedule_survives_a_json_round_trip() {
    let schedule = Schedule::new(
        "2008-08-27",
        RuleOptions::every_third("day").with_until("2008-12-31"),
    )
    .expect("valid schedule");

    let json = schedule.to_json().expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["start"], "2008-08-27");
    assert_eq!(value["options"]["every_third"], "day");
    assert!(value["options"].get("every").is_none());

    let restored = Schedule::from_json(&json).expect("deserializes");
    let rule = restored.rule().expect("rule");

    assert_eq!(restored, schedule);
    assert!(rule.recurs_on(ymd(2008, 8, 30)));
    assert!(!rule.recurs_on(ymd(2009, 1, 1)));
}

#[test]
fn schedule_accepts_hand_written_json() {
    let json = r#"{
        "start": "2008-09-01",
        "options": { "every_nth": "month", "interval": 3 }
    }"#;

    let schedule = Schedule::from_json(json).expect("deserializes");
    let rule = schedule.rule().expect("rule");

    assert_eq!(schedule.start(), ymd(2008, 9, 1));
    assert!(rule.recurs_on(ymd(2008, 12, 1)));
    assert!(!rule.recurs_on(ymd(2008, 11, 1)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let result = Schedule::from_json(r#"{"start":"2008-09-01""#);
    assert!(matches!(result, Err(RuleError::SerializationError(_))));
}

#[test]
fn equal_rules_from_equal_inputs() {
    let options = RuleOptions::every("week").with_until("2008-10-1");

    let a = Rule::new("2008-08-27", &options).expect("valid rule");
    let b = Rule::new([2008, 8, 27], &options).expect("valid rule");

    assert_eq!(a, b);
}

#[test]
fn rules_differ_when_until_differs() {
    let a = Rule::new("2008-08-27", &RuleOptions::every("week").with_until("2008-10-1"))
        .expect("valid rule");
    let b = Rule::new("2008-08-27", &RuleOptions::every("week").with_until("2008-10-2"))
        .expect("valid rule");
    let c = Rule::new("2008-08-27", &RuleOptions::every("week")).expect("valid rule");

    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn rules_differ_when_start_or_unit_differs() {
    let options = RuleOptions::every("week");

    let a = Rule::new("2008-08-27", &options).expect("valid rule");
    let b = Rule::new("2008-08-28", &options).expect("valid rule");
    let c = Rule::new("2008-08-27", &RuleOptions::every("day")).expect("valid rule");

    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn schedules_differ_when_options_differ() {
    let a = Schedule::new("epoch", RuleOptions::every("day")).expect("valid schedule");
    let b = Schedule::new("epoch", RuleOptions::every_second("day")).expect("valid schedule");

    assert_ne!(a, b);
}
