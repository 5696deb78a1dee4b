//! Turning configured schedules into rules and rendering their upcoming
//! occurrences.

use chrono::NaiveDate;
use kairos_core::config::{ScheduleConfig, Settings};
use kairos_core::date::DateInput;
use kairos_rule::{Rule, WeekdayForm};

use crate::error::{AppError, AppResult};

/// A rule together with the name it was configured under.
#[derive(Debug, Clone)]
pub struct NamedRule {
    pub name: String,
    pub rule: Rule,
}

/// Schedules split into the ones that built and the ones that were rejected.
#[derive(Debug, Default)]
pub struct BuiltSchedules {
    pub rules: Vec<NamedRule>,
    pub rejected: Vec<(String, AppError)>,
}

/// ## Summary
/// Builds a rule for every configured schedule.
///
/// Rejected schedules are collected with their error instead of aborting.
#[must_use]
pub fn build_schedules(schedules: &[ScheduleConfig]) -> BuiltSchedules {
    let mut built = BuiltSchedules::default();

    for schedule in schedules {
        match build_schedule(schedule) {
            Ok(rule) => built.rules.push(NamedRule {
                name: schedule.name.clone(),
                rule,
            }),
            Err(e) => built.rejected.push((schedule.name.clone(), e)),
        }
    }

    built
}

fn build_schedule(schedule: &ScheduleConfig) -> AppResult<Rule> {
    let start = schedule.start.parse::<DateInput>()?;
    Ok(Rule::new(start, &schedule.options)?)
}

/// ## Summary
/// Resolves the configured listing lower bound.
///
/// ## Errors
/// Returns an error if `listing.from` is set but is not a valid date.
pub fn listing_from(settings: &Settings) -> AppResult<Option<NaiveDate>> {
    Ok(settings
        .listing
        .from
        .as_deref()
        .map(|from| from.parse::<DateInput>()?.resolve())
        .transpose()?)
}

/// Renders up to `count` occurrences of a rule, starting at the later of the
/// rule's start date and `from`.
#[must_use]
pub fn render_listing(named: &NamedRule, count: usize, from: Option<NaiveDate>) -> String {
    let start = from.map_or(named.rule.start_date(), |from| {
        from.max(named.rule.start_date())
    });

    let mut out = format!(
        "{} (starts {} on a {})\n",
        named.name,
        named.rule.start_date(),
        named.rule.starting_weekday(WeekdayForm::Long)
    );

    let lines: Vec<String> = named
        .rule
        .occurrences_from(start)
        .take(count)
        .map(|date| format!("  {date} {}\n", date.format("%a")))
        .collect();

    if lines.is_empty() {
        out.push_str("  (no occurrences)\n");
    } else {
        out.extend(lines);
    }

    out
}
