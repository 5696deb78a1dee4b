//! Building validated rules from [`RuleOptions`].

use std::num::NonZeroU32;

use chrono::{NaiveDate, Weekday};
use kairos_core::date::DateInput;
use kairos_core::options::RuleOptions;

use crate::calendar::{shift_days, week_start};
use crate::error::{RuleError, RuleResult};
use crate::recurrence::RecurrenceRule;
use crate::rule::Rule;
use crate::unit::{Frequency, Ordinal, Period, UnitKeyword, parse_weekday};

/// The `every*` key a rule was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepeatKey {
    Every,
    EverySecond,
    EveryThird,
    EveryNth,
    EveryFirst,
    EveryFourth,
    EveryLast,
}

impl RepeatKey {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Every => "every",
            Self::EverySecond => "every_second",
            Self::EveryThird => "every_third",
            Self::EveryNth => "every_nth",
            Self::EveryFirst => "every_first",
            Self::EveryFourth => "every_fourth",
            Self::EveryLast => "every_last",
        }
    }

    /// Interval implied by the key itself.
    const fn fixed_interval(self) -> Option<u32> {
        match self {
            Self::Every => Some(1),
            Self::EverySecond => Some(2),
            Self::EveryThird => Some(3),
            Self::EveryNth | Self::EveryFirst | Self::EveryFourth | Self::EveryLast => None,
        }
    }

    /// Ordinal the key stands for when combined with `of`.
    const fn ordinal(self) -> Option<Ordinal> {
        match self {
            Self::EveryFirst => Some(Ordinal::First),
            Self::EverySecond => Some(Ordinal::Second),
            Self::EveryThird => Some(Ordinal::Third),
            Self::EveryFourth => Some(Ordinal::Fourth),
            Self::EveryLast => Some(Ordinal::Last),
            Self::Every | Self::EveryNth => None,
        }
    }
}

fn invalid(msg: impl Into<String>) -> RuleError {
    RuleError::InvalidConfiguration(msg.into())
}

impl Rule {
    /// ## Summary
    /// Builds a rule anchored at `start` from recurrence options.
    ///
    /// `weekend` and `workday` values produce composite rules; everything else
    /// produces an atomic [`RecurrenceRule`].
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidConfiguration` for unknown unit keywords,
    /// malformed ordinal/period combinations, a missing or non-positive
    /// `interval` for `every_nth`, an `until` before `start`, and mutually
    /// exclusive or incomplete option sets. Returns `RuleError::InvalidDate` if `start` or `until`
    /// is not a valid date.
    #[tracing::instrument(level = "debug", skip(start, options))]
    pub fn new(start: impl Into<DateInput>, options: &RuleOptions) -> RuleResult<Self> {
        let start = start.into().resolve()?;
        build_rule(start, options)
            .inspect(|_rule| tracing::debug!(%start, ?options, "Recurrence rule accepted"))
            .inspect_err(|e| tracing::warn!(error = %e, ?options, "Recurrence options rejected"))
    }

    /// ## Summary
    /// Builds a rule from a flat list of option key/value pairs, e.g.
    /// `[("every_nth", "day"), ("interval", "10")]`.
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidConfiguration` for unknown or repeated keys
    /// and for every case rejected by [`Rule::new`].
    pub fn from_pairs<I, K, V>(start: impl Into<DateInput>, pairs: I) -> RuleResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let options = RuleOptions::from_pairs(pairs)?;
        Self::new(start, &options)
    }

    /// Saturdays and Sundays of every `interval`-th week, counting the week
    /// that contains `start` as the first, limited to `[start, until]`.
    ///
    /// A weekend is one unit: with an interval of 2 both days of a weekend
    /// match and both days of the next weekend do not.
    #[must_use]
    pub fn weekend(start: NaiveDate, until: Option<NaiveDate>, interval: NonZeroU32) -> Self {
        week_cycle(start, until, interval, Weekday::Sat, &[Weekday::Sun])
    }

    /// Monday to Friday of every `interval`-th week, counting the week that
    /// contains `start` as the first, limited to `[start, until]`.
    ///
    /// With an interval of 1 this is every day of `[start, until]` that is
    /// not part of [`Rule::weekend`]; it never matches a Saturday or Sunday.
    #[must_use]
    pub fn workday(start: NaiveDate, until: Option<NaiveDate>, interval: NonZeroU32) -> Self {
        week_cycle(
            start,
            until,
            interval,
            Weekday::Mon,
            &[Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
        )
    }
}

/// `Day(start, until)` intersected with the union of one `interval`-weekly
/// cycle per weekday.
///
/// Each cycle is anchored one full cycle before the week of `start`, so every
/// cycle starts before `start` and the day rule alone carries the bounds.
fn week_cycle(
    start: NaiveDate,
    until: Option<NaiveDate>,
    interval: NonZeroU32,
    first: Weekday,
    rest: &[Weekday],
) -> Rule {
    let domain = RecurrenceRule::every(start, Frequency::Day, NonZeroU32::MIN).with_until(until);
    let origin = shift_days(week_start(start), -7 * i64::from(interval.get()));

    let cycle = |weekday: Weekday| {
        let anchor = shift_days(origin, i64::from(weekday.num_days_from_monday()));
        Rule::from(RecurrenceRule::every(anchor, Frequency::Week, interval))
    };
    let days = rest
        .iter()
        .fold(cycle(first), |days, weekday| days.join(cycle(*weekday)));

    domain.intersect(days)
}

fn build_rule(start: NaiveDate, options: &RuleOptions) -> RuleResult<Rule> {
    let until = options
        .until
        .as_deref()
        .map(|text| DateInput::from(text).resolve())
        .transpose()?;
    if let Some(until) = until.filter(|until| *until < start) {
        return Err(invalid(format!(
            "`until` {until} is before the start date {start}"
        )));
    }

    let (key, value) = repeat_key(options)?;

    if let Some(of) = options.of.as_deref() {
        let ordinal = key
            .ordinal()
            .ok_or_else(|| invalid(format!("`of` cannot be combined with `{}`", key.as_str())))?;
        if options.interval.is_some() {
            return Err(invalid("`interval` cannot be combined with `of`"));
        }
        let period = Period::parse(of)
            .ok_or_else(|| invalid(format!("unrecognized period {of:?}, expected month or year")))?;
        let weekday = parse_weekday(value).ok_or_else(|| {
            invalid(format!(
                "`{}` with `of` expects a weekday, got {value:?}",
                key.as_str()
            ))
        })?;

        return Ok(RecurrenceRule::ordinal(start, ordinal, weekday, period)
            .with_until(until)
            .into());
    }

    let interval = interval_for(key, options.interval)?;
    let keyword = UnitKeyword::parse(value)
        .ok_or_else(|| invalid(format!("unrecognized recurrence unit {value:?}")))?;

    match keyword {
        UnitKeyword::Unit(unit) => Ok(RecurrenceRule::every(start, unit, interval)
            .with_until(until)
            .into()),
        UnitKeyword::Weekend | UnitKeyword::Workday if key == RepeatKey::EveryNth => Err(invalid(
            format!("`every_nth` does not accept {value:?}"),
        )),
        UnitKeyword::Weekend => Ok(Rule::weekend(start, until, interval)),
        UnitKeyword::Workday => Ok(Rule::workday(start, until, interval)),
    }
}

/// Picks the single `every*` option that is set.
fn repeat_key(options: &RuleOptions) -> RuleResult<(RepeatKey, &str)> {
    let candidates = [
        (RepeatKey::Every, &options.every),
        (RepeatKey::EverySecond, &options.every_second),
        (RepeatKey::EveryThird, &options.every_third),
        (RepeatKey::EveryNth, &options.every_nth),
        (RepeatKey::EveryFirst, &options.every_first),
        (RepeatKey::EveryFourth, &options.every_fourth),
        (RepeatKey::EveryLast, &options.every_last),
    ];

    let present: Vec<(RepeatKey, &str)> = candidates
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
        .collect();

    match present.as_slice() {
        [] => Err(invalid("no recurrence given, expected one of the every* options")),
        [single] => Ok(*single),
        many => Err(invalid(format!(
            "recurrence options are mutually exclusive, got {}",
            many.iter()
                .map(|(key, _)| key.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

fn interval_for(key: RepeatKey, interval: Option<i64>) -> RuleResult<NonZeroU32> {
    match (key.fixed_interval(), interval) {
        (Some(fixed), None) => {
            NonZeroU32::new(fixed).ok_or_else(|| invalid("interval must be at least 1"))
        }
        (Some(_), Some(_)) => Err(invalid(format!(
            "`interval` can only be combined with `every_nth`, not `{}`",
            key.as_str()
        ))),
        (None, Some(n)) if key == RepeatKey::EveryNth => u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| invalid(format!("interval must be a positive integer, got {n}"))),
        (None, None) if key == RepeatKey::EveryNth => {
            Err(invalid("`every_nth` requires an `interval`"))
        }
        (None, _) => Err(invalid(format!(
            "`{}` requires `of: month` or `of: year`",
            key.as_str()
        ))),
    }
}
