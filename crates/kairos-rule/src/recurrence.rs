//! Atomic recurrence rules and their membership test.

use std::num::NonZeroU32;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{
    clamp_day, days_between, days_until_weekday, is_last_weekday_of_month,
    is_last_weekday_of_year, months_between, weekday_position_in_month,
    weekday_position_in_year,
};
use crate::unit::{Frequency, Ordinal, Period, WeekdayForm, weekday_name};

/// Shape of an atomic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Every `interval`-th `unit`, counted from the anchor.
    Interval {
        unit: Frequency,
        interval: NonZeroU32,
    },
    /// The `ordinal` occurrence of `weekday` in every month or year.
    OrdinalWeekday {
        ordinal: Ordinal,
        weekday: Weekday,
        period: Period,
    },
}

/// An atomic recurrence rule.
///
/// Equality is structural: two rules are equal when anchor, bound and pattern
/// all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurrenceRule {
    start_date: NaiveDate,
    until: Option<NaiveDate>,
    pattern: Pattern,
}

impl RecurrenceRule {
    /// Creates an interval rule anchored at `start_date`.
    #[must_use]
    pub const fn every(start_date: NaiveDate, unit: Frequency, interval: NonZeroU32) -> Self {
        Self {
            start_date,
            until: None,
            pattern: Pattern::Interval { unit, interval },
        }
    }

    /// Creates an "`ordinal` `weekday` of every `period`" rule.
    #[must_use]
    pub const fn ordinal(
        start_date: NaiveDate,
        ordinal: Ordinal,
        weekday: Weekday,
        period: Period,
    ) -> Self {
        Self {
            start_date,
            until: None,
            pattern: Pattern::OrdinalWeekday {
                ordinal,
                weekday,
                period,
            },
        }
    }

    /// Sets (or clears) the inclusive upper bound.
    #[must_use]
    pub const fn with_until(mut self, until: Option<NaiveDate>) -> Self {
        self.until = until;
        self
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn until(&self) -> Option<NaiveDate> {
        self.until
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Frequency unit of an interval rule.
    #[must_use]
    pub const fn unit(&self) -> Option<Frequency> {
        match self.pattern {
            Pattern::Interval { unit, .. } => Some(unit),
            Pattern::OrdinalWeekday { .. } => None,
        }
    }

    /// Cycle length; ordinal rules recur in every period, so 1.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        match self.pattern {
            Pattern::Interval { interval, .. } => interval.get(),
            Pattern::OrdinalWeekday { .. } => 1,
        }
    }

    /// Name of the anchor's weekday.
    #[must_use]
    pub fn starting_weekday(&self, form: WeekdayForm) -> &'static str {
        weekday_name(self.start_date.weekday(), form)
    }

    /// Whether `date` lies inside `[start_date, until]`.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.until.is_none_or(|until| date <= until)
    }

    /// ## Summary
    /// Returns whether `date` is an occurrence of this rule.
    #[must_use]
    pub fn recurs_on(&self, date: NaiveDate) -> bool {
        if !self.covers(date) {
            return false;
        }

        match self.pattern {
            Pattern::Interval { unit, interval } => {
                self.matches_interval(unit, i64::from(interval.get()), date)
            }
            Pattern::OrdinalWeekday {
                ordinal,
                weekday,
                period,
            } => matches_ordinal(ordinal, weekday, period, date),
        }
    }

    fn matches_interval(&self, unit: Frequency, interval: i64, date: NaiveDate) -> bool {
        let start = self.start_date;

        match unit {
            Frequency::Day => days_between(start, date) % interval == 0,
            Frequency::Week => {
                let days = days_between(start, date);
                days % 7 == 0 && (days / 7) % interval == 0
            }
            Frequency::Weekday(weekday) => {
                if date.weekday() != weekday {
                    return false;
                }
                // Occurrences are counted from the first `weekday` on or after
                // the anchor.
                let first = days_until_weekday(start.weekday(), weekday);
                let weeks = (days_between(start, date) - first) / 7;
                weeks % interval == 0
            }
            Frequency::Month => {
                date.day() == clamp_day(start.day(), date.year(), date.month())
                    && months_between(start, date) % interval == 0
            }
            Frequency::Year => {
                date.month() == start.month()
                    && date.day() == clamp_day(start.day(), date.year(), start.month())
                    && (i64::from(date.year()) - i64::from(start.year())) % interval == 0
            }
        }
    }
}

fn matches_ordinal(ordinal: Ordinal, weekday: Weekday, period: Period, date: NaiveDate) -> bool {
    if date.weekday() != weekday {
        return false;
    }

    match (ordinal.nth(), period) {
        (Some(nth), Period::Month) => weekday_position_in_month(date) == nth,
        (Some(nth), Period::Year) => weekday_position_in_year(date) == nth,
        (None, Period::Month) => is_last_weekday_of_month(date),
        (None, Period::Year) => is_last_weekday_of_year(date),
    }
}
