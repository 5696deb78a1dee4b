//! The rule value clients work with: atomic or composite, with the
//! combinators that build new rules from existing ones.

use std::ops::{BitAnd, BitOr, Not, Sub};

use chrono::{Datelike, NaiveDate};
use kairos_core::date::DateInput;

use crate::composite::CompositeRule;
use crate::error::RuleResult;
use crate::iter::Occurrences;
use crate::recurrence::RecurrenceRule;
use crate::unit::{WeekdayForm, weekday_name};

/// Any recurrence rule.
///
/// Rules are immutable; combinators consume their operands and return a new
/// composite owning them. Clone an operand to keep using it on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    Recurrence(RecurrenceRule),
    Composite(CompositeRule),
}

impl Rule {
    /// ## Summary
    /// Returns whether `date` is an occurrence of this rule.
    #[must_use]
    pub fn recurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::Recurrence(rule) => rule.recurs_on(date),
            Self::Composite(rule) => rule.recurs_on(date),
        }
    }

    /// ## Summary
    /// Coerces a date-like value and tests it with [`Rule::recurs_on`].
    ///
    /// ## Errors
    /// Returns `RuleError::InvalidDate` if the input is not a valid date.
    pub fn recurs_on_input(&self, date: impl Into<DateInput>) -> RuleResult<bool> {
        let date = date.into().resolve()?;
        Ok(self.recurs_on(date))
    }

    /// Anchor of an atomic rule; derived from the operands for a composite.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Recurrence(rule) => rule.start_date(),
            Self::Composite(rule) => rule.start_date(),
        }
    }

    /// Inclusive upper bound; `None` when the rule is unbounded.
    #[must_use]
    pub fn until(&self) -> Option<NaiveDate> {
        match self {
            Self::Recurrence(rule) => rule.until(),
            Self::Composite(rule) => rule.until(),
        }
    }

    /// Name of the weekday of [`Rule::start_date`].
    #[must_use]
    pub fn starting_weekday(&self, form: WeekdayForm) -> &'static str {
        weekday_name(self.start_date().weekday(), form)
    }

    #[must_use]
    pub const fn as_recurrence(&self) -> Option<&RecurrenceRule> {
        match self {
            Self::Recurrence(rule) => Some(rule),
            Self::Composite(_) => None,
        }
    }

    #[must_use]
    pub const fn as_composite(&self) -> Option<&CompositeRule> {
        match self {
            Self::Recurrence(_) => None,
            Self::Composite(rule) => Some(rule),
        }
    }

    /// Union: matches where either rule matches.
    #[must_use]
    pub fn join(self, other: impl Into<Rule>) -> Rule {
        Self::Composite(CompositeRule::Or(Box::new(self), Box::new(other.into())))
    }

    /// Intersection: matches where both rules match.
    #[must_use]
    pub fn intersect(self, other: impl Into<Rule>) -> Rule {
        Self::Composite(CompositeRule::And(Box::new(self), Box::new(other.into())))
    }

    /// Difference: matches where this rule matches and `other` does not.
    #[must_use]
    pub fn diff(self, other: impl Into<Rule>) -> Rule {
        Self::Composite(CompositeRule::AndNot(Box::new(self), Box::new(other.into())))
    }

    /// Complement: matches where this rule does not.
    #[must_use]
    pub fn complement(self) -> Rule {
        Self::Composite(CompositeRule::Not(Box::new(self)))
    }

    /// Occurrences from [`Rule::start_date`] onwards.
    ///
    /// A complement also matches dates before its operand's start date; use
    /// [`Rule::occurrences_from`] to walk those.
    #[must_use]
    pub fn occurrences(&self) -> Occurrences<'_> {
        Occurrences::new(self, self.start_date(), None)
    }

    /// Occurrences on or after `from`.
    #[must_use]
    pub fn occurrences_from(&self, from: NaiveDate) -> Occurrences<'_> {
        Occurrences::new(self, from, None)
    }

    /// Occurrences in `[from, to]`; always finite.
    #[must_use]
    pub fn occurrences_between(&self, from: NaiveDate, to: NaiveDate) -> Occurrences<'_> {
        Occurrences::new(self, from, Some(to))
    }
}

impl RecurrenceRule {
    /// Union with another rule, see [`Rule::join`].
    #[must_use]
    pub fn join(self, other: impl Into<Rule>) -> Rule {
        Rule::from(self).join(other)
    }

    /// Intersection with another rule, see [`Rule::intersect`].
    #[must_use]
    pub fn intersect(self, other: impl Into<Rule>) -> Rule {
        Rule::from(self).intersect(other)
    }

    /// Difference with another rule, see [`Rule::diff`].
    #[must_use]
    pub fn diff(self, other: impl Into<Rule>) -> Rule {
        Rule::from(self).diff(other)
    }

    /// Complement, see [`Rule::complement`].
    #[must_use]
    pub fn complement(self) -> Rule {
        Rule::from(self).complement()
    }
}

impl From<RecurrenceRule> for Rule {
    fn from(rule: RecurrenceRule) -> Self {
        Self::Recurrence(rule)
    }
}

impl From<CompositeRule> for Rule {
    fn from(rule: CompositeRule) -> Self {
        Self::Composite(rule)
    }
}

impl<R: Into<Rule>> BitOr<R> for Rule {
    type Output = Rule;

    fn bitor(self, rhs: R) -> Rule {
        self.join(rhs)
    }
}

impl<R: Into<Rule>> BitAnd<R> for Rule {
    type Output = Rule;

    fn bitand(self, rhs: R) -> Rule {
        self.intersect(rhs)
    }
}

impl<R: Into<Rule>> Sub<R> for Rule {
    type Output = Rule;

    fn sub(self, rhs: R) -> Rule {
        self.diff(rhs)
    }
}

impl Not for Rule {
    type Output = Rule;

    fn not(self) -> Rule {
        self.complement()
    }
}

impl<'a> IntoIterator for &'a Rule {
    type Item = NaiveDate;
    type IntoIter = Occurrences<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.occurrences()
    }
}
