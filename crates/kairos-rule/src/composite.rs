//! Boolean combinations of rules.

use std::fmt;

use chrono::NaiveDate;

use crate::rule::Rule;

/// Boolean operator of a composite rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    AndNot,
    Not,
}

impl Operator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::AndNot => "AND NOT",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule built from one or two operand rules.
///
/// Composites hold no bounds of their own; anchors and `until` dates are only
/// checked by the atomic rules at the leaves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompositeRule {
    /// Both operands match.
    And(Box<Rule>, Box<Rule>),
    /// Either operand matches.
    Or(Box<Rule>, Box<Rule>),
    /// The left operand matches and the right one does not.
    AndNot(Box<Rule>, Box<Rule>),
    /// The operand does not match.
    Not(Box<Rule>),
}

impl CompositeRule {
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::And(..) => Operator::And,
            Self::Or(..) => Operator::Or,
            Self::AndNot(..) => Operator::AndNot,
            Self::Not(_) => Operator::Not,
        }
    }

    /// Returns the operands; the second is `None` for [`CompositeRule::Not`].
    #[must_use]
    pub fn operands(&self) -> (&Rule, Option<&Rule>) {
        match self {
            Self::And(lhs, rhs) | Self::Or(lhs, rhs) | Self::AndNot(lhs, rhs) => {
                (&**lhs, Some(&**rhs))
            }
            Self::Not(operand) => (&**operand, None),
        }
    }

    /// ## Summary
    /// Evaluates the operands on `date` and combines their results.
    #[must_use]
    pub fn recurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::And(lhs, rhs) => lhs.recurs_on(date) && rhs.recurs_on(date),
            Self::Or(lhs, rhs) => lhs.recurs_on(date) || rhs.recurs_on(date),
            Self::AndNot(lhs, rhs) => lhs.recurs_on(date) && !rhs.recurs_on(date),
            Self::Not(operand) => !operand.recurs_on(date),
        }
    }

    /// Earliest date iteration starts from when no date is supplied.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Or(lhs, rhs) => lhs.start_date().min(rhs.start_date()),
            Self::And(lhs, rhs) => lhs.start_date().max(rhs.start_date()),
            Self::AndNot(operand, _) | Self::Not(operand) => operand.start_date(),
        }
    }

    /// Last date that can possibly match, if the combination is bounded.
    ///
    /// A complement is never bounded: past its operand's `until` every date
    /// matches.
    #[must_use]
    pub fn until(&self) -> Option<NaiveDate> {
        match self {
            Self::Or(lhs, rhs) => lhs.until().zip(rhs.until()).map(|(a, b)| a.max(b)),
            Self::And(lhs, rhs) => match (lhs.until(), rhs.until()) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (bound, None) | (None, bound) => bound,
            },
            Self::AndNot(operand, _) => operand.until(),
            Self::Not(_) => None,
        }
    }
}
