//! Lazy forward iteration over the occurrences of a rule.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::rule::Rule;

/// Ascending occurrences of a rule, found by testing one calendar day at a
/// time.
///
/// Each value is an independent cursor over a borrowed, immutable rule. The
/// walk ends after the rule's `until` (or the explicit end date, whichever
/// comes first); without either it only ends at the last representable date,
/// so callers bound it themselves (`take`, `take_while`, ...).
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    rule: &'a Rule,
    cursor: Option<NaiveDate>,
    last: Option<NaiveDate>,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(rule: &'a Rule, from: NaiveDate, to: Option<NaiveDate>) -> Self {
        let last = match (rule.until(), to) {
            (Some(until), Some(to)) => Some(until.min(to)),
            (bound, None) | (None, bound) => bound,
        };

        Self {
            rule,
            cursor: Some(from),
            last,
        }
    }

    /// Next date that will be tested, `None` once exhausted.
    #[must_use]
    pub const fn cursor(&self) -> Option<NaiveDate> {
        self.cursor
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while let Some(candidate) = self.cursor {
            if self.last.is_some_and(|last| candidate > last) {
                tracing::trace!(%candidate, "Occurrence cursor passed its last date");
                self.cursor = None;
                break;
            }

            self.cursor = candidate.succ_opt();
            if self.rule.recurs_on(candidate) {
                return Some(candidate);
            }
        }

        None
    }
}

impl FusedIterator for Occurrences<'_> {}
