//! Storable form of a rule: its anchor plus the options it was built from.

use chrono::NaiveDate;
use kairos_core::date::DateInput;
use kairos_core::options::RuleOptions;
use serde::{Deserialize, Serialize};

use crate::error::RuleResult;
use crate::rule::Rule;

/// A validated rule configuration that can be serialized and rebuilt.
///
/// Schedules compare equal when their anchors and options are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    start: NaiveDate,
    options: RuleOptions,
}

impl Schedule {
    /// ## Summary
    /// Creates a schedule after checking that the options build a rule.
    ///
    /// ## Errors
    /// Returns the construction error of [`Rule::new`].
    pub fn new(start: impl Into<DateInput>, options: RuleOptions) -> RuleResult<Self> {
        let start = start.into().resolve()?;
        Rule::new(start, &options)?;
        Ok(Self { start, options })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// ## Summary
    /// Rebuilds the rule described by this schedule.
    ///
    /// ## Errors
    /// Returns the construction error of [`Rule::new`]; only reachable for a
    /// schedule deserialized from data that was edited by hand.
    pub fn rule(&self) -> RuleResult<Rule> {
        Rule::new(self.start, &self.options)
    }

    /// ## Summary
    /// Serializes the schedule to JSON.
    ///
    /// ## Errors
    /// Returns `RuleError::SerializationError` if serialization fails.
    pub fn to_json(&self) -> RuleResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// ## Summary
    /// Restores a schedule from JSON and validates it.
    ///
    /// ## Errors
    /// Returns `RuleError::SerializationError` for malformed JSON or unknown
    /// fields, and the construction error of [`Rule::new`] for options that
    /// do not describe a rule.
    pub fn from_json(json: &str) -> RuleResult<Self> {
        let schedule: Self = serde_json::from_str(json)?;
        schedule.rule()?;
        Ok(schedule)
    }
}
