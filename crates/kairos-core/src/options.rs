//! The option surface a recurrence rule is configured from.
//!
//! `RuleOptions` only carries the raw keyword values. Their meaning (which
//! keyword is a unit, which combinations are legal) is decided when a rule is
//! built from them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Recognised option keys.
pub const OPTION_KEYS: [&str; 11] = [
    "every",
    "every_second",
    "every_third",
    "every_nth",
    "every_first",
    "every_fourth",
    "every_last",
    "interval",
    "of",
    "until",
    "start",
];

/// Raw recurrence options, one field per recognised key.
///
/// `start` is not an option of the rule itself; it is accepted by
/// [`RuleOptions::from_pairs`] so that a flat key/value list can describe a
/// whole schedule, and is otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_second: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_third: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_nth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_fourth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_last: Option<String>,
    /// Cycle length for `every_nth`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    /// Period (`month` or `year`) for ordinal weekday rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of: Option<String>,
    /// Inclusive upper bound, any date-like text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

impl RuleOptions {
    /// `every: <value>`
    #[must_use]
    pub fn every(value: impl Into<String>) -> Self {
        Self {
            every: Some(value.into()),
            ..Self::default()
        }
    }

    /// `every_second: <value>`
    #[must_use]
    pub fn every_second(value: impl Into<String>) -> Self {
        Self {
            every_second: Some(value.into()),
            ..Self::default()
        }
    }

    /// `every_third: <value>`
    #[must_use]
    pub fn every_third(value: impl Into<String>) -> Self {
        Self {
            every_third: Some(value.into()),
            ..Self::default()
        }
    }

    /// `every_nth: <value>, interval: <interval>`
    #[must_use]
    pub fn every_nth(value: impl Into<String>, interval: i64) -> Self {
        Self {
            every_nth: Some(value.into()),
            interval: Some(interval),
            ..Self::default()
        }
    }

    /// `every_first: <weekday>`
    #[must_use]
    pub fn every_first(weekday: impl Into<String>) -> Self {
        Self {
            every_first: Some(weekday.into()),
            ..Self::default()
        }
    }

    /// `every_fourth: <weekday>`
    #[must_use]
    pub fn every_fourth(weekday: impl Into<String>) -> Self {
        Self {
            every_fourth: Some(weekday.into()),
            ..Self::default()
        }
    }

    /// `every_last: <weekday>`
    #[must_use]
    pub fn every_last(weekday: impl Into<String>) -> Self {
        Self {
            every_last: Some(weekday.into()),
            ..Self::default()
        }
    }

    /// Sets the ordinal period (`of`).
    #[must_use]
    pub fn of(mut self, period: impl Into<String>) -> Self {
        self.of = Some(period.into());
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn with_until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    /// Sets the `interval` companion value.
    #[must_use]
    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = Some(interval);
        self
    }

    /// ## Summary
    /// Builds options from a flat list of key/value pairs.
    ///
    /// Keys are matched case-insensitively and may carry a leading `:`.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an unrecognised key, a key
    /// given twice, or an `interval` that is not an integer.
    pub fn from_pairs<I, K, V>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut options = Self::default();

        for (key, value) in pairs {
            let key = normalize_keyword(key.as_ref());
            let value: String = value.into();

            let slot = match key.as_str() {
                "every" => &mut options.every,
                "every_second" => &mut options.every_second,
                "every_third" => &mut options.every_third,
                "every_nth" => &mut options.every_nth,
                "every_first" => &mut options.every_first,
                "every_fourth" => &mut options.every_fourth,
                "every_last" => &mut options.every_last,
                "of" => &mut options.of,
                "until" => &mut options.until,
                "start" => continue,
                "interval" => {
                    if options.interval.is_some() {
                        return Err(duplicate(&key));
                    }
                    let parsed = value.trim().parse::<i64>().map_err(|e| {
                        CoreError::InvalidConfiguration(format!(
                            "interval must be an integer, got {value:?}: {e}"
                        ))
                    })?;
                    options.interval = Some(parsed);
                    continue;
                }
                _ => {
                    return Err(CoreError::InvalidConfiguration(format!(
                        "unrecognized option {key:?}, expected one of {}",
                        OPTION_KEYS.join(", ")
                    )));
                }
            };

            if slot.is_some() {
                return Err(duplicate(&key));
            }
            *slot = Some(value);
        }

        Ok(options)
    }
}

/// Normalises an option key or keyword value: trims, drops a leading `:`
/// and lowercases.
#[must_use]
pub fn normalize_keyword(s: &str) -> String {
    s.trim().trim_start_matches(':').to_ascii_lowercase()
}

fn duplicate(key: &str) -> CoreError {
    CoreError::InvalidConfiguration(format!("option {key:?} given more than once"))
}
