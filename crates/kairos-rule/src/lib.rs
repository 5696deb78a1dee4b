//! Recurring calendar-date rules.
//!
//! A [`Rule`] answers "does this pattern occur on date D?" and lists its
//! occurrences. Atomic rules ([`RecurrenceRule`]) cover fixed day, week,
//! month and year intervals, specific-weekday cycles and "nth weekday of the
//! month/year"; [`CompositeRule`]s combine rules with union, intersection,
//! difference and complement and are rules themselves.
//!
//! ```
//! use kairos_core::options::RuleOptions;
//! use kairos_rule::Rule;
//!
//! let every_other = Rule::new("2008-08-01", &RuleOptions::every_second("day"))?;
//! let every_third = Rule::new("2008-08-01", &RuleOptions::every_third("day"))?;
//! let both = every_other.intersect(every_third);
//!
//! assert!(both.recurs_on_input("2008-08-07")?);
//! assert!(!both.recurs_on_input("2008-08-03")?);
//! # Ok::<(), kairos_rule::error::RuleError>(())
//! ```

pub mod calendar;
pub mod composite;
pub mod error;
pub mod iter;
pub mod recurrence;
pub mod rule;
pub mod schedule;
pub mod unit;
mod validation;

pub use composite::{CompositeRule, Operator};
pub use iter::Occurrences;
pub use recurrence::{Pattern, RecurrenceRule};
pub use rule::Rule;
pub use schedule::Schedule;
pub use unit::{Frequency, Ordinal, Period, WeekdayForm};
