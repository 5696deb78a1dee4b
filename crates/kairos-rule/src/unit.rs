//! Keyword vocabulary of recurrence rules: frequency units, ordinals and
//! periods.

use std::fmt;

use chrono::Weekday;
use kairos_core::options::normalize_keyword;

/// Frequency unit of an interval rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Day,
    Week,
    Month,
    Year,
    /// A specific day of the week.
    Weekday(Weekday),
}

impl Frequency {
    /// Returns the keyword spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Weekday(weekday) => weekday_name(weekday, WeekdayForm::Long),
        }
    }

    /// Parses a frequency keyword (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let keyword = normalize_keyword(s);
        Some(match keyword.as_str() {
            "day" => Self::Day,
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            other => Self::Weekday(parse_weekday(other)?),
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of an `every*` option: a plain unit or one of the derived units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKeyword {
    Unit(Frequency),
    /// Saturdays and Sundays.
    Weekend,
    /// Monday to Friday.
    Workday,
}

impl UnitKeyword {
    /// Parses a unit keyword (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_keyword(s).as_str() {
            "weekend" => Some(Self::Weekend),
            "workday" => Some(Self::Workday),
            other => Frequency::parse(other).map(Self::Unit),
        }
    }
}

/// Position of a weekday within its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Ordinal {
    /// One-based position, `None` for [`Ordinal::Last`].
    #[must_use]
    pub const fn nth(self) -> Option<u32> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Last => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period an ordinal weekday is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Month,
    Year,
}

impl Period {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Parses a period keyword (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_keyword(s).as_str() {
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spelling used when naming a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeekdayForm {
    /// `wednesday`
    #[default]
    Long,
    /// `wed`
    Short,
}

/// Returns the lowercase name of a weekday.
#[must_use]
pub const fn weekday_name(weekday: Weekday, form: WeekdayForm) -> &'static str {
    match (weekday, form) {
        (Weekday::Sun, WeekdayForm::Long) => "sunday",
        (Weekday::Mon, WeekdayForm::Long) => "monday",
        (Weekday::Tue, WeekdayForm::Long) => "tuesday",
        (Weekday::Wed, WeekdayForm::Long) => "wednesday",
        (Weekday::Thu, WeekdayForm::Long) => "thursday",
        (Weekday::Fri, WeekdayForm::Long) => "friday",
        (Weekday::Sat, WeekdayForm::Long) => "saturday",
        (Weekday::Sun, WeekdayForm::Short) => "sun",
        (Weekday::Mon, WeekdayForm::Short) => "mon",
        (Weekday::Tue, WeekdayForm::Short) => "tue",
        (Weekday::Wed, WeekdayForm::Short) => "wed",
        (Weekday::Thu, WeekdayForm::Short) => "thu",
        (Weekday::Fri, WeekdayForm::Short) => "fri",
        (Weekday::Sat, WeekdayForm::Short) => "sat",
    }
}

/// Parses a full or abbreviated weekday name (case-insensitive).
#[must_use]
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    normalize_keyword(s).parse::<Weekday>().ok()
}
