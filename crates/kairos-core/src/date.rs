//! Coercion of date-like inputs into calendar dates.
//!
//! Rules only ever reason about [`NaiveDate`]. Everything a caller may hand in
//! (explicit dates, `(y, m, d)` triples, text, the `epoch` and `today`
//! keywords) goes through [`DateInput::resolve`] first.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::constants::{DATE_FORMATS, EPOCH_KEYWORD, EPOCH_YMD, TODAY_KEYWORD};
use crate::error::{CoreError, CoreResult};

/// A value that can be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Already a calendar date.
    Date(NaiveDate),
    /// Explicit year, month and day.
    Ymd(i32, u32, u32),
    /// Date text such as `2008-08-27` or `2008/8/27`.
    Text(String),
    /// 1970-01-01.
    Epoch,
    /// The local current date, read at resolution time.
    Today,
}

impl DateInput {
    /// ## Summary
    /// Resolves the input to a calendar date.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if the triple is not a real calendar
    /// date or the text matches none of the accepted layouts.
    pub fn resolve(&self) -> CoreResult<NaiveDate> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Ymd(year, month, day) => from_ymd(*year, *month, *day),
            Self::Text(text) => parse_text(text),
            Self::Epoch => epoch(),
            Self::Today => Ok(Local::now().date_naive()),
        }
    }
}

/// Returns 1970-01-01.
///
/// ## Errors
/// Never fails in practice; the `Result` only mirrors [`DateInput::resolve`].
pub fn epoch() -> CoreResult<NaiveDate> {
    let (year, month, day) = EPOCH_YMD;
    from_ymd(year, month, day)
}

fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CoreError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

fn parse_text(text: &str) -> CoreResult<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CoreError::InvalidDate(text.to_string()))
}

impl FromStr for DateInput {
    type Err = CoreError;

    /// Recognises the `epoch` and `today` keywords (case-insensitive); any other
    /// text is kept verbatim and validated by [`DateInput::resolve`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(EPOCH_KEYWORD) {
            Ok(Self::Epoch)
        } else if trimmed.eq_ignore_ascii_case(TODAY_KEYWORD) {
            Ok(Self::Today)
        } else if trimmed.is_empty() {
            Err(CoreError::InvalidDate("empty date".to_string()))
        } else {
            Ok(Self::Text(trimmed.to_string()))
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::Ymd(year, month, day) => write!(f, "{year:04}-{month:02}-{day:02}"),
            Self::Text(text) => f.write_str(text),
            Self::Epoch => f.write_str(EPOCH_KEYWORD),
            Self::Today => f.write_str(TODAY_KEYWORD),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<(i32, u32, u32)> for DateInput {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::Ymd(year, month, day)
    }
}

impl From<[i32; 3]> for DateInput {
    fn from([year, month, day]: [i32; 3]) -> Self {
        // Negative months or days can never name a real date; map them to 0 so
        // resolution reports them as invalid.
        Self::Ymd(
            year,
            u32::try_from(month).unwrap_or(0),
            u32::try_from(day).unwrap_or(0),
        )
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        text.parse()
            .unwrap_or_else(|_err: CoreError| Self::Text(text.to_string()))
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<&String> for DateInput {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}
