//! Error types for dates, format patterns and parsing.

use thiserror::Error;

/// The calendar a rejected date was expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Gregorian,
    Jalali,
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Calendar::Gregorian => f.write_str("Gregorian"),
            Calendar::Jalali => f.write_str("Jalali"),
        }
    }
}

/// Errors that can occur when constructing or converting a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid month {month} in {calendar} date: month has to be between 1 and 12")]
    InvalidMonth {
        calendar: Calendar,
        year: i32,
        month: u8,
    },

    #[error("invalid {calendar} date {year}/{month:02}/{day:02}: month has {max} days")]
    InvalidDate {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
        max: u8,
    },

    #[error("{calendar} date {year}/{month:02}/{day:02} leaves the supported range")]
    OutOfRange {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
    },

    #[error("day number {day_number} is outside the supported range")]
    DayNumberOutOfRange { day_number: i64 },
}

impl DateError {
    /// Returns true for failures caused by an invalid month or day.
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            DateError::InvalidMonth { .. } | DateError::InvalidDate { .. }
        )
    }

    /// Returns true for failures caused by leaving the supported calendar span.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            DateError::OutOfRange { .. } | DateError::DayNumberOutOfRange { .. }
        )
    }
}

/// Errors that can occur when compiling a format pattern or formatting a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("empty format pattern")]
    EmptyPattern,

    #[error("unterminated literal at position {position}")]
    UnterminatedLiteral { position: usize },

    #[error("invalid width {width} for token '{token}' at position {position}")]
    InvalidTokenWidth {
        position: usize,
        token: char,
        width: usize,
    },

    #[error("cannot format invalid date: {0}")]
    InvalidDate(DateError),

    #[error("locale '{locale}' has no data for token {token}")]
    MissingLocaleData {
        token: &'static str,
        locale: &'static str,
    },
}

/// Errors that can occur when parsing text against a format pattern.
///
/// `index` is the position of the failing segment in the pattern and
/// `position` is the byte offset into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected '{expected}' at position {position} (segment {index})")]
    ExpectedLiteral {
        index: usize,
        position: usize,
        expected: String,
    },

    #[error("expected digits for {token} at position {position} (segment {index})")]
    ExpectedNumber {
        index: usize,
        position: usize,
        token: &'static str,
    },

    #[error("no {token} name matches at position {position} (segment {index})")]
    UnknownName {
        index: usize,
        position: usize,
        token: &'static str,
    },

    #[error("value for {token} out of bounds at position {position} (segment {index})")]
    FieldOutOfBounds {
        index: usize,
        position: usize,
        token: &'static str,
    },

    #[error("{token} disagrees with an earlier field at position {position} (segment {index})")]
    ConflictingField {
        index: usize,
        position: usize,
        token: &'static str,
    },

    #[error("unexpected end of input at position {position} (segment {index})")]
    UnexpectedEnd { index: usize, position: usize },

    #[error("unconsumed input at position {position}")]
    TrailingInput { position: usize },

    #[error("pattern has no {field} field")]
    MissingField { field: &'static str },

    #[error(
        "weekday {found} does not match the parsed date's weekday {expected} \
         at position {position} (segment {index})"
    )]
    WeekdayMismatch {
        index: usize,
        position: usize,
        expected: u8,
        found: u8,
    },

    /// The fields parsed but do not form a date. `index` and `position` point
    /// at the field that made it invalid.
    #[error("invalid date at position {position} (segment {index}): {source}")]
    InvalidDate {
        index: usize,
        position: usize,
        source: DateError,
    },

    #[error("invalid pattern: {0}")]
    Pattern(FormatError),
}

/// Any error produced by the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
