//! AST types for parsed format patterns.

use crate::error::FormatError;
use crate::locale::NameStyle;

/// Date format parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    /// `Y` - Year without padding
    Year,
    /// `YY` - Two-digit year
    Year2,
    /// `YYYY` - Four-digit year
    Year4,
    /// `M` - Month as number without leading zero (1-12)
    Month,
    /// `MM` - Month as number with leading zero (01-12)
    Month2,
    /// `MMM` - Month as abbreviated name
    MonthShort,
    /// `MMMM` - Month as full name (Farvardin, Ordibehesht, etc.)
    MonthLong,
    /// `D` - Day of month without leading zero (1-31)
    Day,
    /// `DD` - Day of month with leading zero (01-31)
    Day2,
    /// `DDD` - Day of year without padding (1-366)
    DayOfYear,
    /// `DDDD` - Day of year padded to three digits (001-366)
    DayOfYear3,
    /// `d` - Day of week as number, Sunday being 0
    Weekday,
    /// `dd` - Day of week as narrow name
    WeekdayNarrow,
    /// `ddd` - Day of week as abbreviated name
    WeekdayShort,
    /// `dddd` - Day of week as full name
    WeekdayLong,
}

impl DatePart {
    /// The pattern text of this part.
    pub fn token(&self) -> &'static str {
        match self {
            DatePart::Year => "Y",
            DatePart::Year2 => "YY",
            DatePart::Year4 => "YYYY",
            DatePart::Month => "M",
            DatePart::Month2 => "MM",
            DatePart::MonthShort => "MMM",
            DatePart::MonthLong => "MMMM",
            DatePart::Day => "D",
            DatePart::Day2 => "DD",
            DatePart::DayOfYear => "DDD",
            DatePart::DayOfYear3 => "DDDD",
            DatePart::Weekday => "d",
            DatePart::WeekdayNarrow => "dd",
            DatePart::WeekdayShort => "ddd",
            DatePart::WeekdayLong => "dddd",
        }
    }

    /// Returns the name style for month and weekday name parts.
    pub fn name_style(&self) -> Option<NameStyle> {
        match self {
            DatePart::MonthShort | DatePart::WeekdayShort => Some(NameStyle::Short),
            DatePart::MonthLong | DatePart::WeekdayLong => Some(NameStyle::Long),
            DatePart::WeekdayNarrow => Some(NameStyle::Narrow),
            _ => None,
        }
    }

    /// Returns true if this part renders as digits.
    pub fn is_numeric(&self) -> bool {
        self.name_style().is_none()
    }
}

/// A single segment of a format pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatPart {
    /// Literal text to match or emit as-is
    Literal(String),
    /// Date component
    DatePart(DatePart),
}

/// A compiled format pattern such as `YYYY/MM/DD`.
///
/// Compile once and reuse it to format or parse many dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    parts: Vec<FormatPart>,
}

impl DateFormat {
    /// The pattern used for date input fields.
    pub const DATE_INPUT: &'static str = "YYYY/MM/DD";

    /// The pattern used for month/year header labels.
    pub const MONTH_YEAR_LABEL: &'static str = "YYYY MMMM";

    /// Create a DateFormat from parts. Adjacent literals are merged.
    pub fn from_parts(parts: Vec<FormatPart>) -> Self {
        let mut merged: Vec<FormatPart> = Vec::with_capacity(parts.len());
        for part in parts {
            if let FormatPart::Literal(s) = &part {
                if s.is_empty() {
                    continue;
                }
                if let Some(FormatPart::Literal(prev)) = merged.last_mut() {
                    prev.push_str(s);
                    continue;
                }
            }
            merged.push(part);
        }
        DateFormat { parts: merged }
    }

    /// Get the segments of this format.
    pub fn parts(&self) -> &[FormatPart] {
        &self.parts
    }

    /// Parse a pattern string into a DateFormat.
    pub fn parse(pattern: &str) -> Result<DateFormat, FormatError> {
        crate::parser::parse(pattern)
    }

    /// `YYYY/MM/DD`
    pub fn date_input() -> Self {
        DateFormat::from_parts(vec![
            FormatPart::DatePart(DatePart::Year4),
            FormatPart::Literal("/".to_string()),
            FormatPart::DatePart(DatePart::Month2),
            FormatPart::Literal("/".to_string()),
            FormatPart::DatePart(DatePart::Day2),
        ])
    }

    /// `YYYY MMMM`
    pub fn month_year_label() -> Self {
        DateFormat::from_parts(vec![
            FormatPart::DatePart(DatePart::Year4),
            FormatPart::Literal(" ".to_string()),
            FormatPart::DatePart(DatePart::MonthLong),
        ])
    }

    /// Iterates over the date parts, skipping literals.
    pub fn date_parts(&self) -> impl Iterator<Item = DatePart> + '_ {
        self.parts.iter().filter_map(|p| match p {
            FormatPart::DatePart(part) => Some(*part),
            FormatPart::Literal(_) => None,
        })
    }

    /// Returns true if any segment is a month or weekday name.
    pub fn uses_names(&self) -> bool {
        self.date_parts().any(|p| !p.is_numeric())
    }
}
