//! Parsing date text against a compiled format pattern.
//!
//! The scanner makes a single left-to-right pass over the text, driven by
//! the pattern's segments. Each segment matches locally (fixed width,
//! bounded greedy digits, or the longest locale name) and there is no
//! backtracking. The parse either consumes every segment and all of the
//! text, or fails naming the segment index and text position.

use crate::ast::{DateFormat, DatePart, FormatPart};
use crate::convert::{days_in_year, jalali_month_day};
use crate::error::{DateError, FormatError, ParseError};
use crate::jalali::JalaliDate;
use crate::locale::{Locale, NameStyle};

/// Two-digit years above this map to 13xx, the rest to 14xx.
const TWO_DIGIT_YEAR_PIVOT: i64 = 47;

impl DateFormat {
    /// Parse `text` into a date using this pattern.
    ///
    /// Digits may be Latin, Persian (`۰-۹`) or Arabic-Indic (`٠-٩`). Names
    /// match case-insensitively against `locale`. The pattern must contain
    /// a year; a missing month or day defaults to 1.
    pub fn parse_date(&self, text: &str, locale: &Locale) -> Result<JalaliDate, ParseError> {
        let mut scanner = Scanner::new(text);
        let mut fields = Fields::default();

        for (index, part) in self.parts().iter().enumerate() {
            match part {
                FormatPart::Literal(expected) => scanner.expect_literal(index, expected)?,
                FormatPart::DatePart(date_part) => {
                    let position = scanner.position;
                    let value = scanner.read_part(index, *date_part, locale)?;
                    fields.set(*date_part, value, index, position)?;
                }
            }
        }

        if scanner.position < text.len() {
            return Err(ParseError::TrailingInput {
                position: scanner.position,
            });
        }

        fields.resolve()
    }
}

/// A field value with the segment index and text position it came from.
#[derive(Debug, Clone, Copy)]
struct Field {
    value: i64,
    index: usize,
    position: usize,
}

#[derive(Debug, Default)]
struct Fields {
    year: Option<Field>,
    month: Option<Field>,
    day: Option<Field>,
    day_of_year: Option<Field>,
    weekday: Option<Field>,
}

impl Fields {
    fn set(
        &mut self,
        part: DatePart,
        value: i64,
        index: usize,
        position: usize,
    ) -> Result<(), ParseError> {
        let slot = match part {
            DatePart::Year | DatePart::Year2 | DatePart::Year4 => &mut self.year,
            DatePart::Month | DatePart::Month2 | DatePart::MonthShort | DatePart::MonthLong => {
                &mut self.month
            }
            DatePart::Day | DatePart::Day2 => &mut self.day,
            DatePart::DayOfYear | DatePart::DayOfYear3 => &mut self.day_of_year,
            DatePart::Weekday
            | DatePart::WeekdayNarrow
            | DatePart::WeekdayShort
            | DatePart::WeekdayLong => &mut self.weekday,
        };
        if let Some(previous) = *slot {
            if previous.value != value {
                return Err(ParseError::ConflictingField {
                    index,
                    position,
                    token: part.token(),
                });
            }
        }
        *slot = Some(Field {
            value,
            index,
            position,
        });
        Ok(())
    }

    fn resolve(self) -> Result<JalaliDate, ParseError> {
        let year_field = self
            .year
            .ok_or(ParseError::MissingField { field: "year" })?;
        let year = i32::try_from(year_field.value).map_err(|_| ParseError::FieldOutOfBounds {
            index: year_field.index,
            position: year_field.position,
            token: "year",
        })?;

        let mut month = self.month.map_or(1, |f| f.value as u8);
        let mut day = self.day.map_or(1, |f| f.value as u8);

        if let Some(ordinal) = self.day_of_year {
            if ordinal.value > i64::from(days_in_year(year)) {
                return Err(ParseError::FieldOutOfBounds {
                    index: ordinal.index,
                    position: ordinal.position,
                    token: "day of year",
                });
            }
            let (m, d) = jalali_month_day(ordinal.value - 1);
            let disagrees = self.month.is_some_and(|f| f.value != i64::from(m))
                || self.day.is_some_and(|f| f.value != i64::from(d));
            if disagrees {
                return Err(ParseError::ConflictingField {
                    index: ordinal.index,
                    position: ordinal.position,
                    token: "day of year",
                });
            }
            month = m;
            day = d;
        }

        let date = JalaliDate::new(year, month, day).map_err(|source| {
            let field = self.blame(&source).unwrap_or(year_field);
            ParseError::InvalidDate {
                index: field.index,
                position: field.position,
                source,
            }
        })?;

        if let Some(weekday) = self.weekday {
            let expected = date.weekday().to_sunday_index();
            if i64::from(expected) != weekday.value {
                return Err(ParseError::WeekdayMismatch {
                    index: weekday.index,
                    position: weekday.position,
                    expected,
                    found: weekday.value as u8,
                });
            }
        }

        Ok(date)
    }

    /// The field responsible for a date rejection. Range failures fall back
    /// to the year.
    fn blame(&self, error: &DateError) -> Option<Field> {
        match error {
            DateError::InvalidMonth { .. } => self.month,
            DateError::InvalidDate { .. } => self.day.or(self.day_of_year).or(self.month),
            DateError::OutOfRange { .. } | DateError::DayNumberOutOfRange { .. } => None,
        }
    }
}

struct Scanner<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    fn expect_literal(&mut self, index: usize, expected: &str) -> Result<(), ParseError> {
        if self.rest().starts_with(expected) {
            self.position += expected.len();
            return Ok(());
        }
        if self.at_end() {
            return Err(ParseError::UnexpectedEnd {
                index,
                position: self.position,
            });
        }
        Err(ParseError::ExpectedLiteral {
            index,
            position: self.position,
            expected: expected.to_string(),
        })
    }

    fn read_part(
        &mut self,
        index: usize,
        part: DatePart,
        locale: &Locale,
    ) -> Result<i64, ParseError> {
        if self.at_end() {
            return Err(ParseError::UnexpectedEnd {
                index,
                position: self.position,
            });
        }

        let start = self.position;
        let (value, bounds) = match part {
            DatePart::Year => (self.read_number(index, part, 1, usize::MAX, true)?, None),
            DatePart::Year4 => (self.read_number(index, part, 4, 4, true)?, None),
            DatePart::Year2 => {
                let yy = self.read_number(index, part, 2, 2, false)?;
                let century = if yy > TWO_DIGIT_YEAR_PIVOT { 1300 } else { 1400 };
                (century + yy, None)
            }
            DatePart::Month => (self.read_number(index, part, 1, 2, false)?, Some((1, 12))),
            DatePart::Month2 => (self.read_number(index, part, 2, 2, false)?, Some((1, 12))),
            DatePart::Day => (self.read_number(index, part, 1, 2, false)?, Some((1, 31))),
            DatePart::Day2 => (self.read_number(index, part, 2, 2, false)?, Some((1, 31))),
            DatePart::DayOfYear => (self.read_number(index, part, 1, 3, false)?, Some((1, 366))),
            DatePart::DayOfYear3 => (self.read_number(index, part, 3, 3, false)?, Some((1, 366))),
            DatePart::Weekday => (self.read_number(index, part, 1, 1, false)?, Some((0, 6))),
            DatePart::MonthShort | DatePart::MonthLong => {
                let names = locale
                    .month_names_exact(part.name_style().unwrap_or(NameStyle::Long))
                    .ok_or_else(|| missing(part, locale))?;
                (self.read_name(index, part, names)? as i64 + 1, None)
            }
            DatePart::WeekdayNarrow | DatePart::WeekdayShort | DatePart::WeekdayLong => {
                let names = locale
                    .weekday_names_exact(part.name_style().unwrap_or(NameStyle::Long))
                    .ok_or_else(|| missing(part, locale))?;
                (self.read_name(index, part, names)? as i64, None)
            }
        };

        if let Some((min, max)) = bounds {
            if !(min..=max).contains(&value) {
                return Err(ParseError::FieldOutOfBounds {
                    index,
                    position: start,
                    token: part.token(),
                });
            }
        }
        Ok(value)
    }

    /// Reads between `min` and `max` digits, with an optional leading minus
    /// sign when `signed`.
    fn read_number(
        &mut self,
        index: usize,
        part: DatePart,
        min: usize,
        max: usize,
        signed: bool,
    ) -> Result<i64, ParseError> {
        let start = self.position;
        let mut cursor = self.position;
        let negative = signed && self.rest().starts_with('-');
        if negative {
            cursor += 1;
        }

        let mut value: i64 = 0;
        let mut count = 0;
        while count < max {
            let Some((digit, len)) = digit_at(&self.text[cursor..]) else {
                break;
            };
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(ParseError::FieldOutOfBounds {
                    index,
                    position: start,
                    token: part.token(),
                })?;
            cursor += len;
            count += 1;
        }

        if count < min {
            return Err(ParseError::ExpectedNumber {
                index,
                position: start,
                token: part.token(),
            });
        }
        self.position = cursor;
        Ok(if negative { -value } else { value })
    }

    /// Matches the longest name at the current position, returning its index.
    fn read_name(
        &mut self,
        index: usize,
        part: DatePart,
        names: &[&'static str],
    ) -> Result<usize, ParseError> {
        let rest = self.rest();
        let found = names
            .iter()
            .enumerate()
            .filter(|(_, name)| {
                !name.is_empty()
                    && rest
                        .get(..name.len())
                        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
            })
            .max_by_key(|(_, name)| name.len());

        match found {
            Some((i, name)) => {
                self.position += name.len();
                Ok(i)
            }
            None => Err(ParseError::UnknownName {
                index,
                position: self.position,
                token: part.token(),
            }),
        }
    }
}

/// Decodes one Latin, Persian or Arabic-Indic digit at the start of `s`.
fn digit_at(s: &str) -> Option<(u32, usize)> {
    let c = s.chars().next()?;
    let digit = match c {
        '0'..='9' => c as u32 - '0' as u32,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        _ => return None,
    };
    Some((digit, c.len_utf8()))
}

fn missing(part: DatePart, locale: &Locale) -> ParseError {
    ParseError::Pattern(FormatError::MissingLocaleData {
        token: part.token(),
        locale: locale.id,
    })
}
