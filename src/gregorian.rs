//! Proleptic Gregorian dates.

use std::fmt;
use std::str::FromStr;

use crate::convert::{self, gregorian_month_length, gregorian_to_day_number};
use crate::error::{Calendar, DateError, ParseError};
use crate::jalali::JalaliDate;
use crate::weekday::Weekday;

/// A valid date in the proleptic Gregorian calendar.
///
/// Ordering follows the calendar. `Display` and `FromStr` use the ISO-8601
/// `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Create a Gregorian date, validating month and day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth {
                calendar: Calendar::Gregorian,
                year,
                month,
            });
        }
        let max = gregorian_month_length(year, month);
        if day < 1 || day > max {
            return Err(DateError::InvalidDate {
                calendar: Calendar::Gregorian,
                year,
                month,
                day,
                max,
            });
        }
        Ok(GregorianDate { year, month, day })
    }

    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        GregorianDate { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Days since 1970-01-01.
    pub const fn to_day_number(&self) -> i64 {
        gregorian_to_day_number(self.year as i64, self.month, self.day)
    }

    /// Returns the day of the week.
    pub const fn weekday(&self) -> Weekday {
        convert::weekday_from_day_number(self.to_day_number())
    }

    /// Convert to the Jalali calendar.
    pub fn to_jalali(self) -> Result<JalaliDate, DateError> {
        convert::to_jalali(self)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parses a fixed-width ISO-8601 calendar date (`YYYY-MM-DD`).
impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let mut position = 0;

        let year = read_fixed_digits(bytes, &mut position, 4, 0, "year")?;
        expect_dash(bytes, &mut position, 1)?;
        let month = read_fixed_digits(bytes, &mut position, 2, 2, "month")?;
        expect_dash(bytes, &mut position, 3)?;
        let day = read_fixed_digits(bytes, &mut position, 2, 4, "day")?;

        if position < bytes.len() {
            return Err(ParseError::TrailingInput { position });
        }

        GregorianDate::new(year as i32, month as u8, day as u8).map_err(|source| {
            // Segments: year 0 at byte 0, month 2 at byte 5, day 4 at byte 8.
            let (index, position) = match source {
                DateError::InvalidMonth { .. } => (2, 5),
                _ => (4, 8),
            };
            ParseError::InvalidDate {
                index,
                position,
                source,
            }
        })
    }
}

fn read_fixed_digits(
    bytes: &[u8],
    position: &mut usize,
    width: usize,
    index: usize,
    token: &'static str,
) -> Result<u32, ParseError> {
    let end = *position + width;
    if end > bytes.len() {
        return Err(ParseError::UnexpectedEnd {
            index,
            position: *position,
        });
    }
    let mut value = 0u32;
    for &b in &bytes[*position..end] {
        if !b.is_ascii_digit() {
            return Err(ParseError::ExpectedNumber {
                index,
                position: *position,
                token,
            });
        }
        value = value * 10 + u32::from(b - b'0');
    }
    *position = end;
    Ok(value)
}

fn expect_dash(bytes: &[u8], position: &mut usize, index: usize) -> Result<(), ParseError> {
    match bytes.get(*position) {
        Some(b'-') => {
            *position += 1;
            Ok(())
        }
        Some(_) => Err(ParseError::ExpectedLiteral {
            index,
            position: *position,
            expected: "-".to_string(),
        }),
        None => Err(ParseError::UnexpectedEnd {
            index,
            position: *position,
        }),
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::GregorianDate;
    use crate::error::{Calendar, DateError};
    use chrono::{Datelike, NaiveDate};

    impl From<NaiveDate> for GregorianDate {
        fn from(date: NaiveDate) -> Self {
            GregorianDate::from_parts_unchecked(date.year(), date.month() as u8, date.day() as u8)
        }
    }

    impl TryFrom<GregorianDate> for NaiveDate {
        type Error = DateError;

        fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
            NaiveDate::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day()))
                .ok_or(DateError::OutOfRange {
                    calendar: Calendar::Gregorian,
                    year: date.year(),
                    month: date.month(),
                    day: date.day(),
                })
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(matches!(
            GregorianDate::new(2023, 2, 29),
            Err(DateError::InvalidDate { max: 28, .. })
        ));
        assert!(matches!(
            GregorianDate::new(2023, 13, 1),
            Err(DateError::InvalidMonth { month: 13, .. })
        ));
        assert!(GregorianDate::new(2023, 1, 0).is_err());
    }

    #[test]
    fn test_iso_roundtrip() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(date.to_string(), "2024-03-20");
        assert_eq!("2024-03-20".parse::<GregorianDate>().unwrap(), date);
    }

    #[test]
    fn test_iso_errors() {
        assert!(matches!(
            "2024/03/20".parse::<GregorianDate>(),
            Err(ParseError::ExpectedLiteral { index: 1, position: 4, .. })
        ));
        assert!(matches!(
            "2024-03".parse::<GregorianDate>(),
            Err(ParseError::UnexpectedEnd { index: 3, .. })
        ));
        assert!(matches!(
            "2024-03-20T00:00".parse::<GregorianDate>(),
            Err(ParseError::TrailingInput { position: 10 })
        ));
        assert!(matches!(
            "2023-02-30".parse::<GregorianDate>(),
            Err(ParseError::InvalidDate {
                index: 4,
                position: 8,
                ..
            })
        ));
        assert!(matches!(
            "2023-13-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidDate {
                index: 2,
                position: 5,
                source: DateError::InvalidMonth { month: 13, .. },
            })
        ));
    }

    #[test]
    fn test_weekday() {
        let date = GregorianDate::new(2024, 3, 20).unwrap();
        assert_eq!(date.weekday(), Weekday::Wednesday);
    }
}
