//! Jalali (Persian, Solar Hijri) dates and calendar arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::ast::DateFormat;
use crate::convert::{
    self, day_number_to_jalali, in_range, is_jalali_leap_year, jalali_days_before_month,
    jalali_month_length, jalali_to_day_number, MAX_DAY_NUMBER, MIN_DAY_NUMBER,
};
use crate::error::{Calendar, DateError, ParseError};
use crate::gregorian::GregorianDate;
use crate::locale::Locale;
use crate::weekday::Weekday;

/// A valid date in the Jalali calendar.
///
/// Instances are immutable; every arithmetic operation returns a new date.
/// Ordering follows the calendar, so `clamp` can bound a date between a
/// minimum and a maximum.
///
/// `Display` and `FromStr` use the `YYYY/MM/DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JalaliDate {
    /// Create a Jalali date.
    ///
    /// Fails with [`DateError::InvalidMonth`] when `month` is outside 1-12
    /// and with [`DateError::InvalidDate`] when `day` is outside the month.
    /// Esfand (month 12) has 30 days in leap years and 29 otherwise. Dates
    /// outside [`JalaliDate::min`]`..=`[`JalaliDate::max`] fail with
    /// [`DateError::OutOfRange`].
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth {
                calendar: Calendar::Jalali,
                year,
                month,
            });
        }
        let max = jalali_month_length(year, month);
        if day < 1 || day > max {
            return Err(DateError::InvalidDate {
                calendar: Calendar::Jalali,
                year,
                month,
                day,
                max,
            });
        }
        let date = JalaliDate { year, month, day };
        if !in_range(date.to_day_number()) {
            return Err(date.out_of_range());
        }
        Ok(date)
    }

    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        JalaliDate { year, month, day }
    }

    /// Create the date for a day number (days since 1970-01-01).
    pub fn from_day_number(day_number: i64) -> Result<Self, DateError> {
        if !in_range(day_number) {
            return Err(DateError::DayNumberOutOfRange { day_number });
        }
        let (year, month, day) = day_number_to_jalali(day_number);
        Ok(JalaliDate { year, month, day })
    }

    /// Convert a Gregorian date.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, DateError> {
        convert::to_jalali(date)
    }

    /// The earliest supported date (the equivalent of Gregorian 0001-01-01).
    pub const fn min() -> Self {
        let (year, month, day) = day_number_to_jalali(MIN_DAY_NUMBER);
        JalaliDate { year, month, day }
    }

    /// The latest supported date (the equivalent of Gregorian 9999-12-31).
    pub const fn max() -> Self {
        let (year, month, day) = day_number_to_jalali(MAX_DAY_NUMBER);
        JalaliDate { year, month, day }
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

    /// Re-checks the month/day and range invariants.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= jalali_month_length(self.year, self.month)
            && in_range(self.to_day_number())
    }

    pub(crate) fn validate(&self) -> Result<(), DateError> {
        JalaliDate::new(self.year, self.month, self.day).map(|_| ())
    }

    /// Days since 1970-01-01 (Gregorian).
    pub const fn to_day_number(&self) -> i64 {
        jalali_to_day_number(self.year, self.month, self.day)
    }

    /// Convert to the Gregorian calendar.
    pub fn to_gregorian(self) -> Result<GregorianDate, DateError> {
        convert::to_gregorian(self)
    }

    pub const fn weekday(&self) -> Weekday {
        convert::weekday_from_day_number(self.to_day_number())
    }

    /// Day of the year, starting at 1 on Nowruz.
    pub const fn day_of_year(&self) -> u16 {
        (jalali_days_before_month(self.month) + self.day as i64) as u16
    }

    pub const fn is_leap_year(&self) -> bool {
        is_jalali_leap_year(self.year)
    }

    pub const fn days_in_month(&self) -> u8 {
        jalali_month_length(self.year, self.month)
    }

    pub const fn days_in_year(&self) -> u16 {
        convert::days_in_year(self.year)
    }

    pub const fn first_of_month(&self) -> Self {
        JalaliDate {
            day: 1,
            ..*self
        }
    }

    pub const fn last_of_month(&self) -> Self {
        JalaliDate {
            day: self.days_in_month(),
            ..*self
        }
    }

    /// Add `days` (possibly negative) to this date.
    ///
    /// The result rolls across month and year boundaries. Fails only if it
    /// leaves the supported range.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let day_number = self
            .to_day_number()
            .checked_add(days)
            .filter(|&n| in_range(n))
            .ok_or_else(|| self.out_of_range())?;
        let (year, month, day) = day_number_to_jalali(day_number);
        Ok(JalaliDate { year, month, day })
    }

    /// Add `months` (possibly negative) to this date.
    ///
    /// The year carries over in both directions. When the day of the month does
    /// not exist in the resulting month, it is clamped to the month's last
    /// day: 1402/06/31 plus one month is 1402/07/30.
    pub fn add_months(self, months: i64) -> Result<Self, DateError> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let index = index
            .checked_add(months)
            .ok_or_else(|| self.out_of_range())?;
        let year = i32::try_from(index.div_euclid(12)).map_err(|_| self.out_of_range())?;
        let month = index.rem_euclid(12) as u8 + 1;
        self.clamped(year, month)
    }

    /// Add `years` (possibly negative) to this date.
    ///
    /// 30 Esfand of a leap year becomes 29 Esfand when the target year is
    /// not leap.
    pub fn add_years(self, years: i64) -> Result<Self, DateError> {
        let year = i64::from(self.year)
            .checked_add(years)
            .and_then(|y| i32::try_from(y).ok())
            .ok_or_else(|| self.out_of_range())?;
        self.clamped(year, self.month)
    }

    fn clamped(self, year: i32, month: u8) -> Result<Self, DateError> {
        let day = self.day.min(jalali_month_length(year, month));
        let result = JalaliDate { year, month, day };
        if !in_range(result.to_day_number()) {
            return Err(self.out_of_range());
        }
        Ok(result)
    }

    fn out_of_range(&self) -> DateError {
        DateError::OutOfRange {
            calendar: Calendar::Jalali,
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Format this date with a pattern such as `YYYY/MM/DD`.
    ///
    /// Compiles the pattern on every call; use [`DateFormat`] or the
    /// engine's cache to reuse a compiled pattern.
    pub fn format(&self, pattern: &str, locale: &Locale) -> Result<String, crate::Error> {
        let format = DateFormat::parse(pattern)?;
        Ok(format.format(self, locale)?)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Parses the `YYYY/MM/DD` form, accepting Latin and Persian digits.
impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::date_input().parse_date(s, Locale::persian())
    }
}

impl TryFrom<GregorianDate> for JalaliDate {
    type Error = DateError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        convert::to_jalali(date)
    }
}

impl TryFrom<JalaliDate> for GregorianDate {
    type Error = DateError;

    fn try_from(date: JalaliDate) -> Result<Self, Self::Error> {
        convert::to_gregorian(date)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::JalaliDate;
    use crate::error::DateError;
    use crate::gregorian::GregorianDate;
    use chrono::NaiveDate;

    impl TryFrom<NaiveDate> for JalaliDate {
        type Error = DateError;

        fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
            GregorianDate::from(date).to_jalali()
        }
    }

    impl TryFrom<JalaliDate> for NaiveDate {
        type Error = DateError;

        fn try_from(date: JalaliDate) -> Result<Self, Self::Error> {
            NaiveDate::try_from(date.to_gregorian()?)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
