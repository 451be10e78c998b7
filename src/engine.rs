//! The calendar engine interface consumed by date-picker bindings.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::ast::DateFormat;
use crate::cache::FormatCache;
use crate::convert;
use crate::error::{Error, FormatError};
use crate::gregorian::GregorianDate;
use crate::jalali::JalaliDate;
use crate::locale::{Locale, NameStyle};
use crate::options::{Digits, FormatOptions};
use crate::weekday::Weekday;

/// Everything a UI layer needs to drive a Jalali date picker.
///
/// Implementors provide a locale, a digit set and pattern compilation; the
/// remaining operations have default implementations on top of them.
pub trait CalendarEngine {
    /// The locale used for names and the first day of the week.
    fn locale(&self) -> &Locale;

    /// Compile (or fetch an already compiled) format pattern.
    fn compile(&self, pattern: &str) -> Result<Arc<DateFormat>, FormatError>;

    /// The digit set for formatted numbers.
    fn digits(&self) -> Digits {
        Digits::Latin
    }

    fn to_jalali(&self, date: GregorianDate) -> Result<JalaliDate, Error> {
        Ok(convert::to_jalali(date)?)
    }

    fn to_gregorian(&self, date: JalaliDate) -> Result<GregorianDate, Error> {
        Ok(convert::to_gregorian(date)?)
    }

    /// Validate and build a date.
    fn create_date(&self, year: i32, month: u8, day: u8) -> Result<JalaliDate, Error> {
        Ok(JalaliDate::new(year, month, day)?)
    }

    fn add_days(&self, date: JalaliDate, days: i64) -> Result<JalaliDate, Error> {
        Ok(date.add_days(days)?)
    }

    fn add_months(&self, date: JalaliDate, months: i64) -> Result<JalaliDate, Error> {
        Ok(date.add_months(months)?)
    }

    fn add_years(&self, date: JalaliDate, years: i64) -> Result<JalaliDate, Error> {
        Ok(date.add_years(years)?)
    }

    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, Error> {
        Ok(convert::days_in_month(year, month)?)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        convert::is_jalali_leap_year(year)
    }

    fn day_of_week(&self, date: JalaliDate) -> Weekday {
        date.weekday()
    }

    fn month_names(&self, style: NameStyle) -> Vec<&str> {
        self.locale().month_names(style).to_vec()
    }

    /// Weekday names, Sunday first.
    fn weekday_names(&self, style: NameStyle) -> Vec<&str> {
        self.locale().weekday_names(style).to_vec()
    }

    fn first_day_of_week(&self) -> Weekday {
        self.locale().first_day_of_week()
    }

    /// Labels for the day cells of a month: `"1"` through `"31"`.
    fn date_names(&self) -> Vec<String> {
        (1..=31)
            .map(|day: u32| self.digits().localize(day.to_string()))
            .collect()
    }

    fn year_name(&self, date: JalaliDate) -> String {
        self.digits().localize(date.year().to_string())
    }

    /// Number of cells before the first day of the month in a week row
    /// starting at [`first_day_of_week`](Self::first_day_of_week).
    fn month_start_offset(&self, year: i32, month: u8) -> Result<u8, Error> {
        let first = JalaliDate::new(year, month, 1)?;
        Ok(self.first_day_of_week().days_until(first.weekday()))
    }

    fn format(&self, date: &JalaliDate, pattern: &str) -> Result<String, Error> {
        let format = self.compile(pattern)?;
        let opts = FormatOptions::new(self.locale()).with_digits(self.digits());
        Ok(format.format_with(date, &opts)?)
    }

    fn parse(&self, text: &str, pattern: &str) -> Result<JalaliDate, Error> {
        let format = self.compile(pattern)?;
        Ok(format.parse_date(text, self.locale())?)
    }

    /// Parse `text` with the first of `patterns` that matches it.
    ///
    /// Patterns are tried in order. When none matches, the last pattern's
    /// parse error is returned; an empty list fails with
    /// [`FormatError::EmptyPattern`]. A pattern that does not compile fails
    /// immediately.
    fn parse_any(&self, text: &str, patterns: &[&str]) -> Result<JalaliDate, Error> {
        let mut last = Error::Format(FormatError::EmptyPattern);
        for pattern in patterns {
            let format = self.compile(pattern)?;
            match format.parse_date(text, self.locale()) {
                Ok(date) => return Ok(date),
                Err(err) => last = err.into(),
            }
        }
        Err(last)
    }

    /// The Gregorian ISO-8601 date (`YYYY-MM-DD`) of a Jalali date.
    fn to_iso8601(&self, date: JalaliDate) -> Result<String, Error> {
        Ok(self.to_gregorian(date)?.to_string())
    }

    /// Read an ISO-8601 Gregorian date string. Empty input is `None`.
    fn deserialize(&self, value: &str) -> Result<Option<JalaliDate>, Error> {
        if value.is_empty() {
            return Ok(None);
        }
        let gregorian: GregorianDate = value.parse()?;
        Ok(Some(self.to_jalali(gregorian)?))
    }
}

/// The default engine: a locale plus a cache of compiled patterns.
///
/// It is `Send + Sync`; construct one at startup and share it by reference.
#[derive(Debug)]
pub struct JalaliEngine<'a> {
    locale: &'a Locale,
    digits: Digits,
    formats: FormatCache,
}

impl Default for JalaliEngine<'static> {
    fn default() -> Self {
        JalaliEngine::new(Locale::persian())
    }
}

impl<'a> JalaliEngine<'a> {
    pub fn new(locale: &'a Locale) -> Self {
        JalaliEngine {
            locale,
            digits: Digits::Latin,
            formats: FormatCache::new(),
        }
    }

    pub fn with_cache_capacity(locale: &'a Locale, capacity: NonZeroUsize) -> Self {
        JalaliEngine {
            locale,
            digits: Digits::Latin,
            formats: FormatCache::with_capacity(capacity),
        }
    }

    pub fn with_digits(self, digits: Digits) -> Self {
        JalaliEngine { digits, ..self }
    }

    /// The pattern cache backing [`CalendarEngine::compile`].
    pub fn formats(&self) -> &FormatCache {
        &self.formats
    }
}

impl CalendarEngine for JalaliEngine<'_> {
    fn locale(&self) -> &Locale {
        self.locale
    }

    fn compile(&self, pattern: &str) -> Result<Arc<DateFormat>, FormatError> {
        self.formats.get_or_parse(pattern)
    }

    fn digits(&self) -> Digits {
        self.digits
    }
}
