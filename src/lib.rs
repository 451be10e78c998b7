//! jalali - Jalali (Persian) calendar engine
//!
//! This crate converts between the Gregorian and Jalali calendars, does
//! calendar-aware arithmetic on Jalali dates, and formats and parses dates
//! with token patterns such as `YYYY/MM/DD` against locale name tables.
//!
//! ```
//! use jalali::{GregorianDate, JalaliDate, Locale};
//!
//! let nowruz = GregorianDate::new(2024, 3, 20)?.to_jalali()?;
//! assert_eq!(nowruz, JalaliDate::new(1403, 1, 1)?);
//! assert_eq!(nowruz.format("YYYY MMMM", Locale::english())?, "1403 Farvardin");
//! # Ok::<(), jalali::Error>(())
//! ```

#[macro_use]
mod logging;

pub mod ast;
pub mod convert;
pub mod error;
pub mod options;

mod cache;
mod engine;
mod formatter;
mod gregorian;
mod jalali;
mod locale;
pub mod parser;
mod scanner;
mod weekday;

pub use ast::{DateFormat, DatePart, FormatPart};
pub use cache::FormatCache;
pub use convert::{days_in_month, is_jalali_leap_year, to_gregorian, to_jalali};
pub use engine::{CalendarEngine, JalaliEngine};
pub use error::{Calendar, DateError, Error, FormatError, ParseError};
pub use gregorian::GregorianDate;
pub use jalali::JalaliDate;
pub use locale::{Locale, NameStyle};
pub use options::{Digits, FormatOptions};
pub use weekday::Weekday;

/// Format a date with a pattern string.
///
/// Convenience function that compiles the pattern on every call. For
/// repeated formatting, compile once with [`DateFormat::parse`] or use a
/// [`JalaliEngine`].
pub fn format(date: &JalaliDate, pattern: &str, locale: &Locale) -> Result<String, Error> {
    let format = DateFormat::parse(pattern)?;
    Ok(format.format(date, locale)?)
}

/// Parse text into a date with a pattern string.
pub fn parse(text: &str, pattern: &str, locale: &Locale) -> Result<JalaliDate, Error> {
    let format = DateFormat::parse(pattern)?;
    Ok(format.parse_date(text, locale)?)
}
