//! Formatting options and configuration.

use crate::locale::Locale;

/// The digit set used for numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Digits {
    /// `0123456789`
    #[default]
    Latin,
    /// Extended Arabic-Indic digits as written in Persian, `۰۱۲۳۴۵۶۷۸۹`
    Persian,
}

impl Digits {
    /// Returns the character for zero in this digit set.
    pub fn zero(&self) -> char {
        match self {
            Digits::Latin => '0',
            Digits::Persian => '\u{06F0}',
        }
    }

    /// Rewrites the ASCII digits of `s` into this digit set.
    pub(crate) fn localize(&self, s: String) -> String {
        match self {
            Digits::Latin => s,
            Digits::Persian => s
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(self.zero() as u32 + d).unwrap_or(c),
                    None => c,
                })
                .collect(),
        }
    }
}

/// Options for formatting dates.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions<'a> {
    /// The locale providing month and weekday names.
    pub locale: &'a Locale,
    /// The digit set for numeric fields.
    pub digits: Digits,
}

impl Default for FormatOptions<'static> {
    fn default() -> Self {
        FormatOptions::new(Locale::persian())
    }
}

impl<'a> FormatOptions<'a> {
    pub fn new(locale: &'a Locale) -> Self {
        FormatOptions {
            locale,
            digits: Digits::Latin,
        }
    }

    pub fn with_digits(self, digits: Digits) -> Self {
        FormatOptions { digits, ..self }
    }
}
