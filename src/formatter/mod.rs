//! Date formatting engine

mod date;

use crate::ast::DateFormat;
use crate::error::FormatError;
use crate::jalali::JalaliDate;
use crate::locale::Locale;
use crate::options::FormatOptions;

impl DateFormat {
    /// Format a date with this pattern, using `locale` for names.
    pub fn format(&self, date: &JalaliDate, locale: &Locale) -> Result<String, FormatError> {
        self.format_with(date, &FormatOptions::new(locale))
    }

    /// Format a date with explicit options.
    ///
    /// Fails if the date does not hold its month/day invariant, or if the
    /// pattern needs a name variant the locale does not have.
    pub fn format_with(
        &self,
        date: &JalaliDate,
        opts: &FormatOptions<'_>,
    ) -> Result<String, FormatError> {
        date::format_date(date, self, opts)
    }
}
