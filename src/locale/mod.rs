//! Locale tables: month and weekday names and the first day of the week.

mod builtin;

use crate::weekday::Weekday;

/// Width of a month or weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    /// Full name, e.g. `Farvardin`
    Long,
    /// Abbreviated name, e.g. `Far`
    Short,
    /// One or two letters, e.g. `Sa`
    Narrow,
}

/// Month and weekday names for one language.
///
/// Long names are mandatory. Short and narrow variants are optional; the
/// accessors fall back to the next wider style, while formatting a token
/// that needs a missing variant fails.
///
/// Weekday tables are ordered from Sunday to Saturday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub id: &'static str,
    pub month_names_long: [&'static str; 12],
    pub month_names_short: Option<[&'static str; 12]>,
    pub month_names_narrow: Option<[&'static str; 12]>,
    pub weekday_names_long: [&'static str; 7],
    pub weekday_names_short: Option<[&'static str; 7]>,
    pub weekday_names_narrow: Option<[&'static str; 7]>,
    pub first_day_of_week: Weekday,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::persian().clone()
    }
}

impl Locale {
    /// Persian (`fa`), the calendar's native locale.
    pub fn persian() -> &'static Locale {
        &builtin::PERSIAN
    }

    /// English (`en`) with transliterated month names.
    pub fn english() -> &'static Locale {
        &builtin::ENGLISH
    }

    /// Look up a built-in locale by language tag (`fa`, `fa-IR`, `en`,
    /// `en-US`, ...). Only the language subtag is significant.
    pub fn by_id(id: &str) -> Option<&'static Locale> {
        let language = id.split(['-', '_']).next().unwrap_or(id);
        builtin::ALL
            .iter()
            .copied()
            .find(|locale| locale.id.eq_ignore_ascii_case(language))
    }

    /// Month names in the requested style, falling back to wider styles.
    pub fn month_names(&self, style: NameStyle) -> &[&'static str; 12] {
        match style {
            NameStyle::Long => &self.month_names_long,
            NameStyle::Short => self
                .month_names_short
                .as_ref()
                .unwrap_or(&self.month_names_long),
            NameStyle::Narrow => self
                .month_names_narrow
                .as_ref()
                .unwrap_or_else(|| self.month_names(NameStyle::Short)),
        }
    }

    /// Weekday names (Sunday first) in the requested style, falling back to
    /// wider styles.
    pub fn weekday_names(&self, style: NameStyle) -> &[&'static str; 7] {
        match style {
            NameStyle::Long => &self.weekday_names_long,
            NameStyle::Short => self
                .weekday_names_short
                .as_ref()
                .unwrap_or(&self.weekday_names_long),
            NameStyle::Narrow => self
                .weekday_names_narrow
                .as_ref()
                .unwrap_or_else(|| self.weekday_names(NameStyle::Short)),
        }
    }

    /// Month names in exactly the requested style, if the locale has them.
    pub fn month_names_exact(&self, style: NameStyle) -> Option<&[&'static str; 12]> {
        match style {
            NameStyle::Long => Some(&self.month_names_long),
            NameStyle::Short => self.month_names_short.as_ref(),
            NameStyle::Narrow => self.month_names_narrow.as_ref(),
        }
    }

    /// Weekday names in exactly the requested style, if the locale has them.
    pub fn weekday_names_exact(&self, style: NameStyle) -> Option<&[&'static str; 7]> {
        match style {
            NameStyle::Long => Some(&self.weekday_names_long),
            NameStyle::Short => self.weekday_names_short.as_ref(),
            NameStyle::Narrow => self.weekday_names_narrow.as_ref(),
        }
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }
}
