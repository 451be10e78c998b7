//! Date formatting

use crate::ast::{DateFormat, DatePart, FormatPart};
use crate::error::FormatError;
use crate::jalali::JalaliDate;
use crate::locale::{Locale, NameStyle};
use crate::options::FormatOptions;

/// Format a date using the given pattern.
pub fn format_date(
    date: &JalaliDate,
    format: &DateFormat,
    opts: &FormatOptions<'_>,
) -> Result<String, FormatError> {
    date.validate().map_err(FormatError::InvalidDate)?;

    let mut result = String::new();

    for part in format.parts() {
        match part {
            FormatPart::Literal(s) => result.push_str(s),
            FormatPart::DatePart(date_part) => {
                let formatted = format_date_part(*date_part, date, opts.locale)?;
                if date_part.is_numeric() {
                    result.push_str(&opts.digits.localize(formatted));
                } else {
                    result.push_str(&formatted);
                }
            }
        }
    }

    Ok(result)
}

/// Format a single date part.
fn format_date_part(
    part: DatePart,
    date: &JalaliDate,
    locale: &Locale,
) -> Result<String, FormatError> {
    let month_index = (date.month() - 1) as usize;
    let formatted = match part {
        // Year formatting
        DatePart::Year => format!("{}", date.year()),
        DatePart::Year2 => format!("{:02}", date.year().rem_euclid(100)),
        DatePart::Year4 if date.year() < 0 => format!("-{:04}", date.year().unsigned_abs()),
        DatePart::Year4 => format!("{:04}", date.year()),

        // Month formatting
        DatePart::Month => format!("{}", date.month()),
        DatePart::Month2 => format!("{:02}", date.month()),
        DatePart::MonthShort | DatePart::MonthLong => {
            let style = part.name_style().unwrap_or(NameStyle::Long);
            let names = locale
                .month_names_exact(style)
                .ok_or_else(|| missing(part, locale))?;
            names[month_index].to_string()
        }

        // Day formatting
        DatePart::Day => format!("{}", date.day()),
        DatePart::Day2 => format!("{:02}", date.day()),
        DatePart::DayOfYear => format!("{}", date.day_of_year()),
        DatePart::DayOfYear3 => format!("{:03}", date.day_of_year()),

        // Weekday formatting
        DatePart::Weekday => format!("{}", date.weekday().to_sunday_index()),
        DatePart::WeekdayNarrow | DatePart::WeekdayShort | DatePart::WeekdayLong => {
            let style = part.name_style().unwrap_or(NameStyle::Long);
            let names = locale
                .weekday_names_exact(style)
                .ok_or_else(|| missing(part, locale))?;
            names[date.weekday().to_sunday_index() as usize].to_string()
        }
    };
    Ok(formatted)
}

fn missing(part: DatePart, locale: &Locale) -> FormatError {
    FormatError::MissingLocaleData {
        token: part.token(),
        locale: locale.id,
    }
}
