//! Parser for date format patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{DateFormat, DatePart, FormatPart};
use crate::error::FormatError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Parse a format pattern into a DateFormat.
pub fn parse(pattern: &str) -> Result<DateFormat, FormatError> {
    if pattern.is_empty() {
        return Err(FormatError::EmptyPattern);
    }

    let tokens = Lexer::new(pattern).tokenize()?;
    let mut parts = Vec::with_capacity(tokens.len());

    for SpannedToken { token, start, .. } in tokens {
        let part = match token {
            Token::Eof => break,
            Token::Literal(ch) | Token::EscapedChar(ch) => FormatPart::Literal(ch.to_string()),
            Token::QuotedString(s) => FormatPart::Literal(s),
            Token::Year(width) => FormatPart::DatePart(year_part(width, start)?),
            Token::Month(width) => FormatPart::DatePart(month_part(width, start)?),
            Token::Day(width) => FormatPart::DatePart(day_part(width, start)?),
            Token::Weekday(width) => FormatPart::DatePart(weekday_part(width, start)?),
        };
        parts.push(part);
    }

    Ok(DateFormat::from_parts(parts))
}

fn invalid_width(token: char, width: usize, position: usize) -> FormatError {
    FormatError::InvalidTokenWidth {
        position,
        token,
        width,
    }
}

fn year_part(width: usize, position: usize) -> Result<DatePart, FormatError> {
    match width {
        1 => Ok(DatePart::Year),
        2 => Ok(DatePart::Year2),
        4 => Ok(DatePart::Year4),
        _ => Err(invalid_width('Y', width, position)),
    }
}

fn month_part(width: usize, position: usize) -> Result<DatePart, FormatError> {
    match width {
        1 => Ok(DatePart::Month),
        2 => Ok(DatePart::Month2),
        3 => Ok(DatePart::MonthShort),
        4 => Ok(DatePart::MonthLong),
        _ => Err(invalid_width('M', width, position)),
    }
}

fn day_part(width: usize, position: usize) -> Result<DatePart, FormatError> {
    match width {
        1 => Ok(DatePart::Day),
        2 => Ok(DatePart::Day2),
        3 => Ok(DatePart::DayOfYear),
        4 => Ok(DatePart::DayOfYear3),
        _ => Err(invalid_width('D', width, position)),
    }
}

fn weekday_part(width: usize, position: usize) -> Result<DatePart, FormatError> {
    match width {
        1 => Ok(DatePart::Weekday),
        2 => Ok(DatePart::WeekdayNarrow),
        3 => Ok(DatePart::WeekdayShort),
        4 => Ok(DatePart::WeekdayLong),
        _ => Err(invalid_width('d', width, position)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        let fmt = parse("YYYY/MM/DD").unwrap();
        assert_eq!(
            fmt.parts(),
            &[
                FormatPart::DatePart(DatePart::Year4),
                FormatPart::Literal("/".to_string()),
                FormatPart::DatePart(DatePart::Month2),
                FormatPart::Literal("/".to_string()),
                FormatPart::DatePart(DatePart::Day2),
            ]
        );
    }

    #[test]
    fn test_literals_are_merged() {
        let fmt = parse("dddd, [the] D").unwrap();
        assert_eq!(fmt.parts()[1], FormatPart::Literal(", the ".to_string()));
    }

    #[test]
    fn test_invalid_width() {
        assert_eq!(
            parse("YYY").unwrap_err(),
            FormatError::InvalidTokenWidth {
                position: 0,
                token: 'Y',
                width: 3
            }
        );
        assert!(matches!(
            parse("DD/MMMMM"),
            Err(FormatError::InvalidTokenWidth { position: 3, .. })
        ));
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(parse("").unwrap_err(), FormatError::EmptyPattern);
    }
}
