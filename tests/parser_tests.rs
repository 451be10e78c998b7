//! Tests for the format pattern parser.

use jalali::ast::{DatePart, FormatPart};
use jalali::{DateFormat, FormatError, NameStyle};

#[test]
fn test_parse_month_year_label() {
    let fmt = DateFormat::parse("YYYY MMMM").unwrap();
    assert_eq!(fmt, DateFormat::month_year_label());
    assert!(fmt.uses_names());
}

#[test]
fn test_parse_all_widths() {
    let pattern = "Y YY YYYY M MM MMM MMMM D DD DDD DDDD d dd ddd dddd";
    let fmt = DateFormat::parse(pattern).unwrap();
    let parts: Vec<DatePart> = fmt.date_parts().collect();
    assert_eq!(
        parts,
        vec![
            DatePart::Year,
            DatePart::Year2,
            DatePart::Year4,
            DatePart::Month,
            DatePart::Month2,
            DatePart::MonthShort,
            DatePart::MonthLong,
            DatePart::Day,
            DatePart::Day2,
            DatePart::DayOfYear,
            DatePart::DayOfYear3,
            DatePart::Weekday,
            DatePart::WeekdayNarrow,
            DatePart::WeekdayShort,
            DatePart::WeekdayLong,
        ]
    );
    for part in parts {
        assert_eq!(
            DateFormat::parse(part.token()).unwrap().parts()[0],
            FormatPart::DatePart(part)
        );
    }
}

#[test]
fn test_name_styles() {
    assert_eq!(DatePart::MonthLong.name_style(), Some(NameStyle::Long));
    assert_eq!(DatePart::WeekdayShort.name_style(), Some(NameStyle::Short));
    assert_eq!(DatePart::WeekdayNarrow.name_style(), Some(NameStyle::Narrow));
    assert_eq!(DatePart::Month2.name_style(), None);
    assert!(DatePart::Weekday.is_numeric());
}

#[test]
fn test_numeric_patterns_use_no_names() {
    assert!(!DateFormat::date_input().uses_names());
}

#[test]
fn test_literal_only_pattern() {
    let fmt = DateFormat::parse("[Nowruz]").unwrap();
    assert_eq!(fmt.parts(), &[FormatPart::Literal("Nowruz".to_string())]);
    assert_eq!(fmt.date_parts().count(), 0);
}

#[test]
fn test_invalid_widths() {
    assert!(matches!(
        DateFormat::parse("YYYYY"),
        Err(FormatError::InvalidTokenWidth { token: 'Y', width: 5, .. })
    ));
    assert!(matches!(
        DateFormat::parse("MM/DDDDD"),
        Err(FormatError::InvalidTokenWidth {
            position: 3,
            token: 'D',
            width: 5
        })
    ));
    assert!(matches!(
        DateFormat::parse("ddddd"),
        Err(FormatError::InvalidTokenWidth { token: 'd', .. })
    ));
}

#[test]
fn test_unterminated_literal() {
    assert_eq!(
        DateFormat::parse("[YYYY").unwrap_err(),
        FormatError::UnterminatedLiteral { position: 0 }
    );
}
