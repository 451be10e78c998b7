use jalali::{
    Calendar, DateError, DateFormat, Error, FormatError, GregorianDate, JalaliDate, Locale,
    ParseError,
};

#[test]
fn test_date_error_messages() {
    assert_eq!(
        JalaliDate::new(1403, 12, 31).unwrap_err().to_string(),
        "invalid Jalali date 1403/12/31: month has 30 days"
    );
    assert_eq!(
        JalaliDate::new(1403, 13, 1).unwrap_err().to_string(),
        "invalid month 13 in Jalali date: month has to be between 1 and 12"
    );
    assert_eq!(
        GregorianDate::new(2023, 2, 29).unwrap_err().to_string(),
        "invalid Gregorian date 2023/02/29: month has 28 days"
    );
    assert_eq!(
        JalaliDate::max().add_days(1).unwrap_err(),
        DateError::OutOfRange {
            calendar: Calendar::Jalali,
            year: JalaliDate::max().year(),
            month: JalaliDate::max().month(),
            day: JalaliDate::max().day(),
        }
    );
    assert_eq!(
        JalaliDate::from_day_number(i64::MAX).unwrap_err().to_string(),
        format!("day number {} is outside the supported range", i64::MAX)
    );
}

#[test]
fn test_error_classification() {
    assert!(JalaliDate::new(1403, 0, 1).unwrap_err().is_invalid_date());
    assert!(JalaliDate::new(1403, 1, 32).unwrap_err().is_invalid_date());
    let err = JalaliDate::min().add_months(-1).unwrap_err();
    assert!(err.is_out_of_range());
    assert!(!err.is_invalid_date());
}

#[test]
fn test_format_error_messages() {
    assert_eq!(
        DateFormat::parse("YYY").unwrap_err().to_string(),
        "invalid width 3 for token 'Y' at position 0"
    );
    assert_eq!(
        DateFormat::parse("YYYY [x").unwrap_err().to_string(),
        "unterminated literal at position 5"
    );
    assert_eq!(
        DateFormat::parse("").unwrap_err().to_string(),
        "empty format pattern"
    );
}

#[test]
fn test_parse_error_messages() {
    let fmt = DateFormat::date_input();
    assert_eq!(
        fmt.parse_date("1403-01-01", Locale::persian())
            .unwrap_err()
            .to_string(),
        "expected '/' at position 4 (segment 1)"
    );
    assert_eq!(
        fmt.parse_date("1403/12/31", Locale::persian())
            .unwrap_err()
            .to_string(),
        "invalid date at position 8 (segment 4): invalid Jalali date 1403/12/31: month has 30 days"
    );
    assert_eq!(
        ParseError::MissingField { field: "year" }.to_string(),
        "pattern has no year field"
    );
}

#[test]
fn test_error_is_transparent() {
    let err: Error = JalaliDate::new(1403, 12, 31).unwrap_err().into();
    assert_eq!(err.to_string(), "invalid Jalali date 1403/12/31: month has 30 days");

    let err = jalali::format(&JalaliDate::new(1403, 1, 1).unwrap(), "MMMMM", Locale::english())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::InvalidTokenWidth { width: 5, .. })
    ));
}
