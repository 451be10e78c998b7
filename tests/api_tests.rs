//! The top-level convenience functions and locale lookup.

use jalali::{JalaliDate, Locale, NameStyle, Weekday};

#[test]
fn test_format_function() {
    let date = JalaliDate::new(1403, 1, 1).unwrap();
    assert_eq!(
        jalali::format(&date, "YYYY/MM/DD", Locale::persian()).unwrap(),
        "1403/01/01"
    );
    assert_eq!(
        jalali::format(&date, "dddd D MMMM YYYY", Locale::english()).unwrap(),
        "Wednesday 1 Farvardin 1403"
    );
}

#[test]
fn test_parse_function() {
    assert_eq!(
        jalali::parse("1403/01/01", "YYYY/MM/DD", Locale::persian()).unwrap(),
        JalaliDate::new(1403, 1, 1).unwrap()
    );
    assert!(jalali::parse("1403/01/01", "YYYY/MM/DD/", Locale::persian()).is_err());
}

#[test]
fn test_free_functions() {
    assert!(jalali::is_jalali_leap_year(1403));
    assert_eq!(jalali::days_in_month(1403, 12).unwrap(), 30);
    let date = JalaliDate::new(1403, 1, 1).unwrap();
    let gregorian = jalali::to_gregorian(date).unwrap();
    assert_eq!(gregorian.to_string(), "2024-03-20");
    assert_eq!(jalali::to_jalali(gregorian).unwrap(), date);
}

#[test]
fn test_locale_lookup() {
    let fa = Locale::by_id("fa-IR").unwrap();
    assert_eq!(fa.id, "fa");
    assert_eq!(fa.first_day_of_week(), Weekday::Saturday);
    assert_eq!(fa.month_names(NameStyle::Long)[6], "مهر");
    assert_eq!(fa.weekday_names(NameStyle::Narrow)[5], "ج");
    // Persian has no narrow month names; the short (full) names stand in.
    assert_eq!(fa.month_names(NameStyle::Narrow)[0], "فروردین");
    assert!(fa.month_names_exact(NameStyle::Narrow).is_none());

    assert_eq!(Locale::default(), *Locale::persian());
    assert!(Locale::by_id("").is_none());
}

#[test]
fn test_weekday_helpers() {
    assert_eq!(Weekday::Saturday.next(), Weekday::Sunday);
    assert_eq!(Weekday::Sunday.previous(), Weekday::Saturday);
    assert_eq!(Weekday::Saturday.days_until(Weekday::Wednesday), 4);
    assert_eq!(Weekday::from_sunday_index(10), Weekday::Wednesday);
    assert_eq!(Weekday::try_from_sunday_index(7), None);
}
