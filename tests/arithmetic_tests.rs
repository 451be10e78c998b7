//! Tests for Jalali date arithmetic and queries.

use jalali::{DateError, DateFormat, JalaliDate, Locale, Weekday};

fn j(year: i32, month: u8, day: u8) -> JalaliDate {
    JalaliDate::new(year, month, day).unwrap()
}

#[test]
fn test_create_date_leap_cap() {
    // Leap years still cap Esfand at 30 days
    assert!(matches!(
        JalaliDate::new(1403, 12, 31),
        Err(DateError::InvalidDate {
            year: 1403,
            month: 12,
            day: 31,
            max: 30,
            ..
        })
    ));
    assert!(JalaliDate::new(1403, 12, 31).unwrap_err().is_invalid_date());
}

#[test]
fn test_create_date_bad_month() {
    assert!(matches!(
        JalaliDate::new(1403, 13, 1),
        Err(DateError::InvalidMonth { month: 13, .. })
    ));
    assert!(JalaliDate::new(1403, 1, 0).is_err());
}

#[test]
fn test_add_days_identity() {
    let date = j(1402, 12, 29);
    assert_eq!(date.add_days(0).unwrap(), date);
}

#[test]
fn test_add_days_crosses_year() {
    assert_eq!(j(1402, 12, 29).add_days(1).unwrap(), j(1403, 1, 1));
    assert_eq!(j(1403, 12, 29).add_days(1).unwrap(), j(1403, 12, 30));
    assert_eq!(j(1403, 12, 30).add_days(1).unwrap(), j(1404, 1, 1));
    assert_eq!(j(1403, 1, 1).add_days(-1).unwrap(), j(1402, 12, 29));
    assert_eq!(j(1403, 6, 31).add_days(1).unwrap(), j(1403, 7, 1));
}

#[test]
fn test_add_days_inverse() {
    let date = j(1403, 5, 17);
    for n in [-100_000, -366, -1, 1, 29, 365, 12053, 100_000] {
        let moved = date.add_days(n).unwrap();
        assert_eq!(moved.add_days(-n).unwrap(), date, "n = {}", n);
        assert_eq!(moved.to_day_number() - date.to_day_number(), n);
    }
}

#[test]
fn test_add_months_no_clamp() {
    // 1402 is not a leap year, so its Esfand ends on the 29th; the 30th of
    // Esfand exists in 1403.
    assert!(JalaliDate::new(1402, 12, 30).is_err());
    assert_eq!(j(1402, 12, 29).add_months(1).unwrap(), j(1403, 1, 29));
    assert_eq!(j(1403, 12, 30).add_months(1).unwrap(), j(1404, 1, 30));
}

#[test]
fn test_add_months_clamps() {
    assert_eq!(j(1402, 6, 31).add_months(1).unwrap(), j(1402, 7, 30));
    assert_eq!(j(1403, 1, 31).add_months(11).unwrap(), j(1403, 12, 30));
    assert_eq!(j(1402, 1, 31).add_months(11).unwrap(), j(1402, 12, 29));
    assert_eq!(j(1403, 8, 30).add_months(-2).unwrap(), j(1403, 6, 30));
}

#[test]
fn test_add_months_year_carry() {
    assert_eq!(j(1402, 11, 5).add_months(3).unwrap(), j(1403, 2, 5));
    assert_eq!(j(1403, 2, 5).add_months(-3).unwrap(), j(1402, 11, 5));
    assert_eq!(j(1403, 1, 1).add_months(24).unwrap(), j(1405, 1, 1));
    assert_eq!(j(1403, 1, 1).add_months(0).unwrap(), j(1403, 1, 1));
}

#[test]
fn test_add_years_esfand() {
    assert_eq!(j(1403, 12, 30).add_years(1).unwrap(), j(1404, 12, 29));
    assert_eq!(j(1403, 12, 30).add_years(5).unwrap(), j(1408, 12, 30));
    assert_eq!(j(1403, 12, 30).add_years(-4).unwrap(), j(1399, 12, 30));
    assert_eq!(j(1402, 12, 29).add_years(1).unwrap(), j(1403, 12, 29));
    assert_eq!(j(1403, 6, 31).add_years(-1).unwrap(), j(1402, 6, 31));
}

#[test]
fn test_arithmetic_out_of_range() {
    let date = j(1403, 1, 1);
    assert!(matches!(
        date.add_years(10_000),
        Err(DateError::OutOfRange {
            year: 1403,
            month: 1,
            day: 1,
            ..
        })
    ));
    assert!(date.add_months(i64::MAX).unwrap_err().is_out_of_range());
    assert!(date.add_days(i64::MIN).unwrap_err().is_out_of_range());
    assert!(date.add_years(i64::from(i32::MAX)).unwrap_err().is_out_of_range());
}

#[test]
fn test_create_date_outside_supported_years() {
    assert!(matches!(
        JalaliDate::new(10000, 1, 1),
        Err(DateError::OutOfRange {
            year: 10000,
            month: 1,
            day: 1,
            ..
        })
    ));
    assert!(JalaliDate::new(9378, 10, 11).unwrap_err().is_out_of_range());
    assert!(JalaliDate::new(-621, 10, 10).unwrap_err().is_out_of_range());
}

#[test]
fn test_range_edges_keep_identities() {
    let fmt = DateFormat::date_input();
    for date in [JalaliDate::min(), JalaliDate::max()] {
        assert_eq!(date.add_days(0).unwrap(), date);
        let text = fmt.format(&date, Locale::english()).unwrap();
        assert_eq!(fmt.parse_date(&text, Locale::english()).unwrap(), date);
    }
}

#[test]
fn test_weekday() {
    assert_eq!(j(1403, 1, 1).weekday(), Weekday::Wednesday);
    assert_eq!(j(1348, 10, 11).weekday(), Weekday::Thursday);
    assert_eq!(j(1403, 1, 4).weekday(), Weekday::Saturday);
    assert_eq!(j(1403, 1, 1).add_days(7).unwrap().weekday(), Weekday::Wednesday);
}

#[test]
fn test_queries() {
    let date = j(1403, 12, 30);
    assert!(date.is_leap_year());
    assert_eq!(date.days_in_month(), 30);
    assert_eq!(date.days_in_year(), 366);
    assert_eq!(date.day_of_year(), 366);
    assert!(date.is_valid());
    assert_eq!(j(1404, 1, 1).days_in_year(), 365);
}

#[test]
fn test_ordering_and_clamp() {
    let min = j(1400, 1, 1);
    let max = j(1405, 12, 29);
    assert!(j(1399, 12, 30) < min);
    assert_eq!(j(1399, 12, 30).clamp(min, max), min);
    assert_eq!(j(1410, 1, 1).clamp(min, max), max);
    assert_eq!(j(1403, 5, 5).clamp(min, max), j(1403, 5, 5));
}
