//! Conversion between the Gregorian and Jalali calendars.
//!
//! Both calendars are mapped onto a linear day number: the count of days
//! since 1970-01-01 (Gregorian). Converting a date means computing its day
//! number in one calendar and decomposing it in the other.
//!
//! ## Leap years
//!
//! Jalali leap years follow the arithmetic 33-year cycle: a year is leap
//! when its remainder modulo 33 is one of 1, 5, 9, 13, 17, 22, 26 or 30.
//! The rule agrees with the astronomical calendar for the modern era. The
//! first year where they part is 1502, which the cycle makes leap and the
//! astronomical calendar does not; later mismatches recur every few decades.
//! A full cycle is `33 * 365 + 8 = 12053` days.
//!
//! The Jalali day count is anchored at Nowruz 1403 (1403-01-01), which fell
//! on 2024-03-20.
//!
//! ## Supported range
//!
//! Conversions are defined for Gregorian 0001-01-01 through 9999-12-31 and
//! the Jalali dates between their equivalents. Anything outside fails with
//! [`DateError::OutOfRange`].

use crate::error::{Calendar, DateError};
use crate::gregorian::GregorianDate;
use crate::jalali::JalaliDate;
use crate::weekday::Weekday;

/// First supported Gregorian year.
pub const MIN_GREGORIAN_YEAR: i32 = 1;

/// Last supported Gregorian year.
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Day number of 0001-01-01 (Gregorian), the earliest supported day.
pub const MIN_DAY_NUMBER: i64 = gregorian_to_day_number(MIN_GREGORIAN_YEAR as i64, 1, 1);

/// Day number of 9999-12-31 (Gregorian), the latest supported day.
pub const MAX_DAY_NUMBER: i64 = gregorian_to_day_number(MAX_GREGORIAN_YEAR as i64, 12, 31);

/// Remainders (modulo 33) of the leap years in a cycle.
const LEAP_RESIDUES: [i64; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

const CYCLE_YEARS: i64 = 33;
const CYCLE_DAYS: i64 = CYCLE_YEARS * 365 + LEAP_RESIDUES.len() as i64;

/// Days in months 1-6 and 7-11 of the Jalali year.
const FIRST_HALF_MONTH_DAYS: u8 = 31;
const SECOND_HALF_MONTH_DAYS: u8 = 30;
const FIRST_HALF_DAYS: i64 = 6 * FIRST_HALF_MONTH_DAYS as i64;

/// Day number of Jalali 0001-01-01.
const JALALI_EPOCH: i64 =
    gregorian_to_day_number(2024, 3, 20) - jalali_days_before_year(1403);

/// Days in each Gregorian month for non-leap years
const GREGORIAN_MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given Jalali year is a leap year.
///
/// Leap years have 366 days and a 30-day Esfand (month 12).
pub const fn is_jalali_leap_year(year: i32) -> bool {
    is_leap_residue((year as i64).rem_euclid(CYCLE_YEARS))
}

const fn is_leap_residue(residue: i64) -> bool {
    let mut i = 0;
    while i < LEAP_RESIDUES.len() {
        if LEAP_RESIDUES[i] == residue {
            return true;
        }
        i += 1;
    }
    false
}

/// Number of leap residues in `1..=residue`.
const fn leaps_through(residue: i64) -> i64 {
    let mut count = 0;
    let mut i = 0;
    while i < LEAP_RESIDUES.len() {
        if LEAP_RESIDUES[i] <= residue {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Returns the number of days in a Jalali month, assuming `1 <= month <= 12`.
pub(crate) const fn jalali_month_length(year: i32, month: u8) -> u8 {
    if month <= 6 {
        FIRST_HALF_MONTH_DAYS
    } else if month <= 11 {
        SECOND_HALF_MONTH_DAYS
    } else if is_jalali_leap_year(year) {
        30
    } else {
        29
    }
}

/// Returns the number of days in the given Jalali month.
///
/// Months 1-6 have 31 days, months 7-11 have 30 days and month 12 has 30
/// days in leap years and 29 otherwise.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth {
            calendar: Calendar::Jalali,
            year,
            month,
        });
    }
    Ok(jalali_month_length(year, month))
}

/// Returns the number of days in the given Jalali year (365 or 366).
pub const fn days_in_year(year: i32) -> u16 {
    if is_jalali_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days from Jalali 0001-01-01 to the first day of `year`.
const fn jalali_days_before_year(year: i64) -> i64 {
    let elapsed = year - 1;
    let cycles = elapsed.div_euclid(CYCLE_YEARS);
    let rest = elapsed.rem_euclid(CYCLE_YEARS);
    cycles * CYCLE_DAYS + rest * 365 + leaps_through(rest)
}

/// Days from the start of the Jalali year to the first day of `month`.
pub(crate) const fn jalali_days_before_month(month: u8) -> i64 {
    let month = month as i64;
    if month <= 7 {
        (month - 1) * FIRST_HALF_MONTH_DAYS as i64
    } else {
        FIRST_HALF_DAYS + (month - 7) * SECOND_HALF_MONTH_DAYS as i64
    }
}

/// Converts a Jalali date to a day number. The date is assumed valid.
pub(crate) const fn jalali_to_day_number(year: i32, month: u8, day: u8) -> i64 {
    JALALI_EPOCH
        + jalali_days_before_year(year as i64)
        + jalali_days_before_month(month)
        + day as i64
        - 1
}

/// Splits a zero-based day of the Jalali year into (month, day).
pub(crate) const fn jalali_month_day(ordinal: i64) -> (u8, u8) {
    if ordinal < FIRST_HALF_DAYS {
        let len = FIRST_HALF_MONTH_DAYS as i64;
        ((ordinal / len + 1) as u8, (ordinal % len + 1) as u8)
    } else {
        let rest = ordinal - FIRST_HALF_DAYS;
        let len = SECOND_HALF_MONTH_DAYS as i64;
        ((rest / len + 7) as u8, (rest % len + 1) as u8)
    }
}

/// Converts a day number to a Jalali (year, month, day).
///
/// The caller is responsible for keeping `day_number` within
/// [`MIN_DAY_NUMBER`]..=[`MAX_DAY_NUMBER`].
pub(crate) const fn day_number_to_jalali(day_number: i64) -> (i32, u8, u8) {
    let days = day_number - JALALI_EPOCH;
    let cycles = days.div_euclid(CYCLE_DAYS);
    let mut rest = days.rem_euclid(CYCLE_DAYS);

    // At most 33 iterations: the cycle's year lengths sum to CYCLE_DAYS.
    let mut year = cycles * CYCLE_YEARS + 1;
    loop {
        let len = days_in_year(year as i32) as i64;
        if rest < len {
            break;
        }
        rest -= len;
        year += 1;
    }

    let (month, day) = jalali_month_day(rest);
    (year as i32, month, day)
}

/// Returns true if the given Gregorian year is a leap year
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a Gregorian month, assuming `1 <= month <= 12`.
pub(crate) const fn gregorian_month_length(year: i32, month: u8) -> u8 {
    if month == 2 && is_gregorian_leap_year(year) {
        29
    } else {
        GREGORIAN_MONTH_DAYS[(month - 1) as usize]
    }
}

/// Converts a proleptic Gregorian date to a day number.
///
/// Uses the era-based days-from-civil algorithm: years are shifted to
/// start in March so the leap day falls at the end of the year.
pub(crate) const fn gregorian_to_day_number(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let march_month = (month + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Converts a day number to a proleptic Gregorian (year, month, day).
pub(crate) const fn day_number_to_gregorian(day_number: i64) -> (i32, u8, u8) {
    let shifted = day_number + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 {
        march_month + 3
    } else {
        march_month - 9
    };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}

/// Returns true if the day number lies within the supported range.
pub(crate) const fn in_range(day_number: i64) -> bool {
    day_number >= MIN_DAY_NUMBER && day_number <= MAX_DAY_NUMBER
}

/// Returns the weekday of a day number. 1970-01-01 was a Thursday.
pub(crate) const fn weekday_from_day_number(day_number: i64) -> Weekday {
    Weekday::from_sunday_index((day_number + 4).rem_euclid(7) as u8)
}

/// Convert a Gregorian date to the Jalali calendar.
///
/// Fails with [`DateError::OutOfRange`] outside Gregorian years 1-9999.
pub fn to_jalali(date: GregorianDate) -> Result<JalaliDate, DateError> {
    let day_number = date.to_day_number();
    if !in_range(day_number) {
        debug!("rejected conversion of {} to Jalali: out of range", date);
        return Err(DateError::OutOfRange {
            calendar: Calendar::Gregorian,
            year: date.year(),
            month: date.month(),
            day: date.day(),
        });
    }
    let (year, month, day) = day_number_to_jalali(day_number);
    Ok(JalaliDate::from_parts_unchecked(year, month, day))
}

/// Convert a Jalali date to the Gregorian calendar.
///
/// For every supported date `to_jalali(to_gregorian(j)?)? == j`.
pub fn to_gregorian(date: JalaliDate) -> Result<GregorianDate, DateError> {
    let day_number = date.to_day_number();
    if !in_range(day_number) {
        debug!("rejected conversion of {} to Gregorian: out of range", date);
        return Err(DateError::OutOfRange {
            calendar: Calendar::Jalali,
            year: date.year(),
            month: date.month(),
            day: date.day(),
        });
    }
    let (year, month, day) = day_number_to_gregorian(day_number);
    Ok(GregorianDate::from_parts_unchecked(year, month, day))
}
