//! Built-in locale data.

use super::Locale;
use crate::weekday::Weekday;

const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const PERSIAN_WEEKDAYS: [&str; 7] = [
    "یک\u{200c}شنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
    "شنبه",
];

/// Persian locale. Persian has no abbreviated month names.
pub(super) static PERSIAN: Locale = Locale {
    id: "fa",
    month_names_long: PERSIAN_MONTHS,
    month_names_short: Some(PERSIAN_MONTHS),
    month_names_narrow: None,
    weekday_names_long: PERSIAN_WEEKDAYS,
    weekday_names_short: Some(PERSIAN_WEEKDAYS),
    weekday_names_narrow: Some(["ی", "د", "س", "چ", "پ", "ج", "ش"]),
    first_day_of_week: Weekday::Saturday,
};

/// English locale with transliterated Jalali month names.
pub(super) static ENGLISH: Locale = Locale {
    id: "en",
    month_names_long: [
        "Farvardin",
        "Ordibehesht",
        "Khordad",
        "Tir",
        "Mordad",
        "Shahrivar",
        "Mehr",
        "Aban",
        "Azar",
        "Dey",
        "Bahman",
        "Esfand",
    ],
    month_names_short: Some([
        "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
    ]),
    month_names_narrow: None,
    weekday_names_long: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    weekday_names_short: Some(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
    weekday_names_narrow: Some(["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]),
    first_day_of_week: Weekday::Sunday,
};

pub(super) static ALL: [&Locale; 2] = [&PERSIAN, &ENGLISH];
