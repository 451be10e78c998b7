#![cfg(feature = "serde")]

use jalali::{GregorianDate, JalaliDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Holiday {
    name: String,
    date: JalaliDate,
    observed: GregorianDate,
}

#[test]
fn test_serialize_as_strings() {
    let holiday = Holiday {
        name: "Nowruz".to_string(),
        date: JalaliDate::new(1403, 1, 1).unwrap(),
        observed: GregorianDate::new(2024, 3, 20).unwrap(),
    };
    let json = serde_json::to_string(&holiday).unwrap();
    assert_eq!(
        json,
        r#"{"name":"Nowruz","date":"1403/01/01","observed":"2024-03-20"}"#
    );
    assert_eq!(serde_json::from_str::<Holiday>(&json).unwrap(), holiday);
}

#[test]
fn test_deserialize_persian_digits() {
    let date: JalaliDate = serde_json::from_str(r#""۱۴۰۳/۰۱/۰۱""#).unwrap();
    assert_eq!(date, JalaliDate::new(1403, 1, 1).unwrap());
}

#[test]
fn test_deserialize_rejects_invalid() {
    assert!(serde_json::from_str::<JalaliDate>(r#""1402/12/30""#).is_err());
    assert!(serde_json::from_str::<GregorianDate>(r#""2023-02-29""#).is_err());
    assert!(serde_json::from_str::<JalaliDate>("14030101").is_err());
}
