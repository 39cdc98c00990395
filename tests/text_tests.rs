/// Text adapter tests
///
/// Run with: cargo test --test text_tests
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use omitval::{OmitError, TextValue, Val};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use uuid::Uuid;

/// A type with its own text form.
#[derive(Debug, Clone, PartialEq)]
struct Celsius(i32);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}C", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("not a temperature: {0}")]
struct BadTemperature(String);

impl FromStr for Celsius {
    type Err = BadTemperature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_suffix('C')
            .and_then(|n| n.parse().ok())
            .map(Celsius)
            .ok_or_else(|| BadTemperature(s.to_string()))
    }
}

omitval::impl_text_via_str!(Celsius);

fn roundtrip<T: TextValue + PartialEq + fmt::Debug>(value: T) {
    let original = Val::from_value(value);
    let encoded = original.encode_text().unwrap();

    let mut decoded = Val::<T>::new();
    decoded.decode_text(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_roundtrips() {
    roundtrip(42i64);
    roundtrip(-7i8);
    roundtrip(3.25f64);
    roundtrip(0.1f32);
    roundtrip(true);
    roundtrip('x');
    roundtrip(String::from("hello world"));
    roundtrip(Celsius(21));
    roundtrip(Uuid::new_v4());
    roundtrip("10.0.0.1".parse::<IpAddr>().unwrap());
    roundtrip(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    roundtrip(Utc.with_ymd_and_hms(2000, 1, 1, 2, 30, 0).unwrap());
}

#[test]
fn test_empty_is_unset_for_every_type() {
    let mut a = Val::from_value(1u64);
    a.decode_text(b"").unwrap();
    assert!(a.is_unset());

    let mut b = Val::from_value(Celsius(3));
    b.decode_text(b"").unwrap();
    assert!(b.is_unset());

    let mut c = Val::<DateTime<Utc>>::new();
    c.decode_text(b"").unwrap();
    assert!(c.is_unset());
}

#[test]
fn test_unset_encodes_empty() {
    assert!(Val::<Celsius>::new().encode_text().unwrap().is_empty());
    assert!(Val::<i32>::new().encode_text().unwrap().is_empty());
}

#[test]
fn test_native_codec_errors_are_delegated() {
    let mut val = Val::<Celsius>::new();
    let err = val.decode_text(b"hot").unwrap_err();
    assert!(matches!(err, OmitError::Delegated(_)));
    assert_eq!(err.to_string(), "not a temperature: hot");
    assert!(val.is_unset());
}

#[test]
fn test_fallback_conversion_errors() {
    let mut val = Val::<u8>::new();
    let err = val.decode_text(b"-1").unwrap_err();
    assert!(matches!(err, OmitError::Conversion(_)));
}

#[test]
fn test_f32_encodes_at_single_precision() {
    let encoded = Val::from_value(0.1f32).encode_text().unwrap();
    assert_eq!(encoded, b"0.1");
}

#[test]
fn test_parse() {
    let temp: Val<Celsius> = "18C".parse().unwrap();
    assert_eq!(temp.must_get(), &Celsius(18));
}
