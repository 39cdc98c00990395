use std::net::IpAddr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::core::{OmitError, Result, Value};

/// Best-effort conversion of a driver value into a statically typed value.
///
/// This is the convert-assign fallback used when scanning a row value into a
/// [`Val`](crate::Val) and when decoding text for types without a native
/// textual form.
pub trait FromValue: Sized {
    fn try_from_value(value: Value) -> Result<Self>;
}

/// Convert `value` into `T`, or fail.
pub fn convert_assign<T: FromValue>(value: Value) -> Result<T> {
    T::try_from_value(value)
}

/// Parses the boolean spellings accepted by SQL drivers.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn cannot_convert(value: &Value, target: &str) -> OmitError {
    OmitError::Conversion(format!(
        "converting {} to {} is unsupported",
        value.type_name(),
        target
    ))
}

fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::Text(s) => Some(s),
        Value::Bytes(b) => std::str::from_utf8(b).ok(),
        _ => None,
    }
}

/// Textual rendering of a scalar source value.
fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::Text(s) => Some(s.clone()),
        Value::Bytes(b) => String::from_utf8(b.clone()).ok(),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Timestamp(t) => Some(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Value::Null | Value::Json(_) => None,
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn try_from_value(value: Value) -> Result<Self> {
                    let wide: i128 = match &value {
                        Value::Integer(i) => i128::from(*i),
                        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => *f as i128,
                        Value::Boolean(b) => i128::from(*b),
                        Value::Text(_) | Value::Bytes(_) => {
                            let s = text_of(&value).ok_or_else(|| cannot_convert(&value, stringify!($ty)))?;
                            s.parse::<i128>().map_err(|e| {
                                OmitError::Conversion(format!(
                                    "converting {:?} to {}: {}",
                                    s,
                                    stringify!($ty),
                                    e
                                ))
                            })?
                        }
                        _ => return Err(cannot_convert(&value, stringify!($ty))),
                    };
                    <$ty>::try_from(wide).map_err(|_| {
                        OmitError::Conversion(format!(
                            "value {} out of range for {}",
                            wide,
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromValue for f64 {
    fn try_from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            Value::Text(_) | Value::Bytes(_) => {
                let s = text_of(&value).ok_or_else(|| cannot_convert(&value, "f64"))?;
                s.parse::<f64>()
                    .map_err(|e| OmitError::Conversion(format!("converting {:?} to f64: {}", s, e)))
            }
            _ => Err(cannot_convert(&value, "f64")),
        }
    }
}

impl FromValue for f32 {
    fn try_from_value(value: Value) -> Result<Self> {
        let wide = f64::try_from_value(value)?;
        if wide.is_finite() && wide.abs() > f64::from(f32::MAX) {
            return Err(OmitError::Conversion(format!(
                "value {} out of range for f32",
                wide
            )));
        }
        Ok(wide as f32)
    }
}

impl FromValue for bool {
    fn try_from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            Value::Text(_) | Value::Bytes(_) => text_of(&value)
                .and_then(parse_bool)
                .ok_or_else(|| OmitError::Conversion(format!("converting {} to bool", value))),
            _ => Err(cannot_convert(&value, "bool")),
        }
    }
}

impl FromValue for String {
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            Value::Bytes(b) => String::from_utf8(b)
                .map_err(|e| OmitError::Conversion(format!("converting BYTES to String: {}", e))),
            Value::Json(v) => Ok(v.to_string()),
            other => as_string(&other).ok_or_else(|| cannot_convert(&other, "String")),
        }
    }
}

impl FromValue for char {
    fn try_from_value(value: Value) -> Result<Self> {
        let s = String::try_from_value(value)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(OmitError::Conversion(format!(
                "converting {:?} to char: expected exactly one character",
                s
            ))),
        }
    }
}

impl FromValue for Vec<u8> {
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b),
            Value::Text(s) => Ok(s.into_bytes()),
            other => as_string(&other)
                .map(String::into_bytes)
                .ok_or_else(|| cannot_convert(&other, "Vec<u8>")),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn try_from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Timestamp(t) => Ok(*t),
            Value::Text(_) | Value::Bytes(_) => {
                let s = text_of(&value).ok_or_else(|| cannot_convert(&value, "timestamp"))?;
                DateTime::parse_from_rfc3339(s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| OmitError::Conversion(format!("Invalid Timestamp: {}", e)))
            }
            _ => Err(cannot_convert(&value, "timestamp")),
        }
    }
}

impl FromValue for NaiveDate {
    fn try_from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Timestamp(t) => Ok(t.date_naive()),
            Value::Text(_) | Value::Bytes(_) => {
                let s = text_of(&value).ok_or_else(|| cannot_convert(&value, "date"))?;
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|e| OmitError::Conversion(format!("Invalid Date: {}", e)))
            }
            _ => Err(cannot_convert(&value, "date")),
        }
    }
}

impl FromValue for Uuid {
    fn try_from_value(value: Value) -> Result<Self> {
        match &value {
            Value::Bytes(b) if b.len() == 16 => Uuid::from_slice(b)
                .map_err(|e| OmitError::Conversion(format!("Invalid UUID: {}", e))),
            Value::Text(_) | Value::Bytes(_) => {
                let s = text_of(&value).ok_or_else(|| cannot_convert(&value, "uuid"))?;
                Uuid::parse_str(s).map_err(|e| OmitError::Conversion(format!("Invalid UUID: {}", e)))
            }
            _ => Err(cannot_convert(&value, "uuid")),
        }
    }
}

impl FromValue for IpAddr {
    fn try_from_value(value: Value) -> Result<Self> {
        let s = text_of(&value).ok_or_else(|| cannot_convert(&value, "IpAddr"))?;
        s.parse()
            .map_err(|e| OmitError::Conversion(format!("Invalid IP address: {}", e)))
    }
}

impl FromValue for JsonValue {
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Json(v) => Ok(v),
            Value::Text(s) => Ok(serde_json::from_str(&s)?),
            Value::Bytes(b) => Ok(serde_json::from_slice(&b)?),
            Value::Integer(i) => Ok(JsonValue::from(i)),
            Value::Float(f) => Ok(JsonValue::from(f)),
            Value::Boolean(b) => Ok(JsonValue::Bool(b)),
            other => Err(cannot_convert(&other, "json")),
        }
    }
}

impl FromValue for Value {
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}
