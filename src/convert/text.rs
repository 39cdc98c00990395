use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use uuid::Uuid;

use super::{FromValue, ToValue};
use crate::core::{OmitError, Result, Value};

/// Textual codec for a type held in a [`Val`](crate::Val).
///
/// Types with a canonical text form implement it natively (usually through
/// `FromStr`/`Display`, see [`impl_text_via_str!`](crate::impl_text_via_str)).
/// Everything else goes through the convert-assign fallback with
/// [`impl_text_via_convert!`](crate::impl_text_via_convert).
pub trait TextValue: Sized {
    fn from_text(text: &str) -> Result<Self>;

    fn to_text(&self) -> Result<String>;
}

/// Decodes `text` into `T` through [`FromValue`].
pub fn from_text_via_convert<T: FromValue>(text: &str) -> Result<T> {
    T::try_from_value(Value::Text(text.to_string()))
}

/// Encodes `value` as text through [`ToValue`] and [`FromValue`].
pub fn to_text_via_convert<T: ToValue + ?Sized>(value: &T) -> Result<String> {
    String::try_from_value(value.to_value()?)
}

/// Implements [`TextValue`] using `FromStr` and `Display`.
///
/// Parse errors are handed back unchanged inside `OmitError::Delegated`.
#[macro_export]
macro_rules! impl_text_via_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::convert::TextValue for $ty {
                fn from_text(text: &str) -> $crate::Result<Self> {
                    text.parse::<$ty>().map_err($crate::OmitError::delegated)
                }

                fn to_text(&self) -> $crate::Result<String> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

/// Implements [`TextValue`] through the convert-assign fallback.
#[macro_export]
macro_rules! impl_text_via_convert {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::convert::TextValue for $ty {
                fn from_text(text: &str) -> $crate::Result<Self> {
                    $crate::convert::from_text_via_convert(text)
                }

                fn to_text(&self) -> $crate::Result<String> {
                    $crate::convert::to_text_via_convert(self)
                }
            }
        )*
    };
}

crate::impl_text_via_convert!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64, bool, char,
);

crate::impl_text_via_str!(IpAddr, Ipv4Addr, Ipv6Addr, Uuid, NaiveDate);

impl TextValue for String {
    fn from_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.clone())
    }
}

/// Formatted at single precision so `0.1f32` reads back as `0.1`.
impl TextValue for f32 {
    fn from_text(text: &str) -> Result<Self> {
        from_text_via_convert(text)
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl TextValue for DateTime<Utc> {
    fn from_text(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(OmitError::delegated)
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
