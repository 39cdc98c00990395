use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::core::{OmitError, Result, Value};

/// Produces the value handed to a SQL sink.
///
/// Built-in impls cover the sink's primitive kinds. Types without a native
/// sink form can route through the serde-driven policy with
/// [`impl_to_value_via_serde!`](crate::impl_to_value_via_serde).
pub trait ToValue {
    fn to_value(&self) -> Result<Value>;
}

pub(crate) fn widen_unsigned(v: u64) -> Result<Value> {
    i64::try_from(v)
        .map(Value::Integer)
        .map_err(|_| OmitError::conversion(format!("uint64 values with high bit set are not supported: {}", v)))
}

macro_rules! impl_to_value_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Result<Value> {
                    Ok(Value::Integer(i64::from(*self)))
                }
            }
        )*
    };
}

macro_rules! impl_to_value_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Result<Value> {
                    widen_unsigned(*self as u64)
                }
            }
        )*
    };
}

impl_to_value_signed!(i8, i16, i32, i64);
impl_to_value_unsigned!(u8, u16, u32, u64, usize);

impl ToValue for isize {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Integer(*self as i64))
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Float(f64::from(*self)))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Float(*self))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Boolean(*self))
    }
}

impl ToValue for char {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.clone()))
    }
}

impl ToValue for [u8] {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bytes(self.to_vec()))
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bytes(self.clone()))
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Timestamp(*self))
    }
}

impl ToValue for DateTime<FixedOffset> {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Timestamp(self.with_timezone(&Utc)))
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Timestamp(self.and_utc()))
    }
}

impl ToValue for NaiveDate {
    fn to_value(&self) -> Result<Value> {
        self.and_hms_opt(0, 0, 0)
            .map(|midnight| Value::Timestamp(midnight.and_utc()))
            .ok_or_else(|| OmitError::conversion(format!("date {} has no midnight", self)))
    }
}

// Types with a canonical textual sink form.

impl ToValue for Uuid {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.hyphenated().to_string()))
    }
}

impl ToValue for IpAddr {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl ToValue for Ipv4Addr {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl ToValue for Ipv6Addr {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl ToValue for JsonValue {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Json(self.clone()))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

// Indirections.

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value> {
        match self {
            Some(v) => v.to_value(),
            None => Ok(Value::Null),
        }
    }
}

/// Implements [`ToValue`] for the listed types through the serde-driven
/// fallback policy in [`to_value`](crate::convert::to_value).
///
/// A wrapper around a timestamp comes out as `Text` under that policy, and one
/// around a byte vector fails; write a native impl for those.
#[macro_export]
macro_rules! impl_to_value_via_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::convert::ToValue for $ty {
                fn to_value(&self) -> $crate::Result<$crate::Value> {
                    $crate::convert::to_value(self)
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_integers_widen() {
        assert_eq!(7i8.to_value().unwrap(), Value::Integer(7));
        assert_eq!(7u32.to_value().unwrap(), Value::Integer(7));
        assert_eq!((i64::MAX as u64).to_value().unwrap(), Value::Integer(i64::MAX));
        assert!(u64::MAX.to_value().is_err());
    }

    #[test]
    fn test_primitives() {
        assert_eq!(1.5f64.to_value().unwrap(), Value::Float(1.5));
        assert_eq!(true.to_value().unwrap(), Value::Boolean(true));
        assert_eq!("hi".to_value().unwrap(), Value::Text("hi".into()));
        assert_eq!(vec![1u8, 2].to_value().unwrap(), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn test_temporal() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 2, 30, 0).unwrap();
        assert_eq!(t.to_value().unwrap(), Value::Timestamp(t));
        assert_eq!(t.naive_utc().to_value().unwrap(), Value::Timestamp(t));

        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let midnight = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(d.to_value().unwrap(), Value::Timestamp(midnight));
    }

    #[test]
    fn test_indirections() {
        assert_eq!(Box::new(3i32).to_value().unwrap(), Value::Integer(3));
        assert_eq!(None::<i32>.to_value().unwrap(), Value::Null);
        assert_eq!(Some(Arc::new(2i64)).to_value().unwrap(), Value::Integer(2));
    }
}
