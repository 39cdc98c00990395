use serde::Serialize;
use tracing::{Level, event};

use super::Val;
use crate::convert::{ConvertConfig, FromValue, SinkPolicy, ToValue};
use crate::core::{OmitError, Result, Value};

impl<T> Val<T> {
    /// Stores a scanned driver value.
    ///
    /// SQL has no notion of "unset", so a `NULL` from the source is an error
    /// rather than a way to unset the value. On failure the value is left
    /// untouched.
    pub fn scan(&mut self, src: Value) -> Result<()>
    where
        T: FromValue,
    {
        if src.is_null() {
            event!(Level::DEBUG, "rejected NULL scan into omit-only value");
            return Err(OmitError::NullScan);
        }
        self.set(T::try_from_value(src)?);
        Ok(())
    }

    /// The driver value for this value. Unset becomes `NULL`.
    pub fn value(&self) -> Result<Value>
    where
        T: ToValue,
    {
        match &self.value {
            Some(v) => v.to_value().inspect_err(|err| {
                if let OmitError::UnsupportedKind(kind) = err {
                    event!(Level::DEBUG, kind = %kind, "no value-sink conversion");
                }
            }),
            None => Ok(Value::Null),
        }
    }

    /// Like [`Val::value`], applying the configured sink policy to kinds the
    /// sink does not accept.
    pub fn value_with(&self, config: &ConvertConfig) -> Result<Value>
    where
        T: ToValue + Serialize,
    {
        let Some(v) = &self.value else {
            return Ok(Value::Null);
        };
        match (v.to_value(), config.sink_policy) {
            (Err(OmitError::UnsupportedKind(kind)), SinkPolicy::Passthrough) => {
                event!(Level::DEBUG, kind = %kind, "passing value through to sink as json");
                Ok(Value::Json(serde_json::to_value(v)?))
            }
            (Err(OmitError::UnsupportedKind(kind)), SinkPolicy::Strict) => {
                event!(Level::DEBUG, kind = %kind, "no value-sink conversion");
                Err(OmitError::UnsupportedKind(kind))
            }
            (result, _) => result,
        }
    }
}

impl<T: ToValue> ToValue for Val<T> {
    fn to_value(&self) -> Result<Value> {
        self.value()
    }
}

impl<T: FromValue> FromValue for Val<T> {
    fn try_from_value(value: Value) -> Result<Self> {
        let mut val = Self::new();
        val.scan(value)?;
        Ok(val)
    }
}
