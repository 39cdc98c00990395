use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{Level, event};

use super::Val;
use crate::convert::is_null_like;
use crate::core::{OmitError, Result};

/// An unset value encodes as `null`.
///
/// Leaving the field out of an object entirely needs the surrounding
/// struct's cooperation: `#[serde(skip_serializing_if = "Val::should_omit_field")]`.
impl<T: Serialize> Serialize for Val<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// A `null` is rejected; use `#[serde(default)]` so a missing field decodes
/// as unset.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Val<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_option(PresentVisitor(PhantomData))
    }
}

struct PresentVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for PresentVisitor<T> {
    type Value = Val<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a present, non-null value")
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        event!(Level::DEBUG, "rejected null for omit-only value");
        Err(E::custom(OmitError::NullDecode))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        self.visit_none()
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(Val::from_value)
    }
}

impl<T> Val<T> {
    /// Decodes JSON bytes into this value.
    ///
    /// Empty input marks the value unset, `null` fails with
    /// [`OmitError::NullDecode`], anything else is decoded as `T`. On failure
    /// the value is left untouched.
    pub fn decode_json(&mut self, data: &[u8]) -> Result<()>
    where
        T: DeserializeOwned,
    {
        if data.is_empty() {
            self.unset();
            return Ok(());
        }
        if data.trim_ascii() == b"null" {
            event!(Level::DEBUG, "rejected null for omit-only value");
            return Err(OmitError::NullDecode);
        }
        *self = serde_json::from_slice(data)?;
        Ok(())
    }

    pub fn encode_json(&self) -> Result<Vec<u8>>
    where
        T: Serialize,
    {
        Ok(serde_json::to_vec(self)?)
    }

    /// Whether a cooperating encoder should leave this field out.
    ///
    /// True when unset, and also when set to something that would itself
    /// encode as null (such as `None::<Vec<_>>`), since that null could not be
    /// decoded back. `is_set()` still reports true in the second case.
    ///
    /// This covers any null-encoding value, not only missing collections and
    /// structs: `Val::from_value(None::<i32>)` is omitted too.
    pub fn should_omit_field(&self) -> bool
    where
        T: Serialize,
    {
        match &self.value {
            None => true,
            Some(v) => is_null_like(v),
        }
    }
}
