//! Serde-driven conversion policy.
//!
//! Rust has no runtime reflection, so the held value's runtime
//! representation is observed through its `Serialize` impl instead. Two
//! serializers live here:
//!
//! - [`to_value`] walks the value and maps it onto the sink's accepted
//!   primitive kinds in a fixed order, failing for anything else.
//! - [`is_null_like`] reports whether the value would encode as null once
//!   transparent indirections (`Option`, `Box`, references, newtypes) are
//!   stripped.

use serde::ser::{
    Impossible, Serialize, SerializeMap, SerializeSeq, SerializeStruct,
    SerializeStructVariant, SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};

use super::to_value::widen_unsigned;
use crate::core::{OmitError, Result, Value};

/// Converts any serializable value into a sink value.
///
/// Accepted kinds, in order: signed integers, unsigned integers (widened to
/// `i64`), booleans, floats, strings and chars, byte strings, and unit enum
/// variants as their name. Missing values (`None`) map to `Value::Null`.
/// Everything else fails with [`OmitError::UnsupportedKind`].
///
/// Byte strings are recognised only when the value serializes them as bytes
/// (`Serializer::serialize_bytes`). Serde writes `Vec<u8>` as a plain
/// sequence, and sequences are rejected whatever their length or element
/// type; `Vec<u8>` and `[u8]` get `Bytes` from their native [`ToValue`]
/// impls instead.
///
/// Only the serialized form is visible here, so types that serialize as a
/// string come out as `Value::Text`. A newtype around `DateTime<Utc>` yields
/// its RFC 3339 text, not `Value::Timestamp`; give such wrappers a native
/// [`ToValue`] impl when the sink needs a timestamp.
///
/// [`ToValue`]: super::ToValue
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Whether `value` would encode as null.
pub fn is_null_like<T: Serialize + ?Sized>(value: &T) -> bool {
    matches!(value.serialize(NullProbe), Ok(true))
}

fn unsupported(kind: impl Into<String>) -> OmitError {
    OmitError::UnsupportedKind(kind.into())
}

macro_rules! scalar_methods {
    ($body:expr; $($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, _v: $ty) -> Result<Self::Ok> {
                $body
            }
        )*
    };
}

// ============================================================================
// Sink value policy
// ============================================================================

struct ValueSerializer;

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = OmitError;
    type SerializeSeq = Impossible<Value, OmitError>;
    type SerializeTuple = Impossible<Value, OmitError>;
    type SerializeTupleStruct = Impossible<Value, OmitError>;
    type SerializeTupleVariant = Impossible<Value, OmitError>;
    type SerializeMap = Impossible<Value, OmitError>;
    type SerializeStruct = Impossible<Value, OmitError>;
    type SerializeStructVariant = Impossible<Value, OmitError>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Integer)
            .map_err(|_| OmitError::conversion(format!("integer {} does not fit in 64 bits", v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Integer(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        widen_unsigned(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v)
            .map_err(|_| OmitError::conversion(format!("integer {} does not fit in 64 bits", v)))
            .and_then(widen_unsigned)
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(unsupported(format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value> {
        Err(unsupported(format!("enum {}", name)))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(unsupported(format!("tuple struct {}", name)))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported(format!("enum {}", name)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(unsupported("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(unsupported(format!("struct {}", name)))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported(format!("enum {}", name)))
    }
}

// ============================================================================
// Null-likeness probe
// ============================================================================

struct NullProbe;

impl Serializer for NullProbe {
    type Ok = bool;
    type Error = OmitError;
    type SerializeSeq = NotNull;
    type SerializeTuple = NotNull;
    type SerializeTupleStruct = NotNull;
    type SerializeTupleVariant = NotNull;
    type SerializeMap = NotNull;
    type SerializeStruct = NotNull;
    type SerializeStructVariant = NotNull;

    scalar_methods!(Ok(false);
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    );

    fn serialize_none(self) -> Result<bool> {
        Ok(true)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<bool> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<bool> {
        Ok(true)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<bool> {
        Ok(true)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<bool> {
        Ok(false)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<bool> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<bool> {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<NotNull> {
        Ok(NotNull)
    }

    fn serialize_tuple(self, _len: usize) -> Result<NotNull> {
        Ok(NotNull)
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<NotNull> {
        Ok(NotNull)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<NotNull> {
        Ok(NotNull)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<NotNull> {
        Ok(NotNull)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<NotNull> {
        Ok(NotNull)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<NotNull> {
        Ok(NotNull)
    }
}

/// Compound values are never null; their contents are not visited.
struct NotNull;

impl SerializeSeq for NotNull {
    type Ok = bool;
    type Error = OmitError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<bool> {
        Ok(false)
    }
}

impl SerializeTuple for NotNull {
    type Ok = bool;
    type Error = OmitError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<bool> {
        Ok(false)
    }
}

impl SerializeTupleStruct for NotNull {
    type Ok = bool;
    type Error = OmitError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<bool> {
        Ok(false)
    }
}

impl SerializeTupleVariant for NotNull {
    type Ok = bool;
    type Error = OmitError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<bool> {
        Ok(false)
    }
}

impl SerializeMap for NotNull {
    type Ok = bool;
    type Error = OmitError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, _key: &T) -> Result<()> {
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<bool> {
        Ok(false)
    }
}

impl SerializeStruct for NotNull {
    type Ok = bool;
    type Error = OmitError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<bool> {
        Ok(false)
    }
}

impl SerializeStructVariant for NotNull {
    type Ok = bool;
    type Error = OmitError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<bool> {
        Ok(false)
    }
}
