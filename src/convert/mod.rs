//! Value conversion between statically typed Rust values and driver values.
//!
//! # Architecture
//!
//! - `from_value.rs` - best-effort convert-assign from a `Value` into `T`
//! - `to_value.rs` - allow-listed conversions from `T` into a `Value`
//! - `policy.rs` - serde-driven fallback policy and the null-likeness probe
//! - `text.rs` - textual codec capability
//! - `config.rs` - conversion configuration

mod config;
mod from_value;
mod policy;
mod text;
mod to_value;

pub use config::{ConvertConfig, SinkPolicy};
pub use from_value::{FromValue, convert_assign, parse_bool};
pub use policy::{is_null_like, to_value};
pub use text::{TextValue, from_text_via_convert, to_text_via_convert};
pub use to_value::ToValue;
