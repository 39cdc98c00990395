// ============================================================================
// omitval Library
// ============================================================================

//! Omit-only optional values.
//!
//! [`Val<T>`] tells "no value was provided" apart from "a value was
//! provided", and carries that distinction across JSON (serde), plain text
//! and SQL driver values without ever turning an explicit null into "unset".
//!
//! # Examples
//!
//! ```
//! use omitval::{Val, Value};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "Val::should_omit_field")]
//!     name: Val<String>,
//!     #[serde(default, skip_serializing_if = "Val::should_omit_field")]
//!     age: Val<i32>,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let patch: Patch = serde_json::from_str(r#"{"age": 31}"#)?;
//! assert!(patch.name.is_unset());
//! assert_eq!(patch.age.value()?, Value::Integer(31));
//! assert_eq!(serde_json::to_string(&patch)?, r#"{"age":31}"#);
//!
//! // An explicit null is not the same as leaving the field out.
//! assert!(serde_json::from_str::<Patch>(r#"{"name": null}"#).is_err());
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod core;
pub mod omit;

pub use convert::{ConvertConfig, FromValue, SinkPolicy, TextValue, ToValue};
pub use crate::core::{OmitError, Result, Value};
pub use omit::{State, Val, map};
