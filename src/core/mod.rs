pub mod error;
pub mod value;

pub use error::{OmitError, Result};
pub use value::Value;
