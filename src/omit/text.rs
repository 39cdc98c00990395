use std::str::FromStr;

use super::Val;
use crate::convert::TextValue;
use crate::core::{OmitError, Result};

impl<T: TextValue> Val<T> {
    /// Decodes text into this value. Empty input marks it unset.
    pub fn decode_text(&mut self, text: &[u8]) -> Result<()> {
        if text.is_empty() {
            self.unset();
            return Ok(());
        }
        let text = std::str::from_utf8(text)?;
        self.set(T::from_text(text)?);
        Ok(())
    }

    /// Encodes this value as text. An unset value produces no bytes.
    pub fn encode_text(&self) -> Result<Vec<u8>> {
        match &self.value {
            Some(v) => Ok(v.to_text()?.into_bytes()),
            None => Ok(Vec::new()),
        }
    }
}

impl<T: TextValue> FromStr for Val<T> {
    type Err = OmitError;

    fn from_str(s: &str) -> Result<Self> {
        let mut val = Self::new();
        val.decode_text(s.as_bytes())?;
        Ok(val)
    }
}
