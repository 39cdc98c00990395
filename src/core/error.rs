use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmitError {
    #[error("cannot decode a null into an omit-only value")]
    NullDecode,

    #[error("cannot store a null value in an omit-only value")]
    NullScan,

    #[error("underlying type has no value-sink conversion: {0}")]
    UnsupportedKind(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Invalid text: {0}")]
    InvalidText(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Failure reported by the held type's own codec, kept as-is.
    #[error(transparent)]
    Delegated(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl OmitError {
    pub fn delegated<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Delegated(Box::new(err))
    }

    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, OmitError>;

impl From<std::str::Utf8Error> for OmitError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidText(err.to_string())
    }
}

impl serde::ser::Error for OmitError {
    fn custom<M: std::fmt::Display>(msg: M) -> Self {
        Self::Conversion(msg.to_string())
    }
}
