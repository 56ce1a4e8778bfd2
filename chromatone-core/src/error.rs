use chromatone_model::ColorParseError;
use thiserror::Error;

pub use chromatone_contracts::StorageError;

/// Malformed color text or malformed transport text.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid state JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid color-space selection or numeric parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field}: '{value}' is not one of rgb, hsl, lab, lch, lrgb")]
    InvalidColorSpace { field: String, value: String },

    #[error("{field}: {value} is not a finite number")]
    InvalidNumber { field: String, value: f64 },

    #[error("{field}: step {value} is outside {min}..={max}")]
    StepOutOfRange {
        field: String,
        value: i64,
        min: i32,
        max: i32,
    },

    #[error("{field}: index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        field: String,
        index: usize,
        len: usize,
    },
}

#[derive(Error, Debug)]
pub enum ChromatoneError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<ColorParseError> for ChromatoneError {
    fn from(err: ColorParseError) -> Self {
        ChromatoneError::Parse(ParseError::Color(err))
    }
}

impl From<serde_json::Error> for ChromatoneError {
    fn from(err: serde_json::Error) -> Self {
        ChromatoneError::Parse(ParseError::Json(err))
    }
}

pub type Result<T> = std::result::Result<T, ChromatoneError>;
