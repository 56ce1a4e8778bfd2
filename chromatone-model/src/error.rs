use std::fmt::{self, Display};

/// Errors produced while turning color text into a [`crate::Color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    NonHexDigit(String),
    WrongLength { input: String, len: usize },
    UnknownName(String),
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Empty => write!(f, "empty color string"),
            ColorParseError::NonHexDigit(input) => write!(
                f,
                "color string contains non-hexadecimal letters: {input}"
            ),
            ColorParseError::WrongLength { input, len } => write!(
                f,
                "color string has wrong length ({len} digits): {input}"
            ),
            ColorParseError::UnknownName(name) => {
                write!(f, "unknown color name: {name}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
