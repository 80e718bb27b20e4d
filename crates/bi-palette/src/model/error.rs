//! Error types for color model token conversion
//!
//! This module provides [`ModelError`], returned when a token cannot be turned
//! back into a color, and [`ParseTokenError`], the detailed reason a hex token
//! was rejected.

use std::fmt;

/// Error type for parsing hex color tokens.
///
/// Returned when a token has the wrong number of digits or contains a
/// character that is not a hexadecimal digit.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTokenError {
    /// Token has invalid length (must be 8 hex digits after stripping '#')
    InvalidLength(usize),
    /// Invalid hexadecimal character encountered
    InvalidHex(hex::FromHexError),
}

impl From<hex::FromHexError> for ParseTokenError {
    fn from(err: hex::FromHexError) -> Self {
        ParseTokenError::InvalidHex(err)
    }
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTokenError::InvalidLength(len) => {
                write!(f, "invalid hex token length {} (expected 8 digits)", len)
            }
            ParseTokenError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseTokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseTokenError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for token to color conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The token is well-formed for the model but names no color in it
    UnknownColorName(String),
    /// The token does not follow the model's syntax
    MalformedToken {
        /// The rejected token
        token: String,
        /// Why it was rejected
        source: ParseTokenError,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownColorName(name) => {
                write!(f, "unknown color name {:?}", name)
            }
            ModelError::MalformedToken { token, source } => {
                write!(f, "malformed color token {:?}: {}", token, source)
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::MalformedToken { source, .. } => Some(source),
            _ => None,
        }
    }
}
