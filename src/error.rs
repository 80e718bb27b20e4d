use bi_palette::{ModelError, RegistryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("expected magic number {expected:?} not found (got {found:?})")]
    BadMagic {
        expected: &'static str,
        found: String,
    },

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("color model {0:?} is not registered")]
    UnknownModel(String),

    #[error("header line not terminated within {limit} bytes")]
    TruncatedHeader { limit: usize },

    #[error("row {row} should have length {expected}, was {actual}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unexpected color {token:?} at row {row}, column {col}")]
    UnknownColorName {
        row: usize,
        col: usize,
        token: String,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    InvalidModelName(#[from] RegistryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {0}")]
    Unsupported(String),

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
