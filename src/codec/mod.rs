//! Stream encoder and decoder.

mod decoder;
mod encoder;
mod format;
mod header;
mod rows;

pub use self::decoder::{Decoder, ImageConfig};
pub use self::encoder::{encode, encode_compressed};
pub use self::format::{Format, BIZ_EXTENSION, BI_EXTENSION};
pub use self::header::{COMPRESSED_MAGIC, DEFAULT_MAX_HEADER_LEN, DELIMITER, MAGIC};

use std::io::Read;

use crate::error::CodecError;
use crate::image::Image;

/// Decode a plain stream against the built-in models.
///
/// Shorthand for `Decoder::default().decode(reader)`.
pub fn decode<R: Read>(reader: R) -> Result<Image, CodecError> {
    Decoder::default().decode(reader)
}

/// Decode a plain or gzip-wrapped stream against the built-in models.
pub fn decode_any<R: Read>(reader: R) -> Result<Image, CodecError> {
    Decoder::default().decode_any(reader)
}

/// Read model and dimensions of a plain stream against the built-in models.
pub fn decode_config<R: Read>(reader: R) -> Result<ImageConfig, CodecError> {
    Decoder::default().decode_config(reader)
}
