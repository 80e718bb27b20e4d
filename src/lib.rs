//! BI - a lossy, human-readable raster image format
//!
//! A BI stream names its color model in a one-line header and stores every
//! pixel as a token of that model: a color name for palette models, an
//! `#RRGGBBAA` quad for the hex model. Encoding snaps each pixel to the
//! nearest token; decoding resolves tokens back to colors.
//!
//! ```text
//! bi,v1
//! red,green,blue
//! black,,white
//! ```
//!
//! # Quick Start
//!
//! ```
//! use bi::{decode, encode, Color, Image, NamedPaletteModel};
//!
//! let image = Image::from_rgba8(2, 1, &[250, 4, 2, 255, 0, 0, 0, 0]).unwrap();
//!
//! let mut text = Vec::new();
//! encode(&mut text, &image, &NamedPaletteModel::css()).unwrap();
//! assert_eq!(text, b"bi,v1\nred,\n");
//!
//! let decoded = decode(&text[..]).unwrap();
//! assert_eq!(decoded.pixel(0, 0), Some(Color::from_rgb8(255, 0, 0)));
//! ```
//!
//! Models are looked up by name in a [`ModelRegistry`]; a [`Decoder`] carries
//! the registry it resolves against, so custom palettes registered there
//! become decodable without touching the codec.

pub mod codec;
pub mod config;
pub mod error;
pub mod image;
pub mod raster;

pub use codec::{
    decode, decode_any, decode_config, encode, encode_compressed, Decoder, Format, ImageConfig,
    BIZ_EXTENSION, BI_EXTENSION, COMPRESSED_MAGIC, DEFAULT_MAX_HEADER_LEN, DELIMITER, MAGIC,
};
pub use config::BiConfig;
pub use error::{CodecError, RasterError};
pub use image::Image;

pub use bi_palette::{
    dissimilarity, validate_model_name, Color, ColorModel, HexModel, ModelError, ModelRegistry,
    NamedPaletteModel, Palette, PaletteError, ParseTokenError, RegistryError, CSS_MODEL_NAME,
    HEX_MODEL_NAME, MAX_MODEL_NAME_LEN,
};
