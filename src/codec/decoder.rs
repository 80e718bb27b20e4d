//! Decoding BI text to images.
//!
//! Decoding runs through fixed stages, and any error ends it for good:
//!
//! ```text
//! ReadHeader -> ResolveModel -> ReadRows -> BuildImage -> Done
//!      |             |             |            |
//!      +-------------+-------------+------------+--> Err(CodecError)
//! ```
//!
//! Rows are independent once the model is known, so `BuildImage` resolves
//! them in parallel, each task writing its own row slice of the pixel buffer.

use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use bi_palette::{Color, ColorModel, ModelRegistry};
use flate2::bufread::GzDecoder;
use rayon::prelude::*;

use super::header::{parse_header, read_header_line, COMPRESSED_MAGIC, DEFAULT_MAX_HEADER_LEN};
use super::rows::{measure_rows, read_lines, split_fields};
use crate::error::CodecError;
use crate::image::Image;

/// Model and dimensions of a stream, read without resolving any pixel.
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// The color model named in the header
    pub model: Arc<dyn ColorModel>,
    /// Fields per row
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

/// Reusable BI decoder.
///
/// A decoder owns a handle to the [`ModelRegistry`] it resolves header model
/// names against. [`Decoder::default()`] uses a fresh registry holding only the
/// built-in models.
///
/// # Example
///
/// ```
/// use bi::{Color, Decoder};
///
/// let stream = b"bi,hex\n#FF0000FF,#00FF00FF\n#0000FFFF,#FFFFFFFF\n";
/// let image = Decoder::default().decode(&stream[..]).unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.height(), 2);
/// assert_eq!(image.pixel(0, 1), Some(Color::from_rgb8(0, 0, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct Decoder {
    registry: Arc<ModelRegistry>,
    parallel: bool,
    max_header_len: usize,
}

impl Decoder {
    /// Create a decoder resolving models against `registry`.
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self {
            registry,
            parallel: true,
            max_header_len: DEFAULT_MAX_HEADER_LEN,
        }
    }

    /// Resolve rows on the rayon thread pool (default) or on the calling thread.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Bound on the header line in bytes, line break included.
    #[inline]
    pub fn max_header_len(mut self, limit: usize) -> Self {
        self.max_header_len = limit;
        self
    }

    /// The registry header model names are resolved against.
    #[inline]
    pub fn registry(&self) -> &Arc<ModelRegistry> {
        &self.registry
    }

    /// Decode a plain BI stream.
    ///
    /// # Errors
    ///
    /// Any [`CodecError`]; no partial image is ever returned.
    pub fn decode<R: Read>(&self, reader: R) -> Result<Image, CodecError> {
        let mut reader = BufReader::new(reader);
        let line = read_header_line(&mut reader, self.max_header_len)?;
        let model = self.resolve_model(&line)?;
        self.decode_body(reader, model)
    }

    /// Decode a gzip-wrapped stream (`biz` magic line, then gzip).
    pub fn decode_compressed<R: Read>(&self, reader: R) -> Result<Image, CodecError> {
        let mut reader = BufReader::new(reader);
        let line = read_header_line(&mut reader, self.max_header_len)?;
        expect_compressed_magic(&line)?;
        self.decode(GzDecoder::new(reader))
    }

    /// Decode either a plain or a gzip-wrapped stream, judged by its first line.
    pub fn decode_any<R: Read>(&self, reader: R) -> Result<Image, CodecError> {
        let mut reader = BufReader::new(reader);
        let line = read_header_line(&mut reader, self.max_header_len)?;
        if line == COMPRESSED_MAGIC.as_bytes() {
            return self.decode(GzDecoder::new(reader));
        }
        let model = self.resolve_model(&line)?;
        self.decode_body(reader, model)
    }

    /// Read the model and dimensions of a plain stream.
    ///
    /// Rows are measured and checked for equal length, but tokens are not
    /// resolved, so an unknown color name does not fail this call.
    pub fn decode_config<R: Read>(&self, reader: R) -> Result<ImageConfig, CodecError> {
        let mut reader = BufReader::new(reader);
        let line = read_header_line(&mut reader, self.max_header_len)?;
        let model = self.resolve_model(&line)?;
        let (width, height) = measure_rows(&read_lines(reader)?)?;
        Ok(ImageConfig {
            model,
            width,
            height,
        })
    }

    /// [`decode_config`](Self::decode_config) for plain or gzip-wrapped streams.
    pub fn decode_config_any<R: Read>(&self, reader: R) -> Result<ImageConfig, CodecError> {
        let mut reader = BufReader::new(reader);
        let line = read_header_line(&mut reader, self.max_header_len)?;
        if line == COMPRESSED_MAGIC.as_bytes() {
            return self.decode_config(GzDecoder::new(reader));
        }
        let model = self.resolve_model(&line)?;
        let (width, height) = measure_rows(&read_lines(reader)?)?;
        Ok(ImageConfig {
            model,
            width,
            height,
        })
    }

    fn resolve_model(&self, line: &[u8]) -> Result<Arc<dyn ColorModel>, CodecError> {
        let name = parse_header(line)?;
        self.registry
            .lookup(name)
            .ok_or_else(|| CodecError::UnknownModel(name.to_string()))
    }

    fn decode_body<B: BufRead>(
        &self,
        reader: B,
        model: Arc<dyn ColorModel>,
    ) -> Result<Image, CodecError> {
        let lines = read_lines(reader)?;
        let (width, height) = measure_rows(&lines)?;
        let image = build_image(model.as_ref(), &lines, width, height, self.parallel)?;

        tracing::debug!(
            model = model.name(),
            width,
            height,
            parallel = self.parallel,
            "Decoded image"
        );
        Ok(image)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(Arc::new(ModelRegistry::with_builtins()))
    }
}

fn expect_compressed_magic(line: &[u8]) -> Result<(), CodecError> {
    if line == COMPRESSED_MAGIC.as_bytes() {
        return Ok(());
    }
    Err(CodecError::BadMagic {
        expected: COMPRESSED_MAGIC,
        found: String::from_utf8_lossy(line).into_owned(),
    })
}

/// Resolve every token of every row into a `width × height` image.
///
/// Row lengths must already be validated.
fn build_image(
    model: &dyn ColorModel,
    lines: &[String],
    width: usize,
    height: usize,
    parallel: bool,
) -> Result<Image, CodecError> {
    if height == 0 {
        return Ok(Image::new(0, 0));
    }

    let mut image = Image::new(width, height);
    let pixels = image.pixels_mut();
    if parallel {
        pixels
            .par_chunks_mut(width)
            .zip(lines.par_iter())
            .enumerate()
            .try_for_each(|(y, (row, line))| decode_row(model, y, line, row))?;
    } else {
        pixels
            .chunks_mut(width)
            .zip(lines.iter())
            .enumerate()
            .try_for_each(|(y, (row, line))| decode_row(model, y, line, row))?;
    }
    Ok(image)
}

fn decode_row(
    model: &dyn ColorModel,
    y: usize,
    line: &str,
    row: &mut [Color],
) -> Result<(), CodecError> {
    for (x, (pixel, token)) in row.iter_mut().zip(split_fields(line)).enumerate() {
        *pixel = model
            .name_to_color(token)
            .map_err(|source| CodecError::UnknownColorName {
                row: y,
                col: x,
                token: token.to_string(),
                source,
            })?;
    }
    Ok(())
}
