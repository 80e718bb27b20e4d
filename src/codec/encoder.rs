//! Encoding images to BI text.

use std::io::Write;

use bi_palette::{validate_model_name, ColorModel};
use flate2::write::GzEncoder;
use flate2::Compression;

use super::header::{write_header, COMPRESSED_MAGIC, DELIMITER};
use crate::error::CodecError;
use crate::image::Image;

/// Encode `image` as a plain BI stream using `model`.
///
/// Writes the header line, then one line per pixel row holding
/// `model.color_to_name` of every pixel, comma separated. An image without
/// pixels is written as the header alone.
///
/// A model name that cannot be written into a header (see
/// [`validate_model_name`]) is rejected before anything is written.
///
/// Write errors abort immediately; whatever was written before the failure
/// is not a valid stream.
///
/// # Example
///
/// ```
/// use bi::{encode, Color, HexModel, Image};
///
/// let image = Image::from_pixels(2, 1, vec![
///     Color::from_rgb8(255, 0, 0),
///     Color::from_rgb8(0, 0, 255),
/// ]).unwrap();
///
/// let mut out = Vec::new();
/// encode(&mut out, &image, &HexModel).unwrap();
/// assert_eq!(out, b"bi,hex\n#FF0000FF,#0000FFFF\n");
/// ```
pub fn encode<W: Write>(
    mut writer: W,
    image: &Image,
    model: &dyn ColorModel,
) -> Result<(), CodecError> {
    validate_model_name(model.name())?;
    write_header(&mut writer, model.name())?;

    if !image.is_empty() {
        let mut line = String::new();
        for row in image.rows() {
            line.clear();
            for (x, &color) in row.iter().enumerate() {
                if x > 0 {
                    line.push(DELIMITER);
                }
                line.push_str(&model.color_to_name(color));
            }
            line.push('\n');
            writer.write_all(line.as_bytes())?;
        }
    }

    writer.flush()?;

    tracing::debug!(
        model = model.name(),
        width = image.width(),
        height = image.height(),
        "Encoded image"
    );
    Ok(())
}

/// Encode `image` as a gzip-wrapped BI stream.
///
/// Writes the `biz` magic line, then the complete plain stream (header and
/// rows) through gzip at the given compression level.
pub fn encode_compressed<W: Write>(
    mut writer: W,
    image: &Image,
    model: &dyn ColorModel,
    level: Compression,
) -> Result<(), CodecError> {
    validate_model_name(model.name())?;
    writer.write_all(format!("{COMPRESSED_MAGIC}\n").as_bytes())?;

    let mut gz = GzEncoder::new(writer, level);
    encode(&mut gz, image, model)?;
    gz.finish()?.flush()?;
    Ok(())
}
