//! PNG input and output for the CLI and tests.
//!
//! Reading expands every PNG layout (indexed, grey, grey+alpha, RGB, RGBA at
//! any bit depth) to straight-alpha [`Color`]s, keeping 16-bit samples at full
//! precision. Writing always produces 8-bit RGBA.

use std::io::{Read, Write};

use bi_palette::Color;

use crate::error::RasterError;
use crate::image::Image;

/// Decode a PNG into an [`Image`].
pub fn read_png<R: Read>(reader: R) -> Result<Image, RasterError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let width = info.width as usize;
    let height = info.height as usize;
    let pixels = match info.bit_depth {
        png::BitDepth::Eight => {
            expand_samples(info.color_type, data.iter().map(|&v| u16::from(v) * 257))?
        }
        png::BitDepth::Sixteen => expand_samples(
            info.color_type,
            data.chunks_exact(2).map(|b| u16::from_be_bytes([b[0], b[1]])),
        )?,
        other => {
            return Err(RasterError::Unsupported(format!(
                "bit depth {:?} after expansion",
                other
            )))
        }
    };

    tracing::debug!(
        width,
        height,
        color_type = ?info.color_type,
        bit_depth = ?info.bit_depth,
        "Read PNG"
    );

    Image::from_pixels(width, height, pixels)
        .ok_or_else(|| RasterError::Unsupported("pixel data does not match PNG size".to_string()))
}

/// Group 16-bit samples into colors according to the expanded color type.
fn expand_samples(
    color_type: png::ColorType,
    samples: impl Iterator<Item = u16>,
) -> Result<Vec<Color>, RasterError> {
    let samples: Vec<u16> = samples.collect();
    let pixels = match color_type {
        png::ColorType::Grayscale => samples
            .iter()
            .map(|&v| Color::new(v, v, v, u16::MAX))
            .collect(),
        png::ColorType::GrayscaleAlpha => samples
            .chunks_exact(2)
            .map(|s| Color::new(s[0], s[0], s[0], s[1]))
            .collect(),
        png::ColorType::Rgb => samples
            .chunks_exact(3)
            .map(|s| Color::new(s[0], s[1], s[2], u16::MAX))
            .collect(),
        png::ColorType::Rgba => samples
            .chunks_exact(4)
            .map(|s| Color::new(s[0], s[1], s[2], s[3]))
            .collect(),
        png::ColorType::Indexed => {
            return Err(RasterError::Unsupported(
                "indexed data left after expansion".to_string(),
            ))
        }
    };
    Ok(pixels)
}

/// Encode an [`Image`] as an 8-bit RGBA PNG.
///
/// Channels are truncated to their high byte.
pub fn write_png<W: Write>(writer: W, image: &Image) -> Result<(), RasterError> {
    let too_large = || RasterError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    if image.is_empty() {
        return Err(RasterError::Unsupported(
            "PNG cannot hold an image without pixels".to_string(),
        ));
    }
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Fast);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.to_rgba8())?;
    writer.finish()?;

    tracing::debug!(width, height, "Wrote PNG");
    Ok(())
}
