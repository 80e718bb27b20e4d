//! Test fixtures and constants.

use bi::{Color, Image};

/// Streams used across tests
pub mod streams {
    /// 2x2 hex stream: red, green / blue, white
    pub const HEX_2X2: &[u8] = b"bi,hex\n#FF0000FF,#00FF00FF\n#0000FFFF,#FFFFFFFF\n";

    /// Palette stream whose second row is one field short
    pub const SHORT_ROW: &[u8] = b"bi,v1\nred,red\nred\n";

    /// Stream naming a model nobody registered
    pub const UNKNOWN_MODEL: &[u8] = b"bi,cmyk\nred\n";
}

/// A deterministic image with arbitrary 16-bit channels and some transparency
pub fn gradient(width: usize, height: usize) -> Image {
    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let seed = (x * 7919 + y * 104729) as u32;
            let color = Color::new(
                (seed.wrapping_mul(2654435761) >> 16) as u16,
                (seed.wrapping_mul(40503) & 0xFFFF) as u16,
                ((x * 65535) / width.max(1)) as u16,
                if (x + y) % 5 == 0 { 0 } else { u16::MAX },
            );
            image.set_pixel(x, y, color);
        }
    }
    image
}

/// The same image with every channel cut to its high byte
pub fn truncated(image: &Image) -> Image {
    let pixels = image
        .pixels()
        .iter()
        .map(|c| c.truncate_to_8bit())
        .collect();
    Image::from_pixels(image.width(), image.height(), pixels).unwrap()
}
