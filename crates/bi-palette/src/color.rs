//! Wide-range RGBA color value
//!
//! Every color is stored with 16 bits per channel regardless of the depth of
//! the pixels it came from, so distances between colors from 8-bit and 16-bit
//! sources are computed on the same scale.

/// A color with 16-bit red, green, blue and alpha channels.
///
/// Alpha is straight (not premultiplied). 8-bit channel values are widened by
/// replication (`v * 257`, i.e. `v | v << 8`) and narrowed by truncation
/// (`v >> 8`), so 8-bit values survive a round trip unchanged.
///
/// # Example
///
/// ```
/// use bi_palette::Color;
///
/// let red = Color::from_rgba8(255, 0, 0, 255);
/// assert_eq!(red.r, 0xFFFF);
/// assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=65535)
    pub r: u16,
    /// Green channel (0..=65535)
    pub g: u16,
    /// Blue channel (0..=65535)
    pub b: u16,
    /// Alpha channel (0..=65535, 65535 is opaque)
    pub a: u16,
}

impl Color {
    /// Fully transparent black, the color of the reserved empty palette name.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Create a color from 16-bit channel values.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// Each channel is scaled into the 16-bit range by multiplying by 257.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: widen(r),
            g: widen(g),
            b: widen(b),
            a: widen(a),
        }
    }

    /// Create an opaque color from 8-bit channel values.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from an 8-bit byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from_rgba8(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to 8-bit channels `[R, G, B, A]`, truncating the low byte.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [
            narrow(self.r),
            narrow(self.g),
            narrow(self.b),
            narrow(self.a),
        ]
    }

    /// Drop the low byte of every channel and widen again.
    ///
    /// The result is the closest color that an 8-bit channel depth can
    /// represent exactly.
    #[inline]
    pub const fn truncate_to_8bit(self) -> Self {
        Self::from_bytes(self.to_rgba8())
    }

    /// Returns true if every channel is exactly representable in 8 bits.
    #[inline]
    pub const fn is_8bit_aligned(self) -> bool {
        self.r % 257 == 0 && self.g % 257 == 0 && self.b % 257 == 0 && self.a % 257 == 0
    }
}

impl From<[u8; 4]> for Color {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[inline]
const fn widen(v: u8) -> u16 {
    (v as u16) << 8 | v as u16
}

#[inline]
const fn narrow(v: u16) -> u8 {
    (v >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8_scales_by_257() {
        for v in [0u8, 1, 17, 128, 254, 255] {
            let c = Color::from_rgba8(v, v, v, v);
            assert_eq!(c.r, v as u16 * 257);
            assert_eq!(c.a, v as u16 * 257);
        }
    }

    #[test]
    fn test_to_rgba8_truncates() {
        let c = Color::new(0x12FF, 0x3400, 0x56AB, 0xFFFF);
        assert_eq!(c.to_rgba8(), [0x12, 0x34, 0x56, 0xFF]);
    }

    #[test]
    fn test_8bit_roundtrip() {
        for v in 0..=255u8 {
            let c = Color::from_rgba8(v, 255 - v, v / 2, 255);
            assert_eq!(Color::from_bytes(c.to_rgba8()), c);
            assert!(c.is_8bit_aligned());
        }
    }

    #[test]
    fn test_truncate_to_8bit() {
        let c = Color::new(0x80FF, 0x0001, 0xFFFF, 0x7F80);
        let t = c.truncate_to_8bit();
        assert_eq!(t, Color::from_rgba8(0x80, 0x00, 0xFF, 0x7F));
        assert!(!c.is_8bit_aligned());
        assert!(t.is_8bit_aligned());
    }

    #[test]
    fn test_transparent_is_default() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert_eq!(Color::TRANSPARENT.to_rgba8(), [0, 0, 0, 0]);
    }
}
