//! In-memory pixel grid.
//!
//! [`Image`] is what the encoder reads from and the decoder produces: a
//! rectangular, row-major grid of [`Color`] values with the origin at the
//! top-left corner.

use bi_palette::{Color, ColorModel};

/// A `width × height` grid of colors, stored row-major.
///
/// # Example
///
/// ```
/// use bi::{Color, Image};
///
/// let mut image = Image::new(2, 1);
/// image.set_pixel(1, 0, Color::from_rgb8(255, 0, 0));
///
/// assert_eq!(image.pixel(0, 0), Some(Color::TRANSPARENT));
/// assert_eq!(image.pixel(1, 0), Some(Color::from_rgb8(255, 0, 0)));
/// assert_eq!(image.pixel(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Pixels, one per cell, row-major order.
    pixels: Vec<Color>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
}

impl Image {
    /// Create a transparent image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![Color::TRANSPARENT; width * height],
            width,
            height,
        }
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build an image from packed 8-bit RGBA bytes.
    ///
    /// Returns `None` if `rgba.len() != width * height * 4`.
    pub fn from_rgba8(width: usize, height: usize, rgba: &[u8]) -> Option<Self> {
        if width.checked_mul(height)?.checked_mul(4)? != rgba.len() {
            return None;
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| Color::from_rgba8(px[0], px[1], px[2], px[3]))
            .collect();
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The color at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Overwrite the color at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = color;
    }

    /// Returns all pixels as a row-major slice.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks_exact panics on a zero chunk size
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Convert to packed 8-bit RGBA bytes (channels truncated).
    ///
    /// The returned buffer has length `width * height * 4`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    /// A copy with every pixel replaced by `model.quantize(pixel)`.
    ///
    /// This is the image a lossless decode of `model`'s encoding yields.
    pub fn quantized(&self, model: &dyn ColorModel) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&c| model.quantize(c)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}
