//! Color models
//!
//! A color model turns colors into text tokens and back. Two models ship with
//! the crate:
//!
//! - [`NamedPaletteModel`]: tokens are palette names, colors are snapped to
//!   the nearest palette entry (`"v1"` is the CSS named color palette)
//! - [`HexModel`]: tokens are `#RRGGBBAA` codes, lossless at 8-bit precision
//!
//! Further models plug in by implementing [`ColorModel`] and registering an
//! instance with a [`ModelRegistry`](crate::ModelRegistry).

mod error;
mod hex_quad;
mod named;

use std::fmt;

use crate::color::Color;

pub use self::error::{ModelError, ParseTokenError};
pub use self::hex_quad::{HexModel, HEX_MODEL_NAME};
pub use self::named::{NamedPaletteModel, CSS_MODEL_NAME};

/// A named, invertible mapping between colors and text tokens.
///
/// Implementations must be pure: the same input always yields the same output,
/// and `name_to_color(&color_to_name(c))` must succeed for every color.
///
/// # Example
///
/// ```
/// use bi_palette::{Color, ColorModel, HexModel};
///
/// let model = HexModel;
/// let token = model.color_to_name(Color::from_rgb8(255, 105, 180));
/// assert_eq!(token, "#FF69B4FF");
/// assert_eq!(model.name_to_color(&token).unwrap(), Color::from_rgb8(255, 105, 180));
/// ```
pub trait ColorModel: Send + Sync + fmt::Debug {
    /// Stable, unique identifier written into stream headers.
    fn name(&self) -> &str;

    /// Map any color to the nearest color this model can represent.
    fn quantize(&self, color: Color) -> Color;

    /// The canonical token for `color`. Never fails.
    fn color_to_name(&self, color: Color) -> String;

    /// The color a token stands for.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the token is not recognised by this model.
    fn name_to_color(&self, name: &str) -> Result<Color, ModelError>;
}
