//! Named palette color model.

use std::sync::{Arc, LazyLock};

use super::{ColorModel, ModelError};
use crate::color::Color;
use crate::palette::Palette;

/// Identifier of the built-in CSS named color model.
pub const CSS_MODEL_NAME: &str = "v1";

static CSS_PALETTE: LazyLock<Arc<Palette>> = LazyLock::new(|| Arc::new(Palette::css()));

/// A color model whose tokens are the names of a [`Palette`].
///
/// Encoding snaps every color to the nearest palette entry (see
/// [`Palette::find_nearest`]), so this model is lossy. Decoding is an exact
/// name lookup.
///
/// The palette is shared behind an [`Arc`], so cloning a model is cheap.
///
/// # Example
///
/// ```
/// use bi_palette::{Color, ColorModel, NamedPaletteModel};
///
/// let model = NamedPaletteModel::css();
/// assert_eq!(model.name(), "v1");
/// assert_eq!(model.color_to_name(Color::from_rgb8(250, 5, 5)), "red");
/// assert_eq!(model.name_to_color("red").unwrap(), Color::from_rgb8(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct NamedPaletteModel {
    name: String,
    palette: Arc<Palette>,
}

impl NamedPaletteModel {
    /// Wrap a palette in a model identified by `name`.
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette: Arc::new(palette),
        }
    }

    /// The CSS Color Module Level 4 named colors, identified as `"v1"`.
    ///
    /// <https://www.w3.org/TR/css-color-4/#named-colors>
    pub fn css() -> Self {
        Self {
            name: CSS_MODEL_NAME.to_string(),
            palette: Arc::clone(&CSS_PALETTE),
        }
    }

    /// The palette backing this model.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl ColorModel for NamedPaletteModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantize(&self, color: Color) -> Color {
        self.palette.find_nearest(color).1
    }

    fn color_to_name(&self, color: Color) -> String {
        self.palette.find_nearest(color).0.to_string()
    }

    fn name_to_color(&self, name: &str) -> Result<Color, ModelError> {
        self.palette
            .get(name)
            .ok_or_else(|| ModelError::UnknownColorName(name.to_string()))
    }
}
