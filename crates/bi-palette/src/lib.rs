//! bi-palette: named colors, nearest-color matching and color models
//!
//! This library holds the color side of the BI text image format: a wide
//! RGBA [`Color`], named [`Palette`]s with deterministic nearest-color
//! search, the [`ColorModel`] trait with its two built-in implementations,
//! and the [`ModelRegistry`] decoders use to resolve a model by name.
//!
//! # Quick Start
//!
//! ```
//! use bi_palette::{Color, ColorModel, ModelRegistry};
//!
//! let registry = ModelRegistry::with_builtins();
//! let css = registry.lookup("v1").unwrap();
//!
//! let salmon_ish = Color::from_rgb8(249, 129, 113);
//! let token = css.color_to_name(salmon_ish);
//! assert_eq!(token, "salmon");
//! assert_eq!(css.name_to_color(&token).unwrap(), css.quantize(salmon_ish));
//! ```
//!
//! # Matching
//!
//! The distance between two colors is the sum of absolute channel
//! differences over R, G, B and A on the 16-bit scale (see
//! [`dissimilarity`]). The nearest palette entry is the one with the smallest
//! distance; equal distances are broken by choosing the byte-wise smallest
//! name. Palettes are stored in hash maps, so the tie-break is what makes
//! output reproducible from run to run.
//!
//! # Built-in Models
//!
//! | Name | Type | Tokens | Lossy |
//! |------|------|--------|-------|
//! | `v1` | [`NamedPaletteModel::css()`] | CSS named colors, `""` for transparent | yes |
//! | `hex` | [`HexModel`] | `#RRGGBBAA` | only below 8 bits per channel |

pub mod color;
pub mod model;
pub mod palette;
pub mod registry;


pub use color::Color;
pub use model::{
    ColorModel, HexModel, ModelError, NamedPaletteModel, ParseTokenError, CSS_MODEL_NAME,
    HEX_MODEL_NAME,
};
pub use palette::{dissimilarity, Palette, PaletteError};
pub use registry::{validate_model_name, ModelRegistry, RegistryError, MAX_MODEL_NAME_LEN};
