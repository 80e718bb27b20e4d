//! Palette types and utilities
//!
//! This module provides the named [`Palette`], the [`dissimilarity`] metric
//! used for nearest-color matching, the built-in CSS named color table, and
//! the palette construction error type.

mod css;
mod error;
mod palette;

pub use css::CSS_NAMED_COLORS;
pub use error::PaletteError;
pub use palette::{dissimilarity, Palette};
