//! Error types for palette construction
//!
//! This module provides the error returned when a name-to-color mapping
//! cannot be turned into a [`Palette`](super::Palette).

use std::fmt;

/// Error type for palette validation.
///
/// Returned when palette entries are invalid, such as an empty entry list,
/// a repeated name, or a misuse of the reserved empty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No entries provided
    EmptyPalette,
    /// The same name appears more than once
    DuplicateName {
        /// The repeated name
        name: String,
    },
    /// The reserved empty name was bound to a color other than transparent
    ReservedName,
    /// The name cannot be written as a single stream field: it contains a
    /// delimiter or line break, or has surrounding whitespace
    InvalidName {
        /// The rejected name
        name: String,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::DuplicateName { name } => {
                write!(f, "duplicate color name {:?}", name)
            }
            PaletteError::ReservedName => {
                write!(f, "the empty color name is reserved for transparent")
            }
            PaletteError::InvalidName { name } => {
                write!(f, "color name {:?} cannot be written as a stream field", name)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
