//! Palette struct with named color storage and nearest-color matching.
//!
//! This module provides the core `Palette` type: an immutable mapping from
//! color names to colors, and the exhaustive nearest-color search used by
//! the named palette color model.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::css::CSS_NAMED_COLORS;
use super::error::PaletteError;
use crate::color::Color;

/// Dissimilarity between two colors.
///
/// Sum of the absolute per-channel differences over red, green, blue and
/// alpha on the 16-bit scale. Never negative and never wraps: the largest
/// possible value is `4 * 65535`.
///
/// # Example
///
/// ```
/// use bi_palette::{dissimilarity, Color};
///
/// let black = Color::from_rgb8(0, 0, 0);
/// let red = Color::from_rgb8(255, 0, 0);
/// assert_eq!(dissimilarity(black, red), 65535);
/// assert_eq!(dissimilarity(red, black), 65535);
/// ```
#[inline]
pub fn dissimilarity(a: Color, b: Color) -> u32 {
    u32::from(a.r.abs_diff(b.r))
        + u32::from(a.g.abs_diff(b.g))
        + u32::from(a.b.abs_diff(b.b))
        + u32::from(a.a.abs_diff(b.a))
}

/// Returns true if `name` survives being written as one comma-separated
/// field and read back with surrounding whitespace trimmed.
fn is_field_safe(name: &str) -> bool {
    !name.contains([',', '\n', '\r']) && name.trim() == name
}

/// An immutable set of named colors.
///
/// Names are unique. The empty name is reserved: it may appear at most once
/// and only for [`Color::TRANSPARENT`]. Several names may share one color
/// (the CSS table has `gray` and `grey`, for instance).
///
/// Entries live in a hash map, so iteration order is unspecified. Matching
/// does not depend on it: see [`Palette::find_nearest`].
///
/// # Example
///
/// ```
/// use bi_palette::{Color, Palette};
///
/// let palette = Palette::new([
///     ("black", Color::from_rgb8(0, 0, 0)),
///     ("white", Color::from_rgb8(255, 255, 255)),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.get("white"), Some(Color::from_rgb8(255, 255, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: HashMap<String, Color>,
}

impl Palette {
    /// Create a palette from `(name, color)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no entries are given ([`PaletteError::EmptyPalette`])
    /// - a name appears twice ([`PaletteError::DuplicateName`])
    /// - the empty name maps to anything but transparent ([`PaletteError::ReservedName`])
    /// - a name holds a `,`, `\n` or `\r`, or has leading or trailing
    ///   whitespace ([`PaletteError::InvalidName`])
    pub fn new<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (S, Color)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (name, color) in entries {
            let name = name.into();
            if !is_field_safe(&name) {
                return Err(PaletteError::InvalidName { name });
            }
            if name.is_empty() && color != Color::TRANSPARENT {
                return Err(PaletteError::ReservedName);
            }
            match map.entry(name) {
                Entry::Occupied(occupied) => {
                    return Err(PaletteError::DuplicateName {
                        name: occupied.key().clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(color);
                }
            }
        }

        if map.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        Ok(Self { entries: map })
    }

    /// The CSS Color Module Level 4 named colors plus the transparent entry.
    pub fn css() -> Self {
        let entries = CSS_NAMED_COLORS
            .iter()
            .map(|&(name, rgba)| (name.to_string(), Color::from_bytes(rgba)))
            .collect();
        Self { entries }
    }

    /// Returns the number of named colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: This always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup of a color by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(name).copied()
    }

    /// Returns true if `name` is in the palette.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over `(name, color)` pairs in unspecified order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(name, &color)| (name.as_str(), color))
    }

    /// All names, sorted byte-wise.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Find the palette entry nearest to `color`.
    ///
    /// Every entry is scored with [`dissimilarity`] and the lowest score
    /// wins. Among entries with the same lowest score the byte-wise smallest
    /// name wins, so the result does not depend on hash map order.
    ///
    /// Returns `(name, color, distance)`.
    ///
    /// # Example
    ///
    /// ```
    /// use bi_palette::{Color, Palette};
    ///
    /// let palette = Palette::new([
    ///     ("black", Color::from_rgb8(0, 0, 0)),
    ///     ("white", Color::from_rgb8(255, 255, 255)),
    /// ])
    /// .unwrap();
    ///
    /// let (name, _, _) = palette.find_nearest(Color::from_rgb8(40, 40, 40));
    /// assert_eq!(name, "black");
    /// ```
    pub fn find_nearest(&self, color: Color) -> (&str, Color, u32) {
        // Linear scan, O(len) per pixel
        let mut best: Option<(&str, Color, u32)> = None;

        for (name, &candidate) in &self.entries {
            let dist = dissimilarity(color, candidate);
            let better = match best {
                None => true,
                Some((best_name, _, best_dist)) => {
                    dist < best_dist || (dist == best_dist && name.as_str() < best_name)
                }
            };
            if better {
                best = Some((name.as_str(), candidate, dist));
            }
        }

        // Always Some - empty palettes are rejected at construction
        best.unwrap_or(("", Color::TRANSPARENT, u32::MAX))
    }
}
