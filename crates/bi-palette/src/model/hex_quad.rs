//! Hex quadruplet color model.

use super::{ColorModel, ModelError, ParseTokenError};
use crate::color::Color;

/// Identifier of the hex color model.
pub const HEX_MODEL_NAME: &str = "hex";

/// Number of hex digits in a token, two per channel.
const TOKEN_DIGITS: usize = 8;

/// A color model for hex quadruplet codes such as `#FF69B4FF`.
///
/// <https://css-tricks.com/8-digit-hex-codes/>
///
/// Tokens are written as `#` followed by eight uppercase hex digits in
/// R, G, B, A order. Parsing accepts either case, with or without the `#`.
/// Channels are truncated to 8 bits on the way out and widened by 257 on the
/// way in, so the model is lossless for 8-bit-aligned colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexModel;

impl ColorModel for HexModel {
    fn name(&self) -> &str {
        HEX_MODEL_NAME
    }

    fn quantize(&self, color: Color) -> Color {
        color.truncate_to_8bit()
    }

    fn color_to_name(&self, color: Color) -> String {
        format!("#{}", hex::encode_upper(color.to_rgba8()))
    }

    fn name_to_color(&self, name: &str) -> Result<Color, ModelError> {
        parse_token(name).map_err(|source| ModelError::MalformedToken {
            token: name.to_string(),
            source,
        })
    }
}

fn parse_token(token: &str) -> Result<Color, ParseTokenError> {
    let digits = token.strip_prefix('#').unwrap_or(token);
    if digits.len() != TOKEN_DIGITS {
        return Err(ParseTokenError::InvalidLength(digits.len()));
    }

    let mut rgba = [0u8; 4];
    hex::decode_to_slice(digits, &mut rgba)?;
    Ok(Color::from_bytes(rgba))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_name_format() {
        let model = HexModel;
        assert_eq!(model.color_to_name(Color::from_rgb8(255, 105, 180)), "#FF69B4FF");
        assert_eq!(model.color_to_name(Color::TRANSPARENT), "#00000000");
        assert_eq!(
            model.color_to_name(Color::from_rgba8(0x0a, 0xb, 0xc, 0xd)),
            "#0A0B0C0D"
        );
    }

    #[test]
    fn test_color_to_name_truncates_wide_channels() {
        let model = HexModel;
        assert_eq!(
            model.color_to_name(Color::new(0x12FF, 0x3401, 0x5680, 0xFFFF)),
            "#123456FF"
        );
    }

    #[test]
    fn test_name_to_color_with_and_without_marker() {
        let model = HexModel;
        let expected = Color::from_rgba8(0xFF, 0x00, 0x7F, 0x80);
        assert_eq!(model.name_to_color("#FF007F80").unwrap(), expected);
        assert_eq!(model.name_to_color("FF007F80").unwrap(), expected);
        assert_eq!(model.name_to_color("#ff007f80").unwrap(), expected);
    }

    #[test]
    fn test_name_to_color_expands_by_257() {
        let c = HexModel.name_to_color("#01020304").unwrap();
        assert_eq!(c, Color::new(257, 514, 771, 1028));
    }

    #[test]
    fn test_name_to_color_invalid_length() {
        for token in ["", "#", "#FFF", "#FF0000", "#FF0000FF00", "FF0000F"] {
            let err = HexModel.name_to_color(token).unwrap_err();
            assert!(
                matches!(
                    err,
                    ModelError::MalformedToken {
                        source: ParseTokenError::InvalidLength(_),
                        ..
                    }
                ),
                "{:?} should be rejected for its length, got {:?}",
                token,
                err
            );
        }
    }

    #[test]
    fn test_name_to_color_invalid_digit() {
        let err = HexModel.name_to_color("#GG0000FF").unwrap_err();
        assert!(matches!(
            err,
            ModelError::MalformedToken {
                source: ParseTokenError::InvalidHex(_),
                ..
            }
        ));
    }

    #[test]
    fn test_name_to_color_rejects_double_marker() {
        assert!(HexModel.name_to_color("##FF0000F").is_err());
    }

    #[test]
    fn test_quantize_is_8bit_truncation() {
        let c = Color::new(0x12FF, 0x3401, 0x5680, 0xFFFF);
        assert_eq!(HexModel.quantize(c), Color::from_rgba8(0x12, 0x34, 0x56, 0xFF));
        let aligned = Color::from_rgba8(1, 2, 3, 4);
        assert_eq!(HexModel.quantize(aligned), aligned);
    }
}
