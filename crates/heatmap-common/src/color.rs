//! RGB colors and the variance palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Palette used by the variance color scale, coldest bucket first.
pub const VARIANCE_PALETTE: [&str; 4] = ["#4575b4", "#74add1", "#abd9e9", "#e0f3f8"];

/// Opaque RGB color.
///
/// Serializes as a lowercase `#rrggbb` string so palettes can be written
/// directly in YAML or JSON config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(ChartError::InvalidColor(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ChartError::InvalidColor(hex.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ChartError::InvalidColor(hex.to_string())),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a list of hex strings into colors, failing on the first bad entry.
    pub fn parse_palette<S: AsRef<str>>(entries: &[S]) -> ChartResult<Vec<Color>> {
        entries.iter().map(|s| Color::from_hex(s.as_ref())).collect()
    }

    /// The built-in variance palette.
    pub fn variance_palette() -> Vec<Color> {
        VARIANCE_PALETTE
            .iter()
            .filter_map(|hex| Color::from_hex(hex).ok())
            .collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Color::from_hex("#4575b4").unwrap(), Color::new(0x45, 0x75, 0xb4));
        assert_eq!(Color::from_hex("E0F3F8").unwrap(), Color::new(0xe0, 0xf3, 0xf8));
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ChartError::InvalidColor(_))
        ));
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_hex_output_is_lowercase() {
        assert_eq!(Color::new(0xAB, 0xD9, 0xE9).to_hex(), "#abd9e9");
        assert_eq!(Color::new(0xAB, 0xD9, 0xE9).to_string(), "#abd9e9");
    }

    #[test]
    fn test_variance_palette_has_four_colors() {
        let palette = Color::variance_palette();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette[0].to_hex(), "#4575b4");
        assert_eq!(palette[3].to_hex(), "#e0f3f8");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::new(0x74, 0xad, 0xd1)).unwrap();
        assert_eq!(json, "\"#74add1\"");

        let parsed: Color = serde_json::from_str("\"#abd9e9\"").unwrap();
        assert_eq!(parsed, Color::new(0xab, 0xd9, 0xe9));

        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
