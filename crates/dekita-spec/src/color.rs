//! `#RRGGBB` color values used throughout the parameter types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexColorError {
    #[error("hex color must start with '#', got '{0}'")]
    MissingHash(String),

    #[error("hex color must have 6 hex digits, got '{0}'")]
    InvalidLength(String),

    #[error("invalid hex digit in '{0}'")]
    InvalidDigit(String),
}

/// An opaque 8-bit RGB color, written as `#RRGGBB` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const WHITE: HexColor = HexColor([0xFF, 0xFF, 0xFF]);

    /// Create a color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self([
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        ])
    }

    /// The red, green and blue channels.
    pub const fn channels(&self) -> [u8; 3] {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| HexColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(HexColorError::InvalidLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit(s.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| HexColorError::InvalidDigit(s.to_string()))?;
        Ok(Self::from_u32(packed))
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}
