//! sRGB color type with hex parsing and 8-bit quantization.
//!
//! The particle model picks discrete palette entries and hands them to a
//! raster surface, so the only color machinery needed is parse, format,
//! and quantize. Components are f64 in [0, 1].

use crate::error::FieldError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip has 8-bit
/// quantization (1/255 precision loss), acceptable since hex colors are
/// inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Opaque black, the stock trail-fade and clear color.
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parses a hex color string like "#00d4ff" or "00d4ff" (case insensitive).
    ///
    /// Returns `FieldError::InvalidColor` if the input is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, FieldError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(FieldError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| FieldError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| FieldError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| FieldError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8(1.0);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to an RGBA byte quad with the given alpha in [0, 1].
    ///
    /// Components are clamped before rounding, so out-of-gamut values
    /// degrade to the nearest representable channel.
    pub fn to_rgba8(self, alpha: f64) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(alpha)]
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
