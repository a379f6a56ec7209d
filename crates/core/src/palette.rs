//! Discrete color palette sampled by uniform choice.
//!
//! Each particle is assigned one palette entry at creation and keeps it for
//! life, so the palette is an ordered, non-empty list of stops with a
//! uniform `pick` — no interpolation.

use crate::color::Srgb;
use crate::error::FieldError;
use crate::prng::Xorshift64;

/// All available palette names.
const PALETTE_NAMES: &[&str] = &["signal", "cyan", "ember", "mono"];

/// A non-empty, ordered list of colors sampled by uniform choice.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a new palette from a vector of colors.
    ///
    /// Requires at least one color.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, FieldError> {
        if colors.is_empty() {
            return Err(FieldError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    ///
    /// Each string can be "#rrggbb" or "rrggbb" (case insensitive).
    pub fn from_hex(hexes: &[&str]) -> Result<Self, FieldError> {
        let colors: Result<Vec<Srgb>, FieldError> =
            hexes.iter().map(|h| Srgb::from_hex(h)).collect();
        Self::new(colors?)
    }

    /// Returns the number of color stops in this palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if this palette has no colors. (Always false for valid palettes.)
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the stop at `index`, or `None` past the end.
    pub fn color(&self, index: usize) -> Option<Srgb> {
        self.colors.get(index).copied()
    }

    /// Read-only access to all stops in order.
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Picks one stop uniformly at random.
    pub fn pick(&self, rng: &mut Xorshift64) -> Srgb {
        self.colors[rng.next_usize(self.colors.len())]
    }

    // -- Built-in palettes --

    /// The five-color accent set used by the burst field.
    pub fn signal() -> Self {
        Self::from_hex(&["#00d4ff", "#ff6b6b", "#4ecdc4", "#ffd93d", "#ffffff"])
            .expect("signal palette hex values are valid")
    }

    /// Single cyan tint used by the ambient background field.
    pub fn cyan() -> Self {
        Self::from_hex(&["#00d4ff"]).expect("cyan palette hex value is valid")
    }

    /// Warm reds through gold.
    pub fn ember() -> Self {
        Self::from_hex(&["#8b1a1a", "#cc3300", "#ff6b35", "#ff9f1c", "#ffd93d"])
            .expect("ember palette hex values are valid")
    }

    /// Grayscale ramp.
    pub fn mono() -> Self {
        Self::from_hex(&["#202020", "#606060", "#a0a0a0", "#e0e0e0", "#ffffff"])
            .expect("mono palette hex values are valid")
    }

    /// Constructs a built-in palette by name.
    ///
    /// Returns `FieldError::UnknownPalette` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "signal" => Ok(Self::signal()),
            "cyan" => Ok(Self::cyan()),
            "ember" => Ok(Self::ember()),
            "mono" => Ok(Self::mono()),
            _ => Err(FieldError::UnknownPalette(name.to_string())),
        }
    }

    /// Returns a slice of all built-in palette names.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }
}
