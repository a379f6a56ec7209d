//! Scene presets: the named field configurations hosts can request.
//!
//! The two presets cover the two places the site shows a particle field —
//! the full-page ambient background and the click-to-spawn arcade field
//! shown in the easter-egg modal. They differ only in configuration.

use drift_engine_core::bounds::Bounds;
use drift_engine_core::color::Srgb;
use drift_engine_core::error::FieldError;
use drift_engine_core::palette::Palette;
use drift_engine_core::params::param_string;
use drift_engine_field::{FieldConfig, ParticleField, TrailFade};
use serde_json::Value;

/// All available scene names.
const SCENE_NAMES: &[&str] = &["ambient", "arcade"];

/// Ambient background population.
const AMBIENT_COUNT: usize = 1000;
/// Arcade field population.
const ARCADE_COUNT: usize = 50;
/// Arcade trail fade alpha.
const ARCADE_TRAIL_ALPHA: f64 = 0.1;
/// Particles appended per click in the arcade field.
const ARCADE_BURST: usize = 5;

/// A named, preconfigured particle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePreset {
    /// Dense single-color drift filling the page background. The overlay
    /// is opaque: the surface is fully repainted every frame.
    Ambient,
    /// Sparse multi-color field with motion trails and click bursts.
    Arcade,
}

impl ScenePreset {
    /// Resolves a preset by name.
    ///
    /// Returns `FieldError::UnknownScene` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, FieldError> {
        match name {
            "ambient" => Ok(ScenePreset::Ambient),
            "arcade" => Ok(ScenePreset::Arcade),
            _ => Err(FieldError::UnknownScene(name.to_string())),
        }
    }

    /// Returns a slice of all recognized scene names.
    pub fn list_scenes() -> &'static [&'static str] {
        SCENE_NAMES
    }

    /// The preset's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenePreset::Ambient => "ambient",
            ScenePreset::Arcade => "arcade",
        }
    }

    /// The preset's field configuration.
    pub fn config(&self) -> FieldConfig {
        match self {
            ScenePreset::Ambient => FieldConfig {
                count: AMBIENT_COUNT,
                max_particles: None,
                // Opaque repaint each frame; the ambient field leaves no trails.
                trail: Some(TrailFade::new(Srgb::BLACK, 1.0)),
            },
            ScenePreset::Arcade => FieldConfig {
                count: ARCADE_COUNT,
                max_particles: None,
                trail: Some(TrailFade::new(Srgb::BLACK, ARCADE_TRAIL_ALPHA)),
            },
        }
    }

    /// The preset's stock palette.
    pub fn palette(&self) -> Palette {
        match self {
            ScenePreset::Ambient => Palette::cyan(),
            ScenePreset::Arcade => Palette::signal(),
        }
    }

    /// Particles a host should append per click interaction.
    ///
    /// Zero means the scene ignores clicks.
    pub fn click_burst(&self) -> usize {
        match self {
            ScenePreset::Ambient => 0,
            ScenePreset::Arcade => ARCADE_BURST,
        }
    }
}

/// Builds a particle field for a named scene, applying JSON overrides on
/// top of the preset defaults.
///
/// Recognized override keys: the [`FieldConfig`] keys (`count`,
/// `max_particles`, `trail_alpha`, `trail_color`) plus `palette` (a
/// built-in palette name).
pub fn build_field(
    scene: &str,
    width: f64,
    height: f64,
    seed: u64,
    params: &Value,
) -> Result<ParticleField, FieldError> {
    let preset = ScenePreset::from_name(scene)?;
    let bounds = Bounds::new(width, height)?;
    let config = preset.config().overridden(params);
    let palette_name = param_string(params, "palette", "");
    let palette = if palette_name.is_empty() {
        preset.palette()
    } else {
        Palette::from_name(&palette_name)?
    };
    ParticleField::new(config, bounds, palette, seed)
}
