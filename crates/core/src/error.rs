//! Error types for the drift-engine core.

use thiserror::Error;

/// Errors produced by field construction and the surrounding tooling.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A field, raster, or clock was configured with unusable values
    /// (non-positive bounds, zero particle cap, zero frame rate).
    ///
    /// Construction fails outright; no partial state is created.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A requested scene preset name was not recognized.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// A requested palette name was not recognized.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// A snapshot or other file operation failed.
    #[error("io error: {0}")]
    Io(String),
}
