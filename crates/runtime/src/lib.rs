#![deny(unsafe_code)]
//! CPU-side runtime for drift-engine: the raster surface backend, named
//! scene presets, a wall-clock frame pacer, and PNG snapshots.
//!
//! This crate sits between `drift-engine-core` (which defines the
//! `Surface`, `FrameClock`, and `Simulation` seams) and the frontends.
//! Both the CLI and the WASM bindings depend on it to avoid duplicating
//! scene dispatch.

pub mod clock;
pub mod raster;
pub mod scene;

#[cfg(feature = "png")]
pub mod snapshot;

pub use clock::FixedRateClock;
pub use raster::Raster;
pub use scene::{build_field, ScenePreset};
