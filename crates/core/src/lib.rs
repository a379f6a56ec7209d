#![deny(unsafe_code)]
//! Core types and traits for the drift-engine particle animation system.
//!
//! Provides the `Simulation` trait, the `FieldDriver` scheduling loop, the
//! `Surface` and `FrameClock` boundary capabilities, `Bounds`, `Srgb` color,
//! discrete `Palette`, the `Xorshift64` PRNG, and JSON parameter helpers.

pub mod bounds;
pub mod clock;
pub mod color;
pub mod driver;
pub mod error;
pub mod palette;
pub mod params;
pub mod prng;
pub mod simulation;
pub mod surface;

pub use bounds::Bounds;
pub use clock::{FrameClock, ManualClock};
pub use color::Srgb;
pub use driver::{DriverState, FieldDriver};
pub use error::FieldError;
pub use palette::Palette;
pub use prng::Xorshift64;
pub use simulation::Simulation;
pub use surface::Surface;
