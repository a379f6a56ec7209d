#![deny(unsafe_code)]
//! Pure interaction models for the drift-engine site shell.
//!
//! Each module is a small state + update rule with no platform knowledge:
//! the host feeds in key presses, pointer positions, or poll ticks and
//! applies the returned values to whatever UI it owns.

pub mod follow;
pub mod progress;
pub mod sequence;
pub mod tilt;

pub use follow::Follower;
pub use progress::LoadingProgress;
pub use sequence::CodeWatcher;
pub use tilt::Tilt;
