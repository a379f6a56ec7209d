//! The core `Simulation` trait the driver schedules.
//!
//! The trait is object-safe so hosts can hold `Box<dyn Simulation>` and
//! switch field configurations at runtime.

use crate::error::FieldError;
use crate::surface::Surface;
use glam::DVec2;

/// A steppable, renderable simulation.
///
/// One `tick` advances the model by one frame's worth of state; `render`
/// draws the current state onto an abstract [`Surface`] without mutating
/// anything. For a correctly constructed simulation, `tick` is total —
/// the `Result` exists for implementations with richer failure modes.
pub trait Simulation {
    /// Advances the simulation by one frame.
    fn tick(&mut self) -> Result<(), FieldError>;

    /// Draws the current state onto `surface`. Side effect only; no state
    /// mutation.
    fn render(&self, surface: &mut dyn Surface);

    /// Number of live entities in the simulation.
    fn population(&self) -> usize;

    /// Inserts `count` entities at `origin` in response to a host
    /// interaction.
    ///
    /// The default implementation ignores the request; simulations without
    /// click-to-spawn behavior need not override it.
    fn spawn_burst(&mut self, origin: DVec2, count: usize) {
        let _ = (origin, count);
    }
}
