//! Simulated loading progress.
//!
//! The loading screen has nothing real to measure; it advances a bar by a
//! random increment per poll and finishes at 100. Randomness is injected
//! so the sequence is replayable.

use drift_engine_core::prng::Xorshift64;

/// Completion value.
const FULL: f64 = 100.0;
/// Largest single-poll increment.
const STEP_MAX: f64 = 15.0;

/// A saturating, randomly advancing progress value in [0, 100].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingProgress {
    value: f64,
}

impl LoadingProgress {
    /// Creates progress at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value in [0, 100].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// True once the bar has reached 100.
    pub fn is_complete(&self) -> bool {
        self.value >= FULL
    }

    /// Advances by a uniform random increment in [0, 15), saturating at
    /// 100, and returns the new value.
    pub fn poll(&mut self, rng: &mut Xorshift64) -> f64 {
        self.value = (self.value + rng.next_range(0.0, STEP_MAX)).min(FULL);
        self.value
    }
}
