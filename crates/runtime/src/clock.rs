//! Wall-clock frame pacing for native hosts.
//!
//! Browsers hand the driver a real display-refresh signal; native hosts
//! approximate one by sleeping to evenly spaced deadlines. The clock
//! re-anchors after an overrun instead of bursting to catch up, matching
//! how a display compositor drops late frames.

use drift_engine_core::clock::FrameClock;
use drift_engine_core::error::FieldError;
use std::time::{Duration, Instant};

/// A [`FrameClock`] that paces frames at a fixed rate on the wall clock.
#[derive(Debug)]
pub struct FixedRateClock {
    frame: Duration,
    next_deadline: Instant,
}

impl FixedRateClock {
    /// Creates a clock ticking at `fps` frames per second.
    ///
    /// Returns `FieldError::InvalidConfiguration` if `fps` is zero.
    pub fn new(fps: u32) -> Result<Self, FieldError> {
        if fps == 0 {
            return Err(FieldError::InvalidConfiguration(
                "frame rate must be at least 1 fps".to_string(),
            ));
        }
        let frame = Duration::from_secs_f64(1.0 / fps as f64);
        Ok(Self {
            frame,
            next_deadline: Instant::now() + frame,
        })
    }

    /// The nominal duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for FixedRateClock {
    fn wait_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += self.frame;
        } else {
            // Overran the deadline; re-anchor rather than firing a burst
            // of zero-length frames.
            self.next_deadline = now + self.frame;
        }
    }
}
