//! Exponential pursuit of a moving target point.
//!
//! The cursor shell draws several glyphs at different lags behind the real
//! pointer; each lag is one `Follower` with its own smoothing factor.
//! Per frame the follower closes a fixed fraction of the remaining
//! distance, so it decelerates as it approaches and never overshoots.

use glam::DVec2;

/// Smoothing factor of the slow outer trail glyph.
pub const TRAIL_SMOOTHING: f64 = 0.05;
/// Smoothing factor of the tight inner dot glyph.
pub const DOT_SMOOTHING: f64 = 0.1;

/// A point chasing a target by a fixed fraction per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    position: DVec2,
    smoothing: f64,
}

impl Follower {
    /// Creates a follower at `start` closing `smoothing` of the gap per
    /// frame. The factor is clamped to [0, 1].
    pub fn new(start: DVec2, smoothing: f64) -> Self {
        Self {
            position: start,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// The per-frame gap fraction.
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Advances one frame toward `target` and returns the new position.
    pub fn step_toward(&mut self, target: DVec2) -> DVec2 {
        self.position += (target - self.position) * self.smoothing;
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_smoothing() {
        assert_eq!(Follower::new(DVec2::ZERO, 1.5).smoothing(), 1.0);
        assert_eq!(Follower::new(DVec2::ZERO, -0.5).smoothing(), 0.0);
    }

    #[test]
    fn step_closes_the_configured_fraction() {
        let mut follower = Follower::new(DVec2::ZERO, 0.1);
        let pos = follower.step_toward(DVec2::new(100.0, 0.0));
        assert!((pos.x - 10.0).abs() < 1e-12);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn smoothing_one_jumps_to_the_target() {
        let mut follower = Follower::new(DVec2::new(5.0, 5.0), 1.0);
        let pos = follower.step_toward(DVec2::new(42.0, -7.0));
        assert_eq!(pos, DVec2::new(42.0, -7.0));
    }

    #[test]
    fn smoothing_zero_never_moves() {
        let mut follower = Follower::new(DVec2::new(3.0, 4.0), 0.0);
        for _ in 0..10 {
            follower.step_toward(DVec2::new(100.0, 100.0));
        }
        assert_eq!(follower.position(), DVec2::new(3.0, 4.0));
    }

    #[test]
    fn follower_converges_to_a_stationary_target() {
        let mut follower = Follower::new(DVec2::ZERO, TRAIL_SMOOTHING);
        let target = DVec2::new(200.0, 150.0);
        for _ in 0..500 {
            follower.step_toward(target);
        }
        assert!((follower.position() - target).length() < 0.01);
    }

    #[test]
    fn tighter_smoothing_tracks_closer() {
        let mut trail = Follower::new(DVec2::ZERO, TRAIL_SMOOTHING);
        let mut dot = Follower::new(DVec2::ZERO, DOT_SMOOTHING);
        let target = DVec2::new(100.0, 100.0);
        for _ in 0..20 {
            trail.step_toward(target);
            dot.step_toward(target);
        }
        let trail_gap = (trail.position() - target).length();
        let dot_gap = (dot.position() - target).length();
        assert!(dot_gap < trail_gap, "dot {dot_gap} not tighter than trail {trail_gap}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn coord() -> impl Strategy<Value = f64> {
            -1e4_f64..1e4
        }

        proptest! {
            #[test]
            fn distance_to_target_never_increases(
                sx in coord(), sy in coord(),
                tx in coord(), ty in coord(),
                smoothing in 0.0_f64..=1.0,
            ) {
                let target = DVec2::new(tx, ty);
                let mut follower = Follower::new(DVec2::new(sx, sy), smoothing);
                let mut gap = (follower.position() - target).length();
                for _ in 0..50 {
                    follower.step_toward(target);
                    let next_gap = (follower.position() - target).length();
                    prop_assert!(next_gap <= gap + 1e-9);
                    gap = next_gap;
                }
            }
        }
    }
}
