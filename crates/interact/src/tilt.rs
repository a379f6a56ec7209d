//! Pointer-driven card tilt.
//!
//! Maps a pointer position within a card's rectangle to a pair of rotation
//! angles: the card leans toward the pointer, pivoting around its center,
//! and snaps flat when the pointer leaves.

use glam::DVec2;

/// Stock divisor: a pointer at the card edge tilts by `extent / 2 / 10`
/// degrees.
pub const DEFAULT_DIVISOR: f64 = 10.0;

/// Rotation pair in degrees: around the x axis, then the y axis.
pub type TiltAngles = (f64, f64);

/// Computes the tilt for a pointer at `pointer` inside a card of `size`.
///
/// `rotate_x` grows as the pointer moves below center, `rotate_y` as it
/// moves left of center; both are zero at the exact center.
pub fn tilt_angles(pointer: DVec2, size: DVec2, divisor: f64) -> TiltAngles {
    let center = size / 2.0;
    let rotate_x = (pointer.y - center.y) / divisor;
    let rotate_y = (center.x - pointer.x) / divisor;
    (rotate_x, rotate_y)
}

/// Per-card tilt state.
#[derive(Debug, Clone, Copy)]
pub struct Tilt {
    size: DVec2,
    divisor: f64,
}

impl Tilt {
    /// Creates tilt state for a card of the given size.
    pub fn new(size: DVec2) -> Self {
        Self {
            size,
            divisor: DEFAULT_DIVISOR,
        }
    }

    /// Overrides the angle divisor (larger divisor, subtler tilt).
    pub fn with_divisor(mut self, divisor: f64) -> Self {
        self.divisor = divisor;
        self
    }

    /// The pose for a pointer at `pointer` in card-local coordinates.
    pub fn pointer_moved(&self, pointer: DVec2) -> TiltAngles {
        tilt_angles(pointer, self.size, self.divisor)
    }

    /// The flat rest pose applied when the pointer leaves the card.
    pub fn pointer_left(&self) -> TiltAngles {
        (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        let (rx, ry) = tilt_angles(DVec2::new(150.0, 100.0), DVec2::new(300.0, 200.0), 10.0);
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn bottom_right_corner_signs() {
        // Below center: positive rotate_x. Right of center: negative rotate_y.
        let (rx, ry) = tilt_angles(DVec2::new(300.0, 200.0), DVec2::new(300.0, 200.0), 10.0);
        assert_eq!(rx, 10.0);
        assert_eq!(ry, -15.0);
    }

    #[test]
    fn top_left_corner_signs() {
        let (rx, ry) = tilt_angles(DVec2::ZERO, DVec2::new(300.0, 200.0), 10.0);
        assert_eq!(rx, -10.0);
        assert_eq!(ry, 15.0);
    }

    #[test]
    fn divisor_scales_the_angles() {
        let pointer = DVec2::new(300.0, 200.0);
        let size = DVec2::new(300.0, 200.0);
        let (rx10, _) = tilt_angles(pointer, size, 10.0);
        let (rx20, _) = tilt_angles(pointer, size, 20.0);
        assert!((rx10 - 2.0 * rx20).abs() < 1e-12);
    }

    #[test]
    fn pointer_left_resets_to_flat() {
        let tilt = Tilt::new(DVec2::new(300.0, 200.0));
        assert_eq!(tilt.pointer_left(), (0.0, 0.0));
    }

    #[test]
    fn tilt_state_uses_its_divisor() {
        let tilt = Tilt::new(DVec2::new(300.0, 200.0)).with_divisor(5.0);
        let (rx, _) = tilt.pointer_moved(DVec2::new(150.0, 200.0));
        assert_eq!(rx, 20.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn mirrored_pointers_produce_mirrored_angles(
                px in 0.0_f64..300.0,
                py in 0.0_f64..200.0,
            ) {
                let size = DVec2::new(300.0, 200.0);
                let (rx, ry) = tilt_angles(DVec2::new(px, py), size, 10.0);
                let mirrored = DVec2::new(size.x - px, size.y - py);
                let (mrx, mry) = tilt_angles(mirrored, size, 10.0);
                prop_assert!((rx + mrx).abs() < 1e-9);
                prop_assert!((ry + mry).abs() < 1e-9);
            }
        }
    }
}
