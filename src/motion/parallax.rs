//! Pointer parallax for the backdrop plate

use std::time::Duration;

use tokio::time::Instant;

use super::{Ease, Tween};

/// Offset magnitude per unit of normalized pointer distance from center
pub const PARALLAX_SCALE: f32 = 10.0;

/// How long the plate takes to settle on a new offset
pub const PARALLAX_DURATION: Duration = Duration::from_millis(1200);

/// Backdrop offset that eases toward the pointer
#[derive(Debug, Clone)]
pub struct Parallax {
    x: Tween,
    y: Tween,
}

impl Parallax {
    pub fn new(now: Instant) -> Self {
        Self {
            x: Tween::still(0.0, now),
            y: Tween::still(0.0, now),
        }
    }

    /// Target offset for a pointer at `(col, row)` in a `width × height` viewport.
    ///
    /// `(pos / size - 0.5) * 10` per axis, so the center is `(0, 0)` and the
    /// top-left corner is `(-5, -5)`.
    pub fn target_for(col: u16, row: u16, width: u16, height: u16) -> (f32, f32) {
        fn axis(pos: u16, size: u16) -> f32 {
            if size == 0 {
                return 0.0;
            }
            (pos as f32 / size as f32 - 0.5) * PARALLAX_SCALE
        }
        (axis(col, width), axis(row, height))
    }

    /// Start easing from wherever the plate is now toward `target`
    pub fn point_to(&mut self, target: (f32, f32), now: Instant) {
        let (cx, cy) = self.offset_at(now);
        self.x = Tween::new(cx, target.0, PARALLAX_DURATION, now).ease(Ease::Power3Out);
        self.y = Tween::new(cy, target.1, PARALLAX_DURATION, now).ease(Ease::Power3Out);
        tracing::trace!(x = target.0, y = target.1, "parallax retarget");
    }

    /// Pointer moved within the viewport
    pub fn pointer_moved(&mut self, col: u16, row: u16, width: u16, height: u16, now: Instant) {
        self.point_to(Self::target_for(col, row, width, height), now);
    }

    pub fn offset_at(&self, now: Instant) -> (f32, f32) {
        (self.x.value_at(now), self.y.value_at(now))
    }

    /// Where the plate is heading
    pub fn target(&self) -> (f32, f32) {
        (self.x.target(), self.y.target())
    }

    /// Offset rounded to whole cells
    pub fn cells_at(&self, now: Instant) -> (i16, i16) {
        let (x, y) = self.offset_at(now);
        (x.round() as i16, y.round() as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_zero() {
        assert_eq!(Parallax::target_for(40, 12, 80, 24), (0.0, 0.0));
    }

    #[test]
    fn test_top_left_is_max_negative() {
        assert_eq!(Parallax::target_for(0, 0, 80, 24), (-5.0, -5.0));
    }

    #[test]
    fn test_zero_viewport_is_zero() {
        assert_eq!(Parallax::target_for(3, 3, 0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_plate_eases_toward_target() {
        let t0 = Instant::now();
        let mut plate = Parallax::new(t0);
        plate.point_to((4.0, -2.0), t0);

        let (mx, my) = plate.offset_at(t0 + Duration::from_millis(300));
        assert!(mx > 0.0 && mx < 4.0);
        assert!(my < 0.0 && my > -2.0);

        assert_eq!(plate.offset_at(t0 + PARALLAX_DURATION), (4.0, -2.0));
        assert_eq!(plate.cells_at(t0 + PARALLAX_DURATION), (4, -2));
    }

    #[test]
    fn test_retarget_starts_from_current_offset() {
        let t0 = Instant::now();
        let mut plate = Parallax::new(t0);
        plate.point_to((5.0, 5.0), t0);

        let mid = t0 + Duration::from_millis(400);
        let before = plate.offset_at(mid);
        plate.point_to((-5.0, -5.0), mid);

        // No jump at the moment of retargeting
        let after = plate.offset_at(mid);
        assert!((before.0 - after.0).abs() < 1e-4);
        assert_eq!(plate.target(), (-5.0, -5.0));
    }
}
