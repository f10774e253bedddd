//! Easing curves
//!
//! Maps linear progress in `[0, 1]` onto eased progress. The `PowerN` curves
//! follow the usual animation-library naming: `Power1Out` is a quadratic
//! ease-out, `Power3Out` a quartic one.

/// Easing curve applied to tween progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic deceleration (default for every tween)
    #[default]
    Power1Out,
    /// Quartic deceleration (parallax plate)
    Power3Out,
}

impl Ease {
    /// Eased progress for linear progress `t`.
    ///
    /// Input is clamped to `[0, 1]` and endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }

        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 3] = [Ease::Linear, Ease::Power1Out, Ease::Power3Out];

    #[test]
    fn test_endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{:?} at 0", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.5), 1.0);
            assert_eq!(ease.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn test_out_curves_decelerate() {
        // Ease-out curves are ahead of linear at the midpoint
        assert!(Ease::Power1Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power1Out.apply(0.5));
        assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < 1e-6);
        assert!((Ease::Power3Out.apply(0.5) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for ease in ALL {
            let mut last = 0.0;
            for step in 1..=100 {
                let v = ease.apply(step as f32 / 100.0);
                assert!(v >= last, "{:?} not monotonic at step {}", ease, step);
                last = v;
            }
        }
    }
}
