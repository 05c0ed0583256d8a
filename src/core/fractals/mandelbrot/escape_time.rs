use crate::core::data::complex::Complex;

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Outcome of iterating `v -> v² + z` from `v = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The orbit stayed within the escape radius for every iteration.
    Bounded,
    /// `|v|` first exceeded the escape radius after `n + 1` applications
    /// of the recurrence.
    EscapedAt(u32),
}

impl Classification {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }
}

/// Escape-time classification of `z`.
///
/// The orbit is advanced before each test, so a point with `|z| > escape_radius`
/// escapes at iteration 0 and the origin never escapes.
#[must_use]
pub fn evaluate(z: Complex, max_iterations: u32, escape_radius: f64) -> Classification {
    let mut v = Complex::ZERO;

    for n in 0..max_iterations {
        v = v * v + z;
        if v.magnitude() > escape_radius {
            return Classification::EscapedAt(n);
        }
    }

    Classification::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate_default(z: Complex) -> Classification {
        evaluate(z, DEFAULT_MAX_ITERATIONS, DEFAULT_ESCAPE_RADIUS)
    }

    #[test]
    fn test_origin_is_bounded() {
        assert_eq!(evaluate_default(Complex::ZERO), Classification::Bounded);
        assert_eq!(evaluate(Complex::ZERO, 1, 2.0), Classification::Bounded);
    }

    #[test]
    fn test_points_outside_radius_escape_immediately() {
        for z in [
            Complex::new(2.0, 2.0),
            Complex::new(-2.1, 0.0),
            Complex::new(0.0, 3.0),
            Complex::new(1.5, -1.5),
        ] {
            assert_eq!(evaluate_default(z), Classification::EscapedAt(0), "z = {:?}", z);
        }
    }

    #[test]
    fn test_point_on_radius_does_not_escape_at_zero() {
        // |v_1| == 2 is not strictly greater than the radius
        assert_ne!(evaluate_default(Complex::new(2.0, 0.0)), Classification::EscapedAt(0));
        assert_eq!(evaluate_default(Complex::new(2.0, 0.0)), Classification::EscapedAt(1));
    }

    #[test]
    fn test_known_interior_points_are_bounded() {
        for z in [
            Complex::new(-1.0, 0.0),
            Complex::new(-0.5, 0.5),
            Complex::new(0.25, 0.0),
            Complex::new(-2.0, 0.0),
        ] {
            assert!(evaluate_default(z).is_bounded(), "z = {:?}", z);
        }
    }

    #[test]
    fn test_escape_iteration_is_counted_from_first_step() {
        // v1 = 1, v2 = 2, v3 = 5
        assert_eq!(evaluate_default(Complex::new(1.0, 0.0)), Classification::EscapedAt(2));
    }

    #[test]
    fn test_cap_turns_slow_escape_into_bounded() {
        let z = Complex::new(1.0, 0.0);

        assert_eq!(evaluate(z, 2, 2.0), Classification::Bounded);
        assert_eq!(evaluate(z, 3, 2.0), Classification::EscapedAt(2));
    }

    #[test]
    fn test_escape_index_is_below_cap() {
        let cap = 20;
        for i in 0..50 {
            let z = Complex::new(-2.0 + f64::from(i) * 0.1, 0.3);
            if let Classification::EscapedAt(n) = evaluate(z, cap, 2.0) {
                assert!(n < cap);
            }
        }
    }

    #[test]
    fn test_larger_radius_delays_escape() {
        let z = Complex::new(1.0, 0.0);

        assert_eq!(evaluate(z, 200, 4.0), Classification::EscapedAt(2));
        assert_eq!(evaluate(z, 200, 5.0), Classification::EscapedAt(3));
    }
}
