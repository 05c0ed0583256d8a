use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_time::{DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS};

/// Validated iteration cap and escape radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    max_iterations: u32,
    escape_radius: f64,
}

impl MandelbrotParams {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(MandelbrotError::InvalidEscapeRadius { escape_radius });
        }

        Ok(Self {
            max_iterations,
            escape_radius,
        })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

impl Default for MandelbrotParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = MandelbrotParams::default();

        assert_eq!(params.max_iterations(), 200);
        assert_eq!(params.escape_radius(), 2.0);
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        assert_eq!(
            MandelbrotParams::new(0, 2.0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_bad_escape_radius_rejected() {
        assert_eq!(
            MandelbrotParams::new(10, 0.0),
            Err(MandelbrotError::InvalidEscapeRadius { escape_radius: 0.0 })
        );
        assert!(MandelbrotParams::new(10, f64::NAN).is_err());
        assert!(MandelbrotParams::new(10, -2.0).is_err());
    }

    #[test]
    fn test_custom_params() {
        let params = MandelbrotParams::new(255, 4.0).unwrap();

        assert_eq!(params.max_iterations(), 255);
        assert_eq!(params.escape_radius(), 4.0);
    }
}
