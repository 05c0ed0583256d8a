pub const DEFAULT_STEP: f64 = 0.5;
pub const DEFAULT_DEVIATION: f64 = 2.0;

/// Bounds applied to the viewport half-width after each transition.
///
/// The default range only keeps the deviation positive and finite, so
/// zooming continues until `f64` precision runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    pub min_deviation: f64,
    pub max_deviation: f64,
}

impl NavigationLimits {
    #[must_use]
    pub fn with_min_deviation(min_deviation: f64) -> Self {
        Self {
            min_deviation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_deviation.is_finite()
            && self.max_deviation.is_finite()
            && self.min_deviation > 0.0
            && self.max_deviation >= self.min_deviation
    }

    /// Clamps `deviation` into range, returning whether it was changed.
    #[must_use]
    pub fn clamp_deviation(&self, deviation: f64) -> (f64, bool) {
        if deviation.is_nan() {
            return (self.max_deviation, true);
        }

        let clamped = deviation.clamp(self.min_deviation, self.max_deviation);
        (clamped, clamped != deviation)
    }
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            min_deviation: f64::MIN_POSITIVE,
            max_deviation: f64::MAX,
        }
    }
}
