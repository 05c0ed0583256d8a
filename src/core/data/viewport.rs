use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFinite { min: Complex, max: Complex },
    InvalidSize { width: f64, height: f64 },
    InvalidDeviation { deviation: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { min, max } => {
                write!(
                    f,
                    "viewport bounds must be finite: real [{}, {}], imag [{}, {}]",
                    min.real, max.real, min.imag, max.imag
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive and finite: {}x{}", width, height)
            }
            Self::InvalidDeviation { deviation } => {
                write!(f, "viewport deviation must be positive and finite: {}", deviation)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the raster.
///
/// Always satisfies `min.real < max.real` and `min.imag < max.imag`, with a
/// finite width and height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min: Complex,
    max: Complex,
}

impl Viewport {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ViewportError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ViewportError::NonFinite { min, max });
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// Square viewport extending `deviation` from `centre` along both axes.
    ///
    /// Fails with [`ViewportError::InvalidSize`] once `deviation` is too small
    /// to separate the bounds from `centre` in `f64`.
    pub fn from_centre(centre: Complex, deviation: f64) -> Result<Self, ViewportError> {
        if !deviation.is_finite() || deviation <= 0.0 {
            return Err(ViewportError::InvalidDeviation { deviation });
        }

        Self::new(
            Complex::new(centre.real - deviation, centre.imag - deviation),
            Complex::new(centre.real + deviation, centre.imag + deviation),
        )
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            self.min.real + self.width() / 2.0,
            self.min.imag + self.height() / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "real [{}, {}] imag [{}, {}]",
            self.min.real, self.max.real, self.min.imag, self.max.imag
        )
    }
}
