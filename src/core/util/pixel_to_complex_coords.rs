use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRaster { point: Point, raster: RasterSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRaster { point, raster } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} raster",
                    point.x,
                    point.y,
                    raster.width(),
                    raster.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Linearly maps a pixel onto the viewport.
///
/// Pixel `(0, 0)` lands exactly on the viewport minimum; the last pixel of a
/// row lands one pixel-step short of the maximum. Row 0 is the minimum
/// imaginary value.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    raster: RasterSize,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !raster.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRaster {
            point: pixel_position,
            raster,
        });
    }

    let real = f64::from(pixel_position.x) / f64::from(raster.width()) * viewport.width()
        + viewport.min().real;
    let imag = f64::from(pixel_position.y) / f64::from(raster.height()) * viewport.height()
        + viewport.min().imag;

    Ok(Complex { real, imag })
}
