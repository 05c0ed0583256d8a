use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::{Classification, evaluate};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    raster: RasterSize,
    viewport: Viewport,
    params: MandelbrotParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Classification;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z = pixel_to_complex_coords(pixel, self.raster, self.viewport)?;

        Ok(evaluate(
            z,
            self.params.max_iterations(),
            self.params.escape_radius(),
        ))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(raster: RasterSize, viewport: Viewport, params: MandelbrotParams) -> Self {
        Self {
            raster,
            viewport,
            params,
        }
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
