use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::{debug, info};

use crate::core::actions::generate_colour_buffer::generate_colour_buffer::generate_colour_buffer;
use crate::core::actions::generate_fractal::render_strategy::RenderStrategy;
use crate::core::data::colour_buffer::{ColourBuffer, ColourBufferError};
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Mapping(PixelToComplexCoordsError),
    ColourBuffer(ColourBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(err) => write!(f, "pixel mapping error: {}", err),
            Self::ColourBuffer(err) => write!(f, "colour buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mapping(err) => Some(err),
            Self::ColourBuffer(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Mapping(err)
    }
}

impl From<ColourBufferError> for RenderError {
    fn from(err: ColourBufferError) -> Self {
        Self::ColourBuffer(err)
    }
}

/// A finished render: the colours plus how many pixels never escaped.
///
/// `bounded_pixels` is counted from the classifications, since escaped
/// pixels can share the interior colour.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub colour_buffer: ColourBuffer,
    pub bounded_pixels: usize,
}

/// Turns a viewport into a complete colour buffer for a fixed raster.
#[derive(Debug)]
pub struct FractalRenderer {
    raster: RasterSize,
    params: MandelbrotParams,
    colour_map: Box<dyn MandelbrotColourMap>,
    strategy: RenderStrategy,
}

impl FractalRenderer {
    #[must_use]
    pub fn new(
        raster: RasterSize,
        params: MandelbrotParams,
        colour_map: Box<dyn MandelbrotColourMap>,
        strategy: RenderStrategy,
    ) -> Self {
        Self {
            raster,
            params,
            colour_map,
            strategy,
        }
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn params(&self) -> MandelbrotParams {
        self.params
    }

    #[must_use]
    pub fn colour_map(&self) -> &dyn MandelbrotColourMap {
        self.colour_map.as_ref()
    }

    #[must_use]
    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn render(&self, viewport: &Viewport) -> Result<RenderedImage, RenderError> {
        info!("Rendering {}", viewport);

        let start = Instant::now();
        let algorithm = MandelbrotAlgorithm::new(self.raster, *viewport, self.params);
        let classifications = self.strategy.generate(self.raster, &algorithm)?;
        let bounded_pixels = classifications.iter().filter(|c| c.is_bounded()).count();
        let colour_buffer =
            generate_colour_buffer(classifications, self.colour_map.as_ref(), self.raster)?;

        debug!(
            "Rendered {}x{} ({:?}, {:?}), {} bounded",
            self.raster.width(),
            self.raster.height(),
            self.strategy,
            start.elapsed(),
            bounded_pixels
        );

        Ok(RenderedImage {
            colour_buffer,
            bounded_pixels,
        })
    }
}
