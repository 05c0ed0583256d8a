use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::render_strategy::RenderStrategy;
use crate::core::actions::render_fractal::fractal_renderer::FractalRenderer;
use crate::core::data::complex::Complex;
use crate::core::data::raster_size::{RasterSize, RasterSizeError};
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::maps::DEFAULT_CONTRAST;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_time::{DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::navigation::limits::{DEFAULT_DEVIATION, DEFAULT_STEP};
use crate::core::navigation::state::NavigationError;
use crate::core::navigation::{NavigationLimits, NavigationState};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    RasterSize(RasterSizeError),
    Mandelbrot(MandelbrotError),
    Navigation(NavigationError),
    InvalidArgument { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RasterSize(err) => write!(f, "{}", err),
            Self::Mandelbrot(err) => write!(f, "{}", err),
            Self::Navigation(err) => write!(f, "{}", err),
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid value '{}' for '{}'", value, name)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RasterSize(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::Navigation(err) => Some(err),
            Self::InvalidArgument { .. } => None,
        }
    }
}

impl From<RasterSizeError> for ConfigError {
    fn from(err: RasterSizeError) -> Self {
        Self::RasterSize(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

impl From<NavigationError> for ConfigError {
    fn from(err: NavigationError) -> Self {
        Self::Navigation(err)
    }
}

/// Everything needed to build an explorer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub raster: RasterSize,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub contrast: u8,
    pub centre: Complex,
    pub deviation: f64,
    pub step: f64,
    pub limits: NavigationLimits,
    pub strategy: RenderStrategy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            raster: RasterSize::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            contrast: DEFAULT_CONTRAST,
            centre: Complex::ZERO,
            deviation: DEFAULT_DEVIATION,
            step: DEFAULT_STEP,
            limits: NavigationLimits::default(),
            strategy: RenderStrategy::default(),
        }
    }
}

impl ExplorerConfig {
    /// Checks every setting without rendering anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        MandelbrotParams::new(self.max_iterations, self.escape_radius)?;
        self.build_navigation()?;
        Ok(())
    }

    pub(crate) fn build_renderer(&self) -> Result<FractalRenderer, ConfigError> {
        let params = MandelbrotParams::new(self.max_iterations, self.escape_radius)?;
        let colour_map = mandelbrot_colour_map_factory(self.colour_map_kind, self.contrast);

        Ok(FractalRenderer::new(
            self.raster,
            params,
            colour_map,
            self.strategy,
        ))
    }

    pub(crate) fn build_navigation(&self) -> Result<NavigationState, ConfigError> {
        Ok(NavigationState::new(
            self.centre,
            self.deviation,
            self.step,
            self.limits,
        )?)
    }
}
