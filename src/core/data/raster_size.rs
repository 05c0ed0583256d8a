use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 940;
pub const DEFAULT_HEIGHT: u32 = 720;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RasterSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for RasterSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "raster size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for RasterSizeError {}

/// Fixed pixel dimensions of the output raster.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterSize {
    width: u32,
    height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterSizeError> {
        if width == 0 || height == 0 {
            return Err(RasterSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Number of pixels, or `None` if it does not fit in a `usize`.
    #[must_use]
    pub fn pixel_count(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)
    }

    /// Row-major index of `point`. The caller checks bounds first.
    #[must_use]
    pub(crate) fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }
}

impl Default for RasterSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
