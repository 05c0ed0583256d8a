use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn raster_to_buffer_size(raster: RasterSize) -> Option<usize> {
    raster.pixel_count()?.checked_mul(BYTES_PER_PIXEL)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColourBufferError {
    PixelOutsideBounds {
        pixel: Point,
        raster: RasterSize,
    },
    BoundsMismatch {
        raster_size: usize,
        buffer_size: usize,
    },
    AllocationFailed {
        raster: RasterSize,
    },
}

impl fmt::Display for ColourBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                raster_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match buffer size {}",
                    raster_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, raster } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} raster",
                    pixel.x,
                    pixel.y,
                    raster.width(),
                    raster.height()
                )
            }
            Self::AllocationFailed { raster } => {
                write!(
                    f,
                    "unable to allocate colour buffer for {}x{} raster",
                    raster.width(),
                    raster.height()
                )
            }
        }
    }
}

impl Error for ColourBufferError {}

pub type ColourBufferData = Vec<u8>;

/// Row-major packed RGBA8 pixels covering a whole raster.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourBuffer {
    raster: RasterSize,
    buffer: ColourBufferData,
}

impl ColourBuffer {
    /// Allocates an all-zero buffer, reporting allocation failure instead of
    /// aborting.
    pub fn new(raster: RasterSize) -> Result<Self, ColourBufferError> {
        let total_bytes =
            raster_to_buffer_size(raster).ok_or(ColourBufferError::AllocationFailed { raster })?;
        let mut buffer = Self::allocate(raster)?;
        buffer.resize(total_bytes, 0);

        Ok(Self { raster, buffer })
    }

    /// Empty vector with exactly enough capacity for `raster`.
    pub fn allocate(raster: RasterSize) -> Result<ColourBufferData, ColourBufferError> {
        let total_bytes =
            raster_to_buffer_size(raster).ok_or(ColourBufferError::AllocationFailed { raster })?;
        let mut buffer = ColourBufferData::new();

        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|_| ColourBufferError::AllocationFailed { raster })?;

        Ok(buffer)
    }

    pub fn from_data(
        raster: RasterSize,
        buffer: ColourBufferData,
    ) -> Result<Self, ColourBufferError> {
        let raster_size = raster_to_buffer_size(raster).unwrap_or(usize::MAX);

        if raster_size != buffer.len() {
            return Err(ColourBufferError::BoundsMismatch {
                raster_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { raster, buffer })
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn buffer(&self) -> &ColourBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, ColourBufferError> {
        let index = self.byte_index(pixel)?;
        let rgba = &self.buffer[index..index + BYTES_PER_PIXEL];

        Ok(Colour {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        })
    }

    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer.chunks_exact(BYTES_PER_PIXEL).map(|rgba| Colour {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        })
    }

    fn byte_index(&self, pixel: Point) -> Result<usize, ColourBufferError> {
        if !self.raster.contains_point(pixel) {
            return Err(ColourBufferError::PixelOutsideBounds {
                pixel,
                raster: self.raster,
            });
        }

        Ok(self.raster.index_of(pixel) * BYTES_PER_PIXEL)
    }
}
