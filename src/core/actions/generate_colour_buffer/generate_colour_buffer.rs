use crate::core::actions::generate_colour_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour_buffer::{ColourBuffer, ColourBufferError};
use crate::core::data::raster_size::RasterSize;

/// Maps row-major per-pixel values to colours and packs them into a buffer.
///
/// Fails with [`ColourBufferError::BoundsMismatch`] if `input` does not cover
/// the raster exactly, or [`ColourBufferError::AllocationFailed`] if the
/// buffer cannot be allocated.
pub fn generate_colour_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    raster: RasterSize,
) -> Result<ColourBuffer, ColourBufferError>
where
    CMap: ColourMap<T> + ?Sized,
{
    let mut buffer = ColourBuffer::allocate(raster)?;

    for value in input {
        buffer.extend_from_slice(&mapper.map(value).to_rgba());
    }

    ColourBuffer::from_data(raster, buffer)
}
