pub mod colour;
pub mod colour_buffer;
pub mod complex;
pub mod point;
pub mod raster_size;
pub mod viewport;
