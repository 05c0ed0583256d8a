use crate::core::actions::generate_colour_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::escape_time::Classification;

pub trait MandelbrotColourMap: ColourMap<Classification> + std::fmt::Debug + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}
