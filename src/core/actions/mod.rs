pub mod generate_colour_buffer;
pub mod generate_fractal;
pub mod render_fractal;
