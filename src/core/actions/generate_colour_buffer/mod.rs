pub mod generate_colour_buffer;
pub mod ports;
