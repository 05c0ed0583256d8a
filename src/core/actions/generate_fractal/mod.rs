pub mod generate_fractal_parallel_rayon;
pub mod generate_fractal_serial;
pub mod ports;
pub mod render_strategy;
