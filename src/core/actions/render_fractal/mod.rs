pub mod fractal_renderer;
