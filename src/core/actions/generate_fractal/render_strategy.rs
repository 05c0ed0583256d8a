use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::raster_size::RasterSize;

/// Selects how the raster is traversed. Both produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// One thread, row-major.
    Serial,
    /// Rows spread over the rayon thread pool.
    #[default]
    Parallel,
}

impl RenderStrategy {
    pub fn generate<Alg>(
        self,
        raster: RasterSize,
        algorithm: &Alg,
    ) -> Result<Vec<Alg::Success>, Alg::Failure>
    where
        Alg: FractalAlgorithm + Sync,
        Alg::Success: Send,
        Alg::Failure: Send,
    {
        match self {
            Self::Serial => generate_fractal_serial(raster, algorithm),
            Self::Parallel => generate_fractal_parallel_rayon(raster, algorithm),
        }
    }
}
