use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are evaluated independently and concatenated, so the result is in the
/// same row-major order as [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
/// The whole buffer is returned at once; no partial result is observable.
pub fn generate_fractal_parallel_rayon<Alg>(
    raster: RasterSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let row_width = raster.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..raster.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..raster.width() {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    // Flatten rows into row-major order
    rows.map(|r| r.into_iter().flatten().collect())
}
