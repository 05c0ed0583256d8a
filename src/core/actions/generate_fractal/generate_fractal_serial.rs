use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;

/// Evaluates every pixel on the calling thread, row by row.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    raster: RasterSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..raster.height())
        .flat_map(|y| (0..raster.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = (u32, u32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }
    }

    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    #[test]
    fn test_covers_every_pixel_in_row_major_order() {
        let raster = RasterSize::new(3, 2).unwrap();

        let results = generate_fractal_serial(raster, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_single_pixel_raster() {
        let raster = RasterSize::new(1, 1).unwrap();

        let results = generate_fractal_serial(raster, &StubSuccessAlgorithm {}).unwrap();

        assert_eq!(results, vec![(0, 0)]);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let raster = RasterSize::new(4, 4).unwrap();

        let result = generate_fractal_serial(raster, &StubFailureAlgorithm {});

        assert_eq!(result, Err(StubError {}));
    }
}
