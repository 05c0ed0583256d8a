use std::error::Error;

use crate::core::data::point::Point;

/// Per-pixel computation driven by the generators.
///
/// `compute` must be pure: generators may call it for pixels in any order and
/// from several threads, and still expect row-major output to be identical.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
