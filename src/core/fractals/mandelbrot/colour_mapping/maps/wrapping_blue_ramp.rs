use crate::core::actions::generate_colour_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::BLUE_RAMP_BASE;
use crate::core::fractals::mandelbrot::escape_time::Classification;

/// Blue ramp computed in 8-bit modular arithmetic.
///
/// Reproduces the cyclic banding of the original explorer: once
/// `base - contrast * n` drops below zero the channel wraps back to bright blue.
#[derive(Debug)]
pub struct MandelbrotWrappingBlueRamp {
    contrast: u8,
}

impl ColourMap<Classification> for MandelbrotWrappingBlueRamp {
    fn map(&self, value: Classification) -> Colour {
        match value {
            Classification::Bounded => Colour::BLACK,
            Classification::EscapedAt(n) => {
                // only n mod 256 matters in 8-bit arithmetic
                let steps = self.contrast.wrapping_mul(n as u8);
                Colour::opaque(0, 0, BLUE_RAMP_BASE.wrapping_sub(steps))
            }
        }
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::WrappingBlueRamp.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotWrappingBlueRamp {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::WrappingBlueRamp
    }
}

impl MandelbrotWrappingBlueRamp {
    #[must_use]
    pub fn new(contrast: u8) -> Self {
        Self { contrast }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::maps::DEFAULT_CONTRAST;

    fn mapper() -> MandelbrotWrappingBlueRamp {
        MandelbrotWrappingBlueRamp::new(DEFAULT_CONTRAST)
    }

    #[test]
    fn test_bounded_is_opaque_black() {
        assert_eq!(mapper().map(Classification::Bounded).to_rgba(), [0, 0, 0, 255]);
        assert_eq!(mapper().map(Classification::Bounded), mapper().map(Classification::Bounded));
    }

    #[test]
    fn test_first_iterations_follow_linear_ramp() {
        assert_eq!(mapper().map(Classification::EscapedAt(0)).to_rgba(), [0, 0, 155, 255]);
        assert_eq!(mapper().map(Classification::EscapedAt(1)).to_rgba(), [0, 0, 130, 255]);
        assert_eq!(mapper().map(Classification::EscapedAt(6)).to_rgba(), [0, 0, 5, 255]);
    }

    #[test]
    fn test_channel_wraps_below_zero() {
        // 155 - 175 = -20, which is 236 mod 256
        assert_eq!(mapper().map(Classification::EscapedAt(7)).b, 236);
        assert_eq!(mapper().map(Classification::EscapedAt(8)).b, 211);
    }

    #[test]
    fn test_ramp_is_cyclic() {
        // 25 * 256 is a multiple of 256, so the ramp repeats every 256 iterations
        for n in [0, 3, 11, 42] {
            assert_eq!(
                mapper().map(Classification::EscapedAt(n)),
                mapper().map(Classification::EscapedAt(n + 256))
            );
        }
    }
}
