use crate::core::actions::generate_colour_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::BLUE_RAMP_BASE;
use crate::core::fractals::mandelbrot::escape_time::Classification;

/// Blue ramp clamped to `0..=255` instead of wrapping.
#[derive(Debug)]
pub struct MandelbrotSaturatingBlueRamp {
    contrast: u8,
}

impl ColourMap<Classification> for MandelbrotSaturatingBlueRamp {
    fn map(&self, value: Classification) -> Colour {
        match value {
            Classification::Bounded => Colour::BLACK,
            Classification::EscapedAt(n) => {
                let blue = i64::from(BLUE_RAMP_BASE) - i64::from(self.contrast) * i64::from(n);
                Colour::opaque(0, 0, blue.clamp(0, 255) as u8)
            }
        }
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::SaturatingBlueRamp.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotSaturatingBlueRamp {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::SaturatingBlueRamp
    }
}

impl MandelbrotSaturatingBlueRamp {
    #[must_use]
    pub fn new(contrast: u8) -> Self {
        Self { contrast }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::maps::DEFAULT_CONTRAST;

    fn mapper() -> MandelbrotSaturatingBlueRamp {
        MandelbrotSaturatingBlueRamp::new(DEFAULT_CONTRAST)
    }

    #[test]
    fn test_bounded_is_opaque_black() {
        assert_eq!(mapper().map(Classification::Bounded).to_rgba(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_matches_wrapping_ramp_before_underflow() {
        assert_eq!(mapper().map(Classification::EscapedAt(0)).to_rgba(), [0, 0, 155, 255]);
        assert_eq!(mapper().map(Classification::EscapedAt(1)).to_rgba(), [0, 0, 130, 255]);
        assert_eq!(mapper().map(Classification::EscapedAt(6)).b, 5);
    }

    #[test]
    fn test_channel_saturates_at_zero() {
        assert_eq!(mapper().map(Classification::EscapedAt(7)).b, 0);
        assert_eq!(mapper().map(Classification::EscapedAt(199)).b, 0);
        assert_eq!(mapper().map(Classification::EscapedAt(u32::MAX)).to_rgba(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_zero_contrast_is_flat() {
        let flat = MandelbrotSaturatingBlueRamp::new(0);

        assert_eq!(flat.map(Classification::EscapedAt(50)).b, 155);
    }
}
