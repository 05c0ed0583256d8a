use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{
        saturating_blue_ramp::MandelbrotSaturatingBlueRamp,
        wrapping_blue_ramp::MandelbrotWrappingBlueRamp,
    },
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    contrast: u8,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::WrappingBlueRamp => {
            Box::new(MandelbrotWrappingBlueRamp::new(contrast))
        }
        MandelbrotColourMapKinds::SaturatingBlueRamp => {
            Box::new(MandelbrotSaturatingBlueRamp::new(contrast))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::maps::DEFAULT_CONTRAST;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, DEFAULT_CONTRAST);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, DEFAULT_CONTRAST);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn mode_names_parse_back_to_kind() {
        for &kind in MandelbrotColourMapKinds::ALL {
            assert_eq!(MandelbrotColourMapKinds::from_mode_name(kind.mode_name()), Some(kind));
        }
        assert_eq!(
            MandelbrotColourMapKinds::from_mode_name(" Saturating "),
            Some(MandelbrotColourMapKinds::SaturatingBlueRamp)
        );
        assert_eq!(MandelbrotColourMapKinds::from_mode_name("clamped"), None);
    }
}
