use log::info;

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::render_unavailable::RenderUnavailable;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;

/// Headless presenter: one log line per frame, nothing drawn.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    frames_presented: u64,
    last_generation: Option<u64>,
}

impl ConsolePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn last_generation(&self) -> Option<u64> {
        self.last_generation
    }
}

impl FramePresenterPort for ConsolePresenter {
    fn present(&mut self, frame: FrameData) -> Result<(), RenderUnavailable> {
        let share = bounded_share(&frame);

        match frame.navigation.warning {
            Some(warning) => info!(
                "Frame {}: {} | bounded {:.1}% | {:?} | {}",
                frame.generation,
                frame.viewport,
                share * 100.0,
                frame.render_duration,
                warning
            ),
            None => info!(
                "Frame {}: {} | bounded {:.1}% | {:?}",
                frame.generation,
                frame.viewport,
                share * 100.0,
                frame.render_duration
            ),
        }

        self.frames_presented += 1;
        self.last_generation = Some(frame.generation);

        Ok(())
    }
}

/// Fraction of pixels whose orbit never escaped.
fn bounded_share(frame: &FrameData) -> f64 {
    let raster = frame.colour_buffer.raster();
    let total = raster.width() as f64 * raster.height() as f64;

    frame.bounded_pixels as f64 / total
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::controllers::explorer::ExplorerController;
    use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::colour::Colour;
    use crate::core::data::colour_buffer::ColourBuffer;
    use crate::core::data::complex::Complex;
    use crate::core::data::raster_size::RasterSize;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
    use crate::core::fractals::mandelbrot::params::MandelbrotParams;
    use crate::core::navigation::NavigationReport;

    fn frame(generation: u64, raster: RasterSize, bounded_pixels: usize) -> FrameData {
        FrameData {
            generation,
            viewport: Viewport::from_centre(Complex::ZERO, 2.0).unwrap(),
            colour_buffer: ColourBuffer::new(raster).unwrap(),
            bounded_pixels,
            render_duration: Duration::from_millis(3),
            navigation: NavigationReport::default(),
        }
    }

    #[test]
    fn counts_presented_frames() {
        let mut presenter = ConsolePresenter::new();
        let raster = RasterSize::new(2, 2).unwrap();

        presenter.present(frame(1, raster, 0)).unwrap();
        presenter.present(frame(2, raster, 1)).unwrap();

        assert_eq!(presenter.frames_presented(), 2);
        assert_eq!(presenter.last_generation(), Some(2));
    }

    #[test]
    fn bounded_share_uses_pixel_count() {
        let raster = RasterSize::new(2, 2).unwrap();

        assert_eq!(bounded_share(&frame(1, raster, 1)), 0.25);
        assert_eq!(bounded_share(&frame(1, raster, 4)), 1.0);
    }

    #[test]
    fn bounded_share_in_saturating_mode_matches_classifications() {
        let raster = RasterSize::new(94, 72).unwrap();
        let config = ExplorerConfig {
            raster,
            colour_map_kind: MandelbrotColourMapKinds::SaturatingBlueRamp,
            ..ExplorerConfig::default()
        };
        let mut controller = ExplorerController::new(&config).unwrap();

        let frame = controller.start().unwrap();

        let algorithm = MandelbrotAlgorithm::new(raster, frame.viewport, MandelbrotParams::default());
        let bounded = generate_fractal_serial(raster, &algorithm)
            .unwrap()
            .iter()
            .filter(|c| c.is_bounded())
            .count();
        let black = frame
            .colour_buffer
            .pixels()
            .filter(|&colour| colour == Colour::BLACK)
            .count();
        let total = (94 * 72) as f64;

        assert_eq!(bounded_share(&frame), bounded as f64 / total);
        assert_ne!(bounded_share(&frame), black as f64 / total);
    }
}
