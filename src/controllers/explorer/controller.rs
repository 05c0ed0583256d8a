use std::time::Instant;

use log::debug;

use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::explorer::ExplorerError;
use crate::core::actions::render_fractal::fractal_renderer::FractalRenderer;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::{NavigationCommand, NavigationReport, NavigationState};

/// Application context for one explorer session.
///
/// The navigation state has a single writer (`navigate`) and the renderer
/// reads it only after the transition has completed, so every frame reflects
/// a whole viewport.
#[derive(Debug)]
pub struct ExplorerController {
    navigation: NavigationState,
    renderer: FractalRenderer,
    generation: u64,
}

impl ExplorerController {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ExplorerError> {
        Ok(Self::from_parts(
            config.build_navigation()?,
            config.build_renderer()?,
        ))
    }

    #[must_use]
    pub fn from_parts(navigation: NavigationState, renderer: FractalRenderer) -> Self {
        Self {
            navigation,
            renderer,
            generation: 0,
        }
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn renderer(&self) -> &FractalRenderer {
        &self.renderer
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.navigation.viewport()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Renders the current viewport without moving it.
    pub fn start(&mut self) -> Result<FrameData, ExplorerError> {
        self.render_frame(NavigationReport::default())
    }

    /// Applies `command`, then renders the resulting viewport.
    ///
    /// A frame is produced even when the view did not change.
    pub fn navigate(&mut self, command: NavigationCommand) -> Result<FrameData, ExplorerError> {
        let report = self.navigation.apply(command);
        debug!("Navigation {} -> {:?}", command, report);

        self.render_frame(report)
    }

    fn render_frame(&mut self, navigation: NavigationReport) -> Result<FrameData, ExplorerError> {
        let viewport = self.navigation.viewport();
        let start = Instant::now();
        let image = self.renderer.render(&viewport)?;
        let render_duration = start.elapsed();

        self.generation += 1;

        Ok(FrameData {
            generation: self.generation,
            viewport,
            colour_buffer: image.colour_buffer,
            bounded_pixels: image.bounded_pixels,
            render_duration,
            navigation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::raster_size::RasterSize;
    use crate::core::navigation::NavigationWarning;

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            raster: RasterSize::new(16, 12).unwrap(),
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn start_renders_default_viewport() {
        let mut controller = ExplorerController::new(&small_config()).unwrap();

        let frame = controller.start().unwrap();

        assert_eq!(frame.generation, 1);
        assert_eq!(frame.viewport, Viewport::from_centre(Complex::ZERO, 2.0).unwrap());
        assert_eq!(frame.colour_buffer.raster(), RasterSize::new(16, 12).unwrap());
        assert_eq!(frame.navigation, NavigationReport::default());
    }

    #[test]
    fn navigate_moves_then_renders() {
        let mut controller = ExplorerController::new(&small_config()).unwrap();
        controller.start().unwrap();

        let frame = controller.navigate(NavigationCommand::ZoomIn).unwrap();

        assert_eq!(frame.generation, 2);
        assert_eq!(frame.viewport, Viewport::from_centre(Complex::ZERO, 1.0).unwrap());
        assert_eq!(controller.viewport(), frame.viewport);
        assert!(frame.navigation.view_changed);
    }

    #[test]
    fn frame_matches_fresh_render_of_same_viewport() {
        let mut controller = ExplorerController::new(&small_config()).unwrap();
        controller.navigate(NavigationCommand::PanLeft).unwrap();

        let frame = controller.navigate(NavigationCommand::ZoomIn).unwrap();
        let expected = controller.renderer().render(&frame.viewport).unwrap();

        assert_eq!(frame.colour_buffer, expected.colour_buffer);
        assert_eq!(frame.bounded_pixels, expected.bounded_pixels);
    }

    #[test]
    fn unchanged_view_still_produces_a_frame() {
        let config = ExplorerConfig {
            limits: crate::core::navigation::NavigationLimits::with_min_deviation(2.0),
            ..small_config()
        };
        let mut controller = ExplorerController::new(&config).unwrap();

        let frame = controller.navigate(NavigationCommand::ZoomIn).unwrap();

        assert_eq!(frame.generation, 1);
        assert!(!frame.navigation.view_changed);
        assert_eq!(frame.navigation.warning, Some(NavigationWarning::DeviationClamped));
    }

    #[test]
    fn interior_pixel_is_black_after_navigation() {
        let config = ExplorerConfig {
            raster: RasterSize::new(4, 4).unwrap(),
            ..ExplorerConfig::default()
        };
        let mut controller = ExplorerController::new(&config).unwrap();

        // centre (-1, 0), deviation 1: pixel (1, 2) maps to (-1.5, 0)
        controller.navigate(NavigationCommand::PanLeft).unwrap();
        let frame = controller.navigate(NavigationCommand::ZoomIn).unwrap();

        assert_eq!(frame.viewport.centre(), Complex::new(-1.0, 0.0));
        assert_eq!(
            frame.colour_buffer.pixel(Point { x: 1, y: 2 }).unwrap(),
            Colour::BLACK
        );
    }
}
