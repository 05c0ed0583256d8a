use std::time::Duration;

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::core::data::complex::Complex;
use crate::core::navigation::NavigationWarning;

/// What the overlay shows about the most recently presented frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayState {
    pub generation: u64,
    pub centre: Complex,
    pub deviation: f64,
    pub render_duration: Option<Duration>,
    pub warning: Option<NavigationWarning>,
}

impl OverlayState {
    pub fn record(&mut self, frame: &FrameData) {
        self.generation = frame.generation;
        self.centre = frame.viewport.centre();
        self.deviation = frame.viewport.width() / 2.0;
        self.render_duration = Some(frame.render_duration);
        self.warning = frame.navigation.warning;
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Centre: {:.6e} {:+.6e}i", self.centre.real, self.centre.imag),
            format!("Deviation: {:.3e}", self.deviation),
            format!("Generation: {}", self.generation),
        ];

        if let Some(render_duration) = self.render_duration {
            lines.push(format!("Last render: {} ms", render_duration.as_millis()));
        }

        lines
    }
}
