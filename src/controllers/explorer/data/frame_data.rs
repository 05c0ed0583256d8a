use std::time::Duration;

use crate::core::data::colour_buffer::ColourBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::NavigationReport;

/// One completed render cycle, handed to a presenter by value.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub viewport: Viewport,
    pub colour_buffer: ColourBuffer,
    /// Pixels classified as bounded, independent of how they were coloured.
    pub bounded_pixels: usize,
    pub render_duration: Duration,
    /// Outcome of the navigation step that produced this frame.
    pub navigation: NavigationReport,
}
