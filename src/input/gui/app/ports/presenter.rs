use egui::Context as EguiContext;

use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::input::gui::app::state::OverlayState;

/// A frame presenter that also owns the window surface.
pub trait GuiPresenterPort: FramePresenterPort {
    /// Draws the last presented frame with the egui output on top.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize_surface(&mut self, width: u32, height: u32);
    fn overlay(&self) -> &OverlayState;
}
