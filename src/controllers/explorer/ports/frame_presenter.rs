use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::render_unavailable::RenderUnavailable;

pub trait FramePresenterPort {
    /// Takes ownership of a completed frame for display.
    fn present(&mut self, frame: FrameData) -> Result<(), RenderUnavailable>;
}
