use winit::window::Window;

use crate::core::data::raster_size::RasterSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, raster: RasterSize) -> Result<T, pixels::Error>;
}
