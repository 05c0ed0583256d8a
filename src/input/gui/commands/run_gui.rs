use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::PhysicalSize,
    error::{EventLoopError, OsError},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::explorer::ExplorerController;
use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::controllers::explorer::errors::explorer::ExplorerError;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Explorer(ExplorerError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "surface error: {}", err),
            Self::Explorer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Explorer(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<ExplorerError> for GuiError {
    fn from(err: ExplorerError) -> Self {
        Self::Explorer(err)
    }
}

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Renders the initial frame, then opens the window and blocks until it
    /// is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let mut controller = ExplorerController::new(&self.config)?;
        let raster = self.config.raster;
        let initial_frame = controller.start()?;

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Navigator")
                .with_inner_size(PhysicalSize::new(raster.width(), raster.height()))
                .with_resizable(false)
                .with_visible(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, raster)?;
        info!("Opened {}x{} window", raster.width(), raster.height());

        let app = GuiApp::new(window, &event_loop, presenter, controller);
        app.run(event_loop, initial_frame)
    }
}
