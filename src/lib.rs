pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::explorer::data::explorer_config::{ConfigError, ExplorerConfig};
pub use controllers::explorer::data::run_summary::RunSummary;
pub use controllers::explorer::errors::explorer::ExplorerError;
pub use controllers::explorer::{ExplorerController, run_explorer};
pub use input::cli::args::{CliOptions, explorer_command, parse_options};
pub use input::cli::init_logging;
pub use input::script::scripted_input::ScriptedInput;
pub use presenters::console::presenter::ConsolePresenter;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
