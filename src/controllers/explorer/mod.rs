//! Synchronous explorer controller.
//!
//! Owns the navigation state and the renderer, and turns each input from a
//! display backend into a freshly rendered frame.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: `InputSourcePort` yields `BackendInput`s (commands or quit)
//! - **Output**: `FramePresenterPort` receives each completed `FrameData`
//! - **Core**: navigation and rendering come from `core/`

mod controller;
pub mod data;
pub mod errors;
pub mod ports;
mod run;

pub use controller::ExplorerController;
pub use run::{InputOutcome, handle_input, present_frame, run_explorer, start_session};
