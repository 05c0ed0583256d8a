//! GUI input adapter for interactive navigation.
//!
//! A non-resizable winit window shows each frame through a pixels
//! framebuffer, with an egui overlay reporting where the view is.

pub mod app;
pub mod commands;
pub mod keys;

pub use commands::run_gui::{GuiError, RunGuiCommand};
