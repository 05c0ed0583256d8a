//! Presenter adapters that receive completed frames from the explorer.

pub mod console;
#[cfg(feature = "gui")]
pub mod pixels;
