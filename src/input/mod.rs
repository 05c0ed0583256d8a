//! Input adapters for the explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into explorer inputs.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod script;
