//! Port definitions for the explorer controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and a display backend: where inputs come from and where frames go.

pub mod frame_presenter;
pub mod input_source;
