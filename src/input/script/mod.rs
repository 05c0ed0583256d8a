//! Headless input: a fixed command script replayed in order.

pub mod parser;
pub mod scripted_input;
