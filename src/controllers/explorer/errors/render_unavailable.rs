use std::error::Error;
use std::fmt;

/// A display backend could not accept or show a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderUnavailable {
    pub message: String,
}

impl RenderUnavailable {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RenderUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render unavailable: {}", self.message)
    }
}

impl Error for RenderUnavailable {}
