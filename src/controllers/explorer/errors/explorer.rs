use std::error::Error;
use std::fmt;

use crate::controllers::explorer::data::explorer_config::ConfigError;
use crate::controllers::explorer::errors::render_unavailable::RenderUnavailable;
use crate::core::actions::render_fractal::fractal_renderer::RenderError;

#[derive(Debug)]
pub enum ExplorerError {
    Config(ConfigError),
    Render(RenderError),
    RenderUnavailable(RenderUnavailable),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::RenderUnavailable(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::RenderUnavailable(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ExplorerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RenderError> for ExplorerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<RenderUnavailable> for ExplorerError {
    fn from(err: RenderUnavailable) -> Self {
        Self::RenderUnavailable(err)
    }
}
