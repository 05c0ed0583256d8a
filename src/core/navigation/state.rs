use std::error::Error;
use std::fmt;

use log::{debug, warn};

use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::navigation::command::NavigationCommand;
use crate::core::navigation::limits::{DEFAULT_DEVIATION, DEFAULT_STEP, NavigationLimits};
use crate::core::navigation::status::{NavigationReport, NavigationWarning};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationError {
    InvalidStep { step: f64 },
    InvalidLimits { limits: NavigationLimits },
    DeviationOutOfRange { deviation: f64, limits: NavigationLimits },
    Viewport(ViewportError),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { step } => {
                write!(f, "navigation step must lie strictly between 0 and 1: {}", step)
            }
            Self::InvalidLimits { limits } => {
                write!(
                    f,
                    "invalid deviation limits: [{}, {}]",
                    limits.min_deviation, limits.max_deviation
                )
            }
            Self::DeviationOutOfRange { deviation, limits } => {
                write!(
                    f,
                    "initial deviation {} outside limits [{}, {}]",
                    deviation, limits.min_deviation, limits.max_deviation
                )
            }
            Self::Viewport(err) => write!(f, "invalid initial viewport: {}", err),
        }
    }
}

impl Error for NavigationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for NavigationError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Current centre and half-width of the view, plus the rules for moving it.
///
/// Pans move the centre by `step * deviation`; zooming scales the deviation
/// by `step`. The derived [`Viewport`] is always valid: a transition that would
/// break it is dropped and reported instead.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    centre: Complex,
    deviation: f64,
    step: f64,
    limits: NavigationLimits,
    initial_centre: Complex,
    initial_deviation: f64,
    viewport: Viewport,
}

impl NavigationState {
    pub fn new(
        centre: Complex,
        deviation: f64,
        step: f64,
        limits: NavigationLimits,
    ) -> Result<Self, NavigationError> {
        if !step.is_finite() || step <= 0.0 || step >= 1.0 {
            return Err(NavigationError::InvalidStep { step });
        }

        if !limits.is_valid() {
            return Err(NavigationError::InvalidLimits { limits });
        }

        if !(limits.min_deviation..=limits.max_deviation).contains(&deviation) {
            return Err(NavigationError::DeviationOutOfRange { deviation, limits });
        }

        let viewport = Viewport::from_centre(centre, deviation)?;

        Ok(Self {
            centre,
            deviation,
            step,
            limits,
            initial_centre: centre,
            initial_deviation: deviation,
            viewport,
        })
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        self.centre
    }

    #[must_use]
    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn limits(&self) -> NavigationLimits {
        self.limits
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Applies one command. Never fails; problems come back as warnings.
    pub fn apply(&mut self, command: NavigationCommand) -> NavigationReport {
        let mut centre = self.centre;
        let mut deviation = self.deviation;
        let offset = self.step * self.deviation;

        match command {
            NavigationCommand::PanUp => centre.imag -= offset,
            NavigationCommand::PanDown => centre.imag += offset,
            NavigationCommand::PanLeft => centre.real -= offset,
            NavigationCommand::PanRight => centre.real += offset,
            NavigationCommand::ZoomIn => deviation *= self.step,
            NavigationCommand::ZoomOut => deviation /= self.step,
            NavigationCommand::Reset => {
                centre = self.initial_centre;
                deviation = self.initial_deviation;
            }
        }

        let (deviation, clamped) = self.limits.clamp_deviation(deviation);

        let viewport = match Viewport::from_centre(centre, deviation) {
            Ok(viewport) => viewport,
            Err(err) => {
                warn!("Ignoring {}: {}", command, err);
                return NavigationReport {
                    view_changed: false,
                    warning: Some(NavigationWarning::PrecisionExhausted),
                };
            }
        };

        let view_changed = viewport != self.viewport;
        self.centre = centre;
        self.deviation = deviation;
        self.viewport = viewport;

        debug!(
            "{}: centre ({}, {}) deviation {}",
            command, centre.real, centre.imag, deviation
        );

        NavigationReport {
            view_changed,
            warning: clamped.then_some(NavigationWarning::DeviationClamped),
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        let viewport = Viewport::from_centre(Complex::ZERO, DEFAULT_DEVIATION)
            .expect("default viewport is valid");

        Self {
            centre: Complex::ZERO,
            deviation: DEFAULT_DEVIATION,
            step: DEFAULT_STEP,
            limits: NavigationLimits::default(),
            initial_centre: Complex::ZERO,
            initial_deviation: DEFAULT_DEVIATION,
            viewport,
        }
    }
}
