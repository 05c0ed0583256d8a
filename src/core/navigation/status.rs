#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    /// The deviation hit a configured limit and was clamped.
    DeviationClamped,
    /// The next viewport could not be represented in `f64`; the view was kept.
    PrecisionExhausted,
}

impl std::fmt::Display for NavigationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeviationClamped => write!(f, "zoom limit reached"),
            Self::PrecisionExhausted => write!(f, "floating-point precision exhausted"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationReport {
    pub view_changed: bool,
    pub warning: Option<NavigationWarning>,
}
