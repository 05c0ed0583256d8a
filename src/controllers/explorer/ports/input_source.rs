use crate::core::navigation::NavigationCommand;

/// Input already decoded by a display backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendInput {
    Command(NavigationCommand),
    Quit,
}

pub trait InputSourcePort {
    /// Next input, or `None` once the source is exhausted.
    fn next_input(&mut self) -> Option<BackendInput>;
}
