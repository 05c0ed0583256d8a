pub mod command;
pub mod limits;
pub mod state;
pub mod status;

pub use command::NavigationCommand;
pub use limits::NavigationLimits;
pub use state::NavigationState;
pub use status::{NavigationReport, NavigationWarning};
