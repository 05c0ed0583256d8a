/// A discrete user action that moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    Reset,
}

impl NavigationCommand {
    pub const ALL: &'static [Self] = &[
        Self::PanUp,
        Self::PanDown,
        Self::PanLeft,
        Self::PanRight,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::Reset,
    ];

    /// Token used in command scripts.
    #[must_use]
    pub const fn script_name(self) -> &'static str {
        match self {
            Self::PanUp => "up",
            Self::PanDown => "down",
            Self::PanLeft => "left",
            Self::PanRight => "right",
            Self::ZoomIn => "zoom",
            Self::ZoomOut => "zoom-out",
            Self::Reset => "reset",
        }
    }

    /// The command that undoes this one, if any.
    #[must_use]
    pub const fn inverse(self) -> Option<Self> {
        match self {
            Self::PanUp => Some(Self::PanDown),
            Self::PanDown => Some(Self::PanUp),
            Self::PanLeft => Some(Self::PanRight),
            Self::PanRight => Some(Self::PanLeft),
            Self::ZoomIn => Some(Self::ZoomOut),
            Self::ZoomOut => Some(Self::ZoomIn),
            Self::Reset => None,
        }
    }
}

impl std::fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).script_name())
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationCommand;

    #[test]
    fn inverse_is_an_involution() {
        for &command in NavigationCommand::ALL {
            if let Some(inverse) = command.inverse() {
                assert_eq!(inverse.inverse(), Some(command));
                assert_ne!(inverse, command);
            }
        }
    }

    #[test]
    fn script_names_are_unique() {
        for (i, a) in NavigationCommand::ALL.iter().enumerate() {
            for b in &NavigationCommand::ALL[i + 1..] {
                assert_ne!(a.script_name(), b.script_name());
            }
        }
    }
}
