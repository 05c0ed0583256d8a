/// How the blue channel behaves once `base - contrast * n` leaves `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotColourMapKinds {
    /// Modulo-256 arithmetic; the ramp repeats as a band every few iterations.
    WrappingBlueRamp,
    /// Clamped arithmetic; everything past the ramp is drawn black-blue.
    SaturatingBlueRamp,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::WrappingBlueRamp, Self::SaturatingBlueRamp];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WrappingBlueRamp => "Wrapping blue ramp",
            Self::SaturatingBlueRamp => "Saturating blue ramp",
        }
    }

    /// Short name accepted on the command line.
    #[must_use]
    pub const fn mode_name(self) -> &'static str {
        match self {
            Self::WrappingBlueRamp => "wrapping",
            Self::SaturatingBlueRamp => "saturating",
        }
    }

    #[must_use]
    pub fn from_mode_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.mode_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for MandelbrotColourMapKinds {
    fn default() -> Self {
        Self::WrappingBlueRamp
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
