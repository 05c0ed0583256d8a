pub mod saturating_blue_ramp;
pub mod wrapping_blue_ramp;

/// Blue intensity of a point that escapes on the first iteration.
pub const BLUE_RAMP_BASE: u8 = 155;
/// Blue intensity lost per additional iteration.
pub const DEFAULT_CONTRAST: u8 = 25;
