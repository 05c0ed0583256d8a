/// A pixel coordinate, `(0, 0)` being the first pixel of the first row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
