use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The point on the chart canvas, in pixels
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelPoint {
    /// Horizontal coordinate, grows to the right
    pub x: f64,
    /// Vertical coordinate, grows downwards
    pub y: f64,
}

impl PixelPoint {
    /// Construct a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between the points
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.hypot(dy)
    }

    /// The point on the way from `self` to `target` at the given distance from `self`.
    ///
    /// The distance can exceed the length of the segment.
    /// When the points coincide, the direction is undefined and the result is NaN.
    pub fn towards(self, target: Self, distance: f64) -> Self {
        let d = self.distance(target);
        let nx = (target.x - self.x) / d;
        let ny = (target.y - self.y) / d;
        Self::new(self.x + nx * distance, self.y + ny * distance)
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for PixelPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.x, self.y)
    }
}
