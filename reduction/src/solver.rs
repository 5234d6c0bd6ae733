//! Intersection of two circles of equal altitude.
//!
//! Real sights rarely intersect exactly, so when the circles miss each other
//! the middle of the gap between them is taken as the best approximation.

use std::fmt;

use log::{debug, trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::PixelPoint;

/// The circle on the chart
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    /// The center of the circle
    pub center: PixelPoint,
    /// The radius of the circle (pixels)
    pub radius: f64,
}

impl Circle {
    /// Construct the circle
    pub const fn new(center: PixelPoint, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// The outcome of solving a pair of circles
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Solution {
    /// The circles are apart, the middle of the shortest segment connecting them
    Separated(PixelPoint),
    /// One circle lies inside the other, the middle of the gap between the boundaries
    Nested(PixelPoint),
    /// The circles cross at two points (identical ones when touching from inside)
    Intersecting(PixelPoint, PixelPoint),
    /// The centers coincide: the circles are concentric and there is no direction
    /// to look for the closest approach
    Coincident,
}

impl Solution {
    /// The points found
    pub fn candidates(&self) -> Vec<PixelPoint> {
        match *self {
            Self::Separated(p) | Self::Nested(p) => vec![p],
            Self::Intersecting(p, q) => vec![p, q],
            Self::Coincident => Vec::new(),
        }
    }

    /// Is the solution an approximation instead of the exact intersection?
    pub fn is_approximate(&self) -> bool {
        matches!(self, Self::Separated(_) | Self::Nested(_))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separated(p) => write!(f, "separated circles, closest approach at {p}"),
            Self::Nested(p) => write!(f, "nested circles, closest approach at {p}"),
            Self::Intersecting(p, q) => write!(f, "intersection at {p} and {q}"),
            Self::Coincident => write!(f, "concentric circles"),
        }
    }
}

/// Find the intersection points of the two circles or the best approximation of them.
///
/// Malformed (NaN) circles produce NaN points.
pub fn solve(c1: &Circle, c2: &Circle) -> Solution {
    let (r1, r2) = (c1.radius, c2.radius);
    let d = c1.center.distance(c2.center);
    if d == 0.0 {
        warn!("Sight circles share the center {}, no fix", c1.center);
        return Solution::Coincident;
    }

    let gap = d - r1 - r2;
    let solution = if gap >= 0.0 {
        trace!("Circles are {gap:.3} px apart");
        Solution::Separated(c1.center.towards(c2.center, r1 + gap / 2.0))
    } else if d + r1.min(r2) < r1.max(r2) {
        trace!("Circles are nested");
        // measure from the center of the bigger circle through the center of the smaller one
        let (outer, inner) = if r1 < r2 { (c2, c1) } else { (c1, c2) };
        let (r_outer, r_inner) = (outer.radius, inner.radius);
        let f = d + r_inner + (r_outer - (d + r_inner)) / 2.0;
        Solution::Nested(outer.center.towards(inner.center, f))
    } else {
        let [p, q] = intersections(c1, c2);
        Solution::Intersecting(p, q)
    };

    debug!("Solved the pair of sight circles: {solution}");
    solution
}

/// Two intersection points of the crossing circles.
///
/// The points are symmetric about the line connecting the centers.
/// For the circles that do not cross the result is NaN.
pub fn intersections(c1: &Circle, c2: &Circle) -> [PixelPoint; 2] {
    let (r1, r2) = (c1.radius, c2.radius);
    let PixelPoint { x: x1, y: y1 } = c1.center;
    let PixelPoint { x: x2, y: y2 } = c2.center;
    let d = c1.center.distance(c2.center);

    // distance from the first center to the chord
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    // half of the chord
    let h = (r1 * r1 - a * a).sqrt();

    let nx = (x2 - x1) / d;
    let ny = (y2 - y1) / d;
    let mx = x1 + nx * a;
    let my = y1 + ny * a;

    [
        PixelPoint::new(mx - ny * h, my + nx * h),
        PixelPoint::new(mx + ny * h, my - nx * h),
    ]
}
