//! The polar azimuthal chart.
//!
//! The center of the square canvas is the north pole, the distance from the center
//! grows linearly with the colatitude, so the equator is a circle of a quarter
//! canvas radius and the south pole is the circle touching the canvas edges.
//! The prime meridian points down (`+y`), the 90°E meridian points right (`+x`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{
        consts::{FULL_TURN_DEG, HALF_TURN_DEG, QUARTER_TURN_DEG},
        degrees_to_miles, miles_to_degrees, normalize_longitude, DegreeTrig,
    },
    coord::{GeoPoint, PixelPoint},
};

/// The side of the canvas used by default
pub const DEFAULT_SIZE: f64 = 600.0;

/// Mapping between the globe and the pixels of a square canvas
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Projection {
    size: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Projection {
    /// Projection onto the square canvas with the given side (pixels)
    pub const fn new(size: f64) -> Self {
        Self { size }
    }

    /// The side of the canvas
    pub const fn size(&self) -> f64 {
        self.size
    }

    /// The pixel of the north pole
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.size / 2.0, self.size / 2.0)
    }

    /// Project the point of the globe onto the canvas
    pub fn to_xy(&self, point: GeoPoint) -> PixelPoint {
        let half = self.size / 2.0;
        let dist = (QUARTER_TURN_DEG - point.lat()) / HALF_TURN_DEG * half;
        PixelPoint::new(
            half + dist * point.lon().sin_deg(),
            half + dist * point.lon().cos_deg(),
        )
    }

    /// Find the point of the globe projected to the given pixel.
    ///
    /// Exactly on the equator the result collapses to `(0, 0)`.
    /// On the pole the meridian is undefined, so the prime one is chosen.
    pub fn to_lat_lon(&self, pixel: PixelPoint) -> GeoPoint {
        let center = self.center();
        let dx = pixel.x - center.x;
        let dy = pixel.y - center.y;
        let len = dx.hypot(dy);
        let lat = QUARTER_TURN_DEG - len / self.size * FULL_TURN_DEG;
        if lat == 0.0 {
            return GeoPoint::default();
        }
        if len == 0.0 {
            return GeoPoint::north_pole();
        }

        let lon = (dy / len).acos_deg();
        let lon = if dx < 0.0 { -lon } else { lon };
        GeoPoint::new(lat, normalize_longitude(lon))
    }

    /// The length on the canvas of the great circle arc given in degrees
    pub fn degrees_to_pixels(&self, degrees: f64) -> f64 {
        degrees / FULL_TURN_DEG * self.size
    }

    /// The arc (in degrees) of the given length on the canvas
    pub fn pixels_to_degrees(&self, pixels: f64) -> f64 {
        pixels / self.size * FULL_TURN_DEG
    }

    /// The distance on the Earth (statute miles) of the given length on the canvas
    pub fn pixels_to_miles(&self, pixels: f64) -> f64 {
        degrees_to_miles(self.pixels_to_degrees(pixels))
    }

    /// The length on the canvas of the distance on the Earth (statute miles)
    pub fn miles_to_pixels(&self, miles: f64) -> f64 {
        self.degrees_to_pixels(miles_to_degrees(miles))
    }
}
