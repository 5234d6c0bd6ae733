use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{consts::QUARTER_TURN_DEG, normalize_longitude};

use super::{
    with_direction,
    Pole::{self, North},
    RotationalDirection::{self, East},
};

/// The point on the surface of the globe, represented as the pair (latitude, longitude)
/// in decimal degrees
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Construct a point from the given latitude and longitude, as is
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point reducing the longitude into the range `(-180..180]`
    pub fn normalized(lat: f64, lon: f64) -> Self {
        Self::new(lat, normalize_longitude(lon))
    }

    /// Construct a north pole point (lat=90, lon=0 (by convention)).
    pub const fn north_pole() -> Self {
        // All longitude values reach singularity on a pole, so put it zero
        Self::new(QUARTER_TURN_DEG, 0.0)
    }

    /// Latitude in degrees, positive to the north
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees, positive to the east
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// The hemisphere of the point, `None` for the equator
    pub fn hemisphere(&self) -> Option<Pole> {
        with_direction(self.lat).1
    }

    /// The direction from the prime meridian, `None` for the prime meridian itself
    pub fn direction(&self) -> Option<RotationalDirection> {
        with_direction(self.lon).1
    }

    /// Are all the parts real numbers?
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPoint {
    /// The alternate form is the navigator's notation: `12.3456 N, 45.0000 W`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let (lat, pole) = with_direction(self.lat);
            let (lon, direction) = with_direction(self.lon);
            write!(
                f,
                "{:.4} {}, {:.4} {}",
                lat,
                pole.unwrap_or(North),
                lon,
                direction.unwrap_or(East)
            )
        } else {
            write!(f, "({:.6}°,{:.6}°)", self.lat, self.lon)
        }
    }
}
