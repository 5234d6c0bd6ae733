//! Angles in decimal degrees: parsing, trigonometry and conversions to distances

pub(crate) mod consts;
mod dms;
mod errors;
mod trig;
mod units;

pub use self::{
    dms::{parse_angle, Sexagesimal},
    errors::{AngleNotInRange, ParseAngleError},
    trig::DegreeTrig,
    units::{degrees_to_miles, miles_to_degrees},
};

use self::consts::{FULL_TURN_DEG, HALF_TURN_DEG};

/// Reduce the angle into the range `[0..360)`
pub fn normalize_turn(degrees: f64) -> f64 {
    ((degrees % FULL_TURN_DEG) + FULL_TURN_DEG) % FULL_TURN_DEG
}

/// Reduce the longitude into the range `(-180..180]`.
///
/// The anti-meridian is always represented as `180`.
pub fn normalize_longitude(degrees: f64) -> f64 {
    let lon = ((degrees % FULL_TURN_DEG) + HALF_TURN_DEG + FULL_TURN_DEG) % FULL_TURN_DEG
        - HALF_TURN_DEG;
    if lon == -HALF_TURN_DEG {
        HALF_TURN_DEG
    } else {
        lon
    }
}
