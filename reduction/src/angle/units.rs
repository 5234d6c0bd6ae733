//! Conversions between the angular and the distance measures on the Earth's surface.
//!
//! A minute of arc of a great circle is one nautical mile,
//! while the distances are reported in statute miles.

use super::consts::{METERS_IN_NAUTICAL_MILE, METERS_IN_STATUTE_MILE, MINUTES_IN_DEGREE};

const METERS_IN_DEGREE: f64 = METERS_IN_NAUTICAL_MILE * MINUTES_IN_DEGREE;

/// The arc (in degrees) of a great circle having the given length in statute miles
pub fn miles_to_degrees(miles: f64) -> f64 {
    miles * (METERS_IN_STATUTE_MILE / METERS_IN_DEGREE)
}

/// The length (in statute miles) of a great circle arc
pub fn degrees_to_miles(degrees: f64) -> f64 {
    degrees * (METERS_IN_DEGREE / METERS_IN_STATUTE_MILE)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn nautical_mile_is_minute_of_arc() {
        let nautical_in_statute = METERS_IN_NAUTICAL_MILE / METERS_IN_STATUTE_MILE;
        assert_relative_eq!(miles_to_degrees(nautical_in_statute * 60.0), 1.0);
    }

    #[test]
    fn degree_is_about_69_miles() {
        assert_relative_eq!(degrees_to_miles(1.0), 69.047, epsilon = 1e-3);
    }

    #[test]
    fn inverse() {
        assert_relative_eq!(degrees_to_miles(miles_to_degrees(2071.5)), 2071.5);
    }
}
