pub(crate) const FULL_TURN_DEG: f64 = 360.0;
pub(crate) const HALF_TURN_DEG: f64 = 180.0;
pub(crate) const QUARTER_TURN_DEG: f64 = 90.0;

pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = 3600.0;

/// Right ascension is measured in hours, a full turn is 24 hours
pub(crate) const DEGREES_IN_HOUR: f64 = 15.0;

pub(crate) const DEGREE_SIGN: char = '°';

pub(crate) const METERS_IN_STATUTE_MILE: f64 = 1609.34;
pub(crate) const METERS_IN_NAUTICAL_MILE: f64 = 1852.0;
