//! UTC timestamps and the rotation of the Earth relative to the stars.
//!
//! The rotation is modelled as strictly linear: the Greenwich Hour Angle
//! of the first point of Aries grows by a full turn every sidereal day
//! starting from a reference instant when it was zero.
//! Precession, nutation and polar motion are ignored.

use std::{error::Error, fmt};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{consts::FULL_TURN_DEG, normalize_turn};

/// The Earth's rotation period relative to the distant stars (~23h56m4s)
pub const SIDEREAL_DAY_MS: f64 = 86_164_090.538_208_01;

/// The instant (2022-07-01T05:22:59.900Z) when the GHA of Aries was zero
pub const NULL_ARIES_GHA_MS: i64 = 1_656_652_979_900;

const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// The timestamp is not in the `YYYY-MM-DD HH:MM:SS` form
pub struct ParseTimeError {
    failed: String,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot parse UTC timestamp from {:?}, expected YYYY-MM-DD HH:MM:SS",
            self.failed
        )
    }
}

impl Error for ParseTimeError {}

/// Parse the `YYYY-MM-DD HH:MM:SS` timestamp as UTC.
///
/// The `T` separator, fractional seconds and the trailing `Z` are accepted too.
///
/// # Errors
/// When the string matches none of the supported layouts.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, ParseTimeError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('Z').unwrap_or(trimmed);
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| ParseTimeError {
            failed: s.to_string(),
        })
}

/// Linear model of the Greenwich Hour Angle of Aries
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealModel {
    epoch_ms: i64,
    sidereal_day_ms: f64,
}

impl Default for SiderealModel {
    fn default() -> Self {
        Self::new(NULL_ARIES_GHA_MS, SIDEREAL_DAY_MS)
    }
}

impl SiderealModel {
    /// Construct the model from the instant of zero GHA (in Unix milliseconds)
    /// and the length of the rotation period
    pub fn new(epoch_ms: i64, sidereal_day_ms: f64) -> Self {
        Self {
            epoch_ms,
            sidereal_day_ms,
        }
    }

    /// The instant when the GHA of Aries is zero (Unix milliseconds)
    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// The length of the rotation period in milliseconds
    pub fn sidereal_day_ms(&self) -> f64 {
        self.sidereal_day_ms
    }

    /// GHA of Aries in degrees `[0..360)` at the Unix time given in milliseconds
    pub fn aries_gha_at_ms(&self, unix_ms: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let elapsed = unix_ms - self.epoch_ms as f64;
        normalize_turn(elapsed * (FULL_TURN_DEG / self.sidereal_day_ms))
    }

    /// GHA of Aries in degrees `[0..360)` at the given instant
    pub fn aries_gha(&self, at: DateTime<Utc>) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let unix_ms = at.timestamp_millis() as f64;
        self.aries_gha_at_ms(unix_ms)
    }
}

/// GHA of Aries in degrees `[0..360)` using the default model
pub fn aries_gha(at: DateTime<Utc>) -> f64 {
    SiderealModel::default().aries_gha(at)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::Duration;

    use super::*;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(NULL_ARIES_GHA_MS).unwrap()
    }

    #[test]
    fn parse_space_separated() {
        let t = parse_utc("2022-07-01 05:22:59").unwrap();
        assert_eq!(t.timestamp_millis(), NULL_ARIES_GHA_MS - 900);
    }

    #[test]
    fn parse_iso_with_fraction() {
        let t = parse_utc("2022-07-01T05:22:59.900Z").unwrap();
        assert_eq!(t, epoch());
    }

    #[test]
    fn parse_failure() {
        let err = parse_utc("July 1st").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot parse UTC timestamp from \"July 1st\", expected YYYY-MM-DD HH:MM:SS"
        );
        assert!(parse_utc("2022-13-01 00:00:00").is_err());
    }

    #[test]
    fn zero_at_epoch() {
        assert_eq!(aries_gha(epoch()), 0.0);
    }

    #[test]
    fn half_turn_at_half_day() {
        let model = SiderealModel::default();
        let ms = NULL_ARIES_GHA_MS as f64 + SIDEREAL_DAY_MS / 2.0;
        assert_abs_diff_eq!(model.aries_gha_at_ms(ms), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn before_epoch_wraps() {
        let gha = aries_gha(parse_utc("2022-07-01 05:22:59").unwrap());
        assert!(gha < 360.0);
        assert_abs_diff_eq!(gha, 360.0 - 900.0 * 360.0 / SIDEREAL_DAY_MS, epsilon = 1e-9);
    }

    #[test]
    fn periodic_with_sidereal_day() {
        let model = SiderealModel::default();
        let start = 1_700_000_000_123.0;
        for days in [-3.0, -1.0, 1.0, 2.0, 10.0] {
            let later = model.aries_gha_at_ms(start + days * SIDEREAL_DAY_MS);
            assert_abs_diff_eq!(later, model.aries_gha_at_ms(start), epsilon = 1e-6);
        }
    }

    #[test]
    fn always_in_range() {
        let mut t = epoch() - Duration::days(400);
        while t < epoch() + Duration::days(400) {
            let gha = aries_gha(t);
            assert!((0.0..360.0).contains(&gha), "{gha} at {t}");
            t = t + Duration::minutes(997);
        }
    }

    #[test]
    fn solar_day_advances_about_a_degree() {
        let t = parse_utc("2023-03-20 12:00:00").unwrap();
        let delta = normalize_turn(aries_gha(t + Duration::days(1)) - aries_gha(t));
        assert_abs_diff_eq!(delta, 0.9856, epsilon = 1e-3);
    }

    #[test]
    fn custom_model() {
        let model = SiderealModel::new(0, 1000.0);
        assert_eq!(model.aries_gha_at_ms(250.0), 90.0);
        assert_eq!(model.aries_gha_at_ms(-250.0), 270.0);
    }
}
