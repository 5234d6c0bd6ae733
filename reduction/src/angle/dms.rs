//! Sexagesimal (Degree-Minute-Second) notation of the angles
//! written as three space separated numbers: `"-45 30 0"`.
//!
//! The sign of the whole angle is carried by the degrees part,
//! minutes and seconds are always non-negative.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::ToUnsigned;

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE},
    errors::{AngleNotInRange, ParseAngleError},
};

/// Best-effort parsing of the `"D M S"` notation.
///
/// Never fails: every malformed or missing part becomes NaN and poisons the result.
/// An empty part is treated as zero.
///
/// ```
/// use sight_reduction::parse_angle;
///
/// assert_eq!(parse_angle("-45 30 0"), -45.5);
/// assert!(parse_angle("45 thirty 0").is_nan());
/// ```
pub fn parse_angle(s: &str) -> f64 {
    let mut parts = s.split(' ');
    let degrees = lenient_number(parts.next());
    let minutes = lenient_number(parts.next());
    let seconds = lenient_number(parts.next());
    compose(degrees, minutes, seconds)
}

fn lenient_number(part: Option<&str>) -> f64 {
    match part.map(str::trim) {
        None => f64::NAN,
        Some("") => 0.0,
        Some(number) => script_number(number).unwrap_or(f64::NAN),
    }
}

/// The numeric literal of a scripting language: decimal with an optional exponent,
/// unsigned `0x`/`0o`/`0b` integers and the signed `Infinity`.
/// Spellings like `inf` or `nan` are not numbers here.
fn script_number(s: &str) -> Option<f64> {
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    if s.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        s.parse().ok()
    } else {
        None
    }
}

fn compose(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let (abs_degrees, positive) = degrees.unsigned_abs();
    let value = abs_degrees + minutes / MINUTES_IN_DEGREE + seconds / SECONDS_IN_DEGREE;
    if positive {
        value
    } else {
        -value
    }
}

/// Validated `"D M S"` angle
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sexagesimal {
    degrees: f64,
    minutes: f64,
    seconds: f64,
}

impl Sexagesimal {
    /// Construct the angle from its parts. The sign is taken from the `degrees`.
    ///
    /// # Errors
    /// Minutes and seconds should be in range `[0..60)`, every part should be finite.
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Result<Self, AngleNotInRange> {
        if !(degrees.is_finite() && minutes.is_finite() && seconds.is_finite()) {
            return Err(AngleNotInRange::NotFinite);
        }

        let valid = 0.0..MINUTES_IN_DEGREE;
        if !valid.contains(&minutes) {
            return Err(AngleNotInRange::ArcMinutes);
        }
        if !valid.contains(&seconds) {
            return Err(AngleNotInRange::ArcSeconds);
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// The degrees part (with the sign of the whole angle)
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// The arc minutes part
    pub fn minutes(self) -> f64 {
        self.minutes
    }

    /// The arc seconds part
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    /// Is the whole angle negative?
    pub fn is_negative(self) -> bool {
        self.degrees < 0.0
    }

    /// The value of the angle in decimal degrees
    pub fn to_decimal(self) -> f64 {
        compose(self.degrees, self.minutes, self.seconds)
    }
}

impl From<Sexagesimal> for f64 {
    fn from(angle: Sexagesimal) -> Self {
        angle.to_decimal()
    }
}

lazy_static! {
    static ref RE_DMS: Regex = Regex::new(
        r"(?x)                               # enables verbose mode (to allow these comments)
        ^                                         # match the whole line from the start
        (?P<deg>[-+]?\d+(?:\.\d+)?)                   # mandatory degree VALUE, signed
        \x20                                          # single space
        (?P<min>\d+(?:\.\d+)?)                        # mandatory minutes VALUE
        \x20                                          # single space
        (?P<sec>\d+(?:\.\d+)?)                        # mandatory seconds VALUE
        $                                         # match the whole line till the end
        "
    )
    .expect("DMS regex is valid");
}

impl FromStr for Sexagesimal {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let capture = RE_DMS.captures(s).ok_or(ParseAngleError::DmsNotation)?;
        let degrees = named_part(&capture, "deg")?.parse()?;
        let minutes = named_part(&capture, "min")?.parse()?;
        let seconds = named_part(&capture, "sec")?.parse()?;
        Ok(Self::new(degrees, minutes, seconds)?)
    }
}

fn named_part<'t>(capture: &Captures<'t>, name: &str) -> Result<&'t str, ParseAngleError> {
    capture
        .name(name)
        .map(|m| m.as_str())
        .ok_or(ParseAngleError::DmsNotation)
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.degrees, self.minutes, self.seconds)
    }
}
