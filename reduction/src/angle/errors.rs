use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AngleNotInRange {
    ArcMinutes, // min >= 60
    ArcSeconds, // sec >= 60
    NotFinite,  // NaN or infinite part
}

impl fmt::Display for AngleNotInRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
            Self::NotFinite => "Every part of an angle should be a finite number",
        };

        write!(f, "{msg}")
    }
}

impl Error for AngleNotInRange {}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseAngleError {
    Range(AngleNotInRange),
    Float(ParseFloatError),
    /// Not a space separated "D M S" triple
    DmsNotation,
}

enum_trivial_from_impl!(AngleNotInRange => ParseAngleError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseAngleError:Float);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::DmsNotation => write!(f, "not a space separated Degree-Minute-Second notation"),
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Float(inner) => Some(inner),
            Self::DmsNotation => None,
        }
    }
}
