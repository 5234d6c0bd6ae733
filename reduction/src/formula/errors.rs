use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The formula source was rejected.
///
/// Offsets are in bytes from the start of the source.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaError {
    Empty,
    UnexpectedChar { offset: usize, found: char },
    UnexpectedToken { offset: usize, found: String },
    UnexpectedEnd,
    UnknownIdentifier { offset: usize, name: String },
    Arity {
        offset: usize,
        name: String,
        expected: usize,
        found: usize,
    },
    Number(ParseFloatError),
    TooDeep { offset: usize },
}

enum_trivial_from_impl!(ParseFloatError => FormulaError:Number);

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid formula: ")?;
        match self {
            Self::Empty => write!(f, "no expression provided"),
            Self::UnexpectedChar { offset, found } => {
                write!(f, "unexpected character {found:?} at {offset}")
            }
            Self::UnexpectedToken { offset, found } => {
                write!(f, "unexpected {found:?} at {offset}")
            }
            Self::UnexpectedEnd => write!(f, "unexpected end of the expression"),
            Self::UnknownIdentifier { offset, name } => {
                write!(f, "unknown identifier {name:?} at {offset}")
            }
            Self::Arity {
                offset,
                name,
                expected,
                found,
            } => write!(
                f,
                "function {name:?} at {offset} takes {expected} argument(s), {found} provided"
            ),
            Self::Number(inner) => write!(f, "{inner}"),
            Self::TooDeep { offset } => {
                write!(f, "the expression is nested too deep at {offset}")
            }
        }
    }
}

impl Error for FormulaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Number(inner) => Some(inner),
            _ => None,
        }
    }
}
