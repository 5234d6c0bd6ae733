use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::ToUnsigned;

pub use self::{pixel::PixelPoint, point::GeoPoint};

mod pixel;
mod point;

/// Two named directions chosen by the sign of a coordinate
macro_rules! bool_enum {
    ($name:ident: $truthy:ident and $falsy:ident; shown as $true_ch:literal:$false_ch:literal) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[allow(missing_docs)]
        pub enum $name {
            $truthy,
            $falsy,
        }

        impl From<bool> for $name {
            fn from(positive: bool) -> Self {
                if positive {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    Self::$truthy => $true_ch,
                    Self::$falsy => $false_ch,
                };
                write!(f, "{symbol}")
            }
        }
    };
}

bool_enum!(Pole: North and South; shown as 'N':'S');
bool_enum!(RotationalDirection: East and West; shown as 'E':'W');

/// Split the signed coordinate into its magnitude and the named direction.
///
/// Neither zero nor NaN has a direction.
fn with_direction<D: From<bool>>(value: f64) -> (f64, Option<D>) {
    let (abs, positive) = value.unsigned_abs();
    if abs == 0.0 {
        (0.0, None)
    } else if abs.is_nan() {
        (abs, None)
    } else {
        (abs, Some(D::from(positive)))
    }
}
