//! Utilities functions which are not linked to the domain

use std::ops::Neg;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Allow conversion of a signed value into its magnitude
/// by dropping the sign away
pub(crate) trait ToUnsigned: Default + Copy + PartialOrd + Neg<Output = Self> {
    /// Converts to the absolute value, remembering whether the value was non-negative.
    ///
    /// Negative zero is treated as a positive value, NaN as a negative one.
    fn unsigned_abs(self) -> (Self, bool) {
        if self >= Self::default() {
            (self, true)
        } else {
            (-self, false)
        }
    }
}

impl ToUnsigned for f64 {}

/// Remove the insignificant zeros (and the dangling dot) of a decimal representation
fn trim_fraction(mut repr: String) -> String {
    if repr.contains('.') && !repr.contains(['e', 'E']) {
        while repr.ends_with('0') {
            let _ = repr.pop();
        }
        if repr.ends_with('.') {
            let _ = repr.pop();
        }
    }
    repr
}

/// Fixed number of fractional digits with the trailing zeros removed: `2071.50` -> `2071.5`
pub(crate) fn fixed_trimmed(value: f64, digits: usize) -> String {
    trim_fraction(format!("{value:.digits$}"))
}

/// Round to the given number of significant digits
/// with the trailing zeros removed: `0.012345` -> `0.0123`, `12345` -> `12300`
pub(crate) fn significant_trimmed(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return format!("{value}");
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = digits as i32 - 1 - magnitude;
    if decimals >= 0 {
        let rounded = format!("{value:.prec$}", prec = decimals as usize);
        // rounding may carry into the next order (9.996 -> 10.00)
        trim_fraction(rounded)
    } else {
        let scale = 10_f64.powi(-decimals);
        format!("{}", (value / scale).round() * scale)
    }
}
