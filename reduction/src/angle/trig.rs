use num_traits::Float;

/// Trigonometry operating on degrees instead of radians.
///
/// The inverse functions return degrees.
pub trait DegreeTrig: Float {
    /// Sine of the angle given in degrees
    fn sin_deg(self) -> Self {
        self.to_radians().sin()
    }

    /// Cosine of the angle given in degrees
    fn cos_deg(self) -> Self {
        self.to_radians().cos()
    }

    /// Tangent of the angle given in degrees
    fn tan_deg(self) -> Self {
        self.to_radians().tan()
    }

    /// Arcsine in degrees
    fn asin_deg(self) -> Self {
        self.asin().to_degrees()
    }

    /// Arccosine in degrees
    fn acos_deg(self) -> Self {
        self.acos().to_degrees()
    }

    /// Arctangent in degrees
    fn atan_deg(self) -> Self {
        self.atan().to_degrees()
    }
}

impl<T: Float> DegreeTrig for T {}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn direct() {
        assert_abs_diff_eq!(30_f64.sin_deg(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(60_f64.cos_deg(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(45_f64.tan_deg(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(90_f32.sin_deg(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn inverse() {
        assert_abs_diff_eq!(0.5_f64.asin_deg(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(0.5_f64.acos_deg(), 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!((-1_f64).atan_deg(), -45.0, epsilon = 1e-9);
        assert_abs_diff_eq!((-1_f64).acos_deg(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn out_of_domain_is_nan() {
        assert!(2_f64.asin_deg().is_nan());
        assert!(f64::NAN.cos_deg().is_nan());
    }
}
