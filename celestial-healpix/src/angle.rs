//! Conversion between equatorial and angular coordinates.
//!
//! | System | Components | Units |
//! |--------|------------|-------|
//! | Equatorial | right ascension, declination | degrees |
//! | Angular | colatitude `theta` (0 at the north pole), azimuth `phi` | radians |
//!
//! No range is enforced in either direction; out-of-range inputs wrap
//! naturally through the trigonometry downstream.

use crate::constants::{DEG_TO_RAD, HALF_PI, RAD_TO_DEG};

/// `(ra, dec)` in degrees to `(theta, phi)` in radians.
#[inline]
pub fn eq_to_ang(ra_deg: f64, dec_deg: f64) -> (f64, f64) {
    (HALF_PI - dec_deg * DEG_TO_RAD, ra_deg * DEG_TO_RAD)
}

/// `(theta, phi)` in radians to `(ra, dec)` in degrees.
#[inline]
pub fn ang_to_eq(theta: f64, phi: f64) -> (f64, f64) {
    (phi * RAD_TO_DEG, 90.0 - theta * RAD_TO_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_poles() {
        let (theta, phi) = eq_to_ang(0.0, 90.0);
        assert_abs_diff_eq!(theta, 0.0, epsilon = 1e-15);
        assert_eq!(phi, 0.0);

        let (theta, _) = eq_to_ang(123.0, -90.0);
        assert_abs_diff_eq!(theta, PI, epsilon = 1e-15);
    }

    #[test]
    fn test_equator() {
        let (theta, phi) = eq_to_ang(180.0, 0.0);
        assert_eq!(theta, HALF_PI);
        assert_abs_diff_eq!(phi, PI, epsilon = 1e-15);
    }

    #[test]
    fn test_inverse() {
        for &(ra, dec) in &[(0.0, 0.0), (83.633, -5.375), (359.9, 89.9), (10.0, -45.0)] {
            let (theta, phi) = eq_to_ang(ra, dec);
            let (ra2, dec2) = ang_to_eq(theta, phi);
            assert_abs_diff_eq!(ra, ra2, epsilon = 1e-12);
            assert_abs_diff_eq!(dec, dec2, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_no_range_restriction() {
        let (_, phi) = eq_to_ang(-90.0, 0.0);
        assert_abs_diff_eq!(phi, -HALF_PI, epsilon = 1e-15);
        let (theta, _) = eq_to_ang(0.0, 100.0);
        assert!(theta < 0.0);
    }
}
