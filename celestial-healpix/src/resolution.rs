//! Pixelization resolution.
//!
//! A [`Resolution`] wraps a validated `nside` (a power of two no larger than
//! [`MAX_NSIDE`]). Every other quantity is derived on access:
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | `npix` | `12·nside²` |
//! | `ncap` | `2·nside·(nside−1)`, pixels in one polar cap |
//! | `area` | `4π/npix` steradians |
//! | `order` | `log2(nside)` |

use crate::constants::{MAX_NSIDE, MAX_ORDER, PI, TWO_THIRDS};
use crate::error::{HealpixError, HealpixResult};
use crate::math::vincenty_angular_separation;

/// Returns `true` if `nside` is a supported resolution.
pub fn nside_is_ok(nside: u64) -> bool {
    nside > 0 && nside <= MAX_NSIDE && nside.is_power_of_two()
}

/// Returns `true` if `npix` is the pixel count of a supported resolution.
pub fn npix_is_ok(npix: u64) -> bool {
    npix2nside(npix).is_ok()
}

/// Number of pixels on the sphere for `nside`.
pub fn nside2npix(nside: u64) -> HealpixResult<u64> {
    Resolution::new(nside).map(|res| res.npix())
}

/// Inverse of [`nside2npix`].
pub fn npix2nside(npix: u64) -> HealpixResult<u64> {
    if npix == 0 || npix % 12 != 0 {
        return Err(HealpixError::invalid_pixel_count(npix));
    }
    let nside = crate::math::isqrt(npix / 12);
    if nside * nside * 12 != npix || !nside_is_ok(nside) {
        return Err(HealpixError::invalid_pixel_count(npix));
    }
    Ok(nside)
}

/// A validated pixelization resolution.
///
/// ```
/// use celestial_healpix::Resolution;
///
/// let res = Resolution::new(4).unwrap();
/// assert_eq!(res.npix(), 192);
/// assert_eq!(res.ncap(), 24);
/// assert!(Resolution::new(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct Resolution {
    nside: u64,
}

impl Resolution {
    /// Validates `nside`.
    ///
    /// # Errors
    /// [`HealpixError::InvalidResolution`] if `nside` is zero, larger than
    /// [`MAX_NSIDE`], or not a power of two.
    pub fn new(nside: u64) -> HealpixResult<Self> {
        if nside == 0 {
            return Err(HealpixError::invalid_resolution(nside, "must be positive"));
        }
        if nside > MAX_NSIDE {
            return Err(HealpixError::invalid_resolution(
                nside,
                format!("exceeds maximum {}", MAX_NSIDE),
            ));
        }
        if !nside.is_power_of_two() {
            return Err(HealpixError::invalid_resolution(
                nside,
                "not a power of two",
            ));
        }
        Ok(Self { nside })
    }

    /// Resolution with `nside = 2^order`.
    ///
    /// # Errors
    /// [`HealpixError::InvalidOrder`] if `order` exceeds [`MAX_ORDER`].
    pub fn from_order(order: u32) -> HealpixResult<Self> {
        if order > MAX_ORDER {
            return Err(HealpixError::invalid_order(order));
        }
        Self::new(1 << order)
    }

    /// Resolution parameter; each base pixel is split into `nside²` pixels.
    #[inline]
    pub fn nside(&self) -> u64 {
        self.nside
    }

    #[inline]
    pub fn order(&self) -> u32 {
        self.nside.trailing_zeros()
    }

    /// Total pixel count, `12·nside²`.
    #[inline]
    pub fn npix(&self) -> u64 {
        12 * self.nside * self.nside
    }

    /// Pixels in the north polar cap, `2·nside·(nside−1)`.
    #[inline]
    pub fn ncap(&self) -> u64 {
        2 * self.nside * (self.nside - 1)
    }

    /// Solid angle of one pixel, in steradians.
    #[inline]
    pub fn area(&self) -> f64 {
        4.0 * PI / self.npix() as f64
    }

    /// Largest angular distance between any pixel center and its corners, in radians.
    ///
    /// Attained between a corner on the cap/belt boundary (`z = 2/3`) and the
    /// center of a pixel in the last cap ring.
    pub fn max_pixrad(&self) -> f64 {
        let n = self.nside as f64;
        let t1 = 1.0 - 1.0 / n;
        let z_corner = TWO_THIRDS;
        let z_center = 1.0 - t1 * t1 / 3.0;
        vincenty_angular_separation(
            z_corner,
            libm::sqrt((1.0 - z_corner) * (1.0 + z_corner)),
            z_center,
            libm::sqrt((1.0 - z_center) * (1.0 + z_center)),
            PI / (4.0 * n),
        )
    }
}

impl TryFrom<u64> for Resolution {
    type Error = HealpixError;

    fn try_from(nside: u64) -> HealpixResult<Self> {
        Self::new(nside)
    }
}

impl From<Resolution> for u64 {
    fn from(res: Resolution) -> u64 {
        res.nside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nside_4_constants() {
        let res = Resolution::new(4).unwrap();
        assert_eq!(res.nside(), 4);
        assert_eq!(res.order(), 2);
        assert_eq!(res.npix(), 192);
        assert_eq!(res.ncap(), 24);
        assert_abs_diff_eq!(res.area(), 4.0 * PI / 192.0, epsilon = 1e-15);
    }

    #[test]
    fn test_nside_1_has_no_cap_rings() {
        let res = Resolution::new(1).unwrap();
        assert_eq!(res.npix(), 12);
        assert_eq!(res.ncap(), 0);
    }

    #[test]
    fn test_rejects_bad_nside() {
        for nside in [0, 3, 6, 12, 1000, MAX_NSIDE + 1, MAX_NSIDE * 2] {
            let err = Resolution::new(nside).unwrap_err();
            assert!(
                matches!(err, HealpixError::InvalidResolution { .. }),
                "nside {} gave {:?}",
                nside,
                err
            );
        }
        assert!(Resolution::new(MAX_NSIDE).is_ok());
    }

    #[test]
    fn test_from_order() {
        assert_eq!(Resolution::from_order(0).unwrap().nside(), 1);
        assert_eq!(Resolution::from_order(8).unwrap().nside(), 256);
        assert_eq!(Resolution::from_order(MAX_ORDER).unwrap().nside(), MAX_NSIDE);
        assert_eq!(
            Resolution::from_order(MAX_ORDER + 1),
            Err(HealpixError::InvalidOrder {
                order: MAX_ORDER + 1,
                max: MAX_ORDER
            })
        );
        assert!(matches!(
            Resolution::from_order(64),
            Err(HealpixError::InvalidOrder { order: 64, .. })
        ));
    }

    #[test]
    fn test_npix_nside_conversions() {
        assert_eq!(nside2npix(8).unwrap(), 768);
        assert_eq!(npix2nside(768).unwrap(), 8);
        assert_eq!(npix2nside(12 * MAX_NSIDE * MAX_NSIDE).unwrap(), MAX_NSIDE);
        assert!(nside2npix(5).is_err());
        assert!(npix2nside(0).is_err());
        assert!(npix2nside(100).is_err());
        // 12 * 3^2 is a valid count shape but nside 3 is not a power of two
        assert!(npix2nside(108).is_err());
        assert!(npix_is_ok(49152));
        assert!(!npix_is_ok(49153));
        assert!(nside_is_ok(1024));
        assert!(!nside_is_ok(1023));
    }

    #[test]
    fn test_max_pixrad_decreases_with_resolution() {
        let mut prev = f64::INFINITY;
        for order in 0..12 {
            let r = Resolution::from_order(order).unwrap().max_pixrad();
            assert!(r > 0.0 && r < prev);
            prev = r;
        }
    }

    #[test]
    fn test_max_pixrad_nside_1() {
        // corner at z=2/3 and the north pole
        let r = Resolution::new(1).unwrap().max_pixrad();
        assert_abs_diff_eq!(r, libm::acos(TWO_THIRDS), epsilon = 1e-12);
    }

    #[test]
    fn test_max_pixrad_exceeds_mean_pixel_size() {
        let res = Resolution::new(64).unwrap();
        assert!(res.max_pixrad() > 0.5 * libm::sqrt(res.area()));
    }

    #[test]
    fn test_try_from() {
        let res: Resolution = 16u64.try_into().unwrap();
        assert_eq!(u64::from(res), 16);
        assert!(Resolution::try_from(17u64).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_nside() {
        let res = Resolution::new(256).unwrap();
        assert_eq!(serde_json::to_string(&res).unwrap(), "256");
        assert_eq!(serde_json::from_str::<Resolution>("256").unwrap(), res);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_revalidates_nside() {
        for json in ["0", "3", "1000"] {
            let err = serde_json::from_str::<Resolution>(json).unwrap_err();
            assert!(
                err.to_string().contains("Invalid resolution"),
                "{json} gave {err}"
            );
        }
    }
}
