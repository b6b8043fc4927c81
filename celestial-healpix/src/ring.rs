//! Ring-scheme indexing.
//!
//! Pixels are numbered ring by ring from the north pole to the south pole, and
//! by increasing azimuth within a ring. Rings are numbered `1..=4·nside−1`:
//!
//! | Rings | Region | Pixels per ring | Half-pixel shift |
//! |-------|--------|-----------------|------------------|
//! | `1..nside` | north polar cap | `4·i` | always |
//! | `nside..=3·nside` | equatorial belt | `4·nside` | when `i − nside` is even |
//! | `3·nside+1..4·nside` | south polar cap | `4·(4·nside − i)` | always |
//!
//! [`ang2pix`] and [`pix2ang`] are closed-form (Gorski et al. 2005); no table
//! lookups or searches are involved.

use std::ops::Range;

use crate::constants::{INV_HALF_PI, TWOPI, TWO_THIRDS};
use crate::error::{HealpixError, HealpixResult};
use crate::math::{fmod, isqrt};
use crate::resolution::Resolution;

/// An iso-latitude ring of pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    /// Ring number, 1-based from the north pole.
    pub index: u64,
    /// `cos(theta)` shared by every pixel center on the ring.
    pub z: f64,
    /// `sin(theta)`, computed without cancellation near the poles.
    pub sin_theta: f64,
    pub first_pixel: u64,
    pub pixel_count: u64,
    /// Whether the first pixel center sits half a pixel east of `phi = 0`.
    pub shifted: bool,
}

impl Ring {
    #[inline]
    pub fn theta(&self) -> f64 {
        libm::atan2(self.sin_theta, self.z)
    }

    #[inline]
    pub fn phi_shift(&self) -> f64 {
        if self.shifted {
            0.5
        } else {
            0.0
        }
    }

    /// Azimuth of the center of the pixel in `column` (0-based within the ring).
    #[inline]
    pub fn column_phi(&self, column: u64) -> f64 {
        (column as f64 + self.phi_shift()) * TWOPI / self.pixel_count as f64
    }

    #[inline]
    pub fn pixels(&self) -> Range<u64> {
        self.first_pixel..self.first_pixel + self.pixel_count
    }
}

impl Resolution {
    /// Number of iso-latitude rings, `4·nside − 1`.
    #[inline]
    pub fn ring_count(&self) -> u64 {
        4 * self.nside() - 1
    }

    /// Descriptor of ring `index`, or `None` outside `1..=4·nside−1`.
    pub fn ring(&self, index: u64) -> Option<Ring> {
        if index == 0 || index > self.ring_count() {
            return None;
        }
        Some(self.ring_unchecked(index))
    }

    pub(crate) fn ring_unchecked(&self, index: u64) -> Ring {
        let nside = self.nside();
        if index < nside {
            let (z, sin_theta) = cap_ring_z(index, nside);
            Ring {
                index,
                z,
                sin_theta,
                first_pixel: 2 * index * (index - 1),
                pixel_count: 4 * index,
                shifted: true,
            }
        } else if index <= 3 * nside {
            let z = (2 * nside as i64 - index as i64) as f64 * 2.0 / (3.0 * nside as f64);
            let offset = index - nside;
            Ring {
                index,
                z,
                sin_theta: libm::sqrt((1.0 - z) * (1.0 + z)),
                first_pixel: self.ncap() + offset * 4 * nside,
                pixel_count: 4 * nside,
                shifted: offset % 2 == 0,
            }
        } else {
            let k = 4 * nside - index;
            let (z, sin_theta) = cap_ring_z(k, nside);
            Ring {
                index,
                z: -z,
                sin_theta,
                first_pixel: self.npix() - 2 * k * (k + 1),
                pixel_count: 4 * k,
                shifted: true,
            }
        }
    }

    /// Ring number containing `pixel`.
    pub fn ring_of_pixel(&self, pixel: u64) -> HealpixResult<u64> {
        let npix = self.npix();
        if pixel >= npix {
            return Err(HealpixError::out_of_range(pixel, npix));
        }
        let nside = self.nside();
        let ncap = self.ncap();
        let index = if pixel < ncap {
            (1 + isqrt(1 + 2 * pixel)) >> 1
        } else if pixel < npix - ncap {
            (pixel - ncap) / (4 * nside) + nside
        } else {
            let from_end = npix - pixel;
            4 * nside - ((1 + isqrt(2 * from_end - 1)) >> 1)
        };
        Ok(index)
    }

    /// Number of the closest ring at or north of `z`; `0` above the first ring.
    ///
    /// Exact for `z` strictly between two rings; a `z` equal to a ring's own
    /// `z` may land on either neighbour.
    pub fn ring_above(&self, z: f64) -> u64 {
        let n = self.nside() as f64;
        let za = libm::fabs(z);
        let ring = if za <= TWO_THIRDS {
            libm::floor(n * (2.0 - 1.5 * z)) as u64
        } else {
            let iring = libm::floor(n * libm::sqrt(3.0 * (1.0 - za))) as u64;
            if z > 0.0 {
                iring
            } else {
                self.ring_count() - iring.min(self.ring_count())
            }
        };
        ring.min(self.ring_count())
    }
}

/// `(z, sin(theta))` of the `k`-th ring counted from the nearer pole, `k < nside`.
fn cap_ring_z(k: u64, nside: u64) -> (f64, f64) {
    let tmp = (k * k) as f64 / (3.0 * (nside * nside) as f64);
    (1.0 - tmp, libm::sqrt(tmp * (2.0 - tmp)))
}

/// Pixel index containing the direction `(theta, phi)`.
///
/// Implements the Gorski et al. (2005) closed form for the ring scheme.
///
/// # Arguments
/// * `res` - Pixelization resolution
/// * `theta` - Colatitude in radians, expected in `[0, π]`
/// * `phi` - Azimuth in radians, reduced modulo `2π`
///
/// # Returns
/// Ring pixel index in range `[0, 12*nside^2)`
pub fn ang2pix(res: Resolution, theta: f64, phi: f64) -> u64 {
    let (sin_theta, z) = libm::sincos(theta);
    let za = libm::fabs(z);
    let tt = phi_to_tt(phi);
    if za <= TWO_THIRDS {
        equatorial_pixel(res, tt, z)
    } else {
        let one_minus_za = if za > 0.99 {
            sin_theta * sin_theta / (1.0 + za)
        } else {
            1.0 - za
        };
        polar_pixel(res, tt, z, one_minus_za)
    }
}

/// Nominal center `(theta, phi)` of `pixel`, in radians.
///
/// # Errors
/// [`HealpixError::OutOfRange`] if `pixel >= 12*nside^2`.
pub fn pix2ang(res: Resolution, pixel: u64) -> HealpixResult<(f64, f64)> {
    let ring = res.ring_unchecked(res.ring_of_pixel(pixel)?);
    Ok((ring.theta(), ring.column_phi(pixel - ring.first_pixel)))
}

/// Convert phi to tt (0..4 range for the 4 quadrants).
fn phi_to_tt(phi: f64) -> f64 {
    let tt = fmod(phi * INV_HALF_PI, 4.0);
    let tt = if tt < 0.0 { tt + 4.0 } else { tt };
    if tt >= 4.0 {
        0.0
    } else {
        tt
    }
}

/// Pixel for the equatorial belt (-2/3 <= z <= 2/3).
fn equatorial_pixel(res: Resolution, tt: f64, z: f64) -> u64 {
    let nside = res.nside() as i64;
    let temp1 = nside as f64 * (0.5 + tt);
    let temp2 = nside as f64 * z * 0.75;
    // indices of the ascending and descending edge lines
    let jp = libm::floor(temp1 - temp2) as i64;
    let jm = libm::floor(temp1 + temp2) as i64;
    // ring counted from z = 2/3, in 1..=2*nside+1
    let ir = nside + 1 + jp - jm;
    let kshift = 1 - (ir & 1);
    let ip = (jp + jm - nside + kshift + 1)
        .div_euclid(2)
        .rem_euclid(4 * nside);
    res.ncap() + ((ir - 1) * 4 * nside + ip) as u64
}

/// Pixel for the polar caps (|z| > 2/3).
fn polar_pixel(res: Resolution, tt: f64, z: f64, one_minus_za: f64) -> u64 {
    let nside = res.nside() as i64;
    let tp = tt - libm::floor(tt);
    let tmp = nside as f64 * libm::sqrt(3.0 * one_minus_za);
    let jp = libm::floor(tp * tmp) as i64;
    let jm = libm::floor((1.0 - tp) * tmp) as i64;
    // ring counted from the nearer pole
    let ir = (jp + jm + 1).min(nside);
    let ip = (libm::floor(tt * ir as f64) as i64).rem_euclid(4 * ir);
    if z > 0.0 {
        (2 * ir * (ir - 1) + ip) as u64
    } else {
        (res.npix() as i64 - 2 * ir * (ir + 1) + ip) as u64
    }
}
