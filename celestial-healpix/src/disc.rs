//! Disc (spherical cap) queries.
//!
//! [`query_disc`] walks only the rings whose latitude band can meet the cap.
//! On each ring the spherical law of cosines gives the azimuth half-width
//! `dphi` of the pixel centers inside the cap, which turns into one or two
//! contiguous runs of pixel indices. Results come out ascending without a
//! final sort.
//!
//! # Inclusive Mode
//!
//! With `inclusive = true` the radius is widened by
//! [`Resolution::max_pixrad`], an upper bound on the distance from a pixel
//! center to any point of that pixel. Every pixel touching the cap is
//! returned; some pixels that merely come close are returned too.

use crate::constants::{PI, TWOPI};
use crate::error::{HealpixError, HealpixResult};
use crate::math::wrap_0_2pi;
use crate::resolution::Resolution;
use crate::ring::{ang2pix, Ring};

/// Which part of a ring lies inside the cap.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RingSpan {
    Empty,
    Whole,
    /// Azimuth half-width around the cap center.
    HalfWidth(f64),
}

/// Pixels whose centers lie within `radius` of `(theta, phi)`, or with
/// `inclusive` set, every pixel intersecting that disc.
///
/// # Arguments
/// * `res` - Pixelization resolution
/// * `theta` - Disc center colatitude in radians, in `[0, π]`
/// * `phi` - Disc center azimuth in radians (wrapped)
/// * `radius` - Disc radius in radians, in `[0, π]`
/// * `inclusive` - Return every pixel touching the disc, not only those with centers inside
///
/// # Returns
/// Ring pixel indices in ascending order, without duplicates.
///
/// # Errors
/// [`HealpixError::InvalidRadius`] or [`HealpixError::InvalidCoordinate`]
/// for inputs outside the ranges above.
pub fn query_disc(
    res: Resolution,
    theta: f64,
    phi: f64,
    radius: f64,
    inclusive: bool,
) -> HealpixResult<Vec<u64>> {
    validate_disc(theta, phi, radius)?;

    if radius == 0.0 && !inclusive {
        return Ok(vec![ang2pix(res, theta, phi)]);
    }

    let radius = if inclusive {
        radius + res.max_pixrad()
    } else {
        radius
    };
    if radius >= PI {
        return Ok((0..res.npix()).collect());
    }

    let phi = wrap_0_2pi(phi);
    let cos_radius = libm::cos(radius);
    let (sin_theta0, z0) = libm::sincos(theta);

    let z_north = libm::cos((theta - radius).max(0.0));
    let z_south = libm::cos((theta + radius).min(PI));
    // one extra ring on each side absorbs ring_above ties at exact ring z
    let first = res.ring_above(z_north).max(1);
    let last = (res.ring_above(z_south) + 1).min(res.ring_count());

    log::trace!(
        "query_disc nside={} rings {}..={} radius={} inclusive={}",
        res.nside(),
        first,
        last,
        radius,
        inclusive
    );

    let mut pixels = Vec::new();
    for index in first..=last {
        let ring = res.ring_unchecked(index);
        match ring_span(&ring, z0, sin_theta0, cos_radius) {
            RingSpan::Empty => {}
            RingSpan::Whole => pixels.extend(ring.pixels()),
            RingSpan::HalfWidth(dphi) => push_columns(&mut pixels, &ring, phi, dphi),
        }
    }

    log::trace!("query_disc returned {} pixels", pixels.len());
    Ok(pixels)
}

fn validate_disc(theta: f64, phi: f64, radius: f64) -> HealpixResult<()> {
    if !(0.0..=PI).contains(&radius) {
        return Err(HealpixError::invalid_radius(radius));
    }
    if !theta.is_finite() || !phi.is_finite() {
        return Err(HealpixError::invalid_coordinate(format!(
            "disc center ({}, {}) is not finite",
            theta, phi
        )));
    }
    if !(0.0..=PI).contains(&theta) {
        return Err(HealpixError::invalid_coordinate(format!(
            "disc center colatitude {} outside [0, pi]",
            theta
        )));
    }
    Ok(())
}

/// Cosine rule: a point on the ring at azimuth offset `d` from the center is
/// inside the cap iff `z·z0 + sin(theta)·sin(theta0)·cos(d) >= cos(radius)`.
fn ring_span(ring: &Ring, z0: f64, sin_theta0: f64, cos_radius: f64) -> RingSpan {
    let zz = ring.z * z0;
    let ss = ring.sin_theta * sin_theta0;
    if ss <= 0.0 {
        // center on a pole: every ring is all in or all out
        return if zz >= cos_radius {
            RingSpan::Whole
        } else {
            RingSpan::Empty
        };
    }
    let x = (cos_radius - zz) / ss;
    if x <= -1.0 {
        RingSpan::Whole
    } else if x > 1.0 {
        RingSpan::Empty
    } else {
        RingSpan::HalfWidth(libm::acos(x))
    }
}

/// Appends the ring columns whose centers fall in `[phi - dphi, phi + dphi]`.
fn push_columns(pixels: &mut Vec<u64>, ring: &Ring, phi: f64, dphi: f64) {
    let count = ring.pixel_count as i64;
    let scale = ring.pixel_count as f64 / TWOPI;
    let shift = ring.phi_shift();
    let lo = libm::ceil(scale * (phi - dphi) - shift) as i64;
    let hi = libm::floor(scale * (phi + dphi) - shift) as i64;
    if hi < lo {
        return;
    }
    if hi - lo + 1 >= count {
        pixels.extend(ring.pixels());
        return;
    }

    let start = lo.rem_euclid(count) as u64;
    let end = start + (hi - lo + 1) as u64;
    let first = ring.first_pixel;
    if end <= ring.pixel_count {
        pixels.extend(first + start..first + end);
    } else {
        // run crosses phi = 0: emit the wrapped head before the tail
        pixels.extend(first..first + (end - ring.pixel_count));
        pixels.extend(first + start..first + ring.pixel_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::math::angular_distance;
    use crate::ring::pix2ang;

    fn res(nside: u64) -> Resolution {
        Resolution::new(nside).unwrap()
    }

    fn brute_force(res: Resolution, theta: f64, phi: f64, radius: f64) -> (Vec<u64>, Vec<u64>) {
        // (certainly inside, certainly outside), leaving a margin for rounding
        let mut inside = Vec::new();
        let mut outside = Vec::new();
        for pixel in 0..res.npix() {
            let (t, p) = pix2ang(res, pixel).unwrap();
            let d = angular_distance(theta, phi, t, p);
            if d < radius - 1e-9 {
                inside.push(pixel);
            } else if d > radius + 1e-9 {
                outside.push(pixel);
            }
        }
        (inside, outside)
    }

    fn assert_ascending_unique(pixels: &[u64]) {
        for w in pixels.windows(2) {
            assert!(w[0] < w[1], "not ascending: {} then {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_matches_brute_force() {
        let res = res(16);
        let centers = [
            (0.0, 0.0),
            (0.02, 1.0),
            (0.7, 0.0),
            (1.2, 6.2),
            (HALF_PI, 3.0),
            (2.0, 4.5),
            (PI - 0.01, 2.0),
            (PI, 0.0),
        ];
        for &(theta, phi) in &centers {
            for &radius in &[0.01, 0.1, 0.5, 1.3, 2.5] {
                let pixels = query_disc(res, theta, phi, radius, false).unwrap();
                assert_ascending_unique(&pixels);
                let (inside, outside) = brute_force(res, theta, phi, radius);
                for pixel in inside {
                    assert!(
                        pixels.binary_search(&pixel).is_ok(),
                        "missing {} for ({}, {}) r={}",
                        pixel,
                        theta,
                        phi,
                        radius
                    );
                }
                for pixel in outside {
                    assert!(
                        pixels.binary_search(&pixel).is_err(),
                        "extra {} for ({}, {}) r={}",
                        pixel,
                        theta,
                        phi,
                        radius
                    );
                }
            }
        }
    }

    #[test]
    fn test_wraparound_through_phi_zero() {
        let res = res(8);
        let pixels = query_disc(res, HALF_PI, 0.0, 0.3, false).unwrap();
        assert_ascending_unique(&pixels);
        let equator = res.ring(16).unwrap();
        let on_equator: Vec<u64> = pixels
            .iter()
            .copied()
            .filter(|p| equator.pixels().contains(p))
            .collect();
        assert!(on_equator.contains(&equator.first_pixel));
        assert!(on_equator.contains(&(equator.first_pixel + equator.pixel_count - 1)));
    }

    #[test]
    fn test_inclusive_superset() {
        let res = res(8);
        for &(theta, phi, radius) in &[(0.3, 0.2, 0.2), (HALF_PI, 5.0, 0.05), (2.8, 1.0, 0.7)] {
            let strict = query_disc(res, theta, phi, radius, false).unwrap();
            let loose = query_disc(res, theta, phi, radius, true).unwrap();
            assert_ascending_unique(&loose);
            for pixel in &strict {
                assert!(loose.binary_search(pixel).is_ok());
            }
            assert!(loose.len() > strict.len());
        }
    }

    #[test]
    fn test_zero_radius() {
        let res = res(4);
        let pixels = query_disc(res, 1.0, 2.0, 0.0, false).unwrap();
        assert_eq!(pixels, vec![ang2pix(res, 1.0, 2.0)]);

        let inclusive = query_disc(res, 1.0, 2.0, 0.0, true).unwrap();
        assert!(inclusive.contains(&ang2pix(res, 1.0, 2.0)));
    }

    #[test]
    fn test_full_sphere() {
        let res = res(4);
        for inclusive in [false, true] {
            let pixels = query_disc(res, 0.4, 0.4, PI, inclusive).unwrap();
            assert_eq!(pixels, (0..192).collect::<Vec<u64>>());
        }
    }

    #[test]
    fn test_pole_centered_disc_takes_whole_rings() {
        let res = res(8);
        let radius = res.ring(3).unwrap().theta() + 1e-6;
        let pixels = query_disc(res, 0.0, 0.0, radius, false).unwrap();
        assert_eq!(pixels, (0..res.ring(3).unwrap().pixels().end).collect::<Vec<u64>>());

        let south = query_disc(res, PI, 0.0, radius, false).unwrap();
        assert_eq!(
            south,
            (res.ring(29).unwrap().first_pixel..res.npix()).collect::<Vec<u64>>()
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let res = res(4);
        assert_eq!(
            query_disc(res, 1.0, 1.0, -0.1, false),
            Err(HealpixError::invalid_radius(-0.1))
        );
        assert!(query_disc(res, 1.0, 1.0, PI + 0.01, true).is_err());
        assert!(query_disc(res, 1.0, 1.0, f64::NAN, false).is_err());
        assert!(matches!(
            query_disc(res, f64::NAN, 1.0, 0.1, false),
            Err(HealpixError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            query_disc(res, -0.5, 1.0, 0.1, false),
            Err(HealpixError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_ring_span_cases() {
        let res = res(4);
        let equator = res.ring(8).unwrap();
        assert_eq!(ring_span(&equator, 1.0, 0.0, 0.5), RingSpan::Empty);
        assert_eq!(ring_span(&equator, 0.0, 1.0, -1.0), RingSpan::Whole);
        match ring_span(&equator, 0.0, 1.0, 0.0) {
            RingSpan::HalfWidth(dphi) => assert!((dphi - HALF_PI).abs() < 1e-15),
            other => panic!("expected a half-width, got {:?}", other),
        }
    }
}
