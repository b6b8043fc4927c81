//! The [`HealPix`] facade.
//!
//! Binds a [`Scheme`] to a [`Resolution`] and exposes every operation in two
//! forms: a scalar call returning a single value and a `_batch` call over
//! slices. Both share the same per-element functions from [`crate::ring`],
//! [`crate::angle`] and [`crate::disc`].
//!
//! With the `parallel` feature, batch calls fan out over rayon's global pool.
//! Output order always matches input order.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::angle::{ang_to_eq, eq_to_ang};
use crate::constants::{DEG_TO_RAD, PI, SQ_DEG_PER_SR};
use crate::disc;
use crate::error::{HealpixError, HealpixResult};
use crate::resolution::Resolution;
use crate::ring;
use crate::scheme::Scheme;

/// Center of a disc query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscCenter {
    /// Right ascension and declination in degrees; the radius is read in degrees.
    Equatorial { ra: f64, dec: f64 },
    /// Colatitude and azimuth in radians; the radius is read in radians.
    Angular { theta: f64, phi: f64 },
}

/// A ring-scheme pixelization at a fixed resolution.
///
/// ```
/// use celestial_healpix::{HealPix, Scheme};
///
/// let hp = HealPix::new(Scheme::Ring, 4).unwrap();
/// assert_eq!(hp.npix(), 192);
/// assert_eq!(hp.eq2pix(0.0, 90.0), 0);
///
/// let (theta, phi) = hp.pix2ang(0).unwrap();
/// assert_eq!(hp.ang2pix(theta, phi), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HealPix {
    scheme: Scheme,
    resolution: Resolution,
}

impl HealPix {
    /// Binds `scheme` to the resolution `nside`.
    ///
    /// # Errors
    /// [`HealpixError::UnsupportedScheme`] for [`Scheme::Nested`], and
    /// [`HealpixError::InvalidResolution`] for a bad `nside`.
    pub fn new(scheme: Scheme, nside: u64) -> HealpixResult<Self> {
        if scheme != Scheme::Ring {
            return Err(HealpixError::unsupported_scheme(scheme.name()));
        }
        let resolution = Resolution::new(nside)?;
        log::debug!(
            "HealPix scheme={} nside={} npix={}",
            scheme,
            nside,
            resolution.npix()
        );
        Ok(Self { scheme, resolution })
    }

    /// Shorthand for `HealPix::new(Scheme::Ring, nside)`.
    pub fn ring(nside: u64) -> HealpixResult<Self> {
        Self::new(Scheme::Ring, nside)
    }

    /// The pixel ordering scheme; always [`Scheme::Ring`] for a constructed map.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Canonical scheme name, as [`Scheme::name`].
    pub fn scheme_name(&self) -> &'static str {
        self.scheme.name()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn nside(&self) -> u64 {
        self.resolution.nside()
    }

    pub fn npix(&self) -> u64 {
        self.resolution.npix()
    }

    pub fn ncap(&self) -> u64 {
        self.resolution.ncap()
    }

    /// Pixel area in steradians.
    pub fn area(&self) -> f64 {
        self.resolution.area()
    }

    pub fn max_pixrad(&self) -> f64 {
        self.resolution.max_pixrad()
    }

    /// Pixel containing `(ra, dec)` given in degrees.
    pub fn eq2pix(&self, ra: f64, dec: f64) -> u64 {
        let (theta, phi) = eq_to_ang(ra, dec);
        ring::ang2pix(self.resolution, theta, phi)
    }

    /// Pixel containing `(theta, phi)` given in radians.
    pub fn ang2pix(&self, theta: f64, phi: f64) -> u64 {
        ring::ang2pix(self.resolution, theta, phi)
    }

    /// Nominal center of `pixel` as `(ra, dec)` in degrees.
    pub fn pix2eq(&self, pixel: u64) -> HealpixResult<(f64, f64)> {
        let (theta, phi) = ring::pix2ang(self.resolution, pixel)?;
        Ok(ang_to_eq(theta, phi))
    }

    /// Nominal center of `pixel` as `(theta, phi)` in radians.
    pub fn pix2ang(&self, pixel: u64) -> HealpixResult<(f64, f64)> {
        ring::pix2ang(self.resolution, pixel)
    }

    /// [`HealPix::eq2pix`] over paired slices of degrees.
    ///
    /// # Errors
    /// [`HealpixError::ShapeMismatch`] if `ra` and `dec` differ in length.
    pub fn eq2pix_batch(&self, ra: &[f64], dec: &[f64]) -> HealpixResult<Vec<u64>> {
        map_pairs(ra, dec, ("ra", "dec"), |r, d| self.eq2pix(r, d))
    }

    /// [`HealPix::ang2pix`] over paired slices of radians.
    ///
    /// # Errors
    /// [`HealpixError::ShapeMismatch`] if `theta` and `phi` differ in length.
    pub fn ang2pix_batch(&self, theta: &[f64], phi: &[f64]) -> HealpixResult<Vec<u64>> {
        map_pairs(theta, phi, ("theta", "phi"), |t, p| self.ang2pix(t, p))
    }

    /// Centers of `pixels` as parallel `(ra, dec)` vectors in degrees.
    ///
    /// Fails with [`HealpixError::OutOfRange`] on the first bad pixel; no
    /// partial result is returned.
    pub fn pix2eq_batch(&self, pixels: &[u64]) -> HealpixResult<(Vec<f64>, Vec<f64>)> {
        map_pixels(pixels, |p| self.pix2eq(p))
    }

    /// Centers of `pixels` as parallel `(theta, phi)` vectors in radians.
    pub fn pix2ang_batch(&self, pixels: &[u64]) -> HealpixResult<(Vec<f64>, Vec<f64>)> {
        map_pixels(pixels, |p| self.pix2ang(p))
    }

    /// Pixels whose centers lie inside the disc, or with `inclusive`, every
    /// pixel intersecting it. The radius unit follows the center variant.
    pub fn query_disc(
        &self,
        center: DiscCenter,
        radius: f64,
        inclusive: bool,
    ) -> HealpixResult<Vec<u64>> {
        match center {
            DiscCenter::Equatorial { ra, dec } => self.query_disc_eq(ra, dec, radius, inclusive),
            DiscCenter::Angular { theta, phi } => {
                self.query_disc_ang(theta, phi, radius, inclusive)
            }
        }
    }

    /// Disc query with center and radius in degrees.
    pub fn query_disc_eq(
        &self,
        ra: f64,
        dec: f64,
        radius_deg: f64,
        inclusive: bool,
    ) -> HealpixResult<Vec<u64>> {
        if !(-90.0..=90.0).contains(&dec) {
            return Err(HealpixError::invalid_coordinate(format!(
                "disc center declination {} outside [-90, 90]",
                dec
            )));
        }
        let (theta, phi) = eq_to_ang(ra, dec);
        disc::query_disc(
            self.resolution,
            theta.clamp(0.0, PI),
            phi,
            radius_deg * DEG_TO_RAD,
            inclusive,
        )
    }

    /// Disc query with center and radius in radians.
    pub fn query_disc_ang(
        &self,
        theta: f64,
        phi: f64,
        radius: f64,
        inclusive: bool,
    ) -> HealpixResult<Vec<u64>> {
        disc::query_disc(self.resolution, theta, phi, radius, inclusive)
    }
}

impl fmt::Display for HealPix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scheme:      {}", self.scheme.id())?;
        writeln!(f, "scheme_name: {}", self.scheme_name())?;
        writeln!(f, "nside:       {}", self.nside())?;
        writeln!(f, "npix:        {}", self.npix())?;
        writeln!(f, "ncap:        {}", self.ncap())?;
        write!(
            f,
            "area:        {:e} sr ({:.6} sq deg)",
            self.area(),
            self.area() * SQ_DEG_PER_SR
        )
    }
}

fn map_pairs<F>(
    left: &[f64],
    right: &[f64],
    names: (&'static str, &'static str),
    f: F,
) -> HealpixResult<Vec<u64>>
where
    F: Fn(f64, f64) -> u64 + Sync + Send,
{
    if left.len() != right.len() {
        return Err(HealpixError::shape_mismatch(
            names.0,
            names.1,
            left.len(),
            right.len(),
        ));
    }

    #[cfg(feature = "parallel")]
    let pixels = left
        .par_iter()
        .zip(right.par_iter())
        .map(|(&a, &b)| f(a, b))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let pixels = left.iter().zip(right).map(|(&a, &b)| f(a, b)).collect();

    Ok(pixels)
}

fn map_pixels<F>(pixels: &[u64], f: F) -> HealpixResult<(Vec<f64>, Vec<f64>)>
where
    F: Fn(u64) -> HealpixResult<(f64, f64)> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let pairs: Vec<(f64, f64)> = pixels
        .par_iter()
        .map(|&p| f(p))
        .collect::<HealpixResult<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let pairs: Vec<(f64, f64)> = pixels
        .iter()
        .map(|&p| f(p))
        .collect::<HealpixResult<_>>()?;

    Ok(pairs.into_iter().unzip())
}
