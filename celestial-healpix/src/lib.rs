//! Ring-scheme HEALPix pixelization of the sphere.
//!
//! HEALPix splits the sphere into `12 * nside^2` equal-area pixels laid out on
//! `4 * nside - 1` iso-latitude rings. In the ring scheme pixels are numbered
//! ring by ring from the north pole, west to east inside each ring. This crate
//! maps positions to pixels and back, and finds the pixels covered by a disc.
//!
//! Everything is closed-form arithmetic on a validated [`Resolution`]: no
//! lookup tables, no shared state, no I/O. All values are `Copy` and every
//! operation is safe to call from any thread.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`resolution`] | [`Resolution`] (validated `nside`), `npix`/`nside` helpers, [`max_pixrad`](Resolution::max_pixrad) |
//! | [`ring`] | Ring geometry ([`Ring`]), [`ang2pix`], [`pix2ang`], [`ring_above`](Resolution::ring_above) |
//! | [`disc`] | [`query_disc`] ring walk, exact and inclusive |
//! | [`angle`] | `(ra, dec)` degrees to `(theta, phi)` radians and back |
//! | [`healpix`] | [`HealPix`] facade with scalar and batch entry points |
//! | [`scheme`] | [`Scheme`] names and ids |
//! | [`error`] | [`HealpixError`], [`HealpixResult`] |
//! | [`math`] | Angle wrapping, integer square root, Vincenty separation |
//! | [`constants`] | Angular constants and resolution limits |
//!
//! # Quick Start
//!
//! ```
//! use celestial_healpix::{DiscCenter, HealPix};
//!
//! let hp = HealPix::ring(64)?;
//!
//! let pixel = hp.eq2pix(83.633, -5.375);
//! let (ra, dec) = hp.pix2eq(pixel)?;
//! assert_eq!(hp.eq2pix(ra, dec), pixel);
//!
//! let covered = hp.query_disc(DiscCenter::Equatorial { ra: 83.633, dec: -5.375 }, 2.0, true)?;
//! assert!(covered.contains(&pixel));
//! # Ok::<(), celestial_healpix::HealpixError>(())
//! ```
//!
//! # Conventions
//!
//! - `theta` is colatitude in `[0, pi]` (0 at the north pole), `phi` is
//!   azimuth in radians; any finite `phi` is accepted and wrapped.
//! - `ra` and `dec` are in degrees; `ra = phi·180/π` and
//!   `dec = 90° − theta·180/π`.
//! - Disc results are sorted ascending with no duplicates.
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`Resolution`] and [`Scheme`].
//! - **`parallel`**: batch entry points run on rayon's global pool.
//! - **`cli`**: the `query-healpix` binary.

pub mod angle;
pub mod constants;
pub mod disc;
pub mod error;
pub mod healpix;
pub mod math;
pub mod resolution;
pub mod ring;
pub mod scheme;

pub use angle::{ang_to_eq, eq_to_ang};
pub use disc::query_disc;
pub use error::{HealpixError, HealpixResult};
pub use healpix::{DiscCenter, HealPix};
pub use resolution::{npix2nside, npix_is_ok, nside2npix, nside_is_ok, Resolution};
pub use ring::{ang2pix, pix2ang, Ring};
pub use scheme::Scheme;
