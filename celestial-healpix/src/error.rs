//! Error type for pixelization operations.
//!
//! Every variant describes a caller-side input contract violation detected
//! before any computation starts. Operations are deterministic, so retrying
//! with the same input always fails the same way.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidResolution`](HealpixError::InvalidResolution) | [`Resolution::new`](crate::Resolution::new), [`HealPix::new`](crate::HealPix::new) |
//! | [`InvalidOrder`](HealpixError::InvalidOrder) | [`Resolution::from_order`](crate::Resolution::from_order) |
//! | [`InvalidPixelCount`](HealpixError::InvalidPixelCount) | [`npix2nside`](crate::npix2nside) |
//! | [`UnsupportedScheme`](HealpixError::UnsupportedScheme) | [`HealPix::new`](crate::HealPix::new) with [`Scheme::Nested`](crate::Scheme::Nested) |
//! | [`UnknownScheme`](HealpixError::UnknownScheme) | scheme name or id parsing |
//! | [`OutOfRange`](HealpixError::OutOfRange) | `pix2ang`, `pix2eq` |
//! | [`InvalidRadius`](HealpixError::InvalidRadius) | disc queries |
//! | [`InvalidCoordinate`](HealpixError::InvalidCoordinate) | disc queries with a non-finite or off-sphere center |
//! | [`ShapeMismatch`](HealpixError::ShapeMismatch) | batch entry points with paired inputs |

use thiserror::Error;

use crate::constants::MAX_ORDER;

pub type HealpixResult<T> = Result<T, HealpixError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HealpixError {
    #[error("Invalid resolution nside={nside}: {message}")]
    InvalidResolution { nside: u64, message: String },

    #[error("Invalid order {order}: exceeds maximum {max}")]
    InvalidOrder { order: u32, max: u32 },

    #[error("Invalid pixel count {npix}: not 12*nside^2 for a supported nside")]
    InvalidPixelCount { npix: u64 },

    #[error("Unsupported scheme '{scheme}': only the ring scheme is supported")]
    UnsupportedScheme { scheme: String },

    #[error("Unknown scheme '{name}'")]
    UnknownScheme { name: String },

    #[error("Pixel {pixel} out of range [0, {npix})")]
    OutOfRange { pixel: u64, npix: u64 },

    #[error("Invalid radius {radius}: must lie in [0, pi] radians")]
    InvalidRadius { radius: f64 },

    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("{left},{right} must have same size, got {left_len},{right_len}")]
    ShapeMismatch {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },
}

impl HealpixError {
    pub fn invalid_resolution(nside: u64, message: impl Into<String>) -> Self {
        Self::InvalidResolution {
            nside,
            message: message.into(),
        }
    }

    pub fn invalid_order(order: u32) -> Self {
        Self::InvalidOrder {
            order,
            max: MAX_ORDER,
        }
    }

    pub fn invalid_pixel_count(npix: u64) -> Self {
        Self::InvalidPixelCount { npix }
    }

    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }

    pub fn unknown_scheme(name: impl Into<String>) -> Self {
        Self::UnknownScheme { name: name.into() }
    }

    pub fn out_of_range(pixel: u64, npix: u64) -> Self {
        Self::OutOfRange { pixel, npix }
    }

    pub fn invalid_radius(radius: f64) -> Self {
        Self::InvalidRadius { radius }
    }

    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn shape_mismatch(
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    ) -> Self {
        Self::ShapeMismatch {
            left,
            right,
            left_len,
            right_len,
        }
    }
}
