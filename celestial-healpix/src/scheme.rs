//! Pixel ordering schemes.
//!
//! Accepted spellings, matching the long-standing conventions of HEALPix tools:
//!
//! | Scheme | Names | Id |
//! |--------|-------|----|
//! | [`Scheme::Ring`] | `ring`, `RING` | 1 |
//! | [`Scheme::Nested`] | `nest`, `nested`, `NEST`, `NESTED` | 2 |
//!
//! Only the ring scheme has pixel arithmetic in this crate; nested is kept as
//! a value so requests for it can be rejected with a precise error.

use std::fmt;
use std::str::FromStr;

use crate::error::{HealpixError, HealpixResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Scheme {
    Ring,
    #[cfg_attr(feature = "serde", serde(rename = "nest", alias = "nested"))]
    Nested,
}

impl Scheme {
    pub const RING_ID: i64 = 1;
    pub const NEST_ID: i64 = 2;

    /// Numeric id used in map headers: 1 for ring, 2 for nested.
    pub fn id(self) -> i64 {
        match self {
            Scheme::Ring => Self::RING_ID,
            Scheme::Nested => Self::NEST_ID,
        }
    }

    /// Canonical lowercase name, `ring` or `nest`.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Ring => "ring",
            Scheme::Nested => "nest",
        }
    }

    /// Inverse of [`Scheme::id`].
    ///
    /// # Errors
    ///
    /// [`HealpixError::UnknownScheme`] for any id other than 1 or 2.
    pub fn from_id(id: i64) -> HealpixResult<Self> {
        match id {
            Self::RING_ID => Ok(Scheme::Ring),
            Self::NEST_ID => Ok(Scheme::Nested),
            other => Err(HealpixError::unknown_scheme(other.to_string())),
        }
    }
}

impl FromStr for Scheme {
    type Err = HealpixError;

    fn from_str(s: &str) -> HealpixResult<Self> {
        match s {
            "ring" | "RING" => Ok(Scheme::Ring),
            "nest" | "nested" | "NEST" | "NESTED" => Ok(Scheme::Nested),
            other => Err(HealpixError::unknown_scheme(other)),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
