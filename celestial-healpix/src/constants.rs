#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const QUARTER_PI: f64 = 0.7853981633974483096156608;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const INV_HALF_PI: f64 = 0.6366197723675813430755351;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Square degrees in one steradian.
pub const SQ_DEG_PER_SR: f64 = RAD_TO_DEG * RAD_TO_DEG;

/// `|z|` of the boundary between the polar caps and the equatorial belt.
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Largest supported order; `12 * 4^29` still fits comfortably in a `u64`.
pub const MAX_ORDER: u32 = 29;

pub const MAX_NSIDE: u64 = 1 << MAX_ORDER;
