#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Wraps an angle in radians to `[0, 2π)`.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, crate::constants::TWOPI);
    let w = if w < 0.0 { w + crate::constants::TWOPI } else { w };
    // fmod of a tiny negative value rounds back up to exactly 2π
    if w >= crate::constants::TWOPI {
        0.0
    } else {
        w
    }
}

/// Floor of the square root of `v`, exact for every `u64`.
pub fn isqrt(v: u64) -> u64 {
    let mut r = libm::sqrt(v as f64) as u64;
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > v) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= v) {
        r += 1;
    }
    r
}

#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

/// Angular distance in radians between two `(theta, phi)` directions.
///
/// Colatitudes are turned into latitudes so the Vincenty form stays accurate
/// for both tiny and near-antipodal separations.
pub fn angular_distance(theta1: f64, phi1: f64, theta2: f64, phi2: f64) -> f64 {
    let (cos_lat1, sin_lat1) = libm::sincos(theta1);
    let (cos_lat2, sin_lat2) = libm::sincos(theta2);
    vincenty_angular_separation(sin_lat1, cos_lat1, sin_lat2, cos_lat2, phi2 - phi1)
}
