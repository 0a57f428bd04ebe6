//! Distance shading: eye-space point to grayscale byte.

use logdepth_core::{Real, Vec3};

/// Eye space is in meters; shading works in kilometers.
pub const METERS_TO_KILOMETERS: f64 = 0.001;

/// Clamp `t` to [0, 1] as `max(0, min(1, t))` with the comparisons written
/// out, so a NaN ratio saturates to 1 instead of propagating.
#[inline]
pub fn clamp_unit<T: Real>(t: T) -> T {
    let upper = if t < T::ONE { t } else { T::ONE };
    if T::ZERO < upper {
        upper
    } else {
        T::ZERO
    }
}

/// Normalized distance of an eye-space point (meters), clamped to [0, 1].
pub fn normalized_distance<T: Real>(eye: Vec3<T>, max_distance_km: T) -> T {
    let eye_km = eye.scale(T::from_f64(METERS_TO_KILOMETERS));
    clamp_unit(eye_km.magnitude() / max_distance_km)
}

/// Display byte for a normalized distance. Truncates, never rounds.
#[inline]
pub fn unit_to_byte<T: Real>(t: T) -> u8 {
    (t * T::from_f64(255.0)).trunc_to_u8()
}

/// Opaque gray pixel for an eye-space point.
pub fn shade_eye_point<T: Real>(eye: Vec3<T>, max_distance_km: T) -> [u8; 4] {
    let gray = unit_to_byte(normalized_distance(eye, max_distance_km));
    [gray, gray, gray, 255]
}
