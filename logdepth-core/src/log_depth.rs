//! Reverse logarithmic depth decoding.
//!
//! The renderer stores `log2(depth_from_near + 1) / log2(far - near + 1)`.
//! Decoding undoes the logarithm and maps the resulting distance from the
//! near plane back onto device depth in [0, 1].

use crate::Real;

/// Device depth at or above which a pixel is treated as "no geometry".
pub const FAR_PLANE_SENTINEL_DEPTH: f64 = 0.9999999;

/// The encoding constant `log2(far - near + 1)` for a near/far pair.
pub fn log2_far_depth_from_near_plus_one<T: Real>(near: T, far: T) -> T {
    (far - near + T::ONE).log2()
}

/// Decode a stored log-depth sample into device depth.
///
/// NaN and infinities are not special-cased; they flow into the result.
pub fn reverse_log_depth<T: Real>(
    log_z: T,
    near: T,
    far: T,
    log2_far_depth_from_near_plus_one: T,
) -> T {
    let log2_depth = log_z * log2_far_depth_from_near_plus_one;
    let depth_from_near = T::TWO.powf(log2_depth) - T::ONE;
    far * (T::ONE - near / (depth_from_near + near)) / (far - near)
}

/// Whether a decoded device depth lies in the far-plane region.
#[inline]
pub fn is_far_plane<T: Real>(device_z: T) -> bool {
    device_z >= T::from_f64(FAR_PLANE_SENTINEL_DEPTH)
}
