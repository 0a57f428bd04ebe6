//! Eye-space reconstruction from screen position and device depth.

use crate::{Mat4, Real, Vec2, Vec3, Vec4};

/// Lift a screen coordinate and device depth into homogeneous NDC.
pub fn ndc_from_uv_depth<T: Real>(uv: Vec2<T>, device_z: T) -> Vec4<T> {
    Vec4::new(
        uv.x * T::TWO - T::ONE,
        uv.y * T::TWO - T::ONE,
        device_z * T::TWO - T::ONE,
        T::ONE,
    )
}

/// Unproject `uv` at `device_z` through `inverse_projection` into eye space.
///
/// Every step runs in `T`. Near the far plane `w` approaches zero, which is
/// where `f32` and `f64` results part ways.
pub fn clip_to_eye<T: Real>(uv: Vec2<T>, device_z: T, inverse_projection: &Mat4<T>) -> Vec3<T> {
    let ndc = ndc_from_uv_depth(uv, device_z);
    inverse_projection.mul_vec4(ndc).perspective_divide().xyz()
}
