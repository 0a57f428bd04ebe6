//! Per-image pixel generation.
//!
//! Source rows are visited from the bottom (`height - 1`) up and written to
//! the output top-down in visit order, so the emitted image is the source
//! flipped vertically. Reference images depend on this order.

use crate::precision::RenderParams;
use crate::shading::shade_eye_point;
use logdepth_core::{
    clip_to_eye, is_far_plane, reverse_log_depth, DepthBuffer, PixelBuffer, Real, Vec2,
    SENTINEL_PIXEL,
};

/// Shade one source pixel at column `x` of source row `row`.
pub fn shade_sample<T: Real>(
    log_z: f32,
    x: u32,
    row: u32,
    width: u32,
    height: u32,
    params: &RenderParams<T>,
) -> [u8; 4] {
    let device_z = reverse_log_depth(
        T::from_f32(log_z),
        params.near,
        params.far,
        params.log2_far_depth_from_near_plus_one,
    );

    if is_far_plane(device_z) {
        return SENTINEL_PIXEL;
    }

    let uv = Vec2::pixel_center(x, row, width, height);
    let eye = clip_to_eye(uv, device_z, &params.inverse_projection);
    shade_eye_point(eye, params.max_distance_km)
}

/// Render the distance visualization of `depth` evaluated in `T`.
///
/// The output has exactly `width * height * 4` bytes.
pub fn generate_pixels<T: Real>(depth: &DepthBuffer, params: &RenderParams<T>) -> PixelBuffer {
    let width = depth.width();
    let height = depth.height();
    let mut pixels = PixelBuffer::matching(depth);

    for (out_row, row) in (0..height).rev().enumerate() {
        for x in 0..width {
            let rgba = shade_sample(depth.get(x, row), x, row, width, height, params);
            pixels.set_pixel(x, out_row as u32, rgba);
        }
    }

    log::debug!(
        "{} pass: {}x{} pixels, {} beyond the far-plane threshold",
        T::NAME,
        width,
        height,
        pixels.sentinel_count()
    );

    pixels
}
