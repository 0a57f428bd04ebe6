pub mod config;
pub mod depth_buffer;
pub mod error;
pub mod log_depth;
pub mod matrix;
pub mod pixel_buffer;
pub mod real;
pub mod reconstruct;
pub mod vector;

pub use config::{get_preset, ProbeConfig, DEFAULT_MAX_DISTANCE_KM, REFERENCE_CONFIG};
pub use depth_buffer::{DepthBuffer, DEPTH_SAMPLE_BYTES};
pub use error::CoreError;
pub use log_depth::{
    is_far_plane, log2_far_depth_from_near_plus_one, reverse_log_depth, FAR_PLANE_SENTINEL_DEPTH,
};
pub use matrix::Mat4;
pub use pixel_buffer::{PixelBuffer, RGBA_CHANNELS, SENTINEL_PIXEL};
pub use real::Real;
pub use reconstruct::{clip_to_eye, ndc_from_uv_depth};
pub use vector::{Vec2, Vec3, Vec4};
