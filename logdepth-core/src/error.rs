//! Core error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("image dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image dimensions {width}x{height} overflow the addressable buffer size")]
    DimensionOverflow { width: u32, height: u32 },

    #[error("depth buffer holds {actual} samples but {expected} were expected")]
    DepthLengthMismatch { expected: usize, actual: usize },

    #[error("depth data is truncated: need {expected} bytes, got {actual}")]
    TruncatedDepthData { expected: usize, actual: usize },

    #[error("pixel buffer holds {actual} bytes but {expected} were expected")]
    PixelLengthMismatch { expected: usize, actual: usize },

    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f64, far: f64 },

    #[error("max distance must be a positive finite number of kilometers, got {max_distance_km}")]
    InvalidMaxDistance { max_distance_km: f64 },

    #[error("cannot compare a {left_width}x{left_height} image with a {right_width}x{right_height} image")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
