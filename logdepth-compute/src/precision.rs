//! Precision modes and the per-mode render parameters.

use logdepth_core::{Mat4, ProbeConfig, Real};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Floating-point width a pipeline run is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Double,
    Single,
}

impl Precision {
    /// Default output file name for this mode.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Precision::Double => "a_double.png",
            Precision::Single => "a_float.png",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Double => f.write_str(<f64 as Real>::NAME),
            Precision::Single => f.write_str(<f32 as Real>::NAME),
        }
    }
}

/// Scalar inputs of one pipeline run, all in the run's width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams<T> {
    pub near: T,
    pub far: T,
    pub log2_far_depth_from_near_plus_one: T,
    pub inverse_projection: Mat4<T>,
    pub max_distance_km: T,
}

impl<T: Real> RenderParams<T> {
    /// Convert the configuration into `T`, narrowing every scalar and every
    /// matrix entry on its own.
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self {
            near: T::from_f64(config.near),
            far: T::from_f64(config.far),
            log2_far_depth_from_near_plus_one: T::from_f64(config.log2_constant()),
            inverse_projection: config.inverse_projection_matrix().cast(),
            max_distance_km: T::from_f64(config.max_distance_km),
        }
    }
}
