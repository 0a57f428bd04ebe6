pub mod divergence;
pub mod generator;
pub mod harness;
pub mod precision;
pub mod shading;

pub use divergence::{compare_buffers, diff_buffer, DivergenceReport};
pub use generator::{generate_pixels, shade_sample};
pub use harness::{render_with_precision, run_dual_precision, DualPrecisionOutput, ImageSink};
pub use precision::{Precision, RenderParams};
pub use shading::{clamp_unit, shade_eye_point, METERS_TO_KILOMETERS};

// Re-export core types for convenience
pub use logdepth_core::*;
