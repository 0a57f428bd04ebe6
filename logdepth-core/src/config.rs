//! Probe configuration.
//!
//! Everything the reconstruction needs besides the depth samples: image size,
//! clip planes, the log-depth encoding constant and the inverse projection.
//! All scalars are kept in `f64`; single-precision runs narrow them later.

use crate::log_depth::log2_far_depth_from_near_plus_one;
use crate::{CoreError, Mat4};
use serde::{Deserialize, Serialize};

/// Distance in kilometers mapped to full white.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 26.0;

/// Tolerance before a supplied log2 constant is reported as inconsistent
/// with near/far.
const LOG2_CONSTANT_TOLERANCE: f64 = 1e-6;

fn default_max_distance_km() -> f64 {
    DEFAULT_MAX_DISTANCE_KM
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Near clip plane distance (meters)
    pub near: f64,
    /// Far clip plane distance (meters)
    pub far: f64,
    /// `log2(far - near + 1)` as used by the encoder. Derived from near/far
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log2_far_depth_from_near_plus_one: Option<f64>,
    /// Inverse projection matrix, column-major
    pub inverse_projection: [f64; 16],
    /// Eye distance (km) shaded as full white
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,
}

#[rustfmt::skip]
const REFERENCE_INVERSE_PROJECTION: [f64; 16] = [
    0.5773502691896256, 0.0, 0.0, 0.0,
    0.0, 0.29138146398163917, 0.0, 0.0,
    0.0, 0.0, 0.0, -4.999999938724671,
    0.0, 0.0, -0.9999999999999999, 5.000000061275326,
];

/// Settings of the 1920x969 reference capture.
pub const REFERENCE_CONFIG: ProbeConfig = ProbeConfig {
    width: 1920,
    height: 969,
    near: 0.1,
    far: 8159891.0,
    log2_far_depth_from_near_plus_one: Some(22.960118609221073),
    inverse_projection: REFERENCE_INVERSE_PROJECTION,
    max_distance_km: DEFAULT_MAX_DISTANCE_KM,
};

impl Default for ProbeConfig {
    fn default() -> Self {
        REFERENCE_CONFIG
    }
}

impl ProbeConfig {
    pub fn reference() -> Self {
        REFERENCE_CONFIG
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The log2 encoding constant, supplied or derived.
    pub fn log2_constant(&self) -> f64 {
        self.log2_far_depth_from_near_plus_one
            .unwrap_or_else(|| log2_far_depth_from_near_plus_one(self.near, self.far))
    }

    pub fn inverse_projection_matrix(&self) -> Mat4<f64> {
        Mat4::from_column_major(self.inverse_projection)
    }

    /// Reject configurations the pipeline cannot sensibly run with.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        // Written so NaN planes fail too.
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(CoreError::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        if !(self.max_distance_km.is_finite() && self.max_distance_km > 0.0) {
            return Err(CoreError::InvalidMaxDistance {
                max_distance_km: self.max_distance_km,
            });
        }

        if let Some(supplied) = self.log2_far_depth_from_near_plus_one {
            let derived = log2_far_depth_from_near_plus_one(self.near, self.far);
            if (supplied - derived).abs() > LOG2_CONSTANT_TOLERANCE {
                log::warn!(
                    "log2 constant {supplied} does not match near/far (expected {derived}); \
                     decoding with the supplied value"
                );
            }
        }
        Ok(())
    }
}

/// Look up a named configuration preset.
pub fn get_preset(id: &str) -> Option<ProbeConfig> {
    match id {
        "reference" => Some(REFERENCE_CONFIG),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_matrix_is_column_major() {
        let m = ProbeConfig::reference().inverse_projection_matrix();
        assert_eq!(m.get(0, 0), 0.5773502691896256);
        assert_eq!(m.get(1, 1), 0.29138146398163917);
        assert_eq!(m.get(3, 2), -0.9999999999999999);
        assert_eq!(m.get(2, 3), -4.999999938724671);
        assert_eq!(m.get(3, 3), 5.000000061275326);
    }

    #[test]
    fn test_reference_validates() {
        assert!(ProbeConfig::reference().validate().is_ok());
    }

    #[test]
    fn test_log2_constant_is_derived_when_missing() {
        let mut config = ProbeConfig::reference();
        config.log2_far_depth_from_near_plus_one = None;
        assert!((config.log2_constant() - 22.960118609221073).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_inverted_planes() {
        let mut config = ProbeConfig::reference();
        config.near = 10.0;
        config.far = 1.0;
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidClipPlanes { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_planes() {
        let mut config = ProbeConfig::reference();
        config.far = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_max_distance() {
        for max_distance_km in [0.0, -26.0, f64::NAN, f64::INFINITY] {
            let config = ProbeConfig {
                max_distance_km,
                ..ProbeConfig::reference()
            };
            assert!(
                matches!(config.validate(), Err(CoreError::InvalidMaxDistance { .. })),
                "accepted max distance {max_distance_km}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_image() {
        let mut config = ProbeConfig::reference();
        config.height = 0;
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidDimensions { width: 1920, height: 0 })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ProbeConfig::reference();
        let json = config.to_json_pretty().unwrap();
        let restored = ProbeConfig::from_json_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_json_defaults_optional_fields() {
        let json = r#"{
            "width": 4,
            "height": 2,
            "near": 1.0,
            "far": 100.0,
            "inverse_projection": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]
        }"#;
        let config = ProbeConfig::from_json_str(json).unwrap();
        assert_eq!(config.max_distance_km, DEFAULT_MAX_DISTANCE_KM);
        assert_eq!(config.log2_far_depth_from_near_plus_one, None);
        assert!((config.log2_constant() - 100.0_f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_json_rejects_short_matrix() {
        let json = r#"{"width":1,"height":1,"near":1.0,"far":2.0,"inverse_projection":[1,0,0]}"#;
        assert!(matches!(
            ProbeConfig::from_json_str(json),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_get_preset_finds_reference() {
        assert_eq!(get_preset("reference"), Some(ProbeConfig::reference()));
        assert_eq!(get_preset("unknown"), None);
    }
}
