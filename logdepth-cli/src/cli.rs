//! Command line definition and configuration resolution.

use anyhow::{bail, Context, Result};
use clap::Parser;
use logdepth_compute::{get_preset, Precision, ProbeConfig};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "logdepth-probe",
    version,
    about = "Reconstruct eye-space distance from a reverse log-depth buffer in double and single precision",
    long_about = "Reconstruct eye-space distance from a reverse log-depth buffer and render it as a \
                  grayscale PNG, once with every step in f64 and once in f32, to expose precision \
                  loss near the far plane. Pixels past the far-plane threshold are magenta."
)]
pub struct Cli {
    /// Raw depth buffer: native-endian f32 samples, row-major, top row first
    #[arg(short, long, value_name = "FILE", required_unless_present = "print_config")]
    pub depth: Option<PathBuf>,

    /// JSON configuration file (replaces the preset)
    #[arg(short, long, value_name = "FILE", env = "LOGDEPTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in configuration preset used when no config file is given
    #[arg(long, default_value = "reference")]
    pub preset: String,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Near clip plane (meters)
    #[arg(long)]
    pub near: Option<f64>,

    /// Far clip plane (meters)
    #[arg(long)]
    pub far: Option<f64>,

    /// log2(far - near + 1) used by the encoder; derived from near/far when
    /// neither this flag nor the config sets it
    #[arg(long = "log2-constant", value_name = "VALUE")]
    pub log2_constant: Option<f64>,

    /// Eye distance in kilometers shaded as white
    #[arg(long, value_name = "KM")]
    pub max_distance_km: Option<f64>,

    /// Output PNG for the double precision render
    #[arg(long, value_name = "FILE", default_value = Precision::Double.default_file_name())]
    pub out_double: PathBuf,

    /// Output PNG for the single precision render
    #[arg(long, value_name = "FILE", default_value = Precision::Single.default_file_name())]
    pub out_single: PathBuf,

    /// Also write a PNG highlighting where the two renders differ
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Write the divergence report as JSON
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the base configuration, apply flag overrides and validate.
    pub fn resolve_config(&self) -> Result<ProbeConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => match get_preset(&self.preset) {
                Some(config) => config,
                None => bail!("unknown preset '{}'", self.preset),
            },
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(near) = self.near {
            config.near = near;
        }
        if let Some(far) = self.far {
            config.far = far;
        }
        if self.log2_constant.is_some() {
            config.log2_far_depth_from_near_plus_one = self.log2_constant;
        } else if self.config.is_none() && (self.near.is_some() || self.far.is_some()) {
            // Preset constant belongs to the preset planes.
            config.log2_far_depth_from_near_plus_one = None;
        }
        if let Some(max_distance_km) = self.max_distance_km {
            config.max_distance_km = max_distance_km;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn load_config_file(path: &Path) -> Result<ProbeConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    ProbeConfig::from_json_str(&json)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}
