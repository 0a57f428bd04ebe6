//! Pixel-level comparison of the double and single precision renders.

use logdepth_core::{CoreError, PixelBuffer, SENTINEL_PIXEL};
use serde::{Deserialize, Serialize};

/// Gain applied to channel differences in the diff image, so one-level
/// truncation flips stay visible.
pub const DIFF_GAIN: u8 = 32;

/// Diff-image color where only one render marked the pixel as far plane.
pub const SENTINEL_MISMATCH_PIXEL: [u8; 4] = [0, 255, 0, 255];

/// Summary of how far two renders of the same depth buffer drifted apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DivergenceReport {
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
    /// Pixels whose RGBA bytes differ at all
    pub differing_pixels: usize,
    /// Pixels that are the far-plane sentinel in exactly one render
    pub sentinel_mismatches: usize,
    /// Largest absolute gray difference among pixels shaded in both renders
    pub max_channel_delta: u8,
    /// Mean absolute gray difference among pixels shaded in both renders
    pub mean_channel_delta: f64,
}

impl DivergenceReport {
    pub fn is_identical(&self) -> bool {
        self.differing_pixels == 0
    }

    /// Fraction of pixels that differ, in [0, 1].
    pub fn differing_fraction(&self) -> f64 {
        if self.pixel_count == 0 {
            0.0
        } else {
            self.differing_pixels as f64 / self.pixel_count as f64
        }
    }
}

fn check_dimensions(left: &PixelBuffer, right: &PixelBuffer) -> Result<(), CoreError> {
    if left.width() != right.width() || left.height() != right.height() {
        return Err(CoreError::DimensionMismatch {
            left_width: left.width(),
            left_height: left.height(),
            right_width: right.width(),
            right_height: right.height(),
        });
    }
    Ok(())
}

/// Compare two renders of the same size.
pub fn compare_buffers(
    double: &PixelBuffer,
    single: &PixelBuffer,
) -> Result<DivergenceReport, CoreError> {
    check_dimensions(double, single)?;
    Ok(tally(double, single))
}

/// Build the comparison for buffers already known to share dimensions.
pub(crate) fn tally(double: &PixelBuffer, single: &PixelBuffer) -> DivergenceReport {
    let mut report = DivergenceReport {
        width: double.width(),
        height: double.height(),
        pixel_count: double.area(),
        ..Default::default()
    };
    let mut shaded_in_both = 0_usize;
    let mut delta_sum = 0_u64;

    for (a, b) in double.pixels().zip(single.pixels()) {
        if a != b {
            report.differing_pixels += 1;
        }
        match (a == SENTINEL_PIXEL, b == SENTINEL_PIXEL) {
            (true, true) => {}
            (false, false) => {
                let delta = gray_delta(a, b);
                shaded_in_both += 1;
                delta_sum += delta as u64;
                report.max_channel_delta = report.max_channel_delta.max(delta);
            }
            _ => report.sentinel_mismatches += 1,
        }
    }

    if shaded_in_both > 0 {
        report.mean_channel_delta = delta_sum as f64 / shaded_in_both as f64;
    }
    report
}

/// Largest per-channel RGB difference.
fn gray_delta(a: [u8; 4], b: [u8; 4]) -> u8 {
    (0..3).map(|c| a[c].abs_diff(b[c])).max().unwrap_or(0)
}

/// Visualize where two renders disagree.
///
/// Shaded pixels become gray at `delta * DIFF_GAIN` (saturating), sentinel
/// mismatches become [`SENTINEL_MISMATCH_PIXEL`], and pixels that are the
/// sentinel in both renders stay black.
pub fn diff_buffer(double: &PixelBuffer, single: &PixelBuffer) -> Result<PixelBuffer, CoreError> {
    check_dimensions(double, single)?;
    let mut diff = PixelBuffer::new(double.width(), double.height())?;

    for y in 0..double.height() {
        for x in 0..double.width() {
            let a = double.pixel(x, y);
            let b = single.pixel(x, y);
            let rgba = match (a == SENTINEL_PIXEL, b == SENTINEL_PIXEL) {
                (true, true) => [0, 0, 0, 255],
                (false, false) => {
                    let level = gray_delta(a, b).saturating_mul(DIFF_GAIN);
                    [level, level, level, 255]
                }
                _ => SENTINEL_MISMATCH_PIXEL,
            };
            diff.set_pixel(x, y, rgba);
        }
    }
    Ok(diff)
}
