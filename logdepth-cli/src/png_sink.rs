//! PNG output for rendered pixel buffers.

use anyhow::{ensure, Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use logdepth_compute::{ImageSink, PixelBuffer, Precision, RGBA_CHANNELS};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Write a tightly packed RGBA8 buffer as PNG.
pub fn write_png_rgba8(path: &Path, pixels: &PixelBuffer) -> Result<()> {
    let expected = pixels.width() as usize * pixels.height() as usize * RGBA_CHANNELS;
    ensure!(
        pixels.as_bytes().len() == expected,
        "PNG writer requires tight RGBA8 buffer: expected {} bytes, got {}",
        expected,
        pixels.as_bytes().len()
    );

    let file = File::create(path)
        .with_context(|| format!("failed to create output PNG at {}", path.display()))?;

    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Default,
        FilterType::Adaptive,
    );
    encoder
        .write_image(
            pixels.as_bytes(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("failed to encode RGBA8 PNG {}", path.display()))?;

    Ok(())
}

/// Writes each precision's render to its own file.
pub struct PngSink {
    double_path: PathBuf,
    single_path: PathBuf,
}

impl PngSink {
    pub fn new(double_path: PathBuf, single_path: PathBuf) -> Self {
        Self {
            double_path,
            single_path,
        }
    }

    pub fn path(&self, precision: Precision) -> &Path {
        match precision {
            Precision::Double => &self.double_path,
            Precision::Single => &self.single_path,
        }
    }
}

impl ImageSink for PngSink {
    type Error = anyhow::Error;

    fn write_image(&mut self, precision: Precision, pixels: &PixelBuffer) -> Result<()> {
        let path = self.path(precision);
        write_png_rgba8(path, pixels)?;
        log::info!(
            "wrote {} render ({}x{}) to {}",
            precision,
            pixels.width(),
            pixels.height(),
            path.display()
        );
        Ok(())
    }
}
