use anyhow::{Context, Result};
use logdepth_compute::DepthBuffer;
use std::fs;
use std::path::Path;

/// Load a raw `width` x `height` f32 depth buffer from disk.
pub fn load_depth_file(path: &Path, width: u32, height: u32) -> Result<DepthBuffer> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to open depth file {}", path.display()))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    DepthBuffer::from_ne_bytes(&bytes, width, height)
        .with_context(|| format!("failed to load depth file {}", path.display()))
}
