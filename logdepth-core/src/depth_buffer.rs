use crate::CoreError;

/// Bytes per stored depth sample.
pub const DEPTH_SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Row-major log-depth samples, top row first.
///
/// The sample count always equals `width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(samples: Vec<f32>, width: u32, height: u32) -> Result<Self, CoreError> {
        let expected = sample_count(width, height)?;
        if samples.len() != expected {
            return Err(CoreError::DepthLengthMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Buffer where every sample holds `value`.
    pub fn filled(value: f32, width: u32, height: u32) -> Result<Self, CoreError> {
        let count = sample_count(width, height)?;
        Self::new(vec![value; count], width, height)
    }

    /// Decode native-endian `f32` samples from raw bytes.
    ///
    /// Only the first `width * height` samples are read; trailing bytes are
    /// ignored.
    pub fn from_ne_bytes(bytes: &[u8], width: u32, height: u32) -> Result<Self, CoreError> {
        let count = sample_count(width, height)?;
        let expected = count
            .checked_mul(DEPTH_SAMPLE_BYTES)
            .ok_or(CoreError::DimensionOverflow { width, height })?;
        if bytes.len() < expected {
            return Err(CoreError::TruncatedDepthData {
                expected,
                actual: bytes.len(),
            });
        }
        if bytes.len() > expected {
            log::debug!(
                "ignoring {} trailing bytes after {}x{} depth samples",
                bytes.len() - expected,
                width,
                height
            );
        }

        let samples = bytes[..expected]
            .chunks_exact(DEPTH_SAMPLE_BYTES)
            .map(bytemuck::pod_read_unaligned::<f32>)
            .collect();
        Self::new(samples, width, height)
    }

    /// Raw native-endian bytes, the inverse of [`DepthBuffer::from_ne_bytes`].
    pub fn as_ne_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.samples)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at column `x` of source row `row`.
    #[inline]
    pub fn get(&self, x: u32, row: u32) -> f32 {
        self.samples[row as usize * self.width as usize + x as usize]
    }
}

/// `width * height`, rejecting empty or overflowing dimensions.
pub(crate) fn sample_count(width: u32, height: u32) -> Result<usize, CoreError> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(CoreError::DimensionOverflow { width, height })
}
