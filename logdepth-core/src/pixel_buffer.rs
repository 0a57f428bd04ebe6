use crate::depth_buffer::sample_count;
use crate::{CoreError, DepthBuffer};

/// Bytes per RGBA8 pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Opaque magenta marking pixels without reconstructable geometry.
pub const SENTINEL_PIXEL: [u8; 4] = [255, 0, 255, 255];

/// Tightly packed RGBA8 image, row-major, top row first.
///
/// The byte length always equals `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent black image.
    pub fn new(width: u32, height: u32) -> Result<Self, CoreError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Blank image with the dimensions of `depth`.
    ///
    /// Infallible: a depth buffer with valid dimensions already holds
    /// `width * height` four-byte samples, so the RGBA size fits as well.
    pub fn matching(depth: &DepthBuffer) -> Self {
        Self {
            width: depth.width(),
            height: depth.height(),
            data: vec![0; depth.samples().len() * RGBA_CHANNELS],
        }
    }

    /// Wrap bytes already laid out as RGBA8.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(CoreError::PixelLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels
    pub fn area(&self) -> usize {
        self.data.len() / RGBA_CHANNELS
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + RGBA_CHANNELS].copy_from_slice(&rgba);
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(RGBA_CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Count of pixels equal to [`SENTINEL_PIXEL`].
    pub fn sentinel_count(&self) -> usize {
        self.pixels().filter(|p| *p == SENTINEL_PIXEL).count()
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize, CoreError> {
    sample_count(width, height)?
        .checked_mul(RGBA_CHANNELS)
        .ok_or(CoreError::DimensionOverflow { width, height })
}
