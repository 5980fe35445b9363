//! Frame type representing one captured video image.

use thiserror::Error;

/// Number of color channels per pixel (interleaved BGR).
pub const CHANNELS: usize = 3;

/// A single 8-bit color frame.
///
/// Pixel data is interleaved BGR, row-major. Dimensions are fixed for the
/// lifetime of a capture session; every pipeline stage preserves them.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    /// Interleaved BGR samples, `width * height * 3` bytes.
    pixels: Vec<u8>,
    /// Frame width in pixels.
    width: u32,
    /// Frame height in pixels.
    height: u32,
    /// Monotonic sequence number, carried through the pipeline.
    sequence: u64,
}

/// Frame validation errors.
#[derive(Debug, Clone, Error)]
pub enum FrameError {
    #[error("frame has zero dimensions ({width}x{height})")]
    /// Width or height is zero.
    ZeroDimensions {
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
    },

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}x3")]
    /// Buffer length does not match the declared dimensions.
    BufferMismatch {
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
        /// Expected byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },
}

impl Frame {
    /// Creates a new frame with the given parameters.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, sequence: u64) -> Self {
        Self {
            pixels,
            width,
            height,
            sequence,
        }
    }

    /// Returns a reference to the raw pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the frame width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the sequence number.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the total number of pixels (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Returns one sample; `c` is the channel index within the BGR triple.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, c: usize) -> u8 {
        let idx = ((y as usize * self.width as usize) + x as usize) * CHANNELS + c;
        self.pixels[idx]
    }

    /// Validates dimensions and buffer size, refusing zero-sized frames.
    pub fn ensure_valid(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::ZeroDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.pixel_count() * CHANNELS;
        if self.pixels.len() != expected {
            return Err(FrameError::BufferMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("sequence", &self.sequence)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}
