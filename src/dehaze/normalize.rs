//! Frame normalization to floating point.

use crate::capture::{Frame, CHANNELS};

/// A frame converted to double precision in [0, 1].
///
/// Same layout as [`Frame`] (interleaved BGR, row-major). Created once per
/// pipeline invocation and discarded after radiance recovery.
#[derive(Debug, Clone)]
pub struct NormalizedFrame {
    samples: Vec<f64>,
    width: u32,
    height: u32,
    sequence: u64,
}

impl NormalizedFrame {
    /// Converts an 8-bit frame; each sample becomes `raw / 255`.
    pub fn from_frame(frame: &Frame) -> Self {
        let samples = frame.pixels().iter().map(|&p| p as f64 / 255.0).collect();
        Self {
            samples,
            width: frame.width(),
            height: frame.height(),
            sequence: frame.sequence(),
        }
    }

    /// Returns the normalized samples, interleaved BGR.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns one sample; `pixel` is the flat pixel index.
    #[inline]
    pub fn sample(&self, pixel: usize, c: usize) -> f64 {
        self.samples[pixel * CHANNELS + c]
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

    /// Returns the sequence number inherited from the source frame.
    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}
