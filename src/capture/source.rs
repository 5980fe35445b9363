//! Frame source abstraction.
//!
//! A source supplies a sequence of frames of constant dimensions and signals
//! end of stream by returning `None` rather than erroring. Real device
//! backends live outside this crate; the implementations here exist for
//! demonstration and testing.

use super::{Frame, CHANNELS};
use thiserror::Error;

/// Errors that can occur while pulling frames.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source device failed: {0}")]
    /// The underlying device reported a fault.
    Device(String),

    #[error("source already closed")]
    /// `capture` was called after `close`.
    Closed,
}

/// Trait for frame sources.
///
/// `capture` blocks until the next frame is available and returns `None`
/// once the stream is exhausted. Implementations own the capture resource;
/// `close` releases it and is idempotent.
pub trait FrameSource {
    /// Pulls the next frame, or `None` at end of stream.
    fn capture(&mut self) -> Result<Option<Frame>, SourceError>;

    /// Releases the capture resource.
    fn close(&mut self);
}

/// Synthetic source producing hazy gradient frames.
///
/// Generates a horizontal luminance ramp blended toward white, imitating a
/// uniform haze veil, with a per-frame phase shift so consecutive frames
/// differ. Useful for running the full pipeline without camera hardware.
#[derive(Debug)]
pub struct MockSource {
    width: u32,
    height: u32,
    remaining: u32,
    sequence: u64,
    closed: bool,
}

impl MockSource {
    /// Creates a source that yields `frames` frames of `width` x `height`.
    pub fn new(width: u32, height: u32, frames: u32) -> Self {
        Self {
            width,
            height,
            remaining: frames,
            sequence: 0,
            closed: false,
        }
    }
}

impl FrameSource for MockSource {
    fn capture(&mut self) -> Result<Option<Frame>, SourceError> {
        if self.closed {
            return Err(SourceError::Closed);
        }
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        self.sequence += 1;

        let w = self.width as usize;
        let h = self.height as usize;
        let mut pixels = Vec::with_capacity(w * h * CHANNELS);
        let phase = (self.sequence * 7) as usize;

        for y in 0..h {
            for x in 0..w {
                // Horizontal ramp, shifted per frame, then veiled with 40% white.
                let ramp = (((x + phase) % w) * 255 / w.max(1)) as f64;
                let shade = ((y * 31) % 64) as f64;
                let base = (ramp * 0.75 + shade).min(255.0);
                let hazed = (base * 0.6 + 255.0 * 0.4) as u8;
                pixels.extend_from_slice(&[hazed, hazed, hazed.saturating_sub(8)]);
            }
        }

        Ok(Some(Frame::new(pixels, self.width, self.height, self.sequence)))
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            tracing::info!("MockSource closed");
        }
    }
}

/// Source backed by a pre-built list of frames, for tests.
#[derive(Debug)]
pub struct VecSource {
    frames: std::vec::IntoIter<Frame>,
    closed: bool,
}

impl VecSource {
    /// Creates a source that yields the given frames in order.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into_iter(),
            closed: false,
        }
    }
}

impl FrameSource for VecSource {
    fn capture(&mut self) -> Result<Option<Frame>, SourceError> {
        if self.closed {
            return Err(SourceError::Closed);
        }
        Ok(self.frames.next())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
