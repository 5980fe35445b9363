//! Frame sink abstraction.

use crate::capture::Frame;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while presenting frames.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to present frame: {0}")]
    /// The underlying display rejected the frame.
    Present(String),
}

/// Trait for display sinks.
///
/// `quit_requested` is the sink-specific cancellation signal (historically a
/// keypress); the orchestrator polls it once per frame boundary. `close`
/// releases the display resource and is idempotent.
pub trait FrameSink {
    /// Presents one processed frame.
    fn present(&mut self, frame: &Frame) -> Result<(), SinkError>;

    /// Returns true once the user has asked to stop.
    fn quit_requested(&self) -> bool;

    /// Releases the display resource.
    fn close(&mut self);
}

/// Sink that discards frames, optionally honoring an external quit flag.
///
/// The flag is shared so a signal handler can request shutdown from another
/// thread.
#[derive(Debug, Default)]
pub struct NullSink {
    presented: u64,
    quit: Option<Arc<AtomicBool>>,
}

impl NullSink {
    /// Creates a sink with no quit signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that reports quit once `flag` is set.
    pub fn with_quit_flag(flag: Arc<AtomicBool>) -> Self {
        Self {
            presented: 0,
            quit: Some(flag),
        }
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl FrameSink for NullSink {
    fn present(&mut self, _frame: &Frame) -> Result<(), SinkError> {
        self.presented += 1;
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    fn close(&mut self) {
        tracing::info!(presented = self.presented, "NullSink closed");
    }
}

/// Sink that stores every presented frame, for tests and demos.
///
/// Can be scripted to request quit after a fixed number of frames.
#[derive(Debug, Default)]
pub struct CollectSink {
    frames: Vec<Frame>,
    quit_after: Option<usize>,
}

impl CollectSink {
    /// Creates an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that requests quit after collecting `n` frames.
    pub fn quit_after(n: usize) -> Self {
        Self {
            frames: Vec::new(),
            quit_after: Some(n),
        }
    }

    /// The frames presented so far, in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl FrameSink for CollectSink {
    fn present(&mut self, frame: &Frame) -> Result<(), SinkError> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit_after
            .map(|n| self.frames.len() >= n)
            .unwrap_or(false)
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(vec![0u8; 12], 2, 2, 1)
    }

    #[test]
    fn test_null_sink_counts() {
        let mut sink = NullSink::new();
        sink.present(&frame()).unwrap();
        sink.present(&frame()).unwrap();

        assert_eq!(sink.presented(), 2);
        assert!(!sink.quit_requested());
    }

    #[test]
    fn test_null_sink_quit_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let sink = NullSink::with_quit_flag(flag.clone());

        assert!(!sink.quit_requested());
        flag.store(true, Ordering::Relaxed);
        assert!(sink.quit_requested());
    }

    #[test]
    fn test_collect_sink_quit_after() {
        let mut sink = CollectSink::quit_after(2);
        sink.present(&frame()).unwrap();
        assert!(!sink.quit_requested());

        sink.present(&frame()).unwrap();
        assert!(sink.quit_requested());
        assert_eq!(sink.frames().len(), 2);
    }
}
