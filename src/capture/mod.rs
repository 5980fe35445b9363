//! Video input and frame handling.
//!
//! This module provides the frame type shared by every pipeline stage and a
//! trait-based abstraction over frame sources, so real capture hardware and
//! synthetic sources for testing are interchangeable. The source is treated
//! as an external collaborator that owns the device; the pipeline only
//! borrows frames.

mod frame;
mod source;

pub use frame::{Frame, FrameError, CHANNELS};
pub use source::{FrameSource, MockSource, SourceError, VecSource};
