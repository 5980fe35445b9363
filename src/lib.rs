//! Defog — per-frame video dehazing and enhancement.
//!
//! Removes atmospheric haze from live video frames using a simplified
//! single-scattering model, widens perceptual contrast via histogram
//! equalization, and suppresses enhancement artifacts with an
//! edge-preserving bilateral filter.
//!
//! # Architecture
//!
//! Each frame flows one way through the pipeline with no cross-frame state:
//!
//! ```text
//! capture → enhance → denoise → dehaze → resize → mirror → display
//!                                  ↓
//!               normalize → light → transmission → recovery
//! ```
//!
//! # Design Principles
//!
//! - **Frame-at-a-time**: synchronous, pull-based, no temporal filtering
//! - **Injected collaborators**: capture and display are traits, never globals
//! - **Numerical guards are explicit**: degenerate atmospheric light is
//!   clamped to a small epsilon, not left to produce non-finite values
//! - **Per-frame failures stay local**: a bad frame is logged and passed
//!   through; the stream keeps running
//!
//! # Example
//!
//! ```
//! use defog::{
//!     capture::MockSource,
//!     display::CollectSink,
//!     params::DehazeParams,
//!     pipeline::Orchestrator,
//! };
//!
//! let mut source = MockSource::new(64, 48, 5);
//! let mut sink = CollectSink::new();
//!
//! let mut orchestrator = Orchestrator::new(DehazeParams::default(), (64, 48)).unwrap();
//! let summary = orchestrator.run(&mut source, &mut sink).unwrap();
//!
//! assert_eq!(summary.processed, 5);
//! assert_eq!(sink.frames().len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod capture;
pub mod dehaze;
pub mod display;
pub mod enhance;
pub mod params;
pub mod pipeline;

// Re-export commonly used types at crate root
pub use capture::{Frame, FrameError, FrameSource, MockSource, SourceError, VecSource};
pub use dehaze::{dehaze, DehazeError, Dehazer, LightEstimator, PercentileEstimator};
pub use display::{CollectSink, FrameSink, NullSink, SinkError};
pub use enhance::enhance;
pub use params::{DehazeParams, ParamError};
pub use pipeline::{FrameFailurePolicy, Orchestrator, PipelineError, PipelineState, RunSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
