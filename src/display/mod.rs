//! Display output and quit signaling.
//!
//! The sink is the pipeline's second external collaborator: it presents
//! processed frames and reports a user-requested quit, polled once per
//! frame boundary. Windowing backends live outside this crate.

mod sink;

pub use sink::{CollectSink, FrameSink, NullSink, SinkError};
