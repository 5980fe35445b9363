//! Frame loop orchestration and presentation.
//!
//! Sequences the per-frame stages (enhance → denoise → dehaze → resize →
//! mirror → emit) over injected source and sink collaborators. Processing
//! is synchronous and frame-at-a-time with no cross-frame state, so
//! backpressure is implicit in the blocking capture call.

mod orchestrator;
mod present;

pub use orchestrator::{
    FrameFailurePolicy, Orchestrator, PipelineError, PipelineState, RunSummary,
};
pub use present::{mirror_horizontal, resize_nearest};
