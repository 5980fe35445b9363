//! Pipeline orchestration.
//!
//! Drives the blocking frame loop: pull a frame from the injected source,
//! run enhancement and dehazing, apply the presentation transforms, hand
//! the result to the injected sink, and poll for quit. The loop is an
//! explicit state machine rather than a break-driven `loop`; the terminal
//! state releases both collaborators exactly once on every exit path.

use super::present::{mirror_horizontal, resize_nearest};
use crate::capture::{Frame, FrameError, FrameSource, SourceError};
use crate::dehaze::Dehazer;
use crate::display::{FrameSink, SinkError};
use crate::enhance::enhance;
use crate::params::{DehazeParams, ParamError};
use thiserror::Error;

/// Orchestrator lifecycle states.
///
/// `Running` pulls and processes frames, `Draining` has observed quit or
/// end of stream and pulls no more, `Stopped` has released the
/// collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Actively pulling and processing frames.
    Running,
    /// Stop observed; no further frames are requested.
    Draining,
    /// Collaborators released; terminal.
    Stopped,
}

/// What to do when a single frame fails to process.
///
/// Failures are local to the frame either way; `Passthrough` keeps the
/// stream alive by emitting the raw frame unprocessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFailurePolicy {
    /// Log, emit the raw frame, continue. The default.
    #[default]
    Passthrough,
    /// Abort the run with the frame error.
    Halt,
}

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames fully processed and presented.
    pub processed: u64,
    /// Frames emitted raw under the passthrough policy.
    pub passed_through: u64,
}

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The frame source failed.
    #[error("frame source failed: {0}")]
    Source(#[from] SourceError),

    /// The display sink failed.
    #[error("display sink failed: {0}")]
    Sink(#[from] SinkError),

    /// A frame failed to process under the halt policy.
    #[error("frame rejected: {0}")]
    Frame(#[from] FrameError),
}

/// Synchronous frame-at-a-time pipeline driver.
///
/// Owns no capture or display resources itself; both are injected per run
/// and released when the run reaches `Stopped`.
#[derive(Debug)]
pub struct Orchestrator {
    dehazer: Dehazer,
    output_width: u32,
    output_height: u32,
    mirror: bool,
    policy: FrameFailurePolicy,
    state: PipelineState,
}

impl Orchestrator {
    /// Creates an orchestrator emitting `output` sized frames, with
    /// mirroring on and the passthrough failure policy.
    pub fn new(params: DehazeParams, output: (u32, u32)) -> Result<Self, ParamError> {
        Ok(Self {
            dehazer: Dehazer::new(params)?,
            output_width: output.0,
            output_height: output.1,
            mirror: true,
            policy: FrameFailurePolicy::default(),
            state: PipelineState::Stopped,
        })
    }

    /// Disables the horizontal mirror on emitted frames.
    pub fn without_mirror(mut self) -> Self {
        self.mirror = false;
        self
    }

    /// Sets the per-frame failure policy.
    pub fn with_failure_policy(mut self, policy: FrameFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Runs the frame loop until end of stream, quit, or a fatal error.
    ///
    /// The source and sink are closed exactly once before this returns,
    /// including on error paths.
    pub fn run(
        &mut self,
        source: &mut dyn FrameSource,
        sink: &mut dyn FrameSink,
    ) -> Result<RunSummary, PipelineError> {
        self.state = PipelineState::Running;
        tracing::info!(
            output_width = self.output_width,
            output_height = self.output_height,
            "pipeline started"
        );

        let mut summary = RunSummary::default();
        let result = self.pump(source, sink, &mut summary);
        self.shutdown(source, sink);

        tracing::info!(
            processed = summary.processed,
            passed_through = summary.passed_through,
            "pipeline stopped"
        );
        result.map(|()| summary)
    }

    /// The steady-state loop: await frame → enhance → dehaze → resize →
    /// mirror → emit, polling quit once per frame boundary.
    fn pump(
        &mut self,
        source: &mut dyn FrameSource,
        sink: &mut dyn FrameSink,
        summary: &mut RunSummary,
    ) -> Result<(), PipelineError> {
        while self.state == PipelineState::Running {
            if sink.quit_requested() {
                tracing::info!("quit requested");
                self.state = PipelineState::Draining;
                break;
            }

            let frame = match source.capture()? {
                Some(frame) => frame,
                None => {
                    tracing::info!("end of stream");
                    self.state = PipelineState::Draining;
                    break;
                }
            };

            match self.process(&frame) {
                Ok(processed) => {
                    sink.present(&processed)?;
                    summary.processed += 1;
                }
                Err(err) => match self.policy {
                    FrameFailurePolicy::Passthrough => {
                        tracing::warn!(
                            sequence = frame.sequence(),
                            error = %err,
                            "frame failed, emitting raw"
                        );
                        sink.present(&frame)?;
                        summary.passed_through += 1;
                    }
                    FrameFailurePolicy::Halt => {
                        self.state = PipelineState::Draining;
                        return Err(err.into());
                    }
                },
            }
        }
        Ok(())
    }

    /// Processes one frame through every stage.
    fn process(&self, frame: &Frame) -> Result<Frame, FrameError> {
        let enhanced = enhance(frame)?;
        let dehazed = self.dehazer.dehaze(&enhanced)?;
        let resized = resize_nearest(&dehazed, self.output_width, self.output_height)?;
        Ok(if self.mirror {
            mirror_horizontal(&resized)
        } else {
            resized
        })
    }

    /// Transitions to `Stopped`, releasing the collaborators once.
    fn shutdown(&mut self, source: &mut dyn FrameSource, sink: &mut dyn FrameSink) {
        if self.state != PipelineState::Stopped {
            source.close();
            sink.close();
            self.state = PipelineState::Stopped;
        }
    }
}
