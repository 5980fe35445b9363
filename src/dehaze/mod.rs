//! Single-frame haze removal.
//!
//! Implements a simplified single-scattering dehazing model:
//! normalize → estimate atmospheric light → build transmission map →
//! recover scene radiance. Each invocation is pure and self-contained;
//! every intermediate is discarded when the recovered frame is returned.

mod light;
mod normalize;
mod recovery;
mod transmission;

pub use light::{
    enhanced_light, HazeDensityMap, LightEstimator, PercentileEstimator, LIGHT_EPSILON,
};
pub use normalize::NormalizedFrame;
pub use recovery::recover;
pub use transmission::TransmissionMap;

use crate::capture::{Frame, FrameError};
use crate::params::{DehazeParams, ParamError};
use thiserror::Error;

/// Errors from the one-shot [`dehaze`] entry point.
#[derive(Debug, Error)]
pub enum DehazeError {
    /// Parameters out of range.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Input frame invalid.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// A dehazer with validated parameters and a pluggable light estimator.
///
/// Validates once at construction so the per-frame path only checks the
/// frame itself.
pub struct Dehazer {
    params: DehazeParams,
    estimator: Box<dyn LightEstimator + Send + Sync>,
}

impl Dehazer {
    /// Creates a dehazer with the percentile light estimator.
    pub fn new(params: DehazeParams) -> Result<Self, ParamError> {
        params.validate()?;
        let estimator = Box::new(PercentileEstimator::new(params.omega));
        Ok(Self { params, estimator })
    }

    /// Creates a dehazer with a custom light estimator.
    pub fn with_estimator(
        params: DehazeParams,
        estimator: Box<dyn LightEstimator + Send + Sync>,
    ) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self { params, estimator })
    }

    /// Returns the validated parameters.
    pub fn params(&self) -> &DehazeParams {
        &self.params
    }

    /// Removes haze from one frame.
    ///
    /// Output dimensions and channel count match the input exactly.
    pub fn dehaze(&self, frame: &Frame) -> Result<Frame, FrameError> {
        frame.ensure_valid()?;

        let normalized = NormalizedFrame::from_frame(frame);
        let density = HazeDensityMap::from_normalized(&normalized);
        let atmospheric = self.estimator.estimate(&density);
        let light = enhanced_light(atmospheric, self.params.enhance_light_factor);
        let tmap = TransmissionMap::build(&density, light, self.params.omega, self.params.t_min);

        Ok(recover(&normalized, &tmap, light))
    }
}

impl std::fmt::Debug for Dehazer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dehazer")
            .field("params", &self.params)
            .finish()
    }
}

/// One-shot dehazing with explicit parameters.
///
/// Convenience wrapper over [`Dehazer`]; validates parameters on every
/// call.
pub fn dehaze(frame: &Frame, params: &DehazeParams) -> Result<Frame, DehazeError> {
    let dehazer = Dehazer::new(*params)?;
    Ok(dehazer.dehaze(frame)?)
}
