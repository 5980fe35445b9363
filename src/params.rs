//! Dehazing parameters and validation.
//!
//! All tunables are call-time parameters; there is no configuration file
//! and no persisted state. Defaults reproduce the reference behavior.

use serde::{Deserialize, Serialize};

/// Parameters for one dehazing run.
///
/// Immutable for the duration of a pipeline invocation. `omega` doubles as
/// the percentile selector for atmospheric light estimation: the estimate
/// is taken at the `(100 - omega)`-th percentile of the haze density map,
/// so the default 0.8 selects the 99.2nd percentile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DehazeParams {
    /// Haze strength in (0, 1); also the percentile selector.
    pub omega: f64,
    /// Transmission floor in (0, 1); prevents division by near-zero
    /// transmission in heavily hazed regions.
    pub t_min: f64,
    /// Brightness boost applied to the atmospheric light estimate; must be
    /// positive.
    pub enhance_light_factor: f64,
}

impl Default for DehazeParams {
    fn default() -> Self {
        Self {
            omega: 0.8,
            t_min: 0.1,
            enhance_light_factor: 3.0,
        }
    }
}

impl DehazeParams {
    /// Validates the parameters, rejecting out-of-range or non-finite
    /// values before any processing starts.
    pub fn validate(&self) -> Result<(), ParamError> {
        // NaN fails both comparisons, so non-finite values are rejected too.
        if !(self.omega > 0.0 && self.omega < 1.0) {
            return Err(ParamError::Omega(self.omega));
        }
        if !(self.t_min > 0.0 && self.t_min < 1.0) {
            return Err(ParamError::TMin(self.t_min));
        }
        if !(self.enhance_light_factor > 0.0 && self.enhance_light_factor.is_finite()) {
            return Err(ParamError::LightFactor(self.enhance_light_factor));
        }
        Ok(())
    }
}

/// Parameter validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParamError {
    #[error("omega must lie in (0, 1), got {0}")]
    /// `omega` outside its open interval.
    Omega(f64),

    #[error("t_min must lie in (0, 1), got {0}")]
    /// `t_min` outside its open interval.
    TMin(f64),

    #[error("enhance_light_factor must be positive and finite, got {0}")]
    /// Non-positive or non-finite light boost.
    LightFactor(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_valid() {
        assert!(DehazeParams::default().validate().is_ok());
    }

    #[test]
    fn test_omega_bounds_rejected() {
        let mut params = DehazeParams::default();
        params.omega = 0.0;
        assert!(matches!(params.validate(), Err(ParamError::Omega(_))));

        params.omega = 1.0;
        assert!(matches!(params.validate(), Err(ParamError::Omega(_))));
    }

    #[test]
    fn test_t_min_bounds_rejected() {
        let mut params = DehazeParams::default();
        params.t_min = 1.0;
        assert!(matches!(params.validate(), Err(ParamError::TMin(_))));
    }

    #[test]
    fn test_nonpositive_light_factor_rejected() {
        let mut params = DehazeParams::default();
        params.enhance_light_factor = 0.0;
        assert!(matches!(params.validate(), Err(ParamError::LightFactor(_))));

        params.enhance_light_factor = -2.0;
        assert!(matches!(params.validate(), Err(ParamError::LightFactor(_))));
    }

    #[test]
    fn test_nan_rejected() {
        let mut params = DehazeParams::default();
        params.omega = f64::NAN;
        assert!(matches!(params.validate(), Err(ParamError::Omega(_))));
    }
}
