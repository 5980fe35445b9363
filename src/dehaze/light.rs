//! Atmospheric light estimation.
//!
//! The haze model I(x) = J(x)·t(x) + A·(1−t(x)) needs the ambient light A.
//! The estimator here is a percentile heuristic: the haze strength `omega`
//! doubles as a percentile selector, picking a near-maximum value of the
//! haze density map as the light estimate. The [`LightEstimator`] trait
//! isolates that formula so a true dark-channel-prior minimum-channel
//! estimator can be swapped in without touching the rest of the pipeline.

use super::normalize::NormalizedFrame;
use crate::capture::CHANNELS;

/// Floor applied to the boosted light estimate before any division.
///
/// A fully black or uniform frame estimates zero atmospheric light, which
/// would divide by zero in the transmission map. Clamping here keeps the
/// output well-defined.
pub const LIGHT_EPSILON: f64 = 1e-6;

/// Per-pixel haze density field.
///
/// Each value is the mean of the pixel's three normalized channels, scaled
/// by a further 1/3. The extra scaling is a deliberate part of the model:
/// combined with the default light boost of 3 it anchors the recovered
/// brightness to the scene's near-maximum luminance while softening the
/// transmission response. It stands in for a true dark channel.
#[derive(Debug, Clone)]
pub struct HazeDensityMap {
    values: Vec<f64>,
}

impl HazeDensityMap {
    /// Computes the density map from a normalized frame.
    pub fn from_normalized(frame: &NormalizedFrame) -> Self {
        let values = frame
            .samples()
            .chunks_exact(CHANNELS)
            .map(|px| (px[0] + px[1] + px[2]) / 3.0 / 3.0)
            .collect();
        Self { values }
    }

    /// Builds a map from precomputed density values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the density values, one per pixel.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at percentile `p` (0–100) with linear interpolation between
    /// ranks. Returns 0 for an empty map.
    pub fn percentile(&self, p: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut sorted = self.values.clone();
        // Density values come from [0,1] samples, so a total order exists.
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let frac = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Trait for atmospheric light estimators.
pub trait LightEstimator {
    /// Estimates the scalar atmospheric light from a density map.
    fn estimate(&self, density: &HazeDensityMap) -> f64;
}

/// Percentile-based light estimator.
///
/// Reads the density distribution at the `(100 − omega)`-th percentile;
/// omega 0.8 therefore selects the 99.2nd percentile, effectively a
/// near-maximum brightness pixel.
#[derive(Debug, Clone)]
pub struct PercentileEstimator {
    percentile: f64,
}

impl PercentileEstimator {
    /// Creates an estimator for the given haze strength.
    pub fn new(omega: f64) -> Self {
        Self {
            percentile: 100.0 - omega,
        }
    }
}

impl LightEstimator for PercentileEstimator {
    fn estimate(&self, density: &HazeDensityMap) -> f64 {
        density.percentile(self.percentile)
    }
}

/// Applies the brightness boost and the degenerate-light guard.
///
/// Returns `atmospheric * factor`, clamped up to [`LIGHT_EPSILON`] so the
/// transmission computation never divides by zero.
pub fn enhanced_light(atmospheric: f64, factor: f64) -> f64 {
    let boosted = atmospheric * factor;
    if boosted < LIGHT_EPSILON {
        tracing::debug!(atmospheric, "degenerate atmospheric light clamped");
        LIGHT_EPSILON
    } else {
        boosted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Frame;

    fn density_of(pixels: Vec<u8>, w: u32, h: u32) -> HazeDensityMap {
        let frame = Frame::new(pixels, w, h, 0);
        HazeDensityMap::from_normalized(&NormalizedFrame::from_frame(&frame))
    }

    #[test]
    fn test_density_of_white_pixel() {
        let density = density_of(vec![255, 255, 255], 1, 1);
        // Channel mean 1.0, scaled by 1/3.
        assert!((density.values()[0] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_density_zero_for_black() {
        let density = density_of(vec![0u8; 4 * 4 * 3], 4, 4);
        assert!(density.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_percentile_interpolation() {
        let density = HazeDensityMap {
            values: vec![0.0, 0.1, 0.2, 0.3, 0.4],
        };

        assert_eq!(density.percentile(0.0), 0.0);
        assert_eq!(density.percentile(100.0), 0.4);
        // Rank 2.0 exactly.
        assert!((density.percentile(50.0) - 0.2).abs() < 1e-12);
        // Rank 3.0 * 0.9 ... midway between indices 3 and 4 at p=87.5.
        assert!((density.percentile(87.5) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_frame_estimates_zero_for_black() {
        let density = density_of(vec![0u8; 2 * 2 * 3], 2, 2);
        let estimator = PercentileEstimator::new(0.8);
        assert_eq!(estimator.estimate(&density), 0.0);
    }

    #[test]
    fn test_estimator_picks_near_maximum() {
        // One bright pixel among dark ones; the 99.2nd percentile of a
        // 4-pixel map interpolates close to the maximum.
        let density = density_of(vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255], 2, 2);
        let estimator = PercentileEstimator::new(0.8);
        let light = estimator.estimate(&density);

        assert!(light > 0.3, "got {light}");
    }

    #[test]
    fn test_enhanced_light_clamps_zero() {
        assert_eq!(enhanced_light(0.0, 3.0), LIGHT_EPSILON);
        assert!(enhanced_light(0.5, 3.0) > 1.0);
    }
}
