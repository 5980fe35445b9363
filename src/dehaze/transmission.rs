//! Transmission map estimation.
//!
//! The transmission t(x) is the fraction of scene light that reaches the
//! sensor unscattered: t = 1 means no haze, t = 0 means only ambient light
//! arrived. A floor keeps recovery from dividing by near-zero transmission
//! in heavily hazed regions.

use super::light::HazeDensityMap;

/// Per-pixel transmission estimate in `[floor, 1]`.
#[derive(Debug, Clone)]
pub struct TransmissionMap {
    values: Vec<f64>,
    floor: f64,
}

impl TransmissionMap {
    /// Builds the map as `1 − omega · density / enhanced_light`, floored
    /// elementwise at `t_min`.
    ///
    /// `enhanced_light` must already be clamped positive (see
    /// [`super::light::enhanced_light`]).
    pub fn build(density: &HazeDensityMap, enhanced_light: f64, omega: f64, t_min: f64) -> Self {
        let values = density
            .values()
            .iter()
            .map(|&d| (1.0 - omega * d / enhanced_light).max(t_min))
            .collect();
        Self {
            values,
            floor: t_min,
        }
    }

    /// Transmission at the flat pixel index.
    #[inline]
    pub fn value(&self, pixel: usize) -> f64 {
        self.values[pixel]
    }

    /// The configured floor.
    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// All transmission values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
