//! Edge-preserving bilateral filter.
//!
//! Each output pixel is a weighted average of its neighbors, weights
//! combining spatial proximity (Gaussian over distance) and intensity
//! similarity (Gaussian over squared color difference). Smooth regions are
//! averaged while sharp edges survive, which suppresses the low-amplitude
//! noise that histogram equalization amplifies.

use crate::capture::{Frame, FrameError, CHANNELS};

/// Applies a bilateral filter with the given neighborhood diameter and
/// smoothing strengths.
///
/// `sigma_color` controls the range weight (larger mixes more across
/// intensity differences), `sigma_space` the spatial weight. Borders are
/// handled by clamping neighbor coordinates. Deterministic, no state.
pub fn bilateral_filter(
    frame: &Frame,
    diameter: u32,
    sigma_color: f64,
    sigma_space: f64,
) -> Result<Frame, FrameError> {
    frame.ensure_valid()?;

    let radius = (diameter / 2) as i64;
    let width = frame.width() as i64;
    let height = frame.height() as i64;

    let color_coeff = -1.0 / (2.0 * sigma_color * sigma_color);
    let space_coeff = -1.0 / (2.0 * sigma_space * sigma_space);

    // Spatial weights depend only on the offset; precompute the window.
    let side = (2 * radius + 1) as usize;
    let mut spatial = vec![0.0f64; side * side];
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let idx = ((dy + radius) as usize) * side + (dx + radius) as usize;
            spatial[idx] = (((dx * dx + dy * dy) as f64) * space_coeff).exp();
        }
    }

    let src = frame.pixels();
    let mut pixels = Vec::with_capacity(src.len());

    for y in 0..height {
        for x in 0..width {
            let center = ((y * width + x) as usize) * CHANNELS;
            let mut sums = [0.0f64; CHANNELS];
            let mut weight_sum = 0.0f64;

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let ny = (y + dy).clamp(0, height - 1);
                    let nx = (x + dx).clamp(0, width - 1);
                    let neighbor = ((ny * width + nx) as usize) * CHANNELS;

                    let mut color_dist2 = 0.0f64;
                    for c in 0..CHANNELS {
                        let d = src[neighbor + c] as f64 - src[center + c] as f64;
                        color_dist2 += d * d;
                    }

                    let idx = ((dy + radius) as usize) * side + (dx + radius) as usize;
                    let weight = spatial[idx] * (color_dist2 * color_coeff).exp();

                    for c in 0..CHANNELS {
                        sums[c] += weight * src[neighbor + c] as f64;
                    }
                    weight_sum += weight;
                }
            }

            for c in 0..CHANNELS {
                pixels.push((sums[c] / weight_sum).round() as u8);
            }
        }
    }

    Ok(Frame::new(
        pixels,
        frame.width(),
        frame.height(),
        frame.sequence(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_frame_unchanged() {
        let frame = Frame::new(vec![97u8; 8 * 8 * 3], 8, 8, 0);
        let out = bilateral_filter(&frame, 9, 75.0, 75.0).unwrap();

        assert!(out.pixels().iter().all(|&p| p == 97));
    }

    #[test]
    fn test_hard_edge_preserved() {
        // Left half black, right half white. Opposite colors carry a range
        // weight of exp(-3*255^2 / (2*75^2)) ~ 3e-8, so neither side bleeds
        // into the other by more than a single quantization step.
        let mut pixels = Vec::new();
        for _y in 0..8 {
            for x in 0..16u32 {
                let v = if x < 8 { 0u8 } else { 255 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        let frame = Frame::new(pixels, 16, 8, 0);
        let out = bilateral_filter(&frame, 9, 75.0, 75.0).unwrap();

        for y in 0..8 {
            for x in 0..16 {
                let expected = if x < 8 { 0i32 } else { 255 };
                let got = out.sample(x, y, 0) as i32;
                assert!((got - expected).abs() <= 1, "({x},{y}) = {got}");
            }
        }
    }

    #[test]
    fn test_small_noise_smoothed() {
        // Mild checkerboard ripple around 128 should flatten toward the
        // local mean.
        let mut pixels = Vec::new();
        for y in 0..8u32 {
            for x in 0..8u32 {
                let v = if (x + y) % 2 == 0 { 120u8 } else { 136 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        let frame = Frame::new(pixels, 8, 8, 0);
        let out = bilateral_filter(&frame, 9, 75.0, 75.0).unwrap();

        let center = out.sample(4, 4, 0) as i32;
        assert!((center - 128).abs() <= 4, "center {center}");
    }

    #[test]
    fn test_dimensions_preserved() {
        let frame = Frame::new(vec![50u8; 5 * 7 * 3], 5, 7, 2);
        let out = bilateral_filter(&frame, 9, 75.0, 75.0).unwrap();

        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 7);
        assert_eq!(out.sequence(), 2);
    }
}
