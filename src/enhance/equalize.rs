//! Luminance histogram equalization.
//!
//! The frame is reduced to BT.601 luminance, its histogram is equalized so
//! the cumulative distribution becomes approximately uniform, and the
//! equalized luminance is broadcast back into all three channels. The
//! broadcast deliberately discards chrominance: downstream haze recovery
//! operates on an effectively grayscale frame, matching the model this
//! pipeline reproduces.

use crate::capture::{Frame, FrameError, CHANNELS};

/// Number of intensity bins.
const BINS: usize = 256;

/// BT.601 luminance of one BGR pixel.
#[inline]
fn luminance(b: u8, g: u8, r: u8) -> u8 {
    (0.114 * b as f64 + 0.587 * g as f64 + 0.299 * r as f64).round() as u8
}

/// Equalizes the frame's luminance histogram.
///
/// Output dimensions match the input; all three output channels carry the
/// equalized luminance. A degenerate single-value histogram maps to itself,
/// so flat frames pass through unchanged instead of collapsing to black.
pub fn equalize_luminance(frame: &Frame) -> Result<Frame, FrameError> {
    frame.ensure_valid()?;

    let mut luma = Vec::with_capacity(frame.pixel_count());
    let mut hist = [0u32; BINS];
    for px in frame.pixels().chunks_exact(CHANNELS) {
        let y = luminance(px[0], px[1], px[2]);
        hist[y as usize] += 1;
        luma.push(y);
    }

    let mut cdf = [0u32; BINS];
    cdf[0] = hist[0];
    for i in 1..BINS {
        cdf[i] = cdf[i - 1] + hist[i];
    }

    let total = frame.pixel_count() as u32;
    let cdf_min = cdf.iter().copied().find(|&v| v > 0).unwrap_or(0);
    let denom = total - cdf_min;

    let lut: [u8; BINS] = if denom == 0 {
        // Single-value histogram: identity, no artifacts on flat frames.
        std::array::from_fn(|i| i as u8)
    } else {
        std::array::from_fn(|i| {
            ((cdf[i].saturating_sub(cdf_min)) as f64 / denom as f64 * 255.0).round() as u8
        })
    };

    let mut pixels = Vec::with_capacity(frame.pixels().len());
    for &y in &luma {
        let eq = lut[y as usize];
        pixels.extend_from_slice(&[eq, eq, eq]);
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
    fn test_flat_gray_frame_unchanged() {
        let frame = Frame::new(vec![128u8; 4 * 4 * 3], 4, 4, 0);
        let out = equalize_luminance(&frame).unwrap();

        assert!(out.pixels().iter().all(|&p| p == 128));
    }

    #[test]
    fn test_uniform_histogram_is_identity() {
        // Four equally populated levels already have a uniform CDF; the
        // remap reproduces them exactly.
        let mut pixels = Vec::new();
        for row in [0u8, 85, 170, 255] {
            for _ in 0..4 {
                pixels.extend_from_slice(&[row, row, row]);
            }
        }
        let frame = Frame::new(pixels.clone(), 4, 4, 0);
        let out = equalize_luminance(&frame).unwrap();

        assert_eq!(out.pixels(), pixels.as_slice());
    }

    #[test]
    fn test_two_level_frame_stretched_to_full_range() {
        // Half 60, half 190: equalization pushes them to the extremes.
        let mut pixels = Vec::new();
        for i in 0..16u32 {
            let v = if i < 8 { 60u8 } else { 190 };
            pixels.extend_from_slice(&[v, v, v]);
        }
        let frame = Frame::new(pixels, 4, 4, 0);
        let out = equalize_luminance(&frame).unwrap();

        assert_eq!(out.sample(0, 0, 0), 0);
        assert_eq!(out.sample(3, 3, 0), 255);
    }

    #[test]
    fn test_channels_broadcast_equal() {
        let frame = Frame::new(vec![10, 200, 90, 30, 30, 250], 2, 1, 0);
        let out = equalize_luminance(&frame).unwrap();

        for x in 0..2 {
            assert_eq!(out.sample(x, 0, 0), out.sample(x, 0, 1));
            assert_eq!(out.sample(x, 0, 1), out.sample(x, 0, 2));
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let frame = Frame::new(vec![77u8; 6 * 5 * 3], 6, 5, 9);
        let out = equalize_luminance(&frame).unwrap();

        assert_eq!(out.width(), 6);
        assert_eq!(out.height(), 5);
        assert_eq!(out.sequence(), 9);
    }
}
