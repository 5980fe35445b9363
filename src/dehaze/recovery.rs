//! Scene radiance recovery.
//!
//! Inverts the scattering model I(x) = J(x)·t(x) + A·(1−t(x)) for J(x),
//! using the boosted light estimate in place of raw atmospheric light to
//! brighten the result.

use super::normalize::NormalizedFrame;
use super::transmission::TransmissionMap;
use crate::capture::{Frame, CHANNELS};

/// Recovers the dehazed frame.
///
/// Per channel: `j = (s − L) / t + L`, then each sample is clipped to
/// [0, 1], scaled by 255 and truncated back to 8 bits. The clips are part
/// of the model, not error recovery.
pub fn recover(
    normalized: &NormalizedFrame,
    transmission: &TransmissionMap,
    enhanced_light: f64,
) -> Frame {
    let mut pixels = Vec::with_capacity(normalized.samples().len());

    for pixel in 0..normalized.pixel_count() {
        let t = transmission.value(pixel);
        for c in 0..CHANNELS {
            let s = normalized.sample(pixel, c);
            let j = (s - enhanced_light) / t + enhanced_light;
            pixels.push((j.clamp(0.0, 1.0) * 255.0) as u8);
        }
    }

    Frame::new(
        pixels,
        normalized.width(),
        normalized.height(),
        normalized.sequence(),
    )
}

#[cfg(test)]
mod tests {
    use super::super::light::HazeDensityMap;
    use super::*;

    #[test]
    fn test_identity_when_sample_equals_light() {
        // s == L makes the quotient vanish; output is L regardless of t.
        let frame = Frame::new(vec![255u8; 3], 1, 1, 0);
        let norm = NormalizedFrame::from_frame(&frame);
        let tmap = TransmissionMap::build(&HazeDensityMap::from_values(vec![0.2]), 1.0, 0.8, 0.1);

        let out = recover(&norm, &tmap, 1.0);
        assert_eq!(out.pixels(), &[255, 255, 255]);
    }

    #[test]
    fn test_output_clipped_to_byte_range() {
        let frame = Frame::new(vec![0, 128, 255, 10, 200, 30], 2, 1, 3);
        let norm = NormalizedFrame::from_frame(&frame);
        let tmap = TransmissionMap::build(
            &HazeDensityMap::from_values(vec![0.3, 0.05]),
            0.5,
            0.8,
            0.1,
        );

        let out = recover(&norm, &tmap, 0.5);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 1);
        assert_eq!(out.sequence(), 3);
        assert_eq!(out.pixels().len(), 6);
    }

    #[test]
    fn test_dimensions_preserved() {
        let frame = Frame::new(vec![100u8; 4 * 3 * 3], 4, 3, 0);
        let norm = NormalizedFrame::from_frame(&frame);
        let tmap =
            TransmissionMap::build(&HazeDensityMap::from_values(vec![0.1; 12]), 1.0, 0.8, 0.1);

        let out = recover(&norm, &tmap, 1.0);
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 3);
    }
}
