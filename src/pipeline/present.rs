//! Presentation transforms: resize and mirror.
//!
//! Applied after dehazing so the emitted frame matches the display's
//! expected dimensions and orientation.

use crate::capture::{Frame, FrameError, CHANNELS};

/// Resizes a frame with nearest-neighbor sampling.
///
/// Returns the input unchanged when the target matches its dimensions.
pub fn resize_nearest(frame: &Frame, out_width: u32, out_height: u32) -> Result<Frame, FrameError> {
    frame.ensure_valid()?;
    if out_width == 0 || out_height == 0 {
        return Err(FrameError::ZeroDimensions {
            width: out_width,
            height: out_height,
        });
    }
    if out_width == frame.width() && out_height == frame.height() {
        return Ok(frame.clone());
    }

    let src = frame.pixels();
    let in_w = frame.width() as usize;
    let in_h = frame.height() as usize;
    let mut pixels = Vec::with_capacity(out_width as usize * out_height as usize * CHANNELS);

    for y in 0..out_height as usize {
        let sy = (y * in_h / out_height as usize).min(in_h - 1);
        for x in 0..out_width as usize {
            let sx = (x * in_w / out_width as usize).min(in_w - 1);
            let idx = (sy * in_w + sx) * CHANNELS;
            pixels.extend_from_slice(&src[idx..idx + CHANNELS]);
        }
    }

    Ok(Frame::new(pixels, out_width, out_height, frame.sequence()))
}

/// Flips a frame horizontally, keeping channel order within each pixel.
pub fn mirror_horizontal(frame: &Frame) -> Frame {
    let src = frame.pixels();
    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let mut pixels = Vec::with_capacity(src.len());

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + (w - 1 - x)) * CHANNELS;
            pixels.extend_from_slice(&src[idx..idx + CHANNELS]);
        }
    }

    Frame::new(pixels, frame.width(), frame.height(), frame.sequence())
}
