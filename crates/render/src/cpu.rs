//! # CPU Renderer
//!
//! Software path for headless captures. It evaluates the same per-fragment
//! function as `ship.wgsl`, with one rayon task per framebuffer row. Every
//! task reads one shared [`FrameParams`] snapshot, and rows are disjoint
//! slices of the output, so no synchronisation is needed.

use std::path::Path;

use glam::{Vec2, Vec4};
use image::RgbaImage;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::RenderError;
use crate::frame::{FrameParams, Viewport};
use crate::ray::pixel_center;

/// Bytes per RGBA8 pixel
const CHANNELS: usize = 4;

/// Quantise a linear colour to RGBA8. NaN channels become 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    color
        .to_array()
        .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Colour of the pixel at (`column`, `row`), rows counted from the top.
#[must_use]
pub fn render_pixel(frame: &FrameParams, column: u32, row: u32, height: u32) -> [u8; 4] {
    let frag: Vec2 = pixel_center(column, row, height);
    to_rgba8(frame.fragment(frag))
}

/// Render a full frame into an RGBA image, rows in parallel.
///
/// # Errors
///
/// Returns [`RenderError::EmptyViewport`] if either dimension is zero and
/// [`RenderError::BufferMismatch`] if the pixel count overflows `usize`.
pub fn render_frame(frame: &FrameParams, viewport: Viewport) -> Result<RgbaImage, RenderError> {
    let Viewport { width, height } = viewport;
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyViewport { width, height });
    }

    let mismatch = || RenderError::BufferMismatch { width, height };
    let row_bytes = usize::try_from(width)
        .ok()
        .and_then(|w| w.checked_mul(CHANNELS))
        .ok_or_else(mismatch)?;
    let total = usize::try_from(height)
        .ok()
        .and_then(|h| h.checked_mul(row_bytes))
        .ok_or_else(mismatch)?;

    let mut pixels = vec![0_u8; total];
    pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(row, line)| {
            // row < height, which is a u32
            let row = u32::try_from(row).unwrap_or(u32::MAX);
            for (column, px) in (0_u32..).zip(line.chunks_exact_mut(CHANNELS)) {
                px.copy_from_slice(&render_pixel(frame, column, row, height));
            }
        });

    debug!(width, height, "cpu frame rendered");
    RgbaImage::from_raw(width, height, pixels).ok_or_else(mismatch)
}

/// Encode `image` as PNG at `path`.
///
/// # Errors
///
/// Returns [`RenderError::Image`] if encoding or writing fails.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    image.save(path).map_err(|source| RenderError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved frame to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantises_and_clamps() {
        assert_eq!(to_rgba8(Vec4::new(0.0, 1.0, 2.0, -1.0)), [0, 255, 255, 0]);
        assert_eq!(to_rgba8(Vec4::splat(0.5)), [128; 4]);
    }

    #[test]
    fn nan_channel_is_black() {
        assert_eq!(to_rgba8(Vec4::new(f32::NAN, 1.0, 0.0, 1.0)), [0, 255, 0, 255]);
    }
}
