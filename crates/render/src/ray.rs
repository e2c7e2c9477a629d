//! Per-pixel primary rays.
//!
//! Fragment coordinates use the GL convention: origin at the bottom-left of
//! the framebuffer and pixel centres at `+0.5`. The CPU renderer converts
//! image rows to this convention before calling in; the WGSL shader flips
//! `@builtin(position)` the same way.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// A ray with a unit direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

/// Normalised device coordinates of a fragment. No Y flip is applied.
#[must_use]
pub fn fragment_ndc(frag_coord: Vec2, resolution: Vec2) -> Vec2 {
    (frag_coord / resolution) * 2.0 - 1.0
}

/// Fragment coordinate of the centre of image pixel (`column`, `row`), where
/// row 0 is the top of the image.
#[must_use]
pub fn pixel_center(column: u32, row: u32, height: u32) -> Vec2 {
    Vec2::new(column as f32 + 0.5, (height - 1 - row) as f32 + 0.5)
}

/// Ray through `frag_coord` for a camera at `camera_pos`.
///
/// Only the inverse projection is applied. The eye-space point is pinned to
/// `z = -1, w = 0` and used as a direction directly; the camera orientation
/// is not applied, so rays always fan out around world -Z.
#[must_use]
pub fn primary_ray(
    frag_coord: Vec2,
    resolution: Vec2,
    projection_inverse: &Mat4,
    camera_pos: Vec3,
) -> Ray {
    let ndc = fragment_ndc(frag_coord, resolution);
    let ray_clip = Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
    let mut ray_eye = *projection_inverse * ray_clip;
    ray_eye.z = -1.0;
    ray_eye.w = 0.0;

    Ray {
        origin: camera_pos,
        direction: ray_eye.truncate().normalize(),
    }
}
