//! Surface shading.

use glam::{Vec3, Vec4};

use crate::march::MarchResult;

/// Colour of rays that miss the ship.
pub const BACKGROUND: Vec4 = Vec4::ONE;

/// Lambert term for a hit at `point`.
///
/// The normal is the direction from the ship origin to the point rather than
/// the SDF gradient. It is exact only for a single sphere centred on the
/// ship, which is close enough for this hull.
#[must_use]
pub fn diffuse(point: Vec3, ship_position: Vec3, light_position: Vec3, color: Vec3) -> Vec3 {
    let normal = (point - ship_position).normalize();
    let light_dir = (light_position - point).normalize();
    let diff = light_dir.dot(normal).max(0.0);
    diff * color
}

/// Final RGBA colour of a marched ray.
#[must_use]
pub fn shade(result: &MarchResult, ship_position: Vec3, light_position: Vec3, color: Vec3) -> Vec4 {
    if result.hit {
        diffuse(result.point, ship_position, light_position, color).extend(1.0)
    } else {
        BACKGROUND
    }
}
