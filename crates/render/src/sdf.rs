//! Signed distance model of the ship.
//!
//! Three spheres on a triangle, softly unioned. These functions mirror
//! `sd_sphere`, `smin` and `sd_spaceship` in `ship.wgsl` line for line; keep
//! the two in sync.

use glam::Vec3;

/// Radius of each hull sphere.
pub const SPHERE_RADIUS: f32 = 1.25;

/// Smooth-min blend radius between hull spheres.
pub const BLEND_RADIUS: f32 = 0.2;

/// Hull sphere centres, in blend order.
pub const HULL_CENTERS: [Vec3; 3] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(-0.86, -0.5, 0.0),
    Vec3::new(0.86, -0.5, 0.0),
];

/// Distance from `p` to a sphere of radius `r` at the origin.
#[must_use]
pub fn sd_sphere(p: Vec3, r: f32) -> f32 {
    p.length() - r
}

/// Polynomial smooth minimum of two distances with blend radius `k > 0`.
#[must_use]
pub fn smin(a: f32, b: f32, k: f32) -> f32 {
    let h = (0.5 + 0.5 * (b - a) / k).clamp(0.0, 1.0);
    mix(b, a, h) - k * h * (1.0 - h)
}

/// Signed distance to the ship hull, in ship space.
#[must_use]
pub fn sd_spaceship(p: Vec3) -> f32 {
    let [c1, c2, c3] = HULL_CENTERS;
    let d1 = sd_sphere(p - c1, SPHERE_RADIUS);
    let d2 = sd_sphere(p - c2, SPHERE_RADIUS);
    let d3 = sd_sphere(p - c3, SPHERE_RADIUS);

    let d = smin(d1, d2, BLEND_RADIUS);
    smin(d, d3, BLEND_RADIUS)
}

// GLSL/WGSL `mix`
fn mix(x: f32, y: f32, a: f32) -> f32 {
    x * (1.0 - a) + y * a
}
