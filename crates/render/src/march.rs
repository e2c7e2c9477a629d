//! Sphere tracing against the ship SDF.
//!
//! The inverse ship transform is reproduced exactly as the shader does it,
//! quirks included:
//!
//! - the XY translation is removed twice, once before the 2D rotation and
//!   again when the hull SDF is sampled at `q - position`;
//! - the rotation matrix is `mat2(c, -s, s, c)` built from `-yaw`, which in
//!   column-major order rotates by `+yaw`.
//!
//! Both are visible in the rendered output and are kept so CPU frames match
//! GPU frames.

use glam::{Mat2, Vec2, Vec3};
use physics::ShipState;

use crate::ray::Ray;
use crate::sdf::sd_spaceship;

/// Step budget per ray.
pub const MAX_STEPS: u32 = 100;

/// Distance below which a sample counts as a surface hit.
pub const HIT_EPSILON: f32 = 0.01;

/// Position and yaw the hull is evaluated against.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShipPose {
    pub position: Vec3,
    pub yaw: f32,
}

impl From<&ShipState> for ShipPose {
    fn from(ship: &ShipState) -> Self {
        Self {
            position: ship.position,
            yaw: ship.rotation,
        }
    }
}

/// Outcome of marching one ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarchResult {
    pub hit: bool,
    /// Last sampled point on the ray, world space
    pub point: Vec3,
    /// `point` after the inverse ship transform
    pub ship_point: Vec3,
    /// Ray parameter of `point`
    pub t: f32,
    /// Number of SDF evaluations performed
    pub steps: u32,
    /// SDF value at the last sample
    pub distance: f32,
}

/// Apply the inverse ship transform to a world-space point. Z is untouched.
#[must_use]
pub fn to_ship_frame(p: Vec3, pose: &ShipPose) -> Vec3 {
    let (s, c) = (-pose.yaw).sin_cos();
    let rot = Mat2::from_cols(Vec2::new(c, -s), Vec2::new(s, c));
    let xy = rot * (p.truncate() - pose.position.truncate());
    xy.extend(p.z)
}

/// Ship SDF sampled at world point `p`.
#[must_use]
pub fn scene_distance(p: Vec3, pose: &ShipPose) -> f32 {
    sd_spaceship(to_ship_frame(p, pose) - pose.position)
}

/// March `ray` until it hits the hull or the step budget runs out.
///
/// There is no far-distance cutoff. A ray that escapes keeps doubling its
/// step until the budget is spent, and the reported point may be non-finite.
#[must_use]
pub fn march(ray: &Ray, pose: &ShipPose) -> MarchResult {
    let mut t = 0.0;
    let mut result = MarchResult {
        hit: false,
        point: ray.origin,
        ship_point: ray.origin,
        t,
        steps: 0,
        distance: f32::INFINITY,
    };

    for step in 1..=MAX_STEPS {
        let point = ray.at(t);
        let ship_point = to_ship_frame(point, pose);
        let distance = sd_spaceship(ship_point - pose.position);
        result = MarchResult {
            hit: distance < HIT_EPSILON,
            point,
            ship_point,
            t,
            steps: step,
            distance,
        };
        if result.hit {
            break;
        }
        t += distance;
    }
    result
}
