//! # Ship Integration
//!
//! Semi-implicit Euler step for the ship. The ordering is part of the
//! observable behaviour: yaw is integrated first, and the thrust direction is
//! taken from the freshly updated yaw.
//!
//! Angular damping is a flat per-frame multiplier, so the decay rate depends
//! on the frame rate. Do not rescale it by `dt`.

use glam::{Quat, Vec3};

use crate::ship::{ShipInput, ShipState};

/// Signed thrust magnitude along the ship's local up axis.
pub const THRUST_MAGNITUDE: f32 = 5.0;

/// Scale from thrust to linear acceleration.
pub const THRUST_SCALE: f32 = 0.1;

/// Thrust along local +Y for the given flags. Forward wins over reverse.
#[must_use]
pub fn thrust_direction(input: ShipInput) -> f32 {
    if input.thrusting {
        THRUST_MAGNITUDE
    } else if input.reverse_thrusting {
        -THRUST_MAGNITUDE
    } else {
        0.0
    }
}

/// Advance `state` by one frame of length `dt` under `input`.
///
/// The thruster flags of the returned state are the ones in `input`.
/// Negative `dt` is not rejected and simply runs the equations backwards.
#[must_use]
pub fn advance(state: &ShipState, dt: f32, input: ShipInput) -> ShipState {
    let mut next = *state;
    next.thrusting = input.thrusting;
    next.reverse_thrusting = input.reverse_thrusting;

    // Rotation
    next.rotation += next.angular_velocity * dt;
    next.angular_velocity *= next.angular_damping;

    // Thrust
    let thrust = thrust_direction(input);
    let forward = Quat::from_rotation_z(next.rotation) * Vec3::new(0.0, thrust, 0.0);
    next.acceleration.x = forward.x * thrust.abs() * THRUST_SCALE;
    next.acceleration.y = forward.y * thrust.abs() * THRUST_SCALE;

    next.velocity += next.acceleration * dt;
    next.position += next.velocity * dt;

    next.acceleration = Vec3::ZERO;
    next
}
