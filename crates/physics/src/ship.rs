//! Ship kinematic state.

use glam::Vec3;

/// Angular velocity change applied by one rotate impulse, in rad/s.
pub const ANGULAR_ACCELERATION: f32 = 0.5;

/// Multiplier applied to the angular velocity once per frame.
pub const ANGULAR_DAMPING: f32 = 0.95;

/// Where the ship spawns.
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, -5.0);

/// Thruster flags consumed by the integrator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShipInput {
    pub thrusting: bool,
    pub reverse_thrusting: bool,
}

impl ShipInput {
    /// No thruster engaged.
    pub const IDLE: Self = Self { thrusting: false, reverse_thrusting: false };

    /// Forward thruster held.
    pub const FORWARD: Self = Self { thrusting: true, reverse_thrusting: false };

    /// Reverse thruster held.
    pub const REVERSE: Self = Self { thrusting: false, reverse_thrusting: true };
}

/// Full kinematic state of the ship.
///
/// Only the Z rotation is ever used, so the orientation is a single yaw angle
/// in radians. `acceleration` is scratch space for the integrator and is zero
/// between steps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShipState {
    /// World position
    pub position: Vec3,
    /// Linear velocity in units per second
    pub velocity: Vec3,
    /// Linear acceleration of the step in progress
    pub acceleration: Vec3,
    /// Yaw about the world Z axis, radians
    pub rotation: f32,
    /// Yaw rate, radians per second
    pub angular_velocity: f32,
    /// Impulse size of a single rotate event
    pub angular_acceleration: f32,
    /// Per-frame angular velocity multiplier
    pub angular_damping: f32,
    pub thrusting: bool,
    pub reverse_thrusting: bool,
}

impl ShipState {
    /// Ship at rest at [`INITIAL_POSITION`], facing +Y.
    #[must_use]
    pub const fn new() -> Self {
        Self::at(INITIAL_POSITION)
    }

    /// Ship at rest at `position`, facing +Y.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: ANGULAR_ACCELERATION,
            angular_damping: ANGULAR_DAMPING,
            thrusting: false,
            reverse_thrusting: false,
        }
    }

    /// Current thruster flags.
    #[must_use]
    pub const fn input(&self) -> ShipInput {
        ShipInput {
            thrusting: self.thrusting,
            reverse_thrusting: self.reverse_thrusting,
        }
    }

    /// Advance this state by one frame using its own thruster flags.
    pub fn step(&mut self, dt: f32) {
        *self = crate::integrator::advance(self, dt, self.input());
    }

    /// Reset to the spawn pose, keeping tuning values.
    pub fn reset(&mut self) {
        *self = Self {
            angular_acceleration: self.angular_acceleration,
            angular_damping: self.angular_damping,
            ..Self::new()
        };
    }
}

impl Default for ShipState {
    fn default() -> Self {
        Self::new()
    }
}
