//! Discrete control events.
//!
//! The windowing layer maps its key codes to [`Control`]s and forwards every
//! press and release as a [`ControlEvent`]. Rotation is impulse based: each
//! press of a rotate key (auto-repeat included) nudges the angular velocity
//! once. Thrust keys are held flags.

use tracing::debug;

use crate::ship::ShipState;

/// Ship intents, one per arrow key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    RotateLeft,
    RotateRight,
    Thrust,
    ReverseThrust,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlEvent {
    pub control: Control,
    pub state: KeyState,
}

impl ControlEvent {
    #[must_use]
    pub const fn pressed(control: Control) -> Self {
        Self { control, state: KeyState::Pressed }
    }

    #[must_use]
    pub const fn released(control: Control) -> Self {
        Self { control, state: KeyState::Released }
    }
}

impl ShipState {
    /// Apply one control event.
    ///
    /// Releasing a rotate key does nothing; the impulse has already been
    /// applied and decays through damping.
    pub fn apply(&mut self, event: ControlEvent) {
        let pressed = event.state == KeyState::Pressed;
        match event.control {
            Control::RotateLeft if pressed => self.angular_velocity -= self.angular_acceleration,
            Control::RotateRight if pressed => self.angular_velocity += self.angular_acceleration,
            Control::RotateLeft | Control::RotateRight => {}
            Control::Thrust => self.thrusting = pressed,
            Control::ReverseThrust => self.reverse_thrusting = pressed,
        }
        debug!(
            ?event,
            angular_velocity = self.angular_velocity,
            thrusting = self.thrusting,
            reverse_thrusting = self.reverse_thrusting,
            "control applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_impulses_accumulate() {
        let mut ship = ShipState::new();
        ship.apply(ControlEvent::pressed(Control::RotateRight));
        ship.apply(ControlEvent::pressed(Control::RotateRight));
        ship.apply(ControlEvent::released(Control::RotateRight));
        assert!((ship.angular_velocity - 1.0).abs() < 1e-6);

        ship.apply(ControlEvent::pressed(Control::RotateLeft));
        assert!((ship.angular_velocity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn thrust_keys_are_held_flags() {
        let mut ship = ShipState::new();
        ship.apply(ControlEvent::pressed(Control::Thrust));
        ship.apply(ControlEvent::pressed(Control::ReverseThrust));
        assert!(ship.thrusting && ship.reverse_thrusting);

        ship.apply(ControlEvent::released(Control::Thrust));
        assert!(!ship.thrusting);
        assert!(ship.reverse_thrusting);

        ship.apply(ControlEvent::released(Control::ReverseThrust));
        assert!(!ship.reverse_thrusting);
    }
}
