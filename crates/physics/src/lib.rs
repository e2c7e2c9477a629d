#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Ship Physics
//!
//! The kinematic model behind the ship demo: a single ship gliding on the XY
//! plane, turned by discrete angular impulses and pushed by a thruster along
//! its local up axis.
//!
//! ## Key Components
//!
//! -   **State:** [`ShipState`] in the [`ship`] module holds position,
//!     velocity, yaw and the thruster flags. It is created once at startup and
//!     owned by the frame loop.
//! -   **Controls:** [`Control`] and [`ControlEvent`] in the [`controls`]
//!     module describe the four arrow-key intents. Events are applied to the
//!     state synchronously as they arrive.
//! -   **Integration:** [`advance`] in the [`integrator`] module moves the
//!     state forward by one frame.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{Control, ControlEvent, ShipState};
//!
//! let mut ship = ShipState::new();
//! ship.apply(ControlEvent::pressed(Control::Thrust));
//! for _ in 0..60 {
//!     ship.step(1.0 / 60.0);
//! }
//! assert!(ship.position.y > 0.0);
//! ```

pub mod controls;
pub mod integrator;
pub mod ship;

pub use controls::{Control, ControlEvent, KeyState};
pub use integrator::{advance, thrust_direction, THRUST_MAGNITUDE, THRUST_SCALE};
pub use ship::{ShipInput, ShipState, ANGULAR_ACCELERATION, ANGULAR_DAMPING, INITIAL_POSITION};
