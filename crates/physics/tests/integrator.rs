use glam::Vec3;
use physics::{advance, Control, ControlEvent, ShipInput, ShipState};

const DT: f32 = 1.0 / 60.0;

#[test]
fn idle_ship_does_not_drift() {
    for dt in [0.0, 1.0 / 144.0, DT, 0.1, 1.0] {
        let mut ship = ShipState::new();
        for _ in 0..500 {
            ship = advance(&ship, dt, ShipInput::IDLE);
        }
        assert_eq!(ship.position, Vec3::new(0.0, 0.0, -5.0), "dt={dt}");
        assert_eq!(ship.rotation, 0.0, "dt={dt}");
        assert_eq!(ship.velocity, Vec3::ZERO, "dt={dt}");
    }
}

#[test]
fn angular_velocity_decays_geometrically() {
    let mut ship = ShipState::new();
    ship.apply(ControlEvent::pressed(Control::RotateRight));
    ship.apply(ControlEvent::pressed(Control::RotateRight));
    let initial = ship.angular_velocity;

    for n in 1..=120 {
        ship.step(DT);
        let expected = initial * 0.95_f32.powi(n);
        assert!(
            (ship.angular_velocity - expected).abs() < 1e-5,
            "frame {n}: got {} expected {expected}",
            ship.angular_velocity
        );
    }
}

#[test]
fn damping_ignores_frame_length() {
    // Same number of frames, very different dt: the decay is identical.
    let mut fast = ShipState::new();
    let mut slow = ShipState::new();
    fast.angular_velocity = 2.0;
    slow.angular_velocity = 2.0;
    for _ in 0..30 {
        fast.step(1.0 / 240.0);
        slow.step(1.0 / 15.0);
    }
    assert!((fast.angular_velocity - slow.angular_velocity).abs() < 1e-6);
    assert!(slow.rotation > fast.rotation);
}

#[test]
fn one_second_of_thrust_matches_euler_accumulation() {
    let mut ship = ShipState::new();
    ship.apply(ControlEvent::pressed(Control::Thrust));

    let steps = 60;
    for _ in 0..steps {
        ship.step(DT);
    }

    // forward = (0, 5, 0), acceleration = forward * |5| * 0.1 = 2.5 along +Y
    let accel = 2.5_f32;
    let expected_velocity = accel * DT * steps as f32;
    // semi-implicit Euler: x_n = a * dt^2 * n(n+1)/2
    let expected_y = accel * DT * DT * (steps * (steps + 1)) as f32 / 2.0;

    assert!(ship.rotation.abs() < f32::EPSILON);
    assert!(ship.velocity.x.abs() < 1e-6);
    assert!((ship.velocity.y - expected_velocity).abs() < 1e-4, "vy={}", ship.velocity.y);
    assert!((ship.position.y - expected_y).abs() < 1e-4, "y={}", ship.position.y);
    assert!(ship.position.x.abs() < 1e-6);
    assert!((ship.position.z + 5.0).abs() < f32::EPSILON);

    // within a step's worth of the closed form 0.5 * a * t^2
    let closed_form = 0.5 * accel;
    assert!((ship.position.y - closed_form).abs() < accel * DT);
}

#[test]
fn reverse_thrust_moves_backwards() {
    let mut ship = ShipState::new();
    ship.apply(ControlEvent::pressed(Control::ReverseThrust));
    for _ in 0..60 {
        ship.step(DT);
    }
    assert!((ship.velocity.y + 2.5).abs() < 1e-4);
    assert!(ship.position.y < 0.0);
}

#[test]
fn thrust_follows_updated_yaw() {
    let mut ship = ShipState::new();
    ship.angular_velocity = std::f32::consts::FRAC_PI_2;

    // The first step turns the ship by pi/2 * dt before thrust is resolved.
    let next = advance(&ship, 1.0, ShipInput::FORWARD);
    assert!((next.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

    // local up rotated a quarter turn about +Z points at world -X
    assert!((next.velocity.x + 2.5).abs() < 1e-5, "vx={}", next.velocity.x);
    assert!(next.velocity.y.abs() < 1e-5, "vy={}", next.velocity.y);
}

#[test]
fn released_thrust_coasts() {
    let mut ship = ShipState::new();
    ship.apply(ControlEvent::pressed(Control::Thrust));
    for _ in 0..30 {
        ship.step(DT);
    }
    ship.apply(ControlEvent::released(Control::Thrust));
    let coasting = ship.velocity;
    for _ in 0..30 {
        ship.step(DT);
    }
    assert_eq!(ship.velocity, coasting);
}
