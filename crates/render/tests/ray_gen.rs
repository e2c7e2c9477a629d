use glam::{Mat4, Vec2, Vec3};
use render::camera::OrbitCamera;
use render::ray::{pixel_center, primary_ray};

#[test]
fn centre_pixel_looks_down_negative_z() {
    let camera = OrbitCamera::new(800, 600).state();
    let resolution = Vec2::new(800.0, 600.0);
    let ray = primary_ray(resolution / 2.0, resolution, &camera.projection_inverse, camera.position);
    assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5, "{:?}", ray.direction);
    assert_eq!(ray.origin, camera.position);
}

#[test]
fn identity_projection_corner() {
    let resolution = Vec2::new(64.0, 64.0);
    let ray = primary_ray(resolution, resolution, &Mat4::IDENTITY, Vec3::ZERO);
    let expected = Vec3::new(1.0, 1.0, -1.0).normalize();
    assert!((ray.direction - expected).length() < 1e-6);
}

#[test]
fn directions_are_unit_length() {
    let camera = OrbitCamera::new(320, 200).state();
    let resolution = Vec2::new(320.0, 200.0);
    for frag in [Vec2::ZERO, Vec2::new(0.5, 199.5), Vec2::new(160.0, 3.0), resolution] {
        let ray = primary_ray(frag, resolution, &camera.projection_inverse, camera.position);
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn image_rows_flip_to_bottom_up() {
    assert_eq!(pixel_center(0, 0, 10), Vec2::new(0.5, 9.5));
    assert_eq!(pixel_center(3, 9, 10), Vec2::new(3.5, 0.5));
}

#[test]
fn ray_ignores_camera_orientation() {
    let mut camera = OrbitCamera::new(800, 600);
    camera.yaw = 1.0;
    let state = camera.state();
    let resolution = Vec2::new(800.0, 600.0);
    let ray = primary_ray(resolution / 2.0, resolution, &state.projection_inverse, state.position);
    assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    assert_eq!(ray.origin, state.position);
}
