use glam::Vec3;
use render::march::{march, scene_distance, ShipPose, HIT_EPSILON, MAX_STEPS};
use render::ray::Ray;

fn at_origin() -> ShipPose {
    ShipPose { position: Vec3::ZERO, yaw: 0.0 }
}

#[test]
fn cardinal_rays_hit_the_hull() {
    for axis in [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z] {
        let ray = Ray { origin: axis * 10.0, direction: -axis };
        let result = march(&ray, &at_origin());
        assert!(result.hit, "from {axis:?}");
        assert!(result.steps < MAX_STEPS);
        assert!(result.distance < HIT_EPSILON);
    }
}

#[test]
fn ray_pointing_away_exhausts_budget() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 10.0), direction: Vec3::Z };
    let result = march(&ray, &at_origin());
    assert!(!result.hit);
    assert_eq!(result.steps, MAX_STEPS);
}

#[test]
fn hit_point_lies_on_the_ray() {
    let ray = Ray { origin: Vec3::new(0.0, 0.0, 10.0), direction: Vec3::NEG_Z };
    let result = march(&ray, &at_origin());
    assert!((result.point - ray.at(result.t)).length() < 1e-5);
    assert!(result.point.z > 0.0 && result.point.z < 1.0, "{:?}", result.point);
}

#[test]
fn ship_offset_is_applied_twice() {
    let pose = ShipPose { position: Vec3::new(3.0, 0.0, -5.0), yaw: 0.0 };

    let through_pose = Ray { origin: Vec3::new(3.0, 0.0, 5.0), direction: Vec3::NEG_Z };
    assert!(!march(&through_pose, &pose).hit);

    let through_double = Ray { origin: Vec3::new(6.0, 0.0, 5.0), direction: Vec3::NEG_Z };
    assert!(march(&through_double, &pose).hit);
}

#[test]
fn yaw_turns_the_hull() {
    // A quarter turn moves the top sphere off the +Y axis
    let upright = at_origin();
    let turned = ShipPose { position: Vec3::ZERO, yaw: std::f32::consts::FRAC_PI_2 };
    let probe = Vec3::new(0.0, 2.1, 0.0);
    assert!(scene_distance(probe, &upright) < 0.0);
    assert!(scene_distance(probe, &turned) > 0.0);
}
