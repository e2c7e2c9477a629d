use glam::{Vec3, Vec4};
use render::march::MarchResult;
use render::shade::{diffuse, shade, BACKGROUND};
use render::SHIP_COLOR;

fn result(hit: bool, point: Vec3) -> MarchResult {
    MarchResult { hit, point, ship_point: point, t: 1.0, steps: 1, distance: 0.0 }
}

#[test]
fn miss_is_white() {
    let color = shade(&result(false, Vec3::ZERO), Vec3::ZERO, Vec3::splat(5.0), SHIP_COLOR);
    assert_eq!(color, BACKGROUND);
    assert_eq!(color, Vec4::ONE);
}

#[test]
fn head_on_light_gives_full_colour() {
    let color = shade(
        &result(true, Vec3::new(0.0, 0.0, 1.25)),
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 5.0),
        SHIP_COLOR,
    );
    assert!((color - Vec4::new(0.0, 1.0, 0.0, 1.0)).length() < 1e-6);
}

#[test]
fn back_lit_surface_is_black_but_opaque() {
    let color = shade(
        &result(true, Vec3::new(0.0, 0.0, 1.25)),
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -5.0),
        SHIP_COLOR,
    );
    assert_eq!(color, Vec4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn diffuse_scales_with_angle() {
    let point = Vec3::new(0.0, 0.0, 1.0);
    let lit = diffuse(point, Vec3::ZERO, Vec3::new(0.0, 0.0, 3.0), Vec3::ONE);
    let grazing = diffuse(point, Vec3::ZERO, Vec3::new(2.0, 0.0, 3.0), Vec3::ONE);
    assert!(grazing.x < lit.x);
    assert!(grazing.x > 0.0);
}
