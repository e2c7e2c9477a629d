//! # Frame State
//!
//! [`World`] owns everything the frame loop mutates: the ship, the orbit
//! camera, the light and the viewport size. Once per frame the loop steps the
//! ship and calls [`World::snapshot`], which copies the state the renderer
//! needs into a [`FrameParams`] value. Renderers never see the world itself,
//! so a frame is always drawn from one consistent snapshot.

use glam::{Mat4, Vec2, Vec3, Vec4};
use physics::{ControlEvent, ShipState};

use crate::camera::{CameraState, OrbitCamera};
use crate::march::{march, MarchResult, ShipPose};
use crate::ray::primary_ray;
use crate::shade::shade;

/// Hull colour (pure green).
pub const SHIP_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// The scene light. Fixed after startup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightState {
    pub position: Vec3,
    pub color: Vec3,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, 5.0),
            color: Vec3::ONE,
        }
    }
}

/// Immutable per-frame input to the renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameParams {
    pub ship_position: Vec3,
    /// Euler angles of the ship; only `z` is ever non-zero
    pub ship_rotation: Vec3,
    pub camera_pos: Vec3,
    pub light_position: Vec3,
    /// Camera world-to-view matrix. Carried for parity with the GPU
    /// uniforms; ray generation does not use it.
    pub custom_view: Mat4,
    pub projection_inverse: Mat4,
    /// Framebuffer size in pixels
    pub resolution: Vec2,
    pub ship_color: Vec3,
}

impl FrameParams {
    /// Project simulation state into a render snapshot.
    #[must_use]
    pub fn new(ship: &ShipState, camera: &CameraState, light: &LightState, resolution: Vec2) -> Self {
        Self {
            ship_position: ship.position,
            ship_rotation: Vec3::new(0.0, 0.0, ship.rotation),
            camera_pos: camera.position,
            light_position: light.position,
            custom_view: camera.view,
            projection_inverse: camera.projection_inverse,
            resolution,
            ship_color: SHIP_COLOR,
        }
    }

    #[must_use]
    pub fn ship_pose(&self) -> ShipPose {
        ShipPose {
            position: self.ship_position,
            yaw: self.ship_rotation.z,
        }
    }

    /// March the ray through `frag_coord` (GL convention).
    #[must_use]
    pub fn trace(&self, frag_coord: Vec2) -> MarchResult {
        let ray = primary_ray(frag_coord, self.resolution, &self.projection_inverse, self.camera_pos);
        march(&ray, &self.ship_pose())
    }

    /// Colour of the fragment at `frag_coord`. This is the CPU twin of
    /// `fs_main` in `ship.wgsl`.
    #[must_use]
    pub fn fragment(&self, frag_coord: Vec2) -> Vec4 {
        let result = self.trace(frag_coord);
        shade(&result, self.ship_position, self.light_position, self.ship_color)
    }
}

/// Framebuffer size in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Mutable simulation world, owned by the frame loop.
#[derive(Clone, Debug)]
pub struct World {
    pub ship: ShipState,
    pub camera: OrbitCamera,
    pub light: LightState,
    pub viewport: Viewport,
    /// Frames simulated so far
    pub frame: u64,
}

impl World {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            ship: ShipState::new(),
            camera: OrbitCamera::new(viewport.width, viewport.height),
            light: LightState::default(),
            viewport,
            frame: 0,
        }
    }

    /// Forward a control event to the ship.
    pub fn handle(&mut self, event: ControlEvent) {
        self.ship.apply(event);
    }

    /// Run one physics step of length `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.ship.step(dt);
        self.frame += 1;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.resize(viewport.width, viewport.height);
    }

    /// Copy out the state the renderer needs for this frame.
    #[must_use]
    pub fn snapshot(&self) -> FrameParams {
        FrameParams::new(
            &self.ship,
            &self.camera.state(),
            &self.light,
            self.viewport.resolution(),
        )
    }
}
