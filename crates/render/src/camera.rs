//! Orbit camera and controller
//!
//! The camera circles a target point. Dragging with the left button orbits,
//! the wheel dollies in and out. The renderer only consumes the per-frame
//! [`CameraState`] snapshot.

use glam::{Mat4, Vec2, Vec3};

/// Vertical field of view, degrees
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;
/// Startup eye position
pub const INITIAL_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);

const MIN_DISTANCE: f32 = 0.1;
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

/// Camera matrices read by the renderer each frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraState {
    /// Eye position in world space
    pub position: Vec3,
    /// World to view transform
    pub view: Mat4,
    /// Inverse of the projection matrix
    pub projection_inverse: Mat4,
}

/// Perspective camera orbiting `target`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at
    pub target: Vec3,
    /// Distance from the target
    pub distance: f32,
    /// Rotation about world Y, radians
    pub yaw: f32,
    /// Elevation above the XZ plane, radians
    pub pitch: f32,
    /// Render target aspect ratio
    pub aspect: f32,
    /// Field of view in radians
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    /// Camera at [`INITIAL_EYE`] looking at the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: INITIAL_EYE.length(),
            yaw: 0.0,
            pitch: 0.0,
            aspect: aspect_ratio(width, height),
            fovy: FOV_Y_DEGREES.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }

    /// Update aspect ratio when the surface is resized
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    /// Eye position in world space
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// GL-style projection (clip depth -1..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Snapshot for the current frame.
    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.eye(),
            view: self.view_matrix(),
            projection_inverse: self.projection_matrix().inverse(),
        }
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Mouse-driven orbit controller.
pub struct CameraController {
    /// Full turn per viewport height of drag
    rotate_speed: f32,
    /// Distance factor per wheel notch
    zoom_step: f32,
    dragging: bool,
    last_cursor: Option<Vec2>,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_step: f32) -> Self {
        Self {
            rotate_speed,
            zoom_step,
            dragging: false,
            last_cursor: None,
        }
    }

    /// Left button pressed or released.
    pub fn process_button(&mut self, pressed: bool) {
        self.dragging = pressed;
    }

    /// Cursor moved to `position` (pixels) on a viewport `viewport_height` tall.
    pub fn process_cursor(&mut self, camera: &mut OrbitCamera, position: Vec2, viewport_height: f32) {
        if let Some(last) = self.last_cursor {
            if self.dragging {
                let delta = position - last;
                let scale = std::f32::consts::TAU * self.rotate_speed / viewport_height.max(1.0);
                camera.yaw -= delta.x * scale;
                camera.pitch = (camera.pitch + delta.y * scale).clamp(-MAX_PITCH, MAX_PITCH);
            }
        }
        self.last_cursor = Some(position);
    }

    /// Wheel scrolled by `notches`; positive zooms in.
    pub fn process_scroll(&self, camera: &mut OrbitCamera, notches: f32) {
        camera.distance = (camera.distance * self.zoom_step.powf(notches)).max(MIN_DISTANCE);
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(1.0, 0.95)
    }
}
