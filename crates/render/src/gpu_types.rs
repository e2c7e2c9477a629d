//! GPU-compatible type definitions for rendering
//!
//! Layout of the uniform block read by `ship.wgsl`. Every vector is widened to
//! `vec4<f32>` so the Rust and WGSL layouts agree without manual padding
//! rules. The struct must stay Pod.

use bytemuck::{Pod, Zeroable};

use crate::frame::FrameParams;

/// Uniform buffer holding one [`FrameParams`] snapshot.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniform {
    /// Camera world-to-view matrix
    pub custom_view: [[f32; 4]; 4],
    /// Inverse projection used to build view rays
    pub projection_inverse: [[f32; 4]; 4],
    /// xyz ship position
    pub ship_position: [f32; 4],
    /// xyz ship Euler rotation
    pub ship_rotation: [f32; 4],
    /// xyz camera position
    pub camera_pos: [f32; 4],
    /// xyz light position
    pub light_position: [f32; 4],
    /// rgb hull colour
    pub ship_color: [f32; 4],
    /// xy framebuffer size in pixels
    pub resolution: [f32; 4],
}

impl From<&FrameParams> for FrameUniform {
    fn from(frame: &FrameParams) -> Self {
        Self {
            custom_view: frame.custom_view.to_cols_array_2d(),
            projection_inverse: frame.projection_inverse.to_cols_array_2d(),
            ship_position: frame.ship_position.extend(0.0).to_array(),
            ship_rotation: frame.ship_rotation.extend(0.0).to_array(),
            camera_pos: frame.camera_pos.extend(0.0).to_array(),
            light_position: frame.light_position.extend(0.0).to_array(),
            ship_color: frame.ship_color.extend(1.0).to_array(),
            resolution: [frame.resolution.x, frame.resolution.y, 0.0, 0.0],
        }
    }
}
