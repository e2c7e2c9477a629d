//! # Ship Renderer
//!
//! Draws the ship as a signed distance field by sphere tracing one ray per
//! pixel. The same per-fragment pipeline runs in two places: `ship.wgsl` on
//! the GPU for the interactive window, and [`cpu`] on rayon workers for
//! headless captures.
//!
//! ## Key Components
//!
//! -   **Model:** [`sdf`] blends three spheres into the hull.
//! -   **Rays:** [`ray`] turns a fragment coordinate into a view ray.
//! -   **Marching:** [`march`] walks a ray against the posed hull.
//! -   **Shading:** [`shade`] lights hits and paints misses white.
//! -   **Frame:** [`frame::World`] owns the mutable scene and hands out
//!     immutable [`frame::FrameParams`] snapshots.
//! -   **Window:** [`run()`] opens a winit window backed by wgpu.

pub mod camera;
pub mod cpu;
pub mod error;
pub mod frame;
pub mod gpu_types;
pub mod march;
pub mod pipeline;
pub mod ray;
pub mod run;
pub mod sdf;
pub mod shade;
pub mod state;

pub use cpu::{render_frame, save_png};
pub use error::RenderError;
pub use frame::{FrameParams, LightState, Viewport, World, SHIP_COLOR};
pub use run::run;
