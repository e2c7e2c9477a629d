use std::path::PathBuf;

use clap::Parser;

/// Default number of simulated frames in headless mode
pub const DEFAULT_FRAMES: u32 = 120;
/// Default fixed step for headless mode, seconds
pub const DEFAULT_DT: f32 = 1.0 / 60.0;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Fly a raymarched SDF ship with the arrow keys.
#[derive(Parser, Debug, Clone)]
#[command(name = "ship_demo", version)]
pub struct Cli {
    /// Simulate without a window and write the last frame to a PNG
    #[arg(long)]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u32,

    /// Fixed time step in headless mode, seconds
    #[arg(long, default_value_t = DEFAULT_DT)]
    pub dt: f32,

    /// Framebuffer width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Hold the forward thruster for the whole headless run
    #[arg(long)]
    pub thrust: bool,

    /// Hold the reverse thruster for the whole headless run
    #[arg(long)]
    pub reverse: bool,

    /// Rotate impulses applied before the first frame; negative turns left
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub turn: i32,

    /// PNG path for the headless capture [default: ship-<timestamp>.png]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Rebuild the render pipeline when the WGSL source changes
    #[arg(long)]
    pub watch_shaders: bool,
}
