//! # Ship Demo Application Logic
//!
//! Picks between the two ways the demo runs:
//!
//! - **Windowed:** opens a wgpu window driven by the arrow keys, optionally
//!   with shader hot reload through [`crate::watcher`].
//! - **Headless:** steps the ship for a fixed number of frames with a
//!   scripted input, then renders the last frame on the CPU and saves it as a
//!   PNG. Useful on machines without a GPU and for reproducible captures.

use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};
use physics::{Control, ControlEvent};
use render::{render_frame, save_png, Viewport, World};

use crate::cli::Cli;
use crate::watcher;

/// Frames between progress log lines
const LOG_INTERVAL: u64 = 50;

/// Run the demo in the mode selected on the command line.
///
/// # Errors
///
/// Returns any error from window setup, rendering or writing the capture.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.headless {
        headless(cli)
    } else {
        windowed(cli)
    }
}

/// Control events the headless run applies before its first frame.
#[must_use]
pub fn script(cli: &Cli) -> Vec<ControlEvent> {
    let turn = if cli.turn < 0 {
        Control::RotateLeft
    } else {
        Control::RotateRight
    };
    let mut events: Vec<_> = (0..cli.turn.unsigned_abs())
        .map(|_| ControlEvent::pressed(turn))
        .collect();
    if cli.thrust {
        events.push(ControlEvent::pressed(Control::Thrust));
    }
    if cli.reverse {
        events.push(ControlEvent::pressed(Control::ReverseThrust));
    }
    events
}

/// Apply the scripted input and step `world` for `cli.frames` frames.
pub fn simulate(world: &mut World, cli: &Cli) {
    for event in script(cli) {
        world.handle(event);
    }

    tracing::info!(
        "Starting simulation loop for {} frames with dt = {}...",
        cli.frames,
        cli.dt
    );
    for _ in 0..cli.frames {
        world.update(cli.dt);
        if world.frame % LOG_INTERVAL == 0 {
            tracing::info!(
                "Simulation frame {} complete. Ship position: {:?}, rotation: {:.3}",
                world.frame,
                world.ship.position,
                world.ship.rotation
            );
        }
    }
    tracing::info!("Final ship position: {:?}", world.ship.position);
}

fn headless(cli: &Cli) -> Result<()> {
    let viewport = Viewport::new(cli.width, cli.height);
    let mut world = World::new(viewport);
    simulate(&mut world, cli);

    let frame = world.snapshot();
    let image = render_frame(&frame, viewport).context("failed to render headless frame")?;
    let path = cli.output.clone().unwrap_or_else(default_capture_path);
    save_png(&image, &path).context("failed to save capture")?;
    Ok(())
}

fn windowed(cli: &Cli) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let _shader_watcher = if cli.watch_shaders {
        match watcher::start(&watcher::default_shader_path(), tx) {
            Ok(watcher_instance) => {
                tracing::info!("Shader watcher started successfully.");
                Some(watcher_instance)
            }
            Err(e) => {
                tracing::error!("Failed to start shader watcher: {e:?}");
                None
            }
        }
    } else {
        None
    };

    render::run(Viewport::new(cli.width, cli.height), Some(rx))
}

/// `ship-<local timestamp>.png` in the working directory.
#[must_use]
pub fn default_capture_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("ship-{stamp}.png"))
}
