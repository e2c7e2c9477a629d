use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::frame::Viewport;
use crate::state::State;

pub const WINDOW_TITLE: &str = "SDF Ship";

/// Open a window and run the interactive demo until it is closed.
///
/// Paths received on `shader_updates` are read and compiled as replacement
/// WGSL for the ship pipeline.
pub fn run(viewport: Viewport, shader_updates: Option<Receiver<PathBuf>>) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(viewport.width, viewport.height))
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let mut state = pollster::block_on(State::new(window.clone()))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == state.window().id() => {
            if !state.input(event) {
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(physical_size) => {
                        state.resize(*physical_size);
                    }
                    WindowEvent::RedrawRequested => {
                        state.update();
                        match state.render() {
                            Ok(()) => {}
                            // Reconfigure the surface if lost
                            Err(wgpu::SurfaceError::Lost) => state.reconfigure(),
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                tracing::error!("GPU out of memory, exiting");
                                elwt.exit();
                            }
                            // Outdated and Timeout resolve on the next frame
                            Err(e) => tracing::warn!("Surface error: {e:?}"),
                        }
                    }
                    _ => {}
                }
            }
        }
        Event::AboutToWait => {
            if let Some(rx) = &shader_updates {
                while let Ok(path) = rx.try_recv() {
                    reload_from(&mut state, &path);
                }
            }
            state.window().request_redraw();
        }
        _ => {}
    })?;

    tracing::info!("Window closed");
    Ok(())
}

fn reload_from(state: &mut State, path: &Path) {
    let result = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
        .and_then(|source| state.reload_shader(&source));
    if let Err(e) = result {
        tracing::error!("Keeping previous shader: {e:#}");
    }
}
