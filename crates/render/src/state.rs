use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use physics::{Control, ControlEvent, KeyState};

use crate::camera::CameraController;
use crate::frame::{Viewport, World};
use crate::gpu_types::FrameUniform;
use crate::pipeline;

/// Pixels per wheel notch for trackpad scrolling
const PIXELS_PER_NOTCH: f32 = 50.0;

pub struct State {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    frame_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    controller: CameraController,
    world: World,
    last_frame: Instant,
}

impl State {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to get adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Ship Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to request device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let world = World::new(Viewport::new(config.width, config.height));
        let uniform = FrameUniform::from(&world.snapshot());

        let vertex_buffer = pipeline::create_fullscreen_quad(&device);
        let frame_buffer = pipeline::create_frame_buffer(&device, &uniform);
        let bind_group_layout = pipeline::create_bind_group_layout(&device);
        let bind_group = pipeline::create_bind_group(&device, &bind_group_layout, &frame_buffer);
        let pipeline =
            pipeline::create_render_pipeline(&device, &bind_group_layout, format, pipeline::SHIP_SHADER);

        tracing::info!(
            width = config.width,
            height = config.height,
            ?format,
            "Renderer initialised"
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            frame_buffer,
            bind_group_layout,
            bind_group,
            controller: CameraController::default(),
            world,
            last_frame: Instant::now(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.world
                .resize(Viewport::new(new_size.width, new_size.height));
        }
    }

    /// Reconfigure the surface at its current size, after a loss.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Handle a window event. Returns true if the event was consumed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.world.ship.reset();
                tracing::info!("Ship reset");
                true
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match control_for(*code) {
                Some(control) => {
                    let state = match state {
                        ElementState::Pressed => KeyState::Pressed,
                        ElementState::Released => KeyState::Released,
                    };
                    self.world.handle(ControlEvent { control, state });
                    true
                }
                None => false,
            },
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    self.controller
                        .process_button(*state == ElementState::Pressed);
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let cursor = Vec2::new(position.x as f32, position.y as f32);
                let height = self.world.viewport.resolution().y;
                self.controller
                    .process_cursor(&mut self.world.camera, cursor, height);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    #[allow(clippy::cast_possible_truncation)]
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_NOTCH,
                };
                self.controller
                    .process_scroll(&mut self.world.camera, notches);
                true
            }
            _ => false,
        }
    }

    /// Step the ship by the wall-clock time since the previous frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.world.update(dt);

        if self.world.frame % 50 == 0 {
            tracing::debug!(
                frame = self.world.frame,
                position = ?self.world.ship.position,
                rotation = self.world.ship.rotation,
                "ship"
            );
        }
    }

    /// Replace the pipeline with one built from `source`. The old pipeline
    /// stays in place if validation fails.
    pub fn reload_shader(&mut self, source: &str) -> Result<()> {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = pipeline::create_render_pipeline(
            &self.device,
            &self.bind_group_layout,
            self.config.format,
            source,
        );
        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            anyhow::bail!("shader rejected: {err}");
        }
        self.pipeline = pipeline;
        tracing::info!("Shader reloaded");
        Ok(())
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let uniform = FrameUniform::from(&self.world.snapshot());
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&uniform));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.draw(0..4, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Arrow keys steer the ship.
#[must_use]
pub fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::ArrowLeft => Some(Control::RotateLeft),
        KeyCode::ArrowRight => Some(Control::RotateRight),
        KeyCode::ArrowUp => Some(Control::Thrust),
        KeyCode::ArrowDown => Some(Control::ReverseThrust),
        _ => None,
    }
}
