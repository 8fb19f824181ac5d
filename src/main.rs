//! Gravitational Field Simulation
//!
//! Particles drift across the canvas and are pulled by masses placed with the
//! left mouse button. Holding the button grows the mass under the cursor; once
//! its strength passes 15 it captures nearby particles onto a ring.

mod clock;
mod input;

use clock::TickClock;
use field_physics::Vector2;
use field_renderer::{Camera2d, FieldRenderer, GpuError};
use field_simulation::{Field, Placement, PlacementAction, SimulationConfig};
use input::{PointerSample, PrimaryPointer};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Gravitational Field Simulation";

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    renderer: FieldRenderer,
    camera: Camera2d,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
}

impl GpuState {
    async fn new(window: Arc<Window>, sim_config: &SimulationConfig) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(GpuError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let camera = Camera2d::new(sim_config.width, sim_config.height, config.width, config.height);
        let renderer = FieldRenderer::new(&device, config.format, &camera);
        log::info!("✓ Renderer initialized");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            camera,
            frame_times: VecDeque::with_capacity(100),
            last_frame_time: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.camera.resize(new_size.width, new_size.height);
        }
    }

    /// Draw the field. Returns the averaged frames per second.
    fn render(&mut self, field: &Field) -> Result<f32, wgpu::SurfaceError> {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        if self.frame_times.len() >= 100 {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);

        self.renderer.prepare(
            &self.device,
            &self.queue,
            &self.camera,
            field.particles(),
            field.masses(),
            field.config().particle_size,
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        self.renderer.render(&mut encoder, &view);
        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        Ok(if avg_frame_time > 0.0 {
            1000.0 / avg_frame_time
        } else {
            0.0
        })
    }
}

struct App {
    config: SimulationConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,

    field: Field,
    placement: Placement,
    pointer: PrimaryPointer,
    clock: TickClock,
}

impl App {
    fn new(config: SimulationConfig) -> Self {
        let mut field = Field::new(config.clone());
        field.populate(config.particle_count);
        let clock = TickClock::new(config.tick_duration(), Instant::now());

        Self {
            config,
            window: None,
            gpu_state: None,
            field,
            placement: Placement::default(),
            pointer: PrimaryPointer::default(),
            clock,
        }
    }

    fn window_to_canvas(&self, cursor: Vector2) -> Vector2 {
        match &self.gpu_state {
            Some(gpu_state) => gpu_state.camera.window_to_canvas(cursor),
            None => cursor,
        }
    }

    /// Input, then placement, then one physics step
    fn run_tick(&mut self) {
        match self.pointer.sample() {
            PointerSample::Down(cursor) => {
                let cursor = self.window_to_canvas(cursor);
                let action = self.placement.on_primary_button_down(&mut self.field, cursor);
                if let PlacementAction::Grew(id) = action {
                    if let Some(mass) = self.field.mass(id) {
                        log::trace!("Mass #{} strength {}", id.index(), mass.strength());
                    }
                }
            }
            PointerSample::Up => self.placement.on_primary_button_up(),
        }

        if self.config.spawn_interval.is_some() {
            self.field.generate_random_particles(self.config.particle_count);
        }

        self.field.step();
    }

    fn title(&self, fps: f32) -> String {
        format!(
            "{} - {:.0} FPS - {} particles, {} masses ({} strong)",
            WINDOW_TITLE,
            fps,
            self.field.particles().len(),
            self.field.masses().len(),
            self.field.strong_mass_count()
        )
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width as f64,
                self.config.height as f64,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), &self.config)) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.clock = TickClock::new(self.config.tick_duration(), Instant::now());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer
                    .move_to(Vector2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.pointer.press(),
                ElementState::Released => self.pointer.release(),
            },

            WindowEvent::RedrawRequested => {
                let Some(gpu_state) = &mut self.gpu_state else {
                    return;
                };
                match gpu_state.render(&self.field) {
                    Ok(fps) => {
                        if let Some(window) = &self.window {
                            window.set_title(&self.title(fps));
                        }
                    }
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(window) = &self.window {
                            gpu_state.resize(window.inner_size());
                        }
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let due = self.clock.due_ticks(Instant::now());
        for _ in 0..due {
            self.run_tick();
        }

        if due > 0 {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.deadline()));
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting gravitational field simulation...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(SimulationConfig::default());
    event_loop.run_app(&mut app)
}
