//! Windowed runner for the backdrop.
//!
//! [`Background`] is the builder entry point; the private `App` wires
//! winit events into the simulation and the GPU backend. The event loop
//! serializes resizes against ticks, so the neuron batch swap in
//! [`Simulation::resize`] is atomic as far as rendering is concerned.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::Viewport;
use crate::error::RunError;
use crate::gpu::{FrameMesh, GpuState};
use crate::input::Pointer;
use crate::render::Rgba;
use crate::simulation::Simulation;
use crate::visuals::Theme;

/// A windowed backdrop builder.
///
/// Use method chaining to configure, then call `.run()` to animate until
/// the window closes.
///
/// ```ignore
/// use nbe::prelude::*;
///
/// fn main() -> Result<(), RunError> {
///     Background::new()
///         .with_size(1280.0, 720.0)
///         .with_title("Ambient")
///         .run()
/// }
/// ```
pub struct Background {
    width: f32,
    height: f32,
    title: String,
    seed: Option<u64>,
    theme: Theme,
    clear: Rgba,
}

impl Background {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "NBE - Neural Background Engine".to_string(),
            seed: None,
            theme: Theme::default(),
            clear: Rgba::new(5.0, 5.0, 13.0, 255.0),
        }
    }

    /// Initial window size in pixels.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fix the simulation seed so drift and spawns reproduce run to run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Color theme for neurons, edges and the ring.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Window clear color behind the graph.
    pub fn with_clear_color(mut self, color: Rgba) -> Self {
        self.clear = color;
        self
    }

    /// Open the window and animate until it is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Background,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    simulation: Simulation,
    mesh: FrameMesh,
    pointer: Pointer,
}

impl App {
    fn new(settings: Background) -> Self {
        let viewport = Viewport::new(settings.width, settings.height);
        let mut simulation = match settings.seed {
            Some(seed) => Simulation::seeded(viewport, seed),
            None => Simulation::new(viewport),
        };
        simulation.set_theme(settings.theme);

        Self {
            settings,
            window: None,
            gpu: None,
            simulation,
            mesh: FrameMesh::new(),
            pointer: Pointer::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.width as f64,
                self.settings.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {}", err);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), self.settings.clear)) {
            Ok(gpu) => {
                // The window may not honor the requested size exactly;
                // sync the simulation to what we actually got.
                let size = window.inner_size();
                if size.width > 0 && size.height > 0 {
                    self.simulation
                        .resize(Viewport::new(size.width as f32, size.height as f32));
                }
                self.gpu = Some(gpu);
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("failed to initialize GPU: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.pointer.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
                if size.width > 0 && size.height > 0 {
                    self.simulation
                        .resize(Viewport::new(size.width as f32, size.height as f32));
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu) = &mut self.gpu {
                    self.simulation.tick(self.pointer.position(), &mut self.mesh);
                    match gpu.render(self.mesh.vertices()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            });
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory, shutting down");
                            event_loop.exit();
                        }
                        Err(err) => log::warn!("render error: {:?}", err),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
