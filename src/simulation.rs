//! Simulation builder and window driver.
//!
//! The driver replaces the continuation-style redraw loop of a browser
//! canvas: the winit event loop owns scheduling, and every
//! `RedrawRequested` steps the field exactly once with the latest pointer
//! position, renders, and requests the next frame. Space pauses and
//! resumes the field without closing the window.

use std::sync::Arc;

use rand::RngCore;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::SimulationError;
use crate::field::{Field, Mode};
use crate::input::PointerState;
use crate::renderer::Renderer;
use crate::time::Time;
use crate::visuals::VisualConfig;

/// A particle field simulation builder.
///
/// Use method chaining to configure, then call `.run()` to open a window
/// and animate until it is closed.
///
/// ```ignore
/// FieldSimulation::new()
///     .with_particle_count(100)
///     .with_mode(Mode::RisingSmoke)
///     .with_visuals(|v| { v.glow(0.5); })
///     .run()?;
/// ```
pub struct FieldSimulation {
    particle_count: usize,
    mode: Mode,
    seed: Option<u64>,
    window_size: (u32, u32),
    title: String,
    visuals: VisualConfig,
}

impl FieldSimulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            particle_count: 100,
            mode: Mode::default(),
            seed: None,
            window_size: (1280, 720),
            title: "driftfield".to_string(),
            visuals: VisualConfig::default(),
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the motion mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the RNG seed. Without this, each run starts differently.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Configure rendering options.
    pub fn with_visuals<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut VisualConfig),
    {
        configure(&mut self.visuals);
        self
    }

    /// Run the simulation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        let field = Field::new(
            self.window_size.0 as f32,
            self.window_size.1 as f32,
            self.particle_count,
            self.mode,
            seed,
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(field, self.window_size, self.title, self.visuals);
        event_loop.run_app(&mut app)?;

        match app.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for FieldSimulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    field: Field,
    pointer: PointerState,
    time: Time,
    window_size: (u32, u32),
    title: String,
    visuals: VisualConfig,
    startup_error: Option<SimulationError>,
}

impl App {
    fn new(field: Field, window_size: (u32, u32), title: String, visuals: VisualConfig) -> Self {
        Self {
            window: None,
            renderer: None,
            field,
            pointer: PointerState::new(),
            time: Time::new(),
            window_size,
            title,
            visuals,
            startup_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.window_size.0,
                self.window_size.1,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.startup_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let count = self.field.len();
        match pollster::block_on(Renderer::new(window.clone(), count, self.visuals.clone())) {
            Ok(renderer) => {
                // The surface is in physical pixels; realign the field
                // with what the window actually got.
                let size = window.inner_size();
                self.field.set_bounds(size.width as f32, size.height as f32);
                self.renderer = Some(renderer);
            }
            Err(e) => {
                self.startup_error = Some(e.into());
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
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.time.toggle_pause();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
                self.field
                    .set_bounds(physical_size.width as f32, physical_size.height as f32);
            }
            WindowEvent::RedrawRequested => {
                self.time.update();
                if self.time.frame() % 60 == 0 {
                    if let Some(window) = &self.window {
                        window.set_title(&format!("{} ({:.0} fps)", self.title, self.time.fps()));
                    }
                }
                // A paused frame still renders (resize, damage) but the
                // field does not advance.
                if !self.time.is_paused() {
                    self.field.step(self.pointer.position());
                }

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render(&self.field) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            renderer.resize(winit::dpi::PhysicalSize {
                                width: renderer.config.width,
                                height: renderer.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let sim = FieldSimulation::new();
        assert_eq!(sim.particle_count, 100);
        assert_eq!(sim.mode, Mode::RisingSmoke);
        assert!(sim.seed.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let sim = FieldSimulation::new()
            .with_particle_count(80)
            .with_mode(Mode::DriftingHaze)
            .with_seed(7)
            .with_size(800, 600)
            .with_title("haze");
        assert_eq!(sim.particle_count, 80);
        assert_eq!(sim.mode, Mode::DriftingHaze);
        assert_eq!(sim.seed, Some(7));
        assert_eq!(sim.window_size, (800, 600));
        assert_eq!(sim.title, "haze");
    }

    #[test]
    fn test_with_visuals_applies_configuration() {
        let sim = FieldSimulation::new().with_visuals(|v| {
            v.glow(0.5);
        });
        assert_eq!(sim.visuals.glow, 0.5);
    }
}
