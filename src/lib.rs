//! # Driftfield
//!
//! A decorative 2D particle field: soft glowing dots drifting across a
//! window, repelled by the pointer.
//!
//! The simulation core ([`Field`]) is plain CPU arithmetic over a
//! fixed-size particle vector with a seeded RNG, so trajectories are
//! deterministic and testable without a window. [`FieldSimulation`] wraps
//! it in a winit/wgpu driver for interactive use.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     FieldSimulation::new()
//!         .with_particle_count(100)
//!         .with_mode(Mode::RisingSmoke)
//!         .with_visuals(|v| {
//!             v.blend_mode(BlendMode::Additive);
//!             v.glow(0.5);
//!         })
//!         .run()
//! }
//! ```
//!
//! ## Motion modes
//!
//! Two distinct behaviors, never blended:
//!
//! - [`Mode::RisingSmoke`] (default) — particles drift upward, relaxing
//!   toward a per-particle natural velocity; the pointer adds a repulsive
//!   impulse; particles that leave the top respawn below the bottom.
//! - [`Mode::DriftingHaze`] — constant per-particle velocity; the pointer
//!   displaces position directly; opacity wanders toward periodically
//!   re-randomized targets; all four edges wrap.
//!
//! ## Headless use
//!
//! ```ignore
//! use driftfield::{Field, Mode};
//! use glam::Vec2;
//!
//! let mut field = Field::new(800.0, 600.0, 80, Mode::RisingSmoke, 42);
//! field.step(Some(Vec2::new(400.0, 300.0)));
//! for p in field.particles() {
//!     println!("{} @ {}", p.opacity, p.position);
//! }
//! ```

pub mod error;
pub mod field;
pub mod input;
mod particle;
mod renderer;
mod shader;
mod simulation;
pub mod time;
pub mod visuals;

pub use bytemuck;
pub use error::{GpuError, SimulationError};
pub use field::{Field, Mode};
pub use glam::{Vec2, Vec3};
pub use input::PointerState;
pub use particle::Particle;
pub use renderer::Renderer;
pub use simulation::FieldSimulation;
pub use visuals::{BlendMode, VisualConfig};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SimulationError;
    pub use crate::field::{Field, Mode};
    pub use crate::input::PointerState;
    pub use crate::simulation::FieldSimulation;
    pub use crate::time::Time;
    pub use crate::visuals::{BlendMode, VisualConfig};
    pub use crate::{Vec2, Vec3};
}
