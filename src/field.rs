//! The particle field: a fixed-size collection advanced frame by frame.
//!
//! `Field` is the simulation core. It owns the particles, the surface
//! bounds, and a seeded RNG, and knows nothing about windows or GPUs:
//! `step` is plain arithmetic over the particle vector, which keeps the
//! whole update loop testable without a rendering environment.
//!
//! # Example
//!
//! ```ignore
//! use driftfield::{Field, Mode};
//! use glam::Vec2;
//!
//! let mut field = Field::new(800.0, 600.0, 100, Mode::RisingSmoke, 42);
//! loop {
//!     field.step(Some(Vec2::new(400.0, 300.0)));
//!     // hand field.particles() to a renderer
//! }
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::Particle;

/// Smoothing factor pulling velocity back toward its natural value.
pub const RELAX: f32 = 0.02;
/// Pointer interaction radius for rising-smoke motion, in pixels.
pub const REPEL_RADIUS: f32 = 200.0;
/// Impulse scale applied at the pointer itself (force factor 1).
pub const REPEL_STRENGTH: f32 = 2.0;
/// Per-frame opacity step toward the fade target.
pub const FADE_STEP: f32 = 0.01;
/// How far above the top edge a rising particle may drift before resetting.
pub const RESPAWN_MARGIN: f32 = 50.0;
/// Vertical offset below the bottom edge where reset particles reappear.
pub const RESPAWN_OFFSET: f32 = 10.0;
/// Pointer interaction radius for drifting-haze motion, in pixels.
pub const HAZE_REPEL_RADIUS: f32 = 150.0;
/// Displacement scale applied at the pointer itself for drifting haze.
pub const HAZE_REPEL_STRENGTH: f32 = 3.0;
/// Per-frame chance that a drifting particle picks a new fade target.
pub const RETARGET_CHANCE: f64 = 0.01;

/// Motion mode for the field.
///
/// The two modes are distinct behaviors and are never blended: pick one
/// when building the field. `RisingSmoke` is the canonical default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Particles drift upward, relaxing toward a per-particle natural
    /// velocity. The pointer adds a repulsive impulse to velocity.
    /// Particles that rise above the top edge respawn below the bottom;
    /// horizontal position wraps. There is no bound below the bottom
    /// edge: a pointer near it can push particles arbitrarily far down,
    /// and the natural velocity carries them back up.
    #[default]
    RisingSmoke,

    /// Particles keep a constant velocity. The pointer displaces position
    /// directly. Opacity oscillates toward a periodically re-randomized
    /// target. Position wraps at all four edges.
    DriftingHaze,
}

/// A fixed-size particle field advanced one frame at a time.
#[derive(Debug)]
pub struct Field {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    mode: Mode,
    rng: SmallRng,
}

impl Field {
    /// Create a field and populate it with `count` particles.
    ///
    /// The seed fixes every trajectory: two fields built with the same
    /// seed and stepped with the same pointer sequence stay identical.
    pub fn new(width: f32, height: f32, count: usize, mode: Mode, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            mode,
            rng: SmallRng::seed_from_u64(seed),
        };
        field.initialize(width, height, count);
        field
    }

    /// Replace all particles with a freshly randomized set of `count`.
    ///
    /// Callable at any time; prior particle state does not survive.
    pub fn initialize(&mut self, width: f32, height: f32, count: usize) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = match self.mode {
                Mode::RisingSmoke => Particle::rising(&mut self.rng, width, height, true),
                Mode::DriftingHaze => Particle::drifting(&mut self.rng, width, height),
            };
            self.particles.push(p);
        }
    }

    /// Update the stored surface size without touching particle state.
    ///
    /// Call this on resize; existing particles keep their positions and
    /// wrap against the new bounds from the next step on.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by exactly one frame.
    ///
    /// `pointer` is the latest known pointer position in surface pixels;
    /// `None` disables the repulsion term for this frame.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        match self.mode {
            Mode::RisingSmoke => self.step_rising(pointer),
            Mode::DriftingHaze => self.step_drifting(pointer),
        }
    }

    fn step_rising(&mut self, pointer: Option<Vec2>) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.velocity += (p.natural - p.velocity) * RELAX;

            if let Some(m) = pointer {
                p.velocity += repulsion(p.position, m, REPEL_RADIUS, REPEL_STRENGTH);
            }

            p.position += p.velocity;

            // Fade in only; opacity never decreases in this mode.
            if p.opacity < p.fade_target {
                p.opacity = (p.opacity + FADE_STEP).min(p.fade_target).min(1.0);
            }

            if p.position.y < -RESPAWN_MARGIN {
                p.respawn_rising(&mut self.rng, width, height);
            }

            if p.position.x < 0.0 {
                p.position.x = width;
            } else if p.position.x > width {
                p.position.x = 0.0;
            }
        }
    }

    fn step_drifting(&mut self, pointer: Option<Vec2>) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            if let Some(m) = pointer {
                p.position += repulsion(p.position, m, HAZE_REPEL_RADIUS, HAZE_REPEL_STRENGTH);
            }

            p.position += p.velocity;

            if self.rng.gen_bool(RETARGET_CHANCE) {
                p.fade_target = self.rng.gen::<f32>() * 0.5 + 0.1;
            }

            // Ramp toward the target from either side.
            if p.opacity < p.fade_target {
                p.opacity = (p.opacity + FADE_STEP).min(p.fade_target);
            } else if p.opacity > p.fade_target {
                p.opacity = (p.opacity - FADE_STEP).max(p.fade_target);
            }
            p.opacity = p.opacity.clamp(0.0, 1.0);

            if p.position.x < 0.0 {
                p.position.x = width;
            } else if p.position.x > width {
                p.position.x = 0.0;
            }
            if p.position.y < 0.0 {
                p.position.y = height;
            } else if p.position.y > height {
                p.position.y = 0.0;
            }
        }
    }

    /// The particles in slot order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the field.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current surface width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Current surface height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The field's motion mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// Repulsive contribution for a particle at `pos` given a pointer at `from`.
///
/// Magnitude scales linearly from `strength` at the pointer down to zero at
/// `radius`, directed away from the pointer. Outside the radius, and at the
/// degenerate zero-distance case where no direction exists, the
/// contribution is the zero vector.
fn repulsion(pos: Vec2, from: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = pos - from;
    let dist = delta.length();
    if dist >= radius || dist <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let force = (radius - dist) / radius;
    (delta / dist) * force * strength
}
