//! Particle state and randomized spawning.

use glam::Vec2;
use rand::Rng;

/// A single animated dot in the field.
///
/// Particles are never destroyed once the field is initialized, only reset
/// in place with freshly sampled parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position in surface pixels.
    pub position: Vec2,
    /// Current velocity in pixels per frame.
    pub velocity: Vec2,
    /// Velocity the particle relaxes toward (rising-smoke motion).
    pub natural: Vec2,
    /// Visual radius in pixels, fixed for the particle's lifetime.
    pub radius: f32,
    /// Current opacity, always in [0, 1].
    pub opacity: f32,
    /// Opacity the current opacity is chasing.
    pub fade_target: f32,
}

impl Particle {
    /// Spawn a rising-smoke particle.
    ///
    /// On initial fill the particle may appear anywhere on the surface;
    /// on reset it respawns just below the bottom edge and fades in again.
    pub fn rising<R: Rng>(rng: &mut R, width: f32, height: f32, initial: bool) -> Self {
        let x = rng.gen::<f32>() * width;
        let y = if initial {
            rng.gen::<f32>() * height
        } else {
            height + crate::field::RESPAWN_OFFSET
        };

        // Upward drift with slight horizontal jitter.
        let natural = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 0.5,
            -(rng.gen::<f32>() * 1.5 + 0.5),
        );

        Self {
            position: Vec2::new(x, y),
            velocity: natural,
            natural,
            radius: rng.gen::<f32>() * 2.0 + 0.5,
            opacity: 0.0,
            fade_target: rng.gen::<f32>() * 0.5 + 0.1,
        }
    }

    /// Spawn a drifting-haze particle: constant velocity, position anywhere.
    pub fn drifting<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 0.5,
            (rng.gen::<f32>() - 0.5) * 0.5,
        );

        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity,
            natural: velocity,
            radius: rng.gen::<f32>() * 2.0 + 0.5,
            opacity: 0.0,
            fade_target: rng.gen::<f32>() * 0.5 + 0.1,
        }
    }

    /// Reset in place with fresh rising-smoke parameters.
    pub(crate) fn respawn_rising<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        *self = Self::rising(rng, width, height, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_rising_spawn_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = Particle::rising(&mut rng, 800.0, 600.0, true);
            assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
            assert!(p.natural.y <= -0.5 && p.natural.y >= -2.0);
            assert!(p.natural.x.abs() <= 0.25);
            assert!(p.radius >= 0.5 && p.radius <= 2.5);
            assert_eq!(p.opacity, 0.0);
            assert!(p.fade_target >= 0.1 && p.fade_target <= 0.6);
        }
    }

    #[test]
    fn test_rising_reset_spawns_below_bottom() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p = Particle::rising(&mut rng, 800.0, 600.0, false);
        assert_eq!(p.position.y, 600.0 + crate::field::RESPAWN_OFFSET);
    }

    #[test]
    fn test_drifting_velocity_bounded() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..200 {
            let p = Particle::drifting(&mut rng, 800.0, 600.0);
            assert!(p.velocity.x.abs() <= 0.25);
            assert!(p.velocity.y.abs() <= 0.25);
            assert_eq!(p.velocity, p.natural);
        }
    }
}
