//! Visual configuration for the rendered field.
//!
//! Controls how particles appear, separate from the motion mode that
//! controls how they move.
//!
//! # Usage
//!
//! ```ignore
//! FieldSimulation::new()
//!     .with_visuals(|v| {
//!         v.blend_mode(BlendMode::Additive);
//!         v.glow(0.6);
//!     })
//!     .run()
//! ```

use glam::Vec3;

/// Blend mode for particle rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (default). Particles blend based on their
    /// opacity over the background.
    #[default]
    Alpha,

    /// Additive blending. Overlapping particles become brighter, which
    /// suits a glowing field.
    Additive,
}

impl BlendMode {
    /// wgpu blend state for this mode.
    pub(crate) fn blend_state(self) -> wgpu::BlendState {
        match self {
            BlendMode::Alpha => wgpu::BlendState::ALPHA_BLENDING,
            BlendMode::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            },
        }
    }
}

/// Rendering options for the field.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Blend mode for particle rendering.
    pub blend_mode: BlendMode,
    /// Base particle color (RGB, 0.0-1.0). Opacity comes per particle.
    pub base_color: Vec3,
    /// Background clear color (RGB, 0.0-1.0).
    pub background_color: Vec3,
    /// Glow halo strength (0.0 = off). Widens the quad and adds a soft
    /// falloff around each disc.
    pub glow: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::Alpha,
            base_color: Vec3::new(1.0, 1.0, 1.0),
            background_color: Vec3::new(0.02, 0.02, 0.05), // Dark blue-black
            glow: 0.0,
        }
    }
}

impl VisualConfig {
    /// Create a new visual config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blend mode.
    pub fn blend_mode(&mut self, mode: BlendMode) -> &mut Self {
        self.blend_mode = mode;
        self
    }

    /// Set the base particle color.
    pub fn base_color(&mut self, color: Vec3) -> &mut Self {
        self.base_color = color;
        self
    }

    /// Set the background clear color.
    pub fn background(&mut self, color: Vec3) -> &mut Self {
        self.background_color = color;
        self
    }

    /// Set the glow halo strength. Clamped to `[0, 1]`.
    pub fn glow(&mut self, strength: f32) -> &mut Self {
        self.glow = strength.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_white_on_dark() {
        let v = VisualConfig::default();
        assert_eq!(v.blend_mode, BlendMode::Alpha);
        assert_eq!(v.base_color, Vec3::ONE);
        assert_eq!(v.glow, 0.0);
    }

    #[test]
    fn test_glow_clamped() {
        let mut v = VisualConfig::new();
        v.glow(4.0);
        assert_eq!(v.glow, 1.0);
        v.glow(-1.0);
        assert_eq!(v.glow, 0.0);
    }

    #[test]
    fn test_builder_chaining() {
        let mut v = VisualConfig::new();
        v.blend_mode(BlendMode::Additive)
            .base_color(Vec3::new(0.8, 0.9, 1.0))
            .glow(0.5);
        assert_eq!(v.blend_mode, BlendMode::Additive);
        assert_eq!(v.glow, 0.5);
    }
}
