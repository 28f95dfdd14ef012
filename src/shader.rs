//! GPU-side data layout and the WGSL render shader source.

use bytemuck::{Pod, Zeroable};

use crate::particle::Particle;

pub const SHADER_SOURCE: &str = include_str!("field.wgsl");

/// Per-particle instance data uploaded every frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Instance {
    pub position: [f32; 2],
    pub radius: f32,
    pub opacity: f32,
}

impl From<&Particle> for Instance {
    fn from(p: &Particle) -> Self {
        Self {
            position: [p.position.x, p.position.y],
            radius: p.radius,
            opacity: p.opacity,
        }
    }
}

impl Instance {
    /// Vertex attributes: position, radius, opacity.
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32,
        2 => Float32,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Uniforms shared by every particle in a frame.
///
/// Layout mirrors the `Uniforms` struct in `field.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub surface_size: [f32; 2],
    pub glow: f32,
    pub _pad0: f32,
    pub base_color: [f32; 3],
    pub _pad1: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_instance_from_particle() {
        let p = Particle {
            position: Vec2::new(12.0, 34.0),
            velocity: Vec2::ZERO,
            natural: Vec2::ZERO,
            radius: 1.5,
            opacity: 0.4,
            fade_target: 0.5,
        };
        let i = Instance::from(&p);
        assert_eq!(i.position, [12.0, 34.0]);
        assert_eq!(i.radius, 1.5);
        assert_eq!(i.opacity, 0.4);
    }

    #[test]
    fn test_uniforms_size_matches_wgsl_layout() {
        // vec2 + 2 scalars + padded vec3 = 32 bytes.
        assert_eq!(std::mem::size_of::<Uniforms>(), 32);
        assert_eq!(std::mem::size_of::<Instance>(), 16);
    }
}
