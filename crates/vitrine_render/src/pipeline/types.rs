//! GPU-compatible data types
//!
//! These types are designed to match the WGSL uniform and vertex layouts
//! exactly. All derive Pod and Zeroable for safe buffer writes.

use bytemuck::{Pod, Zeroable};

/// Maximum number of point/spot lights per scene
pub const MAX_LIGHTS: usize = 4;

/// A vertex with a position and a color (points and lines)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in local space
    pub position: [f32; 3],
    /// RGB color
    pub color: [f32; 3],
}

impl ColorVertex {
    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Vertex attributes: position at 0, color at 1
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
}

/// A mesh vertex with a position and a normal
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in local space
    pub position: [f32; 3],
    /// Surface normal of the undeformed shape
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    /// Vertex attributes: position at 0, normal at 1
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
}

/// One light as the shaders see it
///
/// `position.w` selects the kind (0 = point, 1 = spot aimed at the origin);
/// `cone` carries the spot's outer and inner cosine, precomputed on the CPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct GpuLight {
    /// xyz position, w kind
    pub position: [f32; 4],
    /// rgb color, w intensity
    pub color: [f32; 4],
    /// x outer cosine, y inner cosine (unused for point lights)
    pub cone: [f32; 4],
}

/// Per-frame uniforms shared by all pipelines
/// Layout: 400 bytes total (must match the FrameUniforms struct in each shader)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Projection matrix (64 bytes)
    pub proj: [[f32; 4]; 4],
    /// View matrix (64 bytes)
    pub view: [[f32; 4]; 4],
    /// Camera position, w unused (16 bytes)
    pub camera_pos: [f32; 4],
    /// Fog color, w = 1 when fog is enabled (16 bytes)
    pub fog_color: [f32; 4],
    /// Fog near/far distances, zw unused (16 bytes)
    pub fog_range: [f32; 4],
    /// Ambient light color, w intensity (16 bytes)
    pub ambient: [f32; 4],
    /// Positional lights (192 bytes)
    pub lights: [GpuLight; MAX_LIGHTS],
    /// Number of active lights in x, yzw unused (16 bytes)
    pub light_count: [u32; 4],
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0; 4],
            fog_color: [0.0; 4],
            fog_range: [0.0, 1.0, 0.0, 0.0],
            ambient: [0.0; 4],
            lights: [GpuLight::default(); MAX_LIGHTS],
            light_count: [0; 4],
        }
    }
}

/// Per-entity uniforms
/// Layout: 112 bytes total (must match the EntityUniforms struct in each shader)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct EntityUniforms {
    /// Model matrix (64 bytes)
    pub model: [[f32; 4]; 4],
    /// Base color, w opacity (16 bytes)
    pub base_color: [f32; 4],
    /// Emissive color, w intensity (16 bytes)
    pub emissive: [f32; 4],
    /// x metallic, y roughness, z point size, w unused (16 bytes)
    pub surface: [f32; 4],
}

impl Default for EntityUniforms {
    fn default() -> Self {
        Self {
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
            base_color: [1.0, 1.0, 1.0, 1.0],
            emissive: [0.0; 4],
            surface: [0.0, 1.0, 0.1, 0.0],
        }
    }
}
