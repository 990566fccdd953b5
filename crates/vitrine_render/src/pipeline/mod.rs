//! Render pipelines and GPU data types
//!
//! Three small pipelines cover every showcase primitive: instanced billboard
//! points, lit triangle meshes, and colored line lists. All three share the
//! same two bind groups (frame uniforms, per-entity uniforms).

mod lines;
mod mesh;
mod points;
pub mod types;

pub use lines::LinePipeline;
pub use mesh::MeshPipeline;
pub use points::PointPipeline;
pub use types::{ColorVertex, EntityUniforms, FrameUniforms, GpuLight, MeshVertex, MAX_LIGHTS};

/// Bind group layouts shared by every pipeline
///
/// Group 0 holds the per-frame uniforms, group 1 the per-entity uniforms.
pub struct SharedLayouts {
    pub frame: wgpu::BindGroupLayout,
    pub entity: wgpu::BindGroupLayout,
}

impl SharedLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let frame = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[uniform_entry(0)],
        });
        let entity = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Entity Bind Group Layout"),
            entries: &[uniform_entry(0)],
        });
        Self { frame, entity }
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Depth format used by every pipeline
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
