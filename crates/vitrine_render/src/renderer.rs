//! Scene renderer - bridges a mounted scene to GPU buffers
//!
//! At attach time every entity gets its vertex buffer, uniform buffer, and
//! bind group; buffers are sized once and never reallocated because entity
//! buffers are fixed-length for the scene's lifetime. Per frame, `sync`
//! re-uploads only what each entity's dirty flags name: `TRANSFORM` touches
//! the small uniform, `BUFFER` rewrites vertex data. Detaching (or dropping
//! the renderer) releases everything.

use wgpu::util::DeviceExt;

use vitrine_core::{DirtyFlags, Entity, Light, MountedScene, Primitive};
use vitrine_geom::{LineSet, MeshBuffer, PointField};

use crate::camera::Camera;
use crate::pipeline::{
    ColorVertex, EntityUniforms, FrameUniforms, GpuLight, LinePipeline, MeshPipeline, MeshVertex,
    PointPipeline, SharedLayouts, DEPTH_FORMAT, MAX_LIGHTS,
};

/// GPU-side geometry of one entity
enum GpuGeometry {
    Points { additive: bool, count: u32 },
    Mesh { index_buffer: wgpu::Buffer, index_count: u32 },
    Lines { count: u32 },
}

/// GPU resources of one entity
struct GpuEntity {
    geometry: GpuGeometry,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Renders a mounted scene, re-uploading only dirty state
pub struct SceneRenderer {
    layouts: SharedLayouts,
    point_pipeline: PointPipeline,
    mesh_pipeline: MeshPipeline,
    line_pipeline: LinePipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    entities: Vec<GpuEntity>,
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl SceneRenderer {
    /// Create the renderer and its pipelines
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let layouts = SharedLayouts::new(device);
        let point_pipeline = PointPipeline::new(device, surface_format, &layouts);
        let mesh_pipeline = MeshPipeline::new(device, surface_format, &layouts);
        let line_pipeline = LinePipeline::new(device, surface_format, &layouts);

        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::bytes_of(&FrameUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &layouts.frame,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        Self {
            layouts,
            point_pipeline,
            mesh_pipeline,
            line_pipeline,
            frame_buffer,
            frame_bind_group,
            entities: Vec::new(),
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    /// (Re)create the depth texture if the surface size changed
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth_texture.is_some() && self.depth_size == (width, height) {
            return;
        }
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        self.depth_texture = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.depth_size = (width, height);
    }

    /// Build GPU resources for every entity of a freshly mounted scene
    ///
    /// Entity order follows the world's iteration order; `sync` relies on
    /// the two staying aligned, which holds because mounted scenes never
    /// add or remove entities.
    pub fn attach(&mut self, device: &wgpu::Device, scene: &MountedScene) {
        let mut entities = Vec::with_capacity(scene.world.entity_count());
        let mut total_vertices = 0usize;
        for entity in scene.world.iter() {
            entities.push(self.build_entity(device, entity));
            total_vertices += entity.primitive.vertex_count();
        }
        self.entities = entities;

        log::info!(
            "Attached scene '{}': {} entities, {} vertices",
            scene.name,
            self.entities.len(),
            total_vertices
        );
    }

    /// Drop all per-scene GPU resources
    pub fn detach(&mut self) {
        self.entities.clear();
    }

    fn build_entity(&self, device: &wgpu::Device, entity: &Entity) -> GpuEntity {
        let (geometry, vertex_bytes): (GpuGeometry, Vec<u8>) = match &entity.primitive {
            Primitive::Points { field, style } => (
                GpuGeometry::Points {
                    additive: style.additive,
                    count: field.len() as u32,
                },
                bytemuck::cast_slice(&point_vertices(field)).to_vec(),
            ),
            Primitive::Mesh(mesh) => {
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Mesh Index Buffer"),
                    contents: bytemuck::cast_slice(mesh.indices()),
                    usage: wgpu::BufferUsages::INDEX,
                });
                (
                    GpuGeometry::Mesh {
                        index_buffer,
                        index_count: mesh.indices().len() as u32,
                    },
                    bytemuck::cast_slice(&mesh_vertices(mesh)).to_vec(),
                )
            }
            Primitive::Lines(lines) => (
                GpuGeometry::Lines {
                    count: lines.positions().len() as u32,
                },
                bytemuck::cast_slice(&line_vertices(lines)).to_vec(),
            ),
        };

        // Zero-length buffers are invalid; an empty field keeps a one-vertex
        // placeholder and simply draws nothing
        let placeholder = [0u8; std::mem::size_of::<ColorVertex>()];
        let contents: &[u8] = if vertex_bytes.is_empty() {
            &placeholder
        } else {
            &vertex_bytes
        };
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Entity Vertex Buffer"),
            contents,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Entity Uniform Buffer"),
            contents: bytemuck::bytes_of(&entity_uniforms(entity)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Entity Bind Group"),
            layout: &self.layouts.entity,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        GpuEntity {
            geometry,
            vertex_buffer,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload frame uniforms and every dirty entity's changed state
    pub fn sync(&mut self, queue: &wgpu::Queue, scene: &mut MountedScene, aspect: f32) {
        let frame = build_frame_uniforms(scene, aspect);
        queue.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));

        for (entity, gpu) in scene.world.iter_mut().zip(self.entities.iter()) {
            let flags = entity.dirty_flags();
            if flags.contains(DirtyFlags::TRANSFORM) {
                queue.write_buffer(
                    &gpu.uniform_buffer,
                    0,
                    bytemuck::bytes_of(&entity_uniforms(entity)),
                );
            }
            if flags.contains(DirtyFlags::BUFFER) {
                let bytes: Vec<u8> = match &entity.primitive {
                    Primitive::Points { field, .. } => {
                        bytemuck::cast_slice(&point_vertices(field)).to_vec()
                    }
                    Primitive::Mesh(mesh) => bytemuck::cast_slice(&mesh_vertices(mesh)).to_vec(),
                    Primitive::Lines(lines) => {
                        bytemuck::cast_slice(&line_vertices(lines)).to_vec()
                    }
                };
                if !bytes.is_empty() {
                    queue.write_buffer(&gpu.vertex_buffer, 0, &bytes);
                }
            }
            entity.clear_dirty();
        }
    }

    /// Record one render pass drawing every entity
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        background: wgpu::Color,
    ) {
        let depth_view = self
            .depth_texture
            .as_ref()
            .expect("ensure_depth_texture must run before render");

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(background),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.frame_bind_group, &[]);

        for gpu in &self.entities {
            pass.set_bind_group(1, &gpu.bind_group, &[]);
            pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));

            match &gpu.geometry {
                GpuGeometry::Points { additive, count } => {
                    if *count > 0 {
                        pass.set_pipeline(self.point_pipeline.variant(*additive));
                        pass.draw(0..4, 0..*count);
                    }
                }
                GpuGeometry::Mesh {
                    index_buffer,
                    index_count,
                } => {
                    pass.set_pipeline(self.mesh_pipeline.pipeline());
                    pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..*index_count, 0, 0..1);
                }
                GpuGeometry::Lines { count } => {
                    if *count > 0 {
                        pass.set_pipeline(self.line_pipeline.pipeline());
                        pass.draw(0..*count, 0..1);
                    }
                }
            }
        }
    }
}

/// Interleave a point field into GPU vertices
pub fn point_vertices(field: &PointField) -> Vec<ColorVertex> {
    field
        .positions()
        .iter()
        .zip(field.colors())
        .map(|(p, c)| ColorVertex::new(p.to_array(), *c))
        .collect()
}

/// Interleave a mesh into GPU vertices
pub fn mesh_vertices(mesh: &MeshBuffer) -> Vec<MeshVertex> {
    mesh.positions()
        .iter()
        .zip(mesh.normals())
        .map(|(p, n)| MeshVertex::new(p.to_array(), n.to_array()))
        .collect()
}

/// Interleave a line set into GPU vertices
pub fn line_vertices(lines: &LineSet) -> Vec<ColorVertex> {
    lines
        .positions()
        .iter()
        .zip(lines.colors())
        .map(|(p, c)| ColorVertex::new(p.to_array(), *c))
        .collect()
}

/// Build the per-entity uniform block from its live state
pub fn entity_uniforms(entity: &Entity) -> EntityUniforms {
    let m = entity.material;
    let point_size = match &entity.primitive {
        Primitive::Points { style, .. } => style.size,
        _ => 0.0,
    };
    let opacity = match &entity.primitive {
        Primitive::Points { style, .. } => style.opacity,
        _ => m.opacity,
    };

    EntityUniforms {
        model: entity.transform.matrix().to_cols_array_2d(),
        base_color: [m.base_color[0], m.base_color[1], m.base_color[2], opacity],
        emissive: [
            m.emissive[0],
            m.emissive[1],
            m.emissive[2],
            m.emissive_intensity,
        ],
        surface: [m.metallic, m.roughness, point_size, 0.0],
    }
}

/// Build the per-frame uniform block from the scene's static configuration
pub fn build_frame_uniforms(scene: &MountedScene, aspect: f32) -> FrameUniforms {
    let camera = Camera::from_config(&scene.camera);

    let mut uniforms = FrameUniforms {
        proj: camera.projection_matrix(aspect).to_cols_array_2d(),
        view: camera.view_matrix().to_cols_array_2d(),
        camera_pos: [camera.position.x, camera.position.y, camera.position.z, 0.0],
        ..FrameUniforms::default()
    };

    if let Some(fog) = scene.fog {
        uniforms.fog_color = [fog.color[0], fog.color[1], fog.color[2], 1.0];
        uniforms.fog_range = [fog.near, fog.far, 0.0, 0.0];
    }

    let mut count = 0usize;
    for light in &scene.lights {
        match *light {
            Light::Ambient { color, intensity } => {
                // Multiple ambient lights accumulate
                uniforms.ambient[0] += color[0] * intensity;
                uniforms.ambient[1] += color[1] * intensity;
                uniforms.ambient[2] += color[2] * intensity;
                uniforms.ambient[3] = 1.0;
            }
            Light::Point {
                position,
                color,
                intensity,
            } => {
                if count < MAX_LIGHTS {
                    uniforms.lights[count] = GpuLight {
                        position: [position[0], position[1], position[2], 0.0],
                        color: [color[0], color[1], color[2], intensity],
                        cone: [0.0; 4],
                    };
                    count += 1;
                }
            }
            Light::Spot {
                position,
                angle,
                penumbra,
                color,
                intensity,
            } => {
                if count < MAX_LIGHTS {
                    let outer = angle.cos();
                    // Inner cosine precomputed; nudged so smoothstep stays
                    // well-formed at penumbra 0
                    let inner = (angle * (1.0 - penumbra)).cos().max(outer + 1e-4);
                    uniforms.lights[count] = GpuLight {
                        position: [position[0], position[1], position[2], 1.0],
                        color: [color[0], color[1], color[2], intensity],
                        cone: [outer, inner, 0.0, 0.0],
                    };
                    count += 1;
                }
            }
        }
    }
    uniforms.light_count[0] = count as u32;

    uniforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use vitrine_core::{
        CameraConfig, EntityTemplate, Fog, Material, PrimitiveTemplate, Scene, Transform,
    };
    use vitrine_geom::GridLayout;

    fn mini_scene() -> Scene {
        let mut scene = Scene::new(
            "Mini",
            CameraConfig {
                position: [0.0, 0.0, 12.0],
                look_at: [0.0, 0.0, 0.0],
                fov: 50.0,
                near: 0.1,
                far: 100.0,
            },
        )
        .with_light(Light::Ambient {
            color: [1.0, 1.0, 1.0],
            intensity: 0.5,
        })
        .with_light(Light::Spot {
            position: [10.0, 10.0, 10.0],
            angle: 0.15,
            penumbra: 1.0,
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
        })
        .with_light(Light::Point {
            position: [-10.0, -10.0, -10.0],
            color: [0.0, 0.831, 1.0],
            intensity: 0.5,
        });
        scene.add_entity(EntityTemplate::new(
            PrimitiveTemplate::Box {
                size: [2.0, 2.5, 0.3],
                offset: [0.0; 3],
            },
            Transform::from_position(Vec3::new(-4.0, 0.0, 0.0)),
            Material::from_rgb(0.0, 0.831, 1.0).with_opacity(0.8),
        ));
        scene
    }

    #[test]
    fn test_point_vertices_interleave() {
        let field = GridLayout::new(2, 1.0).generate();
        let vertices = point_vertices(&field);
        assert_eq!(vertices.len(), field.len());
        assert_eq!(vertices[0].position, field.positions()[0].to_array());
        assert_eq!(vertices[0].color, field.colors()[0]);
    }

    #[test]
    fn test_mesh_vertices_interleave() {
        let mesh = vitrine_geom::box_mesh(Vec3::splat(2.0));
        let vertices = mesh_vertices(&mesh);
        assert_eq!(vertices.len(), 24);
        assert_eq!(vertices[3].normal, mesh.normals()[3].to_array());
    }

    #[test]
    fn test_entity_uniforms_carry_material() {
        let scene = mini_scene();
        let mounted = vitrine_core::MountedScene::from_template(&scene, Some(1));
        let entity = mounted.world.iter().next().unwrap();

        let uniforms = entity_uniforms(entity);
        assert_eq!(uniforms.base_color, [0.0, 0.831, 1.0, 0.8]);
        // Translation lands in the last matrix column
        assert_eq!(uniforms.model[3][0], -4.0);
    }

    #[test]
    fn test_frame_uniforms_lights() {
        let scene = mini_scene();
        let mounted = vitrine_core::MountedScene::from_template(&scene, Some(1));

        let uniforms = build_frame_uniforms(&mounted, 1.5);
        assert_eq!(uniforms.light_count[0], 2);
        // Ambient folded into one accumulator
        assert!((uniforms.ambient[0] - 0.5).abs() < 1e-6);
        // First positional light is the spot
        assert_eq!(uniforms.lights[0].position[3], 1.0);
        assert!(uniforms.lights[0].cone[1] > uniforms.lights[0].cone[0]);
        // Second is the point light
        assert_eq!(uniforms.lights[1].position[3], 0.0);
    }

    #[test]
    fn test_frame_uniforms_fog_disabled_by_default() {
        let scene = mini_scene();
        let mounted = vitrine_core::MountedScene::from_template(&scene, Some(1));
        let uniforms = build_frame_uniforms(&mounted, 1.0);
        assert_eq!(uniforms.fog_color[3], 0.0);
    }

    #[test]
    fn test_frame_uniforms_fog() {
        let scene = mini_scene().with_fog(Fog {
            color: [0.039, 0.039, 0.059],
            near: 10.0,
            far: 25.0,
        });
        let mounted = vitrine_core::MountedScene::from_template(&scene, Some(1));
        let uniforms = build_frame_uniforms(&mounted, 1.0);
        assert_eq!(uniforms.fog_color[3], 1.0);
        assert_eq!(uniforms.fog_range[0], 10.0);
        assert_eq!(uniforms.fog_range[1], 25.0);
    }

    #[test]
    fn test_light_overflow_is_capped() {
        let mut scene = Scene::new("Many Lights", CameraConfig::default());
        for i in 0..6 {
            scene = scene.with_light(Light::Point {
                position: [i as f32, 0.0, 0.0],
                color: [1.0; 3],
                intensity: 1.0,
            });
        }
        let mounted = vitrine_core::MountedScene::from_template(&scene, Some(1));
        let uniforms = build_frame_uniforms(&mounted, 1.0);
        assert_eq!(uniforms.light_count[0], MAX_LIGHTS as u32);
    }
}
