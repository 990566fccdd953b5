//! Instanced billboard pipeline for point clouds
//!
//! Each point is one instance expanded into a camera-facing quad in the
//! vertex shader, so points keep a world-space size with perspective
//! attenuation. Two pipeline variants cover the two blend modes the scenes
//! use: plain alpha for grid dots, additive for glowing particles.

use super::types::ColorVertex;
use super::{SharedLayouts, DEPTH_FORMAT};

/// Point-cloud render pipeline (alpha and additive variants)
pub struct PointPipeline {
    alpha: wgpu::RenderPipeline,
    additive: wgpu::RenderPipeline,
}

impl PointPipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        layouts: &SharedLayouts,
    ) -> Self {
        let shader_source = include_str!("../shaders/points.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Points Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Points Pipeline Layout"),
            bind_group_layouts: &[&layouts.frame, &layouts.entity],
            push_constant_ranges: &[],
        });

        let additive_blend = wgpu::BlendState {
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
        };

        let alpha = Self::build(
            device,
            &shader,
            &pipeline_layout,
            surface_format,
            wgpu::BlendState::ALPHA_BLENDING,
            "Points Pipeline (alpha)",
        );
        let additive = Self::build(
            device,
            &shader,
            &pipeline_layout,
            surface_format,
            additive_blend,
            "Points Pipeline (additive)",
        );

        Self { alpha, additive }
    }

    /// The pipeline variant for the given blend mode
    pub fn variant(&self, additive: bool) -> &wgpu::RenderPipeline {
        if additive {
            &self.additive
        } else {
            &self.alpha
        }
    }

    fn build(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        layout: &wgpu::PipelineLayout,
        surface_format: wgpu::TextureFormat,
        blend: wgpu::BlendState,
        label: &str,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &ColorVertex::ATTRIBUTES,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                // Translucent points read depth but never write it
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }
}
