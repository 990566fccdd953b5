//! Serializable primitive templates and their runtime buffers
//!
//! `PrimitiveTemplate` stores construction parameters and lives in scene
//! files; `instantiate` allocates the actual fixed-size buffers at mount
//! time. The split mirrors the template/runtime divide of the scene model:
//! templates serialize, buffers animate.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use vitrine_geom::{
    box_mesh, cylinder_mesh, grid_floor, torus_mesh, GridLayout, LineSet, PointField, RingLayout,
    ScatterLayout,
};

/// How a point cloud is drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointStyle {
    /// Point size in world units
    pub size: f32,
    /// Overall opacity of the cloud
    pub opacity: f32,
    /// Additive blending (glowing particles) instead of alpha blending
    pub additive: bool,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            size: 0.1,
            opacity: 1.0,
            additive: false,
        }
    }
}

/// Serializable primitive construction parameters
///
/// Each variant stores what is needed to build the runtime buffers.
/// Primitives are created in local space; the entity transform positions
/// them in the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveTemplate {
    /// Uniform random scatter of colored points inside a box
    Scatter {
        count: usize,
        extent: [f32; 3],
        size: f32,
        opacity: f32,
        additive: bool,
    },
    /// Regular grid of dots with a radial hue ramp
    GridDots {
        half_size: i32,
        spacing: f32,
        size: f32,
        opacity: f32,
    },
    /// Ring of colored line segments
    Ring { radius: f32, segments: usize },
    /// Axis-aligned box, optionally shifted in local space
    ///
    /// Stat bars bake their ground anchor into `offset` so the staged
    /// growth scale lifts them out of the floor instead of inflating them
    /// around their center.
    Box {
        size: [f32; 3],
        #[serde(default)]
        offset: [f32; 3],
    },
    /// Torus around the local Z axis
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    /// Capped cylinder along the local Y axis, optionally shifted
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
        #[serde(default)]
        offset: [f32; 3],
    },
    /// Square grid of floor lines
    GridFloor {
        size: f32,
        divisions: u32,
        center_color: [f32; 3],
        grid_color: [f32; 3],
    },
}

impl PrimitiveTemplate {
    /// Allocate the runtime buffers for this template
    ///
    /// Only `Scatter` draws from the random source; every other variant is
    /// deterministic.
    pub fn instantiate<R: Rng>(&self, rng: &mut R) -> Primitive {
        match *self {
            PrimitiveTemplate::Scatter {
                count,
                extent,
                size,
                opacity,
                additive,
            } => Primitive::Points {
                field: ScatterLayout::new(count, Vec3::from_array(extent)).generate(rng),
                style: PointStyle {
                    size,
                    opacity,
                    additive,
                },
            },
            PrimitiveTemplate::GridDots {
                half_size,
                spacing,
                size,
                opacity,
            } => Primitive::Points {
                field: GridLayout::new(half_size, spacing).generate(),
                style: PointStyle {
                    size,
                    opacity,
                    additive: false,
                },
            },
            PrimitiveTemplate::Ring { radius, segments } => {
                Primitive::Lines(RingLayout::new(radius, segments).lines())
            }
            PrimitiveTemplate::Box { size, offset } => Primitive::Mesh(
                box_mesh(Vec3::from_array(size)).translated(Vec3::from_array(offset)),
            ),
            PrimitiveTemplate::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => Primitive::Mesh(torus_mesh(radius, tube, radial_segments, tubular_segments)),
            PrimitiveTemplate::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
                offset,
            } => Primitive::Mesh(
                cylinder_mesh(radius_top, radius_bottom, height, segments)
                    .translated(Vec3::from_array(offset)),
            ),
            PrimitiveTemplate::GridFloor {
                size,
                divisions,
                center_color,
                grid_color,
            } => Primitive::Lines(grid_floor(size, divisions, center_color, grid_color)),
        }
    }
}

/// Runtime geometry buffers of an entity
pub enum Primitive {
    /// A point cloud with per-point colors
    Points {
        field: PointField,
        style: PointStyle,
    },
    /// An indexed triangle mesh
    Mesh(vitrine_geom::MeshBuffer),
    /// Colored line segments
    Lines(LineSet),
}

impl Primitive {
    /// Number of vertices this primitive uploads
    pub fn vertex_count(&self) -> usize {
        match self {
            Primitive::Points { field, .. } => field.len(),
            Primitive::Mesh(mesh) => mesh.vertex_count(),
            Primitive::Lines(lines) => lines.positions().len(),
        }
    }
}
