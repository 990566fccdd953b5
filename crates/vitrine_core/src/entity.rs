//! Entity and Material types
//!
//! An Entity is one visual element of a scene: a point field, a solid mesh,
//! or a line set, with its transform, material, and animators.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use vitrine_motion::Animation;

use crate::{Primitive, Transform};

bitflags! {
    /// Which parts of an entity changed this frame and need re-uploading
    ///
    /// Transform changes only touch the per-entity uniform; buffer changes
    /// require rewriting vertex data.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Transform (position, rotation, scale) has changed
        const TRANSFORM = 1 << 0;
        /// Vertex buffer contents have changed
        const BUFFER = 1 << 1;
        /// Everything needs uploading (new entities start here)
        const ALL = Self::TRANSFORM.bits() | Self::BUFFER.bits();
    }
}

/// Surface properties of an entity
///
/// Point fields only use `base_color`-independent per-vertex colors plus
/// `opacity`; solid meshes use the full set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    /// Base color as RGB (each component 0.0-1.0)
    pub base_color: [f32; 3],
    /// Metallic factor (0 = dielectric, 1 = metal)
    pub metallic: f32,
    /// Roughness factor (0 = mirror, 1 = fully diffuse)
    pub roughness: f32,
    /// Self-illumination color
    pub emissive: [f32; 3],
    /// Strength of the emissive term
    pub emissive_intensity: f32,
    /// Overall opacity (1 = opaque)
    pub opacity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0],
            metallic: 0.0,
            roughness: 1.0,
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
            opacity: 1.0,
        }
    }
}

impl Material {
    /// Opaque diffuse material with the given RGB color
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            base_color: [r, g, b],
            ..Self::default()
        }
    }

    /// Set metallic and roughness factors
    pub fn with_surface(mut self, metallic: f32, roughness: f32) -> Self {
        self.metallic = metallic;
        self.roughness = roughness;
        self
    }

    /// Glow in the given color at the given strength
    pub fn with_emissive(mut self, color: [f32; 3], intensity: f32) -> Self {
        self.emissive = color;
        self.emissive_intensity = intensity;
        self
    }

    /// Make the material translucent
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A single visual element of a scene
///
/// The `rest` transform preserves the pose the entity was composed with;
/// animators derive the live `transform` from it and the scene clock, so
/// re-running a frame at the same time yields the same pose.
pub struct Entity {
    /// Optional name (for lookup and log messages)
    pub name: Option<String>,
    /// The pose the entity was composed with
    pub rest: Transform,
    /// The live transform, updated by the animator
    pub transform: Transform,
    /// The entity's geometry buffers
    pub primitive: Primitive,
    /// The entity's material
    pub material: Material,
    /// Per-frame animators, applied in order each tick
    pub animations: Vec<Animation>,
    /// Change tracking for uploads
    dirty: DirtyFlags,
}

impl Entity {
    /// Create an entity from a primitive with default pose and material
    pub fn new(primitive: Primitive) -> Self {
        Self {
            name: None,
            rest: Transform::identity(),
            transform: Transform::identity(),
            primitive,
            material: Material::default(),
            animations: Vec::new(),
            dirty: DirtyFlags::ALL,
        }
    }

    /// Create an entity with primitive, pose, and material
    pub fn with_transform(primitive: Primitive, transform: Transform, material: Material) -> Self {
        Self {
            name: None,
            rest: transform,
            transform,
            primitive,
            material,
            animations: Vec::new(),
            dirty: DirtyFlags::ALL,
        }
    }

    /// Set the name of this entity
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an animator (an entity may carry several, e.g. tumble + distort)
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animations.push(animation);
        self
    }

    // --- Dirty tracking ---

    /// Whether any dirty flags are set
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// The current dirty flags
    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Mark this entity as dirty with the given flags
    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    /// Clear all dirty flags (called after upload)
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }

    /// Set the live transform and mark it dirty
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.mark_dirty(DirtyFlags::TRANSFORM);
    }
}
