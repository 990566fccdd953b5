//! Core types for the Vitrine showcase engine
//!
//! This crate provides the scene data model shared by every showcase:
//!
//! - [`Transform`] - position, Euler rotation, and scale
//! - [`Material`] - surface properties of an entity
//! - [`Entity`] - an object in a scene with transform, primitive, material,
//!   and optional animator
//! - [`Primitive`] / [`PrimitiveTemplate`] - runtime buffers and their
//!   serializable construction parameters
//! - [`World`] - container for all entities, stepped once per frame
//! - [`Scene`] - loadable/saveable scene template (camera, lights, fog,
//!   entities)
//! - [`MountedScene`] - an instantiated scene with its clock; dropping it
//!   is the teardown

mod entity;
mod primitive;
mod scene;
mod transform;
mod world;

pub use entity::{DirtyFlags, Entity, Material};
pub use primitive::{PointStyle, Primitive, PrimitiveTemplate};
pub use scene::{
    CameraConfig, Caption, EntityTemplate, Fog, Light, MountedScene, Scene, SceneLoadError,
    SceneSaveError,
};
pub use transform::Transform;
pub use world::{EntityHandle, World};

// Re-export the animator types for convenience
pub use vitrine_motion::{Animation, Distort, Drift, Growth, Ripple, Spin, Sway, Tumble};
