//! Rendering library for the Vitrine showcases
//!
//! This crate turns a mounted scene into frames:
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - perspective camera built from a scene's config
//! - [`pipeline`] - point, mesh, and line pipelines plus their GPU types
//! - [`renderer::SceneRenderer`] - per-entity GPU buffers with dirty-flag
//!   re-upload
//!
//! GPU resources for a scene are created when it is attached and dropped
//! when it is detached (or when the renderer is), so teardown is scoped,
//! not callback-driven.

pub mod camera;
pub mod context;
pub mod pipeline;
pub mod renderer;

pub use camera::Camera;
pub use context::RenderContext;
pub use renderer::SceneRenderer;
