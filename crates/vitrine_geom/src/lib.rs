//! Geometry construction for the Vitrine showcase scenes
//!
//! This crate builds the fixed-size numeric buffers that the animated
//! scenes mutate every frame:
//!
//! - [`PointField`] - parallel position/color buffers for particle and dot fields
//! - [`ScatterLayout`], [`GridLayout`], [`RingLayout`] - point-field initializers
//! - [`MeshBuffer`] - positions, normals, and indices for solid meshes
//! - [`LineSet`] - colored line-list geometry (ring segments, grid floors)
//! - [`hsl_to_rgb`] - the color ramp used by every hue-derived palette
//!
//! Everything here is pure construction: buffers are allocated once with
//! their final length and only their values mutate afterwards.

mod color;
mod field;
mod lines;
mod mesh;

pub use color::hsl_to_rgb;
pub use field::{GridLayout, PointField, RingLayout, ScatterLayout};
pub use lines::{grid_floor, LineSet};
pub use mesh::{box_mesh, cylinder_mesh, torus_mesh, MeshBuffer};
