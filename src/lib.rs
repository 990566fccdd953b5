//! Vitrine - decorative animated 3D showcase scenes
//!
//! Renders the marketing site's background and section decorations: a
//! particle field, a rippling tech grid, floating service cards, distorted
//! service cubes, staged-growth stat bars, and the torus logotype. One
//! scene is mounted per window; its animators run once per rendered frame.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;

pub use scene::Showcase;
