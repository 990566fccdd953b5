//! Per-frame animators for the Vitrine showcase scenes
//!
//! Every animator here is a pure function of elapsed time and its input
//! (prior position, home position, or static phase index) - with one
//! exception, [`Growth`], which carries a monotonic progress variable.
//! Each type exposes the compute step (`displaced`, `height`, `angle`,
//! `offset`, ...) separately from the loop that applies it to a buffer,
//! so the math is testable without touching any buffer.
//!
//! - [`Drift`] - cumulative particle wander plus slow field spin
//! - [`Ripple`] - traveling height wave over a grid of dots
//! - [`Spin`] - constant-rate rotation (torus ring, logotype)
//! - [`Sway`] - phase-staggered rock-and-bob for floating cards
//! - [`Tumble`] - phase-staggered rock-and-turn for service cubes
//! - [`Growth`] - staged scale-up state machine for stat bars
//! - [`Distort`] - surface wobble displacing mesh vertices along normals

mod distort;
mod field;
mod growth;
mod solid;

pub use distort::Distort;
pub use field::{Drift, Ripple};
pub use growth::{Growth, GrowthState};
pub use solid::{Spin, Sway, Tumble};

use serde::{Deserialize, Serialize};

/// The animator attached to an entity, if any
///
/// Serializable so scene templates can carry their motion alongside
/// geometry and material parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Animation {
    /// Particle scatter wander + field spin
    Drift(Drift),
    /// Grid ripple wave
    Ripple(Ripple),
    /// Constant-rate rotation
    Spin(Spin),
    /// Card rock-and-bob
    Sway(Sway),
    /// Cube rock-and-turn
    Tumble(Tumble),
    /// Staged bar growth
    Growth(Growth),
    /// Mesh surface wobble
    Distort(Distort),
}
