//! Point-field buffers and layout generators
//!
//! A [`PointField`] is a fixed-length pair of parallel buffers (positions and
//! colors) backing a GPU point cloud. Layout generators fill the buffers once
//! at scene mount; per-frame animators then mutate position values in place,
//! never the length.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::hsl_to_rgb;

/// Parallel position/color buffers for a point cloud
///
/// The buffer length is fixed at creation. `home` keeps the initial layout
/// so animators that recompute from initial coordinates (the grid ripple)
/// stay pure functions of elapsed time, while cumulative animators (the
/// scatter drift) mutate `positions` directly.
#[derive(Debug, Clone)]
pub struct PointField {
    home: Vec<Vec3>,
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
}

impl PointField {
    /// Create a field from initial positions and colors
    ///
    /// The two buffers must have the same length; a mismatch is a
    /// construction bug, not a runtime condition.
    pub fn from_parts(positions: Vec<Vec3>, colors: Vec<[f32; 3]>) -> Self {
        assert_eq!(
            positions.len(),
            colors.len(),
            "point field buffers must have equal lengths"
        );
        Self {
            home: positions.clone(),
            positions,
            colors,
        }
    }

    /// Create an empty field (animators over it are no-ops)
    pub fn empty() -> Self {
        Self {
            home: Vec::new(),
            positions: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field contains no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Initial positions, as laid out by the generator
    #[inline]
    pub fn home(&self) -> &[Vec3] {
        &self.home
    }

    /// Current positions
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current positions, mutable (length never changes)
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Per-point colors
    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Split borrow for animators that read the home layout while writing
    /// current positions
    #[inline]
    pub fn home_and_positions_mut(&mut self) -> (&[Vec3], &mut [Vec3]) {
        (&self.home, &mut self.positions)
    }
}

/// Uniform random scatter inside a box centered on the origin
///
/// Each axis is sampled as `(r - 0.5) * extent`, so an extent of 30 spans
/// [-15, 15]. Colors are a random hue at fixed saturation/lightness.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScatterLayout {
    /// Number of points to generate
    pub count: usize,
    /// Full extent of the box on each axis
    pub extent: Vec3,
    /// Saturation for the random-hue palette
    pub saturation: f32,
    /// Lightness for the random-hue palette
    pub lightness: f32,
}

impl ScatterLayout {
    /// Scatter with the default particle palette (s = 0.7, l = 0.6)
    pub fn new(count: usize, extent: Vec3) -> Self {
        Self {
            count,
            extent,
            saturation: 0.7,
            lightness: 0.6,
        }
    }

    /// Generate the field using the given random source
    pub fn generate<R: Rng>(&self, rng: &mut R) -> PointField {
        let mut positions = Vec::with_capacity(self.count);
        let mut colors = Vec::with_capacity(self.count);

        for _ in 0..self.count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * self.extent.x,
                (rng.gen::<f32>() - 0.5) * self.extent.y,
                (rng.gen::<f32>() - 0.5) * self.extent.z,
            ));
            colors.push(hsl_to_rgb(rng.gen::<f32>(), self.saturation, self.lightness));
        }

        PointField::from_parts(positions, colors)
    }
}

/// Regular grid of dots on the XZ plane at y = 0
///
/// Covers `[-half_size, half_size]` on both axes in `spacing` steps. Hue
/// rises with horizontal distance from the origin, producing a radial
/// color ramp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridLayout {
    /// Half-extent of the grid in steps (half_size 30 -> 61 dots per axis)
    pub half_size: i32,
    /// Distance between neighboring dots
    pub spacing: f32,
    /// Hue at the far corner relative to hue 0 at the center
    pub hue_scale: f32,
}

impl GridLayout {
    /// Grid with the default ramp (hue_scale = 0.3)
    pub fn new(half_size: i32, spacing: f32) -> Self {
        Self {
            half_size,
            spacing,
            hue_scale: 0.3,
        }
    }

    /// Hue for a dot at horizontal distance `d` from the origin
    ///
    /// Monotonically non-decreasing in `d`.
    pub fn hue_for_distance(&self, d: f32) -> f32 {
        (d / self.half_size as f32) * self.hue_scale
    }

    /// Generate the field; identical parameters always produce identical buffers
    pub fn generate(&self) -> PointField {
        let side = (self.half_size * 2 + 1).max(0) as usize;
        let mut positions = Vec::with_capacity(side * side);
        let mut colors = Vec::with_capacity(side * side);

        for xi in -self.half_size..=self.half_size {
            for zi in -self.half_size..=self.half_size {
                let x = xi as f32 * self.spacing;
                let z = zi as f32 * self.spacing;
                positions.push(Vec3::new(x, 0.0, z));

                let distance = (x * x + z * z).sqrt();
                colors.push(hsl_to_rgb(self.hue_for_distance(distance), 0.7, 0.5));
            }
        }

        PointField::from_parts(positions, colors)
    }
}

/// Ring of evenly spaced points on the XZ plane
///
/// Used to build the rotating connection-line ring: each of the `segments`
/// arcs becomes one line segment colored by its fractional hue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RingLayout {
    /// Ring radius
    pub radius: f32,
    /// Number of segments (and therefore distinct hues)
    pub segments: usize,
}

impl RingLayout {
    pub fn new(radius: f32, segments: usize) -> Self {
        Self { radius, segments }
    }

    /// The point at segment boundary `i` (wraps at `segments`)
    pub fn point(&self, i: usize) -> Vec3 {
        let angle = (i as f32 / self.segments as f32) * std::f32::consts::TAU;
        Vec3::new(angle.cos() * self.radius, 0.0, angle.sin() * self.radius)
    }

    /// Build the ring as line-list geometry, one colored segment per arc
    pub fn lines(&self) -> crate::LineSet {
        let mut positions = Vec::with_capacity(self.segments * 2);
        let mut colors = Vec::with_capacity(self.segments * 2);

        for i in 0..self.segments {
            let color = hsl_to_rgb(i as f32 / self.segments as f32, 0.7, 0.5);
            positions.push(self.point(i));
            positions.push(self.point(i + 1));
            colors.push(color);
            colors.push(color);
        }

        crate::LineSet::from_parts(positions, colors)
    }
}
