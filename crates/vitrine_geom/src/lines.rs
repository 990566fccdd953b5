//! Line-list geometry
//!
//! Colored line segments for the ring decoration and the stats grid floor.

use glam::Vec3;

/// Colored line-list geometry: consecutive position pairs form segments
#[derive(Debug, Clone)]
pub struct LineSet {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
}

impl LineSet {
    /// Create a line set; positions and colors must pair up
    pub fn from_parts(positions: Vec<Vec3>, colors: Vec<[f32; 3]>) -> Self {
        assert_eq!(
            positions.len(),
            colors.len(),
            "line set buffers must have equal lengths"
        );
        assert_eq!(
            positions.len() % 2,
            0,
            "line list needs an even vertex count"
        );
        Self { positions, colors }
    }

    /// Vertex positions (pairs form segments)
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-vertex colors
    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// Number of line segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }
}

/// Square grid of lines on the XZ plane at y = 0
///
/// `size` is the full side length, `divisions` the number of cells per axis.
/// The two center lines take `center_color`, the rest `grid_color`.
pub fn grid_floor(
    size: f32,
    divisions: u32,
    center_color: [f32; 3],
    grid_color: [f32; 3],
) -> LineSet {
    let half = size / 2.0;
    let step = size / divisions as f32;
    let line_count = (divisions + 1) as usize;

    let mut positions = Vec::with_capacity(line_count * 4);
    let mut colors = Vec::with_capacity(line_count * 4);

    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        let color = if i * 2 == divisions {
            center_color
        } else {
            grid_color
        };

        // Line parallel to X
        positions.push(Vec3::new(-half, 0.0, offset));
        positions.push(Vec3::new(half, 0.0, offset));
        // Line parallel to Z
        positions.push(Vec3::new(offset, 0.0, -half));
        positions.push(Vec3::new(offset, 0.0, half));

        for _ in 0..4 {
            colors.push(color);
        }
    }

    LineSet::from_parts(positions, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_floor_shape() {
        let grid = grid_floor(20.0, 20, [1.0, 0.0, 0.0], [0.1, 0.1, 0.1]);
        // 21 lines per axis, 2 vertices per line
        assert_eq!(grid.positions().len(), 21 * 2 * 2);
        assert_eq!(grid.segment_count(), 42);
    }

    #[test]
    fn test_grid_floor_center_lines_colored() {
        let center = [1.0, 0.0, 0.0];
        let grid = grid_floor(20.0, 20, center, [0.1, 0.1, 0.1]);

        let center_vertices = grid
            .positions()
            .iter()
            .zip(grid.colors().iter())
            .filter(|(_, c)| **c == center)
            .count();
        // Exactly one line per axis runs through the origin
        assert_eq!(center_vertices, 4);
    }

    #[test]
    fn test_grid_floor_extent() {
        let grid = grid_floor(20.0, 20, [1.0; 3], [0.0; 3]);
        for p in grid.positions() {
            assert!(p.x.abs() <= 10.0 + 1e-4);
            assert!(p.z.abs() <= 10.0 + 1e-4);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "even vertex count")]
    fn test_odd_vertex_count_panics() {
        LineSet::from_parts(vec![Vec3::ZERO], vec![[0.0; 3]]);
    }
}
