//! Solid mesh builders
//!
//! Indexed triangle meshes with per-vertex normals for the card, cube, bar,
//! glow-disc, and torus entities. Like point fields, a mesh buffer keeps its
//! `home` positions so the surface-distortion animator can recompute vertex
//! offsets from the undeformed shape every frame.

use glam::Vec3;

/// Indexed triangle mesh with mutable vertex positions
#[derive(Debug, Clone)]
pub struct MeshBuffer {
    home: Vec<Vec3>,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Create a mesh from raw parts
    pub fn from_parts(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        assert_eq!(
            positions.len(),
            normals.len(),
            "mesh buffers must have equal lengths"
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < positions.len()),
            "mesh index out of bounds"
        );
        Self {
            home: positions.clone(),
            positions,
            normals,
            indices,
        }
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Undeformed vertex positions
    #[inline]
    pub fn home(&self) -> &[Vec3] {
        &self.home
    }

    /// Current vertex positions
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current vertex positions, mutable (length never changes)
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Per-vertex normals of the undeformed shape
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle indices
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Split borrow for the distortion animator: home and normals read-only,
    /// current positions writable
    #[inline]
    pub fn deform_parts_mut(&mut self) -> (&[Vec3], &[Vec3], &mut [Vec3]) {
        (&self.home, &self.normals, &mut self.positions)
    }

    /// Shift the whole mesh in local space
    ///
    /// Bars bake their ground anchor this way: a box with its base at the
    /// local origin scales up from the ground, the way the staged growth
    /// animation expects.
    pub fn translated(mut self, offset: Vec3) -> Self {
        for p in &mut self.home {
            *p += offset;
        }
        for p in &mut self.positions {
            *p += offset;
        }
        self
    }
}

/// Axis-aligned box centered at the origin
///
/// 24 vertices (four per face) so each face carries its own flat normal.
pub fn box_mesh(size: Vec3) -> MeshBuffer {
    let h = size * 0.5;

    // (normal, two in-plane tangents) per face
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::NEG_Z, Vec3::X),
        (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (face, (normal, up, right)) in faces.iter().enumerate() {
        let center = *normal * (normal.abs().dot(h));
        let u = *up * (up.abs().dot(h));
        let r = *right * (right.abs().dot(h));

        let base = (face * 4) as u32;
        positions.push(center - u - r);
        positions.push(center - u + r);
        positions.push(center + u + r);
        positions.push(center + u - r);
        for _ in 0..4 {
            normals.push(*normal);
        }

        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    MeshBuffer::from_parts(positions, normals, indices)
}

/// Torus around the Z axis, centered at the origin
///
/// `radius` is the distance from the origin to the tube center, `tube` the
/// tube radius. Vertex layout matches the usual parametric sweep:
/// `(radial_segments + 1) * (tubular_segments + 1)` vertices.
pub fn torus_mesh(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> MeshBuffer {
    let ring = tubular_segments + 1;
    let mut positions = Vec::with_capacity((radial_segments as usize + 1) * ring as usize);
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut indices =
        Vec::with_capacity(radial_segments as usize * tubular_segments as usize * 6);

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;

            let center = Vec3::new(u.cos() * radius, u.sin() * radius, 0.0);
            let pos = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );

            positions.push(pos);
            normals.push((pos - center).normalize());
        }
    }

    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let a = j * ring + i;
            let b = (j + 1) * ring + i;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    MeshBuffer::from_parts(positions, normals, indices)
}

/// Capped cylinder along the Y axis, centered at the origin
pub fn cylinder_mesh(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
) -> MeshBuffer {
    let half = height / 2.0;

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side wall: slope folds the radius difference into the normal
    let slope = (radius_bottom - radius_top) / height;
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos, slope, sin).normalize();

        positions.push(Vec3::new(cos * radius_top, half, sin * radius_top));
        normals.push(normal);
        positions.push(Vec3::new(cos * radius_bottom, -half, sin * radius_bottom));
        normals.push(normal);
    }
    for i in 0..segments {
        let a = i * 2;
        indices.extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }

    // Caps: fan around a center vertex
    for (y, radius, normal) in [
        (half, radius_top, Vec3::Y),
        (-half, radius_bottom, Vec3::NEG_Y),
    ] {
        let center = positions.len() as u32;
        positions.push(Vec3::new(0.0, y, 0.0));
        normals.push(normal);

        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            positions.push(Vec3::new(angle.cos() * radius, y, angle.sin() * radius));
            normals.push(normal);
        }
        for i in 0..segments {
            let a = center + 1 + i;
            if normal.y > 0.0 {
                indices.extend_from_slice(&[center, a + 1, a]);
            } else {
                indices.extend_from_slice(&[center, a, a + 1]);
            }
        }
    }

    MeshBuffer::from_parts(positions, normals, indices)
}
