//! Surface distortion
//!
//! Wobbles a mesh by displacing every vertex along its normal. Offsets are
//! recomputed from the undeformed (home) positions each frame, so the
//! deformation never accumulates.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Animated surface wobble for solid meshes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Distort {
    /// Peak displacement along the vertex normal
    pub amount: f32,
    /// Wobble speed relative to the scene clock
    pub speed: f32,
    /// Spatial frequency across the surface
    pub frequency: f32,
}

impl Distort {
    /// Distortion with the default surface frequency
    pub fn new(amount: f32, speed: f32) -> Self {
        Self {
            amount,
            speed,
            frequency: 3.0,
        }
    }

    /// Signed displacement for the vertex whose home position is `home`
    #[inline]
    pub fn offset(&self, t: f32, home: Vec3) -> f32 {
        ((home.x + home.y + home.z) * self.frequency + t * self.speed).sin() * self.amount
    }

    /// Recompute every vertex position for elapsed time `t`
    ///
    /// `home`, `normals`, and `positions` come from the same mesh buffer,
    /// so the lengths match by construction.
    pub fn apply(&self, t: f32, home: &[Vec3], normals: &[Vec3], positions: &mut [Vec3]) {
        for ((p, h), n) in positions.iter_mut().zip(home).zip(normals) {
            *p = *h + *n * self.offset(t, *h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_pure() {
        let distort = Distort::new(0.3, 2.0);
        let home = Vec3::new(1.0, -0.5, 0.25);
        assert_eq!(distort.offset(3.3, home), distort.offset(3.3, home));
    }

    #[test]
    fn test_offset_bounded_by_amount() {
        let distort = Distort::new(0.3, 2.0);
        for i in 0..100 {
            let home = Vec3::new(i as f32 * 0.1, -(i as f32) * 0.05, 1.0);
            assert!(distort.offset(i as f32 * 0.2, home).abs() <= 0.3 + 1e-6);
        }
    }

    #[test]
    fn test_zero_amount_is_identity() {
        let distort = Distort::new(0.0, 2.0);
        let home = vec![Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, 0.0, 2.0)];
        let normals = vec![Vec3::X, Vec3::Y];
        let mut positions = home.clone();
        distort.apply(5.0, &home, &normals, &mut positions);
        assert_eq!(positions, home);
    }

    #[test]
    fn test_deformation_does_not_accumulate() {
        let distort = Distort::new(0.3, 1.5);
        let home = vec![Vec3::new(1.0, 0.0, 0.0)];
        let normals = vec![Vec3::X];
        let mut a = home.clone();
        let mut b = home.clone();

        distort.apply(2.0, &home, &normals, &mut a);
        // Applying extra frames first must not change the final shape
        distort.apply(0.5, &home, &normals, &mut b);
        distort.apply(1.0, &home, &normals, &mut b);
        distort.apply(2.0, &home, &normals, &mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_displacement_along_normal() {
        let distort = Distort::new(0.3, 2.0);
        let home = vec![Vec3::new(0.5, 0.5, 0.5)];
        let normals = vec![Vec3::Z];
        let mut positions = home.clone();
        distort.apply(1.0, &home, &normals, &mut positions);
        assert_eq!(positions[0].x, 0.5);
        assert_eq!(positions[0].y, 0.5);
        assert_ne!(positions[0].z, 0.5);
    }
}
