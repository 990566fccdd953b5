//! Entity transform (position, rotation, scale)
//!
//! Rotation is stored as Euler angles (XYZ order, radians) because every
//! animator in this codebase drives individual axes; the matrix conversion
//! happens once per frame at upload time.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A transform with position, Euler rotation, and per-axis scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as Euler angles in radians (applied X, then Y, then Z)
    pub rotation: Vec3,
    /// Per-axis scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// The rotation as a quaternion
    #[inline]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// The full model matrix (scale, then rotation, then translation)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }

    /// Translate by an offset
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Set a uniform scale
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_matrix() {
        let t = Transform::identity();
        let p = t.matrix().transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert!(vec_approx_eq(p, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let p = t.matrix().transform_point3(Vec3::ZERO);
        assert!(vec_approx_eq(p, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_scale_applied_before_translation() {
        let mut t = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
        t.scale = Vec3::splat(2.0);
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(12.0, 0.0, 0.0)));
    }

    #[test]
    fn test_yaw_rotation() {
        let t = Transform::from_position_rotation(
            Vec3::ZERO,
            Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        );
        // A quarter turn about Y sends +X to -Z
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(0.0, 0.0, -1.0)), "got {:?}", p);
    }

    #[test]
    fn test_per_axis_scale() {
        let mut t = Transform::identity();
        t.scale = Vec3::new(1.0, 0.5, 1.0);
        let p = t.matrix().transform_point3(Vec3::new(1.0, 4.0, 1.0));
        assert!(vec_approx_eq(p, Vec3::new(1.0, 2.0, 1.0)));
    }

    #[test]
    fn test_translate() {
        let mut t = Transform::identity();
        t.translate(Vec3::new(0.0, 1.5, 0.0));
        t.translate(Vec3::new(0.0, 1.5, 0.0));
        assert!(vec_approx_eq(t.position, Vec3::new(0.0, 3.0, 0.0)));
    }

    #[test]
    fn test_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.position, Vec3::ZERO);
    }
}
