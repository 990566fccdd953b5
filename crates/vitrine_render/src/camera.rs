//! Perspective camera
//!
//! Built once per scene from its [`CameraConfig`]; the scene configuration
//! never changes after mount, so the only per-frame input is the aspect
//! ratio of the surface.

use glam::{Mat4, Vec3};
use vitrine_core::CameraConfig;

/// A look-at perspective camera
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Camera {
    /// Build a camera from a scene's camera configuration
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            look_at: Vec3::from_array(config.look_at),
            fov_deg: config.fov,
            near: config.near,
            far: config.far,
        }
    }

    /// View matrix (world -> camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    /// Projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
