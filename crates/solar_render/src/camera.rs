//! Fixed viewing camera
//!
//! The scene is viewed from a point on the +Z axis looking back at the
//! origin. Unless overridden, the eye sits halfway between the near and far
//! planes so the whole orbital plane falls inside the depth range.

use solar_math::mat4::{self, Mat4};

/// Perspective camera at a fixed distance from the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    /// Vertical field of view in degrees
    pub fov_y: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Eye distance from the origin along +Z
    pub distance: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new(120.0, 10.0, 150.0)
    }
}

impl ViewCamera {
    /// Camera with the eye placed midway between the clipping planes
    pub fn new(fov_y: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            near,
            far,
            distance: 0.5 * (near + far),
        }
    }

    /// Override the eye distance
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Viewing transformation: moves the world away from the eye
    pub fn view_matrix(&self) -> Mat4 {
        mat4::translation(0.0, 0.0, -self.distance)
    }

    /// Projection for the given surface aspect ratio
    pub fn projection(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }
}
