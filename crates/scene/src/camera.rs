//! The viewer's eye.

use crate::entity::Entity;
use gazecast_math::{Ray, Vector3, DEG_TO_RAD};

/// Camera pose and field of view.
///
/// `rotation` is Euler degrees, accumulated once per frame by the caller
/// from pointer-drag and orientation input before any ray is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in layout units.
    pub position: Vector3,
    /// Euler rotation in degrees.
    pub rotation: Vector3,
    /// Field of view in degrees.
    pub fov: f64,
}

impl Camera {
    /// Default field of view in degrees.
    pub const DEFAULT_FOV: f64 = 70.0;

    /// A camera at the origin looking down the -Z axis.
    pub fn new() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            fov: Self::DEFAULT_FOV,
        }
    }

    /// The ray cast from the eye along the view direction.
    ///
    /// The resting view direction is `(0, 0, -1)`; the camera's pitch and
    /// yaw are applied with their signs flipped because the scene rotates
    /// opposite to the viewer.
    pub fn gaze_ray(&self) -> Ray {
        let direction = Vector3::new(0.0, 0.0, -1.0).rotate(Vector3::new(
            self.rotation.x * -DEG_TO_RAD,
            self.rotation.y * -DEG_TO_RAD,
            0.0,
        ));
        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Camera {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn rotation(&self) -> Vector3 {
        self.rotation
    }

    fn translate(&mut self, delta: Vector3) {
        self.position += delta;
    }

    fn rotate(&mut self, angles: Vector3, _origin: Option<Vector3>) {
        self.rotation += angles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_camera_looks_down_negative_z() {
        let ray = Camera::new().gaze_ray();
        assert_eq!(ray.origin, Vector3::ZERO);
        assert!((ray.direction - Vector3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn yaw_swings_the_gaze_sideways() {
        let mut camera = Camera::new();
        camera.rotation.y = 90.0;
        let ray = camera.gaze_ray();
        assert!((ray.direction - Vector3::new(1.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn pitch_tilts_the_gaze_vertically() {
        let mut camera = Camera::new();
        camera.rotation.x = 90.0;
        let ray = camera.gaze_ray();
        // Layout space is y-down, so looking up means -Y.
        assert!((ray.direction - Vector3::new(0.0, -1.0, 0.0)).length() < 1e-9);
    }
}
