//! Posable-object capability.

use gazecast_math::Vector3;

/// Anything that carries a pose and can be moved rigidly.
///
/// A capability trait rather than a base type: faces and cameras share it
/// without being forced into a common hierarchy.
pub trait Entity {
    /// Accumulated position.
    fn position(&self) -> Vector3;

    /// Accumulated Euler rotation. Faces track radians, the camera
    /// degrees; see each implementor.
    fn rotation(&self) -> Vector3;

    /// Shift the entity by `delta`.
    fn translate(&mut self, delta: Vector3);

    /// Rotate the entity by an Euler triple, optionally pivoting around
    /// `origin`.
    fn rotate(&mut self, angles: Vector3, origin: Option<Vector3>);
}
