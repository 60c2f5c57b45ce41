//! Planar quadrilateral representing one hierarchy node's rectangle.

use crate::entity::Entity;
use crate::node::LayoutRect;
use gazecast_math::{Matrix4, Ray, Vector3};

/// A node's rectangle posed in 3D.
///
/// Corners run `a` top-left, `b` top-right, `c` bottom-right, `d`
/// bottom-left, forming triangles `a-b-c` and `a-c-d` along the `a-c`
/// diagonal. After any [`Face::rotate`] or [`Face::translate`] the
/// corners and normal reflect the same rigid transform as `position` and
/// `rotation`.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Top-left corner.
    pub a: Vector3,
    /// Top-right corner.
    pub b: Vector3,
    /// Bottom-right corner.
    pub c: Vector3,
    /// Bottom-left corner.
    pub d: Vector3,
    /// Surface normal, rotated with the face.
    pub normal: Vector3,
    /// Pivot the node's own rotation is applied around.
    pub origin: Vector3,
    /// Accumulated translation.
    pub position: Vector3,
    /// Accumulated Euler rotation in radians.
    pub rotation: Vector3,
    /// Whether the gaze ray may select this face.
    pub can_interact: bool,
}

impl Face {
    /// An untransformed face with zero-size geometry.
    pub fn new() -> Self {
        Self {
            a: Vector3::ZERO,
            b: Vector3::ZERO,
            c: Vector3::ZERO,
            d: Vector3::ZERO,
            normal: Vector3::new(0.0, 0.0, 1.0),
            origin: Vector3::ZERO,
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            can_interact: true,
        }
    }

    /// Build a face from one node's layout snapshot.
    ///
    /// The rectangle becomes an axis-aligned quad in the z=0 plane. The
    /// transform string is decomposed into rotation and translation; the
    /// rotation (when nonzero on any axis) is applied around the parsed
    /// transform-origin, the translation always.
    pub fn from_geometry(
        rect: &LayoutRect,
        transform: &str,
        transform_origin: &str,
        interactable: bool,
    ) -> Self {
        let right = rect.left + rect.width;
        let bottom = rect.top + rect.height;

        let mut face = Self::new();
        face.can_interact = interactable;
        face.a = Vector3::new(rect.left, rect.top, 0.0);
        face.b = Vector3::new(right, rect.top, 0.0);
        face.c = Vector3::new(right, bottom, 0.0);
        face.d = Vector3::new(rect.left, bottom, 0.0);
        face.origin = Vector3::from_px_string(transform_origin);

        let parts = Matrix4::from_transform_string(transform).decompose();
        if parts.rotation.x != 0.0 || parts.rotation.y != 0.0 || parts.rotation.z != 0.0 {
            face.rotate(parts.rotation, Some(face.origin));
        }
        face.translate(parts.translation);
        face
    }

    /// Shift the face and its accumulated position by `delta`.
    pub fn translate(&mut self, delta: Vector3) {
        self.position += delta;
        self.a += delta;
        self.b += delta;
        self.c += delta;
        self.d += delta;
    }

    /// Rotate the face by a radians Euler triple.
    ///
    /// Corners pivot around `origin` when given (the world origin
    /// otherwise); the normal is direction-only and always rotates about
    /// the world origin.
    pub fn rotate(&mut self, angles: Vector3, origin: Option<Vector3>) {
        self.rotation += angles;
        match origin {
            Some(pivot) => {
                self.a = self.a.rotate_about(angles, pivot);
                self.b = self.b.rotate_about(angles, pivot);
                self.c = self.c.rotate_about(angles, pivot);
                self.d = self.d.rotate_about(angles, pivot);
            }
            None => {
                self.a = self.a.rotate(angles);
                self.b = self.b.rotate(angles);
                self.c = self.c.rotate(angles);
                self.d = self.d.rotate(angles);
            }
        }
        self.normal = self.normal.rotate(angles);
    }

    /// Distance at which `ray` pierces this face, if it does.
    pub fn intersection_distance(&self, ray: &Ray) -> Option<f64> {
        ray.quad_intersection(self.a, self.b, self.c, self.d)
    }
}

impl Default for Face {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Face {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn rotation(&self) -> Vector3 {
        self.rotation
    }

    fn translate(&mut self, delta: Vector3) {
        Face::translate(self, delta);
    }

    fn rotate(&mut self, angles: Vector3, origin: Option<Vector3>) {
        Face::rotate(self, angles, origin);
    }
}
