//! Ray casting against triangles and quads.

use crate::vector3::Vector3;
use crate::EPSILON;

/// An oriented line used for gaze casting.
///
/// `direction` is not required to be unit length; intersection distances
/// are measured in multiples of its magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vector3,
    /// Direction the ray travels in.
    pub direction: Vector3,
}

impl Ray {
    /// Create a ray from an origin and direction.
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Moller-Trumbore ray/triangle intersection.
    ///
    /// Returns the parametric distance along the ray, or `None` when the
    /// ray is parallel to the triangle plane, the hit point falls outside
    /// the triangle, or the hit lies at or behind the origin. All of
    /// those are ordinary no-hit outcomes, not errors.
    pub fn triangle_intersection(&self, v1: Vector3, v2: Vector3, v3: Vector3) -> Option<f64> {
        let e1 = v2 - v1;
        let e2 = v3 - v1;

        let p = self.direction.cross(e2);
        let det = e1.dot(p);
        if det > -EPSILON && det < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let t_vec = self.origin - v1;
        let u = t_vec.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = t_vec.cross(e1);
        let v = self.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(q) * inv_det;
        (t > EPSILON).then_some(t)
    }

    /// Intersect the quad `a-b-c-d` by testing triangle `(a, b, c)` and
    /// falling back to `(a, c, d)`.
    pub fn quad_intersection(
        &self,
        a: Vector3,
        b: Vector3,
        c: Vector3,
        d: Vector3,
    ) -> Option<f64> {
        self.triangle_intersection(a, b, c)
            .or_else(|| self.triangle_intersection(a, c, d))
    }
}
