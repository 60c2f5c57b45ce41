//! Double-precision 3D vector.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 3D vector with `f64` components.
///
/// All operations return new values; nothing mutates in place, so results
/// from independent computations never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, v: Self) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Cross product.
    pub fn cross(self, v: Self) -> Self {
        Self {
            x: self.y * v.z - self.z * v.y,
            y: self.z * v.x - self.x * v.z,
            z: self.x * v.y - self.y * v.x,
        }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit length by dividing by `length()`.
    ///
    /// A zero vector has no defined direction; the result is NaN on every
    /// component and propagates through downstream math rather than
    /// panicking.
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Rotate by a radians Euler triple about the world origin.
    ///
    /// The rotation is the closed-form composition equivalent to
    /// `Rz(angles.z) * Ry(angles.y) * Rx(angles.x)`, built from the three
    /// half-angles the way a quaternion would be.
    pub fn rotate(self, angles: Self) -> Self {
        let (sr, cr) = (angles.x / 2.0).sin_cos();
        let (sp, cp) = (angles.y / 2.0).sin_cos();
        let (sy, cy) = (angles.z / 2.0).sin_cos();

        let w = cr * cp * cy + sr * sp * sy;
        let x = sr * cp * cy - cr * sp * sy;
        let y = cr * sp * cy + sr * cp * sy;
        let z = cr * cp * sy - sr * sp * cy;

        let m0 = 1.0 - 2.0 * (y * y + z * z);
        let m1 = 2.0 * (x * y + z * w);
        let m2 = 2.0 * (x * z - y * w);

        let m4 = 2.0 * (x * y - z * w);
        let m5 = 1.0 - 2.0 * (x * x + z * z);
        let m6 = 2.0 * (z * y + x * w);

        let m8 = 2.0 * (x * z + y * w);
        let m9 = 2.0 * (y * z - x * w);
        let m10 = 1.0 - 2.0 * (x * x + y * y);

        Self {
            x: self.x * m0 + self.y * m4 + self.z * m8,
            y: self.x * m1 + self.y * m5 + self.z * m9,
            z: self.x * m2 + self.y * m6 + self.z * m10,
        }
    }

    /// Rotate by a radians Euler triple, pivoting around `origin` instead
    /// of the world origin.
    pub fn rotate_about(self, angles: Self, origin: Self) -> Self {
        (self - origin).rotate(angles) + origin
    }

    /// Parse a `"<x>px <y>px <z>px"` value string.
    ///
    /// Missing or unparseable components become NaN; callers are expected
    /// to supply well-formed strings.
    pub fn from_px_string(text: &str) -> Self {
        let mut parts = text
            .split("px")
            .map(str::trim)
            .filter(|part| !part.is_empty());
        let mut component = || {
            parts
                .next()
                .and_then(|part| part.parse::<f64>().ok())
                .unwrap_or(f64::NAN)
        };
        Self {
            x: component(),
            y: component(),
            z: component(),
        }
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, v: Self) {
        *self = *self + v;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl Mul for Vector3 {
    type Output = Self;

    /// Component-wise product.
    fn mul(self, v: Self) -> Self {
        Self::new(self.x * v.x, self.y * v.y, self.z * v.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
