#![warn(missing_docs)]
//! Geometry primitives for gaze hit testing: vectors, affine transforms
//! parsed from layout transform strings, and ray/triangle intersection.

pub mod matrix4;
pub mod ray;
pub mod vector3;

pub use matrix4::{Decomposed, Matrix4};
pub use ray::Ray;
pub use vector3::Vector3;

/// Tolerance for the ray/triangle determinant and the minimum accepted
/// hit distance. Hits at or behind the ray origin are rejected.
pub const EPSILON: f64 = 1e-6;

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
