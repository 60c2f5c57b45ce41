//! Property-based tests for vector rotation and normalization.
//!
//! Validates the geometric invariants the selection pass leans on:
//! - Normalized nonzero vectors have unit length
//! - Rotation about a zero origin set is a no-op
//! - A single-axis rotation composed with its negation is the identity
//! - The closed-form rotation matches an independent quaternion library

use gazecast_math::Vector3;
use glam::{DMat3, DVec3};
use proptest::prelude::*;

fn finite_component() -> impl Strategy<Value = f64> {
    -1e3f64..1e3f64
}

fn angle() -> impl Strategy<Value = f64> {
    -std::f64::consts::PI..std::f64::consts::PI
}

fn to_glam(v: Vector3) -> DVec3 {
    DVec3::new(v.x, v.y, v.z)
}

proptest! {
    /// Property: normalize() yields unit length for any nonzero vector.
    #[test]
    fn normalize_has_unit_length(
        x in finite_component(),
        y in finite_component(),
        z in finite_component(),
    ) {
        let v = Vector3::new(x, y, z);
        prop_assume!(v.length() > 1e-6);
        prop_assert!((v.normalize().length() - 1.0).abs() < 1e-9);
    }

    /// Property: rotating by the zero angle set moves nothing.
    #[test]
    fn zero_rotation_is_identity(
        x in finite_component(),
        y in finite_component(),
        z in finite_component(),
    ) {
        let v = Vector3::new(x, y, z);
        let rotated = v.rotate(Vector3::ZERO);
        prop_assert!((rotated - v).length() < 1e-9);
    }

    /// Property: a rotation about one axis followed by its negation
    /// returns the original vector, for any pivot.
    #[test]
    fn single_axis_rotation_roundtrips(
        x in finite_component(),
        y in finite_component(),
        z in finite_component(),
        theta in angle(),
        axis in 0usize..3,
        px in finite_component(),
        py in finite_component(),
        pz in finite_component(),
    ) {
        let v = Vector3::new(x, y, z);
        let pivot = Vector3::new(px, py, pz);
        let mut angles = Vector3::ZERO;
        match axis {
            0 => angles.x = theta,
            1 => angles.y = theta,
            _ => angles.z = theta,
        }
        let roundtripped = v
            .rotate_about(angles, pivot)
            .rotate_about(-angles, pivot);
        prop_assert!(
            (roundtripped - v).length() < 1e-6,
            "{roundtripped:?} != {v:?} for angles {angles:?} about {pivot:?}"
        );
    }

    /// Oracle: single-axis rotations agree with glam's rotation matrices.
    #[test]
    fn single_axis_rotation_matches_glam(
        x in finite_component(),
        y in finite_component(),
        z in finite_component(),
        theta in angle(),
        axis in 0usize..3,
    ) {
        let v = Vector3::new(x, y, z);
        let mut angles = Vector3::ZERO;
        let oracle = match axis {
            0 => {
                angles.x = theta;
                DMat3::from_rotation_x(theta)
            }
            1 => {
                angles.y = theta;
                DMat3::from_rotation_y(theta)
            }
            _ => {
                angles.z = theta;
                DMat3::from_rotation_z(theta)
            }
        };
        let ours = v.rotate(angles);
        let expected = oracle * to_glam(v);
        prop_assert!(
            (to_glam(ours) - expected).length() < 1e-6,
            "{ours:?} != {expected:?} for axis {axis} angle {theta}"
        );
    }

    /// Oracle: cross and dot products agree with glam.
    #[test]
    fn cross_and_dot_match_glam(
        ax in finite_component(),
        ay in finite_component(),
        az in finite_component(),
        bx in finite_component(),
        by in finite_component(),
        bz in finite_component(),
    ) {
        let a = Vector3::new(ax, ay, az);
        let b = Vector3::new(bx, by, bz);
        let cross = a.cross(b);
        let expected = to_glam(a).cross(to_glam(b));
        prop_assert!((to_glam(cross) - expected).length() < 1e-6);
        prop_assert!((a.dot(b) - to_glam(a).dot(to_glam(b))).abs() < 1e-6);
    }
}
