//! 4x4 affine transform parsed from layout transform strings.

use crate::vector3::Vector3;

/// A 4x4 affine matrix, stored row-major with translation in the last
/// column (indices 3, 7, 11).
///
/// By construction in this system a matrix only ever carries rotation and
/// translation. [`Matrix4::decompose`] relies on that: scale or shear in
/// the input produces numerically well-defined but geometrically wrong
/// angles, and is never detected or corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    m: [f64; 16],
}

/// Rotation and translation extracted from an affine matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    /// Euler angles in radians.
    pub rotation: Vector3,
    /// Translation component.
    pub translation: Vector3,
}

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Build from 16 row-major values.
    pub const fn from_row_major(m: [f64; 16]) -> Self {
        Self { m }
    }

    /// Extract translation and Euler rotation angles.
    ///
    /// Translation is read from the last column. The angles use the
    /// standard ZYX rotation-matrix extraction: `rx = atan2(m32, m33)`,
    /// `ry = asin(-m31)`, `rz = atan2(m21, m11)`. Only valid for pure
    /// rotation+translation input.
    pub fn decompose(&self) -> Decomposed {
        let m = &self.m;
        Decomposed {
            rotation: Vector3::new(
                m[9].atan2(m[10]),
                (-m[8]).clamp(-1.0, 1.0).asin(),
                m[4].atan2(m[0]),
            ),
            translation: Vector3::new(m[3], m[7], m[11]),
        }
    }

    /// Parse a transform-function string.
    ///
    /// A 6-value 2D form `(a, b, c, d, tx, ty)` is embedded as a 2D affine
    /// with identity Z. A 16-value 3D form is read as the column-major
    /// serialization used by layout engines. Any other value count, or a
    /// token that is not a number, yields identity: an unknown transform
    /// is treated as no transform.
    pub fn from_transform_string(text: &str) -> Self {
        let inner = match text.find('(').and_then(|open| {
            text[open + 1..]
                .find(')')
                .map(|close| &text[open + 1..open + 1 + close])
        }) {
            Some(inner) => inner,
            None => return Self::IDENTITY,
        };

        let mut values = [0.0f64; 16];
        let mut count = 0usize;
        for token in inner
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
        {
            let value = match token.parse::<f64>() {
                Ok(value) => value,
                Err(_) => return Self::IDENTITY,
            };
            if count == 16 {
                return Self::IDENTITY;
            }
            values[count] = value;
            count += 1;
        }

        match count {
            6 => {
                let [a, b, c, d, tx, ty] = [
                    values[0], values[1], values[2], values[3], values[4], values[5],
                ];
                Self::from_row_major([
                    a, c, 0.0, tx, //
                    b, d, 0.0, ty, //
                    0.0, 0.0, 1.0, 0.0, //
                    0.0, 0.0, 0.0, 1.0,
                ])
            }
            16 => {
                // Column-major on the wire; transpose into row-major.
                let mut m = [0.0f64; 16];
                for (i, value) in values.iter().enumerate() {
                    m[(i % 4) * 4 + i / 4] = *value;
                }
                Self { m }
            }
            _ => Self::IDENTITY,
        }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn identity_decomposes_to_zero() {
        let parts = Matrix4::IDENTITY.decompose();
        assert_eq!(parts.rotation, Vector3::ZERO);
        assert_eq!(parts.translation, Vector3::ZERO);
    }

    #[test]
    fn parses_2d_translation() {
        let m = Matrix4::from_transform_string("matrix(1, 0, 0, 1, 30, 40)");
        let parts = m.decompose();
        assert_eq!(parts.translation, Vector3::new(30.0, 40.0, 0.0));
        assert_eq!(parts.rotation, Vector3::ZERO);
    }

    #[test]
    fn parses_2d_rotation() {
        let (s, c) = FRAC_PI_4.sin_cos();
        let text = format!("matrix({c}, {s}, {}, {c}, 0, 0)", -s);
        let parts = Matrix4::from_transform_string(&text).decompose();
        assert!((parts.rotation.z - FRAC_PI_4).abs() < 1e-12);
        assert!(parts.rotation.x.abs() < 1e-12);
        assert!(parts.rotation.y.abs() < 1e-12);
    }

    #[test]
    fn roundtrips_3d_rotation_and_translation() {
        // 45 degree Z rotation plus translation (10, 20, 30), serialized
        // column-major the way a layout engine reports matrix3d().
        let (s, c) = FRAC_PI_4.sin_cos();
        let text = format!(
            "matrix3d({c}, {s}, 0, 0, {}, {c}, 0, 0, 0, 0, 1, 0, 10, 20, 30, 1)",
            -s
        );
        let parts = Matrix4::from_transform_string(&text).decompose();
        assert!((parts.rotation.z - FRAC_PI_4).abs() < 1e-6);
        assert!(parts.rotation.x.abs() < 1e-6);
        assert!(parts.rotation.y.abs() < 1e-6);
        assert!((parts.translation - Vector3::new(10.0, 20.0, 30.0)).length() < 1e-6);
    }

    #[test]
    fn unknown_transforms_fall_back_to_identity() {
        assert_eq!(Matrix4::from_transform_string("none"), Matrix4::IDENTITY);
        assert_eq!(Matrix4::from_transform_string(""), Matrix4::IDENTITY);
        assert_eq!(
            Matrix4::from_transform_string("matrix(1, 2, 3)"),
            Matrix4::IDENTITY
        );
        assert_eq!(
            Matrix4::from_transform_string("matrix(1, 0, 0, bogus, 0, 0)"),
            Matrix4::IDENTITY
        );
        assert_eq!(
            Matrix4::from_transform_string("translate(10px, 20px)"),
            Matrix4::IDENTITY
        );
    }
}
