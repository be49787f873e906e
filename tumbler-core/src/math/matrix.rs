//! 4x4 transform matrices
//!
//! Points are treated as row vectors `[x y z 1]` multiplied on the left,
//! so translation lives in row 3 and the projective `w` comes from
//! column 3.

use super::vector::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major 4x4 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// All-zero matrix
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity transform
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Perspective projection
    ///
    /// - `near`, `far`: clip plane distances along +z
    /// - `fov_deg`: vertical field of view in degrees
    /// - `aspect`: display height / width. Inverted from the usual
    ///   width / height to compensate for the non-square pixel grid.
    pub fn projection(near: f32, far: f32, fov_deg: f32, aspect: f32) -> Self {
        let fov_rad = fov_deg * 0.5 / 180.0 * core::f32::consts::PI;
        let s = 1.0 / libm::tanf(fov_rad);
        let depth = far - near;

        let mut res = Self::ZERO;
        res.m[0][0] = s * aspect;
        res.m[1][1] = s;
        res.m[2][2] = far / depth;
        res.m[3][2] = -far * near / depth;
        res.m[2][3] = 1.0;
        res
    }

    /// Rotation composed from Euler angles
    ///
    /// `a` rotates about x, `b` about y and `g` about z.
    pub fn rotation(a: f32, b: f32, g: f32) -> Self {
        let (sa, ca) = (libm::sinf(a), libm::cosf(a));
        let (sb, cb) = (libm::sinf(b), libm::cosf(b));
        let (sg, cg) = (libm::sinf(g), libm::cosf(g));

        let mut res = Self::ZERO;
        res.m[0][0] = cb * cg;
        res.m[0][1] = sa * sb * cg - ca * sg;
        res.m[0][2] = ca * sb * cg + sa * sg;
        res.m[1][0] = cb * sg;
        res.m[1][1] = sa * sb * sg + ca * cg;
        res.m[1][2] = ca * sb * sg - sa * cg;
        res.m[2][0] = -sb;
        res.m[2][1] = sa * cb;
        res.m[2][2] = ca * cb;
        res.m[3][3] = 1.0;
        res
    }

    /// Apply this transform to a point (implicit `w = 1`)
    ///
    /// The result is divided by the computed `w` unless it is exactly
    /// zero, in which case the un-projected coordinates are returned.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        let x = p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0];
        let y = p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1];
        let z = p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2];
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];

        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    /// Row `i` of the upper-left 3x3 block
    pub fn row3(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[i][0], self.m[i][1], self.m[i][2])
    }

    /// Determinant of the upper-left 3x3 block
    pub fn determinant3(&self) -> f32 {
        self.row3(0).dot(self.row3(1).cross(self.row3(2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn assert_orthonormal(m: &Mat4) {
        for i in 0..3 {
            assert!(approx(m.row3(i).length(), 1.0), "row {} not unit", i);
        }
        assert!(approx(m.determinant3(), 1.0));
    }

    #[test]
    fn test_projection_entries() {
        let aspect = 32.0 / 128.0;
        let m = Mat4::projection(0.1, 10.0, 60.0, aspect);
        let s = 1.0 / libm::tanf(PI / 6.0);

        assert!(approx(m.m[0][0], s * aspect));
        assert!(approx(m.m[1][1], s));
        assert!(approx(m.m[2][2], 10.0 / 9.9));
        assert!(approx(m.m[3][2], -10.0 * 0.1 / 9.9));
        assert_eq!(m.m[2][3], 1.0);
        // Everything else stays zero
        let nonzero = m.m.iter().flatten().filter(|v| **v != 0.0).count();
        assert_eq!(nonzero, 5);
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        let m = Mat4::rotation(0.0, 0.0, 0.0);
        for i in 0..4 {
            for j in 0..4 {
                assert!(approx(m.m[i][j], Mat4::IDENTITY.m[i][j]));
            }
        }
    }

    #[test]
    fn test_rotation_orthonormal_samples() {
        assert_orthonormal(&Mat4::rotation(PI / 2.0, PI / 54.0, PI / 36.0));
        assert_orthonormal(&Mat4::rotation(PI / 18.0, PI / 27.0, PI / 90.0));
        assert_orthonormal(&Mat4::rotation(-1.0, 2.5, 4.0));
    }

    #[test]
    fn test_identity_transform() {
        let p = Vec3::new(1.5, -2.0, 7.25);
        assert_eq!(Mat4::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn test_projection_divides_by_depth() {
        let m = Mat4::projection(0.1, 10.0, 90.0, 1.0);
        // w = z, so a point at z = 2 is scaled by 1/2
        let p = m.transform_point(Vec3::new(1.0, 1.0, 2.0));
        assert!(approx(p.x, 0.5));
        assert!(approx(p.y, 0.5));
    }

    #[test]
    fn test_zero_w_leaves_point_unprojected() {
        let m = Mat4::projection(0.1, 10.0, 90.0, 1.0);
        // z = 0 gives w = 0; no divide
        let p = m.transform_point(Vec3::new(1.0, 2.0, 0.0));
        assert!(approx(p.x, 1.0));
        assert!(approx(p.y, 2.0));
        assert!(p.z.is_finite());
    }

    proptest! {
        #[test]
        fn prop_rotation_is_orthonormal(
            a in -10.0f32..10.0,
            b in -10.0f32..10.0,
            g in -10.0f32..10.0,
        ) {
            let m = Mat4::rotation(a, b, g);
            for i in 0..3 {
                prop_assert!((m.row3(i).length() - 1.0).abs() < 1e-4);
            }
            prop_assert!((m.determinant3() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn prop_rotation_preserves_length(
            a in -PI..PI,
            x in -5.0f32..5.0,
            y in -5.0f32..5.0,
            z in -5.0f32..5.0,
        ) {
            let p = Vec3::new(x, y, z);
            let r = Mat4::rotation(a, a * 0.5, -a).transform_point(p);
            prop_assert!((r.length() - p.length()).abs() < 1e-3);
        }
    }
}
