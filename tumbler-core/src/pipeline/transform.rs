//! Model-to-view transform
//!
//! Order matters: rotate about the mesh origin, then move by the mesh
//! offset, then push the result down +z in front of the camera.

use crate::math::{Mat4, Vec3};
use crate::scene::Triangle;

/// Per-frame placement of the mesh
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModelTransform {
    /// Rotation about the mesh origin
    pub rotation: Mat4,
    /// World-position offset applied after rotation
    pub offset: Vec3,
    /// Fixed +z push applied last
    pub depth: f32,
}

impl ModelTransform {
    /// Transform a single template vertex
    pub fn apply(&self, p: Vec3) -> Vec3 {
        self.rotation
            .transform_point(p)
            .translate(self.offset.x, self.offset.y, self.offset.z)
            .translate(0.0, 0.0, self.depth)
    }

    /// Transform a template triangle into view space
    pub fn to_view_space(&self, tri: &Triangle) -> Triangle {
        tri.map(|p| self.apply(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_only_translates() {
        let t = ModelTransform {
            rotation: Mat4::IDENTITY,
            offset: Vec3::new(0.5, 0.0, 0.0),
            depth: 3.0,
        };
        assert_eq!(t.apply(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(1.5, 1.0, 4.0));
    }

    #[test]
    fn test_rotation_happens_before_translation() {
        // Quarter turn about z; the offset must not be rotated with the point
        let t = ModelTransform {
            rotation: Mat4::rotation(0.0, 0.0, PI / 2.0),
            offset: Vec3::new(1.0, 0.0, 0.0),
            depth: 2.0,
        };
        let rotated = Mat4::rotation(0.0, 0.0, PI / 2.0).transform_point(Vec3::new(1.0, 0.0, 0.0));
        let expected = rotated + Vec3::new(1.0, 0.0, 2.0);
        assert!(approx_eq(t.apply(Vec3::new(1.0, 0.0, 0.0)), expected));
    }

    #[test]
    fn test_triangle_transform_leaves_template_untouched() {
        let template = crate::scene::CUBE[0];
        let t = ModelTransform {
            rotation: Mat4::rotation(0.3, 0.2, 0.1),
            offset: Vec3::ZERO,
            depth: 3.4,
        };
        let view = t.to_view_space(&template);
        assert_ne!(view, template);
        assert_eq!(template, crate::scene::CUBE[0]);
        for v in view.v.iter() {
            assert!(v.z > 1.0);
        }
    }
}
