//! Scene model
//!
//! The only geometry ever drawn: a cube centered at the origin with
//! vertices at ±1. The table is a compile-time constant that every frame
//! re-reads; transformed copies are derived from it and thrown away.

use crate::math::Vec3;

/// Number of triangles in the cube mesh
pub const CUBE_TRIANGLES: usize = 12;

/// Three vertices; `(v1 - v0) × (v2 - v0)` is the outward normal
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Triangle {
    pub v: [Vec3; 3],
}

impl Triangle {
    /// Create a triangle from three vertices
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { v: [a, b, c] }
    }

    /// Apply `f` to every vertex
    pub fn map(&self, mut f: impl FnMut(Vec3) -> Vec3) -> Self {
        Self {
            v: [f(self.v[0]), f(self.v[1]), f(self.v[2])],
        }
    }

    /// Unnormalized face normal
    pub fn cross_normal(&self) -> Vec3 {
        let line1 = self.v[1] - self.v[0];
        let line2 = self.v[2] - self.v[0];
        line1.cross(line2)
    }

    /// Unit face normal, `None` for collinear vertices
    pub fn normal(&self) -> Option<Vec3> {
        self.cross_normal().normalize()
    }

    /// Edges as vertex pairs `(0,1)`, `(1,2)`, `(2,0)`
    pub fn edges(&self) -> [(Vec3, Vec3); 3] {
        [
            (self.v[0], self.v[1]),
            (self.v[1], self.v[2]),
            (self.v[2], self.v[0]),
        ]
    }
}

/// Immutable triangle mesh template, always `CUBE_TRIANGLES` long
#[derive(Debug, Clone, Copy)]
pub struct Mesh {
    triangles: &'static [Triangle; CUBE_TRIANGLES],
}

impl Mesh {
    /// Wrap a static triangle table
    pub const fn new(triangles: &'static [Triangle; CUBE_TRIANGLES]) -> Self {
        Self { triangles }
    }

    /// The built-in cube
    pub fn cube() -> Self {
        Self::new(&CUBE)
    }

    /// Template triangles, in table order
    pub fn triangles(&self) -> &'static [Triangle; CUBE_TRIANGLES] {
        self.triangles
    }
}

const fn tri(p: [f32; 9]) -> Triangle {
    Triangle::new(
        Vec3::new(p[0], p[1], p[2]),
        Vec3::new(p[3], p[4], p[5]),
        Vec3::new(p[6], p[7], p[8]),
    )
}

/// Cube with edge length 2, two triangles per face
pub static CUBE: [Triangle; CUBE_TRIANGLES] = [
    // South (z = -1)
    tri([-1.0, -1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0]),
    tri([-1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, -1.0]),
    // East (x = +1)
    tri([1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0]),
    tri([1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, 1.0]),
    // North (z = +1)
    tri([1.0, -1.0, 1.0, 1.0, 1.0, 1.0, -1.0, 1.0, 1.0]),
    tri([1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0]),
    // West (x = -1)
    tri([-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0]),
    tri([-1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, -1.0, -1.0]),
    // Top (y = +1)
    tri([-1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
    tri([-1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0]),
    // Bottom (y = -1)
    tri([1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0, -1.0, -1.0]),
    tri([1.0, -1.0, 1.0, -1.0, -1.0, -1.0, 1.0, -1.0, -1.0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn centroid(t: &Triangle) -> Vec3 {
        (t.v[0] + t.v[1] + t.v[2]) * (1.0 / 3.0)
    }

    #[test]
    fn test_cube_has_twelve_triangles() {
        let mesh = Mesh::cube();
        assert_eq!(mesh.triangles().len(), 12);
        assert_eq!(mesh.triangles()[0], CUBE[0]);
    }

    #[test]
    fn test_cube_vertices_on_unit_bounds() {
        for t in CUBE.iter() {
            for v in t.v.iter() {
                for c in [v.x, v.y, v.z] {
                    assert!(c == 1.0 || c == -1.0);
                }
            }
        }
    }

    #[test]
    fn test_cube_normals_point_outward() {
        // Consistent winding: every face normal points away from the center
        for t in CUBE.iter() {
            let n = t.normal().unwrap();
            assert!(n.dot(centroid(t)) > 0.0);
            assert!((n.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_collinear_triangle_has_no_normal() {
        let t = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(t.normal(), None);
    }

    #[test]
    fn test_edges_close_the_loop() {
        let t = CUBE[0];
        let edges = t.edges();
        assert_eq!(edges[0].0, t.v[0]);
        assert_eq!(edges[2].1, t.v[0]);
    }
}
