//! Per-frame geometry pipeline
//!
//! Template triangle -> view space -> culling -> screen space. The result
//! of one pass is a `Frame`: the triangles that survived, plus counters.
//!
//! Nothing here is kept between frames; every pass starts again from the
//! mesh template.

pub mod cull;
pub mod project;
pub mod transform;

use heapless::Vec;

use crate::math::Vec3;
use crate::scene::{Mesh, CUBE_TRIANGLES};

pub use cull::{classify, Facing};
pub use project::{Projector, ScreenPoint, ScreenTriangle};
pub use transform::ModelTransform;

/// Most triangles a single frame can carry
pub const MAX_FRAME_TRIANGLES: usize = CUBE_TRIANGLES;

/// Counters for one pipeline pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Triangles that reached the rasterizer
    pub drawn: u8,
    /// Back-facing or edge-on triangles
    pub culled: u8,
    /// Triangles skipped for having no normal
    pub degenerate: u8,
}

impl FrameStats {
    /// Total triangles considered
    pub fn total(&self) -> u8 {
        self.drawn + self.culled + self.degenerate
    }
}

/// Output of one pipeline pass
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Visible triangles in screen space, in mesh order
    pub triangles: Vec<ScreenTriangle, MAX_FRAME_TRIANGLES>,
    /// Pass counters
    pub stats: FrameStats,
}

/// Run the geometry stages for every triangle of `mesh`
pub fn prepare_frame(
    mesh: &Mesh,
    transform: &ModelTransform,
    camera: Vec3,
    projector: &Projector,
) -> Frame {
    let mut frame = Frame::default();

    for template in mesh.triangles() {
        let view = transform.to_view_space(template);

        match classify(&view, camera) {
            Facing::Front => {
                // Capacity equals the mesh length, so this never fails
                let _ = frame.triangles.push(projector.project_triangle(&view));
                frame.stats.drawn += 1;
            }
            Facing::Back => frame.stats.culled += 1,
            Facing::Degenerate => frame.stats.degenerate += 1,
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::math::Mat4;
    use crate::scene::Triangle;

    fn projector() -> Projector {
        Projector::new(&RenderConfig::default())
    }

    fn head_on(depth: f32) -> ModelTransform {
        ModelTransform {
            rotation: Mat4::IDENTITY,
            offset: Vec3::ZERO,
            depth,
        }
    }

    #[test]
    fn test_head_on_cube_draws_near_face() {
        let frame = prepare_frame(&Mesh::cube(), &head_on(3.4), Vec3::ZERO, &projector());
        assert_eq!(frame.stats.drawn, 2);
        assert_eq!(frame.stats.culled, 10);
        assert_eq!(frame.stats.total(), 12);
        assert_eq!(frame.triangles.len(), 2);

        // Near face spans symmetrically around the display center
        let xs = frame.triangles.iter().flat_map(|t| t.p.iter().map(|p| p.x));
        let (min, max) = xs.fold((i32::MAX, i32::MIN), |(lo, hi), x| (lo.min(x), hi.max(x)));
        assert_eq!(64 - min, max - 64);
    }

    #[test]
    fn test_rotated_cube_shows_at_most_three_faces() {
        let transform = ModelTransform {
            rotation: Mat4::rotation(0.4, 0.7, 0.2),
            offset: Vec3::new(0.5, 0.0, 0.0),
            depth: 3.4,
        };
        let frame = prepare_frame(&Mesh::cube(), &transform, Vec3::ZERO, &projector());
        assert!(frame.stats.drawn >= 2 && frame.stats.drawn <= 6);
        assert_eq!(frame.stats.drawn % 2, 0);
        assert_eq!(frame.stats.degenerate, 0);
    }

    const COLLINEAR: Triangle = Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    );

    // Normal (0, 0, -1): toward the camera once pushed to positive depth
    const FACING_CAMERA: Triangle = Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    );

    // Normal (0, 0, 1): away from the camera
    const FACING_AWAY: Triangle = Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );

    static SLIVERS: [Triangle; CUBE_TRIANGLES] = {
        let mut tris = [COLLINEAR; CUBE_TRIANGLES];
        tris[1] = FACING_CAMERA;
        tris
    };

    static ALL_BACK: [Triangle; CUBE_TRIANGLES] = [FACING_AWAY; CUBE_TRIANGLES];

    #[test]
    fn test_degenerate_triangles_are_skipped() {
        let mesh = Mesh::new(&SLIVERS);
        let frame = prepare_frame(&mesh, &head_on(3.0), Vec3::ZERO, &projector());
        assert_eq!(frame.stats.degenerate, 11);
        assert_eq!(frame.stats.drawn, 1);
        assert_eq!(frame.stats.total(), 12);
        assert_eq!(frame.triangles.len(), 1);
    }

    #[test]
    fn test_fully_culled_mesh_draws_nothing() {
        let mesh = Mesh::new(&ALL_BACK);
        let frame = prepare_frame(&mesh, &head_on(3.0), Vec3::ZERO, &projector());
        assert_eq!(frame.stats.culled, 12);
        assert_eq!(frame.stats.drawn, 0);
        assert_eq!(frame.stats.total(), 12);
        assert!(frame.triangles.is_empty());
    }

    #[test]
    fn test_every_visible_triangle_fits_the_frame() {
        // A mesh of only front faces fills the frame exactly
        static ALL_FRONT: [Triangle; CUBE_TRIANGLES] = [FACING_CAMERA; CUBE_TRIANGLES];
        let mesh = Mesh::new(&ALL_FRONT);
        let frame = prepare_frame(&mesh, &head_on(3.0), Vec3::ZERO, &projector());
        assert_eq!(frame.stats.drawn, 12);
        assert_eq!(frame.triangles.len(), MAX_FRAME_TRIANGLES);
    }

    #[test]
    fn test_pass_is_repeatable() {
        // Same inputs, same output: nothing accumulates between passes
        let transform = ModelTransform {
            rotation: Mat4::rotation(1.0, 0.3, 0.9),
            offset: Vec3::new(-0.7, 0.0, 0.0),
            depth: 3.4,
        };
        let a = prepare_frame(&Mesh::cube(), &transform, Vec3::ZERO, &projector());
        let b = prepare_frame(&Mesh::cube(), &transform, Vec3::ZERO, &projector());
        assert_eq!(a.triangles, b.triangles);
        assert_eq!(a.stats, b.stats);
    }
}
