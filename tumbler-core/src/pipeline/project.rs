//! Perspective projection and screen mapping

use crate::config::RenderConfig;
use crate::math::{Mat4, Vec3};
use crate::scene::Triangle;

/// Screen coordinates are clamped to this band around the display so a
/// point projected from near `w = 0` cannot produce an unbounded line.
pub const GUARD_BAND: i32 = 4096;

/// Integer pixel position, possibly off-screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Projected triangle ready for rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenTriangle {
    pub p: [ScreenPoint; 3],
}

impl ScreenTriangle {
    /// Edges as point pairs `(0,1)`, `(1,2)`, `(2,0)`
    pub fn edges(&self) -> [(ScreenPoint, ScreenPoint); 3] {
        [(self.p[0], self.p[1]), (self.p[1], self.p[2]), (self.p[2], self.p[0])]
    }
}

/// Map normalized device coordinates to (fractional) pixel space
///
/// `[-1, 1]` spans `[0, width]` and `[0, height]`; z is dropped.
pub fn ndc_to_screen(ndc: Vec3, width: u16, height: u16) -> (f32, f32) {
    let x = (ndc.x + 1.0) * 0.5 * width as f32;
    let y = (ndc.y + 1.0) * 0.5 * height as f32;
    (x, y)
}

fn to_pixel(v: f32) -> i32 {
    // NaN casts to 0; infinities saturate before the clamp
    (libm::roundf(v) as i32).clamp(-GUARD_BAND, GUARD_BAND)
}

/// Projects view-space geometry onto a fixed-size display
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Projector {
    matrix: Mat4,
    width: u16,
    height: u16,
}

impl Projector {
    /// Build a projector; the matrix is fixed for its lifetime
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            matrix: Mat4::projection(config.near, config.far, config.fov_deg, config.aspect()),
            width: config.width,
            height: config.height,
        }
    }

    /// Project a view-space point to a rounded pixel position
    pub fn project_point(&self, p: Vec3) -> ScreenPoint {
        let ndc = self.matrix.transform_point(p);
        let (x, y) = ndc_to_screen(ndc, self.width, self.height);
        ScreenPoint::new(to_pixel(x), to_pixel(y))
    }

    /// Project all three vertices of a view-space triangle
    pub fn project_triangle(&self, tri: &Triangle) -> ScreenTriangle {
        ScreenTriangle {
            p: [
                self.project_point(tri.v[0]),
                self.project_point(tri.v[1]),
                self.project_point(tri.v[2]),
            ],
        }
    }
}
