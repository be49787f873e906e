//! Backface culling
//!
//! A triangle is drawn only when its outward normal points back toward
//! the camera. Edge-on faces are culled along with back faces.

use crate::math::Vec3;
use crate::scene::Triangle;

/// Orientation of a view-space triangle relative to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Facing {
    /// Normal points toward the camera; draw it
    Front,
    /// Normal points away from (or perpendicular to) the camera
    Back,
    /// Collinear vertices, no normal exists
    Degenerate,
}

impl Facing {
    /// True if the triangle should be drawn
    pub fn is_visible(self) -> bool {
        matches!(self, Facing::Front)
    }
}

/// Classify a view-space triangle as seen from `camera`
pub fn classify(tri: &Triangle, camera: Vec3) -> Facing {
    let Some(normal) = tri.normal() else {
        return Facing::Degenerate;
    };

    let camera_to_point = tri.v[0] - camera;
    if normal.dot(camera_to_point) >= 0.0 {
        Facing::Back
    } else {
        Facing::Front
    }
}
