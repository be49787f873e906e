//! Render configuration
//!
//! Every tunable of the pipeline in one place. The defaults reproduce the
//! stock animation on a 128x32 SSD1306.

use core::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display width in pixels
pub const DISPLAY_WIDTH: u16 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u16 = 32;

/// Host refresh period in milliseconds
pub const REFRESH_INTERVAL_MS: u32 = 80;

/// Animation period in ticks
pub const ANIMATION_PERIOD: u16 = 180;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width or height is zero
    EmptyDisplay,
    /// Near plane must be positive and closer than the far plane
    InvalidClipPlanes,
    /// Field of view must be strictly between 0 and 180 degrees
    InvalidFieldOfView,
    /// Depth offset must push the whole mesh past the near plane
    MeshBehindNearPlane,
    /// Animation period is zero
    ZeroPeriod,
    /// Oscillation divisor is zero
    ZeroOscillationDivisor,
}

/// Pipeline and animation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Display width in pixels
    pub width: u16,
    /// Display height in pixels
    pub height: u16,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Fixed push along +z applied after the mesh offset
    pub depth_offset: f32,
    /// Largest vertex distance from the mesh origin
    pub mesh_radius: f32,
    /// Ticks before the animation wraps back to 0
    pub period: u16,
    /// Rotation about x, constant
    pub pitch: f32,
    /// Rotation about y per tick
    pub yaw_step: f32,
    /// Rotation about z per tick
    pub roll_step: f32,
    /// Ticks per half oscillation of the x offset
    pub oscillation_divisor: u16,
    /// Peak x offset
    pub oscillation_amplitude: f32,
    /// Host refresh period in milliseconds
    pub refresh_ms: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            near: 0.1,
            far: 10.0,
            fov_deg: 60.0,
            depth_offset: 3.4, // 1.7 per unit of half-edge
            mesh_radius: 1.732_050_8,
            period: ANIMATION_PERIOD,
            pitch: PI / 2.0,
            yaw_step: PI / 54.0,
            roll_step: PI / 36.0,
            oscillation_divisor: 27,
            oscillation_amplitude: 1.0,
            refresh_ms: REFRESH_INTERVAL_MS,
        }
    }
}

impl RenderConfig {
    /// Display height / width, the projection's aspect term
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    /// Refresh ticks in one second, at least 1
    pub fn ticks_per_second(&self) -> u32 {
        (1000 / self.refresh_ms.max(1)).max(1)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyDisplay);
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::InvalidClipPlanes);
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ConfigError::InvalidFieldOfView);
        }
        // Closest possible vertex: full radius plus the peak swing toward the camera
        let closest = self.depth_offset - self.mesh_radius - self.oscillation_amplitude.abs();
        if !(closest > self.near) {
            return Err(ConfigError::MeshBehindNearPlane);
        }
        if self.period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.oscillation_divisor == 0 {
            return Err(ConfigError::ZeroOscillationDivisor);
        }
        Ok(())
    }
}
