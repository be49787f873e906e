//! Tick-driven animation
//!
//! All motion is a pure function of the tick counter, so the cube never
//! drifts: the same tick always produces the same pose.
//!
//! - pitch (about x): fixed at 90°
//! - yaw (about y): `yaw_step * tick`
//! - roll (about z): `roll_step * tick`
//! - x offset: `amplitude * sin(tick / divisor * π)`

use core::f32::consts::PI;

use crate::config::RenderConfig;
use crate::math::{Mat4, Vec3};
use crate::pipeline::ModelTransform;

/// Rotation angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EulerAngles {
    /// About x
    pub pitch: f32,
    /// About y
    pub yaw: f32,
    /// About z
    pub roll: f32,
}

/// Wrapping tick counter and the pose it implies
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Animator {
    tick: u16,
    period: u16,
    pitch: f32,
    yaw_step: f32,
    roll_step: f32,
    oscillation_divisor: f32,
    oscillation_amplitude: f32,
    depth: f32,
}

impl Animator {
    /// Create an animator at tick 0
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            tick: 0,
            period: config.period.max(1),
            pitch: config.pitch,
            yaw_step: config.yaw_step,
            roll_step: config.roll_step,
            oscillation_divisor: config.oscillation_divisor.max(1) as f32,
            oscillation_amplitude: config.oscillation_amplitude,
            depth: config.depth_offset,
        }
    }

    /// Current tick, always below the period
    pub fn tick(&self) -> u16 {
        self.tick
    }

    /// Ticks per full cycle
    pub fn period(&self) -> u16 {
        self.period
    }

    /// Jump to a tick (wrapped into the period)
    pub fn set_tick(&mut self, tick: u16) {
        self.tick = tick % self.period;
    }

    /// Move to the next tick, wrapping to 0 after `period - 1`
    pub fn advance(&mut self) {
        self.tick = (self.tick + 1) % self.period;
    }

    /// Rotation angles for the current tick
    pub fn angles(&self) -> EulerAngles {
        let t = self.tick as f32;
        EulerAngles {
            pitch: self.pitch,
            yaw: self.yaw_step * t,
            roll: self.roll_step * t,
        }
    }

    /// Rotation matrix for the current tick
    pub fn rotation(&self) -> Mat4 {
        let a = self.angles();
        Mat4::rotation(a.pitch, a.yaw, a.roll)
    }

    /// Mesh world-position offset for the current tick
    pub fn offset(&self) -> Vec3 {
        let phase = self.tick as f32 / self.oscillation_divisor * PI;
        Vec3::new(self.oscillation_amplitude * libm::sinf(phase), 0.0, 0.0)
    }

    /// Full model transform for the current tick
    pub fn transform(&self) -> ModelTransform {
        ModelTransform {
            rotation: self.rotation(),
            offset: self.offset(),
            depth: self.depth,
        }
    }
}
