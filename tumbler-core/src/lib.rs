//! Board-agnostic core logic for the Tumbler OLED cube
//!
//! This crate contains the whole graphics pipeline, independent of any
//! display controller or MCU:
//!
//! - Vector and 4x4 matrix math (rotation, perspective projection)
//! - The static cube mesh
//! - Per-frame transform, backface culling and screen mapping
//! - Wireframe line rasterization
//! - The tick-driven animation and the render context that ties it together
//! - Display collaborator traits

#![no_std]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod context;
pub mod math;
pub mod pipeline;
pub mod raster;
pub mod scene;
pub mod traits;

// Re-export key types
pub use config::{ConfigError, RenderConfig};
pub use context::RenderContext;
pub use pipeline::FrameStats;
pub use traits::{BitmapDisplay, DisplayError, DisplayRotation, SplitHalf};
