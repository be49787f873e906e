//! Bitmap display buffers for Tumbler
//!
//! This crate provides:
//! - `FrameBuffer`, an off-screen 128x32 1-bpp bitmap implementing
//!   `tumbler_core::BitmapDisplay`
//! - Page-organized storage matching SSD1306/SH1106 GDDRAM, so a panel
//!   driver can stream pages straight out of it
//! - An ASCII dump for inspecting frames on the host
//!
//! # Architecture
//!
//! The render context draws into a `FrameBuffer` synchronously. `present`
//! only marks the frame as complete; the firmware's panel driver picks up
//! completed frames and flushes them over I2C on its own schedule.

#![no_std]

pub mod framebuffer;

// Re-export key types
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
