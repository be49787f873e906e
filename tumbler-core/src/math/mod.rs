//! Vector and matrix math
//!
//! Single precision throughout; trigonometry and square roots come from
//! `libm` so the crate stays `no_std` on FPU-less cores.

pub mod matrix;
pub mod vector;

pub use matrix::Mat4;
pub use vector::Vec3;
