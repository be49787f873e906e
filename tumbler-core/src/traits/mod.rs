//! Hardware abstraction traits
//!
//! The pipeline only ever talks to the display through these.

pub mod display;

pub use display::*;
