//! Render context
//!
//! Owns everything the pipeline needs across ticks: the mesh template,
//! the fixed projection, the camera and the animation counter. The host
//! creates one at startup and hands a display to `render_tick` once per
//! refresh period.

use crate::animation::Animator;
use crate::config::{ConfigError, RenderConfig};
use crate::math::Vec3;
use crate::pipeline::{prepare_frame, Frame, FrameStats, Projector};
use crate::raster::draw_triangle;
use crate::scene::Mesh;
use crate::traits::{BitmapDisplay, DisplayError, DisplayRotation, SplitHalf};

/// Pipeline state for the lifetime of the program
#[derive(Debug, Clone)]
pub struct RenderContext {
    config: RenderConfig,
    mesh: Mesh,
    projector: Projector,
    /// Camera sits at the origin looking down +z
    camera: Vec3,
    animator: Animator,
    last_stats: FrameStats,
}

impl RenderContext {
    /// Validate the configuration and build the static pipeline state
    ///
    /// Call once before the first tick.
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            projector: Projector::new(&config),
            animator: Animator::new(&config),
            mesh: Mesh::cube(),
            camera: Vec3::ZERO,
            last_stats: FrameStats::default(),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Current animation tick
    pub fn tick(&self) -> u16 {
        self.animator.tick()
    }

    /// Mutable animation state, e.g. to seek to a tick
    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Counters from the most recent tick
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Run the geometry stages for the current tick without drawing
    pub fn prepare(&self) -> Frame {
        prepare_frame(
            &self.mesh,
            &self.animator.transform(),
            self.camera,
            &self.projector,
        )
    }

    /// Render one frame and advance the animation
    ///
    /// Clears the display, draws every visible triangle edge, presents,
    /// then moves to the next tick. Returns `Ok(true)`: the frame was fully
    /// handled and the host should skip its own rendering this cycle.
    ///
    /// On a display error the tick does not advance.
    pub fn render_tick<D: BitmapDisplay>(&mut self, display: &mut D) -> Result<bool, DisplayError> {
        let frame = self.prepare();

        display.clear()?;
        for tri in frame.triangles.iter() {
            draw_triangle(display, tri)?;
        }
        display.present()?;

        self.last_stats = frame.stats;
        self.animator.advance();
        Ok(true)
    }

    /// Orientation for the panel on this half of a split device
    ///
    /// The secondary half is mounted upside down and gets flipped 180°.
    pub fn select_rotation<S: SplitHalf>(half: &S, requested: DisplayRotation) -> DisplayRotation {
        if half.is_secondary_half() {
            DisplayRotation::Rotate180
        } else {
            requested
        }
    }
}
