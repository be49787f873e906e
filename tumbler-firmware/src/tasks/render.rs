//! Render task
//!
//! Drives the cube animation at the configured refresh period:
//! render a tick into the frame buffer, then push it to the panel.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Ticker};

use tumbler_core::RenderContext;
use tumbler_display::FrameBuffer;

use crate::ssd1306::Ssd1306;

/// Concrete panel type on this board
pub type Panel = Ssd1306<I2c<'static, I2C1, Async>>;

/// Render task - one frame per refresh period
#[embassy_executor::task]
pub async fn render_task(mut ctx: RenderContext, mut panel: Panel) {
    info!("Render task started");

    let mut fb = FrameBuffer::new();
    let mut ticker = Ticker::every(Duration::from_millis(ctx.config().refresh_ms as u64));

    // Frame statistics are logged once per second
    let stats_every = ctx.config().ticks_per_second();
    let mut since_stats: u32 = 0;

    loop {
        ticker.next().await;

        let tick = ctx.tick();
        if let Err(e) = ctx.render_tick(&mut fb) {
            warn!("Render failed at tick {}: {:?}", tick, e);
            continue;
        }

        if fb.take_presented() {
            if let Err(e) = panel.flush(&fb).await {
                warn!("Panel flush failed: {:?}", e);
            }
        }

        since_stats += 1;
        if since_stats >= stats_every {
            since_stats = 0;
            debug!("Frame stats: {} (frames={})", ctx.last_stats(), fb.frame_count());
        }
    }
}
