//! Tumbler - Rotating Wireframe Cube Firmware
//!
//! Firmware for RP2040-based split keyboards with a 128x32 SSD1306 OLED
//! on each half. Renders a tumbling wireframe cube every 80ms.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use {defmt_rtt as _, panic_probe as _};

use tumbler_core::{DisplayRotation, RenderConfig, RenderContext};

use crate::split::HandPin;
use crate::ssd1306::Ssd1306;

mod split;
mod ssd1306;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// OLED I2C bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tumbler firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Handedness strap (GP26): high = primary half
    let hand = HandPin::sample(Input::new(p.PIN_26, Pull::Up));
    let rotation = RenderContext::select_rotation(&hand, DisplayRotation::Rotate0);
    info!("Display rotation: {:?}", rotation);

    // Build the static pipeline state once, before the first tick
    let ctx = match RenderContext::new(RenderConfig::default()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid render config: {:?}", e);
            return;
        }
    };

    // Setup I2C for OLED (GP2=SDA, GP3=SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C1, p.PIN_3, p.PIN_2, Irqs, i2c_config);

    // Initialize OLED display
    let mut panel = Ssd1306::new(i2c, rotation);
    if let Err(e) = panel.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    // Spawn tasks
    spawner.spawn(tasks::render_task(ctx, panel)).unwrap();

    info!("All tasks spawned");
}
