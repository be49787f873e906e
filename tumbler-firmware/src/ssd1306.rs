//! SSD1306 OLED Display Driver
//!
//! Driver for 128x32 SSD1306-based OLED displays via I2C.
//! Streams a `FrameBuffer` page by page; drawing happens elsewhere.

use tumbler_core::DisplayRotation;
use tumbler_display::{FrameBuffer, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_NORMAL: u8 = 0xA0;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    rotation: DisplayRotation,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new SSD1306 driver
    ///
    /// Only `Rotate0` and `Rotate180` are supported by the scan-direction
    /// registers; 90° settings fall back to their nearest upright mode.
    pub fn new(i2c: I2C, rotation: DisplayRotation) -> Self {
        Self { i2c, rotation }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        let flipped = matches!(
            self.rotation,
            DisplayRotation::Rotate180 | DisplayRotation::Rotate270
        );
        let (seg, com) = if flipped {
            (cmd::SET_SEG_NORMAL, cmd::SET_COM_SCAN_INC)
        } else {
            (cmd::SET_SEG_REMAP, cmd::SET_COM_SCAN_DEC)
        };

        // Initialization sequence for a 128x32 SSD1306
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x1F, // 32 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x02, // Page addressing
            seg,
            com,
            cmd::SET_COM_PINS,
            0x02, // Sequential COM config for 32 rows
            cmd::SET_CONTRAST,
            0x8F,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[0x00, cmd]).await
    }

    /// Send the frame buffer to the display
    pub async fn flush(&mut self, fb: &FrameBuffer) -> Result<(), I2C::Error> {
        for (page, pixels) in fb.pages().iter().enumerate().take(PAGES) {
            self.command(cmd::SET_PAGE_ADDR | (page as u8)).await?;
            self.command(cmd::SET_LOW_COLUMN).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            // Send page data
            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(pixels);
            self.i2c.write(SSD1306_ADDR, &data).await?;
        }

        Ok(())
    }
}
