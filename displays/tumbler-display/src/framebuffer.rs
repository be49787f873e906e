//! Off-screen frame buffer
//!
//! One bit per pixel, organized as pages: each byte holds 8 vertically
//! stacked pixels, LSB at the top. This is the native layout of
//! SSD1306/SH1106 controllers.

use core::fmt::Write;

use tumbler_core::{BitmapDisplay, DisplayError};

/// Width in pixels
pub const WIDTH: usize = 128;

/// Height in pixels
pub const HEIGHT: usize = 32;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// 128x32 monochrome bitmap
#[derive(Clone)]
pub struct FrameBuffer {
    /// Pixel data, `pages[page][column]`
    pages: [[u8; WIDTH]; PAGES],
    /// Set by `present`, cleared by `take_presented`
    presented: bool,
    /// Frames presented since creation
    frame_count: u32,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an all-off buffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            presented: false,
            frame_count: 0,
        }
    }

    /// Read one pixel; out-of-range reads are off
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw page data for streaming to the panel
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.pages
            .iter()
            .flatten()
            .map(|byte| byte.count_ones())
            .sum()
    }

    /// Iterate over lit pixel coordinates, row by row
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..HEIGHT).flat_map(move |y| {
            (0..WIDTH)
                .filter(move |&x| self.pixel(x, y))
                .map(move |x| (x, y))
        })
    }

    /// Whether a completed frame is waiting, resetting the flag
    pub fn take_presented(&mut self) -> bool {
        core::mem::replace(&mut self.presented, false)
    }

    /// Frames presented since creation
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Dump the bitmap as text, `#` for on and `.` for off
    pub fn write_ascii<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                out.write_char(if self.pixel(x, y) { '#' } else { '.' })?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl BitmapDisplay for FrameBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), DisplayError> {
        let (x, y) = (x as usize, y as usize);
        if x >= WIDTH || y >= HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }

        let bit = 1 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.presented = true;
        self.frame_count = self.frame_count.wrapping_add(1);
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "FrameBuffer[{}x{}, lit={}, frames={}]",
            WIDTH,
            HEIGHT,
            self.lit_count(),
            self.frame_count
        );
    }
}
