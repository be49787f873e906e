//! Wireframe line rasterizer
//!
//! DDA-style: step one pixel at a time along the axis with the larger
//! delta and derive the other coordinate from the slope. Every line is a
//! bounded walk of `max(|dx|, |dy|) + 1` points, including the degenerate
//! single-point line.

use crate::pipeline::{ScreenPoint, ScreenTriangle};
use crate::traits::{BitmapDisplay, DisplayError};

/// Iterator over the pixels of a line, both endpoints included
#[derive(Debug, Clone)]
pub struct LinePoints {
    start: ScreenPoint,
    /// Step direction along the major axis (-1, 0 or 1)
    dir: i32,
    /// Minor-axis change per major-axis step
    ratio: f32,
    x_major: bool,
    index: i32,
    len: i32,
}

impl LinePoints {
    /// Walk from `start` to `end`
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let x_major = dx.abs() > dy.abs();

        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
        // major == 0 only when both deltas are zero: a single point
        let ratio = if major != 0 {
            minor as f32 / major as f32
        } else {
            0.0
        };

        Self {
            start,
            dir: major.signum(),
            ratio,
            x_major,
            index: 0,
            len: major.abs() + 1,
        }
    }
}

impl Iterator for LinePoints {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.index >= self.len {
            return None;
        }

        let step = self.index * self.dir;
        let offset = libm::roundf(self.ratio * step as f32) as i32;
        self.index += 1;

        Some(if self.x_major {
            ScreenPoint::new(self.start.x + step, self.start.y + offset)
        } else {
            ScreenPoint::new(self.start.x + offset, self.start.y + step)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.index).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Draw a line, clipping pixels that fall outside the display
///
/// Returns the number of pixels written.
pub fn draw_line<D: BitmapDisplay>(
    display: &mut D,
    start: ScreenPoint,
    end: ScreenPoint,
) -> Result<usize, DisplayError> {
    let (width, height) = display.dimensions();
    let mut written = 0;

    for p in LinePoints::new(start, end) {
        if p.x < 0 || p.y < 0 || p.x >= width as i32 || p.y >= height as i32 {
            continue;
        }
        display.set_pixel(p.x as u16, p.y as u16, true)?;
        written += 1;
    }

    Ok(written)
}

/// Draw the three edges of a triangle
pub fn draw_triangle<D: BitmapDisplay>(
    display: &mut D,
    tri: &ScreenTriangle,
) -> Result<usize, DisplayError> {
    let mut written = 0;
    for (start, end) in tri.edges() {
        written += draw_line(display, start, end)?;
    }
    Ok(written)
}
