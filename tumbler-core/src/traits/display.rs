//! Display collaborator traits for monochrome bitmap OLEDs

/// Errors that can occur while drawing or presenting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
    /// Pixel coordinates outside the bitmap
    InvalidCoordinates,
}

/// Panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayRotation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

/// 1-bit-per-pixel bitmap display
///
/// Drawing goes to an off-screen bitmap; nothing is visible until
/// `present` is called.
pub trait BitmapDisplay {
    /// Reset the bitmap to all-off
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write one pixel
    ///
    /// `x` must be in `[0, width)` and `y` in `[0, height)`. Callers clip;
    /// implementations may reject out-of-range writes with
    /// `DisplayError::InvalidCoordinates`.
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), DisplayError>;

    /// Flush the bitmap to the panel
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Bitmap size as (width, height) in pixels
    fn dimensions(&self) -> (u16, u16);
}

/// Which half of a split device this controller runs on
pub trait SplitHalf {
    /// True for the non-primary half
    fn is_secondary_half(&self) -> bool;
}
