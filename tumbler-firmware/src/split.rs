//! Split-half detection
//!
//! Each half of the keyboard has a handedness pin strapped high on the
//! primary side and low on the secondary side.

use embassy_rp::gpio::Input;
use tumbler_core::SplitHalf;

/// Handedness sampled once at boot
pub struct HandPin {
    secondary: bool,
}

impl HandPin {
    /// Read the strap; the pin is released afterwards
    pub fn sample(pin: Input<'_>) -> Self {
        Self {
            secondary: pin.is_low(),
        }
    }
}

impl SplitHalf for HandPin {
    fn is_secondary_half(&self) -> bool {
        self.secondary
    }
}
