//! Two-channel digital line sensor module for the LineKick robot.
//!
//! Each detector board outputs a digital level: high when its side of the
//! chassis has drifted off the track line, low while over it. Both low means
//! centered.
//!
//! Pin Mapping:
//! - Right detector: PC0
//! - Left detector: PC1

use embassy_stm32::gpio::Input;

/// Paired right/left line detectors.
pub struct LineSensors<'d> {
    right: Input<'d>,
    left: Input<'d>,
}

impl<'d> LineSensors<'d> {
    pub fn new(right: Input<'d>, left: Input<'d>) -> Self {
        Self { right, left }
    }

    /// Right detector, asserted when that side is off the line.
    pub fn read_right(&self) -> bool {
        self.right.is_high()
    }

    /// Left detector, asserted when that side is off the line.
    pub fn read_left(&self) -> bool {
        self.left.is_high()
    }
}
