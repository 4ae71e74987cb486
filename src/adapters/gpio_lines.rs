//! GPIO signal-line adapter.
//!
//! Maps the abstract [`Line`]s onto the two output pins through
//! [`hw_init::gpio_write`]. The adapter is `Copy`: the button task and
//! the signal task each hold one, multiplexing the same physical pins.
//! A level write is a single register store, so no lock is needed.

use crate::app::ports::{Line, SignalPort};
use crate::drivers::hw_init;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioLines {
    a: i32,
    b: i32,
}

impl Default for GpioLines {
    fn default() -> Self {
        Self::new(pins::SIGNAL_A_GPIO, pins::SIGNAL_B_GPIO)
    }
}

impl GpioLines {
    pub const fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    pub const fn pin(&self, line: Line) -> i32 {
        match line {
            Line::A => self.a,
            Line::B => self.b,
        }
    }
}

impl SignalPort for GpioLines {
    fn set_line(&mut self, line: Line, high: bool) {
        hw_init::gpio_write(self.pin(line), high);
    }
}
