//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter      | Implements   | Connects to                  |
//! |--------------|--------------|------------------------------|
//! | `gpio_lines` | SignalPort   | Signal A / B output pins     |
//! | `time`       | TickSource   | ESP32 high-resolution timer  |

pub mod gpio_lines;
pub mod time;
