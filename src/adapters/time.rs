//! Uptime clock adapter.
//!
//! Implements [`TickSource`] for the debounce gate.
//!
//! - **`target_os = "espidf"`**: `esp_timer_get_time()` (µs since boot,
//!   monotonic), reduced to milliseconds and truncated to `u32`.
//! - **`not(target_os = "espidf")`**: `std::time::Instant` for host-side
//!   simulation.

use crate::app::ports::TickSource;

pub struct UptimeClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since boot.
    #[cfg(target_os = "espidf")]
    pub fn uptime_us(&self) -> u64 {
        // SAFETY: reads the free-running RTC-backed timer; callable from
        // any task.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since this clock was created.
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl TickSource for UptimeClock {
    fn now_ms(&self) -> u32 {
        // Truncation keeps the value modulo 2^32, which is what the
        // debounce gate's wrapping subtraction expects.
        (self.uptime_us() / 1000) as u32
    }
}
