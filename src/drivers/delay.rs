//! Busy-wait delay for the signal task.
//!
//! Never yields to the scheduler: the calling task keeps the core for
//! the whole hold so pulse edges land within the ROM delay's jitter.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: delegates to `esp_idf_hal::delay::Ets` (`esp_rom_delay_us`).
//! On host: spins on `std::time::Instant`.

use embedded_hal::delay::DelayNs;

pub struct BusyDelay {
    #[cfg(target_os = "espidf")]
    ets: esp_idf_hal::delay::Ets,
}

impl Default for BusyDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyDelay {
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "espidf")]
            ets: esp_idf_hal::delay::Ets,
        }
    }
}

#[cfg(target_os = "espidf")]
impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        DelayNs::delay_ns(&mut self.ets, ns);
    }

    fn delay_us(&mut self, us: u32) {
        DelayNs::delay_us(&mut self.ets, us);
    }
}

#[cfg(not(target_os = "espidf"))]
impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        spin_for(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        spin_for(std::time::Duration::from_micros(u64::from(us)));
    }
}

#[cfg(not(target_os = "espidf"))]
fn spin_for(d: std::time::Duration) {
    let start = std::time::Instant::now();
    while start.elapsed() < d {
        core::hint::spin_loop();
    }
}
