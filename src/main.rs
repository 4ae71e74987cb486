//! PulseGen Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────┐            ┌──────────────┐            ┌───────────────┐
//! │ GPIO32/33    │  ISR       │ BUTTON_EVENTS│  receive   │ button task   │
//! │ rising edge  │──────────▶ │ (depth 10)   │──────────▶ │ core 0, pri 10│
//! └──────────────┘ try_send   └──────────────┘            └───────┬───────┘
//!                                                                 │ toggle
//!                                                         ┌───────▼───────┐
//!                                                         │  ModeFlags    │
//!                                                         └───────┬───────┘
//!                                                                 │ poll
//! ┌──────────────┐                                        ┌───────▼───────┐
//! │ GPIO16 / 21  │ ◀──────────── pulse train ──────────── │ signal task   │
//! │ Signal A / B │ ◀──────────── indicators ───────────── │ core 1, pri 5 │
//! └──────────────┘        (button task)                   └───────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use log::info;

use pulsegen::adapters::gpio_lines::GpioLines;
use pulsegen::adapters::time::UptimeClock;
use pulsegen::app::consumer::ButtonConsumer;
use pulsegen::app::generator::SignalGenerator;
use pulsegen::app::state::ModeFlags;
use pulsegen::config::{BUTTON_TASK, SIGNAL_TASK, TimingTable};
use pulsegen::drivers::delay::BusyDelay;
use pulsegen::drivers::{hw_init, task_pin};
use pulsegen::events::BUTTON_EVENTS;
use pulsegen::timing;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("PulseGen v{}", env!("CARGO_PKG_VERSION"));
    let t = TimingTable::active();
    info!(
        "Timing: scale={} pulses={} sync={}us off={}us wait={}us cycle={}us debounce={}ms",
        t.time_scale,
        t.pulse_count,
        t.sync_on_us,
        t.off_us,
        t.wait_us,
        timing::cycle_duration_us(),
        t.debounce_ms,
    );

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals()?;

    // ── 3. Shared state ───────────────────────────────────────
    let flags = Arc::new(ModeFlags::new());
    let lines = GpioLines::default();

    // ── 4. Button task (before the ISRs can fire) ─────────────
    let consumer = ButtonConsumer::new(lines, UptimeClock::new(), flags.clone());
    let _button = task_pin::spawn_task(&BUTTON_TASK, move || {
        consumer.run(&BUTTON_EVENTS);
    })?;

    hw_init::init_isr_service()?;

    // ── 5. Signal task ────────────────────────────────────────
    info!("Generating signals...");
    let generator = SignalGenerator::new(lines, BusyDelay::new(), flags);
    let signal = task_pin::spawn_task(&SIGNAL_TASK, move || {
        generator.run();
    })?;

    // Both tasks loop forever; joining only returns if one panicked.
    signal
        .join()
        .map_err(|_| anyhow!("signal task terminated"))?;
    Ok(())
}
