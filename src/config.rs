//! Compile-time configuration.
//!
//! There is no runtime configuration surface: every tunable lives here
//! as a constant. The only build-time switch is the `debug-timing`
//! cargo feature, which selects the global [`TIME_SCALE`].

// ---------------------------------------------------------------------------
// Time scale
// ---------------------------------------------------------------------------

/// Multiplier applied to every microsecond-class duration.
///
/// With `debug-timing` the pulse train runs 1000x slower, turning
/// microseconds into milliseconds.
#[cfg(feature = "debug-timing")]
pub const TIME_SCALE: u32 = 1000;

/// Multiplier applied to every microsecond-class duration.
#[cfg(not(feature = "debug-timing"))]
pub const TIME_SCALE: u32 = 1;

// ---------------------------------------------------------------------------
// Pulse train
// ---------------------------------------------------------------------------

/// Number of pulses per cycle.
pub const PULSE_COUNT: u32 = 5;

/// On-time of pulse 1, before scaling (µs).
pub const T_ON1_US: u32 = 100;

/// On-time added per pulse index above 1, before scaling (µs).
pub const PULSE_STEP_US: u32 = 50;

/// Off-time after every pulse (µs, scaled).
pub const T_OFF_US: u32 = 400 * TIME_SCALE;

/// Idle gap after the last pulse of a cycle (µs, scaled).
pub const T_WAIT_US: u32 = 4500 * TIME_SCALE;

/// Width of the sync pulse on line B that opens every cycle (µs, scaled).
pub const T_SYNC_ON_US: u32 = 50 * TIME_SCALE;

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// Minimum spacing between two accepted presses of the same button (ms).
/// Human reaction time, so never scaled.
pub const DEBOUNCE_WINDOW_MS: u32 = 500;

/// Depth of the ISR → button task queue.
pub const BUTTON_QUEUE_DEPTH: usize = 10;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// CPU core identifiers for the ESP32 Xtensa LX6 dual-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 0 (PRO_CPU): ESP-IDF housekeeping and the button task.
    Pro = 0,
    /// Core 1 (APP_CPU): the busy-waiting signal task.
    App = 1,
}

/// FreeRTOS placement for one firmware task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskConfig {
    /// Null-terminated task name.
    pub name: &'static str,
    pub core: Core,
    pub priority: u8,
    pub stack_kb: usize,
}

/// Button event consumer. Higher priority than the generator so presses
/// are handled promptly; it sleeps in the queue otherwise.
pub const BUTTON_TASK: TaskConfig = TaskConfig {
    name: "button\0",
    core: Core::Pro,
    priority: 10,
    stack_kb: 4,
};

/// Signal generator. Never yields, so it gets the APP core to itself;
/// the task watchdog only watches the idle task on core 0.
pub const SIGNAL_TASK: TaskConfig = TaskConfig {
    name: "signal\0",
    core: Core::App,
    priority: 5,
    stack_kb: 4,
};

// ---------------------------------------------------------------------------
// Boot summary
// ---------------------------------------------------------------------------

/// Snapshot of the active timing, logged once at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingTable {
    pub time_scale: u32,
    pub pulse_count: u32,
    pub sync_on_us: u32,
    pub off_us: u32,
    pub wait_us: u32,
    pub debounce_ms: u32,
}

impl TimingTable {
    pub const fn active() -> Self {
        Self {
            time_scale: TIME_SCALE,
            pulse_count: PULSE_COUNT,
            sync_on_us: T_SYNC_ON_US,
            off_us: T_OFF_US,
            wait_us: T_WAIT_US,
            debounce_ms: DEBOUNCE_WINDOW_MS,
        }
    }
}
