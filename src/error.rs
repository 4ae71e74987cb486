//! Error types for the PulseGen firmware.
//!
//! Only bootstrap can fail: the ISR, the button task and the signal
//! task are infallible by construction. Every variant is `Copy` and
//! carries the raw ESP-IDF return code where there is one, so `main`
//! can log it before halting.

use core::fmt;

/// Every fallible bootstrap step funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `gpio_config` rejected a pin.
    GpioConfig { pin: i32, rc: i32 },
    /// The shared GPIO ISR service could not be installed.
    IsrService(i32),
    /// A per-pin ISR handler could not be registered.
    IsrHandler { pin: i32, rc: i32 },
    /// `esp_pthread_set_cfg` rejected the task placement.
    TaskConfig(i32),
    /// The thread backing a task could not be created.
    TaskSpawn(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioConfig { pin, rc } => write!(f, "GPIO{pin} config failed (rc={rc})"),
            Self::IsrService(rc) => write!(f, "GPIO ISR service install failed (rc={rc})"),
            Self::IsrHandler { pin, rc } => {
                write!(f, "GPIO{pin} ISR handler add failed (rc={rc})")
            }
            Self::TaskConfig(rc) => write!(f, "pthread config rejected (rc={rc})"),
            Self::TaskSpawn(name) => write!(f, "task '{name}' could not be spawned"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
