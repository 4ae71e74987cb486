//! Interrupt-to-task button event channel.
//!
//! ```text
//! ┌──────────────┐  try_send(gpio)  ┌──────────────┐  receive()  ┌──────────────┐
//! │ GPIO ISR     │─────────────────▶│ InputChannel │────────────▶│ Button task  │
//! │ (rising edge)│  drop when full  │  (depth 10)  │  blocks     │ (consumer)   │
//! └──────────────┘                  └──────────────┘             └──────────────┘
//! ```
//!
//! Events travel as the raw GPIO number of the button that fired, the
//! value the ISR is registered with. [`ButtonEvent::from_raw`] decodes
//! it on the task side; anything else is ignored there.
//!
//! The ring buffer is guarded by a `CriticalSectionRawMutex`. On the
//! device that is the ESP-IDF ISR-safe spinlock, so the send side never
//! blocks and never allocates. The blocking receive drives the
//! channel's receive future with a task-notification waker on the
//! device, which the ISR is allowed to signal.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::config::BUTTON_QUEUE_DEPTH;
use crate::pins;

/// Which button fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Enable,
    Select,
}

impl ButtonEvent {
    /// Decode a raw identifier. `None` for anything that isn't one of
    /// the two button pins.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            r if r == pins::BUTTON_ENABLE_GPIO as u32 => Some(Self::Enable),
            r if r == pins::BUTTON_SELECT_GPIO as u32 => Some(Self::Select),
            _ => None,
        }
    }

    /// Raw identifier, as pushed by the ISR.
    pub const fn raw(self) -> u32 {
        match self {
            Self::Enable => pins::BUTTON_ENABLE_GPIO as u32,
            Self::Select => pins::BUTTON_SELECT_GPIO as u32,
        }
    }
}

/// Bounded single-consumer FIFO of raw button identifiers.
pub struct InputChannel {
    inner: Channel<CriticalSectionRawMutex, u32, BUTTON_QUEUE_DEPTH>,
}

impl Default for InputChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl InputChannel {
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Enqueue without blocking. Safe from interrupt context.
    /// Returns `false` if the queue was full and the event was dropped.
    pub fn try_send(&self, raw: u32) -> bool {
        self.inner.try_send(raw).is_ok()
    }

    /// Enqueue a decoded event. Same semantics as [`Self::try_send`].
    pub fn send_event(&self, event: ButtonEvent) -> bool {
        self.try_send(event.raw())
    }

    /// Block the calling task until an event is available.
    /// Only the single button task may call this.
    #[cfg(target_os = "espidf")]
    pub fn receive(&self) -> u32 {
        esp_idf_hal::task::block_on(self.inner.receive())
    }

    /// Block the calling thread until an event is available.
    #[cfg(not(target_os = "espidf"))]
    pub fn receive(&self) -> u32 {
        futures_lite::future::block_on(self.inner.receive())
    }

    /// Dequeue without blocking.
    pub fn try_receive(&self) -> Option<u32> {
        self.inner.try_receive().ok()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    pub const fn capacity(&self) -> usize {
        BUTTON_QUEUE_DEPTH
    }
}

/// The channel the GPIO ISRs feed. A `static` only because interrupt
/// handlers cannot capture; tasks receive it as `&'static InputChannel`.
pub static BUTTON_EVENTS: InputChannel = InputChannel::new();
