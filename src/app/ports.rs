//! Port traits: the boundary between the pulse logic and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ButtonConsumer / SignalGenerator
//! ```
//!
//! Driven adapters (GPIO lines, uptime clock) implement these traits.
//! The tasks consume them via generics, so the timing and debounce
//! logic runs unchanged against recording mocks on the host.
//!
//! Busy-wait delays are not a port of their own: the generator takes
//! any [`embedded_hal::delay::DelayNs`].

// ───────────────────────────────────────────────────────────────
// Signal lines (domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The two output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Pulse line; indicator for `enabled`.
    A,
    /// Sync line; indicator for `pattern_select`.
    B,
}

/// Drives the output lines. Writes are infallible: a configured output
/// pin always takes the level.
pub trait SignalPort {
    fn set_line(&mut self, line: Line, high: bool);
}

// ───────────────────────────────────────────────────────────────
// Monotonic clock (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Millisecond uptime, truncated to `u32`. Wraps after ~49.7 days;
/// consumers must compare with wrapping arithmetic.
pub trait TickSource {
    fn now_ms(&self) -> u32;
}
