//! Press-rate debounce gate.
//!
//! A press is accepted only when more than [`DEBOUNCE_WINDOW_MS`] has
//! passed since the last accepted press of the same button. Timestamps
//! are the monotonic uptime in milliseconds truncated to `u32`; the
//! difference is taken modulo 2^32 so a counter wrap never looks like a
//! huge gap.

use crate::config::DEBOUNCE_WINDOW_MS;

/// `true` iff `now_ms` is strictly more than the debounce window past
/// `last_accepted_ms`.
pub const fn should_accept(last_accepted_ms: u32, now_ms: u32) -> bool {
    now_ms.wrapping_sub(last_accepted_ms) > DEBOUNCE_WINDOW_MS
}

/// Last-accepted timestamp for one button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    last_accepted_ms: u32,
}

impl DebounceGate {
    pub const fn new() -> Self {
        Self { last_accepted_ms: 0 }
    }

    /// Check a press at `now_ms`, recording it when accepted.
    pub fn try_accept(&mut self, now_ms: u32) -> bool {
        if !should_accept(self.last_accepted_ms, now_ms) {
            return false;
        }
        self.last_accepted_ms = now_ms;
        true
    }

    pub fn last_accepted_ms(&self) -> u32 {
        self.last_accepted_ms
    }
}
