//! Mode flags shared between the button task and the signal task.
//!
//! Each flag is an independent single-word atomic. The pair is not
//! updated as a unit: the generator reads `enabled` at the top of its
//! loop and `pattern_select` at the top of the branch, so a change lands
//! at the next cycle boundary. No lock, so the busy-waiting generator is
//! never blocked by the button task.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::timing::Form;

/// `enabled` / `pattern_select`, written by the button task only.
#[derive(Debug, Default)]
pub struct ModeFlags {
    enabled: AtomicBool,
    pattern_select: AtomicBool,
}

impl ModeFlags {
    /// Both flags off, as at power-on.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            pattern_select: AtomicBool::new(false),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn pattern_select(&self) -> bool {
        self.pattern_select.load(Ordering::Acquire)
    }

    /// Flip `enabled` and return the new value.
    pub fn toggle_enabled(&self) -> bool {
        let next = !self.enabled.load(Ordering::Relaxed);
        self.enabled.store(next, Ordering::Release);
        next
    }

    /// Flip `pattern_select` and return the new value.
    pub fn toggle_pattern_select(&self) -> bool {
        let next = !self.pattern_select.load(Ordering::Relaxed);
        self.pattern_select.store(next, Ordering::Release);
        next
    }

    /// Form the generator would run now, `None` when disabled.
    pub fn form(&self) -> Option<Form> {
        if !self.enabled() {
            return None;
        }
        Some(Form::from_pattern_select(self.pattern_select()))
    }
}
