//! Button event consumer.
//!
//! Drains the [`InputChannel`], debounces each button against its own
//! last accepted press, and toggles the matching mode flag. The new
//! flag value is mirrored on the button's indicator line:
//!
//! | Button | Flag             | Indicator |
//! |--------|------------------|-----------|
//! | Enable | `enabled`        | line A    |
//! | Select | `pattern_select` | line B    |

use std::sync::Arc;

use log::{debug, info};

use crate::app::ports::{Line, SignalPort, TickSource};
use crate::app::state::ModeFlags;
use crate::debounce::DebounceGate;
use crate::events::{ButtonEvent, InputChannel};

/// Result of handling one queued identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Press accepted; the flag now holds `value`.
    Toggled { event: ButtonEvent, value: bool },
    /// Press arrived inside the debounce window.
    Debounced(ButtonEvent),
    /// Identifier is not a known button.
    Ignored(u32),
}

pub struct ButtonConsumer<P, C> {
    lines: P,
    clock: C,
    flags: Arc<ModeFlags>,
    enable_gate: DebounceGate,
    select_gate: DebounceGate,
}

impl<P: SignalPort, C: TickSource> ButtonConsumer<P, C> {
    pub fn new(lines: P, clock: C, flags: Arc<ModeFlags>) -> Self {
        Self {
            lines,
            clock,
            flags,
            enable_gate: DebounceGate::new(),
            select_gate: DebounceGate::new(),
        }
    }

    /// Handle one raw identifier from the channel. Every identifier is
    /// logged as a press, including bounces and unknown ids.
    pub fn handle(&mut self, raw: u32) -> Outcome {
        info!("Button {} pressed", raw);

        let Some(event) = ButtonEvent::from_raw(raw) else {
            debug!("button: ignoring unknown id {}", raw);
            return Outcome::Ignored(raw);
        };

        let now_ms = self.clock.now_ms();
        let gate = match event {
            ButtonEvent::Enable => &mut self.enable_gate,
            ButtonEvent::Select => &mut self.select_gate,
        };
        if !gate.try_accept(now_ms) {
            debug!("button: {:?} bounce at {}ms", event, now_ms);
            return Outcome::Debounced(event);
        }

        let (line, value) = match event {
            ButtonEvent::Enable => (Line::A, self.flags.toggle_enabled()),
            ButtonEvent::Select => (Line::B, self.flags.toggle_pattern_select()),
        };
        self.lines.set_line(line, value);
        info!("button: {:?} -> {}", event, value);

        Outcome::Toggled { event, value }
    }

    /// Task body: block on the channel forever.
    pub fn run(mut self, events: &InputChannel) -> ! {
        info!("button task: waiting for presses");
        loop {
            let raw = events.receive();
            self.handle(raw);
        }
    }

    pub fn flags(&self) -> &ModeFlags {
        &self.flags
    }
}
