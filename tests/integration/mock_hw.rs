//! Mock hardware for integration tests.
//!
//! Line writes and busy-wait holds land in one shared trace so tests
//! can assert on the exact interleaving the generator produces, without
//! touching GPIO registers or spending real time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use pulsegen::app::consumer::ButtonConsumer;
use pulsegen::app::generator::SignalGenerator;
use pulsegen::app::ports::{Line, SignalPort, TickSource};
use pulsegen::app::state::ModeFlags;

// ── Trace ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    Set(Line, bool),
    Hold(u32),
}

pub type Trace = Rc<RefCell<Vec<HwCall>>>;

// ── Lines ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockLines {
    trace: Trace,
}

impl SignalPort for MockLines {
    fn set_line(&mut self, line: Line, high: bool) {
        self.trace.borrow_mut().push(HwCall::Set(line, high));
    }
}

// ── Delay ─────────────────────────────────────────────────────

pub struct MockDelay {
    trace: Trace,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.borrow_mut().push(HwCall::Hold(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.trace.borrow_mut().push(HwCall::Hold(us));
    }
}

// ── Clock ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockClock {
    now_ms: Rc<Cell<u32>>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn set(&self, ms: u32) {
        self.now_ms.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(ms));
    }
}

impl TickSource for MockClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}

// ── Bench ─────────────────────────────────────────────────────

/// Consumer and generator wired to the same flags and the same lines,
/// as on the board.
pub struct Bench {
    pub flags: Arc<ModeFlags>,
    pub clock: MockClock,
    pub trace: Trace,
    pub consumer: ButtonConsumer<MockLines, MockClock>,
    pub generator: SignalGenerator<MockLines, MockDelay>,
}

#[allow(dead_code)]
impl Bench {
    pub fn new() -> Self {
        let flags = Arc::new(ModeFlags::new());
        let clock = MockClock::default();
        let trace = Trace::default();
        let lines = MockLines { trace: trace.clone() };
        let delay = MockDelay { trace: trace.clone() };
        Self {
            consumer: ButtonConsumer::new(lines.clone(), clock.clone(), flags.clone()),
            generator: SignalGenerator::new(lines, delay, flags.clone()),
            flags,
            clock,
            trace,
        }
    }

    pub fn take_trace(&self) -> Vec<HwCall> {
        std::mem::take(&mut *self.trace.borrow_mut())
    }

    /// Hold durations that directly follow an "A high" write.
    pub fn on_durations(calls: &[HwCall]) -> Vec<u32> {
        calls
            .windows(3)
            .filter_map(|w| match w {
                [
                    HwCall::Set(Line::A, true),
                    HwCall::Set(Line::B, false),
                    HwCall::Hold(us),
                ] => Some(*us),
                _ => None,
            })
            .collect()
    }
}

impl Default for Bench {
    fn default() -> Self {
        Self::new()
    }
}
