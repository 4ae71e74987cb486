//! Pulse timing policy.
//!
//! One table of on-durations serves both sweep directions: pulse `n`
//! stays on for `T_ON1 + (n - 1) * 50` µs (scaled), so walking the
//! indices upward gives a rising sweep and walking them downward a
//! falling one.
//!
//! ```text
//!          sync   p1     p2       p3 ...            wait
//! A  ______      ▔▔▔▔___▔▔▔▔▔▔___▔▔▔▔▔▔▔▔___ ... ______________
//! B  ______▔▔▔▔▔▔___________________________ ... ______________
//! ```

use core::iter::Rev;
use core::ops::RangeInclusive;

use heapless::Vec;

use crate::config::{
    PULSE_COUNT, PULSE_STEP_US, T_OFF_US, T_ON1_US, T_SYNC_ON_US, T_WAIT_US, TIME_SCALE,
};

/// Steps in one cycle: sync, an on/off pair per pulse, trailing wait.
pub const CYCLE_STEPS: usize = 2 * PULSE_COUNT as usize + 2;

/// On-time of pulse `index` in µs, scaled. `index` is in `1..=PULSE_COUNT`.
pub const fn pulse_on_duration_us(index: u32) -> u32 {
    let base = if index > 1 {
        T_ON1_US + (index - 1) * PULSE_STEP_US
    } else {
        T_ON1_US
    };
    base * TIME_SCALE
}

/// Pulse-index traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Ascending indices: on-times ramp up.
    Normal,
    /// Descending indices: on-times ramp down.
    Alternative,
}

impl Form {
    pub const fn from_pattern_select(pattern_select: bool) -> Self {
        if pattern_select { Self::Normal } else { Self::Alternative }
    }

    pub fn indices(self) -> PulseIndices {
        match self {
            Self::Normal => PulseIndices::Up(1..=PULSE_COUNT),
            Self::Alternative => PulseIndices::Down((1..=PULSE_COUNT).rev()),
        }
    }
}

/// Iterator over `1..=PULSE_COUNT` in the order of a [`Form`].
#[derive(Debug, Clone)]
pub enum PulseIndices {
    Up(RangeInclusive<u32>),
    Down(Rev<RangeInclusive<u32>>),
}

impl Iterator for PulseIndices {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self {
            Self::Up(r) => r.next(),
            Self::Down(r) => r.next(),
        }
    }
}

/// What the lines do during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A low, B high.
    Sync,
    /// A high, B low.
    On { index: u32 },
    /// A low.
    Off,
    /// Lines untouched.
    Wait,
}

/// One line change followed by a busy-wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub phase: Phase,
    pub hold_us: u32,
}

/// Full step plan of one cycle in the given form.
pub fn cycle_plan(form: Form) -> Vec<Step, CYCLE_STEPS> {
    let sync = Step { phase: Phase::Sync, hold_us: T_SYNC_ON_US };
    let off = Step { phase: Phase::Off, hold_us: T_OFF_US };
    let wait = Step { phase: Phase::Wait, hold_us: T_WAIT_US };

    // Sync + PULSE_COUNT on/off pairs + wait fills the plan exactly.
    core::iter::once(sync)
        .chain(form.indices().flat_map(|index| {
            let on = Step {
                phase: Phase::On { index },
                hold_us: pulse_on_duration_us(index),
            };
            [on, off]
        }))
        .chain(core::iter::once(wait))
        .collect()
}

/// Length of one cycle in µs. Identical for both forms.
pub fn cycle_duration_us() -> u32 {
    cycle_plan(Form::Normal).iter().map(|s| s.hold_us).sum()
}
