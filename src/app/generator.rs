//! Signal generator task.
//!
//! Polls the mode flags and, while enabled, emits one full pulse-train
//! cycle per iteration:
//!
//! 1. sync: A low, B high, hold `T_SYNC_ON`
//! 2. for each pulse index in form order: A high, B low, hold on-time;
//!    A low, hold `T_OFF`
//! 3. hold `T_WAIT`
//!
//! Every hold is a busy-wait through [`DelayNs::delay_us`]; the task
//! never yields while enabled, trading the whole core for sub-µs jitter.
//! A started cycle always runs to completion, so flag changes apply at
//! the next cycle boundary.

use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::ports::{Line, SignalPort};
use crate::app::state::ModeFlags;
use crate::timing::{Form, Phase, Step, cycle_plan};

pub struct SignalGenerator<P, D> {
    lines: P,
    delay: D,
    flags: Arc<ModeFlags>,
    last_form: Option<Form>,
}

impl<P: SignalPort, D: DelayNs> SignalGenerator<P, D> {
    pub fn new(lines: P, delay: D, flags: Arc<ModeFlags>) -> Self {
        Self {
            lines,
            delay,
            flags,
            last_form: None,
        }
    }

    /// One loop iteration. Returns the form of the cycle that ran, or
    /// `None` if generation is disabled.
    pub fn poll(&mut self) -> Option<Form> {
        let form = self.flags.form();

        if form != self.last_form {
            match form {
                Some(f) => info!("signal: {:?} form", f),
                None => info!("signal: idle"),
            }
            self.last_form = form;
        }

        if let Some(f) = form {
            self.emit_cycle(f);
        }
        form
    }

    /// Task body: poll forever, spinning while disabled.
    pub fn run(mut self) -> ! {
        info!("signal task: generating");
        loop {
            if self.poll().is_none() {
                core::hint::spin_loop();
            }
        }
    }

    fn emit_cycle(&mut self, form: Form) {
        for step in cycle_plan(form) {
            self.apply(step);
        }
    }

    fn apply(&mut self, step: Step) {
        match step.phase {
            Phase::Sync => {
                self.lines.set_line(Line::A, false);
                self.lines.set_line(Line::B, true);
            }
            Phase::On { .. } => {
                self.lines.set_line(Line::A, true);
                self.lines.set_line(Line::B, false);
            }
            Phase::Off => self.lines.set_line(Line::A, false),
            Phase::Wait => {}
        }
        self.delay.delay_us(step.hold_us);
    }
}
