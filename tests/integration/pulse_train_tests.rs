//! Generator output for each form, driven through the button path.

use pulsegen::app::ports::Line;
use pulsegen::config::{T_OFF_US, T_SYNC_ON_US, T_WAIT_US, TIME_SCALE};
use pulsegen::events::ButtonEvent;
use pulsegen::timing::Form;

use crate::mock_hw::{Bench, HwCall};

fn scaled(us: &[u32]) -> Vec<u32> {
    us.iter().map(|v| v * TIME_SCALE).collect()
}

/// Enable generation (and optionally select the normal form), then
/// clear the indicator writes from the trace.
fn armed(normal: bool) -> Bench {
    let mut bench = Bench::new();
    bench.clock.set(1000);
    bench.consumer.handle(ButtonEvent::Enable.raw());
    if normal {
        bench.consumer.handle(ButtonEvent::Select.raw());
    }
    bench.take_trace();
    bench
}

#[test]
fn normal_form_ramps_up() {
    let mut bench = armed(true);
    assert_eq!(bench.generator.poll(), Some(Form::Normal));

    let calls = bench.take_trace();
    assert_eq!(Bench::on_durations(&calls), scaled(&[100, 150, 200, 250, 300]));
}

#[test]
fn alternative_form_ramps_down() {
    let mut bench = armed(false);
    assert_eq!(bench.generator.poll(), Some(Form::Alternative));

    let calls = bench.take_trace();
    assert_eq!(Bench::on_durations(&calls), scaled(&[300, 250, 200, 150, 100]));
}

#[test]
fn cycle_opens_with_sync_and_closes_with_wait() {
    let mut bench = armed(true);
    bench.generator.poll();
    let calls = bench.take_trace();

    assert_eq!(
        calls[..3],
        [
            HwCall::Set(Line::A, false),
            HwCall::Set(Line::B, true),
            HwCall::Hold(T_SYNC_ON_US),
        ]
    );
    assert_eq!(
        calls[calls.len() - 3..],
        [
            HwCall::Set(Line::A, false),
            HwCall::Hold(T_OFF_US),
            HwCall::Hold(T_WAIT_US),
        ]
    );
}

#[test]
fn every_pulse_is_followed_by_off_time() {
    let mut bench = armed(false);
    bench.generator.poll();
    let calls = bench.take_trace();

    let offs = calls
        .windows(2)
        .filter(|w| *w == [HwCall::Set(Line::A, false), HwCall::Hold(T_OFF_US)])
        .count();
    assert_eq!(offs, 5);
}

#[test]
fn both_forms_use_the_same_durations() {
    let mut up = armed(true);
    let mut down = armed(false);
    up.generator.poll();
    down.generator.poll();

    let mut a = Bench::on_durations(&up.take_trace());
    let mut b = Bench::on_durations(&down.take_trace());
    assert_ne!(a, b);
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn disable_press_stops_after_current_cycle() {
    let mut bench = armed(true);
    assert_eq!(bench.generator.poll(), Some(Form::Normal));

    bench.clock.set(2000);
    bench.consumer.handle(ButtonEvent::Enable.raw());
    bench.take_trace();

    assert_eq!(bench.generator.poll(), None);
    assert!(bench.take_trace().is_empty());
}
