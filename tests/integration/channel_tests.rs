//! Blocking receive across threads, standing in for ISR → task.

use std::thread;
use std::time::Duration;

use pulsegen::events::{ButtonEvent, InputChannel};

static CHANNEL: InputChannel = InputChannel::new();

#[test]
fn receive_blocks_until_a_press_arrives() {
    let consumer = thread::spawn(|| {
        let first = CHANNEL.receive();
        let second = CHANNEL.receive();
        (first, second)
    });

    thread::sleep(Duration::from_millis(20));
    assert!(!consumer.is_finished());

    assert!(CHANNEL.send_event(ButtonEvent::Enable));
    assert!(CHANNEL.send_event(ButtonEvent::Select));

    let (first, second) = consumer.join().unwrap();
    assert_eq!(first, ButtonEvent::Enable.raw());
    assert_eq!(second, ButtonEvent::Select.raw());
}
