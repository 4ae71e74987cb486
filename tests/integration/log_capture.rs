//! Minimal `log` backend that records messages per test thread.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(ThreadId, String)>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut records) = RECORDS.lock() {
            records.push((thread::current().id(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

pub fn install() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in the test binary");
        log::set_max_level(LevelFilter::Info);
    });
}

/// Drain and return the messages logged so far from the calling thread.
pub fn take_own() -> Vec<String> {
    let me = thread::current().id();
    let mut records = RECORDS.lock().expect("log capture poisoned");
    let (mine, rest): (Vec<_>, Vec<_>) = records.drain(..).partition(|(id, _)| *id == me);
    *records = rest;
    mine.into_iter().map(|(_, msg)| msg).collect()
}
