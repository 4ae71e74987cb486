//! PulseGen firmware library.
//!
//! Exposes the pure-logic modules for integration testing. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module, with a simulation fallback for host builds.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod debounce;
pub mod events;
pub mod pins;
pub mod timing;

pub mod error;

pub mod adapters;
pub mod drivers;
