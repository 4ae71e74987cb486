//! Core-pinned task spawning for the ESP32 dual-core.
//!
//! Wraps `esp_pthread_set_cfg()` so that `std::thread::spawn` creates a
//! FreeRTOS task pinned to a specific CPU core with explicit priority
//! and stack size. On non-ESP targets, falls back to a plain thread.
//!
//! `esp_pthread_set_cfg()` sets thread-local configuration for the
//! *next* `pthread_create()` from the calling thread, so the
//! config→spawn pair must not interleave with other thread creation.

use std::thread::JoinHandle;

use crate::config::TaskConfig;
use crate::error::{Error, Result};

/// Spawn `f` as the FreeRTOS task described by `task`.
#[cfg(target_os = "espidf")]
pub fn spawn_task(task: &TaskConfig, f: impl FnOnce() + Send + 'static) -> Result<JoinHandle<()>> {
    // SAFETY: the config struct is fully initialised from the ESP-IDF
    // defaults and `task.name` is a `'static` null-terminated string.
    let ret = unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = task.core as i32;
        cfg.prio = i32::from(task.priority);
        cfg.stack_size = (task.stack_kb * 1024) as _;
        cfg.thread_name = task.name.as_ptr().cast();
        esp_idf_sys::esp_pthread_set_cfg(&cfg)
    };
    if ret != esp_idf_sys::ESP_OK as i32 {
        return Err(Error::TaskConfig(ret));
    }

    let display_name = task.name.trim_end_matches('\0');
    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        display_name,
        task.core,
        task.priority,
        task.stack_kb
    );

    std::thread::Builder::new()
        .name(display_name.into())
        .spawn(f)
        .map_err(|_| Error::TaskSpawn(display_name))
}

/// Simulation fallback: ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_task(task: &TaskConfig, f: impl FnOnce() + Send + 'static) -> Result<JoinHandle<()>> {
    let display_name = task.name.trim_end_matches('\0');
    log::info!(
        "Spawning '{}' (sim, no core pinning, stack={}KB)",
        display_name,
        task.stack_kb
    );

    std::thread::Builder::new()
        .name(display_name.into())
        .stack_size(task.stack_kb * 1024)
        .spawn(f)
        .map_err(|_| Error::TaskSpawn(display_name))
}
