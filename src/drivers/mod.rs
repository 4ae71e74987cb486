//! Hardware initialisation, busy-wait delay, and task spawning.

pub mod delay;
pub mod hw_init;
pub mod task_pin;
