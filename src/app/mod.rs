//! Application core: the two tasks, their shared flags, and the port
//! traits they run against.

pub mod consumer;
pub mod generator;
pub mod ports;
pub mod state;
