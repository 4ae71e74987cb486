//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises a subsystem against
//! the mock hardware. All tests run on the host with no real GPIO.

mod channel_tests;
mod log_capture;
mod mock_hw;
mod pulse_train_tests;
