//! GPIO assignments for the pulse generator board (classic ESP32).
//!
//! Single source of truth: drivers and the button decoder reference
//! these constants rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Signal outputs
// ---------------------------------------------------------------------------

/// Signal A: pulse line, also mirrors the `enabled` flag.
pub const SIGNAL_A_GPIO: i32 = 16;
/// Signal B: sync line, also mirrors the `pattern_select` flag.
pub const SIGNAL_B_GPIO: i32 = 21;

// ---------------------------------------------------------------------------
// Buttons (active-high, external pull resistors, rising-edge interrupt)
// ---------------------------------------------------------------------------

/// Toggles pulse generation on and off.
pub const BUTTON_ENABLE_GPIO: i32 = 32;
/// Toggles between the ascending and descending sweep.
pub const BUTTON_SELECT_GPIO: i32 = 33;
