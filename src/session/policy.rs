//! Phase transition and continuation rules.
//!
//! A session is a fixed run of [`CYCLES_PER_SESSION`] cycles. Each cycle is
//! a focus interval followed by a break; the break of the last cycle is a
//! long break, and the session ends when that break expires.

use crate::types::{Phase, CYCLES_PER_SESSION};

/// Decides whether the session goes on after `expiring` ends.
///
/// `completed_cycles` must already include the cycle closed by `expiring`
/// when it is a break.
pub fn should_continue(expiring: Phase, completed_cycles: u32) -> bool {
    if expiring.is_break() {
        completed_cycles < CYCLES_PER_SESSION
    } else {
        true
    }
}

/// Returns the phase that follows `current`.
///
/// When leaving a focus interval, its 1-based number is
/// `completed_cycles + 1`; every fourth one earns a long break.
pub fn next_phase(current: Phase, completed_cycles: u32) -> Phase {
    match current {
        Phase::Focus => {
            let focus_number = completed_cycles + 1;
            if focus_number % CYCLES_PER_SESSION == 0 {
                Phase::LongBreak
            } else {
                Phase::ShortBreak
            }
        }
        Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
    }
}
