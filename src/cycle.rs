//! Deposit clock.
//!
//! Time is cut into fixed-length cycles counted from `epoch_start`. The first
//! `window_length` seconds of every cycle form the deposit window. Everything
//! here is integer arithmetic; timestamps at or before the epoch sit at cycle 0,
//! offset 0.

use crate::types::{CycleInfo, VaultSettings};

fn elapsed(settings: &VaultSettings, t: u64) -> u64 {
    t.saturating_sub(settings.epoch_start)
}

#[must_use]
pub fn cycle_index(settings: &VaultSettings, t: u64) -> u64 {
    elapsed(settings, t) / settings.cycle_length
}

#[must_use]
pub fn offset_in_cycle(settings: &VaultSettings, t: u64) -> u64 {
    elapsed(settings, t) % settings.cycle_length
}

#[must_use]
pub fn in_window(settings: &VaultSettings, t: u64) -> bool {
    offset_in_cycle(settings, t) < settings.window_length
}

pub fn resolve(settings: &VaultSettings, t: u64) -> CycleInfo {
    CycleInfo {
        cycle: cycle_index(settings, t),
        offset: offset_in_cycle(settings, t),
        in_window: in_window(settings, t),
    }
}
