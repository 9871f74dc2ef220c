//! Maturity and early-withdrawal penalty.
//!
//! A quest matures `duration_cycles` full cycles after its creation. Before
//! that, withdrawing forfeits `penalty_bps` of the deposited total. The penalty
//! is rounded down, so any rounding remainder stays with the owner.

use crate::types::{Quest, VaultSettings, BPS_DENOMINATOR};

/// `creation + duration_cycles * cycle_length`, or `None` on overflow.
#[must_use]
pub fn checked_maturity(settings: &VaultSettings, creation: u64, duration_cycles: u32) -> Option<u64> {
    settings
        .cycle_length
        .checked_mul(duration_cycles as u64)
        .and_then(|span| creation.checked_add(span))
}

#[must_use]
pub fn maturity_timestamp(settings: &VaultSettings, quest: &Quest) -> u64 {
    checked_maturity(settings, quest.creation_timestamp, quest.duration_cycles).unwrap_or(u64::MAX)
}

#[must_use]
pub fn is_mature(settings: &VaultSettings, quest: &Quest, now: u64) -> bool {
    now >= maturity_timestamp(settings, quest)
}

/// Penalty rate in basis points that applies to a withdrawal at `now`.
#[must_use]
pub fn penalty_rate(settings: &VaultSettings, quest: &Quest, now: u64) -> u32 {
    if is_mature(settings, quest, now) {
        0
    } else {
        settings.penalty_bps
    }
}

/// Split the deposited total into `(payout, penalty)`.
#[must_use]
pub fn payout(settings: &VaultSettings, quest: &Quest, now: u64) -> (i128, i128) {
    let rate = penalty_rate(settings, quest, now) as i128;
    // total * rate cannot overflow for any realistic token supply; saturate anyway.
    let penalty = quest.total_deposited.saturating_mul(rate) / BPS_DENOMINATOR;
    (quest.total_deposited - penalty, penalty)
}
