//! Final withdrawal of a quest.

use soroban_sdk::{log, Address, Env};

use crate::error::VaultError;
use crate::events;
use crate::funds;
use crate::penalty;
use crate::storage;
use crate::types::{QuestStatus, VaultSettings};

/// Close `quest_id` and release its deposits to the owner, minus the early
/// withdrawal penalty if the quest has not matured. Returns the payout.
pub fn withdraw(
    env: &Env,
    settings: &VaultSettings,
    token_address: &Address,
    quest_id: u32,
    caller: &Address,
    now: u64,
) -> Result<i128, VaultError> {
    let mut quest = storage::read_quest(env, quest_id)?;
    if &quest.owner != caller {
        return Err(VaultError::Unauthorized);
    }
    if !quest.is_active() {
        return Err(VaultError::AlreadyFinalized);
    }

    let (payout, penalty) = penalty::payout(settings, &quest, now);

    // Terminal status is recorded before funds leave custody.
    quest.status = QuestStatus::Withdrawn;
    storage::write_quest(env, quest_id, &quest);
    if penalty > 0 {
        let retained = storage::read_retained(env)
            .checked_add(penalty)
            .ok_or(VaultError::InvalidParameter)?;
        storage::write_retained(env, retained);
    }

    funds::release_from_custody(env, token_address, caller, payout)?;

    log!(env, "quest {} withdrawn: payout {}, penalty {}", quest_id, payout, penalty);
    events::withdrawal_recorded(env, quest_id, &quest.owner, payout, penalty > 0);
    Ok(payout)
}
