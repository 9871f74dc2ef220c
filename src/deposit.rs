//! Deposit processing and streak bookkeeping.

use soroban_sdk::{log, vec, Address, Env, IntoVal, Symbol, Val, Vec};

use crate::cycle;
use crate::error::VaultError;
use crate::events;
use crate::funds;
use crate::storage;
use crate::types::{Quest, VaultSettings};

/// Streak after an accepted deposit in `cycle`: a deposit in the cycle right
/// after the previous one (or the very first deposit) extends the streak, any
/// gap resets it to zero.
#[must_use]
pub fn next_streak(last_deposit_cycle: Option<u64>, cycle: u64, streak: u32) -> u32 {
    match last_deposit_cycle {
        None => streak.saturating_add(1),
        Some(last) if last.checked_add(1) == Some(cycle) => streak.saturating_add(1),
        Some(_) => 0,
    }
}

/// Check every rule a deposit at `now` must satisfy and return the cycle it
/// lands in.
pub fn validate(settings: &VaultSettings, quest: &Quest, depositor: &Address, now: u64) -> Result<u64, VaultError> {
    if &quest.owner != depositor {
        return Err(VaultError::Unauthorized);
    }
    if !quest.is_active() {
        return Err(VaultError::AlreadyFinalized);
    }

    let info = cycle::resolve(settings, now);
    if !info.in_window {
        return Err(VaultError::OutsideWindow);
    }
    if matches!(quest.last_deposit_cycle, Some(last) if info.cycle <= last) {
        return Err(VaultError::DuplicateDeposit);
    }
    Ok(info.cycle)
}

/// Accept one cycle's contribution for `quest_id`. Returns the new streak.
pub fn deposit(
    env: &Env,
    settings: &VaultSettings,
    token_address: &Address,
    quest_id: u32,
    depositor: &Address,
    now: u64,
) -> Result<u32, VaultError> {
    let mut quest = storage::read_quest(env, quest_id)?;
    let cycle = validate(settings, &quest, depositor, now)?;

    quest.streak = next_streak(quest.last_deposit_cycle, cycle, quest.streak);
    quest.last_deposit_cycle = Some(cycle);
    quest.total_deposited = quest
        .total_deposited
        .checked_add(quest.target_amount)
        .ok_or(VaultError::InvalidParameter)?;
    storage::write_quest(env, quest_id, &quest);

    funds::pull_into_custody(env, token_address, depositor, quest.target_amount)?;
    notify_ranking(env, &quest.owner, quest_id, quest.streak);

    log!(env, "deposit accepted: quest {}, cycle {}, streak {}", quest_id, cycle, quest.streak);
    events::deposit_recorded(env, quest_id, &quest.owner, cycle, quest.streak);
    Ok(quest.streak)
}

/// Collect the opening contribution of a freshly created quest. The creation
/// cycle counts as paid but does not start the streak, and the window does
/// not apply. Published as a `deposit` event with streak 0.
pub fn open(
    env: &Env,
    settings: &VaultSettings,
    token_address: &Address,
    quest_id: u32,
    now: u64,
) -> Result<(), VaultError> {
    let mut quest = storage::read_quest(env, quest_id)?;
    let cycle = cycle::cycle_index(settings, now);
    quest.last_deposit_cycle = Some(cycle);
    quest.total_deposited = quest.target_amount;
    storage::write_quest(env, quest_id, &quest);

    funds::pull_into_custody(env, token_address, &quest.owner, quest.target_amount)?;
    events::deposit_recorded(env, quest_id, &quest.owner, cycle, quest.streak);
    Ok(())
}

/// Fire-and-forget streak update to the ranking contract, if one is set.
fn notify_ranking(env: &Env, owner: &Address, quest_id: u32, streak: u32) {
    let Some(ranking) = storage::read_ranking(env) else {
        return;
    };
    let args: Vec<Val> = vec![
        env,
        owner.clone().into_val(env),
        quest_id.into_val(env),
        streak.into_val(env),
    ];
    let res = env.try_invoke_contract::<(), soroban_sdk::Error>(
        &ranking,
        &Symbol::new(env, "record_streak"),
        args,
    );
    if !matches!(res, Ok(Ok(()))) {
        log!(env, "ranking notification failed for quest {}", quest_id);
    }
}
