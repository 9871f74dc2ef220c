//! Quest ledger and vault configuration.
//!
//! Quests live in persistent storage under `DataKey::Quest(id)`. Ids are
//! handed out from the `QuestCount` counter and never reused. Vault-wide
//! configuration sits in instance storage.

use soroban_sdk::{Address, Env, Vec};

use crate::error::VaultError;
use crate::penalty;
use crate::types::{
    DataKey, Quest, QuestStatus, VaultSettings, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD, QUEST_BUMP_AMOUNT, QUEST_LIFETIME_THRESHOLD,
};

// ─── Configuration ────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_config(env: &Env, admin: &Address, token: &Address, settings: &VaultSettings) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Admin, admin);
    storage.set(&DataKey::TokenAddress, token);
    storage.set(&DataKey::Settings, settings);
    storage.set(&DataKey::QuestCount, &0u32);
    storage.set(&DataKey::RetainedPenalties, &0i128);
}

pub fn read_admin(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VaultError::NotInitialized)
}

pub fn read_token(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::TokenAddress)
        .ok_or(VaultError::NotInitialized)
}

pub fn read_settings(env: &Env) -> Result<VaultSettings, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Settings)
        .ok_or(VaultError::NotInitialized)
}

pub fn read_ranking(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Ranking)
}

pub fn write_ranking(env: &Env, ranking: &Address) {
    env.storage().instance().set(&DataKey::Ranking, ranking);
}

pub fn read_retained(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RetainedPenalties)
        .unwrap_or(0)
}

pub fn write_retained(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::RetainedPenalties, &amount);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ─── Quests ───────────────────────────────────────────────────────────────────

/// Allocate the next quest id and store a fresh, empty quest under it.
pub fn create_quest(
    env: &Env,
    settings: &VaultSettings,
    owner: &Address,
    target_amount: i128,
    duration_cycles: u32,
    now: u64,
) -> Result<u32, VaultError> {
    if target_amount <= 0 || duration_cycles == 0 {
        return Err(VaultError::InvalidParameter);
    }
    // Reject durations whose maturity cannot be represented.
    penalty::checked_maturity(settings, now, duration_cycles)
        .ok_or(VaultError::InvalidParameter)?;

    let quest_id = quest_count(env);
    let next_id = quest_id.checked_add(1).ok_or(VaultError::InvalidParameter)?;
    env.storage().instance().set(&DataKey::QuestCount, &next_id);

    let quest = Quest {
        owner: owner.clone(),
        target_amount,
        duration_cycles,
        streak: 0,
        last_deposit_cycle: None,
        total_deposited: 0,
        creation_timestamp: now,
        status: QuestStatus::Active,
    };
    write_quest(env, quest_id, &quest);

    let key = DataKey::OwnerQuests(owner.clone());
    let mut owned: Vec<u32> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env));
    owned.push_back(quest_id);
    let storage = env.storage().persistent();
    storage.set(&key, &owned);
    storage.extend_ttl(&key, QUEST_LIFETIME_THRESHOLD, QUEST_BUMP_AMOUNT);

    Ok(quest_id)
}

pub fn read_quest(env: &Env, quest_id: u32) -> Result<Quest, VaultError> {
    env.storage()
        .persistent()
        .get(&DataKey::Quest(quest_id))
        .ok_or(VaultError::NotFound)
}

pub(crate) fn write_quest(env: &Env, quest_id: u32, quest: &Quest) {
    let key = DataKey::Quest(quest_id);
    let storage = env.storage().persistent();
    storage.set(&key, quest);
    storage.extend_ttl(&key, QUEST_LIFETIME_THRESHOLD, QUEST_BUMP_AMOUNT);
}

pub fn quest_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::QuestCount)
        .unwrap_or(0)
}

pub fn quests_of(env: &Env, owner: &Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerQuests(owner.clone()))
        .unwrap_or(Vec::new(env))
}
