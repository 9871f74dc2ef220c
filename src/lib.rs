#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub mod cycle;
pub mod deposit;
mod error;
mod events;
mod funds;
pub mod penalty;
mod storage;
mod types;
pub mod withdraw;

pub use error::VaultError;
pub use types::{
    CycleInfo, DataKey, Quest, QuestStatus, VaultSettings, BPS_DENOMINATOR, DAY_IN_SECONDS,
    DEFAULT_CYCLE_LENGTH, DEFAULT_PENALTY_BPS, DEFAULT_WINDOW_LENGTH,
};

/// Log the reason an operation was turned away and hand the error back.
fn rejected(env: &Env, err: VaultError) -> VaultError {
    log!(env, "operation rejected: {}", String::from_str(env, err.message()));
    err
}

fn vault_config(env: &Env) -> Result<(VaultSettings, Address), VaultError> {
    Ok((storage::read_settings(env)?, storage::read_token(env)?))
}

#[contract]
pub struct QuestVault;

#[contractimpl]
impl QuestVault {
    // ── Functions ──────────────────────────────────────────────────────
    // initialize         - Set admin, token and deposit clock (one-time).
    // create_quest       - Open a quest and collect the first cycle's deposit.
    // deposit            - Pay one cycle's contribution inside the window.
    // withdraw           - Close a quest; early exits forfeit the penalty.
    // get_quest          - Read a quest by ID.
    // quest_count        - Total quests created.
    // quests_of          - Quest IDs owned by an address.
    // preview_withdrawal - (payout, penalty) if withdrawn now.
    // is_mature          - Whether a quest can exit without penalty.
    // current_cycle      - Position of the ledger clock in the deposit cycle.
    // settings           - Clock and penalty configuration.
    // retained_penalties - Penalties held by the vault.
    // set_ranking        - Admin: contract notified of streak changes.
    // sweep_penalties    - Admin: send retained penalties elsewhere.
    // ──────────────────────────────────────────────────────────────────

    /// Set admin, token and clock settings; must be called once before any quest.
    pub fn initialize(
        env: Env,
        admin: Address,
        token_address: Address,
        settings: VaultSettings,
    ) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(rejected(&env, VaultError::AlreadyInitialized));
        }
        settings.validate().map_err(|e| rejected(&env, e))?;

        storage::write_config(&env, &admin, &token_address, &settings);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Open a quest for `owner`, pulling `target_amount` as the opening deposit.
    pub fn create_quest(
        env: Env,
        owner: Address,
        target_amount: i128,
        duration_cycles: u32,
    ) -> Result<u32, VaultError> {
        owner.require_auth();
        let (settings, token_address) = vault_config(&env).map_err(|e| rejected(&env, e))?;
        let now = env.ledger().timestamp();

        let quest_id = storage::create_quest(&env, &settings, &owner, target_amount, duration_cycles, now)
            .and_then(|id| deposit::open(&env, &settings, &token_address, id, now).map(|_| id))
            .map_err(|e| rejected(&env, e))?;
        storage::extend_instance_ttl(&env);

        log!(&env, "quest {} created: {} per cycle for {} cycles", quest_id, target_amount, duration_cycles);
        events::quest_created(&env, quest_id, &owner, target_amount, duration_cycles);
        Ok(quest_id)
    }

    /// Pay this cycle's contribution; returns the updated streak.
    pub fn deposit(env: Env, caller: Address, quest_id: u32) -> Result<u32, VaultError> {
        caller.require_auth();
        let (settings, token_address) = vault_config(&env).map_err(|e| rejected(&env, e))?;
        let now = env.ledger().timestamp();

        let streak = deposit::deposit(&env, &settings, &token_address, quest_id, &caller, now)
            .map_err(|e| rejected(&env, e))?;
        storage::extend_instance_ttl(&env);
        Ok(streak)
    }

    /// Withdraw everything deposited into a quest; returns the amount paid out.
    pub fn withdraw(env: Env, caller: Address, quest_id: u32) -> Result<i128, VaultError> {
        caller.require_auth();
        let (settings, token_address) = vault_config(&env).map_err(|e| rejected(&env, e))?;
        let now = env.ledger().timestamp();

        let payout = withdraw::withdraw(&env, &settings, &token_address, quest_id, &caller, now)
            .map_err(|e| rejected(&env, e))?;
        storage::extend_instance_ttl(&env);
        Ok(payout)
    }

    /// Read a quest by ID; `NotFound` if it was never created.
    pub fn get_quest(env: Env, quest_id: u32) -> Result<Quest, VaultError> {
        storage::read_quest(&env, quest_id)
    }

    /// Total number of quests created.
    pub fn quest_count(env: Env) -> u32 {
        storage::quest_count(&env)
    }

    /// IDs of every quest opened by `owner`, oldest first.
    pub fn quests_of(env: Env, owner: Address) -> Vec<u32> {
        storage::quests_of(&env, &owner)
    }

    /// `(payout, penalty)` a withdrawal at the current ledger time would produce.
    pub fn preview_withdrawal(env: Env, quest_id: u32) -> Result<(i128, i128), VaultError> {
        let settings = storage::read_settings(&env)?;
        let quest = storage::read_quest(&env, quest_id)?;
        if !quest.is_active() {
            return Err(VaultError::AlreadyFinalized);
        }
        Ok(penalty::payout(&settings, &quest, env.ledger().timestamp()))
    }

    /// Whether the quest can be withdrawn without penalty right now.
    pub fn is_mature(env: Env, quest_id: u32) -> Result<bool, VaultError> {
        let settings = storage::read_settings(&env)?;
        let quest = storage::read_quest(&env, quest_id)?;
        Ok(penalty::is_mature(&settings, &quest, env.ledger().timestamp()))
    }

    /// Cycle, offset and window state of the current ledger time.
    pub fn current_cycle(env: Env) -> Result<CycleInfo, VaultError> {
        let settings = storage::read_settings(&env)?;
        Ok(cycle::resolve(&settings, env.ledger().timestamp()))
    }

    /// Clock and penalty settings fixed at initialization.
    pub fn settings(env: Env) -> Result<VaultSettings, VaultError> {
        storage::read_settings(&env)
    }

    /// Penalties kept from early withdrawals and not yet swept.
    pub fn retained_penalties(env: Env) -> i128 {
        storage::read_retained(&env)
    }

    /// Admin: contract that receives `record_streak(owner, quest_id, streak)`
    /// after every accepted deposit.
    pub fn set_ranking(env: Env, ranking: Address) -> Result<(), VaultError> {
        let admin = storage::read_admin(&env).map_err(|e| rejected(&env, e))?;
        admin.require_auth();

        storage::write_ranking(&env, &ranking);
        storage::extend_instance_ttl(&env);
        events::ranking_set(&env, &ranking);
        Ok(())
    }

    /// Admin: transfer all retained penalties to `to`; returns the amount sent.
    pub fn sweep_penalties(env: Env, to: Address) -> Result<i128, VaultError> {
        let admin = storage::read_admin(&env).map_err(|e| rejected(&env, e))?;
        admin.require_auth();
        let token_address = storage::read_token(&env)?;

        let amount = storage::read_retained(&env);
        storage::write_retained(&env, 0);
        funds::release_from_custody(&env, &token_address, &to, amount).map_err(|e| rejected(&env, e))?;

        storage::extend_instance_ttl(&env);
        events::penalties_swept(&env, &to, amount);
        Ok(amount)
    }
}
