use soroban_sdk::{Address, Env, Symbol};

pub fn quest_created(env: &Env, quest_id: u32, owner: &Address, target_amount: i128, duration_cycles: u32) {
    env.events().publish(
        (Symbol::new(env, "quest_created"), quest_id),
        (owner.clone(), target_amount, duration_cycles),
    );
}

/// Accepted deposit: `(owner, cycle, streak)`.
pub fn deposit_recorded(env: &Env, quest_id: u32, owner: &Address, cycle: u64, streak: u32) {
    env.events().publish(
        (Symbol::new(env, "deposit"), quest_id),
        (owner.clone(), cycle, streak),
    );
}

/// Final withdrawal: `(owner, payout, penalty_applied)`.
pub fn withdrawal_recorded(env: &Env, quest_id: u32, owner: &Address, payout: i128, penalty_applied: bool) {
    env.events().publish(
        (Symbol::new(env, "withdraw"), quest_id),
        (owner.clone(), payout, penalty_applied),
    );
}

pub fn ranking_set(env: &Env, ranking: &Address) {
    env.events()
        .publish((Symbol::new(env, "ranking_set"),), ranking.clone());
}

pub fn penalties_swept(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "penalties_swept"),),
        (to.clone(), amount),
    );
}
