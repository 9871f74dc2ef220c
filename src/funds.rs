use soroban_sdk::{log, token, Address, Env};

use crate::error::VaultError;

/// Move `amount` of the vault token. A failed token call becomes
/// `TransferFailure`; returning it aborts the invocation and the host discards
/// every write made so far.
pub fn move_funds(
    env: &Env,
    token_address: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), VaultError> {
    match token::Client::new(env, token_address).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer failed: {} -> {} ({})", from.clone(), to.clone(), amount);
            Err(VaultError::TransferFailure)
        }
    }
}

pub fn pull_into_custody(env: &Env, token_address: &Address, from: &Address, amount: i128) -> Result<(), VaultError> {
    move_funds(env, token_address, from, &env.current_contract_address(), amount)
}

pub fn release_from_custody(env: &Env, token_address: &Address, to: &Address, amount: i128) -> Result<(), VaultError> {
    if amount == 0 {
        return Ok(());
    }
    move_funds(env, token_address, &env.current_contract_address(), to, amount)
}
