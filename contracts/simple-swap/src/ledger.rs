use crate::error::PoolError;
use soroban_sdk::{token, Address, Env};

/// Pull `amount` of `token` from `from` into the pool via transfer-on-behalf
///
/// Allowance and balance are checked up front so a shortfall surfaces as a
/// pool error rather than a trap inside the token contract.
pub fn pull_in(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    let client = token::Client::new(env, token);
    let pool = env.current_contract_address();

    check_can_pull(&client, from, &pool, amount)?;
    client.transfer_from(&pool, from, &pool, &amount);
    Ok(())
}

/// Check both legs of a deposit before moving either one
pub fn check_pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    let client = token::Client::new(env, token);
    check_can_pull(&client, from, &env.current_contract_address(), amount)
}

/// Push `amount` of `token` from the pool to `to`
///
/// The pool's own balance must cover the amount. If it does not, the reserves
/// no longer reflect the ledger.
pub fn push_out(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), PoolError> {
    let client = token::Client::new(env, token);
    let pool = env.current_contract_address();

    if client.balance(&pool) < amount {
        return Err(PoolError::ReservesOutOfSync);
    }
    client.transfer(&pool, to, &amount);
    Ok(())
}

/// Pool's own balance on `token`
pub fn pool_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

fn check_can_pull(
    client: &token::Client,
    from: &Address,
    pool: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    if client.allowance(from, pool) < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        return Err(PoolError::InsufficientFunds);
    }
    Ok(())
}
