use crate::error::{check_positive_amount, to_amount, to_unsigned, PoolError};
use crate::events;
use crate::invariants;
use crate::ledger::{check_pull, pull_in, push_out};
use crate::reserves::{ReserveUpdate, Side};
use crate::storage::{get_config, get_shares, get_total_shares, set_shares, set_total_shares};
use soroban_sdk::{Address, Env};

/// Deposit both tokens and mint shares to `provider`
///
/// Any ratio is accepted. Shares are minted against the smaller side, so an
/// off-ratio deposit donates its excess to the existing holders.
///
/// # Returns
/// Shares minted
pub fn add_liquidity(
    env: &Env,
    provider: &Address,
    amount_a: i128,
    amount_b: i128,
) -> Result<i128, PoolError> {
    check_positive_amount(amount_a)?;
    check_positive_amount(amount_b)?;

    let config = get_config(env);
    let mut update = ReserveUpdate::begin(env);
    let reserves = update.before();
    let total_shares = get_total_shares(env);

    let minted = swap_math::shares_for_deposit(
        env,
        to_unsigned(amount_a)?,
        to_unsigned(amount_b)?,
        to_unsigned(reserves.reserve_a)?,
        to_unsigned(reserves.reserve_b)?,
        to_unsigned(total_shares)?,
    )
    .ok_or(PoolError::ArithmeticOverflow)?;
    let minted = to_amount(minted)?;
    if minted == 0 {
        return Err(PoolError::InsufficientShares);
    }

    update.credit(Side::A, amount_a)?;
    update.credit(Side::B, amount_b)?;
    debug_assert!(invariants::deposit_credits_exactly(
        &update.before(),
        &update.after(),
        amount_a,
        amount_b
    ));

    let new_total = total_shares
        .checked_add(minted)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let provider_shares = get_shares(env, provider)
        .checked_add(minted)
        .ok_or(PoolError::ArithmeticOverflow)?;

    // Both legs are checked before either token moves
    check_pull(env, &config.token_a, provider, amount_a)?;
    check_pull(env, &config.token_b, provider, amount_b)?;
    pull_in(env, &config.token_a, provider, amount_a)?;
    pull_in(env, &config.token_b, provider, amount_b)?;

    let reserves = update.commit(env);
    set_total_shares(env, new_total);
    set_shares(env, provider, provider_shares);
    debug_assert!(invariants::shares_backed(new_total, &reserves));

    events::LiquidityAdded {
        provider: provider.clone(),
        amount_a,
        amount_b,
        shares: minted,
        reserve_a: reserves.reserve_a,
        reserve_b: reserves.reserve_b,
    }
    .publish(env);

    Ok(minted)
}

/// Burn `shares` from `provider` and pay out the pro-rata reserves
///
/// # Returns
/// (amount_a, amount_b) - Token amounts withdrawn
pub fn remove_liquidity(
    env: &Env,
    provider: &Address,
    shares: i128,
) -> Result<(i128, i128), PoolError> {
    check_positive_amount(shares)?;

    let held = get_shares(env, provider);
    if shares > held {
        return Err(PoolError::InsufficientShares);
    }

    let config = get_config(env);
    let mut update = ReserveUpdate::begin(env);
    let reserves = update.before();
    let total_shares = get_total_shares(env);

    let (amount_a, amount_b) = swap_math::amounts_for_shares(
        env,
        to_unsigned(shares)?,
        to_unsigned(reserves.reserve_a)?,
        to_unsigned(reserves.reserve_b)?,
        to_unsigned(total_shares)?,
    )
    .ok_or(PoolError::InsufficientShares)?;
    let amount_a = to_amount(amount_a)?;
    let amount_b = to_amount(amount_b)?;

    if amount_a == 0 || amount_b == 0 {
        return Err(PoolError::InsufficientLiquidity);
    }

    update.debit(Side::A, amount_a)?;
    update.debit(Side::B, amount_b)?;

    let reserves = update.commit(env);
    set_total_shares(env, total_shares - shares);
    set_shares(env, provider, held - shares);
    debug_assert!(invariants::shares_backed(total_shares - shares, &reserves));

    push_out(env, &config.token_a, provider, amount_a)?;
    push_out(env, &config.token_b, provider, amount_b)?;

    events::LiquidityRemoved {
        provider: provider.clone(),
        amount_a,
        amount_b,
        shares,
        reserve_a: reserves.reserve_a,
        reserve_b: reserves.reserve_b,
    }
    .publish(env);

    Ok((amount_a, amount_b))
}
