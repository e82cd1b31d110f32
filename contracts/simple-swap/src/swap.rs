use crate::error::{check_positive_amount, to_amount, to_unsigned, PoolError};
use crate::events;
use crate::invariants;
use crate::ledger::{pull_in, push_out};
use crate::reserves::{ReserveUpdate, Side};
use crate::storage::{get_config, get_reserves};
use soroban_sdk::{Address, Env};
use swap_types::{PoolConfig, Reserves, SwapComputation, SwapDirection};

/// Price an exact-input swap and stage it on `update`
///
/// Reads nothing from storage and moves no tokens. Fails if the pool is not
/// live, or if the output rounds to zero or would take the whole opposite
/// reserve. On failure the staged reserves are left as they were.
pub fn compute_swap(
    env: &Env,
    update: &mut ReserveUpdate,
    fee_bps: u32,
    direction: SwapDirection,
    amount_in: i128,
) -> Result<SwapComputation, PoolError> {
    check_positive_amount(amount_in)?;

    let reserves = update.after();
    if !invariants::swap_allowed(&reserves) {
        return Err(PoolError::InsufficientLiquidity);
    }

    let (reserve_in, reserve_out) = reserves.oriented(direction);
    let amount_out = swap_math::get_amount_out(
        env,
        to_unsigned(amount_in)?,
        to_unsigned(reserve_in)?,
        to_unsigned(reserve_out)?,
        fee_bps,
    )
    .ok_or(PoolError::ArithmeticOverflow)?;
    let amount_out = to_amount(amount_out)?;

    if !invariants::output_bounded(amount_out, reserve_out) {
        return Err(PoolError::InsufficientLiquidity);
    }

    let (side_in, side_out) = sides(direction);
    let mut staged = update.clone();
    staged.credit(side_in, amount_in)?;
    staged.debit(side_out, amount_out)?;
    *update = staged;

    Ok(SwapComputation {
        direction,
        amount_in,
        amount_out,
        reserves_after: update.after(),
    })
}

/// Smallest input that buys at least `amount_out`
pub fn compute_amount_in(
    env: &Env,
    reserves: Reserves,
    fee_bps: u32,
    direction: SwapDirection,
    amount_out: i128,
) -> Result<i128, PoolError> {
    check_positive_amount(amount_out)?;

    if !reserves.is_live() {
        return Err(PoolError::InsufficientLiquidity);
    }

    let (reserve_in, reserve_out) = reserves.oriented(direction);
    if amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }

    let amount_in = swap_math::get_amount_in(
        env,
        to_unsigned(amount_out)?,
        to_unsigned(reserve_in)?,
        to_unsigned(reserve_out)?,
        fee_bps,
    )
    .ok_or(PoolError::ArithmeticOverflow)?;
    to_amount(amount_in)
}

/// Execute an exact-input swap for `caller`
///
/// Order of effects: price and stage the new reserves, pull the input, commit
/// the reserves, push the output. Every check that can fail runs before the
/// first token moves, except the pool-balance check on the push which only
/// trips if the reserves have drifted from the ledger.
pub fn execute_swap(
    env: &Env,
    caller: &Address,
    direction: SwapDirection,
    amount_in: i128,
) -> Result<i128, PoolError> {
    let config = get_config(env);
    let mut update = ReserveUpdate::begin(env);
    let swap = compute_swap(env, &mut update, config.fee_bps, direction, amount_in)?;
    debug_assert!(invariants::product_non_decreasing(
        env,
        &update.before(),
        &update.after()
    ));
    debug_assert!(invariants::swap_deltas_consistent(
        &update.before(),
        &update.after(),
        direction,
        swap.amount_in,
        swap.amount_out
    ));

    let (token_in, token_out) = tokens(&config, direction);
    pull_in(env, &token_in, caller, swap.amount_in)?;
    let reserves = update.commit(env);
    push_out(env, &token_out, caller, swap.amount_out)?;

    events::Swap {
        caller: caller.clone(),
        token_in,
        amount_in: swap.amount_in,
        amount_out: swap.amount_out,
        reserve_a: reserves.reserve_a,
        reserve_b: reserves.reserve_b,
    }
    .publish(env);

    Ok(swap.amount_out)
}

/// Read-only quote against the stored reserves
pub fn quote_amount_out(
    env: &Env,
    direction: SwapDirection,
    amount_in: i128,
) -> Result<i128, PoolError> {
    let config = get_config(env);
    let mut update = ReserveUpdate::from_reserves(get_reserves(env));
    compute_swap(env, &mut update, config.fee_bps, direction, amount_in)
        .map(|swap| swap.amount_out)
}

/// Read-only inverse quote against the stored reserves
pub fn quote_amount_in(
    env: &Env,
    direction: SwapDirection,
    amount_out: i128,
) -> Result<i128, PoolError> {
    let config = get_config(env);
    compute_amount_in(env, get_reserves(env), config.fee_bps, direction, amount_out)
}

/// (input side, output side)
fn sides(direction: SwapDirection) -> (Side, Side) {
    match direction {
        SwapDirection::AForB => (Side::A, Side::B),
        SwapDirection::BForA => (Side::B, Side::A),
    }
}

/// (input token, output token)
fn tokens(config: &PoolConfig, direction: SwapDirection) -> (Address, Address) {
    match direction {
        SwapDirection::AForB => (config.token_a.clone(), config.token_b.clone()),
        SwapDirection::BForA => (config.token_b.clone(), config.token_a.clone()),
    }
}
