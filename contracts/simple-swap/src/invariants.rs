// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over pool state that must hold after every committed operation.
// They are checked with debug assertions in the contract (enabled by the
// `release-with-logs` profile), asserted in tests, and restated as Certora
// rules under `certora_specs`.
//
// INVARIANT CATEGORIES:
//
// 1. CONSERVATION
//    - Reserves equal the pool's ledger balances
//    - Deposits credit exactly what was pulled
//
// 2. CONSTANT PRODUCT
//    - reserve_a * reserve_b never decreases across a swap
//    - A swap never pays out the whole opposite reserve
//
// 3. LIVENESS
//    - Swaps only run against two positive reserves
//
// 4. SHARES
//    - Shares exist iff reserves exist
//
// ============================================================================

use soroban_sdk::{Env, U256};
use swap_types::{fee_is_valid, PoolConfig, Reserves, SwapDirection};

// ============================================================================
// CONSERVATION INVARIANTS
// ============================================================================

/// Invariant: reserves are never negative
pub fn reserves_non_negative(reserves: &Reserves) -> bool {
    reserves.reserve_a >= 0 && reserves.reserve_b >= 0
}

/// Invariant: reserves mirror the pool's ledger balances
///
/// Property:
///   reserve_a == balance_a && reserve_b == balance_b
pub fn reserves_match_balances(reserves: &Reserves, balance_a: i128, balance_b: i128) -> bool {
    reserves.reserve_a == balance_a && reserves.reserve_b == balance_b
}

/// Invariant: a deposit credits exactly the amounts pulled
pub fn deposit_credits_exactly(
    before: &Reserves,
    after: &Reserves,
    amount_a: i128,
    amount_b: i128,
) -> bool {
    before.reserve_a.checked_add(amount_a) == Some(after.reserve_a)
        && before.reserve_b.checked_add(amount_b) == Some(after.reserve_b)
}

// ============================================================================
// CONSTANT PRODUCT INVARIANTS
// ============================================================================

/// Invariant: k = reserve_a * reserve_b does not decrease
///
/// Property:
///   after.a * after.b >= before.a * before.b
///
/// Computed in 256 bits since two i128 reserves can overflow i128.
pub fn product_non_decreasing(env: &Env, before: &Reserves, after: &Reserves) -> bool {
    if !reserves_non_negative(before) || !reserves_non_negative(after) {
        return false;
    }
    product(env, after) >= product(env, before)
}

/// Invariant: reserve deltas of a swap match the amounts exchanged
///
/// Property:
///   reserve_in' == reserve_in + amount_in
///   reserve_out' == reserve_out - amount_out
pub fn swap_deltas_consistent(
    before: &Reserves,
    after: &Reserves,
    direction: SwapDirection,
    amount_in: i128,
    amount_out: i128,
) -> bool {
    let (in_before, out_before) = before.oriented(direction);
    let (in_after, out_after) = after.oriented(direction);
    in_before.checked_add(amount_in) == Some(in_after)
        && out_before.checked_sub(amount_out) == Some(out_after)
}

/// Invariant: output is positive and strictly below the opposite reserve
pub fn output_bounded(amount_out: i128, reserve_out_before: i128) -> bool {
    amount_out > 0 && amount_out < reserve_out_before
}

// ============================================================================
// LIVENESS INVARIANTS
// ============================================================================

/// Invariant: swaps require two positive reserves
pub fn swap_allowed(reserves: &Reserves) -> bool {
    reserves.is_live()
}

// ============================================================================
// SHARE INVARIANTS
// ============================================================================

/// Invariant: shares outstanding iff the pool holds reserves
///
/// Property:
///   total_shares == 0  <=>  reserve_a == 0 && reserve_b == 0
pub fn shares_backed(total_shares: i128, reserves: &Reserves) -> bool {
    if total_shares < 0 {
        return false;
    }
    (total_shares == 0) == reserves.is_empty()
}

/// Invariant: fee is below 100%
pub fn fee_valid(config: &PoolConfig) -> bool {
    fee_is_valid(config.fee_bps)
}

fn product(env: &Env, reserves: &Reserves) -> U256 {
    U256::from_u128(env, reserves.reserve_a as u128)
        .mul(&U256::from_u128(env, reserves.reserve_b as u128))
}

// ============================================================================
// TESTS
// ============================================================================
