// ============================================================================
// SWAP INVARIANT SPECIFICATIONS
// ============================================================================
//
// These specifications verify swap operations of the constant-product pool.
//
// KEY INVARIANTS:
// 1. reserve_a * reserve_b never decreases
// 2. Reserve deltas equal the amounts exchanged
// 3. Output is positive and below the opposite reserve
// 4. Swaps fail against an empty pool
// 5. A failed swap leaves reserves unchanged
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::certora_specs::model;

/// RULE: compute_swap never decreases the product of the reserves
#[cfg(feature = "certora")]
#[rule]
pub fn swap_product_non_decreasing(
    env: Env,
    reserve_a: i128,
    reserve_b: i128,
    fee_bps: u32,
    a_for_b: bool,
) {
    use crate::reserves::ReserveUpdate;
    use crate::swap::compute_swap;
    use swap_types::{Reserves, SwapDirection};

    model::init();
    let amount_in = model::skolem_amount();
    cvlr_assume!(reserve_a > 0 && reserve_b > 0);
    cvlr_assume!(fee_bps < swap_types::BPS_DENOMINATOR);

    let direction = if a_for_b {
        SwapDirection::AForB
    } else {
        SwapDirection::BForA
    };

    let mut update = ReserveUpdate::from_reserves(Reserves::new(reserve_a, reserve_b));
    if let Ok(swap) = compute_swap(&env, &mut update, fee_bps, direction, amount_in) {
        let before = update.before();
        let after = update.after();
        cvlr_assert!(crate::invariants::product_non_decreasing(&env, &before, &after));
        cvlr_assert!(crate::invariants::swap_deltas_consistent(
            &before,
            &after,
            direction,
            swap.amount_in,
            swap.amount_out
        ));
        let (_, reserve_out) = before.oriented(direction);
        cvlr_assert!(crate::invariants::output_bounded(swap.amount_out, reserve_out));
    }
}

/// RULE: A failed compute_swap stages nothing
#[cfg(feature = "certora")]
#[rule]
pub fn failed_swap_stages_nothing(env: Env, reserve_a: i128, reserve_b: i128, amount_in: i128) {
    use crate::reserves::ReserveUpdate;
    use crate::swap::compute_swap;
    use swap_types::{Reserves, SwapDirection};

    cvlr_assume!(reserve_a >= 0 && reserve_b >= 0);

    let start = Reserves::new(reserve_a, reserve_b);
    let mut update = ReserveUpdate::from_reserves(start);
    if compute_swap(&env, &mut update, 0, SwapDirection::AForB, amount_in).is_err() {
        cvlr_assert!(update.after() == start);
    }
}

/// RULE: Swapping against an empty pool fails
#[cfg(feature = "certora")]
#[rule]
pub fn empty_pool_rejects_swap(
    env: Env,
    token_a: Address,
    token_b: Address,
    caller: Address,
    amount_in: i128,
) {
    use crate::SimpleSwap;

    cvlr_assume!(token_a != token_b);
    SimpleSwap::__constructor(env.clone(), token_a, token_b, 0);

    let result = SimpleSwap::swap_a_for_b(env.clone(), caller, amount_in);
    cvlr_assert!(result.is_err());
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
