// ============================================================================
// MATH INVARIANT SPECIFICATIONS
// ============================================================================
//
// These specifications verify the pricing and share math used by the pool.
//
// KEY INVARIANTS:
// 1. mul_div rounding up exceeds rounding down by at most one
// 2. Output never reaches the output reserve
// 3. The fee never increases the output
// 4. get_amount_in is sufficient for the requested output
// 5. Burning shares never releases more than the reserves
//
// ============================================================================

// ============================================================================
// FORMAL VERIFICATION RULES (Certora Sunbeam)
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Sanity check - a positive output is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_amount_out(env: Env, amount_in: u128, reserve_in: u128, reserve_out: u128) {
    cvlr_assume!(reserve_in > 0 && reserve_out > 0);
    let out = swap_math::get_amount_out(&env, amount_in, reserve_in, reserve_out, 0);
    cvlr_satisfy!(out.unwrap_or(0) > 0);
}

/// RULE: mul_div rounding up differs from rounding down by at most one
#[cfg(feature = "certora")]
#[rule]
pub fn mul_div_rounds_down(env: Env, a: u128, b: u128, c: u128) {
    cvlr_assume!(c > 0);
    cvlr_assume!(a <= u64::MAX as u128);
    cvlr_assume!(b <= u64::MAX as u128);

    let down = swap_math::mul_div(&env, a, b, c);
    let up = swap_math::mul_div_rounding_up(&env, a, b, c);

    if let (Some(down), Some(up)) = (down, up) {
        cvlr_assert!(down <= up);
        cvlr_assert!(up - down <= 1);
    }
}

/// RULE: Output is strictly below the output reserve
#[cfg(feature = "certora")]
#[rule]
pub fn amount_out_below_reserve(
    env: Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) {
    cvlr_assume!(fee_bps < swap_types::BPS_DENOMINATOR);
    cvlr_assume!(reserve_in > 0 && reserve_out > 0);

    if let Some(out) = swap_math::get_amount_out(&env, amount_in, reserve_in, reserve_out, fee_bps)
    {
        cvlr_assert!(out < reserve_out);
    }
}

/// RULE: A fee never pays out more than the fee-free swap
#[cfg(feature = "certora")]
#[rule]
pub fn fee_never_increases_output(
    env: Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) {
    cvlr_assume!(fee_bps < swap_types::BPS_DENOMINATOR);
    cvlr_assume!(amount_in <= u64::MAX as u128);
    cvlr_assume!(reserve_in <= u64::MAX as u128 && reserve_out <= u64::MAX as u128);

    let with_fee = swap_math::get_amount_out(&env, amount_in, reserve_in, reserve_out, fee_bps);
    let no_fee = swap_math::get_amount_out(&env, amount_in, reserve_in, reserve_out, 0);

    if let (Some(with_fee), Some(no_fee)) = (with_fee, no_fee) {
        cvlr_assert!(with_fee <= no_fee);
    }
}

/// RULE: get_amount_in buys at least the requested output
#[cfg(feature = "certora")]
#[rule]
pub fn amount_in_is_sufficient(
    env: Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) {
    cvlr_assume!(fee_bps < swap_types::BPS_DENOMINATOR);
    cvlr_assume!(reserve_in > 0 && reserve_in <= u64::MAX as u128);
    cvlr_assume!(reserve_out <= u64::MAX as u128);
    cvlr_assume!(amount_out > 0 && amount_out < reserve_out);

    if let Some(amount_in) =
        swap_math::get_amount_in(&env, amount_out, reserve_in, reserve_out, fee_bps)
    {
        let out = swap_math::get_amount_out(&env, amount_in, reserve_in, reserve_out, fee_bps);
        cvlr_assert!(out.unwrap_or(0) >= amount_out);
    }
}

/// RULE: Burning shares never releases more than the reserves
#[cfg(feature = "certora")]
#[rule]
pub fn withdrawal_bounded_by_reserves(
    env: Env,
    shares: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) {
    cvlr_assume!(total_shares > 0 && shares <= total_shares);

    if let Some((amount_a, amount_b)) =
        swap_math::amounts_for_shares(&env, shares, reserve_a, reserve_b, total_shares)
    {
        cvlr_assert!(amount_a <= reserve_a);
        cvlr_assert!(amount_b <= reserve_b);
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
