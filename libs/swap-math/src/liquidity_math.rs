use crate::full_math::{mul_div, sqrt_product};
use soroban_sdk::Env;

/// Shares minted for a deposit of (amount_a, amount_b)
///
/// The first deposit into an empty pool mints sqrt(amount_a * amount_b).
/// Later deposits mint in proportion to the smaller of the two contributions
/// relative to the current reserves, so any excess on the other side stays
/// in the pool for all holders.
pub fn shares_for_deposit(
    env: &Env,
    amount_a: u128,
    amount_b: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Option<u128> {
    if total_shares == 0 || reserve_a == 0 || reserve_b == 0 {
        return Some(sqrt_product(env, amount_a, amount_b));
    }

    let shares_a = mul_div(env, amount_a, total_shares, reserve_a)?;
    let shares_b = mul_div(env, amount_b, total_shares, reserve_b)?;
    Some(shares_a.min(shares_b))
}

/// Token amounts released by burning `shares` out of `total_shares`
///
/// Rounds down on both sides. Returns None if `shares` exceeds the total.
pub fn amounts_for_shares(
    env: &Env,
    shares: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> Option<(u128, u128)> {
    if total_shares == 0 || shares > total_shares {
        return None;
    }

    let amount_a = mul_div(env, reserve_a, shares, total_shares)?;
    let amount_b = mul_div(env, reserve_b, shares, total_shares)?;
    Some((amount_a, amount_b))
}
