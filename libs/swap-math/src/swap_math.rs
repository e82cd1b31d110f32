use crate::full_math::{mul_div, mul_div_rounding_up};
use soroban_sdk::Env;
use swap_types::{fee_is_valid, FeeBps, BPS_DENOMINATOR};

/// Portion of `amount_in` that trades against the curve once the fee is taken
///
/// Rounds down so the fee is never undercharged. Returns None for a fee of
/// 100% or more.
pub fn amount_after_fee(env: &Env, amount_in: u128, fee_bps: FeeBps) -> Option<u128> {
    if !fee_is_valid(fee_bps) {
        return None;
    }
    mul_div(
        env,
        amount_in,
        (BPS_DENOMINATOR - fee_bps) as u128,
        BPS_DENOMINATOR as u128,
    )
}

/// Constant-product output for an exact input
///
/// amount_out = floor(reserve_out * in_after_fee / (reserve_in + in_after_fee))
///
/// The full `amount_in` (fee included) is later credited to the input
/// reserve, so k never decreases. Returns Some(0) when either reserve is
/// empty; the caller decides whether a zero output is acceptable.
///
/// # Arguments
/// * `amount_in` - Input amount including fee
/// * `reserve_in` - Reserve of the token being paid in
/// * `reserve_out` - Reserve of the token being paid out
/// * `fee_bps` - Fee in basis points (e.g., 30 = 0.3%)
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: FeeBps,
) -> Option<u128> {
    if reserve_in == 0 || reserve_out == 0 {
        return Some(0);
    }

    let amount_in_after_fee = amount_after_fee(env, amount_in, fee_bps)?;
    if amount_in_after_fee == 0 {
        return Some(0);
    }

    let denominator = reserve_in.checked_add(amount_in_after_fee)?;
    mul_div(env, reserve_out, amount_in_after_fee, denominator)
}

/// Smallest input for which `get_amount_out` yields at least `amount_out`
///
/// Both steps round up: first the curve input needed, then the gross input
/// needed to cover the fee. Returns None when `amount_out` would drain the
/// output reserve.
pub fn get_amount_in(
    env: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: FeeBps,
) -> Option<u128> {
    if !fee_is_valid(fee_bps) || reserve_in == 0 || amount_out >= reserve_out {
        return None;
    }
    if amount_out == 0 {
        return Some(0);
    }

    let curve_in = mul_div_rounding_up(env, reserve_in, amount_out, reserve_out - amount_out)?;
    mul_div_rounding_up(
        env,
        curve_in,
        BPS_DENOMINATOR as u128,
        (BPS_DENOMINATOR - fee_bps) as u128,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    const UNIT: u128 = 1_000_000_000_000_000_000; // 18 decimals

    // === get_amount_out tests ===

    #[test]
    fn test_get_amount_out_seeded_pool() {
        let env = Env::default();
        // floor(2_700_000 * 1 / 1001) = 2697
        assert_eq!(get_amount_out(&env, 1, 1000, 2_700_000, 0), Some(2697));
    }

    #[test]
    fn test_get_amount_out_reverse_direction() {
        let env = Env::default();
        // 100 USDT into (2_700_000, 1000): floor(1000 * 100 / 2_700_100) = 0
        assert_eq!(get_amount_out(&env, 100, 2_700_000, 1000, 0), Some(0));
        // 10_000 USDT: floor(1000 * 10_000 / 2_710_000) = 3
        assert_eq!(get_amount_out(&env, 10_000, 2_700_000, 1000, 0), Some(3));
    }

    #[test]
    fn test_get_amount_out_never_drains_reserve() {
        let env = Env::default();
        // Even a huge input leaves at least one unit behind
        let out = get_amount_out(&env, u128::MAX / 2, 1000, 1000, 0).unwrap();
        assert!(out < 1000);
    }

    #[test]
    fn test_get_amount_out_empty_reserves() {
        let env = Env::default();
        assert_eq!(get_amount_out(&env, 100, 0, 0, 0), Some(0));
        assert_eq!(get_amount_out(&env, 100, 1000, 0, 0), Some(0));
        assert_eq!(get_amount_out(&env, 100, 0, 1000, 0), Some(0));
    }

    #[test]
    fn test_get_amount_out_with_fee() {
        let env = Env::default();
        // 0.3%: 1000 in -> 997 after fee -> floor(10_000 * 997 / 10_997) = 906
        assert_eq!(get_amount_out(&env, 1000, 10_000, 10_000, 30), Some(906));
        // Without fee: floor(10_000 * 1000 / 11_000) = 909
        assert_eq!(get_amount_out(&env, 1000, 10_000, 10_000, 0), Some(909));
    }

    #[test]
    fn test_get_amount_out_fee_swallows_dust() {
        let env = Env::default();
        // 1 unit with a 1% fee rounds to 0 after fee
        assert_eq!(get_amount_out(&env, 1, 1000, 1000, 100), Some(0));
    }

    #[test]
    fn test_get_amount_out_invalid_fee() {
        let env = Env::default();
        assert_eq!(get_amount_out(&env, 1000, 10_000, 10_000, BPS_DENOMINATOR), None);
    }

    #[test]
    fn test_get_amount_out_reserve_sum_overflow() {
        let env = Env::default();
        assert_eq!(get_amount_out(&env, u128::MAX, u128::MAX, 1000, 0), None);
    }

    #[test]
    fn test_get_amount_out_realistic_weth_usdt() {
        let env = Env::default();
        // 1 WETH into 1000 WETH / 2.7M USDT
        let out = get_amount_out(&env, UNIT, 1000 * UNIT, 2_700_000 * UNIT, 0).unwrap();
        // ~2697.30 USDT
        assert_eq!(out, 2_700_000 * UNIT / 1001);
        assert!(out > 2697 * UNIT && out < 2698 * UNIT);
    }

    #[test]
    fn test_get_amount_out_product_non_decreasing() {
        let env = Env::default();
        let reserve_in = 1_234_567u128;
        let reserve_out = 7_654_321u128;
        for amount_in in [1u128, 7, 100, 9_999, 1_000_000, 50_000_000] {
            for fee in [0u32, 5, 30, 100] {
                let out = get_amount_out(&env, amount_in, reserve_in, reserve_out, fee).unwrap();
                let k_before = reserve_in * reserve_out;
                let k_after = (reserve_in + amount_in) * (reserve_out - out);
                assert!(k_after >= k_before, "k decreased for in={} fee={}", amount_in, fee);
            }
        }
    }

    // === get_amount_in tests ===

    #[test]
    fn test_get_amount_in_minimal() {
        let env = Env::default();
        // One unit of A buys 2697 B, so 2697 B costs exactly 1 A
        assert_eq!(get_amount_in(&env, 2697, 1000, 2_700_000, 0), Some(1));
        // One more unit of B needs a second unit of A
        assert_eq!(get_amount_in(&env, 2698, 1000, 2_700_000, 0), Some(2));
    }

    #[test]
    fn test_get_amount_in_round_trips_through_amount_out() {
        let env = Env::default();
        let (reserve_in, reserve_out) = (50_000u128, 80_000u128);
        for amount_out in [1u128, 13, 500, 12_345, 79_000] {
            for fee in [0u32, 30, 250] {
                let amount_in =
                    get_amount_in(&env, amount_out, reserve_in, reserve_out, fee).unwrap();
                let got = get_amount_out(&env, amount_in, reserve_in, reserve_out, fee).unwrap();
                assert!(got >= amount_out);
                // And one unit less is not enough
                let short =
                    get_amount_out(&env, amount_in - 1, reserve_in, reserve_out, fee).unwrap();
                assert!(short < amount_out);
            }
        }
    }

    #[test]
    fn test_get_amount_in_cannot_drain() {
        let env = Env::default();
        assert_eq!(get_amount_in(&env, 1000, 1000, 1000, 0), None);
        assert_eq!(get_amount_in(&env, 1001, 1000, 1000, 0), None);
    }

    #[test]
    fn test_get_amount_in_zero_output() {
        let env = Env::default();
        assert_eq!(get_amount_in(&env, 0, 1000, 1000, 30), Some(0));
    }
}
