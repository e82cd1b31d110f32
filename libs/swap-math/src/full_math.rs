use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator, or None if the denominator is zero or the
/// quotient does not fit in u128
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    product.div(&U256::from_u128(env, denominator)).to_u128()
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator)
pub fn mul_div_rounding_up(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    let result = mul_div(env, a, b, denominator)?;

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let remainder = product.rem_euclid(&U256::from_u128(env, denominator));

    if remainder > U256::from_u32(env, 0) {
        result.checked_add(1)
    } else {
        Some(result)
    }
}

/// floor(sqrt(a * b)) computed without overflowing the product
///
/// Newton iteration seeded with max(a, b), which is always >= the root.
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let two = U256::from_u32(env, 2);

    let mut x = U256::from_u128(env, a.max(b));
    loop {
        let y = x.add(&product.div(&x)).div(&two);
        if y >= x {
            break;
        }
        x = y;
    }

    // x <= max(a, b) so the conversion cannot fail
    x.to_u128().unwrap_or(u128::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        // Basic test: (10 * 20) / 5 = 40
        assert_eq!(mul_div(&env, 10, 20, 5), Some(40));
    }

    #[test]
    fn test_mul_div_large_numbers() {
        let env = Env::default();
        // (2^100 * 2^100) / 2^100 = 2^100, product overflows u128
        let large = 1u128 << 100;
        assert_eq!(mul_div(&env, large, large, large), Some(large));
    }

    #[test]
    fn test_mul_div_max_values() {
        let env = Env::default();
        let max = u128::MAX;
        assert_eq!(mul_div(&env, max, max, max), Some(max));
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 1, 1, 2), Some(0));
        assert_eq!(mul_div(&env, 3, 1, 2), Some(1));
        assert_eq!(mul_div(&env, 5, 1, 3), Some(1));
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 20, 0), None);
    }

    #[test]
    fn test_mul_div_result_overflow() {
        let env = Env::default();
        // MAX * 2 / 1 does not fit in u128
        assert_eq!(mul_div(&env, u128::MAX, 2, 1), None);
    }

    #[test]
    fn test_mul_div_token_scale() {
        let env = Env::default();
        // 18-decimal amounts: 2.7M USDT * 1 WETH / 1001 WETH
        let unit = 1_000_000_000_000_000_000u128;
        let result = mul_div(&env, 2_700_000 * unit, unit, 1001 * unit).unwrap();
        assert_eq!(result, 2_700_000 * unit / 1001);
    }

    // === mul_div_rounding_up tests ===

    #[test]
    fn test_mul_div_rounding_up_exact() {
        let env = Env::default();
        assert_eq!(mul_div_rounding_up(&env, 10, 20, 5), Some(40));
    }

    #[test]
    fn test_mul_div_rounding_up_with_remainder() {
        let env = Env::default();
        // (10 * 3) / 7 = 4.28... -> 5
        assert_eq!(mul_div_rounding_up(&env, 10, 3, 7), Some(5));
        assert_eq!(mul_div_rounding_up(&env, 1, 1, 2), Some(1));
        assert_eq!(mul_div_rounding_up(&env, 1, 1, 3), Some(1));
    }

    #[test]
    fn test_mul_div_rounding_up_vs_down_difference() {
        let env = Env::default();
        // 7 * 11 = 77, 77 / 13 = 5.923... -> down: 5, up: 6
        assert_eq!(mul_div(&env, 7, 11, 13), Some(5));
        assert_eq!(mul_div_rounding_up(&env, 7, 11, 13), Some(6));
    }

    #[test]
    fn test_mul_div_rounding_up_zero_denominator() {
        let env = Env::default();
        assert_eq!(mul_div_rounding_up(&env, 10, 20, 0), None);
    }

    #[test]
    fn test_mul_div_rounding_up_at_max() {
        let env = Env::default();
        // MAX * MAX / (MAX - 1) has a remainder and the quotient exceeds MAX
        assert_eq!(mul_div_rounding_up(&env, u128::MAX, u128::MAX, u128::MAX - 1), None);
    }

    // === sqrt_product tests ===

    #[test]
    fn test_sqrt_product_perfect_squares() {
        let env = Env::default();
        assert_eq!(sqrt_product(&env, 4, 9), 6);
        assert_eq!(sqrt_product(&env, 1000, 1000), 1000);
        assert_eq!(sqrt_product(&env, 1, 1), 1);
    }

    #[test]
    fn test_sqrt_product_rounds_down() {
        let env = Env::default();
        // sqrt(2) = 1.41
        assert_eq!(sqrt_product(&env, 1, 2), 1);
        // sqrt(1000 * 2_700_000) = 51961.52...
        assert_eq!(sqrt_product(&env, 1000, 2_700_000), 51961);
    }

    #[test]
    fn test_sqrt_product_zero() {
        let env = Env::default();
        assert_eq!(sqrt_product(&env, 0, 1_000_000), 0);
        assert_eq!(sqrt_product(&env, 1_000_000, 0), 0);
    }

    #[test]
    fn test_sqrt_product_beyond_u128() {
        let env = Env::default();
        // 2^100 * 2^100 = 2^200, sqrt = 2^100
        let large = 1u128 << 100;
        assert_eq!(sqrt_product(&env, large, large), large);
        // Skewed inputs: 2^120 * 2^4 = 2^124, sqrt = 2^62
        assert_eq!(sqrt_product(&env, 1u128 << 120, 16), 1u128 << 62);
    }

    #[test]
    fn test_sqrt_product_is_floor() {
        let env = Env::default();
        let a = 123_456_789u128;
        let b = 987_654_321u128;
        let root = sqrt_product(&env, a, b);
        assert!(root * root <= a * b);
        assert!((root + 1) * (root + 1) > a * b);
    }
}
