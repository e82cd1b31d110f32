#![no_std]

mod pool;

pub use pool::*;

/// Basis point denominator used for fee arithmetic
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Fee in basis points (1e-4)
/// 0 = no fee, 30 = 0.3%, 100 = 1%
pub type FeeBps = u32;

/// Highest accepted fee. A fee of 100% would swallow every input.
pub const MAX_FEE_BPS: FeeBps = BPS_DENOMINATOR - 1;

/// Check that a fee can be configured on a pool
pub fn fee_is_valid(fee_bps: FeeBps) -> bool {
    fee_bps <= MAX_FEE_BPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_bounds() {
        assert!(fee_is_valid(0));
        assert!(fee_is_valid(30));
        assert!(fee_is_valid(MAX_FEE_BPS));
        assert!(!fee_is_valid(BPS_DENOMINATOR));
        assert!(!fee_is_valid(u32::MAX));
    }

    #[test]
    fn test_reserves_orientation() {
        let reserves = Reserves::new(1000, 2_700_000);
        assert_eq!(reserves.oriented(SwapDirection::AForB), (1000, 2_700_000));
        assert_eq!(reserves.oriented(SwapDirection::BForA), (2_700_000, 1000));
    }

    #[test]
    fn test_reserves_liveness() {
        assert!(Reserves::default().is_empty());
        assert!(!Reserves::default().is_live());
        assert!(!Reserves::new(1, 0).is_live());
        assert!(Reserves::new(1, 1).is_live());
    }
}
