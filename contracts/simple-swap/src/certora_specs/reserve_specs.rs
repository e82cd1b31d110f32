// ============================================================================
// RESERVE INVARIANT SPECIFICATIONS
// ============================================================================
//
// These specifications verify the reserve bookkeeping of the pool.
//
// KEY INVARIANTS:
// 1. Reserves are never negative
// 2. A new pool starts empty with no shares
// 3. Failed updates leave staged reserves untouched
// 4. Shares exist iff reserves exist
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
use crate::certora_specs::model::PoolSnapshot;

#[cfg(feature = "certora")]
use crate::SimpleSwap;

/// RULE: A freshly constructed pool is empty
#[cfg(feature = "certora")]
#[rule]
pub fn new_pool_is_empty(env: Env, token_a: Address, token_b: Address, fee_bps: u32) {
    cvlr_assume!(token_a != token_b);
    cvlr_assume!(swap_types::fee_is_valid(fee_bps));

    SimpleSwap::__constructor(env.clone(), token_a, token_b, fee_bps);

    let snapshot = PoolSnapshot::capture(&env);
    cvlr_assert!(snapshot.reserves.is_empty());
    cvlr_assert!(snapshot.total_shares == 0);
}

/// RULE: Stored reserves are never negative
#[cfg(feature = "certora")]
#[rule]
pub fn reserves_never_negative(env: Env) {
    let snapshot = PoolSnapshot::capture(&env);
    cvlr_assert!(crate::invariants::reserves_non_negative(&snapshot.reserves));
}

/// RULE: Debiting more than a reserve holds fails and stages nothing
#[cfg(feature = "certora")]
#[rule]
pub fn overdraw_rejected(reserve_a: i128, reserve_b: i128, amount: i128) {
    use crate::reserves::{ReserveUpdate, Side};
    use swap_types::Reserves;

    cvlr_assume!(reserve_a >= 0 && reserve_b >= 0);
    cvlr_assume!(amount > reserve_a);

    let start = Reserves::new(reserve_a, reserve_b);
    let mut update = ReserveUpdate::from_reserves(start);
    cvlr_assert!(update.debit(Side::A, amount).is_err());
    cvlr_assert!(update.after() == start);
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{reserves_non_negative, shares_backed};
    use crate::reserves::{ReserveUpdate, Side};
    use swap_types::Reserves;

    #[test]
    fn test_new_pool_state() {
        let reserves = Reserves::default();
        assert!(reserves.is_empty());
        assert!(reserves_non_negative(&reserves));
        assert!(shares_backed(0, &reserves));
    }

    #[test]
    fn test_overdraw_rejected() {
        let start = Reserves::new(10, 20);
        let mut update = ReserveUpdate::from_reserves(start);
        assert!(update.debit(Side::B, 21).is_err());
        assert_eq!(update.after(), start);
    }

    #[test]
    fn test_full_drain_leaves_no_shares() {
        let mut update = ReserveUpdate::from_reserves(Reserves::new(10, 20));
        update.debit(Side::A, 10).unwrap();
        update.debit(Side::B, 20).unwrap();
        assert!(update.after().is_empty());
        assert!(shares_backed(0, &update.after()));
    }
}
