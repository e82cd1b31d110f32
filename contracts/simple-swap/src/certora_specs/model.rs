// ============================================================================
// MODEL STATE AND INITIALIZATION
// ============================================================================

use soroban_sdk::{Address, Env};
use swap_types::Reserves;

use crate::SimpleSwap;

/// Skolem variable for a swap amount, used to prove properties for an
/// arbitrary input
static mut SKOLEM_AMOUNT: i128 = 0;

// ============================================================================
// SKOLEM ACCESSORS
// ============================================================================

pub fn skolem_amount() -> i128 {
    unsafe { SKOLEM_AMOUNT }
}

// ============================================================================
// MODEL INITIALIZATION
// ============================================================================

/// Initialize Skolem variables with nondeterministic values
pub fn init() {
    use cvlr::nondet::nondet;

    unsafe {
        SKOLEM_AMOUNT = nondet();
    }
}

// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

/// Captures pool state for before/after comparisons
#[derive(Clone)]
pub struct PoolSnapshot {
    pub reserves: Reserves,
    pub total_shares: i128,
}

impl PoolSnapshot {
    pub fn capture(env: &Env) -> Self {
        let (reserve_a, reserve_b) = SimpleSwap::get_reserves(env.clone());
        Self {
            reserves: Reserves::new(reserve_a, reserve_b),
            total_shares: SimpleSwap::total_shares(env.clone()),
        }
    }
}

/// Captures a provider's share balance
#[derive(Clone)]
pub struct ShareSnapshot {
    pub shares: i128,
}

impl ShareSnapshot {
    pub fn capture(env: &Env, provider: &Address) -> Self {
        Self {
            shares: SimpleSwap::shares_of(env.clone(), provider.clone()),
        }
    }
}
