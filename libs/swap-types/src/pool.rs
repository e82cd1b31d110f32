use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after construction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Token A address (WETH in the reference deployment)
    pub token_a: Address,
    /// Token B address (USDT in the reference deployment)
    pub token_b: Address,
    /// Swap fee in basis points, retained in the input reserve
    pub fee_bps: u32,
}

/// Pool reserves - stored in Instance storage for frequent access
///
/// Both counters always equal the pool's own balance on the matching token
/// ledger.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reserves {
    pub reserve_a: i128,
    pub reserve_b: i128,
}

impl Reserves {
    pub fn new(reserve_a: i128, reserve_b: i128) -> Self {
        Self {
            reserve_a,
            reserve_b,
        }
    }

    /// True once both sides hold a positive amount; swaps require this
    pub fn is_live(&self) -> bool {
        self.reserve_a > 0 && self.reserve_b > 0
    }

    pub fn is_empty(&self) -> bool {
        self.reserve_a == 0 && self.reserve_b == 0
    }

    /// (reserve_in, reserve_out) for a swap in `direction`
    pub fn oriented(&self, direction: SwapDirection) -> (i128, i128) {
        match direction {
            SwapDirection::AForB => (self.reserve_a, self.reserve_b),
            SwapDirection::BForA => (self.reserve_b, self.reserve_a),
        }
    }
}

/// Which token goes into the pool
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapDirection {
    /// Pay token A, receive token B
    AForB,
    /// Pay token B, receive token A
    BForA,
}

// ============================================================================
// SWAP COMPUTATION TYPES
// These types separate pure computation from side effects
// ============================================================================

/// Result of pricing a swap against a reserve snapshot (pure, no storage)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapComputation {
    pub direction: SwapDirection,
    /// Full input pulled from the caller (fee included)
    pub amount_in: i128,
    /// Output pushed to the caller
    pub amount_out: i128,
    /// Reserves after the swap is applied
    pub reserves_after: Reserves,
}
