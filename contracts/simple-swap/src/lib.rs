#![no_std]

mod certora_specs;
mod error;
mod events;
mod invariants;
mod ledger;
mod liquidity;
mod reserves;
mod storage;
mod swap;

pub use error::PoolError;

use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::{
    get_config, get_reserves, get_shares, get_total_shares, set_config, set_reserves,
    set_total_shares,
};
use swap_types::{fee_is_valid, PoolConfig, Reserves, SwapDirection};

#[contract]
pub struct SimpleSwap;

#[contractimpl]
impl SimpleSwap {
    /// Bind the pool to its two tokens
    ///
    /// # Arguments
    /// * `token_a` - First token (WETH in the reference deployment)
    /// * `token_b` - Second token (USDT in the reference deployment)
    /// * `fee_bps` - Swap fee in basis points, 0 for a fee-free pool
    pub fn __constructor(env: Env, token_a: Address, token_b: Address, fee_bps: u32) {
        if token_a == token_b {
            panic!("Identical tokens");
        }
        if !fee_is_valid(fee_bps) {
            panic!("Fee too high");
        }

        let config = PoolConfig {
            token_a: token_a.clone(),
            token_b: token_b.clone(),
            fee_bps,
        };
        debug_assert!(invariants::fee_valid(&config));
        set_config(&env, &config);
        set_reserves(&env, &Reserves::default());
        set_total_shares(&env, 0);

        events::PoolInitialized {
            token_a,
            token_b,
            fee_bps,
        }
        .publish(&env);
    }

    /// Deposit both tokens into the pool
    ///
    /// The provider must have approved the pool for both amounts.
    ///
    /// # Returns
    /// Shares minted to the provider
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<i128, PoolError> {
        provider.require_auth();
        liquidity::add_liquidity(&env, &provider, amount_a, amount_b)
    }

    /// Burn shares and withdraw the matching part of both reserves
    ///
    /// # Returns
    /// (amount_a, amount_b) - Token amounts withdrawn
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: i128,
    ) -> Result<(i128, i128), PoolError> {
        provider.require_auth();
        liquidity::remove_liquidity(&env, &provider, shares)
    }

    /// Swap an exact amount of token A for token B
    ///
    /// # Returns
    /// Amount of token B paid out
    pub fn swap_a_for_b(env: Env, caller: Address, amount_in: i128) -> Result<i128, PoolError> {
        caller.require_auth();
        swap::execute_swap(&env, &caller, SwapDirection::AForB, amount_in)
    }

    /// Swap an exact amount of token B for token A
    ///
    /// # Returns
    /// Amount of token A paid out
    pub fn swap_b_for_a(env: Env, caller: Address, amount_in: i128) -> Result<i128, PoolError> {
        caller.require_auth();
        swap::execute_swap(&env, &caller, SwapDirection::BForA, amount_in)
    }

    // === View Functions ===

    /// Get current reserves as (reserve_a, reserve_b)
    pub fn get_reserves(env: Env) -> (i128, i128) {
        let reserves = get_reserves(&env);
        (reserves.reserve_a, reserves.reserve_b)
    }

    /// Output a swap of `amount_in` would pay right now
    pub fn get_amount_out(
        env: Env,
        direction: SwapDirection,
        amount_in: i128,
    ) -> Result<i128, PoolError> {
        swap::quote_amount_out(&env, direction, amount_in)
    }

    /// Smallest input that would pay out at least `amount_out` right now
    pub fn get_amount_in(
        env: Env,
        direction: SwapDirection,
        amount_out: i128,
    ) -> Result<i128, PoolError> {
        swap::quote_amount_in(&env, direction, amount_out)
    }

    /// True while the reserves equal the pool's balances on both tokens
    pub fn reserves_in_sync(env: Env) -> bool {
        let config = get_config(&env);
        invariants::reserves_match_balances(
            &get_reserves(&env),
            ledger::pool_balance(&env, &config.token_a),
            ledger::pool_balance(&env, &config.token_b),
        )
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> PoolConfig {
        get_config(&env)
    }

    /// Get token A address
    pub fn token_a(env: Env) -> Address {
        get_config(&env).token_a
    }

    /// Get token B address
    pub fn token_b(env: Env) -> Address {
        get_config(&env).token_b
    }

    /// Get fee
    pub fn fee_bps(env: Env) -> u32 {
        get_config(&env).fee_bps
    }

    /// Get total outstanding shares
    pub fn total_shares(env: Env) -> i128 {
        get_total_shares(&env)
    }

    /// Get shares held by `provider`
    pub fn shares_of(env: Env, provider: Address) -> i128 {
        get_shares(&env, &provider)
    }
}
