use soroban_sdk::{contracttype, Address, Env};
use swap_types::{PoolConfig, Reserves};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config, reserves and total shares are read by every operation and live in
//   Instance storage.
// - Each provider's share balance is a separate Persistent entry (~60 bytes)
//   and is removed once it drops to zero.
// - A swap touches instance storage only; add/remove liquidity touch one
//   persistent entry on top of that.
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Current reserves (Instance storage)
    Reserves,
    /// Total outstanding shares (Instance storage)
    TotalShares,
    /// Shares held by a provider: Address -> i128 (Persistent storage)
    Shares(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn get_config(env: &Env) -> PoolConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Pool not initialized")
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Reserves ===

pub fn get_reserves(env: &Env) -> Reserves {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or_default()
}

pub fn set_reserves(env: &Env, reserves: &Reserves) {
    env.storage().instance().set(&DataKey::Reserves, reserves);
    extend_instance_ttl(env);
}

// === Shares ===

pub fn get_total_shares(env: &Env) -> i128 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn set_total_shares(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
    extend_instance_ttl(env);
}

pub fn get_shares(env: &Env, provider: &Address) -> i128 {
    let key = DataKey::Shares(provider.clone());
    let shares = env.storage().persistent().get(&key).unwrap_or(0);
    if shares > 0 {
        extend_persistent_ttl(env, &key);
    }
    shares
}

pub fn set_shares(env: &Env, provider: &Address, shares: i128) {
    let key = DataKey::Shares(provider.clone());
    if shares == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &shares);
        extend_persistent_ttl(env, &key);
    }
}
