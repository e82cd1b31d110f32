// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification specifications for the SimpleSwap constant-product
// pool.
//
// STRUCTURE:
//
// - model.rs           : Skolem variables, state snapshots
// - math_specs.rs      : Pricing and share math verification
// - reserve_specs.rs   : Reserve bookkeeping invariants
// - swap_specs.rs      : Swap operation verification
// - liquidity_specs.rs : Deposit/withdraw verification
//
// PATTERNS USED:
//
// 1. Skolem variables - Prove universal properties for arbitrary values
// 2. State snapshots - Before/after comparisons
// 3. Sanity rules - Ensure rules aren't vacuously true
//
// USAGE:
// - Unit tests: cargo test -p simple-swap
// - Certora build: cargo build --features certora -p simple-swap
// - Verification: certoraSorobanProver simple_swap.conf
//
// ============================================================================

// Skolem variables and model initialization
#[cfg(feature = "certora")]
pub mod model;

// Spec modules
pub mod liquidity_specs;
pub mod math_specs;
pub mod reserve_specs;
pub mod swap_specs;
