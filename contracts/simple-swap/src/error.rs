use soroban_sdk::contracterror;

/// Errors returned by pool operations
///
/// Any error aborts the whole invocation; the host discards every storage
/// write and token movement made before it.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// Zero or negative amount supplied
    InvalidAmount = 1,
    /// Caller has not approved the pool for the pulled amount
    InsufficientAllowance = 2,
    /// Caller does not hold the pulled amount
    InsufficientFunds = 3,
    /// Reserves are empty, or the output would be zero or drain a reserve
    InsufficientLiquidity = 4,
    /// An intermediate value exceeded the representable range
    ArithmeticOverflow = 5,
    /// Deposit mints no shares, or provider burns more than they hold
    InsufficientShares = 6,
    /// Pool's token balance is below what its reserves record
    ReservesOutOfSync = 7,
}

/// Validates that an amount is strictly positive
pub fn check_positive_amount(amount: i128) -> Result<(), PoolError> {
    if amount <= 0 {
        Err(PoolError::InvalidAmount)
    } else {
        Ok(())
    }
}

/// Converts a math result back into a token amount
pub fn to_amount(value: u128) -> Result<i128, PoolError> {
    i128::try_from(value).map_err(|_| PoolError::ArithmeticOverflow)
}

/// Converts a token amount into the unsigned domain used by the math crate
pub fn to_unsigned(amount: i128) -> Result<u128, PoolError> {
    u128::try_from(amount).map_err(|_| PoolError::InvalidAmount)
}
