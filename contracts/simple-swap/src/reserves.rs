use crate::error::PoolError;
use crate::storage::{get_reserves, set_reserves};
use soroban_sdk::Env;
use swap_types::Reserves;

/// Which reserve counter an update touches
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    A,
    B,
}

/// Staged change to the pool reserves
///
/// Credits and debits are applied to a copy of the stored reserves with
/// checked arithmetic. Nothing reaches storage until `commit`, and dropping
/// the update without committing discards it.
#[derive(Clone, Debug)]
pub struct ReserveUpdate {
    before: Reserves,
    after: Reserves,
}

impl ReserveUpdate {
    /// Stage an update on top of the stored reserves
    pub fn begin(env: &Env) -> Self {
        Self::from_reserves(get_reserves(env))
    }

    pub fn from_reserves(reserves: Reserves) -> Self {
        Self {
            before: reserves,
            after: reserves,
        }
    }

    pub fn before(&self) -> Reserves {
        self.before
    }

    pub fn after(&self) -> Reserves {
        self.after
    }

    pub fn credit(&mut self, side: Side, amount: i128) -> Result<(), PoolError> {
        if amount < 0 {
            return Err(PoolError::InvalidAmount);
        }
        let reserve = self.reserve_mut(side);
        *reserve = reserve
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, side: Side, amount: i128) -> Result<(), PoolError> {
        if amount < 0 {
            return Err(PoolError::InvalidAmount);
        }
        let reserve = self.reserve_mut(side);
        if *reserve < amount {
            return Err(PoolError::InsufficientLiquidity);
        }
        *reserve -= amount;
        Ok(())
    }

    /// Write the staged reserves and return them
    pub fn commit(self, env: &Env) -> Reserves {
        set_reserves(env, &self.after);
        self.after
    }

    fn reserve_mut(&mut self, side: Side) -> &mut i128 {
        match side {
            Side::A => &mut self.after.reserve_a,
            Side::B => &mut self.after.reserve_b,
        }
    }
}
