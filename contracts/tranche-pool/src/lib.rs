//! # Tranche Pool
//!
//! Settlement ledger for a two-tranche vault over a single asset. Depositors
//! pick the senior ("AA") or junior ("BB") tranche; the pool pulls the asset,
//! mints tranche shares at the tranche's current price and tracks each
//! account's position per tranche.
//!
//! This is the simplified settlement mode: no strategy runs behind the pool,
//! prices only move when assets are donated to a tranche, and senior
//! deposits can be scaled by the senior capacity rule (see
//! [`PoolConfig::senior_capacity_rule`]).

#![no_std]
#![allow(deprecated)]
use soroban_sdk::{contract, contractevent, contractimpl, log, Address, Env};

mod deposit;
mod errors;
mod math;
mod pause;
mod tranche;
mod withdraw;

pub use errors::PoolError;
pub use math::PRICE_SCALAR;
pub use pause::PauseType;
pub use tranche::{PoolConfig, Tranche, TrancheInfo, TRANCHE_COUNT};

use deposit::{deposit_to_tranche, donate_yield};
use tranche::{get_config, get_position, has_config, price_of, set_config, tranche_info};
use withdraw::{redeem_from_tranche, withdraw_from_tranche};

#[cfg(test)]
mod test_helpers;




#[cfg(test)]
mod pause_test;


/// Emitted once when the pool is initialized
#[contractevent]
#[derive(Clone, Debug)]
pub struct PoolInitializedEvent {
    pub admin: Address,
    pub asset: Address,
    pub senior_capacity_rule: bool,
}

#[contract]
pub struct TranchePool;

#[contractimpl]
impl TranchePool {
    /// Initialize the pool with its two tranches
    ///
    /// # Arguments
    /// * `admin` - Pool administrator (must authorize)
    /// * `asset` - The underlying asset token
    /// * `senior_capacity_rule` - Scale senior deposits by the senior share of pool capital
    ///
    /// # Errors
    /// - `AlreadyInitialized` - The pool was already initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        asset: Address,
        senior_capacity_rule: bool,
    ) -> Result<(), PoolError> {
        admin.require_auth();
        if has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }

        set_config(
            &env,
            &PoolConfig {
                admin: admin.clone(),
                asset: asset.clone(),
                senior_capacity_rule,
            },
        );

        PoolInitializedEvent {
            admin,
            asset,
            senior_capacity_rule,
        }
        .publish(&env);
        log!(&env, "initialize capacity_rule={}", senior_capacity_rule);
        Ok(())
    }

    /// Number of tranches in the pool
    pub fn total_tranches(_env: Env) -> u32 {
        TRANCHE_COUNT
    }

    /// Asset, capital, supply and price of a tranche
    pub fn tranche_info(env: Env, tranche: Tranche) -> Result<TrancheInfo, PoolError> {
        tranche_info(&env, tranche)
    }

    pub fn asset(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.asset)
    }

    pub fn admin(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.admin)
    }

    /// Asset units per tranche share, scaled by `PRICE_SCALAR`
    pub fn price_of(env: Env, tranche: Tranche) -> Result<i128, PoolError> {
        price_of(&env, tranche)
    }

    /// Tranche shares held by `user`
    pub fn balance_of(env: Env, user: Address, tranche: Tranche) -> i128 {
        get_position(&env, &user, tranche)
    }

    /// Deposit into a tranche
    ///
    /// # Arguments
    /// * `user` - The depositor (must authorize and have approved the pool)
    /// * `tranche` - Target tranche
    /// * `amount` - Asset amount to deposit
    ///
    /// # Returns
    /// Tranche shares issued to `user`
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `Paused` - Deposits are paused
    /// - `InsufficientAllowance` - The pool is not approved for `amount`
    /// - `InsufficientBalance` - The user holds less than `amount`
    /// - `ZeroShares` - The deposit would issue no shares
    pub fn deposit_to_tranche(
        env: Env,
        user: Address,
        tranche: Tranche,
        amount: i128,
    ) -> Result<i128, PoolError> {
        deposit_to_tranche(&env, user, tranche, amount)
    }

    /// Withdraw an asset amount from a tranche
    ///
    /// # Returns
    /// The asset amount paid to `user`
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `Paused` - Withdrawals are paused
    /// - `InsufficientShares` - The user's position cannot cover the burn
    /// - `InsufficientLiquidity` - The tranche holds less than `amount`
    pub fn withdraw_from_tranche(
        env: Env,
        user: Address,
        tranche: Tranche,
        amount: i128,
    ) -> Result<i128, PoolError> {
        withdraw_from_tranche(&env, user, tranche, amount)
    }

    /// Redeem a share amount from a tranche
    ///
    /// # Returns
    /// The asset amount paid to `user`
    pub fn redeem_from_tranche(
        env: Env,
        user: Address,
        tranche: Tranche,
        shares: i128,
    ) -> Result<i128, PoolError> {
        redeem_from_tranche(&env, user, tranche, shares)
    }

    pub fn deposit_aa(env: Env, user: Address, amount: i128) -> Result<i128, PoolError> {
        deposit_to_tranche(&env, user, Tranche::Senior, amount)
    }

    pub fn deposit_bb(env: Env, user: Address, amount: i128) -> Result<i128, PoolError> {
        deposit_to_tranche(&env, user, Tranche::Junior, amount)
    }

    pub fn withdraw_aa(env: Env, user: Address, amount: i128) -> Result<i128, PoolError> {
        withdraw_from_tranche(&env, user, Tranche::Senior, amount)
    }

    pub fn withdraw_bb(env: Env, user: Address, amount: i128) -> Result<i128, PoolError> {
        withdraw_from_tranche(&env, user, Tranche::Junior, amount)
    }

    /// Add assets to a tranche without minting shares
    ///
    /// # Returns
    /// The tranche price after the donation
    pub fn donate_yield(
        env: Env,
        from: Address,
        tranche: Tranche,
        amount: i128,
    ) -> Result<i128, PoolError> {
        donate_yield(&env, from, tranche, amount)
    }

    /// Set pause state for an operation type (admin only)
    pub fn set_pause(
        env: Env,
        admin: Address,
        pause_type: PauseType,
        paused: bool,
    ) -> Result<(), PoolError> {
        pause::set_pause(&env, admin, pause_type, paused)
    }

    pub fn is_paused(env: Env, pause_type: PauseType) -> bool {
        pause::is_paused(&env, pause_type)
    }
}
