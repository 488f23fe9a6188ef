//! # Tranche Wrapper
//!
//! Share-vault adapter in front of one tranche of a tranche pool.
//!
//! The pool only speaks "deposit into tranche X / withdraw from tranche X".
//! This contract exposes the standard vault surface over it:
//! - **deposit / mint**: pull the asset from the caller, forward it to the
//!   pool tranche and mint wrapper shares 1:1 with the tranche shares issued
//! - **withdraw / redeem**: burn wrapper shares, exit the pool tranche and
//!   forward the asset to the receiver
//! - **conversion views**: previews at the pool's live tranche price, each
//!   rounded in the vault's favour
//! - **share token**: balances, allowances and transfers of the wrapper share
//!
//! Invariant: `total_supply()` always equals the tranche shares the wrapper
//! holds in the pool, and the wrapper keeps no asset between transactions.

#![no_std]
#![allow(deprecated)]
use soroban_sdk::{contract, contractevent, contractimpl, log, token, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;

mod conversion;
mod errors;
mod pool;
mod share;
mod storage;
mod vault;

pub use conversion::PRICE_SCALAR;
pub use errors::WrapperError;
pub use pool::{Tranche, TranchePoolInterface};
pub use vault::ShareVault;

use conversion::Rounding;
use pool::{held_shares, settle, TranchePoolClient};
use storage::{
    get_allowance, get_balance, get_config, get_metadata, get_total_supply, has_config,
    set_config, set_metadata, set_total_supply, WrapperConfig,
};

#[cfg(test)]
mod test_helpers;


#[cfg(test)]
mod invariants_test;




/// Emitted once when the wrapper is bound to its pool tranche
#[contractevent]
#[derive(Clone, Debug)]
pub struct WrapperInitializedEvent {
    pub admin: Address,
    pub pool: Address,
    pub tranche: Tranche,
    pub asset: Address,
}

#[contract]
pub struct TrancheWrapper;

#[contractimpl]
impl TrancheWrapper {
    /// Bind the wrapper to one tranche of a pool
    ///
    /// Reads the underlying asset from the pool and the share decimals from
    /// the asset.
    ///
    /// # Arguments
    /// * `admin` - Deployer (must authorize)
    /// * `pool` - The tranche pool contract
    /// * `tranche` - Tranche this wrapper fronts
    /// * `name` - Wrapper share name
    /// * `symbol` - Wrapper share symbol
    ///
    /// # Errors
    /// - `AlreadyInitialized` - The wrapper was already initialized
    /// - `PoolRejected` - The pool did not report an asset
    pub fn initialize(
        env: Env,
        admin: Address,
        pool: Address,
        tranche: Tranche,
        name: String,
        symbol: String,
    ) -> Result<(), WrapperError> {
        admin.require_auth();
        if has_config(&env) {
            return Err(WrapperError::AlreadyInitialized);
        }

        let pool_client = TranchePoolClient::new(&env, &pool);
        let asset = settle(&env, "asset", pool_client.try_asset())?;
        let decimal = token::Client::new(&env, &asset).decimals();

        set_config(
            &env,
            &WrapperConfig {
                admin: admin.clone(),
                pool: pool.clone(),
                tranche,
                asset: asset.clone(),
            },
        );
        set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        set_total_supply(&env, 0);

        WrapperInitializedEvent {
            admin,
            pool,
            tranche,
            asset,
        }
        .publish(&env);
        log!(&env, "initialize tranche={}", tranche as u32);
        Ok(())
    }

    pub fn pool(env: Env) -> Result<Address, WrapperError> {
        Ok(get_config(&env)?.pool)
    }

    pub fn tranche(env: Env) -> Result<Tranche, WrapperError> {
        Ok(get_config(&env)?.tranche)
    }

    /// Tranche shares the wrapper holds in the pool; equals `total_supply()`
    pub fn held_tranche_shares(env: Env) -> Result<i128, WrapperError> {
        let config = get_config(&env)?;
        held_shares(&env, &config.pool, config.tranche)
    }

    // ── Share token ───────────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    /// Set `spender`'s allowance over `from`'s shares to exactly `amount`
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is negative
    /// - `InvalidExpiration` - Non-zero amount with an expiration in the past
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), WrapperError> {
        share::approve(&env, from, spender, amount, expiration_ledger)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), WrapperError> {
        share::transfer(&env, from, to, amount)
    }

    /// Move `from`'s shares on their behalf, spending `spender`'s allowance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), WrapperError> {
        share::transfer_from(&env, spender, from, to, amount)
    }

    pub fn decimals(env: Env) -> Result<u32, WrapperError> {
        Ok(get_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, WrapperError> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, WrapperError> {
        Ok(get_metadata(&env)?.symbol)
    }
}

#[contractimpl]
impl ShareVault for TrancheWrapper {
    /// Deposit `assets` for `receiver`
    ///
    /// `caller` must have approved the wrapper for `assets` on the asset token.
    ///
    /// # Returns
    /// Wrapper shares minted, equal to the tranche shares the pool issued
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `InsufficientAllowance` - The wrapper is not approved for `assets`
    /// - `InsufficientBalance` - `caller` holds less than `assets`
    /// - `PoolRejected` - The pool declined the deposit
    fn deposit(
        env: Env,
        caller: Address,
        assets: i128,
        receiver: Address,
    ) -> Result<i128, WrapperError> {
        vault::deposit(&env, caller, assets, receiver)
    }

    /// Mint `shares` for `receiver`
    ///
    /// # Returns
    /// Assets pulled from `caller`
    fn mint(
        env: Env,
        caller: Address,
        shares: i128,
        receiver: Address,
    ) -> Result<i128, WrapperError> {
        vault::mint(&env, caller, shares, receiver)
    }

    /// Withdraw `assets` to `receiver` from `owner`'s position
    ///
    /// # Returns
    /// Wrapper shares burned from `owner`
    ///
    /// # Errors
    /// - `InsufficientBalance` - `owner` holds fewer shares than required
    /// - `InsufficientAllowance` - `caller` is not `owner` and lacks share allowance
    /// - `PoolRejected` - The pool declined the withdrawal
    fn withdraw(
        env: Env,
        caller: Address,
        assets: i128,
        receiver: Address,
        owner: Address,
    ) -> Result<i128, WrapperError> {
        vault::withdraw(&env, caller, assets, receiver, owner)
    }

    /// Redeem `shares` from `owner`'s position to `receiver`
    ///
    /// # Returns
    /// Assets paid to `receiver`
    fn redeem(
        env: Env,
        caller: Address,
        shares: i128,
        receiver: Address,
        owner: Address,
    ) -> Result<i128, WrapperError> {
        vault::redeem(&env, caller, shares, receiver, owner)
    }

    fn asset(env: Env) -> Result<Address, WrapperError> {
        Ok(get_config(&env)?.asset)
    }

    fn total_assets(env: Env) -> Result<i128, WrapperError> {
        vault::total_assets(&env)
    }

    /// Pool price of the wrapped tranche, scaled by `PRICE_SCALAR`
    fn current_price(env: Env) -> Result<i128, WrapperError> {
        vault::price(&env)
    }

    fn convert_to_shares(env: Env, assets: i128) -> Result<i128, WrapperError> {
        vault::to_shares(&env, assets, Rounding::Down)
    }

    fn convert_to_assets(env: Env, shares: i128) -> Result<i128, WrapperError> {
        vault::to_assets(&env, shares, Rounding::Down)
    }

    fn preview_deposit(env: Env, assets: i128) -> Result<i128, WrapperError> {
        vault::to_shares(&env, assets, Rounding::Down)
    }

    fn preview_mint(env: Env, shares: i128) -> Result<i128, WrapperError> {
        vault::to_assets(&env, shares, Rounding::Up)
    }

    fn preview_withdraw(env: Env, assets: i128) -> Result<i128, WrapperError> {
        vault::to_shares(&env, assets, Rounding::Up)
    }

    fn preview_redeem(env: Env, shares: i128) -> Result<i128, WrapperError> {
        vault::to_assets(&env, shares, Rounding::Down)
    }

    fn max_deposit(_env: Env, _receiver: Address) -> i128 {
        i128::MAX
    }

    fn max_mint(_env: Env, _receiver: Address) -> i128 {
        i128::MAX
    }

    fn max_withdraw(env: Env, owner: Address) -> Result<i128, WrapperError> {
        vault::max_withdraw(&env, &owner)
    }

    fn max_redeem(env: Env, owner: Address) -> i128 {
        get_balance(&env, &owner)
    }
}
