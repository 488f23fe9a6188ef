//! Share-vault operations over one pool tranche.
//!
//! Wrapper shares are minted and burned 1:1 with the tranche shares the
//! wrapper holds in the pool. The pool decides how many tranche shares a
//! deposit is worth; the wrapper only verifies that its held balance moved
//! by what the pool reported.

use soroban_sdk::{contractevent, log, token, Address, Env};

use crate::conversion::{assets_to_shares, shares_to_assets, Rounding};
use crate::errors::WrapperError;
use crate::pool::{current_price, held_shares, settle, TranchePoolClient};
use crate::share::{burn_shares, mint_shares, spend_allowance};
use crate::storage::{get_balance, get_config, WrapperConfig};

/// Standard share-vault capability set
///
/// Mutating operations take the acting `caller` explicitly; `caller` must
/// authorize the invocation.
pub trait ShareVault {
    /// Deposit `assets`, minting the tranche shares the pool issues to `receiver`
    fn deposit(
        env: Env,
        caller: Address,
        assets: i128,
        receiver: Address,
    ) -> Result<i128, WrapperError>;

    /// Mint at least `shares` to `receiver`, pulling the assets they cost (rounded up)
    fn mint(
        env: Env,
        caller: Address,
        shares: i128,
        receiver: Address,
    ) -> Result<i128, WrapperError>;

    /// Withdraw exactly `assets` to `receiver`, burning the shares they cost
    /// (rounded up) from `owner`
    fn withdraw(
        env: Env,
        caller: Address,
        assets: i128,
        receiver: Address,
        owner: Address,
    ) -> Result<i128, WrapperError>;

    /// Burn exactly `shares` from `owner`, paying their value (rounded down)
    /// to `receiver`
    fn redeem(
        env: Env,
        caller: Address,
        shares: i128,
        receiver: Address,
        owner: Address,
    ) -> Result<i128, WrapperError>;

    fn asset(env: Env) -> Result<Address, WrapperError>;
    fn total_assets(env: Env) -> Result<i128, WrapperError>;
    fn current_price(env: Env) -> Result<i128, WrapperError>;
    fn convert_to_shares(env: Env, assets: i128) -> Result<i128, WrapperError>;
    fn convert_to_assets(env: Env, shares: i128) -> Result<i128, WrapperError>;
    fn preview_deposit(env: Env, assets: i128) -> Result<i128, WrapperError>;
    fn preview_mint(env: Env, shares: i128) -> Result<i128, WrapperError>;
    fn preview_withdraw(env: Env, assets: i128) -> Result<i128, WrapperError>;
    fn preview_redeem(env: Env, shares: i128) -> Result<i128, WrapperError>;
    fn max_deposit(env: Env, receiver: Address) -> i128;
    fn max_mint(env: Env, receiver: Address) -> i128;
    fn max_withdraw(env: Env, owner: Address) -> Result<i128, WrapperError>;
    fn max_redeem(env: Env, owner: Address) -> i128;
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct DepositEvent {
    pub caller: Address,
    pub receiver: Address,
    pub assets: i128,
    pub shares: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct WithdrawEvent {
    pub caller: Address,
    pub receiver: Address,
    pub owner: Address,
    pub assets: i128,
    pub shares: i128,
}

pub fn deposit(
    env: &Env,
    caller: Address,
    assets: i128,
    receiver: Address,
) -> Result<i128, WrapperError> {
    caller.require_auth();
    let config = get_config(env)?;
    if assets <= 0 {
        return Err(WrapperError::InvalidAmount);
    }

    pull_asset(env, &config, &caller, assets)?;
    let shares = forward_deposit(env, &config, assets)?;
    mint_shares(env, &receiver, shares)?;

    log!(env, "deposit assets={} shares={}", assets, shares);
    DepositEvent {
        caller,
        receiver,
        assets,
        shares,
    }
    .publish(env);
    Ok(shares)
}

pub fn mint(
    env: &Env,
    caller: Address,
    shares: i128,
    receiver: Address,
) -> Result<i128, WrapperError> {
    caller.require_auth();
    let config = get_config(env)?;
    if shares <= 0 {
        return Err(WrapperError::InvalidAmount);
    }

    let price = current_price(env, &config.pool, config.tranche)?;
    let assets = shares_to_assets(shares, price, Rounding::Up)?;

    pull_asset(env, &config, &caller, assets)?;
    let issued = forward_deposit(env, &config, assets)?;
    if issued < shares {
        log!(env, "mint short: wanted={} issued={}", shares, issued);
        return Err(WrapperError::PoolRejected);
    }
    // Rounding the asset pull up can earn a little more than asked for; the
    // receiver gets everything the pool issued.
    mint_shares(env, &receiver, issued)?;

    log!(env, "mint assets={} shares={}", assets, issued);
    DepositEvent {
        caller,
        receiver,
        assets,
        shares: issued,
    }
    .publish(env);
    Ok(assets)
}

pub fn withdraw(
    env: &Env,
    caller: Address,
    assets: i128,
    receiver: Address,
    owner: Address,
) -> Result<i128, WrapperError> {
    caller.require_auth();
    let config = get_config(env)?;
    if assets <= 0 {
        return Err(WrapperError::InvalidAmount);
    }

    let price = current_price(env, &config.pool, config.tranche)?;
    let shares = assets_to_shares(assets, price, Rounding::Up)?;

    take_owner_shares(env, &caller, &owner, shares)?;
    let received = forward_exit(env, &config, Exit::Assets(assets), shares)?;
    if received != assets {
        return Err(WrapperError::SupplyMismatch);
    }
    pay_out(env, &config, &receiver, received);

    log!(env, "withdraw assets={} shares={}", assets, shares);
    WithdrawEvent {
        caller,
        receiver,
        owner,
        assets,
        shares,
    }
    .publish(env);
    Ok(shares)
}

pub fn redeem(
    env: &Env,
    caller: Address,
    shares: i128,
    receiver: Address,
    owner: Address,
) -> Result<i128, WrapperError> {
    caller.require_auth();
    let config = get_config(env)?;
    if shares <= 0 {
        return Err(WrapperError::InvalidAmount);
    }

    let price = current_price(env, &config.pool, config.tranche)?;
    if shares_to_assets(shares, price, Rounding::Down)? == 0 {
        return Err(WrapperError::InvalidAmount);
    }

    take_owner_shares(env, &caller, &owner, shares)?;
    let assets = forward_exit(env, &config, Exit::Shares(shares), shares)?;
    pay_out(env, &config, &receiver, assets);

    log!(env, "redeem assets={} shares={}", assets, shares);
    WithdrawEvent {
        caller,
        receiver,
        owner,
        assets,
        shares,
    }
    .publish(env);
    Ok(assets)
}

pub fn total_assets(env: &Env) -> Result<i128, WrapperError> {
    let config = get_config(env)?;
    let held = held_shares(env, &config.pool, config.tranche)?;
    let price = current_price(env, &config.pool, config.tranche)?;
    shares_to_assets(held, price, Rounding::Down)
}

pub fn price(env: &Env) -> Result<i128, WrapperError> {
    let config = get_config(env)?;
    current_price(env, &config.pool, config.tranche)
}

/// Negative amounts are rejected
pub fn to_shares(env: &Env, assets: i128, rounding: Rounding) -> Result<i128, WrapperError> {
    if assets < 0 {
        return Err(WrapperError::InvalidAmount);
    }
    assets_to_shares(assets, price(env)?, rounding)
}

pub fn to_assets(env: &Env, shares: i128, rounding: Rounding) -> Result<i128, WrapperError> {
    if shares < 0 {
        return Err(WrapperError::InvalidAmount);
    }
    shares_to_assets(shares, price(env)?, rounding)
}

pub fn max_withdraw(env: &Env, owner: &Address) -> Result<i128, WrapperError> {
    to_assets(env, get_balance(env, owner), Rounding::Down)
}

enum Exit {
    Assets(i128),
    Shares(i128),
}

/// Check `owner` can cover `shares`, spend `caller`'s allowance if acting for someone else, burn
fn take_owner_shares(
    env: &Env,
    caller: &Address,
    owner: &Address,
    shares: i128,
) -> Result<(), WrapperError> {
    if get_balance(env, owner) < shares {
        return Err(WrapperError::InsufficientBalance);
    }
    if caller != owner {
        spend_allowance(env, owner, caller, shares)?;
    }
    burn_shares(env, owner, shares)
}

/// Move `assets` from `caller` to the wrapper using the allowance `caller` granted the wrapper
fn pull_asset(
    env: &Env,
    config: &WrapperConfig,
    caller: &Address,
    assets: i128,
) -> Result<(), WrapperError> {
    let wrapper = env.current_contract_address();
    let asset_client = token::Client::new(env, &config.asset);

    if asset_client.allowance(caller, &wrapper) < assets {
        return Err(WrapperError::InsufficientAllowance);
    }
    if asset_client.balance(caller) < assets {
        return Err(WrapperError::InsufficientBalance);
    }

    asset_client.transfer_from(&wrapper, caller, &wrapper, &assets);
    Ok(())
}

/// Hand `assets` to the pool tranche and return the shares it issued
fn forward_deposit(env: &Env, config: &WrapperConfig, assets: i128) -> Result<i128, WrapperError> {
    let wrapper = env.current_contract_address();
    let pool = TranchePoolClient::new(env, &config.pool);

    token::Client::new(env, &config.asset).approve(
        &wrapper,
        &config.pool,
        &assets,
        &env.ledger().sequence(),
    );

    let held_before = held_shares(env, &config.pool, config.tranche)?;
    let issued = settle(
        env,
        "deposit_to_tranche",
        pool.try_deposit_to_tranche(&wrapper, &config.tranche, &assets),
    )?;
    let held_after = held_shares(env, &config.pool, config.tranche)?;

    if issued <= 0 || held_after.checked_sub(held_before) != Some(issued) {
        return Err(WrapperError::SupplyMismatch);
    }
    Ok(issued)
}

/// Exit the pool tranche, checking it burned exactly `shares` and paid what it reported
fn forward_exit(
    env: &Env,
    config: &WrapperConfig,
    exit: Exit,
    shares: i128,
) -> Result<i128, WrapperError> {
    let wrapper = env.current_contract_address();
    let pool = TranchePoolClient::new(env, &config.pool);
    let asset_client = token::Client::new(env, &config.asset);

    let held_before = held_shares(env, &config.pool, config.tranche)?;
    let assets_before = asset_client.balance(&wrapper);

    let reported = match exit {
        Exit::Assets(assets) => settle(
            env,
            "withdraw_from_tranche",
            pool.try_withdraw_from_tranche(&wrapper, &config.tranche, &assets),
        )?,
        Exit::Shares(burn) => settle(
            env,
            "redeem_from_tranche",
            pool.try_redeem_from_tranche(&wrapper, &config.tranche, &burn),
        )?,
    };

    let held_after = held_shares(env, &config.pool, config.tranche)?;
    let assets_after = asset_client.balance(&wrapper);

    if held_before.checked_sub(held_after) != Some(shares)
        || assets_after.checked_sub(assets_before) != Some(reported)
    {
        return Err(WrapperError::SupplyMismatch);
    }
    Ok(reported)
}

fn pay_out(env: &Env, config: &WrapperConfig, receiver: &Address, assets: i128) {
    token::Client::new(env, &config.asset).transfer(
        &env.current_contract_address(),
        receiver,
        &assets,
    );
}
