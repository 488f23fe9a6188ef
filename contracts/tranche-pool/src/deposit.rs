use soroban_sdk::{contractevent, log, token, Address, Env};

use crate::errors::PoolError;
use crate::math::{mul_div_floor, PRICE_SCALAR};
use crate::pause::{require_not_paused, PauseType};
use crate::tranche::{
    get_config, get_position, get_state, set_position, set_state, PoolConfig, Tranche,
    TrancheState,
};

/// Deposit event data
#[contractevent]
#[derive(Clone, Debug)]
pub struct TrancheDepositEvent {
    pub user: Address,
    pub tranche: Tranche,
    pub amount: i128,
    pub shares: i128,
    pub price: i128,
}

/// Yield donation event data
#[contractevent]
#[derive(Clone, Debug)]
pub struct YieldDonatedEvent {
    pub from: Address,
    pub tranche: Tranche,
    pub amount: i128,
    pub new_price: i128,
}

/// Deposit `amount` of the pool asset into `tranche`
///
/// The user must have approved the pool for at least `amount`.
///
/// # Returns
/// The number of tranche shares issued to `user`
pub fn deposit_to_tranche(
    env: &Env,
    user: Address,
    tranche: Tranche,
    amount: i128,
) -> Result<i128, PoolError> {
    user.require_auth();
    let config = get_config(env)?;
    require_not_paused(env, PauseType::Deposit)?;

    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let mut state = get_state(env, tranche);
    let price = state.price()?;
    let shares = shares_for_deposit(env, &config, tranche, &state, amount, price)?;
    if shares <= 0 {
        return Err(PoolError::ZeroShares);
    }

    pull_asset(env, &config.asset, &user, amount)?;

    state.total_assets = state
        .total_assets
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    state.total_shares = state
        .total_shares
        .checked_add(shares)
        .ok_or(PoolError::Overflow)?;
    let position = get_position(env, &user, tranche)
        .checked_add(shares)
        .ok_or(PoolError::Overflow)?;

    set_state(env, tranche, &state);
    set_position(env, &user, tranche, position);

    TrancheDepositEvent {
        user,
        tranche,
        amount,
        shares,
        price,
    }
    .publish(env);
    log!(env, "deposit_to_tranche amount={} shares={}", amount, shares);

    Ok(shares)
}

/// Shares issued for a deposit of `amount` at `price`
///
/// The base rate is `amount / price`. With the senior capacity rule enabled,
/// a senior deposit made while both tranches hold capital is scaled by the
/// senior tranche's weight in total pool capital.
fn shares_for_deposit(
    env: &Env,
    config: &PoolConfig,
    tranche: Tranche,
    state: &TrancheState,
    amount: i128,
    price: i128,
) -> Result<i128, PoolError> {
    let base = mul_div_floor(amount, PRICE_SCALAR, price).ok_or(PoolError::Overflow)?;

    if !config.senior_capacity_rule || tranche != Tranche::Senior {
        return Ok(base);
    }

    let junior = get_state(env, Tranche::Junior);
    if junior.total_assets == 0 || state.total_assets == 0 {
        return Ok(base);
    }

    let pool_assets = state
        .total_assets
        .checked_add(junior.total_assets)
        .ok_or(PoolError::Overflow)?;
    mul_div_floor(base, state.total_assets, pool_assets).ok_or(PoolError::Overflow)
}

/// Add assets to a tranche without minting shares, raising its price
///
/// Test-mode stand-in for strategy yield.
///
/// # Returns
/// The tranche price after the donation
pub fn donate_yield(
    env: &Env,
    from: Address,
    tranche: Tranche,
    amount: i128,
) -> Result<i128, PoolError> {
    from.require_auth();
    let config = get_config(env)?;

    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    pull_asset(env, &config.asset, &from, amount)?;

    let mut state = get_state(env, tranche);
    state.total_assets = state
        .total_assets
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    set_state(env, tranche, &state);

    let new_price = state.price()?;
    YieldDonatedEvent {
        from,
        tranche,
        amount,
        new_price,
    }
    .publish(env);

    Ok(new_price)
}

/// Move `amount` from `from` into the pool using the allowance `from` granted the pool
fn pull_asset(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    let pool = env.current_contract_address();
    let token_client = token::Client::new(env, asset);

    if token_client.allowance(from, &pool) < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if token_client.balance(from) < amount {
        return Err(PoolError::InsufficientBalance);
    }

    token_client.transfer_from(&pool, from, &pool, &amount);
    Ok(())
}
