use soroban_sdk::{contractevent, log, token, Address, Env};

use crate::errors::PoolError;
use crate::math::{mul_div_ceil, mul_div_floor, PRICE_SCALAR};
use crate::pause::{require_not_paused, PauseType};
use crate::tranche::{get_config, get_position, get_state, set_position, set_state, Tranche};

/// Withdraw event data
#[contractevent]
#[derive(Clone, Debug)]
pub struct TrancheWithdrawEvent {
    pub user: Address,
    pub tranche: Tranche,
    pub amount: i128,
    pub shares: i128,
    pub price: i128,
}

/// Withdraw `amount` of the pool asset from `tranche`
///
/// Burns `ceil(amount / price)` of the user's tranche shares.
///
/// # Returns
/// The asset amount sent to `user`
pub fn withdraw_from_tranche(
    env: &Env,
    user: Address,
    tranche: Tranche,
    amount: i128,
) -> Result<i128, PoolError> {
    user.require_auth();
    get_config(env)?;
    require_not_paused(env, PauseType::Withdraw)?;

    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let price = get_state(env, tranche).price()?;
    let shares = mul_div_ceil(amount, PRICE_SCALAR, price).ok_or(PoolError::Overflow)?;

    settle_exit(env, user, tranche, amount, shares, price)?;
    Ok(amount)
}

/// Redeem exactly `shares` of `tranche` for the pool asset
///
/// Pays `floor(shares * price)`.
///
/// # Returns
/// The asset amount sent to `user`
pub fn redeem_from_tranche(
    env: &Env,
    user: Address,
    tranche: Tranche,
    shares: i128,
) -> Result<i128, PoolError> {
    user.require_auth();
    get_config(env)?;
    require_not_paused(env, PauseType::Withdraw)?;

    if shares <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let price = get_state(env, tranche).price()?;
    let amount = mul_div_floor(shares, price, PRICE_SCALAR).ok_or(PoolError::Overflow)?;
    if amount == 0 {
        return Err(PoolError::InvalidAmount);
    }

    settle_exit(env, user, tranche, amount, shares, price)?;
    Ok(amount)
}

/// Burn `shares` from the user's position and pay out `amount`
fn settle_exit(
    env: &Env,
    user: Address,
    tranche: Tranche,
    amount: i128,
    shares: i128,
    price: i128,
) -> Result<(), PoolError> {
    let config = get_config(env)?;
    let position = get_position(env, &user, tranche);
    if position < shares {
        return Err(PoolError::InsufficientShares);
    }

    let mut state = get_state(env, tranche);
    if state.total_assets < amount {
        return Err(PoolError::InsufficientLiquidity);
    }

    state.total_assets = state
        .total_assets
        .checked_sub(amount)
        .ok_or(PoolError::Overflow)?;
    state.total_shares = state
        .total_shares
        .checked_sub(shares)
        .ok_or(PoolError::Overflow)?;
    let remaining = position.checked_sub(shares).ok_or(PoolError::Overflow)?;

    set_state(env, tranche, &state);
    set_position(env, &user, tranche, remaining);

    let token_client = token::Client::new(env, &config.asset);
    token_client.transfer(&env.current_contract_address(), &user, &amount);

    TrancheWithdrawEvent {
        user,
        tranche,
        amount,
        shares,
        price,
    }
    .publish(env);
    log!(env, "withdraw_from_tranche amount={} shares={}", amount, shares);

    Ok(())
}
