use soroban_sdk::{contractevent, Address, Env};

use crate::errors::WrapperError;
use crate::storage::{
    get_allowance, get_balance, get_total_supply, set_allowance, set_balance, set_total_supply,
};

/// Wrapper share transfer, mint (`from` = wrapper) or burn (`to` = wrapper)
#[contractevent]
#[derive(Clone, Debug)]
pub struct ShareTransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ShareApproveEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub fn mint_shares(env: &Env, to: &Address, amount: i128) -> Result<(), WrapperError> {
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(WrapperError::ArithmeticOverflow)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(WrapperError::ArithmeticOverflow)?;

    set_balance(env, to, balance);
    set_total_supply(env, supply);

    ShareTransferEvent {
        from: env.current_contract_address(),
        to: to.clone(),
        amount,
    }
    .publish(env);
    Ok(())
}

pub fn burn_shares(env: &Env, from: &Address, amount: i128) -> Result<(), WrapperError> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(WrapperError::InsufficientBalance);
    }
    let supply = get_total_supply(env)
        .checked_sub(amount)
        .ok_or(WrapperError::ArithmeticOverflow)?;

    set_balance(env, from, balance - amount);
    set_total_supply(env, supply);

    ShareTransferEvent {
        from: from.clone(),
        to: env.current_contract_address(),
        amount,
    }
    .publish(env);
    Ok(())
}

pub fn move_shares(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), WrapperError> {
    if amount < 0 {
        return Err(WrapperError::InvalidAmount);
    }
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(WrapperError::InsufficientBalance);
    }

    set_balance(env, from, from_balance - amount);
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(WrapperError::ArithmeticOverflow)?;
    set_balance(env, to, to_balance);

    ShareTransferEvent {
        from: from.clone(),
        to: to.clone(),
        amount,
    }
    .publish(env);
    Ok(())
}

/// Decrease `spender`'s allowance over `from` by exactly `amount`
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), WrapperError> {
    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(WrapperError::InsufficientAllowance);
    }
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}

pub fn approve(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), WrapperError> {
    from.require_auth();
    if amount < 0 {
        return Err(WrapperError::InvalidAmount);
    }

    set_allowance(env, &from, &spender, amount, expiration_ledger)?;

    ShareApproveEvent {
        from,
        spender,
        amount,
        expiration_ledger,
    }
    .publish(env);
    Ok(())
}

pub fn transfer(env: &Env, from: Address, to: Address, amount: i128) -> Result<(), WrapperError> {
    from.require_auth();
    move_shares(env, &from, &to, amount)
}

pub fn transfer_from(
    env: &Env,
    spender: Address,
    from: Address,
    to: Address,
    amount: i128,
) -> Result<(), WrapperError> {
    spender.require_auth();
    if amount < 0 {
        return Err(WrapperError::InvalidAmount);
    }
    spend_allowance(env, &from, &spender, amount)?;
    move_shares(env, &from, &to, amount)
}
