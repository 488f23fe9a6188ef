use soroban_sdk::{contracttype, Address, Env};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::errors::WrapperError;
use crate::pool::Tranche;

/// Wrapper configuration written once at initialization
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct WrapperConfig {
    pub admin: Address,
    pub pool: Address,
    pub tranche: Tranche,
    pub asset: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// Storage keys for wrapper data
#[contracttype]
#[derive(Clone)]
pub enum WrapperDataKey {
    Config,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceDataKey),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&WrapperDataKey::Config)
}

pub fn get_config(env: &Env) -> Result<WrapperConfig, WrapperError> {
    env.storage()
        .instance()
        .get(&WrapperDataKey::Config)
        .ok_or(WrapperError::NotInitialized)
}

pub fn set_config(env: &Env, config: &WrapperConfig) {
    env.storage().instance().set(&WrapperDataKey::Config, config);
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, WrapperError> {
    env.storage()
        .instance()
        .get(&WrapperDataKey::Metadata)
        .ok_or(WrapperError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage()
        .instance()
        .set(&WrapperDataKey::Metadata, metadata);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&WrapperDataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&WrapperDataKey::TotalSupply, &amount);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&WrapperDataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&WrapperDataKey::Balance(id.clone()), &amount);
}

/// Expired allowances read as zero
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = WrapperDataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), WrapperError> {
    let sequence = env.ledger().sequence();
    if amount > 0
        && (expiration_ledger < sequence
            || expiration_ledger - sequence > env.storage().max_ttl())
    {
        return Err(WrapperError::InvalidExpiration);
    }

    let key = WrapperDataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}
