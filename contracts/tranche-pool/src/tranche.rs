use soroban_sdk::{contracttype, Address, Env};

use crate::errors::PoolError;
use crate::math::{mul_div_floor, PRICE_SCALAR};

/// Risk class of a pool tranche
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Tranche {
    /// Senior tranche ("AA")
    Senior = 1,
    /// Junior tranche ("BB")
    Junior = 2,
}

/// Number of tranches every pool is created with
pub const TRANCHE_COUNT: u32 = 2;

/// Pool-wide configuration written once at initialization
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PoolConfig {
    pub admin: Address,
    pub asset: Address,
    /// Scale senior deposits by the senior tranche's weight in pool capital
    pub senior_capacity_rule: bool,
}

/// Accounting state of a single tranche
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrancheState {
    pub total_assets: i128,
    pub total_shares: i128,
}

/// Public view of a tranche
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct TrancheInfo {
    pub tranche: Tranche,
    pub asset: Address,
    pub total_assets: i128,
    pub total_shares: i128,
    pub price: i128,
}

/// Storage keys for pool data
#[contracttype]
#[derive(Clone)]
pub enum PoolDataKey {
    Config,
    State(Tranche),
    Position(Address, Tranche),
}

impl TrancheState {
    /// Asset units per share, scaled by `PRICE_SCALAR`. An empty tranche prices at 1.0.
    pub fn price(&self) -> Result<i128, PoolError> {
        if self.total_shares == 0 {
            return Ok(PRICE_SCALAR);
        }
        mul_div_floor(self.total_assets, PRICE_SCALAR, self.total_shares).ok_or(PoolError::Overflow)
    }
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&PoolDataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, PoolError> {
    env.storage()
        .instance()
        .get(&PoolDataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&PoolDataKey::Config, config);
}

pub fn get_state(env: &Env, tranche: Tranche) -> TrancheState {
    env.storage()
        .persistent()
        .get(&PoolDataKey::State(tranche))
        .unwrap_or_default()
}

pub fn set_state(env: &Env, tranche: Tranche, state: &TrancheState) {
    env.storage()
        .persistent()
        .set(&PoolDataKey::State(tranche), state);
}

pub fn get_position(env: &Env, user: &Address, tranche: Tranche) -> i128 {
    env.storage()
        .persistent()
        .get(&PoolDataKey::Position(user.clone(), tranche))
        .unwrap_or(0)
}

/// Positions that reach zero stay in storage at zero
pub fn set_position(env: &Env, user: &Address, tranche: Tranche, shares: i128) {
    env.storage()
        .persistent()
        .set(&PoolDataKey::Position(user.clone(), tranche), &shares);
}

pub fn tranche_info(env: &Env, tranche: Tranche) -> Result<TrancheInfo, PoolError> {
    let config = get_config(env)?;
    let state = get_state(env, tranche);
    Ok(TrancheInfo {
        tranche,
        asset: config.asset,
        price: state.price()?,
        total_assets: state.total_assets,
        total_shares: state.total_shares,
    })
}

pub fn price_of(env: &Env, tranche: Tranche) -> Result<i128, PoolError> {
    get_config(env)?;
    get_state(env, tranche).price()
}
