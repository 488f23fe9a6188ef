//! Client side of the tranche pool the wrapper sits in front of.
//!
//! Any contract exposing these entry points can back a wrapper; the wrapper
//! reads prices and share issuance from it and never recomputes them.

use soroban_sdk::{contractclient, contracttype, log, Address, Env, Error, InvokeError, Symbol};

use crate::errors::WrapperError;

/// Risk class of a pool tranche, wire-compatible with the pool's own type
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Tranche {
    Senior = 1,
    Junior = 2,
}

#[contractclient(name = "TranchePoolClient")]
pub trait TranchePoolInterface {
    fn asset(env: Env) -> Address;

    /// Asset units per share, scaled by `PRICE_SCALAR`
    fn price_of(env: Env, tranche: Tranche) -> i128;

    fn balance_of(env: Env, user: Address, tranche: Tranche) -> i128;

    /// Returns the tranche shares issued to `user`
    fn deposit_to_tranche(env: Env, user: Address, tranche: Tranche, amount: i128) -> i128;

    /// Returns the asset amount paid to `user`
    fn withdraw_from_tranche(env: Env, user: Address, tranche: Tranche, amount: i128) -> i128;

    /// Returns the asset amount paid to `user`
    fn redeem_from_tranche(env: Env, user: Address, tranche: Tranche, shares: i128) -> i128;
}

/// Unwrap a `try_` pool call, logging the pool's error before mapping it to `PoolRejected`
pub fn settle<T, C>(
    env: &Env,
    call: &str,
    result: Result<Result<T, C>, Result<Error, InvokeError>>,
) -> Result<T, WrapperError> {
    let call = Symbol::new(env, call);
    match result {
        Ok(Ok(value)) => return Ok(value),
        Ok(Err(_)) => log!(env, "pool rejected {}: unreadable return value", call),
        Err(Ok(err)) => log!(env, "pool rejected {}: error code={}", call, err.get_code()),
        Err(Err(InvokeError::Contract(code))) => {
            log!(env, "pool rejected {}: contract code={}", call, code)
        }
        Err(Err(_)) => log!(env, "pool rejected {}: aborted", call),
    }
    Err(WrapperError::PoolRejected)
}

/// Live tranche price; re-read on every operation
pub fn current_price(env: &Env, pool: &Address, tranche: Tranche) -> Result<i128, WrapperError> {
    let client = TranchePoolClient::new(env, pool);
    let price = settle(env, "price_of", client.try_price_of(&tranche))?;
    if price <= 0 {
        return Err(WrapperError::PoolRejected);
    }
    Ok(price)
}

/// Tranche shares held by this wrapper in the pool
pub fn held_shares(env: &Env, pool: &Address, tranche: Tranche) -> Result<i128, WrapperError> {
    let client = TranchePoolClient::new(env, pool);
    settle(
        env,
        "balance_of",
        client.try_balance_of(&env.current_contract_address(), &tranche),
    )
}
