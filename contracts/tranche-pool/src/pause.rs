use soroban_sdk::{contractevent, contracttype, log, Address, Env};

use crate::errors::PoolError;
use crate::tranche::get_config;

/// Pool operations that can be paused.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PauseType {
    /// Pause every tranche operation
    All = 0,
    /// Pause deposits into any tranche
    Deposit = 1,
    /// Pause withdrawals and redemptions from any tranche
    Withdraw = 2,
}

/// Storage keys for pause states.
#[contracttype]
#[derive(Clone)]
pub enum PauseDataKey {
    State(PauseType),
}

/// Event data emitted on pause state change.
#[contractevent]
#[derive(Clone, Debug)]
pub struct PauseEvent {
    pub pause_type: PauseType,
    pub paused: bool,
    pub admin: Address,
}

/// Set pause state for a specific operation type (admin only)
///
/// # Arguments
/// * `env` - The contract environment
/// * `admin` - The admin address (must authorize)
/// * `pause_type` - The operation type to pause/unpause
/// * `paused` - True to pause, false to unpause
pub fn set_pause(
    env: &Env,
    admin: Address,
    pause_type: PauseType,
    paused: bool,
) -> Result<(), PoolError> {
    admin.require_auth();
    let config = get_config(env)?;
    if admin != config.admin {
        return Err(PoolError::Unauthorized);
    }

    env.storage()
        .persistent()
        .set(&PauseDataKey::State(pause_type), &paused);

    PauseEvent {
        pause_type,
        paused,
        admin,
    }
    .publish(env);
    log!(env, "set_pause {} {}", pause_type as u32, paused);
    Ok(())
}

/// An operation is paused if either its own flag or the global `All` flag is set.
pub fn is_paused(env: &Env, pause_type: PauseType) -> bool {
    if env
        .storage()
        .persistent()
        .get(&PauseDataKey::State(PauseType::All))
        .unwrap_or(false)
    {
        return true;
    }

    if pause_type != PauseType::All {
        return env
            .storage()
            .persistent()
            .get(&PauseDataKey::State(pause_type))
            .unwrap_or(false);
    }

    false
}

pub fn require_not_paused(env: &Env, pause_type: PauseType) -> Result<(), PoolError> {
    if is_paused(env, pause_type) {
        return Err(PoolError::Paused);
    }
    Ok(())
}
