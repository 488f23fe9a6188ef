use soroban_sdk::contracterror;

/// Errors returned by the tranche pool
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    Paused = 5,
    InsufficientAllowance = 6,
    InsufficientBalance = 7,
    InsufficientShares = 8,
    InsufficientLiquidity = 9,
    Overflow = 10,
    ZeroShares = 11,
}
