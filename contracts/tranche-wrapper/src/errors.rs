use soroban_sdk::contracterror;

/// Errors returned by the tranche wrapper
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WrapperError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientAllowance = 4,
    InsufficientBalance = 5,
    /// The pool declined the call (paused, illiquid, capacity, ...)
    PoolRejected = 6,
    ArithmeticOverflow = 7,
    /// Held tranche shares or received assets disagree with what the pool reported
    SupplyMismatch = 8,
    InvalidExpiration = 9,
}
