// Error codes of the pool engine.
//
// Every package returns these through `Result` and the pool contract hands
// them back to callers unchanged, so a client sees `Error(Contract, #code)`.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CfmmError {
    // Tick and position validation (100-199)
    /// Witness is not the predecessor of the tick being inserted
    InvalidWitness = 100,
    /// Deadline is earlier than the current ledger time
    PastDeadline = 103,
    /// Swap output is below the caller's minimum
    SmallerThanMinAsset = 104,
    /// Referenced tick is not initialized
    TickNotExist = 105,
    /// Required deposit exceeds the caller's maximum
    HighTokens = 106,
    /// Observation requested before the oldest stored slot
    ObserveOutdatedTimestamp = 108,
    /// Observation requested in the future
    ObserveFutureTimestamp = 109,
    /// Lower tick is not below the upper tick
    TickOrder = 110,
    /// Removing more liquidity than the position holds
    PositionLiquidityBelowZero = 111,
    /// Tick index is not a multiple of the tick spacing
    IncorrectTickSpacing = 112,
    /// Tick index is outside [-MAX_TICK, MAX_TICK]
    TickOutOfRange = 113,

    // Configuration (300-399)
    /// Swap fee above 100%
    FeeRateTooHigh = 303,

    // Authorization and admin (400-499)
    /// Caller does not hold the required role
    NotAuthorized = 401,
    /// Entry point is paused
    Paused = 402,
    /// Dev and protocol shares together exceed the whole fee
    SharesExceedFee = 404,

    // Lifecycle (500-599)
    AlreadyInitialized = 500,
    NotInitialized = 501,

    // Position token ledger (600-699)
    Fa2TokenUndefined = 600,
    Fa2NotOperator = 601,
    Fa2InsufficientBalance = 602,
    Fa2NotOwner = 603,

    // Math (700-799)
    /// Value does not fit the token amount type
    Overflow = 701,
}
