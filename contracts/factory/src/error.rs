// Factory error module

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    /// Tier fee above 10000 bps
    FeeRateTooHigh = 303,

    // Authorization (shares the pool's 4xx range)
    NotAdmin = 401,
    PoolNotFound = 402,
    NotProposedAdmin = 403,

    // Deployment
    IdenticalTokens = 405,
    PoolAlreadyDeployed = 406,
    UnknownFeeTier = 407,

    // Shares
    DevShareTooHigh = 408,
    ProtocolShareTooHigh = 409,

    AlreadyInitialized = 500,
    NotInitialized = 501,
}
