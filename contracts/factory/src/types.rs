//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Registry configuration read by every pool it deploys
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    pub admin: Address,
    pub pool_wasm_hash: BytesN<32>,
    /// Receives the dev share pools accumulate
    pub dev_address: Address,
    /// Only account allowed to forward protocol fees out of pools
    pub voter: Address,
    /// Part of every swap fee kept for the dev, in bps of the fee
    pub dev_share_bps: u32,
    /// Part of every swap fee set aside for the distributor, in bps of the fee
    pub protocol_share_bps: u32,
}

// ============================================================
// POOL INTERFACE
// ============================================================
//
// Mirrors of the pool's argument types. Variant and field names must
// stay in sync with the pool contract so the encodings match.

/// One leg of a pool's pair
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenRef {
    Asset(Address),
    MultiAsset(Address, u128),
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PauseFlags {
    pub swap: bool,
    pub add_liquidity: bool,
    pub remove_liquidity: bool,
}
