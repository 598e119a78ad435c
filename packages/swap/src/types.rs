use cfmm_tick::FeeGrowth;
use soroban_sdk::{contracttype, U256};

/// Pair of token amounts
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenBalances {
    pub x: i128,
    pub y: i128,
}

/// Mutable pool values a swap reads and writes
#[derive(Clone, Debug)]
pub struct SwapState {
    pub liquidity: u128,
    pub sqrt_price: U256,
    pub cur_tick_index: i32,
    pub cur_tick_witness: i32,
    pub fee_growth: FeeGrowth,
    pub dev_share: TokenBalances,
    pub protocol_share: TokenBalances,
}

/// Fee parameters for one swap
#[derive(Clone, Copy, Debug)]
pub struct SwapConfig {
    pub fee_bps: u32,
    pub dev_bps: u32,
    pub protocol_bps: u32,
    /// Protocol share is only taken while the pool is in vote-escrow mode
    pub is_ve: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwapOutcome {
    /// Input actually consumed, fees included
    pub amount_in: i128,
    pub amount_out: i128,
}

/// Result returned to swap callers
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    pub sqrt_price: U256,
    pub cur_tick_index: i32,
}
