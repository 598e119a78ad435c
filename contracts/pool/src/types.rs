// Pool Types - engine types come from packages

use soroban_sdk::{contracttype, Address, Vec, U256};

pub use cfmm_oracle::{BufferMeta, CumulativesValue, TimedCumulatives};
pub use cfmm_position::PositionState;
pub use cfmm_swap::{SwapResult, TokenBalances};
pub use cfmm_tick::{CumulativesInside, FeeGrowth, TickState};

use cfmm_swap::SwapState;

// ============================================================
// POOL CONFIGURATION
// ============================================================

/// One leg of the pair
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenRef {
    /// Fungible token moved through the standard token interface
    Asset(Address),
    /// Multi-asset ledger and the token id inside it
    MultiAsset(Address, u128),
}

/// Immutable after `initialize`
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConstants {
    /// Registry that deployed this pool; resolves dev/protocol shares and roles
    pub factory: Address,
    pub token_x: TokenRef,
    pub token_y: TokenRef,
    /// Swap fee in basis points
    pub fee_bps: u32,
    pub tick_spacing: u32,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PauseFlags {
    pub swap: bool,
    pub add_liquidity: bool,
    pub remove_liquidity: bool,
}

// ============================================================
// POOL STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Liquidity active at the current price
    pub liquidity: u128,
    /// Current sqrt price, X80
    pub sqrt_price: U256,
    pub cur_tick_index: i32,
    /// Greatest initialized tick at or below `cur_tick_index`
    pub cur_tick_witness: i32,
    /// Global fee growth per unit of liquidity, X128
    pub fee_growth: FeeGrowth,
    /// Fees owed to the dev address
    pub dev_share: TokenBalances,
    /// Fees waiting to be forwarded to the fee distributor
    pub protocol_share: TokenBalances,
    /// Id the next minted position receives
    pub new_position_id: u64,
    /// Vote-escrow mode: protocol share is only charged while set
    pub is_ve: bool,
}

impl PoolState {
    pub fn swap_state(&self) -> SwapState {
        SwapState {
            liquidity: self.liquidity,
            sqrt_price: self.sqrt_price.clone(),
            cur_tick_index: self.cur_tick_index,
            cur_tick_witness: self.cur_tick_witness,
            fee_growth: self.fee_growth.clone(),
            dev_share: self.dev_share.clone(),
            protocol_share: self.protocol_share.clone(),
        }
    }

    pub fn absorb(&mut self, swap: SwapState) {
        self.liquidity = swap.liquidity;
        self.sqrt_price = swap.sqrt_price;
        self.cur_tick_index = swap.cur_tick_index;
        self.cur_tick_witness = swap.cur_tick_witness;
        self.fee_growth = swap.fee_growth;
        self.dev_share = swap.dev_share;
        self.protocol_share = swap.protocol_share;
    }
}

// ============================================================
// POSITION PARAMS
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct MintPositionParams {
    pub lower_tick_index: i32,
    pub upper_tick_index: i32,
    /// Nearest initialized tick below `lower_tick_index`, unless the bound exists
    pub lower_tick_witness: i32,
    /// Nearest initialized tick below `upper_tick_index`, unless the bound exists
    pub upper_tick_witness: i32,
    pub liquidity: u128,
    pub deadline: u64,
    pub maximum_tokens_contributed: TokenBalances,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ModifyPositionParams {
    pub position_id: u64,
    pub liquidity_delta: i128,
    /// Receives the x side when the position pays out
    pub to_x: Address,
    pub to_y: Address,
    pub deadline: u64,
    pub maximum_tokens_contributed: TokenBalances,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub owner: Address,
    pub lower_tick_index: i32,
    pub upper_tick_index: i32,
    pub liquidity: u128,
}

// ============================================================
// POSITION TOKEN LEDGER
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferDestination {
    pub to: Address,
    pub token_id: u64,
    pub amount: u128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransferBatch {
    pub from: Address,
    pub txs: Vec<TransferDestination>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceRequest {
    pub owner: Address,
    pub token_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceResponse {
    pub request: BalanceRequest,
    pub balance: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorParam {
    pub owner: Address,
    pub operator: Address,
    pub token_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OperatorUpdate {
    Add(OperatorParam),
    Remove(OperatorParam),
}
