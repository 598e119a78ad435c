use cfmm_tick::FeeGrowth;
use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionState {
    pub lower_tick_index: i32,
    pub upper_tick_index: i32,
    pub liquidity: u128,
    /// Fee growth inside the range when the position was last settled
    pub fee_growth_inside_last: FeeGrowth,
}

/// Fees earned since the last settlement
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeesOwed {
    pub x: i128,
    pub y: i128,
}
