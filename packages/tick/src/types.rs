// Tick Types

use soroban_sdk::{contracttype, Env, U256};

/// Per-asset fee growth, X128
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeGrowth {
    pub x: U256,
    pub y: U256,
}

impl FeeGrowth {
    pub fn zero(env: &Env) -> Self {
        Self {
            x: U256::from_u32(env, 0),
            y: U256::from_u32(env, 0),
        }
    }
}

/// Information stored for each initialized tick.
///
/// Initialized ticks form a doubly linked list ordered by index, bounded by
/// the two sentinels at -MAX_TICK and MAX_TICK.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickState {
    /// Previous initialized tick (-MAX_TICK - 1 for the lower sentinel)
    pub prev: i32,
    /// Next initialized tick (MAX_TICK + 1 for the upper sentinel)
    pub next: i32,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Number of positions with a bound on this tick
    pub n_positions: u32,
    /// Seconds spent on the other side of this tick from the current price
    pub seconds_outside: u64,
    pub tick_cumulative_outside: i128,
    /// Fee growth on the other side of this tick, X128
    pub fee_growth_outside: FeeGrowth,
    /// Seconds per liquidity on the other side of this tick, X128
    pub seconds_per_liquidity_outside: U256,
    /// sqrt_price_at_tick(index), cached
    pub sqrt_price: U256,
}

/// Pool-wide accumulators at one instant.
///
/// Used to seed the outside values of a freshly inserted tick and to flip
/// them when the price crosses it.
#[derive(Clone, Debug)]
pub struct Accumulators {
    pub now: u64,
    pub tick_cumulative: i128,
    pub seconds_per_liquidity: U256,
    pub fee_growth: FeeGrowth,
}

/// Oracle values accumulated while the price was inside a range
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CumulativesInside {
    pub tick_cumulative_inside: i128,
    /// X128, modulo 2^256
    pub seconds_per_liquidity_inside: U256,
    pub seconds_inside: i128,
}
