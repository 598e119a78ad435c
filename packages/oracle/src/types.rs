// Oracle Types

use soroban_sdk::{contracttype, Env, U256};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickCumulative {
    /// Sum of the current tick index over every second so far
    pub sum: i128,
    /// Tick index in effect from this slot's time onward
    pub block_start_value: i32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplCumulative {
    /// Sum of 2^128 / liquidity over every second so far
    pub sum: U256,
    /// Active liquidity in effect from this slot's time onward
    pub block_start_liquidity_value: u128,
}

/// One slot of the cumulatives ring
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimedCumulatives {
    pub time: u64,
    pub tick: TickCumulative,
    pub spl: SplCumulative,
}

impl TimedCumulatives {
    pub fn genesis(env: &Env) -> Self {
        Self {
            time: 0,
            tick: TickCumulative {
                sum: 0,
                block_start_value: 0,
            },
            spl: SplCumulative {
                sum: U256::from_u32(env, 0),
                block_start_liquidity_value: 0,
            },
        }
    }
}

/// Live ids are `first..=last`; up to `reserved_length` of them are kept
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BufferMeta {
    pub first: u64,
    pub last: u64,
    pub reserved_length: u64,
}

impl BufferMeta {
    #[inline]
    pub fn live_slots(&self) -> u64 {
        self.last - self.first + 1
    }
}

/// Cumulative values at a point in time
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CumulativesValue {
    pub tick_cumulative: i128,
    pub spl_cumulative: U256,
}
