#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use cfmm_tick::{Accumulators, FeeGrowth, TickState, TickStorage};
use soroban_sdk::{Env, U256};

/// In-memory tick map
#[derive(Default)]
pub struct MemoryTicks {
    ticks: RefCell<BTreeMap<i32, TickState>>,
}

impl TickStorage for MemoryTicks {
    fn read_tick(&self, _env: &Env, index: i32) -> Option<TickState> {
        self.ticks.borrow().get(&index).cloned()
    }

    fn write_tick(&self, _env: &Env, index: i32, tick: &TickState) {
        self.ticks.borrow_mut().insert(index, tick.clone());
    }

    fn remove_tick(&self, _env: &Env, index: i32) {
        self.ticks.borrow_mut().remove(&index);
    }
}

impl MemoryTicks {
    /// Indices in list order, walking `next` from the lower sentinel
    pub fn walk(&self, env: &Env) -> Vec<i32> {
        let mut out = Vec::new();
        let mut index = cfmm_math::MIN_TICK;
        while let Some(tick) = self.read_tick(env, index) {
            out.push(index);
            index = tick.next;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.ticks.borrow().len()
    }
}

pub fn accumulators(env: &Env, now: u64, tick_sum: i128, spl: u128, fx: u128, fy: u128) -> Accumulators {
    Accumulators {
        now,
        tick_cumulative: tick_sum,
        seconds_per_liquidity: U256::from_u128(env, spl),
        fee_growth: FeeGrowth {
            x: U256::from_u128(env, fx),
            y: U256::from_u128(env, fy),
        },
    }
}

pub fn zero_accumulators(env: &Env) -> Accumulators {
    accumulators(env, 0, 0, 0, 0, 0)
}
