#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use cfmm_math::{sqrt_price_at_tick, MIN_TICK};
use cfmm_swap::{SwapConfig, SwapState, TokenBalances};
use cfmm_tick::{
    init_sentinels, insert_with_witness, update_tick, Accumulators, FeeGrowth, TickState,
    TickStorage,
};
use soroban_sdk::{Env, U256};

pub const LIQUIDITY: u128 = 1_000_000_000_000;

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

pub fn oracle(env: &Env) -> Accumulators {
    Accumulators {
        now: 1_000,
        tick_cumulative: 0,
        seconds_per_liquidity: U256::from_u32(env, 0),
        fee_growth: FeeGrowth::zero(env),
    }
}

pub fn config(fee_bps: u32, dev_bps: u32, protocol_bps: u32, is_ve: bool) -> SwapConfig {
    SwapConfig {
        fee_bps,
        dev_bps,
        protocol_bps,
        is_ve,
    }
}

/// Empty registry and a pool at tick `cur` with no liquidity
pub fn empty_pool(env: &Env, cur: i32) -> (MemoryTicks, SwapState) {
    let store = MemoryTicks::default();
    init_sentinels(env, &store);

    let state = SwapState {
        liquidity: 0,
        sqrt_price: sqrt_price_at_tick(env, cur),
        cur_tick_index: cur,
        cur_tick_witness: MIN_TICK,
        fee_growth: FeeGrowth::zero(env),
        dev_share: TokenBalances::default(),
        protocol_share: TokenBalances::default(),
    };
    (store, state)
}

/// Place `liquidity` on [lower, upper) the way a mint does
pub fn add_range(env: &Env, store: &MemoryTicks, state: &mut SwapState, lower: i32, upper: i32, liquidity: u128) {
    let globals = oracle(env);
    let lower_witness = witness_below(env, store, lower);
    insert_with_witness(env, store, lower, lower_witness, state.cur_tick_index, &globals).unwrap();
    let upper_witness = witness_below(env, store, upper);
    insert_with_witness(env, store, upper, upper_witness, state.cur_tick_index, &globals).unwrap();

    let mut witness = state.cur_tick_witness;
    update_tick(env, store, lower, liquidity as i128, 1, &mut witness).unwrap();
    update_tick(env, store, upper, -(liquidity as i128), 1, &mut witness).unwrap();

    if lower <= state.cur_tick_index && state.cur_tick_index < upper {
        state.liquidity += liquidity;
    }
    for bound in [lower, upper] {
        if bound <= state.cur_tick_index && bound > state.cur_tick_witness {
            state.cur_tick_witness = bound;
        }
    }
}

/// Greatest initialized tick strictly below `index`
pub fn witness_below(env: &Env, store: &MemoryTicks, index: i32) -> i32 {
    let mut current = MIN_TICK;
    loop {
        let tick = store.read_tick(env, current).unwrap();
        if tick.next >= index {
            return current;
        }
        current = tick.next;
    }
}
