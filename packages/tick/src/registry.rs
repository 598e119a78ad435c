// Linked Tick Registry
//
// Initialized ticks live in a sparse map keyed by index and are chained
// through `prev`/`next`. Insertions are located by a caller-supplied
// witness (the nearest initialized tick below) which is verified rather
// than searched for.

use cfmm_math::{sqrt_price_at_tick, CfmmError, MAX_TICK, MIN_TICK};
use soroban_sdk::{Env, U256};

use crate::types::{Accumulators, FeeGrowth, TickState};

/// Storage trait for tick operations
/// This allows the registry to work with any storage implementation
pub trait TickStorage {
    fn read_tick(&self, env: &Env, index: i32) -> Option<TickState>;
    fn write_tick(&self, env: &Env, index: i32, tick: &TickState);
    fn remove_tick(&self, env: &Env, index: i32);
}

#[inline]
pub fn is_sentinel(index: i32) -> bool {
    index == MIN_TICK || index == MAX_TICK
}

/// Check if a tick is within valid range
#[inline]
pub fn is_valid_tick(index: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&index)
}

/// Write the two boundary ticks of an empty registry
pub fn init_sentinels<S: TickStorage>(env: &Env, store: &S) {
    let zero = U256::from_u32(env, 0);

    let lower = TickState {
        prev: MIN_TICK - 1,
        next: MAX_TICK,
        liquidity_net: 0,
        n_positions: 1,
        seconds_outside: 0,
        tick_cumulative_outside: 0,
        fee_growth_outside: FeeGrowth::zero(env),
        seconds_per_liquidity_outside: zero.clone(),
        sqrt_price: sqrt_price_at_tick(env, MIN_TICK),
    };

    let upper = TickState {
        prev: MIN_TICK,
        next: MAX_TICK + 1,
        sqrt_price: sqrt_price_at_tick(env, MAX_TICK),
        ..lower.clone()
    };

    store.write_tick(env, MIN_TICK, &lower);
    store.write_tick(env, MAX_TICK, &upper);
}

/// Read an initialized tick
pub fn lookup<S: TickStorage>(env: &Env, store: &S, index: i32) -> Result<TickState, CfmmError> {
    store.read_tick(env, index).ok_or(CfmmError::TickNotExist)
}

/// Initialize `index` just after `witness`, or return it if it already exists.
///
/// Outside accumulators start at the global values when the tick is at or
/// below the current tick, and at zero otherwise.
pub fn insert_with_witness<S: TickStorage>(
    env: &Env,
    store: &S,
    index: i32,
    witness: i32,
    cur_tick_index: i32,
    globals: &Accumulators,
) -> Result<TickState, CfmmError> {
    if let Some(existing) = store.read_tick(env, index) {
        return Ok(existing);
    }

    let mut before = store.read_tick(env, witness).ok_or(CfmmError::InvalidWitness)?;
    if witness >= index || before.next <= index {
        return Err(CfmmError::InvalidWitness);
    }

    let next_index = before.next;
    let mut after = lookup(env, store, next_index)?;

    let tick = if index <= cur_tick_index {
        TickState {
            prev: witness,
            next: next_index,
            liquidity_net: 0,
            n_positions: 0,
            seconds_outside: globals.now,
            tick_cumulative_outside: globals.tick_cumulative,
            fee_growth_outside: globals.fee_growth.clone(),
            seconds_per_liquidity_outside: globals.seconds_per_liquidity.clone(),
            sqrt_price: sqrt_price_at_tick(env, index),
        }
    } else {
        TickState {
            prev: witness,
            next: next_index,
            liquidity_net: 0,
            n_positions: 0,
            seconds_outside: 0,
            tick_cumulative_outside: 0,
            fee_growth_outside: FeeGrowth::zero(env),
            seconds_per_liquidity_outside: U256::from_u32(env, 0),
            sqrt_price: sqrt_price_at_tick(env, index),
        }
    };

    before.next = index;
    after.prev = index;

    store.write_tick(env, witness, &before);
    store.write_tick(env, next_index, &after);
    store.write_tick(env, index, &tick);

    Ok(tick)
}

/// Detach a tick from the list and delete it.
/// Moves `witness` down to the predecessor if it pointed at the tick.
pub(crate) fn unlink<S: TickStorage>(
    env: &Env,
    store: &S,
    index: i32,
    tick: &TickState,
    witness: &mut i32,
) -> Result<(), CfmmError> {
    let mut before = lookup(env, store, tick.prev)?;
    let mut after = lookup(env, store, tick.next)?;

    before.next = tick.next;
    after.prev = tick.prev;

    store.write_tick(env, tick.prev, &before);
    store.write_tick(env, tick.next, &after);
    store.remove_tick(env, index);

    if *witness == index {
        *witness = tick.prev;
    }

    Ok(())
}
