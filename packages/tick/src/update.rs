// Tick Update and Crossing Logic

use cfmm_math::{wrapping_sub, CfmmError};
use soroban_sdk::Env;

use crate::registry::{is_sentinel, lookup, unlink, TickStorage};
use crate::types::{Accumulators, FeeGrowth};

/// Apply a position change to a tick.
///
/// `liquidity_delta` is added to `liquidity_net` as given, so callers pass
/// `+L` for a lower bound and `-L` for an upper bound when adding. A
/// non-sentinel tick left with no positions is removed from the list.
pub fn update_tick<S: TickStorage>(
    env: &Env,
    store: &S,
    index: i32,
    liquidity_delta: i128,
    positions_delta: i32,
    witness: &mut i32,
) -> Result<(), CfmmError> {
    let mut tick = lookup(env, store, index)?;

    tick.liquidity_net = tick
        .liquidity_net
        .checked_add(liquidity_delta)
        .ok_or(CfmmError::Overflow)?;
    tick.n_positions = tick
        .n_positions
        .checked_add_signed(positions_delta)
        .ok_or(CfmmError::Overflow)?;

    if tick.n_positions == 0 && !is_sentinel(index) {
        return unlink(env, store, index, &tick, witness);
    }

    store.write_tick(env, index, &tick);
    Ok(())
}

/// Cross a tick boundary during a swap.
///
/// Every outside accumulator becomes `global - outside`; crossing twice
/// with the same accumulators restores the tick. Returns `liquidity_net`.
pub fn cross_tick<S: TickStorage>(
    env: &Env,
    store: &S,
    index: i32,
    globals: &Accumulators,
) -> Result<i128, CfmmError> {
    let mut tick = lookup(env, store, index)?;

    tick.seconds_outside = globals.now.wrapping_sub(tick.seconds_outside);
    tick.tick_cumulative_outside = globals
        .tick_cumulative
        .wrapping_sub(tick.tick_cumulative_outside);
    tick.seconds_per_liquidity_outside = wrapping_sub(
        env,
        &globals.seconds_per_liquidity,
        &tick.seconds_per_liquidity_outside,
    );
    tick.fee_growth_outside = FeeGrowth {
        x: wrapping_sub(env, &globals.fee_growth.x, &tick.fee_growth_outside.x),
        y: wrapping_sub(env, &globals.fee_growth.y, &tick.fee_growth_outside.y),
    };

    store.write_tick(env, index, &tick);

    Ok(tick.liquidity_net)
}
