// Inside-Range Accumulators
//
// For a range [lower, upper) and any accumulator g with outside values:
//   below  = cur >= lower ? outside(lower) : g - outside(lower)
//   above  = cur <  upper ? outside(upper) : g - outside(upper)
//   inside = g - below - above

use cfmm_math::{wrapping_sub, CfmmError};
use soroban_sdk::{Env, U256};

use crate::registry::{lookup, TickStorage};
use crate::types::{Accumulators, CumulativesInside, FeeGrowth, TickState};

fn inside_u256(
    env: &Env,
    global: &U256,
    lower_outside: &U256,
    upper_outside: &U256,
    below_is_outside: bool,
    above_is_outside: bool,
) -> U256 {
    let below = if below_is_outside {
        lower_outside.clone()
    } else {
        wrapping_sub(env, global, lower_outside)
    };
    let above = if above_is_outside {
        upper_outside.clone()
    } else {
        wrapping_sub(env, global, upper_outside)
    };
    wrapping_sub(env, &wrapping_sub(env, global, &below), &above)
}

fn inside_i128(
    global: i128,
    lower_outside: i128,
    upper_outside: i128,
    below_is_outside: bool,
    above_is_outside: bool,
) -> i128 {
    let below = if below_is_outside {
        lower_outside
    } else {
        global.wrapping_sub(lower_outside)
    };
    let above = if above_is_outside {
        upper_outside
    } else {
        global.wrapping_sub(upper_outside)
    };
    global.wrapping_sub(below).wrapping_sub(above)
}

fn bounds<S: TickStorage>(
    env: &Env,
    store: &S,
    lower_tick: i32,
    upper_tick: i32,
) -> Result<(TickState, TickState), CfmmError> {
    Ok((
        lookup(env, store, lower_tick)?,
        lookup(env, store, upper_tick)?,
    ))
}

/// Fee growth accumulated while the price was inside `[lower_tick, upper_tick)`
pub fn fee_growth_inside<S: TickStorage>(
    env: &Env,
    store: &S,
    lower_tick: i32,
    upper_tick: i32,
    cur_tick_index: i32,
    fee_growth_global: &FeeGrowth,
) -> Result<FeeGrowth, CfmmError> {
    let (lower, upper) = bounds(env, store, lower_tick, upper_tick)?;
    let below_is_outside = cur_tick_index >= lower_tick;
    let above_is_outside = cur_tick_index < upper_tick;

    Ok(FeeGrowth {
        x: inside_u256(
            env,
            &fee_growth_global.x,
            &lower.fee_growth_outside.x,
            &upper.fee_growth_outside.x,
            below_is_outside,
            above_is_outside,
        ),
        y: inside_u256(
            env,
            &fee_growth_global.y,
            &lower.fee_growth_outside.y,
            &upper.fee_growth_outside.y,
            below_is_outside,
            above_is_outside,
        ),
    })
}

/// Tick sum, seconds per liquidity and seconds accumulated inside a range
pub fn cumulatives_inside<S: TickStorage>(
    env: &Env,
    store: &S,
    lower_tick: i32,
    upper_tick: i32,
    cur_tick_index: i32,
    globals: &Accumulators,
) -> Result<CumulativesInside, CfmmError> {
    let (lower, upper) = bounds(env, store, lower_tick, upper_tick)?;
    let below_is_outside = cur_tick_index >= lower_tick;
    let above_is_outside = cur_tick_index < upper_tick;

    Ok(CumulativesInside {
        tick_cumulative_inside: inside_i128(
            globals.tick_cumulative,
            lower.tick_cumulative_outside,
            upper.tick_cumulative_outside,
            below_is_outside,
            above_is_outside,
        ),
        seconds_per_liquidity_inside: inside_u256(
            env,
            &globals.seconds_per_liquidity,
            &lower.seconds_per_liquidity_outside,
            &upper.seconds_per_liquidity_outside,
            below_is_outside,
            above_is_outside,
        ),
        seconds_inside: inside_i128(
            globals.now as i128,
            lower.seconds_outside as i128,
            upper.seconds_outside as i128,
            below_is_outside,
            above_is_outside,
        ),
    })
}
