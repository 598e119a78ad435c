// Swap engine
//
// Walks the linked tick list one segment at a time. Within a segment the
// price moves along the constant-liquidity curve; at a boundary the tick is
// crossed, its outside accumulators flipped, and the active liquidity
// adjusted by its `liquidity_net`. The sentinels are never crossed: hitting
// one ends the swap with whatever input is left unconsumed.

use cfmm_math::{
    amount_x_delta, amount_y_delta, bps_ceil, sqrt_price_move_x, sqrt_price_move_y,
    tick_at_sqrt_price, to_amount, u256, CfmmError, MAX_TICK, MIN_TICK,
};
use cfmm_tick::{cross_tick, lookup, Accumulators, TickStorage};
use soroban_sdk::{Env, U256};

use crate::fees::{accrue_fee, gross_up, FeeAsset};
use crate::types::{SwapConfig, SwapOutcome, SwapState};

// ============================================================
// HELPERS
// ============================================================

fn to_input(amount: i128) -> Result<u128, CfmmError> {
    u128::try_from(amount).map_err(|_| CfmmError::Overflow)
}

/// Active liquidity after crossing a tick.
/// Moving up adds `liquidity_net`, moving down subtracts it.
fn apply_net(liquidity: u128, net: i128, upward: bool) -> Result<u128, CfmmError> {
    let current = i128::try_from(liquidity).map_err(|_| CfmmError::Overflow)?;
    let next = if upward {
        current.checked_add(net)
    } else {
        current.checked_sub(net)
    }
    .ok_or(CfmmError::Overflow)?;
    u128::try_from(next).map_err(|_| CfmmError::Overflow)
}

fn cross<S, F>(
    env: &Env,
    store: &S,
    state: &mut SwapState,
    oracle: &Accumulators,
    index: i32,
    upward: bool,
    on_cross: &F,
) -> Result<(), CfmmError>
where
    S: TickStorage,
    F: Fn(&Env, i32, u128),
{
    let globals = Accumulators {
        fee_growth: state.fee_growth.clone(),
        ..oracle.clone()
    };
    let net = cross_tick(env, store, index, &globals)?;
    state.liquidity = apply_net(state.liquidity, net, upward)?;
    on_cross(env, index, state.liquidity);
    Ok(())
}

/// Input consumed for a step that needs `needed` net of fee, capped by what
/// is left. Returns (consumed, fee).
fn step_input(env: &Env, needed: &U256, remaining: u128, fee_bps: u32) -> (u128, u128) {
    let gross = gross_up(env, needed, fee_bps);
    let consumed = if gross > u256(env, remaining) {
        remaining
    } else {
        // bounded by `remaining` above
        gross.to_u128().unwrap_or(remaining)
    };
    let needed = needed.to_u128().unwrap_or(u128::MAX);
    (consumed, consumed.saturating_sub(needed))
}

fn add_amount(total: i128, step: &U256) -> Result<i128, CfmmError> {
    total
        .checked_add(to_amount(step)?)
        .ok_or(CfmmError::Overflow)
}

// ============================================================
// X -> Y
// ============================================================

/// Sell `dx` of token x. The price moves down toward `cur_tick_witness`.
///
/// `oracle` carries the time, tick sum and seconds-per-liquidity sum at the
/// moment of the swap; its fee growth is ignored in favour of the running
/// value in `state`. `on_cross` receives each crossed tick and the liquidity
/// active after it.
pub fn swap_x_to_y<S, F>(
    env: &Env,
    store: &S,
    state: &mut SwapState,
    config: &SwapConfig,
    oracle: &Accumulators,
    dx: i128,
    on_cross: F,
) -> Result<SwapOutcome, CfmmError>
where
    S: TickStorage,
    F: Fn(&Env, i32, u128),
{
    let mut remaining = to_input(dx)?;
    let mut consumed_total: u128 = 0;
    let mut out_total: i128 = 0;

    while remaining > 0 {
        let witness = lookup(env, store, state.cur_tick_witness)?;

        if state.liquidity == 0 {
            // empty segment: nothing to trade against until the next tick down
            if state.cur_tick_witness == MIN_TICK {
                break;
            }
            let index = state.cur_tick_witness;
            cross(env, store, state, oracle, index, false, &on_cross)?;
            state.sqrt_price = witness.sqrt_price.sub(&u256(env, 1));
            state.cur_tick_index = index - 1;
            state.cur_tick_witness = witness.prev;
            continue;
        }

        let fee = bps_ceil(remaining, config.fee_bps);
        let new_price = sqrt_price_move_x(env, state.liquidity, &state.sqrt_price, remaining - fee);

        if new_price >= witness.sqrt_price {
            // the whole remainder fits in this segment
            let out = amount_y_delta(env, state.liquidity, &new_price, &state.sqrt_price, false);
            out_total = add_amount(out_total, &out)?;
            accrue_fee(env, state, config, fee, FeeAsset::X)?;

            state.cur_tick_index = tick_at_sqrt_price(
                env,
                &new_price,
                state.cur_tick_witness,
                state.cur_tick_index,
            );
            state.sqrt_price = new_price;
            consumed_total += remaining;
            break;
        }

        let at_sentinel = state.cur_tick_witness == MIN_TICK;
        let target = if at_sentinel {
            witness.sqrt_price.clone()
        } else {
            witness.sqrt_price.sub(&u256(env, 1))
        };

        let needed = amount_x_delta(env, state.liquidity, &target, &state.sqrt_price, true);
        let (consumed, fee) = step_input(env, &needed, remaining, config.fee_bps);
        if consumed == 0 {
            break;
        }

        let out = amount_y_delta(env, state.liquidity, &target, &state.sqrt_price, false);
        out_total = add_amount(out_total, &out)?;
        accrue_fee(env, state, config, fee, FeeAsset::X)?;

        consumed_total += consumed;
        remaining -= consumed;
        state.sqrt_price = target;

        if at_sentinel {
            state.cur_tick_index = MIN_TICK;
            break;
        }

        let index = state.cur_tick_witness;
        cross(env, store, state, oracle, index, false, &on_cross)?;
        state.cur_tick_index = index - 1;
        state.cur_tick_witness = witness.prev;
    }

    Ok(SwapOutcome {
        amount_in: i128::try_from(consumed_total).map_err(|_| CfmmError::Overflow)?,
        amount_out: out_total,
    })
}

// ============================================================
// Y -> X
// ============================================================

/// Sell `dy` of token y. The price moves up toward the tick after the
/// witness.
pub fn swap_y_to_x<S, F>(
    env: &Env,
    store: &S,
    state: &mut SwapState,
    config: &SwapConfig,
    oracle: &Accumulators,
    dy: i128,
    on_cross: F,
) -> Result<SwapOutcome, CfmmError>
where
    S: TickStorage,
    F: Fn(&Env, i32, u128),
{
    let mut remaining = to_input(dy)?;
    let mut consumed_total: u128 = 0;
    let mut out_total: i128 = 0;

    while remaining > 0 {
        let witness = lookup(env, store, state.cur_tick_witness)?;
        let next_index = witness.next;
        let next = lookup(env, store, next_index)?;

        if state.liquidity == 0 {
            if next_index == MAX_TICK {
                break;
            }
            cross(env, store, state, oracle, next_index, true, &on_cross)?;
            state.sqrt_price = next.sqrt_price.clone();
            state.cur_tick_index = next_index;
            state.cur_tick_witness = next_index;
            continue;
        }

        let fee = bps_ceil(remaining, config.fee_bps);
        let new_price = sqrt_price_move_y(env, state.liquidity, &state.sqrt_price, remaining - fee);

        if new_price < next.sqrt_price {
            let out = amount_x_delta(env, state.liquidity, &state.sqrt_price, &new_price, false);
            out_total = add_amount(out_total, &out)?;
            accrue_fee(env, state, config, fee, FeeAsset::Y)?;

            state.cur_tick_index = tick_at_sqrt_price(
                env,
                &new_price,
                state.cur_tick_index,
                next_index - 1,
            );
            state.sqrt_price = new_price;
            consumed_total += remaining;
            break;
        }

        let at_sentinel = next_index == MAX_TICK;
        let target = if at_sentinel {
            next.sqrt_price.sub(&u256(env, 1))
        } else {
            next.sqrt_price.clone()
        };

        let needed = amount_y_delta(env, state.liquidity, &state.sqrt_price, &target, true);
        let (consumed, fee) = step_input(env, &needed, remaining, config.fee_bps);
        if consumed == 0 {
            break;
        }

        let out = amount_x_delta(env, state.liquidity, &state.sqrt_price, &target, false);
        out_total = add_amount(out_total, &out)?;
        accrue_fee(env, state, config, fee, FeeAsset::Y)?;

        consumed_total += consumed;
        remaining -= consumed;
        state.sqrt_price = target;

        if at_sentinel {
            state.cur_tick_index = MAX_TICK - 1;
            break;
        }

        cross(env, store, state, oracle, next_index, true, &on_cross)?;
        state.cur_tick_index = next_index;
        state.cur_tick_witness = next_index;
    }

    Ok(SwapOutcome {
        amount_in: i128::try_from(consumed_total).map_err(|_| CfmmError::Overflow)?,
        amount_out: out_total,
    })
}
