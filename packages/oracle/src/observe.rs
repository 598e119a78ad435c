// Observation Queries

use cfmm_math::CfmmError;
use soroban_sdk::{Env, Vec};

use crate::buffer::{advance, meta, slot, CumulativesStorage};
use crate::types::{BufferMeta, CumulativesValue, TimedCumulatives};

/// Greatest live id whose slot time is <= `at`.
/// Caller guarantees `slot(first).time <= at`.
fn find_slot<S: CumulativesStorage>(
    env: &Env,
    store: &S,
    meta: &BufferMeta,
    at: u64,
) -> Result<(u64, TimedCumulatives), CfmmError> {
    let mut lo = meta.first;
    let mut hi = meta.last;

    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if slot(env, store, mid)?.time <= at {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    Ok((lo, slot(env, store, lo)?))
}

fn observe_one<S: CumulativesStorage>(
    env: &Env,
    store: &S,
    meta: &BufferMeta,
    now: u64,
    cur_tick_index: i32,
    liquidity: u128,
    at: u64,
) -> Result<CumulativesValue, CfmmError> {
    let oldest = slot(env, store, meta.first)?;
    if at < oldest.time {
        return Err(CfmmError::ObserveOutdatedTimestamp);
    }
    if at > now {
        return Err(CfmmError::ObserveFutureTimestamp);
    }

    let (id, found) = find_slot(env, store, meta, at)?;
    if found.time == at {
        return Ok(CumulativesValue {
            tick_cumulative: found.tick.sum,
            spl_cumulative: found.spl.sum,
        });
    }

    // values in effect after `found` are the ones the following slot
    // started with, or the live pool values past the newest slot
    let (tick, liq) = if id == meta.last {
        (cur_tick_index, liquidity)
    } else {
        let next = slot(env, store, id + 1)?;
        (next.tick.block_start_value, next.spl.block_start_liquidity_value)
    };

    let (tick_cumulative, spl_cumulative) =
        advance(env, &found, at - found.time, tick, liq);

    Ok(CumulativesValue {
        tick_cumulative,
        spl_cumulative,
    })
}

/// Cumulative values at each of `timestamps`.
/// Fails if any of them predates the oldest slot or lies in the future.
pub fn observe<S: CumulativesStorage>(
    env: &Env,
    store: &S,
    now: u64,
    cur_tick_index: i32,
    liquidity: u128,
    timestamps: &Vec<u64>,
) -> Result<Vec<CumulativesValue>, CfmmError> {
    let meta = meta(env, store)?;
    let mut out = Vec::new(env);

    for at in timestamps.iter() {
        out.push_back(observe_one(
            env,
            store,
            &meta,
            now,
            cur_tick_index,
            liquidity,
            at,
        )?);
    }

    Ok(out)
}

/// Cumulative values at `now`
pub fn current_cumulatives<S: CumulativesStorage>(
    env: &Env,
    store: &S,
    now: u64,
    cur_tick_index: i32,
    liquidity: u128,
) -> Result<CumulativesValue, CfmmError> {
    let meta = meta(env, store)?;
    observe_one(env, store, &meta, now, cur_tick_index, liquidity, now)
}
