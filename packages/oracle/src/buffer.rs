// Cumulatives Ring Buffer
//
// Slots are appended at most once per ledger timestamp. When the ring is
// full the oldest slot is dropped, so the live window is always
// `reserved_length` slots at most.

use cfmm_math::{to_x128, wrapping_add, CfmmError};
use soroban_sdk::{Env, U256};

use crate::types::{BufferMeta, SplCumulative, TickCumulative, TimedCumulatives};

/// Storage trait for the cumulatives buffer
pub trait CumulativesStorage {
    fn read_meta(&self, env: &Env) -> Option<BufferMeta>;
    fn write_meta(&self, env: &Env, meta: &BufferMeta);
    fn read_slot(&self, env: &Env, id: u64) -> Option<TimedCumulatives>;
    fn write_slot(&self, env: &Env, id: u64, slot: &TimedCumulatives);
    fn remove_slot(&self, env: &Env, id: u64);
}

pub(crate) fn meta<S: CumulativesStorage>(env: &Env, store: &S) -> Result<BufferMeta, CfmmError> {
    store.read_meta(env).ok_or(CfmmError::NotInitialized)
}

pub(crate) fn slot<S: CumulativesStorage>(
    env: &Env,
    store: &S,
    id: u64,
) -> Result<TimedCumulatives, CfmmError> {
    store.read_slot(env, id).ok_or(CfmmError::NotInitialized)
}

/// (elapsed << 128) / liquidity, or zero for an empty pool
pub(crate) fn spl_increment(env: &Env, elapsed: u64, liquidity: u128) -> U256 {
    if liquidity == 0 {
        U256::from_u32(env, 0)
    } else {
        to_x128(env, elapsed as u128).div(&U256::from_u128(env, liquidity))
    }
}

/// Values of `from` carried forward by `elapsed` seconds at a constant tick
/// and liquidity
pub(crate) fn advance(
    env: &Env,
    from: &TimedCumulatives,
    elapsed: u64,
    tick: i32,
    liquidity: u128,
) -> (i128, U256) {
    let tick_sum = from
        .tick
        .sum
        .wrapping_add((elapsed as i128).wrapping_mul(tick as i128));
    let spl_sum = wrapping_add(env, &from.spl.sum, &spl_increment(env, elapsed, liquidity));
    (tick_sum, spl_sum)
}

/// Create slot 0 at time 0 with `extra_slots` reserved placeholders after it
pub fn init_buffer<S: CumulativesStorage>(env: &Env, store: &S, extra_slots: u64) {
    let genesis = TimedCumulatives::genesis(env);
    store.write_slot(env, 0, &genesis);
    for id in 1..=extra_slots {
        store.write_slot(env, id, &genesis);
    }

    store.write_meta(
        env,
        &BufferMeta {
            first: 0,
            last: 0,
            reserved_length: 1 + extra_slots,
        },
    );
}

/// Record the cumulatives up to `now`. A no-op when a slot was already
/// written at this timestamp.
pub fn update_timed_cumulatives<S: CumulativesStorage>(
    env: &Env,
    store: &S,
    now: u64,
    cur_tick_index: i32,
    liquidity: u128,
) -> Result<(), CfmmError> {
    let mut meta = meta(env, store)?;
    let last = slot(env, store, meta.last)?;

    if last.time == now {
        return Ok(());
    }

    let elapsed = now.saturating_sub(last.time);
    let (tick_sum, spl_sum) = advance(env, &last, elapsed, cur_tick_index, liquidity);

    let appended = TimedCumulatives {
        time: now,
        tick: TickCumulative {
            sum: tick_sum,
            block_start_value: cur_tick_index,
        },
        spl: SplCumulative {
            sum: spl_sum,
            block_start_liquidity_value: liquidity,
        },
    };

    if meta.live_slots() >= meta.reserved_length {
        store.remove_slot(env, meta.first);
        meta.first += 1;
    }

    meta.last += 1;
    store.write_slot(env, meta.last, &appended);
    store.write_meta(env, &meta);

    Ok(())
}

/// Reserve `added` more slots. The ids after `last` are pre-written with a
/// copy of the newest slot, so the storage for the larger ring is paid here.
/// Appends then replace these placeholders one by one until the ring is
/// full again.
///
/// Returns the new reserved length.
pub fn increase_observation_count<S: CumulativesStorage>(
    env: &Env,
    store: &S,
    added: u64,
) -> Result<u64, CfmmError> {
    let mut meta = meta(env, store)?;
    if added == 0 {
        return Ok(meta.reserved_length);
    }

    let last = slot(env, store, meta.last)?;
    for k in 1..=added {
        store.write_slot(env, meta.last + k, &last);
    }

    meta.reserved_length += added;
    store.write_meta(env, &meta);

    Ok(meta.reserved_length)
}
