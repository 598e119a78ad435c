#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use cfmm_oracle::{BufferMeta, CumulativesStorage, SplCumulative, TickCumulative, TimedCumulatives};
use soroban_sdk::{Env, U256};

/// In-memory cumulatives buffer
#[derive(Default)]
pub struct MemoryBuffer {
    meta: RefCell<Option<BufferMeta>>,
    slots: RefCell<BTreeMap<u64, TimedCumulatives>>,
}

impl CumulativesStorage for MemoryBuffer {
    fn read_meta(&self, _env: &Env) -> Option<BufferMeta> {
        self.meta.borrow().clone()
    }

    fn write_meta(&self, _env: &Env, meta: &BufferMeta) {
        *self.meta.borrow_mut() = Some(meta.clone());
    }

    fn read_slot(&self, _env: &Env, id: u64) -> Option<TimedCumulatives> {
        self.slots.borrow().get(&id).cloned()
    }

    fn write_slot(&self, _env: &Env, id: u64, slot: &TimedCumulatives) {
        self.slots.borrow_mut().insert(id, slot.clone());
    }

    fn remove_slot(&self, _env: &Env, id: u64) {
        self.slots.borrow_mut().remove(&id);
    }
}

impl MemoryBuffer {
    pub fn meta(&self) -> BufferMeta {
        self.meta.borrow().clone().expect("buffer initialized")
    }

    pub fn has_slot(&self, id: u64) -> bool {
        self.slots.borrow().contains_key(&id)
    }
}

/// Slot whose sums and block-start values are given directly
pub fn slot(env: &Env, time: u64, sum: i128, block_start: i32) -> TimedCumulatives {
    TimedCumulatives {
        time,
        tick: TickCumulative {
            sum,
            block_start_value: block_start,
        },
        spl: SplCumulative {
            sum: U256::from_u128(env, sum as u128),
            block_start_liquidity_value: block_start as u128,
        },
    }
}

/// Buffer holding `slots` as ids 0.. with no spare reserve
pub fn buffer_with(env: &Env, slots: &[TimedCumulatives]) -> MemoryBuffer {
    let store = MemoryBuffer::default();
    for (id, s) in slots.iter().enumerate() {
        store.write_slot(env, id as u64, s);
    }
    store.write_meta(
        env,
        &BufferMeta {
            first: 0,
            last: slots.len() as u64 - 1,
            reserved_length: slots.len() as u64,
        },
    );
    store
}

/// (seconds << 128) / liquidity
pub fn spl(env: &Env, seconds: u128, liquidity: u128) -> U256 {
    U256::from_u128(env, seconds).shl(128).div(&U256::from_u128(env, liquidity))
}
