// Pool storage module

use cfmm_math::CfmmError;
use cfmm_oracle::CumulativesStorage;
use cfmm_tick::TickStorage;
use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::types::{
    BufferMeta, PauseFlags, PoolConstants, PoolState, PositionState, TickState, TimedCumulatives,
};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Initialization flag
    Initialized,
    /// Immutable pool configuration
    Constants,
    /// Mutable pool state
    State,
    /// Pause flags set by the factory
    Paused,
    /// Initialized tick by index
    Tick(i32),
    /// Position by id
    Position(u64),
    /// Owner of a position id
    Owner(u64),
    /// (owner, operator) pairs approved for a position id
    Operators(u64),
    /// Cumulatives buffer bounds
    BufferMeta,
    /// Cumulatives buffer slot by id
    BufferSlot(u64),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        extend_ttl(env, key);
    }
    value
}

fn remove(env: &Env, key: &DataKey) {
    env.storage().persistent().remove(key);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    write(env, &DataKey::Initialized, &true);
}

// ============================================================
// CONSTANTS / STATE / PAUSE
// ============================================================

pub fn write_constants(env: &Env, constants: &PoolConstants) {
    write(env, &DataKey::Constants, constants);
}

pub fn read_constants(env: &Env) -> Result<PoolConstants, CfmmError> {
    read(env, &DataKey::Constants).ok_or(CfmmError::NotInitialized)
}

pub fn write_state(env: &Env, state: &PoolState) {
    write(env, &DataKey::State, state);
}

pub fn read_state(env: &Env) -> Result<PoolState, CfmmError> {
    read(env, &DataKey::State).ok_or(CfmmError::NotInitialized)
}

pub fn write_paused(env: &Env, flags: &PauseFlags) {
    write(env, &DataKey::Paused, flags);
}

pub fn read_paused(env: &Env) -> PauseFlags {
    read(env, &DataKey::Paused).unwrap_or_default()
}

// ============================================================
// POSITIONS AND OWNERSHIP
// ============================================================

pub fn write_position(env: &Env, id: u64, position: &PositionState) {
    write(env, &DataKey::Position(id), position);
}

pub fn read_position(env: &Env, id: u64) -> Option<PositionState> {
    read(env, &DataKey::Position(id))
}

pub fn write_owner(env: &Env, id: u64, owner: &Address) {
    write(env, &DataKey::Owner(id), owner);
}

pub fn read_owner(env: &Env, id: u64) -> Option<Address> {
    read(env, &DataKey::Owner(id))
}

pub fn read_operators(env: &Env, id: u64) -> Vec<(Address, Address)> {
    read(env, &DataKey::Operators(id)).unwrap_or_else(|| Vec::new(env))
}

pub fn write_operators(env: &Env, id: u64, operators: &Vec<(Address, Address)>) {
    if operators.is_empty() {
        remove(env, &DataKey::Operators(id));
    } else {
        write(env, &DataKey::Operators(id), operators);
    }
}

/// Drop the position together with its ledger entry and operator approvals
pub fn remove_position(env: &Env, id: u64) {
    remove(env, &DataKey::Position(id));
    remove(env, &DataKey::Owner(id));
    remove(env, &DataKey::Operators(id));
}

// ============================================================
// ENGINE STORAGE ADAPTERS
// ============================================================

/// Ticks in persistent storage
pub struct TickStore;

impl TickStorage for TickStore {
    fn read_tick(&self, env: &Env, index: i32) -> Option<TickState> {
        read(env, &DataKey::Tick(index))
    }

    fn write_tick(&self, env: &Env, index: i32, tick: &TickState) {
        write(env, &DataKey::Tick(index), tick);
    }

    fn remove_tick(&self, env: &Env, index: i32) {
        remove(env, &DataKey::Tick(index));
    }
}

/// Cumulatives buffer in persistent storage
pub struct BufferStore;

impl CumulativesStorage for BufferStore {
    fn read_meta(&self, env: &Env) -> Option<BufferMeta> {
        read(env, &DataKey::BufferMeta)
    }

    fn write_meta(&self, env: &Env, meta: &BufferMeta) {
        write(env, &DataKey::BufferMeta, meta);
    }

    fn read_slot(&self, env: &Env, id: u64) -> Option<TimedCumulatives> {
        read(env, &DataKey::BufferSlot(id))
    }

    fn write_slot(&self, env: &Env, id: u64, slot: &TimedCumulatives) {
        write(env, &DataKey::BufferSlot(id), slot);
    }

    fn remove_slot(&self, env: &Env, id: u64) {
        remove(env, &DataKey::BufferSlot(id));
    }
}
