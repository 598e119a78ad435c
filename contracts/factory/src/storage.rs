// Factory storage module

use soroban_sdk::{contracttype, Address, Env};

use crate::error::FactoryError;
use crate::types::FactoryConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum FactoryDataKey {
    Initialized,
    Config,
    /// Admin waiting to accept the role
    ProposedAdmin,
    /// Tick spacing by fee tier
    FeeTier(u32),
    /// Pool address by (token_x, token_y, fee_bps), stored under both orderings
    Pool(Address, Address, u32),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &FactoryDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&FactoryDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::Initialized, &true);
    extend_ttl(env, &FactoryDataKey::Initialized);
}

// ============================================================
// CONFIG / ADMIN
// ============================================================

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&FactoryDataKey::Config, config);
    extend_ttl(env, &FactoryDataKey::Config);
}

pub fn read_config(env: &Env) -> Result<FactoryConfig, FactoryError> {
    let config = env
        .storage()
        .persistent()
        .get(&FactoryDataKey::Config)
        .ok_or(FactoryError::NotInitialized)?;
    extend_ttl(env, &FactoryDataKey::Config);
    Ok(config)
}

pub fn write_proposed_admin(env: &Env, admin: &Address) {
    env.storage()
        .persistent()
        .set(&FactoryDataKey::ProposedAdmin, admin);
    extend_ttl(env, &FactoryDataKey::ProposedAdmin);
}

pub fn read_proposed_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&FactoryDataKey::ProposedAdmin)
}

pub fn clear_proposed_admin(env: &Env) {
    env.storage()
        .persistent()
        .remove(&FactoryDataKey::ProposedAdmin);
}

// ============================================================
// FEE TIERS
// ============================================================

pub fn write_fee_tier(env: &Env, fee_bps: u32, tick_spacing: u32) {
    let key = FactoryDataKey::FeeTier(fee_bps);
    env.storage().persistent().set(&key, &tick_spacing);
    extend_ttl(env, &key);
}

pub fn read_fee_tier(env: &Env, fee_bps: u32) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::FeeTier(fee_bps))
}

pub fn remove_fee_tier(env: &Env, fee_bps: u32) {
    env.storage()
        .persistent()
        .remove(&FactoryDataKey::FeeTier(fee_bps));
}

// ============================================================
// POOL REGISTRY
// ============================================================

pub fn read_pool(env: &Env, token_a: &Address, token_b: &Address, fee_bps: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&FactoryDataKey::Pool(token_a.clone(), token_b.clone(), fee_bps))
}

/// Register `pool` under `(x, y)` and `(y, x)`
pub fn register_pool(env: &Env, token_x: &Address, token_y: &Address, fee_bps: u32, pool: &Address) {
    for key in [
        FactoryDataKey::Pool(token_x.clone(), token_y.clone(), fee_bps),
        FactoryDataKey::Pool(token_y.clone(), token_x.clone(), fee_bps),
    ] {
        env.storage().persistent().set(&key, pool);
        extend_ttl(env, &key);
    }
}
