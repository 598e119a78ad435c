//! Factory events

use soroban_sdk::{Address, BytesN, Env, Symbol};

use crate::types::PauseFlags;

pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((Symbol::new(env, "FactoryInit"),), (admin.clone(),));
}

/// Topics: ("PoolDeployed",)
/// Data: (pool, token_x, token_y, fee_bps, tick_spacing, initial_tick_index)
pub fn emit_pool_deployed(
    env: &Env,
    pool: &Address,
    token_x: &Address,
    token_y: &Address,
    fee_bps: u32,
    tick_spacing: u32,
    initial_tick_index: i32,
) {
    env.events().publish(
        (Symbol::new(env, "PoolDeployed"),),
        (
            pool.clone(),
            token_x.clone(),
            token_y.clone(),
            fee_bps,
            tick_spacing,
            initial_tick_index,
        ),
    );
}

/// `tick_spacing == 0` means the tier was removed
pub fn emit_fee_tier_updated(env: &Env, fee_bps: u32, tick_spacing: u32) {
    env.events().publish(
        (Symbol::new(env, "FeeTierUpdated"),),
        (fee_bps, tick_spacing),
    );
}

pub fn emit_shares_updated(env: &Env, dev_share_bps: u32, protocol_share_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "SharesUpdated"),),
        (dev_share_bps, protocol_share_bps),
    );
}

/// Topics: ("RoleUpdated", role)
pub fn emit_role_updated(env: &Env, role: &str, address: &Address) {
    env.events().publish(
        (Symbol::new(env, "RoleUpdated"), Symbol::new(env, role)),
        address.clone(),
    );
}

pub fn emit_pool_wasm_updated(env: &Env, hash: &BytesN<32>) {
    env.events()
        .publish((Symbol::new(env, "PoolWasmUpdated"),), hash.clone());
}

pub fn emit_admin_proposed(env: &Env, admin: &Address, proposed: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminProposed"),),
        (admin.clone(), proposed.clone()),
    );
}

pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}

/// Topics: ("PoolPaused", pool)
pub fn emit_pool_paused(env: &Env, pool: &Address, flags: &PauseFlags) {
    env.events().publish(
        (Symbol::new(env, "PoolPaused"), pool.clone()),
        (flags.swap, flags.add_liquidity, flags.remove_liquidity),
    );
}

/// Topics: ("PoolVeToggled", pool)
pub fn emit_pool_ve_toggled(env: &Env, pool: &Address, is_ve: bool) {
    env.events()
        .publish((Symbol::new(env, "PoolVeToggled"), pool.clone()), is_ve);
}
