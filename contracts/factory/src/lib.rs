#![no_std]

//! # CFMM Factory
//!
//! Registry and deployer for segmented CFMM pools.
//!
//! ## Responsibilities:
//! 1. Deploy pools, one per (pair, fee tier)
//! 2. Fee tier → tick spacing table
//! 3. Dev and protocol shares, dev address and voter, read by pools at swap time
//! 4. Admin operations forwarded to pools (pause, vote-escrow toggle)

use soroban_sdk::{
    contract, contractimpl, vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

const BPS_DENOMINATOR: u32 = 10_000;

/// Shares applied at initialization
const DEFAULT_DEV_SHARE_BPS: u32 = 1_500;
const DEFAULT_PROTOCOL_SHARE_BPS: u32 = 2_000;

/// (fee_bps, tick_spacing)
const DEFAULT_FEE_TIERS: [(u32, u32); 4] = [(1, 1), (5, 10), (30, 60), (100, 200)];

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct CfmmFactory;

#[contractimpl]
impl CfmmFactory {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        pool_wasm_hash: BytesN<32>,
        dev_address: Address,
        voter: Address,
    ) -> Result<(), FactoryError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }

        let config = FactoryConfig {
            admin: admin.clone(),
            pool_wasm_hash,
            dev_address,
            voter,
            dev_share_bps: DEFAULT_DEV_SHARE_BPS,
            protocol_share_bps: DEFAULT_PROTOCOL_SHARE_BPS,
        };
        write_config(&env, &config);
        set_initialized(&env);

        for (fee_bps, tick_spacing) in DEFAULT_FEE_TIERS {
            write_fee_tier(&env, fee_bps, tick_spacing);
        }

        emit_initialized(&env, &admin);
        Ok(())
    }

    /// Deploy and initialize the pool for `(token_x, token_y)` at `fee_bps`.
    ///
    /// Pools price `token_y` in units of `token_x` in the order given. The
    /// address is derived from the unordered pair and the tier, so the same
    /// pair can only be deployed once per tier whatever order it is passed in.
    pub fn deploy_pool(
        env: Env,
        token_x: Address,
        token_y: Address,
        fee_bps: u32,
        initial_tick_index: i32,
        extra_slots: u64,
    ) -> Result<Address, FactoryError> {
        let config = read_config(&env)?;

        if token_x == token_y {
            return Err(FactoryError::IdenticalTokens);
        }
        let tick_spacing = read_fee_tier(&env, fee_bps).ok_or(FactoryError::UnknownFeeTier)?;
        if read_pool(&env, &token_x, &token_y, fee_bps).is_some() {
            return Err(FactoryError::PoolAlreadyDeployed);
        }

        let salt = pool_salt(&env, &token_x, &token_y, fee_bps);
        let pool = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(config.pool_wasm_hash, ());

        let factory = env.current_contract_address();
        env.invoke_contract::<()>(
            &pool,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                factory.into_val(&env),
                TokenRef::Asset(token_x.clone()).into_val(&env),
                TokenRef::Asset(token_y.clone()).into_val(&env),
                fee_bps.into_val(&env),
                tick_spacing.into_val(&env),
                initial_tick_index.into_val(&env),
                extra_slots.into_val(&env),
            ],
        );

        register_pool(&env, &token_x, &token_y, fee_bps, &pool);
        emit_pool_deployed(
            &env,
            &pool,
            &token_x,
            &token_y,
            fee_bps,
            tick_spacing,
            initial_tick_index,
        );

        Ok(pool)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Set or remove fee tiers. A zero tick spacing removes the tier.
    pub fn update_fee_tiers(
        env: Env,
        caller: Address,
        tiers: Vec<(u32, u32)>,
    ) -> Result<(), FactoryError> {
        require_admin(&env, &caller)?;

        for (fee_bps, tick_spacing) in tiers.iter() {
            if fee_bps > BPS_DENOMINATOR {
                return Err(FactoryError::FeeRateTooHigh);
            }
            if tick_spacing == 0 {
                remove_fee_tier(&env, fee_bps);
            } else {
                write_fee_tier(&env, fee_bps, tick_spacing);
            }
            emit_fee_tier_updated(&env, fee_bps, tick_spacing);
        }
        Ok(())
    }

    pub fn update_dev_share(env: Env, caller: Address, bps: u32) -> Result<(), FactoryError> {
        let mut config = require_admin(&env, &caller)?;
        if bps > BPS_DENOMINATOR {
            return Err(FactoryError::DevShareTooHigh);
        }
        config.dev_share_bps = bps;
        write_config(&env, &config);
        emit_shares_updated(&env, config.dev_share_bps, config.protocol_share_bps);
        Ok(())
    }

    pub fn update_protocol_share(env: Env, caller: Address, bps: u32) -> Result<(), FactoryError> {
        let mut config = require_admin(&env, &caller)?;
        if bps > BPS_DENOMINATOR {
            return Err(FactoryError::ProtocolShareTooHigh);
        }
        config.protocol_share_bps = bps;
        write_config(&env, &config);
        emit_shares_updated(&env, config.dev_share_bps, config.protocol_share_bps);
        Ok(())
    }

    pub fn update_dev_address(
        env: Env,
        caller: Address,
        dev_address: Address,
    ) -> Result<(), FactoryError> {
        let mut config = require_admin(&env, &caller)?;
        emit_role_updated(&env, "dev", &dev_address);
        config.dev_address = dev_address;
        write_config(&env, &config);
        Ok(())
    }

    pub fn update_voter(env: Env, caller: Address, voter: Address) -> Result<(), FactoryError> {
        let mut config = require_admin(&env, &caller)?;
        emit_role_updated(&env, "voter", &voter);
        config.voter = voter;
        write_config(&env, &config);
        Ok(())
    }

    /// Only affects pools deployed afterwards
    pub fn set_pool_wasm_hash(
        env: Env,
        caller: Address,
        new_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        let mut config = require_admin(&env, &caller)?;
        emit_pool_wasm_updated(&env, &new_hash);
        config.pool_wasm_hash = new_hash;
        write_config(&env, &config);
        Ok(())
    }

    /// First half of the admin handover; the proposed address must accept
    pub fn propose_new_admin(
        env: Env,
        caller: Address,
        proposed: Address,
    ) -> Result<(), FactoryError> {
        let config = require_admin(&env, &caller)?;
        write_proposed_admin(&env, &proposed);
        emit_admin_proposed(&env, &config.admin, &proposed);
        Ok(())
    }

    pub fn accept_new_admin(env: Env, caller: Address) -> Result<(), FactoryError> {
        caller.require_auth();

        let mut config = read_config(&env)?;
        match read_proposed_admin(&env) {
            Some(proposed) if proposed == caller => {}
            _ => return Err(FactoryError::NotProposedAdmin),
        }

        emit_admin_updated(&env, &config.admin, &caller);
        config.admin = caller;
        write_config(&env, &config);
        clear_proposed_admin(&env);
        Ok(())
    }

    pub fn pause_pool(
        env: Env,
        caller: Address,
        token_x: Address,
        token_y: Address,
        fee_bps: u32,
        flags: PauseFlags,
    ) -> Result<(), FactoryError> {
        require_admin(&env, &caller)?;
        let pool = read_pool(&env, &token_x, &token_y, fee_bps).ok_or(FactoryError::PoolNotFound)?;

        env.invoke_contract::<()>(
            &pool,
            &Symbol::new(&env, "pause"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                flags.clone().into_val(&env),
            ],
        );

        emit_pool_paused(&env, &pool, &flags);
        Ok(())
    }

    /// Flip the pool's vote-escrow mode; returns the new mode
    pub fn toggle_ve(
        env: Env,
        caller: Address,
        token_x: Address,
        token_y: Address,
        fee_bps: u32,
    ) -> Result<bool, FactoryError> {
        require_admin(&env, &caller)?;
        let pool = read_pool(&env, &token_x, &token_y, fee_bps).ok_or(FactoryError::PoolNotFound)?;

        let is_ve = env.invoke_contract::<bool>(
            &pool,
            &Symbol::new(&env, "toggle_protocol_share"),
            vec![&env, env.current_contract_address().into_val(&env)],
        );

        emit_pool_ve_toggled(&env, &pool, is_ve);
        Ok(is_ve)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn get_dev_share(env: Env) -> Result<u32, FactoryError> {
        Ok(read_config(&env)?.dev_share_bps)
    }

    pub fn get_protocol_share(env: Env) -> Result<u32, FactoryError> {
        Ok(read_config(&env)?.protocol_share_bps)
    }

    pub fn get_dev_address(env: Env) -> Result<Address, FactoryError> {
        Ok(read_config(&env)?.dev_address)
    }

    pub fn get_voter(env: Env) -> Result<Address, FactoryError> {
        Ok(read_config(&env)?.voter)
    }

    pub fn get_admin(env: Env) -> Result<Address, FactoryError> {
        Ok(read_config(&env)?.admin)
    }

    pub fn get_proposed_admin(env: Env) -> Option<Address> {
        read_proposed_admin(&env)
    }

    /// Pool for the pair in either order
    pub fn get_pool(env: Env, token_x: Address, token_y: Address, fee_bps: u32) -> Option<Address> {
        read_pool(&env, &token_x, &token_y, fee_bps)
    }

    /// Tick spacing of a tier, if the tier exists
    pub fn get_fee_tier(env: Env, fee_bps: u32) -> Option<u32> {
        read_fee_tier(&env, fee_bps)
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

fn require_admin(env: &Env, caller: &Address) -> Result<FactoryConfig, FactoryError> {
    caller.require_auth();
    let config = read_config(env)?;
    if *caller != config.admin {
        return Err(FactoryError::NotAdmin);
    }
    Ok(config)
}

/// Salt over the sorted pair and the tier
fn pool_salt(env: &Env, token_a: &Address, token_b: &Address, fee_bps: u32) -> BytesN<32> {
    let (first, second) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    let mut salt_data = first.clone().to_xdr(env);
    salt_data.append(&second.clone().to_xdr(env));
    salt_data.append(&fee_bps.to_xdr(env));
    env.crypto().sha256(&salt_data).into()
}
