#![allow(dead_code)]

use cfmm_math::MIN_TICK;
use cfmm_pool::types::{MintPositionParams, ModifyPositionParams, TokenBalances, TokenRef};
use cfmm_pool::{CfmmPool, CfmmPoolClient};
use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, token::StellarAssetClient,
    token::TokenClient, Address, Env, Vec,
};

// Test constants
pub const DEFAULT_FEE_BPS: u32 = 5;
pub const DEFAULT_TICK_SPACING: u32 = 1;
pub const DEV_BPS: u32 = 1500;
pub const PROTOCOL_BPS: u32 = 2000;
pub const FUNDS: i128 = 1_000_000_000_000_000_000;
pub const NO_DEADLINE: u64 = u64::MAX;

// ============================================================
// COLLABORATOR MOCKS
// ============================================================

#[contracttype]
enum MockKey {
    DevShare,
    ProtocolShare,
    Dev,
    Voter,
    Fees(u64),
    Balance(Address, u128),
}

/// Stands in for the factory: answers the share and role queries
#[contract]
pub struct MockFactory;

#[contractimpl]
impl MockFactory {
    pub fn configure(env: Env, dev_bps: u32, protocol_bps: u32, dev: Address, voter: Address) {
        let storage = env.storage().instance();
        storage.set(&MockKey::DevShare, &dev_bps);
        storage.set(&MockKey::ProtocolShare, &protocol_bps);
        storage.set(&MockKey::Dev, &dev);
        storage.set(&MockKey::Voter, &voter);
    }

    pub fn get_dev_share(env: Env) -> u32 {
        env.storage().instance().get(&MockKey::DevShare).unwrap()
    }

    pub fn get_protocol_share(env: Env) -> u32 {
        env.storage().instance().get(&MockKey::ProtocolShare).unwrap()
    }

    pub fn get_dev_address(env: Env) -> Address {
        env.storage().instance().get(&MockKey::Dev).unwrap()
    }

    pub fn get_voter(env: Env) -> Address {
        env.storage().instance().get(&MockKey::Voter).unwrap()
    }
}

/// Records what the pool reports on `add_fees`
#[contract]
pub struct MockDistributor;

#[contractimpl]
impl MockDistributor {
    pub fn add_fees(env: Env, epoch: u64, fees: Vec<(TokenRef, i128)>) {
        env.storage().instance().set(&MockKey::Fees(epoch), &fees);
    }

    pub fn fees(env: Env, epoch: u64) -> Vec<(TokenRef, i128)> {
        env.storage()
            .instance()
            .get(&MockKey::Fees(epoch))
            .unwrap_or_else(|| Vec::new(&env))
    }
}

/// Minimal multi-asset ledger: balances keyed by (owner, token_id)
#[contract]
pub struct MockMultiAsset;

#[contractimpl]
impl MockMultiAsset {
    pub fn mint(env: Env, to: Address, token_id: u128, amount: i128) {
        let key = MockKey::Balance(to, token_id);
        let balance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(balance + amount));
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u128, amount: i128) {
        from.require_auth();
        let from_key = MockKey::Balance(from, token_id);
        let from_balance: i128 = env.storage().instance().get(&from_key).unwrap_or(0);
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage().instance().set(&from_key, &(from_balance - amount));

        let to_key = MockKey::Balance(to, token_id);
        let to_balance: i128 = env.storage().instance().get(&to_key).unwrap_or(0);
        env.storage().instance().set(&to_key, &(to_balance + amount));
    }

    pub fn balance(env: Env, owner: Address, token_id: u128) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::Balance(owner, token_id))
            .unwrap_or(0)
    }
}

// ============================================================
// POOL SETUP
// ============================================================

pub struct PoolSetup<'a> {
    pub pool: CfmmPoolClient<'a>,
    pub factory: MockFactoryClient<'a>,
    pub token_x: Address,
    pub token_y: Address,
    pub dev: Address,
    pub voter: Address,
}

/// Pool with default fee and spacing at tick 0
pub fn setup_pool(env: &Env) -> PoolSetup<'_> {
    setup_custom_pool(env, DEFAULT_FEE_BPS, DEFAULT_TICK_SPACING, 0, 0)
}

/// Setup pool with custom parameters
pub fn setup_custom_pool(
    env: &Env,
    fee_bps: u32,
    tick_spacing: u32,
    initial_tick_index: i32,
    extra_slots: u64,
) -> PoolSetup<'_> {
    env.mock_all_auths();

    let dev = Address::generate(env);
    let voter = Address::generate(env);
    let factory = MockFactoryClient::new(env, &env.register(MockFactory, ()));
    factory.configure(&DEV_BPS, &PROTOCOL_BPS, &dev, &voter);

    let token_x = create_token(env);
    let token_y = create_token(env);

    let pool = CfmmPoolClient::new(env, &env.register(CfmmPool, ()));
    pool.initialize(
        &factory.address,
        &TokenRef::Asset(token_x.clone()),
        &TokenRef::Asset(token_y.clone()),
        &fee_bps,
        &tick_spacing,
        &initial_tick_index,
        &extra_slots,
    );

    PoolSetup {
        pool,
        factory,
        token_x,
        token_y,
        dev,
        voter,
    }
}

/// Create a test token
pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, owner: &Address) -> i128 {
    TokenClient::new(env, token).balance(owner)
}

/// Fresh account holding plenty of both tokens
pub fn funded_user(env: &Env, setup: &PoolSetup) -> Address {
    let user = Address::generate(env);
    mint_tokens(env, &setup.token_x, &user, FUNDS);
    mint_tokens(env, &setup.token_y, &user, FUNDS);
    user
}

// ============================================================
// PARAM BUILDERS
// ============================================================

pub fn unlimited() -> TokenBalances {
    TokenBalances {
        x: i128::MAX,
        y: i128::MAX,
    }
}

/// Mint params for a fresh range whose bounds have no initialized tick
/// between them and the lower sentinel
pub fn mint_params(lower: i32, upper: i32, liquidity: u128) -> MintPositionParams {
    MintPositionParams {
        lower_tick_index: lower,
        upper_tick_index: upper,
        lower_tick_witness: MIN_TICK,
        upper_tick_witness: lower,
        liquidity,
        deadline: NO_DEADLINE,
        maximum_tokens_contributed: unlimited(),
    }
}

pub fn with_witnesses(mut params: MintPositionParams, lower: i32, upper: i32) -> MintPositionParams {
    params.lower_tick_witness = lower;
    params.upper_tick_witness = upper;
    params
}

pub fn modify_params(position_id: u64, liquidity_delta: i128, to: &Address) -> ModifyPositionParams {
    ModifyPositionParams {
        position_id,
        liquidity_delta,
        to_x: to.clone(),
        to_y: to.clone(),
        deadline: NO_DEADLINE,
        maximum_tokens_contributed: unlimited(),
    }
}

/// Mint a position for a fresh funded user, returning (owner, position id)
pub fn open_position(env: &Env, setup: &PoolSetup, lower: i32, upper: i32, liquidity: u128) -> (Address, u64) {
    let owner = funded_user(env, setup);
    let id = setup
        .pool
        .mint_position(&owner, &mint_params(lower, upper, liquidity))
        .unwrap();
    (owner, id)
}
