#![allow(dead_code)]

use cfmm_factory::{CfmmFactory, CfmmFactoryClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

pub struct FactorySetup<'a> {
    pub factory: CfmmFactoryClient<'a>,
    pub admin: Address,
    pub dev: Address,
    pub voter: Address,
}

pub fn setup_factory(env: &Env) -> FactorySetup<'_> {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let dev = Address::generate(env);
    let voter = Address::generate(env);

    let factory_id = env.register(CfmmFactory, ());
    let factory = CfmmFactoryClient::new(env, &factory_id);
    factory.initialize(&admin, &pool_wasm_hash(env), &dev, &voter);

    FactorySetup {
        factory,
        admin,
        dev,
        voter,
    }
}

pub fn pool_wasm_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}
