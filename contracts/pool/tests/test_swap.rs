mod common;

use cfmm_math::{bps_ceil, bps_floor, to_x128, u256, MIN_TICK};
use cfmm_pool::types::PauseFlags;
use common::*;
use soroban_sdk::{testutils::Address as _, testutils::Ledger, Address, Env};

const L: u128 = 1_000_000_000_000;

fn trader(env: &Env, setup: &PoolSetup) -> Address {
    funded_user(env, setup)
}

// ============================================================
// IN-RANGE
// ============================================================

#[test]
fn test_x_to_y_in_range_fee_accounting() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);
    let sender = trader(&env, &setup);

    let dx: i128 = 1_000_000;
    let result = setup.pool.swap_x_to_y(&sender, &dx, &NO_DEADLINE, &0, &sender);

    let fee = bps_ceil(dx as u128, DEFAULT_FEE_BPS);
    let dev = bps_floor(fee, DEV_BPS);
    let state = setup.pool.get_pool_state();

    assert_eq!(result.amount_in, dx);
    assert!(result.amount_out > 0);
    assert_eq!(state.dev_share.x, dev as i128);
    assert_eq!(state.protocol_share.x, 0);
    assert_eq!(state.fee_growth.x, to_x128(&env, fee - dev).div(&u256(&env, L)));
    assert_eq!(state.fee_growth.y, u256(&env, 0));
    assert_eq!(state.cur_tick_index, result.cur_tick_index);
    assert_eq!(state.sqrt_price, result.sqrt_price);

    assert_eq!(balance(&env, &setup.token_x, &sender), FUNDS - dx);
    assert_eq!(balance(&env, &setup.token_y, &sender), FUNDS + result.amount_out);
}

#[test]
fn test_y_to_x_in_range_fee_accounting() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);
    let sender = trader(&env, &setup);
    let recipient = Address::generate(&env);

    let dy: i128 = 2_000_000;
    let result = setup.pool.swap_y_to_x(&sender, &dy, &NO_DEADLINE, &0, &recipient);

    let fee = bps_ceil(dy as u128, DEFAULT_FEE_BPS);
    let dev = bps_floor(fee, DEV_BPS);
    let state = setup.pool.get_pool_state();

    assert_eq!(result.amount_in, dy);
    assert_eq!(state.dev_share.y, dev as i128);
    assert_eq!(state.fee_growth.y, to_x128(&env, fee - dev).div(&u256(&env, L)));
    assert!(result.cur_tick_index >= 0);
    assert_eq!(balance(&env, &setup.token_x, &recipient), result.amount_out);
    assert_eq!(balance(&env, &setup.token_y, &sender), FUNDS - dy);
}

#[test]
fn test_swap_without_liquidity_moves_nothing() {
    let env = Env::default();
    let setup = setup_pool(&env);
    let sender = trader(&env, &setup);

    let result = setup.pool.swap_x_to_y(&sender, &1_000, &NO_DEADLINE, &0, &sender);

    assert_eq!(result.amount_in, 0);
    assert_eq!(result.amount_out, 0);
    assert_eq!(balance(&env, &setup.token_x, &sender), FUNDS);
    assert_eq!(setup.pool.get_pool_state().cur_tick_index, 0);
}

// ============================================================
// CROSSING AND PARTIAL FILLS
// ============================================================

#[test]
fn test_y_to_x_crosses_into_next_range() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, 1_000_000_000);
    open_position(&env, &setup, 20, 40, 2_000_000_000);
    let sender = trader(&env, &setup);

    let result = setup.pool.swap_y_to_x(&sender, &1_500_000, &NO_DEADLINE, &0, &sender);

    let state = setup.pool.get_pool_state();
    assert_eq!(result.amount_in, 1_500_000);
    assert_eq!(state.liquidity, 2_000_000_000);
    assert_eq!(state.cur_tick_witness, 20);
    assert!(state.cur_tick_index > 20 && state.cur_tick_index < 40);

    // fee growth seen below the crossed tick is now recorded outside it
    let crossed = setup.pool.get_tick(&20).unwrap();
    assert!(crossed.fee_growth_outside.y > u256(&env, 0));
}

#[test]
fn test_partial_fill_pulls_only_consumed_input() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, 1_000_000_000);
    let sender = trader(&env, &setup);

    let dx: i128 = 100_000_000;
    let result = setup.pool.swap_x_to_y(&sender, &dx, &NO_DEADLINE, &0, &sender);

    assert!(result.amount_in > 0 && result.amount_in < dx);
    assert_eq!(balance(&env, &setup.token_x, &sender), FUNDS - result.amount_in);

    let state = setup.pool.get_pool_state();
    assert_eq!(state.liquidity, 0);
    assert_eq!(state.cur_tick_index, -11);
    assert_eq!(state.cur_tick_witness, MIN_TICK);
}

#[test]
fn test_round_trip_restores_range_liquidity() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);
    open_position(&env, &setup, -100, -10, L);
    let sender = trader(&env, &setup);

    // down through -10 and back up through it
    setup.pool.swap_x_to_y(&sender, &1_000_000_000, &NO_DEADLINE, &0, &sender);
    assert!(setup.pool.get_pool_state().cur_tick_index < -10);
    setup.pool.swap_y_to_x(&sender, &1_000_000_000, &NO_DEADLINE, &0, &sender);

    let state = setup.pool.get_pool_state();
    assert!(state.cur_tick_index >= -10 && state.cur_tick_index < 20);
    assert_eq!(state.liquidity, L);
    assert_eq!(state.cur_tick_witness, -10);
}

// ============================================================
// LP FEES
// ============================================================

#[test]
fn test_lp_collects_fees_by_zero_modify() {
    let env = Env::default();
    let setup = setup_pool(&env);
    let (owner, id) = open_position(&env, &setup, -10, 20, L);
    let sender = trader(&env, &setup);

    setup.pool.swap_x_to_y(&sender, &100_000_000, &NO_DEADLINE, &0, &sender);

    let collector = Address::generate(&env);
    let net = setup.pool.modify_position(&owner, &modify_params(id, 0, &collector));

    // 50_000 fee, 7_500 to dev, the rest to the only LP (floored twice)
    assert!(net.x == -42_500 || net.x == -42_499);
    assert_eq!(net.y, 0);
    assert_eq!(balance(&env, &setup.token_x, &collector), -net.x);

    // settled: a second collection pays nothing
    let again = setup.pool.modify_position(&owner, &modify_params(id, 0, &collector));
    assert_eq!(again.x, 0);
}

#[test]
fn test_out_of_range_position_earns_nothing() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);

    // 20 is now the closest initialized tick below 100
    let owner = funded_user(&env, &setup);
    let params = with_witnesses(mint_params(100, 200, L), 20, 100);
    let id = setup.pool.mint_position(&owner, &params).unwrap();
    let sender = trader(&env, &setup);

    setup.pool.swap_x_to_y(&sender, &100_000_000, &NO_DEADLINE, &0, &sender);

    let net = setup.pool.modify_position(&owner, &modify_params(id, 0, &owner));
    assert_eq!(net.x, 0);
    assert_eq!(net.y, 0);
}

// ============================================================
// FAILURES
// ============================================================

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_swap_below_minimum_output_fails() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);
    let sender = trader(&env, &setup);

    setup.pool.swap_x_to_y(&sender, &1_000_000, &NO_DEADLINE, &1_000_000, &sender);
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn test_swap_past_deadline_fails() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);
    let sender = trader(&env, &setup);
    env.ledger().set_timestamp(500);

    setup.pool.swap_y_to_x(&sender, &1_000, &499, &0, &sender);
}

#[test]
#[should_panic(expected = "Error(Contract, #402)")]
fn test_swap_while_paused_fails() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);
    let sender = trader(&env, &setup);

    let flags = PauseFlags {
        swap: true,
        add_liquidity: false,
        remove_liquidity: false,
    };
    setup.pool.pause(&setup.factory.address, &flags);
    setup.pool.swap_x_to_y(&sender, &1_000, &NO_DEADLINE, &0, &sender);
}

#[test]
#[should_panic(expected = "Error(Contract, #404)")]
fn test_swap_with_shares_above_whole_fee_fails() {
    let env = Env::default();
    let setup = setup_pool(&env);
    open_position(&env, &setup, -10, 20, L);
    let sender = trader(&env, &setup);

    setup.factory.configure(&6_000, &5_000, &setup.dev, &setup.voter);
    setup.pool.swap_x_to_y(&sender, &1_000, &NO_DEADLINE, &0, &sender);
}

#[test]
#[should_panic(expected = "Error(Contract, #701)")]
fn test_swap_negative_amount_fails() {
    let env = Env::default();
    let setup = setup_pool(&env);
    let sender = trader(&env, &setup);

    setup.pool.swap_x_to_y(&sender, &-1, &NO_DEADLINE, &0, &sender);
}
