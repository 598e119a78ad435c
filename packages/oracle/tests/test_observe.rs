mod common;

use cfmm_math::CfmmError;
use cfmm_oracle::*;
use common::*;
use proptest::prelude::*;
use soroban_sdk::{vec, Env, U256};

const NOW: u64 = 10_000;

fn four_slots(env: &Env) -> MemoryBuffer {
    buffer_with(
        env,
        &[
            slot(env, 100, 1_000, 10),
            slot(env, 200, 2_000, 12),
            slot(env, 300, 3_000, 15),
            slot(env, 400, 4_000, 18),
        ],
    )
}

#[test]
fn test_observe_exact_single_slot() {
    let env = Env::default();
    let store = buffer_with(&env, &[slot(&env, 100, 1_000, 10)]);

    let result = observe(&env, &store, NOW, 0, 0, &vec![&env, 100]).unwrap();

    assert_eq!(result.get(0).unwrap().tick_cumulative, 1_000);
    assert_eq!(
        result.get(0).unwrap().spl_cumulative,
        U256::from_u32(&env, 1_000)
    );
}

#[test]
fn test_observe_extrapolates_past_last_slot() {
    let env = Env::default();
    let store = buffer_with(&env, &[slot(&env, 100, 1_000, 10)]);

    let result = observe(&env, &store, NOW, 11, 11, &vec![&env, 105]).unwrap();
    let value = result.get(0).unwrap();

    assert_eq!(value.tick_cumulative, 1_055);
    assert_eq!(
        value.spl_cumulative,
        U256::from_u32(&env, 1_000).add(&spl(&env, 5, 11))
    );
}

#[test]
fn test_observe_interpolates_with_next_slot_values() {
    let env = Env::default();
    let store = four_slots(&env);

    let result = observe(&env, &store, NOW, 0, 0, &vec![&env, 100, 150, 250, 350]).unwrap();

    assert_eq!(result.get(0).unwrap().tick_cumulative, 1_000);
    assert_eq!(result.get(1).unwrap().tick_cumulative, 1_600);
    assert_eq!(result.get(2).unwrap().tick_cumulative, 2_750);
    assert_eq!(result.get(3).unwrap().tick_cumulative, 3_900);

    assert_eq!(
        result.get(1).unwrap().spl_cumulative,
        U256::from_u32(&env, 1_000).add(&spl(&env, 50, 12))
    );
    assert_eq!(
        result.get(3).unwrap().spl_cumulative,
        U256::from_u32(&env, 3_000).add(&spl(&env, 50, 18))
    );
}

#[test]
fn test_observe_before_oldest_slot_fails() {
    let env = Env::default();
    let store = four_slots(&env);

    assert_eq!(
        observe(&env, &store, NOW, 0, 0, &vec![&env, 200, 99]),
        Err(CfmmError::ObserveOutdatedTimestamp)
    );
}

#[test]
fn test_observe_future_fails() {
    let env = Env::default();
    let store = four_slots(&env);

    assert_eq!(
        observe(&env, &store, NOW, 0, 0, &vec![&env, NOW + 1]),
        Err(CfmmError::ObserveFutureTimestamp)
    );
}

#[test]
fn test_current_cumulatives_matches_next_update() {
    let env = Env::default();
    let store = MemoryBuffer::default();
    init_buffer(&env, &store, 4);

    update_timed_cumulatives(&env, &store, 100, 5, 1_000).unwrap();
    let projected = current_cumulatives(&env, &store, 180, -2, 3_000).unwrap();
    update_timed_cumulatives(&env, &store, 180, -2, 3_000).unwrap();

    let newest = store.read_slot(&env, store.meta().last).unwrap();
    assert_eq!(projected.tick_cumulative, newest.tick.sum);
    assert_eq!(projected.spl_cumulative, newest.spl.sum);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: observing twice yields the same values
    #[test]
    fn prop_observe_idempotent(at in 100u64..=NOW) {
        let env = Env::default();
        let store = four_slots(&env);
        let first = observe(&env, &store, NOW, 20, 20, &vec![&env, at]).unwrap();
        let second = observe(&env, &store, NOW, 20, 20, &vec![&env, at]).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: with positive ticks both sums are monotone in time
    #[test]
    fn prop_observe_monotone(a in 0u64..=NOW, b in 0u64..=NOW) {
        let env = Env::default();
        let store = MemoryBuffer::default();
        init_buffer(&env, &store, 4);
        for (now, tick, liquidity) in [(100u64, 3i32, 50u128), (250, 7, 10), (400, 1, 1_000)] {
            update_timed_cumulatives(&env, &store, now, tick, liquidity).unwrap();
        }

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let values = observe(&env, &store, NOW, 20, 20, &vec![&env, lo, hi]).unwrap();
        let early = values.get(0).unwrap();
        let late = values.get(1).unwrap();
        prop_assert!(early.tick_cumulative <= late.tick_cumulative);
        prop_assert!(early.spl_cumulative <= late.spl_cumulative);
    }
}
