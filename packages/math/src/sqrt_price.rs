// SPDX-License-Identifier: MIT
// Sqrt Price Calculations
//
// sqrt(1.0001^tick) in X80 notation, computed by binary exponentiation over
// the bits of |tick|. Each rung of the ladder is sqrt(1.0001^(+-2^bit))
// stored as `value * 2^-exponent`. Rungs are multiplied exactly and the
// product is shifted to X80 once, so the result is the floor of the exact
// ladder product.

use soroban_sdk::{Env, U256};

use crate::constants::{MAX_TICK, MIN_TICK, TICK_LADDER_BITS, X80_BITS};
use crate::fixed_point::{ceil_div, to_x80, u256};

mod wide {
    use uint::construct_uint;
    construct_uint! {
        /// Holds the full ladder product: 20 rungs below 2^87 each
        pub struct U2048(32);
    }
}

use wide::U2048;

/// (value, exponent) of sqrt(1.0001^(2^bit)) = value * 2^-exponent
const POSITIVE_LADDER: [(u128, u32); TICK_LADDER_BITS] = [
    (38687560557337355742483221, 85),
    (38689494983725479307861971, 85),
    (38693364126677775184793561, 85),
    (38701103573421987005215721, 85),
    (38716587111352494729706462, 85),
    (38747572773653928660613512, 85),
    (38809618513447185627569983, 85),
    (38934008210058939100663682, 85),
    (39183984934869404935943141, 85),
    (39688763633815974521145659, 85),
    (40717912888646086984030507, 85),
    (42856962434838368098529959, 85),
    (47478079282778087338933597, 85),
    (29134438707490415855866100, 84),
    (43882733799120415566608322, 84),
    (49778031622173924435819796, 83),
    (32025492072892644517427309, 80),
    (53023938993515524338629870, 76),
    (36338278329035183585718600, 66),
    (34133361681864713959105863, 47),
];

/// (value, exponent) of sqrt(1.0001^(-2^bit))
const NEGATIVE_LADDER: [(u128, u32); TICK_LADDER_BITS] = [
    (19341845997356488514015570, 84),
    (2417609866154190654524678, 81),
    (38677889876083546261210550, 85),
    (38670155071614559132217310, 85),
    (19327345051392939314248854, 84),
    (19311889358453304431405214, 84),
    (77124060166079386301517011, 86),
    (38438828813936263312862610, 85),
    (76387211720013513967242610, 86),
    (75415686436335201065707301, 86),
    (73509547540888574991368714, 86),
    (17460146398643019245576278, 84),
    (126085780994910985395717054, 87),
    (102735988268212419722671870, 87),
    (68208042073114503830679361, 87),
    (60130046442422405275353178, 88),
    (11682706336100247487260846, 88),
    (56449132412055094618915006, 95),
    (20592303012757789234393034, 103),
    (1370156647050591448120178, 118),
];

// ============================================================
// TICK -> SQRT PRICE
// ============================================================

/// Convert tick to sqrt price in X80 format
/// Formula: sqrt(1.0001^tick) * 2^80, rounded down
///
/// # Panics
/// If `tick` is outside [MIN_TICK, MAX_TICK]
pub fn sqrt_price_at_tick(env: &Env, tick: i32) -> U256 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }

    let ladder = if tick >= 0 {
        &POSITIVE_LADDER
    } else {
        &NEGATIVE_LADDER
    };

    let abs_tick = tick.unsigned_abs();
    let mut product = U2048::one();
    let mut exponent: u32 = 0;

    for (bit, (value, rung_exponent)) in ladder.iter().enumerate() {
        if abs_tick & (1 << bit) != 0 {
            product = product * widen(*value);
            exponent += rung_exponent;
        }
    }

    let x80 = if exponent >= X80_BITS {
        product >> (exponent - X80_BITS) as usize
    } else {
        product << (X80_BITS - exponent) as usize
    };

    // sqrt(1.0001^MAX_TICK) < 2^76, so only the low four words are set
    let words = x80.0;
    U256::from_parts(env, words[3], words[2], words[1], words[0])
}

fn widen(value: u128) -> U2048 {
    let mut words = [0u64; 32];
    words[0] = value as u64;
    words[1] = (value >> 64) as u64;
    U2048(words)
}

/// Greatest tick in `[lo, hi]` whose sqrt price does not exceed `sqrt_price`.
/// Returns `lo` when even `lo` is priced above it.
pub fn tick_at_sqrt_price(env: &Env, sqrt_price: &U256, lo: i32, hi: i32) -> i32 {
    let mut lo = lo.max(MIN_TICK);
    let mut hi = hi.min(MAX_TICK);

    if lo >= hi {
        return lo;
    }

    // invariant: answer in [lo, hi]
    while lo < hi {
        // upper midpoint so `lo = mid` always makes progress
        let mid = lo + ((hi - lo) as i64 + 1).div_euclid(2) as i32;
        if sqrt_price_at_tick(env, mid) <= *sqrt_price {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    lo
}

// ============================================================
// PRICE MOVES
// ============================================================

/// Sqrt price after depositing `dx` of token x into a segment.
///
/// ceil((L << 80) / (floor((L << 80) / p) + dx)); rounding up keeps the
/// price on the pool's side.
pub fn sqrt_price_move_x(env: &Env, liquidity: u128, sqrt_price: &U256, dx: u128) -> U256 {
    if liquidity == 0 || dx == 0 {
        return sqrt_price.clone();
    }

    let numerator = to_x80(env, liquidity);
    let denominator = numerator.div(sqrt_price).add(&u256(env, dx));
    ceil_div(env, &numerator, &denominator)
}

/// Sqrt price after depositing `dy` of token y into a segment.
///
/// p + floor((dy << 80) / L)
pub fn sqrt_price_move_y(env: &Env, liquidity: u128, sqrt_price: &U256, dy: u128) -> U256 {
    if liquidity == 0 || dy == 0 {
        return sqrt_price.clone();
    }

    sqrt_price.add(&to_x80(env, dy).div(&u256(env, liquidity)))
}
