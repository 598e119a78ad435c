// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::{Env, U256};

use crate::error::CfmmError;
use crate::fixed_point::{ceil_div, from_x80, to_liquidity, to_x80, u256, zero};

fn ordered<'a>(a: &'a U256, b: &'a U256) -> (&'a U256, &'a U256) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Token x held by `liquidity` between two sqrt prices:
/// (L << 80) / pa - (L << 80) / pb
///
/// With `round_up` the minuend is rounded up and the subtrahend down (an
/// amount the pool charges); otherwise the opposite (an amount it pays).
pub fn amount_x_delta(
    env: &Env,
    liquidity: u128,
    sqrt_price_a: &U256,
    sqrt_price_b: &U256,
    round_up: bool,
) -> U256 {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    if liquidity == 0 || lower == upper || *lower == zero(env) {
        return zero(env);
    }

    let scaled = to_x80(env, liquidity);
    let (at_lower, at_upper) = if round_up {
        (ceil_div(env, &scaled, lower), scaled.div(upper))
    } else {
        (scaled.div(lower), ceil_div(env, &scaled, upper))
    };

    if at_lower > at_upper {
        at_lower.sub(&at_upper)
    } else {
        zero(env)
    }
}

/// Token y held by `liquidity` between two sqrt prices:
/// L * (pb - pa) >> 80
pub fn amount_y_delta(
    env: &Env,
    liquidity: u128,
    sqrt_price_a: &U256,
    sqrt_price_b: &U256,
    round_up: bool,
) -> U256 {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    if liquidity == 0 || lower == upper {
        return zero(env);
    }

    let product = u256(env, liquidity).mul(&upper.sub(lower));
    from_x80(env, &product, round_up)
}

/// Token amounts backing `liquidity` in `[sqrt_price_lower, sqrt_price_upper]`
/// at the current price. The current price is clamped into the range, so a
/// range above the price holds only x and one below holds only y.
pub fn amounts_for_liquidity(
    env: &Env,
    liquidity: u128,
    sqrt_price: &U256,
    sqrt_price_lower: &U256,
    sqrt_price_upper: &U256,
    round_up: bool,
) -> (U256, U256) {
    let clamped = if sqrt_price < sqrt_price_lower {
        sqrt_price_lower
    } else if sqrt_price > sqrt_price_upper {
        sqrt_price_upper
    } else {
        sqrt_price
    };

    (
        amount_x_delta(env, liquidity, clamped, sqrt_price_upper, round_up),
        amount_y_delta(env, liquidity, sqrt_price_lower, clamped, round_up),
    )
}

/// Liquidity bought by `amount_x` between two sqrt prices:
/// x * (pa * pb >> 80) / (pb - pa)
pub fn liquidity_for_amount_x(
    env: &Env,
    amount_x: u128,
    sqrt_price_a: &U256,
    sqrt_price_b: &U256,
) -> Result<u128, CfmmError> {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    if amount_x == 0 || lower == upper {
        return Ok(0);
    }

    let product = from_x80(env, &lower.mul(upper), false);
    let liquidity = u256(env, amount_x).mul(&product).div(&upper.sub(lower));
    to_liquidity(&liquidity)
}

/// Liquidity bought by `amount_y` between two sqrt prices:
/// (y << 80) / (pb - pa)
pub fn liquidity_for_amount_y(
    env: &Env,
    amount_y: u128,
    sqrt_price_a: &U256,
    sqrt_price_b: &U256,
) -> Result<u128, CfmmError> {
    let (lower, upper) = ordered(sqrt_price_a, sqrt_price_b);
    if amount_y == 0 || lower == upper {
        return Ok(0);
    }

    to_liquidity(&to_x80(env, amount_y).div(&upper.sub(lower)))
}

/// Largest liquidity that both amounts can fund in the range
pub fn liquidity_for_amounts(
    env: &Env,
    amount_x: u128,
    amount_y: u128,
    sqrt_price: &U256,
    sqrt_price_lower: &U256,
    sqrt_price_upper: &U256,
) -> Result<u128, CfmmError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Ok(0);
    }

    if sqrt_price <= sqrt_price_lower {
        liquidity_for_amount_x(env, amount_x, sqrt_price_lower, sqrt_price_upper)
    } else if sqrt_price >= sqrt_price_upper {
        liquidity_for_amount_y(env, amount_y, sqrt_price_lower, sqrt_price_upper)
    } else {
        let from_x = liquidity_for_amount_x(env, amount_x, sqrt_price, sqrt_price_upper)?;
        let from_y = liquidity_for_amount_y(env, amount_y, sqrt_price_lower, sqrt_price)?;
        Ok(from_x.min(from_y))
    }
}
