// SPDX-License-Identifier: MIT
// 256-bit fixed point helpers
//
// Prices are X80 and accumulators X128, so every product that mixes them
// with a liquidity or an amount is carried out in the host U256 type.

use soroban_sdk::{Env, U256};

use crate::constants::{BPS_DENOMINATOR, X128_BITS, X80_BITS};
use crate::error::CfmmError;

// ============================================================
// CONSTRUCTORS
// ============================================================

#[inline]
pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

#[inline]
pub fn zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

/// 1.0 in X80 notation
#[inline]
pub fn one_x80(env: &Env) -> U256 {
    U256::from_u32(env, 1).shl(X80_BITS)
}

/// 2^256 - 1
#[inline]
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

// ============================================================
// DIVISION WITH ROUNDING
// ============================================================

/// ceil(a / b)
///
/// # Panics
/// If `b` is zero (host division error)
pub fn ceil_div(env: &Env, a: &U256, b: &U256) -> U256 {
    let quotient = a.div(b);
    if a.rem_euclid(b) == zero(env) {
        quotient
    } else {
        quotient.add(&U256::from_u32(env, 1))
    }
}

/// floor(a * b / denominator)
pub fn mul_div_floor(a: &U256, b: &U256, denominator: &U256) -> U256 {
    a.mul(b).div(denominator)
}

/// ceil(a * b / denominator)
pub fn mul_div_ceil(env: &Env, a: &U256, b: &U256, denominator: &U256) -> U256 {
    ceil_div(env, &a.mul(b), denominator)
}

// ============================================================
// X-NOTATION SHIFTS
// ============================================================

/// value << 80
#[inline]
pub fn to_x80(env: &Env, value: u128) -> U256 {
    u256(env, value).shl(X80_BITS)
}

/// value << 128
#[inline]
pub fn to_x128(env: &Env, value: u128) -> U256 {
    u256(env, value).shl(X128_BITS)
}

/// floor(value >> 80), or ceil when `round_up` is set
pub fn from_x80(env: &Env, value: &U256, round_up: bool) -> U256 {
    if round_up {
        ceil_div(env, value, &one_x80(env))
    } else {
        value.shr(X80_BITS)
    }
}

// ============================================================
// MODULAR ARITHMETIC
// ============================================================

/// a - b modulo 2^256
///
/// Accumulators (fee growth, seconds per liquidity) only ever grow, and the
/// "outside" snapshots are compared against them by difference, so the
/// difference is taken modulo 2^256 the same way a wrapping u128 would be.
pub fn wrapping_sub(env: &Env, a: &U256, b: &U256) -> U256 {
    if a >= b {
        a.sub(b)
    } else {
        // 2^256 - (b - a) == (2^256 - 1) - (b - a) + 1
        u256_max(env)
            .sub(&b.sub(a))
            .add(&U256::from_u32(env, 1))
    }
}

/// a + b modulo 2^256
pub fn wrapping_add(env: &Env, a: &U256, b: &U256) -> U256 {
    let headroom = u256_max(env).sub(a);
    if *b <= headroom {
        a.add(b)
    } else {
        b.sub(&headroom).sub(&U256::from_u32(env, 1))
    }
}

// ============================================================
// CONVERSIONS
// ============================================================

/// U256 -> token amount
pub fn to_amount(value: &U256) -> Result<i128, CfmmError> {
    let raw = value.to_u128().ok_or(CfmmError::Overflow)?;
    i128::try_from(raw).map_err(|_| CfmmError::Overflow)
}

/// U256 -> liquidity
pub fn to_liquidity(value: &U256) -> Result<u128, CfmmError> {
    value.to_u128().ok_or(CfmmError::Overflow)
}

/// Non-negative token amount -> U256
pub fn amount_to_u256(env: &Env, amount: i128) -> Result<U256, CfmmError> {
    let raw = u128::try_from(amount).map_err(|_| CfmmError::Overflow)?;
    Ok(u256(env, raw))
}

// ============================================================
// BASIS POINTS
// ============================================================

/// floor(amount * bps / 10000)
pub fn bps_floor(amount: u128, bps: u32) -> u128 {
    // u128 * u32 cannot be guaranteed to fit, split the product
    let denominator = BPS_DENOMINATOR as u128;
    let bps = bps as u128;
    (amount / denominator) * bps + (amount % denominator) * bps / denominator
}

/// ceil(amount * bps / 10000)
pub fn bps_ceil(amount: u128, bps: u32) -> u128 {
    let denominator = BPS_DENOMINATOR as u128;
    let floor = bps_floor(amount, bps);
    if (amount % denominator) * (bps as u128) % denominator == 0 {
        floor
    } else {
        floor + 1
    }
}
