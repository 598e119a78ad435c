// Segmented CFMM Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod fixed_point;
pub mod liquidity;
pub mod sqrt_price;

pub use constants::*;
pub use error::CfmmError;

pub use fixed_point::{
    amount_to_u256, bps_ceil, bps_floor, ceil_div, mul_div_ceil, mul_div_floor, one_x80,
    to_amount, to_liquidity, to_x128, to_x80, u256, wrapping_add, wrapping_sub, zero,
};

pub use sqrt_price::{sqrt_price_at_tick, sqrt_price_move_x, sqrt_price_move_y, tick_at_sqrt_price};

pub use liquidity::{
    amount_x_delta, amount_y_delta, amounts_for_liquidity, liquidity_for_amount_x,
    liquidity_for_amount_y, liquidity_for_amounts,
};
