// Position Management Logic

use cfmm_math::{CfmmError, MAX_TICK, MIN_TICK};
use cfmm_tick::FeeGrowth;
use soroban_sdk::Env;

use crate::fees::calculate_pending_fees;
use crate::types::{FeesOwed, PositionState};

/// Settle a position against the current fee growth inside its range
///
/// Fees are not stored on the position: the caller pays them out (or nets
/// them against a deposit) immediately, and the checkpoint moves forward.
pub fn update_position(
    env: &Env,
    pos: &mut PositionState,
    fee_growth_inside: &FeeGrowth,
) -> Result<FeesOwed, CfmmError> {
    let fees = calculate_pending_fees(env, pos, fee_growth_inside)?;
    pos.fee_growth_inside_last = fee_growth_inside.clone();
    Ok(fees)
}

/// Settle fees, then apply a signed liquidity change
pub fn modify_position(
    env: &Env,
    pos: &mut PositionState,
    liquidity_delta: i128,
    fee_growth_inside: &FeeGrowth,
) -> Result<FeesOwed, CfmmError> {
    let fees = update_position(env, pos, fee_growth_inside)?;

    pos.liquidity = pos
        .liquidity
        .checked_add_signed(liquidity_delta)
        .ok_or(if liquidity_delta < 0 {
            CfmmError::PositionLiquidityBelowZero
        } else {
            CfmmError::Overflow
        })?;

    Ok(fees)
}

/// Validate position bounds: spacing, then order, then range
pub fn validate_position_params(
    lower: i32,
    upper: i32,
    tick_spacing: u32,
) -> Result<(), CfmmError> {
    let spacing = tick_spacing as i32;
    if spacing <= 0 || lower % spacing != 0 || upper % spacing != 0 {
        return Err(CfmmError::IncorrectTickSpacing);
    }

    if lower >= upper {
        return Err(CfmmError::TickOrder);
    }

    if lower < MIN_TICK || upper > MAX_TICK {
        return Err(CfmmError::TickOutOfRange);
    }

    Ok(())
}

/// Check if a position is active at the current tick
#[inline]
pub fn is_in_range(pos: &PositionState, cur_tick_index: i32) -> bool {
    pos.lower_tick_index <= cur_tick_index && cur_tick_index < pos.upper_tick_index
}
