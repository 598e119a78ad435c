use cfmm_math::{to_amount, wrapping_sub, CfmmError, X128_BITS};
use cfmm_tick::FeeGrowth;
use soroban_sdk::{Env, U256};

use crate::types::{FeesOwed, PositionState};

fn owed(env: &Env, inside: &U256, last: &U256, liquidity: &U256) -> Result<i128, CfmmError> {
    let delta = wrapping_sub(env, inside, last);
    to_amount(&delta.mul(liquidity).shr(X128_BITS))
}

/// floor((inside - last) * L / 2^128) for each asset
pub fn calculate_pending_fees(
    env: &Env,
    pos: &PositionState,
    fee_growth_inside: &FeeGrowth,
) -> Result<FeesOwed, CfmmError> {
    if pos.liquidity == 0 {
        return Ok(FeesOwed::default());
    }

    let liquidity = U256::from_u128(env, pos.liquidity);
    Ok(FeesOwed {
        x: owed(env, &fee_growth_inside.x, &pos.fee_growth_inside_last.x, &liquidity)?,
        y: owed(env, &fee_growth_inside.y, &pos.fee_growth_inside_last.y, &liquidity)?,
    })
}
