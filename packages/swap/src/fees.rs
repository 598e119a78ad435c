// Swap fee accounting

use cfmm_math::{bps_floor, mul_div_ceil, to_x128, u256, wrapping_add, CfmmError, BPS_DENOMINATOR};
use soroban_sdk::{Env, U256};

use crate::types::{SwapConfig, SwapState};

/// Which asset a fee is paid in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeeAsset {
    X,
    Y,
}

/// Gross input needed so that `net` remains after the fee:
/// ceil(net * 10000 / (10000 - fee_bps))
pub fn gross_up(env: &Env, net: &U256, fee_bps: u32) -> U256 {
    if fee_bps >= BPS_DENOMINATOR {
        // everything is fee, no finite gross amount exists
        return u256(env, u128::MAX);
    }
    mul_div_ceil(
        env,
        net,
        &U256::from_u32(env, BPS_DENOMINATOR),
        &U256::from_u32(env, BPS_DENOMINATOR - fee_bps),
    )
}

/// Split a step fee into dev share, protocol share and LP fee growth.
///
/// The LP part only becomes fee growth when liquidity is active; with no
/// liquidity it stays in the pool unattributed.
pub fn accrue_fee(
    env: &Env,
    state: &mut SwapState,
    config: &SwapConfig,
    fee: u128,
    asset: FeeAsset,
) -> Result<(), CfmmError> {
    if fee == 0 {
        return Ok(());
    }

    let dev = bps_floor(fee, config.dev_bps);
    let protocol = if config.is_ve {
        bps_floor(fee, config.protocol_bps)
    } else {
        0
    };
    let lp = fee.saturating_sub(dev).saturating_sub(protocol);

    let dev = i128::try_from(dev).map_err(|_| CfmmError::Overflow)?;
    let protocol = i128::try_from(protocol).map_err(|_| CfmmError::Overflow)?;

    let (dev_slot, protocol_slot, growth) = match asset {
        FeeAsset::X => (
            &mut state.dev_share.x,
            &mut state.protocol_share.x,
            &mut state.fee_growth.x,
        ),
        FeeAsset::Y => (
            &mut state.dev_share.y,
            &mut state.protocol_share.y,
            &mut state.fee_growth.y,
        ),
    };

    *dev_slot = dev_slot.checked_add(dev).ok_or(CfmmError::Overflow)?;
    *protocol_slot = protocol_slot
        .checked_add(protocol)
        .ok_or(CfmmError::Overflow)?;

    if state.liquidity > 0 {
        let increment = to_x128(env, lp).div(&u256(env, state.liquidity));
        *growth = wrapping_add(env, growth, &increment);
    }

    Ok(())
}
