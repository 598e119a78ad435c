// Pool events module
// All events use compact names to reduce storage/gas costs

use soroban_sdk::{Address, Env, Symbol};

use crate::types::{PauseFlags, PoolConstants, TokenBalances};

/// Topics: ("PoolInit",)
/// Data: (factory, token_x, token_y, fee_bps, tick_spacing, initial_tick_index)
pub fn emit_initialized(env: &Env, constants: &PoolConstants, initial_tick_index: i32) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (
            constants.factory.clone(),
            constants.token_x.clone(),
            constants.token_y.clone(),
            constants.fee_bps,
            constants.tick_spacing,
            initial_tick_index,
        ),
    );
}

/// Topics: ("PosMint", owner)
/// Data: (position_id, lower, upper, liquidity, amount_x, amount_y)
pub fn emit_position_minted(
    env: &Env,
    owner: &Address,
    position_id: u64,
    lower_tick_index: i32,
    upper_tick_index: i32,
    liquidity: u128,
    amount_x: i128,
    amount_y: i128,
) {
    env.events().publish(
        (Symbol::new(env, "PosMint"), owner.clone()),
        (
            position_id,
            lower_tick_index,
            upper_tick_index,
            liquidity,
            amount_x,
            amount_y,
        ),
    );
}

/// Topics: ("PosModify", owner)
/// Data: (position_id, liquidity_delta, net_x, net_y, closed)
pub fn emit_position_modified(
    env: &Env,
    owner: &Address,
    position_id: u64,
    liquidity_delta: i128,
    net: &TokenBalances,
    closed: bool,
) {
    env.events().publish(
        (Symbol::new(env, "PosModify"), owner.clone()),
        (position_id, liquidity_delta, net.x, net.y, closed),
    );
}

/// Topics: ("Swap", direction)
/// Data: (sender, recipient, amount_in, amount_out, cur_tick_index)
pub fn emit_swap(
    env: &Env,
    x_to_y: bool,
    sender: &Address,
    recipient: &Address,
    amount_in: i128,
    amount_out: i128,
    cur_tick_index: i32,
) {
    let direction = if x_to_y { "x_to_y" } else { "y_to_x" };
    env.events().publish(
        (Symbol::new(env, "Swap"), Symbol::new(env, direction)),
        (
            sender.clone(),
            recipient.clone(),
            amount_in,
            amount_out,
            cur_tick_index,
        ),
    );
}

/// Emitted for every tick a swap crosses
/// Topics: ("TickCross",)
/// Data: (tick_index, liquidity_after)
pub fn emit_tick_crossed(env: &Env, tick_index: i32, liquidity: u128) {
    env.events()
        .publish((Symbol::new(env, "TickCross"),), (tick_index, liquidity));
}

/// Topics: ("ObsGrow",)
/// Data: (added, reserved_length)
pub fn emit_observation_count_increased(env: &Env, added: u64, reserved_length: u64) {
    env.events()
        .publish((Symbol::new(env, "ObsGrow"),), (added, reserved_length));
}

/// Topics: ("ProtoFwd", distributor)
/// Data: (epoch, amount_x, amount_y)
pub fn emit_protocol_fee_forwarded(
    env: &Env,
    distributor: &Address,
    epoch: u64,
    amounts: &TokenBalances,
) {
    env.events().publish(
        (Symbol::new(env, "ProtoFwd"), distributor.clone()),
        (epoch, amounts.x, amounts.y),
    );
}

/// Topics: ("DevShare", dev)
/// Data: (amount_x, amount_y)
pub fn emit_dev_share_retrieved(env: &Env, dev: &Address, amounts: &TokenBalances) {
    env.events().publish(
        (Symbol::new(env, "DevShare"), dev.clone()),
        (amounts.x, amounts.y),
    );
}

/// Topics: ("Paused",)
/// Data: (swap, add_liquidity, remove_liquidity)
pub fn emit_paused(env: &Env, flags: &PauseFlags) {
    env.events().publish(
        (Symbol::new(env, "Paused"),),
        (flags.swap, flags.add_liquidity, flags.remove_liquidity),
    );
}

/// Topics: ("VeToggle",)
/// Data: is_ve
pub fn emit_protocol_share_toggled(env: &Env, is_ve: bool) {
    env.events().publish((Symbol::new(env, "VeToggle"),), is_ve);
}

/// Topics: ("PosXfer", from, to)
/// Data: position_id
pub fn emit_position_transferred(env: &Env, from: &Address, to: &Address, position_id: u64) {
    env.events().publish(
        (Symbol::new(env, "PosXfer"), from.clone(), to.clone()),
        position_id,
    );
}

/// Topics: ("Operator", owner)
/// Data: (operator, position_id, approved)
pub fn emit_operator_updated(
    env: &Env,
    owner: &Address,
    operator: &Address,
    position_id: u64,
    approved: bool,
) {
    env.events().publish(
        (Symbol::new(env, "Operator"), owner.clone()),
        (operator.clone(), position_id, approved),
    );
}
