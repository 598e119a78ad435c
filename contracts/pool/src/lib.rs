#![no_std]

use soroban_sdk::{contract, contractimpl, vec, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

// External packages
use cfmm_math::{
    amounts_for_liquidity, sqrt_price_at_tick, to_amount, CfmmError, BPS_DENOMINATOR, MIN_TICK,
};
use cfmm_oracle::{
    current_cumulatives, increase_observation_count, init_buffer, observe,
    update_timed_cumulatives,
};
use cfmm_position::validate_position_params;
use cfmm_swap::SwapConfig;
use cfmm_tick::{
    cumulatives_inside, fee_growth_inside, init_sentinels, insert_with_witness, is_valid_tick,
    update_tick, Accumulators,
};

// Local modules
mod events;
mod storage;
mod transfers;
pub mod types;

use events::*;
use storage::*;
use transfers::{pay, pull};
use types::{
    BalanceRequest, BalanceResponse, BufferMeta, CumulativesInside, CumulativesValue, FeeGrowth,
    MintPositionParams, ModifyPositionParams, OperatorUpdate, PauseFlags, PoolConstants,
    PoolState, PositionInfo, PositionState, SwapResult, TickState, TimedCumulatives,
    TokenBalances, TokenRef, TransferBatch,
};

#[contract]
pub struct CfmmPool;

#[contractimpl]
impl CfmmPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pool
    ///
    /// # Arguments
    /// * `factory` - Registry that resolves fee shares and admin roles
    /// * `token_x` - First leg of the pair
    /// * `token_y` - Second leg of the pair
    /// * `fee_bps` - Swap fee in basis points
    /// * `tick_spacing` - Positions must start and end on multiples of this
    /// * `initial_tick_index` - Starting price tick
    /// * `extra_slots` - Oracle slots to reserve beyond the first one
    pub fn initialize(
        env: Env,
        factory: Address,
        token_x: TokenRef,
        token_y: TokenRef,
        fee_bps: u32,
        tick_spacing: u32,
        initial_tick_index: i32,
        extra_slots: u64,
    ) -> Result<(), CfmmError> {
        factory.require_auth();

        if is_initialized(&env) {
            return Err(CfmmError::AlreadyInitialized);
        }
        if fee_bps > BPS_DENOMINATOR {
            return Err(CfmmError::FeeRateTooHigh);
        }
        if tick_spacing == 0 {
            return Err(CfmmError::IncorrectTickSpacing);
        }
        if !is_valid_tick(initial_tick_index) {
            return Err(CfmmError::TickOutOfRange);
        }

        let constants = PoolConstants {
            factory,
            token_x,
            token_y,
            fee_bps,
            tick_spacing,
        };

        let state = PoolState {
            liquidity: 0,
            sqrt_price: sqrt_price_at_tick(&env, initial_tick_index),
            cur_tick_index: initial_tick_index,
            cur_tick_witness: MIN_TICK,
            fee_growth: FeeGrowth::zero(&env),
            dev_share: TokenBalances::default(),
            protocol_share: TokenBalances::default(),
            new_position_id: 0,
            is_ve: false,
        };

        init_sentinels(&env, &TickStore);
        init_buffer(&env, &BufferStore, extra_slots);

        write_constants(&env, &constants);
        write_state(&env, &state);
        write_paused(&env, &PauseFlags::default());
        set_initialized(&env);

        emit_initialized(&env, &constants, initial_tick_index);
        Ok(())
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Open a position over `[lower, upper)`.
    ///
    /// Returns the new position id, or `None` when `liquidity` is zero.
    pub fn mint_position(
        env: Env,
        owner: Address,
        params: MintPositionParams,
    ) -> Result<Option<u64>, CfmmError> {
        owner.require_auth();

        let constants = read_constants(&env)?;
        let mut state = read_state(&env)?;

        check_deadline(&env, params.deadline)?;
        if read_paused(&env).add_liquidity {
            return Err(CfmmError::Paused);
        }
        update_oracle(&env, &state)?;

        let lower = params.lower_tick_index;
        let upper = params.upper_tick_index;
        validate_position_params(lower, upper, constants.tick_spacing)?;

        if params.liquidity == 0 {
            return Ok(None);
        }
        let liquidity_delta =
            i128::try_from(params.liquidity).map_err(|_| CfmmError::Overflow)?;

        let globals = accumulators(&env, &state)?;
        insert_with_witness(
            &env,
            &TickStore,
            lower,
            params.lower_tick_witness,
            state.cur_tick_index,
            &globals,
        )?;
        insert_with_witness(
            &env,
            &TickStore,
            upper,
            params.upper_tick_witness,
            state.cur_tick_index,
            &globals,
        )?;

        let inside = fee_growth_inside(
            &env,
            &TickStore,
            lower,
            upper,
            state.cur_tick_index,
            &state.fee_growth,
        )?;

        update_tick(&env, &TickStore, lower, liquidity_delta, 1, &mut state.cur_tick_witness)?;
        update_tick(&env, &TickStore, upper, -liquidity_delta, 1, &mut state.cur_tick_witness)?;

        if lower <= state.cur_tick_index && state.cur_tick_index < upper {
            state.liquidity = state
                .liquidity
                .checked_add(params.liquidity)
                .ok_or(CfmmError::Overflow)?;
        }

        // A new bound at or below the price may now be the closest initialized tick
        for bound in [lower, upper] {
            if bound <= state.cur_tick_index && bound > state.cur_tick_witness {
                state.cur_tick_witness = bound;
            }
        }

        let (amount_x, amount_y) = amounts_for_liquidity(
            &env,
            params.liquidity,
            &state.sqrt_price,
            &sqrt_price_at_tick(&env, lower),
            &sqrt_price_at_tick(&env, upper),
            true,
        );
        let amount_x = to_amount(&amount_x)?;
        let amount_y = to_amount(&amount_y)?;

        if amount_x > params.maximum_tokens_contributed.x
            || amount_y > params.maximum_tokens_contributed.y
        {
            return Err(CfmmError::HighTokens);
        }

        let position_id = state.new_position_id;
        state.new_position_id = position_id.checked_add(1).ok_or(CfmmError::Overflow)?;

        write_position(
            &env,
            position_id,
            &PositionState {
                lower_tick_index: lower,
                upper_tick_index: upper,
                liquidity: params.liquidity,
                fee_growth_inside_last: inside,
            },
        );
        write_owner(&env, position_id, &owner);
        write_state(&env, &state);

        pull(&env, &constants.token_x, &owner, amount_x);
        pull(&env, &constants.token_y, &owner, amount_y);

        emit_position_minted(
            &env,
            &owner,
            position_id,
            lower,
            upper,
            params.liquidity,
            amount_x,
            amount_y,
        );

        Ok(Some(position_id))
    }

    /// Add or remove liquidity and settle accrued fees.
    ///
    /// Returns the net amounts per asset: positive was paid into the pool,
    /// negative was paid out to `to_x` / `to_y`. A position brought to zero
    /// liquidity is deleted together with its ledger entry.
    ///
    /// Anyone may add liquidity to a position and pays for it; only the
    /// owner may remove. When the caller is not the owner, payouts go to the
    /// owner whatever `to_x` / `to_y` say.
    pub fn modify_position(
        env: Env,
        caller: Address,
        params: ModifyPositionParams,
    ) -> Result<TokenBalances, CfmmError> {
        caller.require_auth();

        let constants = read_constants(&env)?;
        let mut state = read_state(&env)?;

        check_deadline(&env, params.deadline)?;
        let delta = params.liquidity_delta;
        let paused = read_paused(&env);
        if (delta > 0 && paused.add_liquidity) || (delta < 0 && paused.remove_liquidity) {
            return Err(CfmmError::Paused);
        }
        update_oracle(&env, &state)?;

        let id = params.position_id;
        let mut position = read_position(&env, id).ok_or(CfmmError::Fa2TokenUndefined)?;
        let owner = read_owner(&env, id).ok_or(CfmmError::Fa2TokenUndefined)?;
        let is_owner = caller == owner;
        if delta < 0 && !is_owner {
            return Err(CfmmError::NotAuthorized);
        }

        let lower = position.lower_tick_index;
        let upper = position.upper_tick_index;

        let inside = fee_growth_inside(
            &env,
            &TickStore,
            lower,
            upper,
            state.cur_tick_index,
            &state.fee_growth,
        )?;
        let fees = cfmm_position::modify_position(&env, &mut position, delta, &inside)?;
        let closed = position.liquidity == 0;

        if delta != 0 {
            let positions_delta = if closed { -1 } else { 0 };
            let upper_delta = delta.checked_neg().ok_or(CfmmError::Overflow)?;
            update_tick(&env, &TickStore, lower, delta, positions_delta, &mut state.cur_tick_witness)?;
            update_tick(&env, &TickStore, upper, upper_delta, positions_delta, &mut state.cur_tick_witness)?;

            if lower <= state.cur_tick_index && state.cur_tick_index < upper {
                state.liquidity = state
                    .liquidity
                    .checked_add_signed(delta)
                    .ok_or(CfmmError::Overflow)?;
            }
        }

        // Deposits round up, withdrawals round down
        let (principal_x, principal_y) = amounts_for_liquidity(
            &env,
            delta.unsigned_abs(),
            &state.sqrt_price,
            &sqrt_price_at_tick(&env, lower),
            &sqrt_price_at_tick(&env, upper),
            delta > 0,
        );
        let sign = if delta < 0 { -1 } else { 1 };
        let net = TokenBalances {
            x: net_amount(to_amount(&principal_x)? * sign, fees.x)?,
            y: net_amount(to_amount(&principal_y)? * sign, fees.y)?,
        };

        if net.x > params.maximum_tokens_contributed.x
            || net.y > params.maximum_tokens_contributed.y
        {
            return Err(CfmmError::HighTokens);
        }

        if closed {
            remove_position(&env, id);
        } else {
            write_position(&env, id, &position);
        }
        write_state(&env, &state);

        // Fees settled on someone else's position belong to its owner
        let (to_x, to_y) = if is_owner {
            (params.to_x, params.to_y)
        } else {
            (owner.clone(), owner.clone())
        };
        settle(&env, &constants.token_x, &caller, &to_x, net.x);
        settle(&env, &constants.token_y, &caller, &to_y, net.y);

        emit_position_modified(&env, &owner, id, delta, &net, closed);

        Ok(net)
    }

    // ========================================================
    // SWAP FUNCTIONS
    // ========================================================

    /// Sell `dx` of token x for token y, paid to `to_dy`.
    ///
    /// Only the input actually consumed is pulled from `sender`; a swap that
    /// runs out of liquidity fills partially.
    pub fn swap_x_to_y(
        env: Env,
        sender: Address,
        dx: i128,
        deadline: u64,
        min_dy: i128,
        to_dy: Address,
    ) -> Result<SwapResult, CfmmError> {
        Self::swap(&env, true, sender, dx, deadline, min_dy, to_dy)
    }

    /// Sell `dy` of token y for token x, paid to `to_dx`.
    pub fn swap_y_to_x(
        env: Env,
        sender: Address,
        dy: i128,
        deadline: u64,
        min_dx: i128,
        to_dx: Address,
    ) -> Result<SwapResult, CfmmError> {
        Self::swap(&env, false, sender, dy, deadline, min_dx, to_dx)
    }

    // ========================================================
    // FEE / ADMIN SETTLEMENT
    // ========================================================

    /// Send the accumulated protocol share to the fee distributor for `epoch`.
    /// Callable by the factory's voter only.
    pub fn forward_protocol_fee(
        env: Env,
        caller: Address,
        fee_distributor: Address,
        epoch: u64,
    ) -> Result<TokenBalances, CfmmError> {
        caller.require_auth();

        let constants = read_constants(&env)?;
        let voter: Address = query_factory(&env, &constants.factory, "get_voter");
        if caller != voter {
            return Err(CfmmError::NotAuthorized);
        }

        let mut state = read_state(&env)?;
        let amounts = state.protocol_share.clone();
        state.protocol_share = TokenBalances::default();
        write_state(&env, &state);

        let mut fees: Vec<(TokenRef, i128)> = Vec::new(&env);
        if amounts.x > 0 {
            pay(&env, &constants.token_x, &fee_distributor, amounts.x);
            fees.push_back((constants.token_x.clone(), amounts.x));
        }
        if amounts.y > 0 {
            pay(&env, &constants.token_y, &fee_distributor, amounts.y);
            fees.push_back((constants.token_y.clone(), amounts.y));
        }

        env.invoke_contract::<()>(
            &fee_distributor,
            &Symbol::new(&env, "add_fees"),
            vec![&env, epoch.into_val(&env), fees.into_val(&env)],
        );

        emit_protocol_fee_forwarded(&env, &fee_distributor, epoch, &amounts);
        Ok(amounts)
    }

    /// Pay the accumulated dev share to the factory's dev address
    pub fn retrieve_dev_share(env: Env, caller: Address) -> Result<TokenBalances, CfmmError> {
        caller.require_auth();

        let constants = read_constants(&env)?;
        let dev: Address = query_factory(&env, &constants.factory, "get_dev_address");
        if caller != dev {
            return Err(CfmmError::NotAuthorized);
        }

        let mut state = read_state(&env)?;
        let amounts = state.dev_share.clone();
        state.dev_share = TokenBalances::default();
        write_state(&env, &state);

        pay(&env, &constants.token_x, &dev, amounts.x);
        pay(&env, &constants.token_y, &dev, amounts.y);

        emit_dev_share_retrieved(&env, &dev, &amounts);
        Ok(amounts)
    }

    /// Overwrite all pause flags. Factory only.
    pub fn pause(env: Env, caller: Address, flags: PauseFlags) -> Result<(), CfmmError> {
        require_factory(&env, &caller)?;
        write_paused(&env, &flags);
        emit_paused(&env, &flags);
        Ok(())
    }

    /// Flip vote-escrow mode. Factory only. Returns the new mode.
    pub fn toggle_protocol_share(env: Env, caller: Address) -> Result<bool, CfmmError> {
        require_factory(&env, &caller)?;

        let mut state = read_state(&env)?;
        state.is_ve = !state.is_ve;
        write_state(&env, &state);

        emit_protocol_share_toggled(&env, state.is_ve);
        Ok(state.is_ve)
    }

    // ========================================================
    // POSITION TOKEN LEDGER
    // ========================================================

    /// Move position ownership. Each position has a supply of one.
    pub fn transfer(env: Env, caller: Address, batches: Vec<TransferBatch>) -> Result<(), CfmmError> {
        caller.require_auth();

        for batch in batches.iter() {
            for tx in batch.txs.iter() {
                let owner = read_owner(&env, tx.token_id).ok_or(CfmmError::Fa2TokenUndefined)?;

                if caller != batch.from && !is_operator(&env, tx.token_id, &batch.from, &caller) {
                    return Err(CfmmError::Fa2NotOperator);
                }
                if tx.amount > 1 || (tx.amount == 1 && owner != batch.from) {
                    return Err(CfmmError::Fa2InsufficientBalance);
                }

                if tx.amount == 1 {
                    write_owner(&env, tx.token_id, &tx.to);
                    emit_position_transferred(&env, &batch.from, &tx.to, tx.token_id);
                }
            }
        }

        Ok(())
    }

    /// 1 for each request whose owner holds the position, 0 otherwise
    pub fn balance_of(
        env: Env,
        requests: Vec<BalanceRequest>,
    ) -> Result<Vec<BalanceResponse>, CfmmError> {
        let mut responses = Vec::new(&env);
        for request in requests.iter() {
            let owner =
                read_owner(&env, request.token_id).ok_or(CfmmError::Fa2TokenUndefined)?;
            let balance = if owner == request.owner { 1 } else { 0 };
            responses.push_back(BalanceResponse { request, balance });
        }
        Ok(responses)
    }

    /// Add or remove operators. Every update must be for the caller's own approvals.
    pub fn update_operators(
        env: Env,
        caller: Address,
        updates: Vec<OperatorUpdate>,
    ) -> Result<(), CfmmError> {
        caller.require_auth();

        for update in updates.iter() {
            let (param, approved) = match update {
                OperatorUpdate::Add(param) => (param, true),
                OperatorUpdate::Remove(param) => (param, false),
            };
            if param.owner != caller {
                return Err(CfmmError::Fa2NotOwner);
            }

            let mut operators = read_operators(&env, param.token_id);
            let pair = (param.owner.clone(), param.operator.clone());
            let existing = operators.first_index_of(&pair);
            match (approved, existing) {
                (true, None) => operators.push_back(pair),
                (false, Some(index)) => {
                    operators.remove(index);
                }
                _ => {}
            }
            write_operators(&env, param.token_id, &operators);

            emit_operator_updated(&env, &param.owner, &param.operator, param.token_id, approved);
        }

        Ok(())
    }

    pub fn get_position_info(env: Env, position_id: u64) -> Result<PositionInfo, CfmmError> {
        let position = read_position(&env, position_id).ok_or(CfmmError::Fa2TokenUndefined)?;
        let owner = read_owner(&env, position_id).ok_or(CfmmError::Fa2TokenUndefined)?;
        Ok(PositionInfo {
            owner,
            lower_tick_index: position.lower_tick_index,
            upper_tick_index: position.upper_tick_index,
            liquidity: position.liquidity,
        })
    }

    // ========================================================
    // ORACLE
    // ========================================================

    /// Cumulative tick and seconds-per-liquidity sums at each timestamp
    pub fn observe(env: Env, timestamps: Vec<u64>) -> Result<Vec<CumulativesValue>, CfmmError> {
        let state = read_state(&env)?;
        observe(
            &env,
            &BufferStore,
            now(&env),
            state.cur_tick_index,
            state.liquidity,
            &timestamps,
        )
    }

    /// Cumulatives accumulated while the price was inside `[lower, upper)`.
    /// Both bounds must be initialized ticks.
    pub fn snapshot_cumulatives_inside(
        env: Env,
        lower_tick_index: i32,
        upper_tick_index: i32,
    ) -> Result<CumulativesInside, CfmmError> {
        let state = read_state(&env)?;
        let globals = accumulators(&env, &state)?;
        cumulatives_inside(
            &env,
            &TickStore,
            lower_tick_index,
            upper_tick_index,
            state.cur_tick_index,
            &globals,
        )
    }

    /// Reserve `added` more oracle slots. Open to anyone; the caller pays
    /// for the storage. Returns the new reserved length.
    pub fn increase_observation_count(env: Env, added: u64) -> Result<u64, CfmmError> {
        let state = read_state(&env)?;
        update_oracle(&env, &state)?;
        let reserved_length = increase_observation_count(&env, &BufferStore, added)?;
        emit_observation_count_increased(&env, added, reserved_length);
        Ok(reserved_length)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn get_pool_state(env: Env) -> Result<PoolState, CfmmError> {
        read_state(&env)
    }

    pub fn get_constants(env: Env) -> Result<PoolConstants, CfmmError> {
        read_constants(&env)
    }

    pub fn get_paused(env: Env) -> PauseFlags {
        read_paused(&env)
    }

    pub fn get_tick(env: Env, tick_index: i32) -> Option<TickState> {
        cfmm_tick::TickStorage::read_tick(&TickStore, &env, tick_index)
    }

    pub fn get_position(env: Env, position_id: u64) -> Option<PositionState> {
        read_position(&env, position_id)
    }

    pub fn get_cumulatives_buffer(env: Env) -> Result<BufferMeta, CfmmError> {
        cfmm_oracle::CumulativesStorage::read_meta(&BufferStore, &env)
            .ok_or(CfmmError::NotInitialized)
    }

    pub fn get_buffer_slot(env: Env, slot_id: u64) -> Option<TimedCumulatives> {
        cfmm_oracle::CumulativesStorage::read_slot(&BufferStore, &env, slot_id)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Shared body of both swap directions
    fn swap(
        env: &Env,
        x_to_y: bool,
        sender: Address,
        amount: i128,
        deadline: u64,
        min_out: i128,
        recipient: Address,
    ) -> Result<SwapResult, CfmmError> {
        sender.require_auth();

        let constants = read_constants(env)?;
        let mut state = read_state(env)?;

        check_deadline(env, deadline)?;
        if read_paused(env).swap {
            return Err(CfmmError::Paused);
        }
        update_oracle(env, &state)?;

        let config = swap_config(env, &constants, &state)?;
        let oracle = accumulators(env, &state)?;
        let mut swap_state = state.swap_state();

        let outcome = if x_to_y {
            cfmm_swap::swap_x_to_y(env, &TickStore, &mut swap_state, &config, &oracle, amount, emit_tick_crossed)?
        } else {
            cfmm_swap::swap_y_to_x(env, &TickStore, &mut swap_state, &config, &oracle, amount, emit_tick_crossed)?
        };

        if outcome.amount_out < min_out {
            return Err(CfmmError::SmallerThanMinAsset);
        }

        state.absorb(swap_state);
        write_state(env, &state);

        let (token_in, token_out) = if x_to_y {
            (&constants.token_x, &constants.token_y)
        } else {
            (&constants.token_y, &constants.token_x)
        };
        pull(env, token_in, &sender, outcome.amount_in);
        pay(env, token_out, &recipient, outcome.amount_out);

        emit_swap(
            env,
            x_to_y,
            &sender,
            &recipient,
            outcome.amount_in,
            outcome.amount_out,
            state.cur_tick_index,
        );

        Ok(SwapResult {
            amount_in: outcome.amount_in,
            amount_out: outcome.amount_out,
            sqrt_price: state.sqrt_price,
            cur_tick_index: state.cur_tick_index,
        })
    }
}

// ========================================================
// HELPER FUNCTIONS
// ========================================================

#[inline]
fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

fn check_deadline(env: &Env, deadline: u64) -> Result<(), CfmmError> {
    if now(env) > deadline {
        return Err(CfmmError::PastDeadline);
    }
    Ok(())
}

/// Record the cumulatives up to now before the state changes
fn update_oracle(env: &Env, state: &PoolState) -> Result<(), CfmmError> {
    update_timed_cumulatives(
        env,
        &BufferStore,
        now(env),
        state.cur_tick_index,
        state.liquidity,
    )
}

/// Global accumulators as of now
fn accumulators(env: &Env, state: &PoolState) -> Result<Accumulators, CfmmError> {
    let current = current_cumulatives(
        env,
        &BufferStore,
        now(env),
        state.cur_tick_index,
        state.liquidity,
    )?;
    Ok(Accumulators {
        now: now(env),
        tick_cumulative: current.tick_cumulative,
        seconds_per_liquidity: current.spl_cumulative,
        fee_growth: state.fee_growth.clone(),
    })
}

fn query_factory<T: TryFromVal<Env, Val>>(env: &Env, factory: &Address, name: &str) -> T {
    env.invoke_contract::<T>(factory, &Symbol::new(env, name), Vec::new(env))
}

fn swap_config(
    env: &Env,
    constants: &PoolConstants,
    state: &PoolState,
) -> Result<SwapConfig, CfmmError> {
    if constants.fee_bps > BPS_DENOMINATOR {
        return Err(CfmmError::FeeRateTooHigh);
    }

    let dev_bps: u32 = query_factory(env, &constants.factory, "get_dev_share");
    let protocol_bps: u32 = query_factory(env, &constants.factory, "get_protocol_share");
    if dev_bps as u64 + protocol_bps as u64 > BPS_DENOMINATOR as u64 {
        return Err(CfmmError::SharesExceedFee);
    }

    Ok(SwapConfig {
        fee_bps: constants.fee_bps,
        dev_bps,
        protocol_bps,
        is_ve: state.is_ve,
    })
}

fn require_factory(env: &Env, caller: &Address) -> Result<(), CfmmError> {
    caller.require_auth();
    let constants = read_constants(env)?;
    if *caller != constants.factory {
        return Err(CfmmError::NotAuthorized);
    }
    Ok(())
}

fn is_operator(env: &Env, position_id: u64, owner: &Address, operator: &Address) -> bool {
    read_operators(env, position_id).contains(&(owner.clone(), operator.clone()))
}

/// Principal minus settled fees
fn net_amount(principal: i128, fees: i128) -> Result<i128, CfmmError> {
    principal.checked_sub(fees).ok_or(CfmmError::Overflow)
}

/// Positive nets are pulled from `payer`, negative ones paid to `receiver`
fn settle(env: &Env, token: &TokenRef, payer: &Address, receiver: &Address, net: i128) {
    if net > 0 {
        pull(env, token, payer, net);
    } else if net < 0 {
        pay(env, token, receiver, -net);
    }
}
