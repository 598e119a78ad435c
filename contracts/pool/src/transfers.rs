// Token movement for both kinds of pair legs

use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol};

use crate::types::TokenRef;

/// Move `amount` of `token` from `from` to `to`. Non-positive amounts are skipped.
pub fn transfer(env: &Env, token: &TokenRef, from: &Address, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    match token {
        TokenRef::Asset(address) => {
            token::Client::new(env, address).transfer(from, to, &amount);
        }
        TokenRef::MultiAsset(address, token_id) => {
            env.invoke_contract::<()>(
                address,
                &Symbol::new(env, "transfer"),
                vec![
                    env,
                    from.into_val(env),
                    to.into_val(env),
                    token_id.into_val(env),
                    amount.into_val(env),
                ],
            );
        }
    }
}

/// Pull from a user into the pool
pub fn pull(env: &Env, token: &TokenRef, from: &Address, amount: i128) {
    transfer(env, token, from, &env.current_contract_address(), amount);
}

/// Pay from the pool to a user
pub fn pay(env: &Env, token: &TokenRef, to: &Address, amount: i128) {
    transfer(env, token, &env.current_contract_address(), to, amount);
}
