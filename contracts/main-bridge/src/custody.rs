//! Main token movements into and out of the bridge.

use bridge_std::ensure;
use bridge_std::events::Event;
use bridge_std::ttl::extend_instance_ttl;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, BytesN, Env};

use crate::error::ContractError;
use crate::event::{DepositedEvent, StakedEvent, UnstakedEvent};
use crate::registry;
use crate::storage;
use crate::types::SideToken;

fn main_token(env: &Env) -> Result<TokenClient<'_>, ContractError> {
    let config = registry::config(env)?;

    Ok(TokenClient::new(env, &config.main_token))
}

/// Moves `amount` from `from` into custody, spending the allowance `from` granted the bridge.
fn pull(token: &TokenClient, from: &Address, amount: i128) -> Result<(), ContractError> {
    let bridge = token.env.current_contract_address();

    ensure!(
        token.allowance(from, &bridge) >= amount,
        ContractError::InsufficientAllowance
    );

    token.transfer_from(&bridge, from, &bridge, &amount);

    Ok(())
}

/// Converts a main token amount into side token units.
fn side_amount(amount: i128, side_token: &SideToken) -> Result<i128, ContractError> {
    10i128
        .checked_pow(side_token.conversion_rate_decimals)
        .and_then(|scale| {
            amount
                .checked_mul(i128::from(side_token.conversion_rate))?
                .checked_div(scale)
        })
        .ok_or(ContractError::AmountOverflow)
}

/// Main tokens held for stakers, which withdrawals cannot pay out.
pub fn total_staked(env: &Env) -> i128 {
    storage::try_total_staked(env).unwrap_or(0)
}

pub fn deposit(
    env: &Env,
    from: Address,
    side_token_id: BytesN<32>,
    amount: i128,
) -> Result<(), ContractError> {
    let token = main_token(env)?;

    ensure!(amount > 0, ContractError::InvalidAmount);

    let side_token = storage::try_side_token(env, side_token_id.clone())
        .ok_or(ContractError::SideTokenNotRegistered)?;
    let side_amount = side_amount(amount, &side_token)?;

    pull(&token, &from, amount)?;

    let nonce = storage::try_deposit_nonce(env).unwrap_or(0) + 1;
    storage::set_deposit_nonce(env, &nonce);

    DepositedEvent {
        side_token_id,
        from,
        nonce,
        amount,
        side_amount,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(())
}

pub fn stake(env: &Env, staker: Address, amount: i128) -> Result<(), ContractError> {
    let token = main_token(env)?;

    ensure!(amount > 0, ContractError::InvalidAmount);

    let staked = storage::try_stake(env, staker.clone())
        .unwrap_or(0)
        .checked_add(amount)
        .ok_or(ContractError::AmountOverflow)?;
    let total_staked = total_staked(env)
        .checked_add(amount)
        .ok_or(ContractError::AmountOverflow)?;

    pull(&token, &staker, amount)?;
    storage::set_stake(env, staker.clone(), &staked);
    storage::set_total_staked(env, &total_staked);

    StakedEvent { staker, amount }.emit(env);

    Ok(())
}

pub fn unstake(env: &Env, staker: Address, amount: i128) -> Result<(), ContractError> {
    let token = main_token(env)?;

    ensure!(amount > 0, ContractError::InvalidAmount);

    let staked = storage::try_stake(env, staker.clone()).unwrap_or(0);
    ensure!(staked >= amount, ContractError::InsufficientStake);

    storage::set_stake(env, staker.clone(), &(staked - amount));
    storage::set_total_staked(env, &(total_staked(env) - amount));
    token.transfer(&env.current_contract_address(), &staker, &amount);

    UnstakedEvent { staker, amount }.emit(env);

    Ok(())
}
