//! Withdrawals and authority rotation, both gated by authority signatures.

use bridge_std::ensure;
use bridge_std::events::Event;
use bridge_std::ttl::extend_instance_ttl;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::error::ContractError;
use crate::event::{
    AuthorityChangeConfirmedEvent, AuthorityChangeRequestedEvent, AuthorityChangedEvent,
    WithdrawCompletedEvent, WithdrawSignedEvent,
};
use crate::types::{AuthorityChange, Redemption};
use crate::{custody, id, registry, storage};

/// Counts the current authorities for which `signed` holds.
///
/// Confirmations of replaced authorities stay in storage but no longer count.
fn current_signatures(authorities: &Vec<Address>, signed: impl Fn(Address) -> bool) -> u32 {
    authorities.iter().filter(|authority| signed(authority.clone())).count() as u32
}

/// Counts the authority slots holding a signature for `redeem_id`.
///
/// A slot keeps its signature when its authority is replaced.
fn slot_signatures(env: &Env, authorities: &Vec<Address>, redeem_id: &BytesN<32>) -> u32 {
    (0..authorities.len())
        .filter(|slot| storage::try_redemption_signature(env, redeem_id.clone(), *slot).is_some())
        .count() as u32
}

/// Finds the slot whose stored signer is `authority`.
pub fn signed_slot(env: &Env, redeem_id: &BytesN<32>, authority: &Address) -> Option<u32> {
    (0..registry::authorities(env).len()).find(|slot| {
        storage::try_redemption_signature(env, redeem_id.clone(), *slot).as_ref() == Some(authority)
    })
}

fn ensure_authority(authorities: &Vec<Address>, caller: &Address) -> Result<(), ContractError> {
    ensure!(authorities.contains(caller), ContractError::NotAuthority);

    Ok(())
}

pub fn withdraw(
    env: &Env,
    caller: Address,
    redeem_id: BytesN<32>,
    redemption: Redemption,
) -> Result<(), ContractError> {
    caller.require_auth();

    let config = registry::config(env)?;
    let side_bridge = registry::side_bridge(env)?;
    let authorities = registry::authorities(env);

    ensure_authority(&authorities, &caller)?;
    ensure!(redemption.amount > 0, ContractError::InvalidAmount);
    ensure!(
        storage::try_side_token(env, redemption.side_token_id.clone()).is_some(),
        ContractError::SideTokenNotRegistered
    );
    ensure!(
        id::redeem_id(
            env,
            &redemption.side_token_id,
            &redemption.beneficiary,
            redemption.amount,
            &redemption.peer_tx_hash,
        ) == redeem_id,
        ContractError::InvalidRedeemId
    );

    let mut redemption = storage::try_redemption(env, redeem_id.clone()).unwrap_or(redemption);

    ensure!(!redemption.completed, ContractError::AlreadyCompleted);

    let slot = authorities
        .first_index_of(&caller)
        .ok_or(ContractError::NotAuthority)?;

    match storage::try_redemption_signature(env, redeem_id.clone(), slot) {
        Some(signer) if signer == caller => return Ok(()),
        Some(_) => return Err(ContractError::SignatureSlotTaken),
        None => storage::set_redemption_signature(env, redeem_id.clone(), slot, &caller),
    }

    let signatures = slot_signatures(env, &authorities, &redeem_id);

    WithdrawSignedEvent {
        redeem_id: redeem_id.clone(),
        authority: caller,
        side_token_id: redemption.side_token_id.clone(),
        beneficiary: redemption.beneficiary.clone(),
        amount: redemption.amount,
        peer_tx_hash: redemption.peer_tx_hash.clone(),
        signatures,
    }
    .emit(env);

    if signatures >= side_bridge.required_signatures {
        let token = TokenClient::new(env, &config.main_token);
        let bridge = env.current_contract_address();

        let available = token
            .balance(&bridge)
            .saturating_sub(custody::total_staked(env));
        ensure!(
            available >= redemption.amount,
            ContractError::InsufficientBalance
        );

        redemption.completed = true;
        storage::set_redemption(env, redeem_id.clone(), &redemption);

        token.transfer(&bridge, &redemption.beneficiary, &redemption.amount);

        WithdrawCompletedEvent {
            redeem_id,
            beneficiary: redemption.beneficiary,
            side_token_id: redemption.side_token_id,
            amount: redemption.amount,
            peer_tx_hash: redemption.peer_tx_hash,
        }
        .emit(env);
    } else {
        storage::set_redemption(env, redeem_id, &redemption);
    }

    extend_instance_ttl(env);

    Ok(())
}

pub fn request_change(
    env: &Env,
    caller: Address,
    old_authority: Address,
    new_authority: Address,
) -> Result<BytesN<32>, ContractError> {
    caller.require_auth();

    registry::config(env)?;
    registry::side_bridge(env)?;
    let authorities = registry::authorities(env);

    ensure_authority(&authorities, &old_authority)?;
    ensure!(
        !authorities.contains(&new_authority),
        ContractError::AuthorityAlreadyExists
    );

    let nonce = storage::try_authority_change_nonce(env).unwrap_or(0) + 1;
    storage::set_authority_change_nonce(env, &nonce);

    let change_id = id::authority_change_id(env, &old_authority, &new_authority, nonce);

    storage::set_authority_change(
        env,
        change_id.clone(),
        &AuthorityChange {
            old_authority: old_authority.clone(),
            new_authority: new_authority.clone(),
            nonce,
            executed: false,
        },
    );

    AuthorityChangeRequestedEvent {
        change_id: change_id.clone(),
        requester: caller,
        old_authority,
        new_authority,
        nonce,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(change_id)
}

pub fn confirm_change(
    env: &Env,
    caller: Address,
    change_id: BytesN<32>,
    old_authority: Address,
    new_authority: Address,
) -> Result<(), ContractError> {
    caller.require_auth();

    registry::config(env)?;
    let side_bridge = registry::side_bridge(env)?;
    let mut authorities = registry::authorities(env);

    ensure_authority(&authorities, &caller)?;

    let mut change = storage::try_authority_change(env, change_id.clone())
        .ok_or(ContractError::UnknownChangeRequest)?;

    ensure!(
        id::authority_change_id(env, &old_authority, &new_authority, change.nonce) == change_id,
        ContractError::InvalidChangeId
    );
    ensure!(!change.executed, ContractError::ChangeAlreadyExecuted);

    if storage::is_authority_change_confirmation(env, change_id.clone(), caller.clone()) {
        return Ok(());
    }

    storage::set_authority_change_confirmation_status(env, change_id.clone(), caller.clone());

    let confirmations = current_signatures(&authorities, |authority| {
        storage::is_authority_change_confirmation(env, change_id.clone(), authority)
    });

    AuthorityChangeConfirmedEvent {
        change_id: change_id.clone(),
        authority: caller,
        confirmations,
    }
    .emit(env);

    if confirmations >= side_bridge.required_signatures {
        let idx = authorities
            .first_index_of(&old_authority)
            .ok_or(ContractError::NotAuthority)?;
        ensure!(
            !authorities.contains(&new_authority),
            ContractError::AuthorityAlreadyExists
        );

        authorities.set(idx, new_authority.clone());
        storage::set_authorities(env, &authorities);

        change.executed = true;
        storage::set_authority_change(env, change_id.clone(), &change);

        AuthorityChangedEvent {
            change_id,
            old_authority,
            new_authority,
        }
        .emit(env);
    }

    extend_instance_ttl(env);

    Ok(())
}
