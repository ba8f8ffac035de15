use bridge_std::events::last_emitted_event;
use bridge_std::interfaces::{PausedEvent, UnpausedEvent};
use bridge_std::{assert_auth, assert_contract_err};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, String};

use super::utils::{
    generate_authorities, peer, register_side_bridge, setup_env, setup_side_token, side_token_id,
    CONVERSION_RATE, CONVERSION_RATE_DECIMALS, PEER_CHAIN_ID, SIDE_TOKEN_NAME, SIDE_TOKEN_SYMBOL,
};
use crate::error::ContractError;

#[test]
fn owner_pauses_and_resumes() {
    let (env, bridge) = setup_env();
    let client = &bridge.client;

    assert!(!client.paused());

    assert_auth!(bridge.owner, client.pause_bridge(&bridge.owner));
    assert!(client.paused());
    assert_eq!(last_emitted_event::<PausedEvent>(&env), PausedEvent {});

    assert_auth!(bridge.owner, client.resume_bridge(&bridge.owner));
    assert!(!client.paused());
    assert_eq!(last_emitted_event::<UnpausedEvent>(&env), UnpausedEvent {});
}

#[test]
fn main_admin_pauses_and_resumes() {
    let (_env, bridge) = setup_env();
    let client = &bridge.client;

    assert_auth!(bridge.main_admin, client.pause_bridge(&bridge.main_admin));
    assert!(client.paused());

    assert_auth!(bridge.main_admin, client.resume_bridge(&bridge.main_admin));
    assert!(!client.paused());
}

#[test]
fn pause_fails_for_other_callers() {
    let (env, bridge) = setup_env();
    let stranger = Address::generate(&env);

    assert_contract_err!(
        bridge.client.try_pause_bridge(&stranger),
        ContractError::NotPauser
    );

    bridge.client.pause_bridge(&bridge.owner);

    assert_contract_err!(
        bridge.client.try_resume_bridge(&stranger),
        ContractError::NotPauser
    );
    assert!(bridge.client.paused());
}

#[test]
fn pause_fails_when_already_paused() {
    let (_env, bridge) = setup_env();

    bridge.client.pause_bridge(&bridge.owner);

    assert_contract_err!(
        bridge.client.try_pause_bridge(&bridge.main_admin),
        ContractError::AlreadyPaused
    );
}

#[test]
fn resume_fails_when_not_paused() {
    let (_env, bridge) = setup_env();

    assert_contract_err!(
        bridge.client.try_resume_bridge(&bridge.owner),
        ContractError::NotPaused
    );
}

#[test]
fn side_bridge_registration_fails_while_paused() {
    let (env, bridge) = setup_env();
    let authorities = generate_authorities(&env, 3);

    bridge.client.pause_bridge(&bridge.owner);

    assert_contract_err!(
        bridge
            .client
            .try_register_side_bridge(&peer(&env), &2, &authorities),
        ContractError::BridgePaused
    );
}

#[test]
fn side_token_registration_fails_while_paused() {
    let (env, bridge) = setup_env();
    register_side_bridge(&env, &bridge, 3, 2);
    let id = side_token_id(&env, &bridge);

    bridge.client.pause_bridge(&bridge.owner);

    assert_contract_err!(
        bridge.client.try_register_side_token(
            &PEER_CHAIN_ID,
            &String::from_str(&env, SIDE_TOKEN_NAME),
            &String::from_str(&env, SIDE_TOKEN_SYMBOL),
            &CONVERSION_RATE,
            &CONVERSION_RATE_DECIMALS,
            &id,
        ),
        ContractError::BridgePaused
    );
}

#[test]
fn custody_operations_fail_while_paused() {
    let (env, bridge) = setup_env();
    let (_, id) = setup_side_token(&env, &bridge, 3, 2);
    let user = Address::generate(&env);
    bridge.fund(&user, 1_000);
    bridge.client.stake(&user, &100);

    bridge.client.pause_bridge(&bridge.main_admin);

    assert_contract_err!(
        bridge.client.try_deposit(&user, &id, &100),
        ContractError::BridgePaused
    );
    assert_contract_err!(
        bridge.client.try_owner_deposit(&user, &id, &100),
        ContractError::BridgePaused
    );
    assert_contract_err!(
        bridge.client.try_stake(&user, &100),
        ContractError::BridgePaused
    );
    assert_contract_err!(
        bridge.client.try_unstake(&user, &100),
        ContractError::BridgePaused
    );

    bridge.client.resume_bridge(&bridge.main_admin);

    bridge.client.deposit(&user, &id, &100);
    assert_eq!(bridge.client.deposit_nonce(), 1);
}

#[test]
fn authority_operations_fail_while_paused() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    let authority = authorities.get(0).unwrap();
    let beneficiary = Address::generate(&env);
    let peer_tx_hash = BytesN::from_array(&env, &[7; 32]);
    let redeem_id = bridge
        .client
        .redeem_id(&id, &beneficiary, &100, &peer_tx_hash);
    let new_authority = Address::generate(&env);

    bridge.client.pause_bridge(&bridge.owner);

    assert_contract_err!(
        bridge.client.try_withdraw(
            &authority,
            &redeem_id,
            &id,
            &beneficiary,
            &100,
            &peer_tx_hash
        ),
        ContractError::BridgePaused
    );
    assert_contract_err!(
        bridge
            .client
            .try_change_authority_request(&authority, &authority, &new_authority),
        ContractError::BridgePaused
    );

    let change_id = bridge
        .client
        .authority_change_id(&authority, &new_authority, &1);
    assert_contract_err!(
        bridge.client.try_change_authority(
            &authority,
            &change_id,
            &authority,
            &new_authority
        ),
        ContractError::BridgePaused
    );
}
