use bridge_std::events::last_emitted_event;
use bridge_std::{assert_auth, assert_contract_err, assert_some};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env};

use super::utils::{setup_env, setup_side_token};
use crate::error::ContractError;
use crate::event::{WithdrawCompletedEvent, WithdrawSignedEvent};
use crate::testutils::TestBridge;
use crate::types::Redemption;

struct Withdrawal {
    redeem_id: BytesN<32>,
    side_token_id: BytesN<32>,
    beneficiary: Address,
    amount: i128,
    peer_tx_hash: BytesN<32>,
}

impl Withdrawal {
    fn new(env: &Env, bridge: &TestBridge, side_token_id: &BytesN<32>, amount: i128) -> Self {
        let beneficiary = Address::generate(env);
        let peer_tx_hash = BytesN::from_array(env, &[0x42; 32]);
        let redeem_id = bridge
            .client
            .redeem_id(side_token_id, &beneficiary, &amount, &peer_tx_hash);

        Self {
            redeem_id,
            side_token_id: side_token_id.clone(),
            beneficiary,
            amount,
            peer_tx_hash,
        }
    }

    fn sign(&self, bridge: &TestBridge, authority: &Address) {
        bridge.client.withdraw(
            authority,
            &self.redeem_id,
            &self.side_token_id,
            &self.beneficiary,
            &self.amount,
            &self.peer_tx_hash,
        );
    }

    fn try_sign(&self, bridge: &TestBridge, authority: &Address) -> Result<(), ContractError> {
        match bridge.client.try_withdraw(
            authority,
            &self.redeem_id,
            &self.side_token_id,
            &self.beneficiary,
            &self.amount,
            &self.peer_tx_hash,
        ) {
            Ok(_) => Ok(()),
            Err(Ok(err)) => Err(err),
            Err(Err(err)) => panic!("unexpected invoke error {err:?}"),
        }
    }
}

/// Deposits `amount` main tokens so the bridge has funds to release.
fn fill_custody(env: &Env, bridge: &TestBridge, side_token_id: &BytesN<32>, amount: i128) {
    let depositor = Address::generate(env);
    bridge.fund(&depositor, amount);
    bridge.client.deposit(&depositor, side_token_id, &amount);
}

fn assert_some_redemption(bridge: &TestBridge, redeem_id: &BytesN<32>) -> Redemption {
    assert_some!(bridge.client.redemption(redeem_id))
}

#[test]
fn withdraw_completes_at_required_signatures() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    fill_custody(&env, &bridge, &id, 1_000);

    let withdrawal = Withdrawal::new(&env, &bridge, &id, 300);
    let first = authorities.get(0).unwrap();
    let second = authorities.get(1).unwrap();
    let third = authorities.get(2).unwrap();

    withdrawal.sign(&bridge, &first);

    assert!(bridge.client.has_signed(&withdrawal.redeem_id, &first));
    assert_eq!(
        last_emitted_event::<WithdrawSignedEvent>(&env),
        WithdrawSignedEvent {
            redeem_id: withdrawal.redeem_id.clone(),
            authority: first,
            side_token_id: id.clone(),
            beneficiary: withdrawal.beneficiary.clone(),
            amount: 300,
            peer_tx_hash: withdrawal.peer_tx_hash.clone(),
            signatures: 1,
        }
    );
    assert_eq!(
        bridge.client.redemption(&withdrawal.redeem_id),
        Some(Redemption {
            side_token_id: id.clone(),
            beneficiary: withdrawal.beneficiary.clone(),
            amount: 300,
            peer_tx_hash: withdrawal.peer_tx_hash.clone(),
            completed: false,
        })
    );
    assert_eq!(bridge.token.balance(&withdrawal.beneficiary), 0);

    withdrawal.sign(&bridge, &second);

    assert_eq!(
        last_emitted_event::<WithdrawCompletedEvent>(&env),
        WithdrawCompletedEvent {
            redeem_id: withdrawal.redeem_id.clone(),
            beneficiary: withdrawal.beneficiary.clone(),
            side_token_id: id,
            amount: 300,
            peer_tx_hash: withdrawal.peer_tx_hash.clone(),
        }
    );
    assert!(assert_some_redemption(&bridge, &withdrawal.redeem_id).completed);
    assert_eq!(bridge.token.balance(&withdrawal.beneficiary), 300);
    assert_eq!(bridge.token.balance(&bridge.client.address), 700);

    assert_eq!(
        withdrawal.try_sign(&bridge, &third),
        Err(ContractError::AlreadyCompleted)
    );
    assert_eq!(bridge.token.balance(&withdrawal.beneficiary), 300);
}

#[test]
fn withdraw_requires_authority_auth() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    let client = &bridge.client;
    let withdrawal = Withdrawal::new(&env, &bridge, &id, 300);
    let authority = authorities.get(0).unwrap();

    assert_auth!(
        authority,
        client.withdraw(
            &authority,
            &withdrawal.redeem_id,
            &withdrawal.side_token_id,
            &withdrawal.beneficiary,
            &300i128,
            &withdrawal.peer_tx_hash
        )
    );
}

#[test]
fn repeated_signature_is_ignored() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    fill_custody(&env, &bridge, &id, 1_000);

    let withdrawal = Withdrawal::new(&env, &bridge, &id, 300);
    let first = authorities.get(0).unwrap();

    withdrawal.sign(&bridge, &first);
    withdrawal.sign(&bridge, &first);

    assert!(!assert_some_redemption(&bridge, &withdrawal.redeem_id).completed);
    assert_eq!(bridge.token.balance(&withdrawal.beneficiary), 0);

    withdrawal.sign(&bridge, &authorities.get(2).unwrap());

    assert!(assert_some_redemption(&bridge, &withdrawal.redeem_id).completed);
}

#[test]
fn withdraw_fails_for_non_authority() {
    let (env, bridge) = setup_env();
    let (_, id) = setup_side_token(&env, &bridge, 3, 2);
    let withdrawal = Withdrawal::new(&env, &bridge, &id, 300);

    assert_eq!(
        withdrawal.try_sign(&bridge, &Address::generate(&env)),
        Err(ContractError::NotAuthority)
    );
    assert_eq!(bridge.client.redemption(&withdrawal.redeem_id), None);
}

#[test]
fn withdraw_fails_with_mismatched_redeem_id() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    let mut withdrawal = Withdrawal::new(&env, &bridge, &id, 300);
    withdrawal.amount = 301;

    assert_eq!(
        withdrawal.try_sign(&bridge, &authorities.get(0).unwrap()),
        Err(ContractError::InvalidRedeemId)
    );
}

#[test]
fn withdraw_fails_with_invalid_amount() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    let withdrawal = Withdrawal::new(&env, &bridge, &id, 0);

    assert_eq!(
        withdrawal.try_sign(&bridge, &authorities.get(0).unwrap()),
        Err(ContractError::InvalidAmount)
    );
}

#[test]
fn withdraw_fails_for_unknown_side_token() {
    let (env, bridge) = setup_env();
    let (authorities, _) = setup_side_token(&env, &bridge, 3, 2);
    let unknown = BytesN::from_array(&env, &[9; 32]);
    let withdrawal = Withdrawal::new(&env, &bridge, &unknown, 300);

    assert_eq!(
        withdrawal.try_sign(&bridge, &authorities.get(0).unwrap()),
        Err(ContractError::SideTokenNotRegistered)
    );
}

#[test]
fn withdraw_fails_without_custody_funds() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    fill_custody(&env, &bridge, &id, 100);

    let withdrawal = Withdrawal::new(&env, &bridge, &id, 300);
    let second = authorities.get(1).unwrap();

    withdrawal.sign(&bridge, &authorities.get(0).unwrap());

    assert_eq!(
        withdrawal.try_sign(&bridge, &second),
        Err(ContractError::InsufficientBalance)
    );
    assert!(!bridge.client.has_signed(&withdrawal.redeem_id, &second));
    assert!(!assert_some_redemption(&bridge, &withdrawal.redeem_id).completed);

    fill_custody(&env, &bridge, &id, 200);
    withdrawal.sign(&bridge, &second);

    assert_eq!(bridge.token.balance(&withdrawal.beneficiary), 300);
}

#[test]
fn withdraw_cannot_pay_out_staked_funds() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    let staker = Address::generate(&env);
    bridge.fund(&staker, 1_000);
    bridge.client.stake(&staker, &1_000);
    fill_custody(&env, &bridge, &id, 100);

    assert_eq!(bridge.client.total_staked(), 1_000);
    assert_eq!(bridge.token.balance(&bridge.client.address), 1_100);

    let withdrawal = Withdrawal::new(&env, &bridge, &id, 300);
    withdrawal.sign(&bridge, &authorities.get(0).unwrap());

    assert_eq!(
        withdrawal.try_sign(&bridge, &authorities.get(1).unwrap()),
        Err(ContractError::InsufficientBalance)
    );

    bridge.client.unstake(&staker, &1_000);

    assert_eq!(bridge.token.balance(&staker), 1_000);
    assert_eq!(bridge.client.total_staked(), 0);
    assert_eq!(bridge.token.balance(&bridge.client.address), 100);
}

#[test]
fn withdraw_pays_out_unstaked_funds_alongside_stakes() {
    let (env, bridge) = setup_env();
    let (authorities, id) = setup_side_token(&env, &bridge, 3, 2);
    let staker = Address::generate(&env);
    bridge.fund(&staker, 500);
    bridge.client.stake(&staker, &500);
    fill_custody(&env, &bridge, &id, 300);

    let withdrawal = Withdrawal::new(&env, &bridge, &id, 300);
    withdrawal.sign(&bridge, &authorities.get(0).unwrap());
    withdrawal.sign(&bridge, &authorities.get(1).unwrap());

    assert_eq!(bridge.token.balance(&withdrawal.beneficiary), 300);
    assert_eq!(bridge.token.balance(&bridge.client.address), 500);
    assert_eq!(bridge.client.staked_amount(&staker), 500);
}

#[test]
fn withdraw_fails_without_side_bridge() {
    let (env, bridge) = setup_env();
    let withdrawal = Withdrawal::new(&env, &bridge, &BytesN::from_array(&env, &[9; 32]), 300);

    assert_contract_err!(
        bridge.client.try_withdraw(
            &Address::generate(&env),
            &withdrawal.redeem_id,
            &withdrawal.side_token_id,
            &withdrawal.beneficiary,
            &withdrawal.amount,
            &withdrawal.peer_tx_hash
        ),
        ContractError::SideBridgeNotRegistered
    );
}
