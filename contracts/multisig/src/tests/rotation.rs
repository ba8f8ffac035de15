use bridge_std::assert_contract_err;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use super::utils::{TestTarget, TestTargetClient};
use crate::error::ContractError;
use crate::testutils::setup_multisig;

#[test]
fn confirmation_from_removed_signer_still_counts() {
    let env = Env::default();
    env.mock_all_auths();

    let (signers, client) = setup_multisig(&env, 3, 2);
    let a = signers.get_unchecked(0);
    let b = signers.get_unchecked(1);
    let c = signers.get_unchecked(2);
    let d = Address::generate(&env);

    let add_d = client.add_validator_request(&a, &d, &3);
    client.confirm_change_request(&a, &add_d);

    let remove_a = client.remove_validator_request(&b, &a, &2);
    client.confirm_change_request(&a, &remove_a);
    client.confirm_change_request(&b, &remove_a);
    assert_eq!(client.signers(), vec![&env, b.clone(), c.clone()]);

    // a's earlier confirmation plus b's reaches the threshold of 2
    client.confirm_change_request(&b, &add_d);

    assert_eq!(client.signers(), vec![&env, b, c, d]);
    assert_eq!(client.threshold(), 3);
    assert!(client.is_change_confirmed(&add_d, &a));
}

#[test]
fn removed_signer_cannot_confirm_anew() {
    let env = Env::default();
    env.mock_all_auths();

    let (signers, client) = setup_multisig(&env, 3, 2);
    let a = signers.get_unchecked(0);
    let b = signers.get_unchecked(1);
    let c = signers.get_unchecked(2);

    let add = client.add_validator_request(&b, &Address::generate(&env), &3);

    let remove_a = client.remove_validator_request(&b, &a, &2);
    client.confirm_change_request(&b, &remove_a);
    client.confirm_change_request(&c, &remove_a);

    assert_contract_err!(
        client.try_confirm_change_request(&a, &add),
        ContractError::UnknownSigner
    );
    assert_contract_err!(
        client.try_add_validator_request(&a, &Address::generate(&env), &2),
        ContractError::UnknownSigner
    );
}

#[test]
fn added_signer_can_approve_transactions() {
    let env = Env::default();
    env.mock_all_auths();

    let (signers, client) = setup_multisig(&env, 2, 2);
    let a = signers.get_unchecked(0);
    let b = signers.get_unchecked(1);
    let c = Address::generate(&env);

    let add_c = client.add_validator_request(&a, &c, &2);
    client.confirm_change_request(&a, &add_c);
    client.confirm_change_request(&b, &add_c);

    let target = TestTargetClient::new(&env, &env.register(TestTarget, ()));
    let id = client.submit_transaction(
        &c,
        &target.address,
        &Symbol::new(&env, "record"),
        &vec![&env, 5u32.into_val(&env)],
    );
    client.approve_transaction(&c, &id);
    client.approve_transaction(&a, &id);

    assert_eq!(target.recorded(), Some(5));
}

#[test]
fn raised_threshold_applies_to_pending_submissions() {
    let env = Env::default();
    env.mock_all_auths();

    let (signers, client) = setup_multisig(&env, 3, 2);
    let a = signers.get_unchecked(0);
    let b = signers.get_unchecked(1);
    let c = signers.get_unchecked(2);

    let target = TestTargetClient::new(&env, &env.register(TestTarget, ()));
    let id = client.submit_transaction(
        &a,
        &target.address,
        &Symbol::new(&env, "record"),
        &vec![&env, 9u32.into_val(&env)],
    );
    client.approve_transaction(&a, &id);

    let add_d = client.add_validator_request(&a, &Address::generate(&env), &3);
    client.confirm_change_request(&a, &add_d);
    client.confirm_change_request(&b, &add_d);
    assert_eq!(client.threshold(), 3);

    client.approve_transaction(&b, &id);
    assert_eq!(target.recorded(), None);

    client.approve_transaction(&c, &id);
    assert_eq!(target.recorded(), Some(9));
}
