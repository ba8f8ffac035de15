use bridge_std::assert_contract_err;
use soroban_sdk::testutils::Ledger as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Env, IntoVal, Vec};

use super::utils::{TestTarget, TestTargetClient, TimelockCall};
use crate::error::ContractError;
use crate::testutils::setup_timelock;
use crate::types::OperationState;

#[test]
fn value_is_transferred_before_the_call() {
    let env = Env::default();
    env.mock_all_auths();

    let config = setup_timelock(&env, 1, 1, 0);
    let target = TestTargetClient::new(&env, &env.register(TestTarget, ()));
    let token = TokenClient::new(&env, &config.native_token);
    StellarAssetClient::new(&env, &config.native_token).mint(&config.client.address, &100);

    let call = TimelockCall::record(&env, &target.address, 1, 1).with_value(40);
    call.schedule(&config, 0);
    call.approve(&config);
    call.execute(&config);

    assert_eq!(token.balance(&target.address), 40);
    assert_eq!(token.balance(&config.client.address), 60);
    assert_eq!(target.recorded(), Some(1));
}

#[test]
fn execution_fails_when_governor_cannot_cover_value() {
    let env = Env::default();
    env.mock_all_auths();

    let config = setup_timelock(&env, 1, 1, 5);
    let target = TestTargetClient::new(&env, &env.register(TestTarget, ()));
    StellarAssetClient::new(&env, &config.native_token).mint(&config.client.address, &10);

    let call = TimelockCall::record(&env, &target.address, 1, 1).with_value(40);
    let id = call.schedule(&config, 5);
    call.approve(&config);

    env.ledger().set_timestamp(5);

    assert!(config
        .client
        .try_execute(
            &config.executor,
            &call.target,
            &call.value,
            &call.function,
            &call.args,
            &call.predecessor,
            &call.salt,
        )
        .is_err());
    assert_eq!(config.client.operation_state(&id), OperationState::Ready);
    assert_eq!(target.recorded(), None);
}

#[test]
fn schedule_rejects_value_on_governor_calls() {
    let env = Env::default();
    env.mock_all_auths();

    let config = setup_timelock(&env, 1, 1, 0);
    let args = Vec::from_array(&env, [20u64.into_val(&env)]);
    let call = TimelockCall::new(&env, &config.client.address, "update_delay", args, 1)
        .with_value(5);

    assert_contract_err!(
        config.client.try_schedule(
            &config.proposer,
            &call.target,
            &call.value,
            &call.function,
            &call.args,
            &call.predecessor,
            &call.salt,
            &0,
        ),
        ContractError::InvalidValue
    );
    assert_eq!(config.client.operation(&call.id(&config)), None);

    let call = call.with_value(0);
    call.schedule(&config, 0);
    call.approve(&config);
    call.execute(&config);

    assert_eq!(config.client.min_delay(), 20);
}
