#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Vec};

use crate::{TimelockMultisig, TimelockMultisigClient};

pub struct TestConfig<'a> {
    pub client: TimelockMultisigClient<'a>,
    pub approvers: Vec<Address>,
    pub proposer: Address,
    pub executor: Address,
    pub native_token: Address,
}

fn generate(env: &Env, count: u32) -> Vec<Address> {
    let mut addresses = Vec::new(env);
    for _ in 0..count {
        addresses.push_back(Address::generate(env));
    }
    addresses
}

/// Registers a governor with one proposer, one executor and a Stellar asset as native token.
pub fn setup_timelock<'a>(
    env: &Env,
    approver_count: u32,
    threshold: u32,
    min_delay: u64,
) -> TestConfig<'a> {
    let approvers = generate(env, approver_count);
    let proposer = Address::generate(env);
    let executor = Address::generate(env);
    let native_token = env
        .register_stellar_asset_contract_v2(Address::generate(env))
        .address();

    let contract_id = env.register(
        TimelockMultisig,
        (
            approvers.clone(),
            threshold,
            min_delay,
            Vec::from_array(env, [proposer.clone()]),
            Vec::from_array(env, [executor.clone()]),
            native_token.clone(),
        ),
    );

    TestConfig {
        client: TimelockMultisigClient::new(env, &contract_id),
        approvers,
        proposer,
        executor,
        native_token,
    }
}
