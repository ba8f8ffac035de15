#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Vec};

use crate::{Multisig, MultisigClient};

/// Generates `count` fresh signer addresses.
pub fn generate_signers(env: &Env, count: u32) -> Vec<Address> {
    let mut signers = Vec::new(env);
    for _ in 0..count {
        signers.push_back(Address::generate(env));
    }
    signers
}

/// Registers a multisig with `signer_count` random signers and the given threshold.
pub fn setup_multisig<'a>(
    env: &Env,
    signer_count: u32,
    threshold: u32,
) -> (Vec<Address>, MultisigClient<'a>) {
    let signers = generate_signers(env, signer_count);
    let contract_id = env.register(Multisig, (signers.clone(), threshold));

    (signers, MultisigClient::new(env, &contract_id))
}
