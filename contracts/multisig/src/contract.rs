use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Val, Vec};

use crate::error::ContractError;
use crate::interface::MultisigInterface;
use crate::storage;
use crate::types::{ChangeRequest, Submission};
use crate::{executor, id, registry};

#[contract]
pub struct Multisig;

#[contractimpl]
impl Multisig {
    pub fn __constructor(
        env: &Env,
        signers: Vec<Address>,
        threshold: u32,
    ) -> Result<(), ContractError> {
        registry::initialize_signers(env, signers, threshold)
    }
}

#[contractimpl]
impl MultisigInterface for Multisig {
    fn signers(env: &Env) -> Vec<Address> {
        storage::signers(env)
    }

    fn threshold(env: &Env) -> u32 {
        storage::threshold(env)
    }

    fn change_nonce(env: &Env) -> u64 {
        storage::try_change_nonce(env).unwrap_or(0)
    }

    fn submission_nonce(env: &Env) -> u64 {
        storage::try_submission_nonce(env).unwrap_or(0)
    }

    fn add_validator_request(
        env: &Env,
        caller: Address,
        new_signer: Address,
        new_threshold: u32,
    ) -> Result<BytesN<32>, ContractError> {
        registry::request_change(env, caller, None, Some(new_signer), new_threshold)
    }

    fn remove_validator_request(
        env: &Env,
        caller: Address,
        old_signer: Address,
        new_threshold: u32,
    ) -> Result<BytesN<32>, ContractError> {
        registry::request_change(env, caller, Some(old_signer), None, new_threshold)
    }

    fn update_validator_request(
        env: &Env,
        caller: Address,
        old_signer: Address,
        new_signer: Address,
        new_threshold: u32,
    ) -> Result<BytesN<32>, ContractError> {
        registry::request_change(
            env,
            caller,
            Some(old_signer),
            Some(new_signer),
            new_threshold,
        )
    }

    fn confirm_change_request(
        env: &Env,
        caller: Address,
        id: BytesN<32>,
    ) -> Result<(), ContractError> {
        registry::confirm_change(env, caller, id)
    }

    fn change_request(env: &Env, id: BytesN<32>) -> Option<ChangeRequest> {
        storage::try_change_request(env, id)
    }

    fn is_change_confirmed(env: &Env, id: BytesN<32>, signer: Address) -> bool {
        storage::is_change_confirmation(env, id, signer)
    }

    fn change_request_id(
        env: &Env,
        old_signer: Option<Address>,
        new_signer: Option<Address>,
        new_threshold: u32,
        nonce: u64,
    ) -> BytesN<32> {
        id::change_request_id(env, &old_signer, &new_signer, new_threshold, nonce)
    }

    fn submit_transaction(
        env: &Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
    ) -> Result<BytesN<32>, ContractError> {
        executor::submit(env, caller, target, function, args)
    }

    fn approve_transaction(
        env: &Env,
        caller: Address,
        id: BytesN<32>,
    ) -> Result<(), ContractError> {
        executor::approve(env, caller, id)
    }

    fn submission(env: &Env, id: BytesN<32>) -> Option<Submission> {
        storage::try_submission(env, id)
    }

    fn is_confirmed(env: &Env, id: BytesN<32>, signer: Address) -> bool {
        storage::is_submission_confirmation(env, id, signer)
    }

    fn submission_id(
        env: &Env,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        nonce: u64,
    ) -> BytesN<32> {
        id::submission_id(env, &target, &function, &args, nonce)
    }
}
