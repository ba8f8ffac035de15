use bridge_std::threshold::validate_signer_set;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Val, Vec};

use crate::error::ContractError;
use crate::interface::TimelockMultisigInterface;
use crate::operation::{self, Call};
use crate::storage;
use crate::types::{Operation, OperationState};

#[contract]
pub struct TimelockMultisig;

#[contractimpl]
impl TimelockMultisig {
    pub fn __constructor(
        env: &Env,
        approvers: Vec<Address>,
        threshold: u32,
        min_delay: u64,
        proposers: Vec<Address>,
        executors: Vec<Address>,
        native_token: Address,
    ) -> Result<(), ContractError> {
        validate_signer_set(&approvers, threshold)?;

        storage::set_approvers(env, &approvers);
        storage::set_threshold(env, &threshold);
        storage::set_min_delay(env, &min_delay);
        storage::set_proposers(env, &proposers);
        storage::set_executors(env, &executors);
        storage::set_native_token(env, &native_token);

        Ok(())
    }
}

#[contractimpl]
impl TimelockMultisigInterface for TimelockMultisig {
    fn approvers(env: &Env) -> Vec<Address> {
        storage::approvers(env)
    }

    fn threshold(env: &Env) -> u32 {
        storage::threshold(env)
    }

    fn min_delay(env: &Env) -> u64 {
        storage::min_delay(env)
    }

    fn proposers(env: &Env) -> Vec<Address> {
        storage::proposers(env)
    }

    fn executors(env: &Env) -> Vec<Address> {
        storage::executors(env)
    }

    fn is_proposer(env: &Env, account: Address) -> bool {
        storage::proposers(env).contains(&account)
    }

    fn is_executor(env: &Env, account: Address) -> bool {
        let executors = storage::executors(env);

        executors.is_empty() || executors.contains(&account)
    }

    fn operation(env: &Env, id: BytesN<32>) -> Option<Operation> {
        storage::try_operation(env, id)
    }

    fn operation_state(env: &Env, id: BytesN<32>) -> OperationState {
        operation::state(env, id)
    }

    fn is_operation_ready(env: &Env, id: BytesN<32>) -> bool {
        operation::state(env, id) == OperationState::Ready
    }

    fn is_operation_done(env: &Env, id: BytesN<32>) -> bool {
        operation::state(env, id) == OperationState::Done
    }

    fn is_approved(env: &Env, id: BytesN<32>, approver: Address) -> bool {
        storage::is_approval(env, id, approver)
    }

    fn hash_operation(
        env: &Env,
        target: Address,
        value: i128,
        function: Symbol,
        args: Vec<Val>,
        predecessor: BytesN<32>,
        salt: BytesN<32>,
    ) -> BytesN<32> {
        Call {
            target,
            value,
            function,
            args,
            predecessor,
            salt,
        }
        .id(env)
    }

    fn schedule(
        env: &Env,
        caller: Address,
        target: Address,
        value: i128,
        function: Symbol,
        args: Vec<Val>,
        predecessor: BytesN<32>,
        salt: BytesN<32>,
        delay: u64,
    ) -> Result<BytesN<32>, ContractError> {
        let call = Call {
            target,
            value,
            function,
            args,
            predecessor,
            salt,
        };

        operation::schedule(env, caller, call, delay)
    }

    fn approve(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError> {
        operation::approve(env, caller, id)
    }

    fn execute(
        env: &Env,
        caller: Address,
        target: Address,
        value: i128,
        function: Symbol,
        args: Vec<Val>,
        predecessor: BytesN<32>,
        salt: BytesN<32>,
    ) -> Result<Val, ContractError> {
        let call = Call {
            target,
            value,
            function,
            args,
            predecessor,
            salt,
        };

        operation::execute(env, caller, call)
    }

    fn cancel(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError> {
        operation::cancel(env, caller, id)
    }
}
