use bridge_std::ensure;
use bridge_std::events::Event;
use bridge_std::hash::{is_zero_id, keccak_id};
use bridge_std::ttl::extend_instance_ttl;
use soroban_sdk::{token, Address, BytesN, Env, IntoVal, Symbol, Val, Vec};

use crate::error::ContractError;
use crate::event::{CallApprovedEvent, CallCancelledEvent, CallExecutedEvent, CallScheduledEvent};
use crate::types::{Operation, OperationState};
use crate::{governance, storage};

/// A call together with the fields that make its id unique.
pub struct Call {
    pub target: Address,
    pub value: i128,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub predecessor: BytesN<32>,
    pub salt: BytesN<32>,
}

impl Call {
    pub fn id(&self, env: &Env) -> BytesN<32> {
        keccak_id(
            env,
            (
                self.target.clone(),
                self.value,
                self.function.clone(),
                self.args.clone(),
                self.predecessor.clone(),
                self.salt.clone(),
            ),
        )
    }
}

pub fn state(env: &Env, id: BytesN<32>) -> OperationState {
    let Some(operation) = storage::try_operation(env, id) else {
        return OperationState::Unset;
    };

    match operation.state {
        OperationState::Scheduled
            if env.ledger().timestamp() >= operation.ready_timestamp
                && dependency_done(env, &operation.predecessor) =>
        {
            OperationState::Ready
        }
        state => state,
    }
}

fn dependency_done(env: &Env, predecessor: &BytesN<32>) -> bool {
    is_zero_id(predecessor)
        || storage::try_operation(env, predecessor.clone())
            .is_some_and(|operation| operation.state == OperationState::Done)
}

/// Loads an operation that is still waiting for execution.
fn pending_operation(env: &Env, id: &BytesN<32>) -> Result<Operation, ContractError> {
    let operation =
        storage::try_operation(env, id.clone()).ok_or(ContractError::UnknownOperation)?;

    match operation.state {
        OperationState::Done => Err(ContractError::AlreadyExecuted),
        OperationState::Cancelled => Err(ContractError::OperationCancelled),
        OperationState::Unset => Err(ContractError::UnknownOperation),
        OperationState::Scheduled | OperationState::Ready => Ok(operation),
    }
}

pub fn schedule(
    env: &Env,
    caller: Address,
    call: Call,
    delay: u64,
) -> Result<BytesN<32>, ContractError> {
    caller.require_auth();

    ensure!(
        storage::proposers(env).contains(&caller),
        ContractError::NotProposer
    );
    ensure!(call.value >= 0, ContractError::InvalidValue);
    ensure!(
        call.value == 0 || call.target != env.current_contract_address(),
        ContractError::InvalidValue
    );
    ensure!(
        delay >= storage::min_delay(env),
        ContractError::InsufficientDelay
    );

    let id = call.id(env);

    ensure!(
        storage::try_operation(env, id.clone()).is_none(),
        ContractError::OperationAlreadyScheduled
    );

    let ready_timestamp = env
        .ledger()
        .timestamp()
        .checked_add(delay)
        .ok_or(ContractError::InvalidDelay)?;

    storage::set_operation(
        env,
        id.clone(),
        &Operation {
            state: OperationState::Scheduled,
            ready_timestamp,
            approval_count: 0,
            predecessor: call.predecessor.clone(),
        },
    );

    CallScheduledEvent {
        id: id.clone(),
        target: call.target,
        value: call.value,
        function: call.function,
        args: call.args,
        predecessor: call.predecessor,
        salt: call.salt,
        delay,
        ready_timestamp,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(id)
}

pub fn approve(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError> {
    caller.require_auth();

    ensure!(
        storage::approvers(env).contains(&caller),
        ContractError::NotApprover
    );

    let mut operation = pending_operation(env, &id)?;

    ensure!(
        !storage::is_approval(env, id.clone(), caller.clone()),
        ContractError::AlreadyApproved
    );

    storage::set_approval_status(env, id.clone(), caller.clone());
    operation.approval_count += 1;
    storage::set_operation(env, id.clone(), &operation);

    CallApprovedEvent {
        id,
        approver: caller,
        approval_count: operation.approval_count,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(())
}

pub fn execute(env: &Env, caller: Address, call: Call) -> Result<Val, ContractError> {
    caller.require_auth();

    let executors = storage::executors(env);
    ensure!(
        executors.is_empty() || executors.contains(&caller),
        ContractError::NotExecutor
    );

    let id = call.id(env);
    let mut operation = pending_operation(env, &id)?;

    ensure!(
        operation.approval_count >= storage::threshold(env),
        ContractError::InsufficientApprovals
    );
    ensure!(
        env.ledger().timestamp() >= operation.ready_timestamp,
        ContractError::NotReady
    );
    ensure!(
        dependency_done(env, &operation.predecessor),
        ContractError::MissingDependency
    );

    operation.state = OperationState::Done;
    storage::set_operation(env, id.clone(), &operation);

    let governor = env.current_contract_address();

    if call.value > 0 {
        token::TokenClient::new(env, &storage::native_token(env)).transfer(
            &governor,
            &call.target,
            &call.value,
        );
    }

    let result = if call.target == governor {
        governance::dispatch(env, &call.function, &call.args)?;
        ().into_val(env)
    } else {
        env.invoke_contract::<Val>(&call.target, &call.function, call.args)
    };

    CallExecutedEvent {
        id,
        target: call.target,
        value: call.value,
        function: call.function,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(result)
}

pub fn cancel(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError> {
    caller.require_auth();

    ensure!(
        storage::proposers(env).contains(&caller),
        ContractError::NotProposer
    );

    let mut operation = pending_operation(env, &id)?;

    operation.state = OperationState::Cancelled;
    storage::set_operation(env, id.clone(), &operation);

    CallCancelledEvent { id }.emit(env);

    extend_instance_ttl(env);

    Ok(())
}
