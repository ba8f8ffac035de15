//! Reconfiguration of the governor by its own executed operations.

use bridge_std::ensure;
use bridge_std::events::Event;
use bridge_std::threshold::validate_threshold;
use soroban_sdk::{Address, Env, Symbol, TryFromVal, Val, Vec};

use crate::error::ContractError;
use crate::event::{
    ApproverAddedEvent, ApproverRemovedEvent, ApproverUpdatedEvent, MinDelayChangedEvent,
};
use crate::storage;

/// Runs a call the governor scheduled on itself.
pub fn dispatch(env: &Env, function: &Symbol, args: &Vec<Val>) -> Result<(), ContractError> {
    let call = GovernanceCall::from_function(env, function)?;

    ensure!(
        args.len() == call.arity(),
        ContractError::InvalidGovernanceCall
    );

    match call {
        GovernanceCall::AddApprover => {
            add_approver(env, arg(env, args, 0)?, arg(env, args, 1)?)
        }
        GovernanceCall::RemoveApprover => {
            remove_approver(env, arg(env, args, 0)?, arg(env, args, 1)?)
        }
        GovernanceCall::UpdateApprover => update_approver(
            env,
            arg(env, args, 0)?,
            arg(env, args, 1)?,
            arg(env, args, 2)?,
        ),
        GovernanceCall::UpdateDelay => {
            update_delay(env, arg(env, args, 0)?);
            Ok(())
        }
    }
}

enum GovernanceCall {
    AddApprover,
    RemoveApprover,
    UpdateApprover,
    UpdateDelay,
}

impl GovernanceCall {
    fn from_function(env: &Env, function: &Symbol) -> Result<Self, ContractError> {
        [
            ("add_approver", Self::AddApprover),
            ("remove_approver", Self::RemoveApprover),
            ("update_approver", Self::UpdateApprover),
            ("update_delay", Self::UpdateDelay),
        ]
        .into_iter()
        .find(|(name, _)| *function == Symbol::new(env, name))
        .map(|(_, call)| call)
        .ok_or(ContractError::UnknownGovernanceCall)
    }

    const fn arity(&self) -> u32 {
        match self {
            Self::AddApprover | Self::RemoveApprover => 2,
            Self::UpdateApprover => 3,
            Self::UpdateDelay => 1,
        }
    }
}

fn arg<T>(env: &Env, args: &Vec<Val>, idx: u32) -> Result<T, ContractError>
where
    T: TryFromVal<Env, Val>,
{
    let val = args.get(idx).ok_or(ContractError::InvalidGovernanceCall)?;

    T::try_from_val(env, &val).map_err(|_| ContractError::InvalidGovernanceCall)
}

fn add_approver(env: &Env, approver: Address, threshold: u32) -> Result<(), ContractError> {
    let mut approvers = storage::approvers(env);

    ensure!(
        !approvers.contains(&approver),
        ContractError::DuplicateApprover
    );

    approvers.push_back(approver.clone());
    validate_threshold(approvers.len(), threshold)?;

    storage::set_approvers(env, &approvers);
    storage::set_threshold(env, &threshold);

    ApproverAddedEvent {
        approver,
        threshold,
    }
    .emit(env);

    Ok(())
}

fn remove_approver(env: &Env, approver: Address, threshold: u32) -> Result<(), ContractError> {
    let mut approvers = storage::approvers(env);

    let idx = approvers
        .first_index_of(&approver)
        .ok_or(ContractError::ApproverNotFound)?;
    approvers.remove(idx);
    validate_threshold(approvers.len(), threshold)?;

    storage::set_approvers(env, &approvers);
    storage::set_threshold(env, &threshold);

    ApproverRemovedEvent {
        approver,
        threshold,
    }
    .emit(env);

    Ok(())
}

fn update_approver(
    env: &Env,
    old_approver: Address,
    new_approver: Address,
    threshold: u32,
) -> Result<(), ContractError> {
    let mut approvers = storage::approvers(env);

    ensure!(
        !approvers.contains(&new_approver),
        ContractError::DuplicateApprover
    );

    let idx = approvers
        .first_index_of(&old_approver)
        .ok_or(ContractError::ApproverNotFound)?;
    approvers.set(idx, new_approver.clone());
    validate_threshold(approvers.len(), threshold)?;

    storage::set_approvers(env, &approvers);
    storage::set_threshold(env, &threshold);

    ApproverUpdatedEvent {
        old_approver,
        new_approver,
        threshold,
    }
    .emit(env);

    Ok(())
}

fn update_delay(env: &Env, new_delay: u64) {
    let old_delay = storage::min_delay(env);

    storage::set_min_delay(env, &new_delay);

    MinDelayChangedEvent {
        old_delay,
        new_delay,
    }
    .emit(env);
}
