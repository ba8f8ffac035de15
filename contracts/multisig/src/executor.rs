use bridge_std::ensure;
use bridge_std::events::Event;
use bridge_std::ttl::extend_instance_ttl;
use soroban_sdk::{Address, BytesN, Env, Symbol, Val, Vec};

use crate::error::ContractError;
use crate::event::{
    TransactionConfirmedEvent, TransactionExecutedEvent, TransactionSubmittedEvent,
};
use crate::registry::ensure_signer;
use crate::types::Submission;
use crate::{id, storage};

pub fn submit(
    env: &Env,
    caller: Address,
    target: Address,
    function: Symbol,
    args: Vec<Val>,
) -> Result<BytesN<32>, ContractError> {
    caller.require_auth();

    ensure_signer(env, &caller)?;

    let nonce = storage::try_submission_nonce(env).unwrap_or(0) + 1;
    storage::set_submission_nonce(env, &nonce);

    let id = id::submission_id(env, &target, &function, &args, nonce);

    storage::set_submission(
        env,
        id.clone(),
        &Submission {
            target: target.clone(),
            function: function.clone(),
            args: args.clone(),
            nonce,
            confirmations: 0,
            executed: false,
        },
    );

    TransactionSubmittedEvent {
        id: id.clone(),
        submitter: caller,
        target,
        function,
        args,
        nonce,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(id)
}

pub fn approve(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError> {
    caller.require_auth();

    let mut submission =
        storage::try_submission(env, id.clone()).ok_or(ContractError::UnknownSubmission)?;

    ensure!(!submission.executed, ContractError::AlreadyExecuted);

    ensure_signer(env, &caller)?;

    ensure!(
        !storage::is_submission_confirmation(env, id.clone(), caller.clone()),
        ContractError::DuplicateConfirmation
    );

    storage::set_submission_confirmation_status(env, id.clone(), caller.clone());
    submission.confirmations += 1;

    TransactionConfirmedEvent {
        id: id.clone(),
        signer: caller,
        confirmations: submission.confirmations,
    }
    .emit(env);

    let ready = submission.confirmations >= storage::threshold(env);
    submission.executed = ready;
    storage::set_submission(env, id.clone(), &submission);

    if ready {
        let _: Val = env.invoke_contract(
            &submission.target,
            &submission.function,
            submission.args.clone(),
        );

        TransactionExecutedEvent {
            id,
            target: submission.target,
            function: submission.function,
        }
        .emit(env);
    }

    extend_instance_ttl(env);

    Ok(())
}
