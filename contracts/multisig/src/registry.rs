use bridge_std::ensure;
use bridge_std::events::Event;
use bridge_std::threshold::{validate_signer_set, validate_threshold};
use bridge_std::ttl::extend_instance_ttl;
use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::error::ContractError;
use crate::event::{ChangeConfirmedEvent, ChangeRequestedEvent, SignersRotatedEvent};
use crate::id;
use crate::storage;
use crate::types::ChangeRequest;

pub fn initialize_signers(
    env: &Env,
    signers: Vec<Address>,
    threshold: u32,
) -> Result<(), ContractError> {
    validate_signer_set(&signers, threshold)?;

    storage::set_signers(env, &signers);
    storage::set_threshold(env, &threshold);

    Ok(())
}

pub fn ensure_signer(env: &Env, caller: &Address) -> Result<(), ContractError> {
    ensure!(
        storage::signers(env).contains(caller),
        ContractError::UnknownSigner
    );

    Ok(())
}

/// Returns `signers` with the change applied, without touching storage.
fn apply_change(
    signers: &Vec<Address>,
    old_signer: &Option<Address>,
    new_signer: &Option<Address>,
) -> Result<Vec<Address>, ContractError> {
    let mut signers = signers.clone();

    if let Some(new_signer) = new_signer {
        ensure!(
            !signers.contains(new_signer),
            ContractError::DuplicateSigner
        );
    }

    match (old_signer, new_signer) {
        (None, None) => return Err(ContractError::InvalidChangeRequest),
        (None, Some(new_signer)) => signers.push_back(new_signer.clone()),
        (Some(old_signer), new_signer) => {
            let idx = signers
                .first_index_of(old_signer)
                .ok_or(ContractError::SignerNotFound)?;

            match new_signer {
                Some(new_signer) => signers.set(idx, new_signer.clone()),
                None => {
                    signers.remove(idx);
                }
            }
        }
    }

    Ok(signers)
}

pub fn request_change(
    env: &Env,
    caller: Address,
    old_signer: Option<Address>,
    new_signer: Option<Address>,
    new_threshold: u32,
) -> Result<BytesN<32>, ContractError> {
    caller.require_auth();

    ensure_signer(env, &caller)?;

    let pending_signers = apply_change(&storage::signers(env), &old_signer, &new_signer)?;
    validate_threshold(pending_signers.len(), new_threshold)?;

    let nonce = storage::try_change_nonce(env).unwrap_or(0) + 1;
    storage::set_change_nonce(env, &nonce);

    let id = id::change_request_id(env, &old_signer, &new_signer, new_threshold, nonce);

    storage::set_change_request(
        env,
        id.clone(),
        &ChangeRequest {
            old_signer: old_signer.clone(),
            new_signer: new_signer.clone(),
            new_threshold,
            nonce,
            confirmations: 0,
            executed: false,
        },
    );

    ChangeRequestedEvent {
        id: id.clone(),
        requester: caller,
        old_signer,
        new_signer,
        new_threshold,
        nonce,
    }
    .emit(env);

    extend_instance_ttl(env);

    Ok(id)
}

pub fn confirm_change(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError> {
    caller.require_auth();

    let mut request =
        storage::try_change_request(env, id.clone()).ok_or(ContractError::UnknownChangeRequest)?;

    // late retries of a committed change are accepted
    if request.executed {
        return Ok(());
    }

    ensure_signer(env, &caller)?;

    ensure!(
        !storage::is_change_confirmation(env, id.clone(), caller.clone()),
        ContractError::DuplicateConfirmation
    );

    storage::set_change_confirmation_status(env, id.clone(), caller.clone());
    request.confirmations += 1;

    ChangeConfirmedEvent {
        id: id.clone(),
        signer: caller,
        confirmations: request.confirmations,
    }
    .emit(env);

    if request.confirmations >= storage::threshold(env) {
        commit_change(env, &id, &request)?;
        request.executed = true;
    }

    storage::set_change_request(env, id, &request);

    extend_instance_ttl(env);

    Ok(())
}

fn commit_change(env: &Env, id: &BytesN<32>, request: &ChangeRequest) -> Result<(), ContractError> {
    let signers = apply_change(
        &storage::signers(env),
        &request.old_signer,
        &request.new_signer,
    )?;
    validate_threshold(signers.len(), request.new_threshold)?;

    storage::set_signers(env, &signers);
    storage::set_threshold(env, &request.new_threshold);

    SignersRotatedEvent {
        id: id.clone(),
        signers,
        threshold: request.new_threshold,
    }
    .emit(env);

    Ok(())
}
