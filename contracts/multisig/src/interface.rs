use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol, Val, Vec};

use crate::error::ContractError;
use crate::types::{ChangeRequest, Submission};

#[contractclient(name = "MultisigClient")]
pub trait MultisigInterface {
    /// Returns the current signer set, in registration order.
    fn signers(env: &Env) -> Vec<Address>;

    /// Returns the number of confirmations required to commit a change or execute a submission.
    fn threshold(env: &Env) -> u32;

    /// Returns the nonce used by the latest change request, `0` if none was made.
    fn change_nonce(env: &Env) -> u64;

    /// Returns the nonce used by the latest submission, `0` if none was made.
    fn submission_nonce(env: &Env) -> u64;

    /// Requests adding `new_signer` to the set, with `new_threshold` taking effect on commit.
    ///
    /// Returns the request id, `hash(None, new_signer, new_threshold, nonce)`.
    ///
    /// # Errors
    /// - [`ContractError::UnknownSigner`]: If `caller` is not a current signer.
    /// - [`ContractError::DuplicateSigner`]: If `new_signer` is already a signer.
    /// - [`ContractError::InvalidThreshold`]: If `new_threshold` is invalid for the grown set.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn add_validator_request(
        env: &Env,
        caller: Address,
        new_signer: Address,
        new_threshold: u32,
    ) -> Result<BytesN<32>, ContractError>;

    /// Requests removing `old_signer` from the set. See [`MultisigInterface::add_validator_request`].
    fn remove_validator_request(
        env: &Env,
        caller: Address,
        old_signer: Address,
        new_threshold: u32,
    ) -> Result<BytesN<32>, ContractError>;

    /// Requests replacing `old_signer` by `new_signer` at the same position.
    /// See [`MultisigInterface::add_validator_request`].
    fn update_validator_request(
        env: &Env,
        caller: Address,
        old_signer: Address,
        new_signer: Address,
        new_threshold: u32,
    ) -> Result<BytesN<32>, ContractError>;

    /// Confirms a change request. The confirmation that reaches the threshold commits the change.
    ///
    /// Confirming an executed request is a no-op.
    ///
    /// # Errors
    /// - [`ContractError::UnknownChangeRequest`]: If `id` was never requested.
    /// - [`ContractError::UnknownSigner`]: If `caller` is not a current signer.
    /// - [`ContractError::DuplicateConfirmation`]: If `caller` already confirmed `id`.
    /// - [`ContractError::InvalidThreshold`]: If the committed set would violate the threshold rule.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn confirm_change_request(
        env: &Env,
        caller: Address,
        id: BytesN<32>,
    ) -> Result<(), ContractError>;

    fn change_request(env: &Env, id: BytesN<32>) -> Option<ChangeRequest>;

    fn is_change_confirmed(env: &Env, id: BytesN<32>, signer: Address) -> bool;

    /// Recomputes a change request id from its public inputs.
    fn change_request_id(
        env: &Env,
        old_signer: Option<Address>,
        new_signer: Option<Address>,
        new_threshold: u32,
        nonce: u64,
    ) -> BytesN<32>;

    /// Submits a call of `function` on `target` with `args`. Submitting does not confirm.
    ///
    /// Returns the submission id, `hash(target, function, args, nonce)`.
    ///
    /// # Errors
    /// - [`ContractError::UnknownSigner`]: If `caller` is not a current signer.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn submit_transaction(
        env: &Env,
        caller: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
    ) -> Result<BytesN<32>, ContractError>;

    /// Confirms a submission. The confirmation that reaches the threshold executes the call.
    ///
    /// Confirmations of signers that were removed later still count.
    ///
    /// # Errors
    /// - [`ContractError::UnknownSubmission`]: If `id` was never submitted.
    /// - [`ContractError::AlreadyExecuted`]: If the call already ran.
    /// - [`ContractError::UnknownSigner`]: If `caller` is not a current signer.
    /// - [`ContractError::DuplicateConfirmation`]: If `caller` already confirmed `id`.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn approve_transaction(env: &Env, caller: Address, id: BytesN<32>)
        -> Result<(), ContractError>;

    fn submission(env: &Env, id: BytesN<32>) -> Option<Submission>;

    fn is_confirmed(env: &Env, id: BytesN<32>, signer: Address) -> bool;

    /// Recomputes a submission id from its public inputs.
    fn submission_id(
        env: &Env,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        nonce: u64,
    ) -> BytesN<32>;
}
