use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol, Val, Vec};

use crate::error::ContractError;
use crate::types::{Operation, OperationState};

#[contractclient(name = "TimelockMultisigClient")]
pub trait TimelockMultisigInterface {
    /// Returns the current approver set.
    fn approvers(env: &Env) -> Vec<Address>;

    /// Returns the number of approvals an operation needs before it can execute.
    fn threshold(env: &Env) -> u32;

    /// Returns the minimum delay, in seconds, between scheduling and execution.
    fn min_delay(env: &Env) -> u64;

    fn proposers(env: &Env) -> Vec<Address>;

    fn executors(env: &Env) -> Vec<Address>;

    fn is_proposer(env: &Env, account: Address) -> bool;

    /// Returns `true` if `account` may execute operations. Everyone may when no executor is configured.
    fn is_executor(env: &Env, account: Address) -> bool;

    /// Returns the stored operation, if it was ever scheduled.
    fn operation(env: &Env, id: BytesN<32>) -> Option<Operation>;

    /// Returns the operation state, with `Ready` derived from the ledger time and the predecessor.
    fn operation_state(env: &Env, id: BytesN<32>) -> OperationState;

    fn is_operation_ready(env: &Env, id: BytesN<32>) -> bool;

    fn is_operation_done(env: &Env, id: BytesN<32>) -> bool;

    fn is_approved(env: &Env, id: BytesN<32>, approver: Address) -> bool;

    /// Computes the operation id, `hash(target, value, function, args, predecessor, salt)`.
    fn hash_operation(
        env: &Env,
        target: Address,
        value: i128,
        function: Symbol,
        args: Vec<Val>,
        predecessor: BytesN<32>,
        salt: BytesN<32>,
    ) -> BytesN<32>;

    /// Schedules a call of `target.function(args)`, transferring `value` of the native token
    /// to `target` first. The call becomes executable `delay` seconds from now.
    ///
    /// `predecessor` is the id of an operation that must be done first, or all zeros.
    /// `salt` distinguishes otherwise identical operations.
    ///
    /// # Errors
    /// - [`ContractError::NotProposer`]: If `caller` is not a proposer.
    /// - [`ContractError::InvalidValue`]: If `value` is negative, or positive on a call of the governor itself.
    /// - [`ContractError::InsufficientDelay`]: If `delay` is below the minimum delay.
    /// - [`ContractError::OperationAlreadyScheduled`]: If the same operation was scheduled before.
    /// - [`ContractError::InvalidDelay`]: If the ready timestamp overflows.
    ///
    /// # Authorization
    /// - `caller` must authorize.
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
    ) -> Result<BytesN<32>, ContractError>;

    /// Records `caller`'s approval of a pending operation.
    ///
    /// # Errors
    /// - [`ContractError::NotApprover`]: If `caller` is not a current approver.
    /// - [`ContractError::UnknownOperation`]: If the operation was never scheduled.
    /// - [`ContractError::AlreadyExecuted`]: If the operation is done.
    /// - [`ContractError::OperationCancelled`]: If the operation was cancelled.
    /// - [`ContractError::AlreadyApproved`]: If `caller` approved before.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn approve(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError>;

    /// Executes a ready, sufficiently approved operation. Calls targeting the governor itself
    /// reconfigure it: `add_approver`, `remove_approver`, `update_approver` and `update_delay`.
    ///
    /// # Errors
    /// - [`ContractError::NotExecutor`]: If executors are configured and `caller` is not one.
    /// - [`ContractError::AlreadyExecuted`], [`ContractError::OperationCancelled`],
    ///   [`ContractError::UnknownOperation`]: If the operation is not pending.
    /// - [`ContractError::InsufficientApprovals`]: If the threshold is not reached.
    /// - [`ContractError::NotReady`]: If the delay has not elapsed.
    /// - [`ContractError::MissingDependency`]: If the predecessor is not done.
    /// - [`ContractError::UnknownGovernanceCall`], [`ContractError::InvalidGovernanceCall`]:
    ///   If a self call names an unknown function or carries malformed arguments.
    /// - Any error raised by the target call.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn execute(
        env: &Env,
        caller: Address,
        target: Address,
        value: i128,
        function: Symbol,
        args: Vec<Val>,
        predecessor: BytesN<32>,
        salt: BytesN<32>,
    ) -> Result<Val, ContractError>;

    /// Cancels a pending operation.
    ///
    /// # Errors
    /// - [`ContractError::NotProposer`]: If `caller` is not a proposer.
    /// - [`ContractError::AlreadyExecuted`], [`ContractError::OperationCancelled`],
    ///   [`ContractError::UnknownOperation`]: If the operation is not pending.
    ///
    /// # Authorization
    /// - `caller` must authorize.
    fn cancel(env: &Env, caller: Address, id: BytesN<32>) -> Result<(), ContractError>;
}
