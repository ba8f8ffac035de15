use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

/// A pending mutation of the signer set.
///
/// `old_signer` only: removal. `new_signer` only: addition. Both: replacement in place.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeRequest {
    pub old_signer: Option<Address>,
    pub new_signer: Option<Address>,
    pub new_threshold: u32,
    pub nonce: u64,
    pub confirmations: u32,
    pub executed: bool,
}

/// An arbitrary contract call awaiting approvals.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Submission {
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub nonce: u64,
    pub confirmations: u32,
    pub executed: bool,
}
