use soroban_sdk::{contracttype, BytesN};

/// Lifecycle of a scheduled operation. Only `Scheduled`, `Done` and `Cancelled` are stored;
/// `Unset` means the id was never scheduled and `Ready` is derived from the ledger time.
#[contracttype]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OperationState {
    Unset = 0,
    Scheduled = 1,
    Ready = 2,
    Done = 3,
    Cancelled = 4,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    pub state: OperationState,
    pub ready_timestamp: u64,
    pub approval_count: u32,
    /// All-zero when the operation has no dependency.
    pub predecessor: BytesN<32>,
}
