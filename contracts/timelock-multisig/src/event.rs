use bridge_std::IntoEvent;
use soroban_sdk::{Address, BytesN, Symbol, Val, Vec};

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct CallScheduledEvent {
    pub id: BytesN<32>,
    #[data]
    pub target: Address,
    #[data]
    pub value: i128,
    #[data]
    pub function: Symbol,
    #[data]
    pub args: Vec<Val>,
    #[data]
    pub predecessor: BytesN<32>,
    #[data]
    pub salt: BytesN<32>,
    #[data]
    pub delay: u64,
    #[data]
    pub ready_timestamp: u64,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct CallApprovedEvent {
    pub id: BytesN<32>,
    pub approver: Address,
    #[data]
    pub approval_count: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct CallExecutedEvent {
    pub id: BytesN<32>,
    #[data]
    pub target: Address,
    #[data]
    pub value: i128,
    #[data]
    pub function: Symbol,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct CallCancelledEvent {
    pub id: BytesN<32>,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct ApproverAddedEvent {
    pub approver: Address,
    #[data]
    pub threshold: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct ApproverRemovedEvent {
    pub approver: Address,
    #[data]
    pub threshold: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct ApproverUpdatedEvent {
    pub old_approver: Address,
    pub new_approver: Address,
    #[data]
    pub threshold: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct MinDelayChangedEvent {
    #[data]
    pub old_delay: u64,
    #[data]
    pub new_delay: u64,
}
