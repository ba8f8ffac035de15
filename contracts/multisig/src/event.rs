use bridge_std::IntoEvent;
use soroban_sdk::{Address, BytesN, Symbol, Val, Vec};

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct ChangeRequestedEvent {
    pub id: BytesN<32>,
    pub requester: Address,
    #[data]
    pub old_signer: Option<Address>,
    #[data]
    pub new_signer: Option<Address>,
    #[data]
    pub new_threshold: u32,
    #[data]
    pub nonce: u64,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct ChangeConfirmedEvent {
    pub id: BytesN<32>,
    pub signer: Address,
    #[data]
    pub confirmations: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct SignersRotatedEvent {
    pub id: BytesN<32>,
    #[data]
    pub signers: Vec<Address>,
    #[data]
    pub threshold: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct TransactionSubmittedEvent {
    pub id: BytesN<32>,
    pub submitter: Address,
    #[data]
    pub target: Address,
    #[data]
    pub function: Symbol,
    #[data]
    pub args: Vec<Val>,
    #[data]
    pub nonce: u64,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct TransactionConfirmedEvent {
    pub id: BytesN<32>,
    pub signer: Address,
    #[data]
    pub confirmations: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct TransactionExecutedEvent {
    pub id: BytesN<32>,
    #[data]
    pub target: Address,
    #[data]
    pub function: Symbol,
}
