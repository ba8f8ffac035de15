use bridge_std::IntoEvent;
use soroban_sdk::{Address, Bytes, BytesN, String, Vec};

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct InitializedEvent {
    pub chain_id: u32,
    #[data]
    pub main_token: Address,
    #[data]
    pub main_admin: Address,
    #[data]
    pub main_token_decimals: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct SideBridgeRegisteredEvent {
    #[data]
    pub peer: Bytes,
    #[data]
    pub required_signatures: u32,
    #[data]
    pub authorities: Vec<Address>,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct SideTokenRegisteredEvent {
    pub side_token_id: BytesN<32>,
    pub peer_chain_id: u32,
    #[data]
    pub name: String,
    #[data]
    pub symbol: String,
    #[data]
    pub conversion_rate: u64,
    #[data]
    pub conversion_rate_decimals: u32,
    #[data]
    pub main_token_decimals: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct DepositedEvent {
    pub side_token_id: BytesN<32>,
    pub from: Address,
    pub nonce: u64,
    #[data]
    pub amount: i128,
    #[data]
    pub side_amount: i128,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct StakedEvent {
    pub staker: Address,
    #[data]
    pub amount: i128,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct UnstakedEvent {
    pub staker: Address,
    #[data]
    pub amount: i128,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct WithdrawSignedEvent {
    pub redeem_id: BytesN<32>,
    pub authority: Address,
    #[data]
    pub side_token_id: BytesN<32>,
    #[data]
    pub beneficiary: Address,
    #[data]
    pub amount: i128,
    #[data]
    pub peer_tx_hash: BytesN<32>,
    #[data]
    pub signatures: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct WithdrawCompletedEvent {
    pub redeem_id: BytesN<32>,
    pub beneficiary: Address,
    #[data]
    pub side_token_id: BytesN<32>,
    #[data]
    pub amount: i128,
    #[data]
    pub peer_tx_hash: BytesN<32>,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct AuthorityChangeRequestedEvent {
    pub change_id: BytesN<32>,
    pub requester: Address,
    #[data]
    pub old_authority: Address,
    #[data]
    pub new_authority: Address,
    #[data]
    pub nonce: u64,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct AuthorityChangeConfirmedEvent {
    pub change_id: BytesN<32>,
    pub authority: Address,
    #[data]
    pub confirmations: u32,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct AuthorityChangedEvent {
    pub change_id: BytesN<32>,
    #[data]
    pub old_authority: Address,
    #[data]
    pub new_authority: Address,
}
