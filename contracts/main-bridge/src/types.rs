use soroban_sdk::{contracttype, Address, Bytes, BytesN, String};

/// Set once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeConfig {
    pub chain_id: u32,
    pub main_token: Address,
    pub main_admin: Address,
    pub main_token_decimals: u32,
}

/// The peer bridge on the side chain. Its authorities are stored separately, since they rotate.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideBridge {
    pub peer: Bytes,
    pub required_signatures: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideToken {
    pub peer_chain_id: u32,
    pub name: String,
    pub symbol: String,
    /// Side token units per main token unit, scaled by `10^conversion_rate_decimals`.
    pub conversion_rate: u64,
    pub conversion_rate_decimals: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redemption {
    pub side_token_id: BytesN<32>,
    pub beneficiary: Address,
    pub amount: i128,
    pub peer_tx_hash: BytesN<32>,
    pub completed: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorityChange {
    pub old_authority: Address,
    pub new_authority: Address,
    pub nonce: u64,
    pub executed: bool,
}
