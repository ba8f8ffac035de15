use bridge_std::hash::keccak_id;
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

pub fn side_token_id(
    env: &Env,
    peer: &Bytes,
    name: &String,
    symbol: &String,
    conversion_rate: u64,
    conversion_rate_decimals: u32,
    peer_chain_id: u32,
) -> BytesN<32> {
    keccak_id(
        env,
        (
            env.current_contract_address(),
            peer.clone(),
            name.clone(),
            symbol.clone(),
            conversion_rate,
            conversion_rate_decimals,
            peer_chain_id,
        ),
    )
}

pub fn redeem_id(
    env: &Env,
    side_token_id: &BytesN<32>,
    beneficiary: &Address,
    amount: i128,
    peer_tx_hash: &BytesN<32>,
) -> BytesN<32> {
    keccak_id(
        env,
        (
            side_token_id.clone(),
            beneficiary.clone(),
            amount,
            peer_tx_hash.clone(),
        ),
    )
}

pub fn authority_change_id(
    env: &Env,
    old_authority: &Address,
    new_authority: &Address,
    nonce: u64,
) -> BytesN<32> {
    keccak_id(env, (old_authority.clone(), new_authority.clone(), nonce))
}
