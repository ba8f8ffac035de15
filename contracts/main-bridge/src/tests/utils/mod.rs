use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Bytes, BytesN, Env, String, Vec};

use crate::testutils::{setup_initialized_bridge, TestBridge};

pub const PEER_CHAIN_ID: u32 = 2;
pub const SIDE_TOKEN_NAME: &str = "Wrapped Main";
pub const SIDE_TOKEN_SYMBOL: &str = "WMAIN";
pub const CONVERSION_RATE: u64 = 2_500;
pub const CONVERSION_RATE_DECIMALS: u32 = 3;

pub fn setup_env<'a>() -> (Env, TestBridge<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let bridge = setup_initialized_bridge(&env);

    (env, bridge)
}

pub fn peer(env: &Env) -> Bytes {
    Bytes::from_slice(env, &[0xAB; 20])
}

pub fn generate_authorities(env: &Env, count: u32) -> Vec<Address> {
    let mut authorities = Vec::new(env);
    for _ in 0..count {
        authorities.push_back(Address::generate(env));
    }
    authorities
}

pub fn register_side_bridge(
    env: &Env,
    bridge: &TestBridge,
    count: u32,
    required: u32,
) -> Vec<Address> {
    let authorities = generate_authorities(env, count);

    bridge
        .client
        .register_side_bridge(&peer(env), &required, &authorities);

    authorities
}

pub fn side_token_id(env: &Env, bridge: &TestBridge) -> BytesN<32> {
    bridge.client.side_token_id(
        &PEER_CHAIN_ID,
        &String::from_str(env, SIDE_TOKEN_NAME),
        &String::from_str(env, SIDE_TOKEN_SYMBOL),
        &CONVERSION_RATE,
        &CONVERSION_RATE_DECIMALS,
    )
}

/// Registers the default side token, after a side bridge of `authority_count` authorities.
pub fn setup_side_token(
    env: &Env,
    bridge: &TestBridge,
    authority_count: u32,
    required: u32,
) -> (Vec<Address>, BytesN<32>) {
    let authorities = register_side_bridge(env, bridge, authority_count, required);
    let id = side_token_id(env, bridge);

    bridge.client.register_side_token(
        &PEER_CHAIN_ID,
        &String::from_str(env, SIDE_TOKEN_NAME),
        &String::from_str(env, SIDE_TOKEN_SYMBOL),
        &CONVERSION_RATE,
        &CONVERSION_RATE_DECIMALS,
        &id,
    );

    (authorities, id)
}
