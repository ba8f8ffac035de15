use bridge_std::hash::keccak_id;
use soroban_sdk::{Address, BytesN, Env, Symbol, Val, Vec};

pub fn change_request_id(
    env: &Env,
    old_signer: &Option<Address>,
    new_signer: &Option<Address>,
    new_threshold: u32,
    nonce: u64,
) -> BytesN<32> {
    keccak_id(
        env,
        (old_signer.clone(), new_signer.clone(), new_threshold, nonce),
    )
}

pub fn submission_id(
    env: &Env,
    target: &Address,
    function: &Symbol,
    args: &Vec<Val>,
    nonce: u64,
) -> BytesN<32> {
    keccak_id(env, (target.clone(), function.clone(), args.clone(), nonce))
}
