use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{BytesN, Env, IntoVal, Val};

/// Content-addressed identifier: keccak256 over the XDR encoding of `data`.
///
/// Tuples keep their field order in the encoding, so ids can be recomputed off-chain
/// from the same ordered inputs.
pub fn keccak_id<T>(env: &Env, data: T) -> BytesN<32>
where
    T: IntoVal<Env, Val>,
{
    env.crypto().keccak256(&data.to_xdr(env)).into()
}

/// The all-zero id, used as "no reference".
pub fn zero_id(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0; 32])
}

pub fn is_zero_id(id: &BytesN<32>) -> bool {
    id.to_array() == [0; 32]
}
