use soroban_sdk::{Env, IntoVal, Val};

const LEDGERS_PER_DAY: u32 = (24 * 3600) / 5;
const INSTANCE_TTL_THRESHOLD: u32 = LEDGERS_PER_DAY;
const INSTANCE_TTL_EXTEND_TO: u32 = 60 * LEDGERS_PER_DAY;
const PERSISTENT_TTL_THRESHOLD: u32 = 14 * LEDGERS_PER_DAY;
const PERSISTENT_TTL_EXTEND_TO: u32 = 60 * LEDGERS_PER_DAY;

/// Extends the TTL of the contract instance and its instance storage.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

/// Extends the TTL of a persistent storage entry.
pub fn extend_persistent_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}
