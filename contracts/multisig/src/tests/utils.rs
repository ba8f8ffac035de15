use bridge_std::events::Event;
use bridge_std::IntoEvent;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contract]
pub struct TestTarget;

#[contracttype]
enum DataKey {
    Value,
}

#[derive(Debug, PartialEq, Eq, IntoEvent)]
pub struct RecordedEvent {
    pub value: u32,
}

#[contractimpl]
impl TestTarget {
    pub fn record(env: &Env, value: u32) -> u32 {
        env.storage().instance().set(&DataKey::Value, &value);
        RecordedEvent { value }.emit(env);
        value
    }

    pub fn recorded(env: &Env) -> Option<u32> {
        env.storage().instance().get(&DataKey::Value)
    }

    /// Only succeeds when `caller` authorized the call, e.g. as the direct invoker.
    pub fn record_as(env: &Env, caller: Address, value: u32) -> u32 {
        caller.require_auth();
        Self::record(env, value)
    }

    pub fn fail(_env: &Env) {
        panic!("target failure");
    }
}
