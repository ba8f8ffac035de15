use soroban_sdk::{
    contract, contractimpl, contracttype, Address, BytesN, Env, IntoVal, Symbol, Val, Vec,
};

use crate::error::ContractError;
use crate::testutils::TestConfig;

#[contract]
pub struct TestTarget;

#[contracttype]
enum DataKey {
    Value,
}

#[contractimpl]
impl TestTarget {
    pub fn record(env: &Env, value: u32) -> u32 {
        env.storage().instance().set(&DataKey::Value, &value);
        value
    }

    pub fn recorded(env: &Env) -> Option<u32> {
        env.storage().instance().get(&DataKey::Value)
    }

    pub fn fail(_env: &Env) {
        panic!("target failure");
    }
}

/// The inputs identifying an operation, as passed to `schedule` and `execute`.
#[derive(Clone)]
pub struct TimelockCall {
    pub target: Address,
    pub value: i128,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub predecessor: BytesN<32>,
    pub salt: BytesN<32>,
}

impl TimelockCall {
    pub fn new(
        env: &Env,
        target: &Address,
        function: &str,
        args: Vec<Val>,
        salt: u8,
    ) -> Self {
        Self {
            target: target.clone(),
            value: 0,
            function: Symbol::new(env, function),
            args,
            predecessor: BytesN::from_array(env, &[0; 32]),
            salt: BytesN::from_array(env, &[salt; 32]),
        }
    }

    /// A call of `TestTarget::record(value)`.
    pub fn record(env: &Env, target: &Address, value: u32, salt: u8) -> Self {
        Self::new(env, target, "record", Vec::from_array(env, [value.into_val(env)]), salt)
    }

    pub fn with_predecessor(mut self, predecessor: &BytesN<32>) -> Self {
        self.predecessor = predecessor.clone();
        self
    }

    pub fn with_value(mut self, value: i128) -> Self {
        self.value = value;
        self
    }

    pub fn id(&self, config: &TestConfig) -> BytesN<32> {
        config.client.hash_operation(
            &self.target,
            &self.value,
            &self.function,
            &self.args,
            &self.predecessor,
            &self.salt,
        )
    }

    pub fn schedule(&self, config: &TestConfig, delay: u64) -> BytesN<32> {
        config.client.schedule(
            &config.proposer,
            &self.target,
            &self.value,
            &self.function,
            &self.args,
            &self.predecessor,
            &self.salt,
            &delay,
        )
    }

    /// Approves with the first `threshold` approvers.
    pub fn approve(&self, config: &TestConfig) {
        let id = self.id(config);

        for approver in config.approvers.iter().take(config.client.threshold() as usize) {
            config.client.approve(&approver, &id);
        }
    }

    pub fn execute(&self, config: &TestConfig) -> Val {
        config.client.execute(
            &config.executor,
            &self.target,
            &self.value,
            &self.function,
            &self.args,
            &self.predecessor,
            &self.salt,
        )
    }

    /// Executes as the configured executor and returns the contract error the call failed with.
    pub fn execute_err(&self, config: &TestConfig) -> ContractError {
        self.execute_err_as(config, &config.executor)
    }

    pub fn execute_err_as(&self, config: &TestConfig, caller: &Address) -> ContractError {
        match config.client.try_execute(
            caller,
            &self.target,
            &self.value,
            &self.function,
            &self.args,
            &self.predecessor,
            &self.salt,
        ) {
            Err(Ok(err)) => err,
            other => panic!("expected a contract error, got {other:?}"),
        }
    }
}
