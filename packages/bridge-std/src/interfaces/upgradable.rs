use core::fmt::Debug;

use soroban_sdk::{contractclient, BytesN, Env, FromVal, String, Val};

use crate as bridge_std;
use crate::events::Event;
use crate::interfaces::{storage, OwnableInterface};
use crate::IntoEvent;

#[contractclient(name = "UpgradableClient")]
pub trait UpgradableInterface: OwnableInterface {
    /// Returns the current version of the contract.
    fn version(env: &Env) -> String;

    /// Replaces the contract code with the WASM identified by `new_wasm_hash`. Only callable by the owner.
    ///
    /// State stays in place and the contract must be migrated afterwards.
    fn upgrade(env: &Env, new_wasm_hash: BytesN<32>);
}

pub trait MigratableInterface: UpgradableInterface + CustomMigratableInterface {
    /// Error type returned if the migration fails.
    type Error: Into<soroban_sdk::Error>;

    /// Migrates contract state after upgrading the contract code.
    fn migrate(
        env: &Env,
        migration_data: Self::MigrationData,
    ) -> Result<(), <Self as MigratableInterface>::Error>;
}

/// Contract specific migration logic, run once by [`migrate`] after an upgrade.
///
/// `#[derive(Upgradable)]` provides an empty implementation unless the contract struct is marked `#[migratable]`.
pub trait CustomMigratableInterface: UpgradableInterface {
    /// Data needed during the migration, `()` if none.
    type MigrationData: FromVal<Env, Val>;
    /// Must implement `Into<ContractError>` when used with `#[derive(Upgradable)]`.
    type Error;

    fn __migrate(_env: &Env, _migration_data: Self::MigrationData) -> Result<(), Self::Error>;
}

/// Requires the owner's authorization, swaps the contract code and opens the migration window.
pub fn upgrade<T: OwnableInterface>(env: &Env, new_wasm_hash: BytesN<32>) {
    T::owner(env).require_auth();

    env.deployer().update_current_contract_wasm(new_wasm_hash);
    start_migration(env);
}

/// Runs the custom migration of `T` and closes the migration window.
///
/// Only the owner can migrate, and only once per [`upgrade`]. Emits [`UpgradedEvent`] when done.
pub fn migrate<T: CustomMigratableInterface>(
    env: &Env,
    migration_data: T::MigrationData,
) -> Result<(), MigrationError<T::Error>> {
    T::owner(env).require_auth();

    if !is_migrating(env) {
        return Err(MigrationError::NotAllowed);
    }

    T::__migrate(env, migration_data).map_err(MigrationError::ExecutionFailed)?;

    env.storage()
        .instance()
        .remove(&storage::migrating::DataKey::Interfaces_Migrating);

    UpgradedEvent {
        version: T::version(env),
    }
    .emit(env);

    Ok(())
}

pub(crate) fn start_migration(env: &Env) {
    env.storage()
        .instance()
        .set(&storage::migrating::DataKey::Interfaces_Migrating, &());
}

fn is_migrating(env: &Env) -> bool {
    env.storage()
        .instance()
        .has(&storage::migrating::DataKey::Interfaces_Migrating)
}

#[derive(Clone, Debug, PartialEq, Eq, IntoEvent)]
pub struct UpgradedEvent {
    #[data]
    pub version: String,
}

#[derive(Debug)]
pub enum MigrationError<T> {
    NotAllowed,
    ExecutionFailed(T),
}
