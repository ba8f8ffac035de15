use core::fmt::Debug;

use soroban_sdk::Env;

use crate as bridge_std;
use crate::events::Event;
use crate::interfaces::storage;
use crate::IntoEvent;

// The pause state is shared, the authorization of who may toggle it belongs to the contract.

/// Returns whether the contract is currently paused.
pub fn paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .has(&storage::pausable::DataKey::Interfaces_Paused)
}

/// Marks the contract as paused and emits [`PausedEvent`]. Callers must authorize beforehand.
pub fn pause(env: &Env) {
    env.storage()
        .instance()
        .set(&storage::pausable::DataKey::Interfaces_Paused, &());

    PausedEvent {}.emit(env);
}

/// Clears the pause flag and emits [`UnpausedEvent`]. Callers must authorize beforehand.
pub fn unpause(env: &Env) {
    env.storage()
        .instance()
        .remove(&storage::pausable::DataKey::Interfaces_Paused);

    UnpausedEvent {}.emit(env);
}

#[derive(Clone, Debug, PartialEq, Eq, IntoEvent)]
pub struct PausedEvent {}

#[derive(Clone, Debug, PartialEq, Eq, IntoEvent)]
pub struct UnpausedEvent {}
