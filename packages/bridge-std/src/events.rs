use core::fmt::Debug;

use soroban_sdk::{Env, Val, Vec};
#[cfg(any(test, feature = "testutils"))]
pub use testutils::*;

/// A contract event with typed topics and data.
///
/// Implemented through `#[derive(IntoEvent)]`. Topics start with the event name symbol,
/// followed by every field without `#[data]`. The data is a `Vec<Val>` of the `#[data]` fields.
pub trait Event: Debug + PartialEq + Sized {
    fn emit(self, env: &Env);

    /// Decodes an event from its published topics and data.
    ///
    /// Panics if the event name or the field types do not match.
    fn from_event(env: &Env, topics: Vec<Val>, data: Val) -> Self;

    /// Human readable layout of the event, used for review of event changes.
    fn schema(env: &Env) -> &'static str;
}

#[cfg(any(test, feature = "testutils"))]
mod testutils {
    use soroban_sdk::testutils::Events;
    use soroban_sdk::Env;

    use crate::events::Event;

    /// Decodes the last event published in the current invocation.
    pub fn last_emitted_event<E: Event>(env: &Env) -> E {
        let (_, topics, data) = env.events().all().last().expect("no event found");
        E::from_event(env, topics, data)
    }

    /// Decodes the event at `idx`, counting from the end when `idx` is negative.
    pub fn emitted_event_at_idx<E: Event>(env: &Env, mut idx: i32) -> E {
        let events = env.events().all();
        if idx < 0 {
            idx += events.len() as i32;
        }

        let (_, topics, data) = events
            .get(idx as u32)
            .expect("no event found at the given index");
        E::from_event(env, topics, data)
    }

    /// Counts the events published in the current invocation.
    pub fn event_count(env: &Env) -> u32 {
        env.events().all().len()
    }
}
