//! Note: tests of the generated code live in the `bridge-std` package, since the macros expand to `bridge_std` paths.

mod into_event;
mod modifier;
mod ownable;
mod pausable;
mod storage;
mod upgradable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Attribute, DeriveInput, ItemFn, Path};

/// Implements the Ownable interface for a Soroban contract.
///
/// # Example
/// ```rust,ignore
/// # mod test {
/// # use soroban_sdk::{contract, contractimpl, Address, Env};
/// use bridge_std_derive::Ownable;
///
/// #[contract]
/// #[derive(Ownable)]
/// pub struct Contract;
///
/// #[contractimpl]
/// impl Contract {
///     pub fn __constructor(env: &Env, owner: Address) {
///         bridge_std::interfaces::set_owner(env, &owner);
///     }
/// }
/// # }
/// ```
#[proc_macro_derive(Ownable)]
pub fn derive_ownable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    ownable::ownable(name).into()
}

/// Ensures that the contract is not paused before executing the function.
///
/// The first argument to the function must be `env`. The error returned while paused defaults to
/// `ContractError::ContractPaused` and can be given explicitly.
///
/// # Example
/// ```rust,ignore
/// # use soroban_sdk::{contract, contractimpl, contracterror, Address, Env};
/// use bridge_std::when_not_paused;
///
/// #[contracterror]
/// pub enum ContractError {
///     BridgePaused = 1,
/// }
///
/// #[contract]
/// pub struct Contract;
///
/// #[contractimpl]
/// impl Contract {
///     #[when_not_paused(ContractError::BridgePaused)]
///     pub fn deposit(env: &Env, from: Address, amount: i128) -> Result<(), ContractError> {
///         // ... deposit logic ...
///         Ok(())
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn when_not_paused(attr: TokenStream, item: TokenStream) -> TokenStream {
    let error = if attr.is_empty() {
        None
    } else {
        Some(parse_macro_input!(attr as Path))
    };
    let input_fn = parse_macro_input!(item as ItemFn);

    pausable::when_not_paused_impl(input_fn, error).into()
}

/// Implements the Upgradable and Migratable interfaces for a Soroban contract.
///
/// A `ContractError` error type must be defined in scope, and have a `MigrationNotAllowed` variant.
/// A default migration implementation is automatically provided. If custom migration code is required,
/// the `#[migratable]` attribute can be applied to the contract struct.
/// In that case, the contract must implement the `CustomMigratableInterface` trait, with an
/// associated `Error` type implementing `Into<ContractError>`.
///
/// # Example
/// ```rust,ignore
/// # mod test {
/// # use soroban_sdk::{contract, contractimpl, contracterror, Address, Env};
/// use bridge_std_derive::{Ownable, Upgradable};
/// # #[contracterror]
/// # #[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
/// # #[repr(u32)]
/// # pub enum ContractError {
/// #     MigrationNotAllowed = 1,
/// # }
///
/// #[contract]
/// #[derive(Ownable, Upgradable)]
/// pub struct Contract;
///
/// #[contractimpl]
/// impl Contract {
///     pub fn __constructor(env: &Env, owner: Address) {
///         bridge_std::interfaces::set_owner(env, &owner);
///     }
/// }
/// # }
/// ```
#[proc_macro_derive(Upgradable, attributes(migratable))]
pub fn derive_upgradable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    upgradable::upgradable(&input).into()
}

fn ensure_no_args(attr: &Attribute) -> syn::Result<&Path> {
    attr.meta.require_path_only()
}

/// Implements the `bridge_std::events::Event` trait for a contract event struct.
///
/// Fields without a `#[data]` attribute are used as topics, while fields with `#[data]` are used as event data.
/// The event name can be specified with `#[event_name(...)]` or will default to the struct name in snake_case (minus "Event" suffix).
///
/// # Example
/// ```rust,ignore
/// # mod test {
/// use core::fmt::Debug;
/// use bridge_std::events::Event;
/// use bridge_std::IntoEvent;
/// use soroban_sdk::{Address, BytesN, Env};
///
/// #[derive(Debug, PartialEq, IntoEvent)]
/// pub struct WithdrawSignedEvent {
///     pub redeem_id: BytesN<32>,
///     pub authority: Address,
///     #[data]
///     pub signatures: u32,
/// }
///
/// // Topics: ["withdraw_signed", redeem_id, authority]
/// // Data: [signatures]
/// # }
/// ```
#[proc_macro_derive(IntoEvent, attributes(data, event_name))]
pub fn derive_into_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    into_event::into_event(&input).into()
}

/// Ensures that only a contract's owner can execute the attributed function.
///
/// The first argument to the function must be `env`, and the contract must implement `OwnableInterface`.
///
/// # Example
/// ```rust,ignore
/// # use soroban_sdk::{contract, contractimpl, Address, Env};
/// use bridge_std::{only_owner, Ownable};
///
/// #[contract]
/// #[derive(Ownable)]
/// pub struct Contract;
///
/// #[contractimpl]
/// impl Contract {
///     #[only_owner]
///     pub fn set_fee_recipient(env: &Env, recipient: Address) {
///         // ...
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn only_owner(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);

    ownable::only_owner_impl(input_fn).into()
}

/// Implements a storage interface for a Stellar contract storage enum.
///
/// The enum variants define contract data keys, with optional named fields as contract data map keys.
/// Each variant requires a `#[value(Type)]` xor `#[status]` attribute to specify the stored value type,
/// and exactly one of `#[instance]`, `#[persistent]`, or `#[temporary]`.
///
/// For `#[value(T)]` variants, `x`, `try_x`, `set_x` and `remove_x` are generated; for `#[status]`
/// variants, `is_x`, `set_x_status` and `remove_x_status`. TTLs are extended on access.
///
/// # Example
/// ```rust,ignore
/// # mod test {
/// use soroban_sdk::{contracttype, Address, BytesN};
/// use bridge_std::contractstorage;
///
/// #[contractstorage]
/// enum DataKey {
///     #[instance]
///     #[value(u32)]
///     Threshold,
///
///     #[persistent]
///     #[status]
///     Confirmation { id: BytesN<32>, signer: Address },
/// }
///
/// // storage::set_threshold(env, &2);
/// // storage::is_confirmation(env, id, signer);
/// # }
/// ```
#[proc_macro_attribute]
pub fn contractstorage(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    storage::contract_storage(&input).into()
}

trait MapTranspose<T> {
    fn map_transpose<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Option<U>, E>;
}

impl<T> MapTranspose<T> for Option<T> {
    fn map_transpose<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Option<U>, E> {
        self.map(f).transpose()
    }
}
