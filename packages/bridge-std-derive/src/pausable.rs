use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemFn, Path};

use crate::modifier::modifier_impl;

/// Guards the function with the shared pause flag, returning `error` while paused.
///
/// Without an explicit error path, `ContractError::ContractPaused` is used.
pub fn when_not_paused_impl(input_fn: ItemFn, error: Option<Path>) -> TokenStream2 {
    let error = error.map_or_else(|| quote! { ContractError::ContractPaused }, |path| quote! { #path });

    modifier_impl(
        input_fn,
        quote! {
            bridge_std::ensure!(!bridge_std::interfaces::paused(&env), #error);
        },
    )
}
