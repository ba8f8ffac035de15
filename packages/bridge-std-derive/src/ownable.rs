use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::ItemFn;

use crate::modifier::modifier_impl;

pub fn ownable(name: &Ident) -> TokenStream2 {
    quote! {
        use bridge_std::interfaces::OwnableInterface as _;

        #[soroban_sdk::contractimpl]
        impl bridge_std::interfaces::OwnableInterface for #name {
            fn owner(env: &soroban_sdk::Env) -> soroban_sdk::Address {
                bridge_std::interfaces::owner(env)
            }

            fn transfer_ownership(env: &soroban_sdk::Env, new_owner: soroban_sdk::Address) {
                bridge_std::interfaces::transfer_ownership::<Self>(env, new_owner);
            }
        }
    }
}

pub fn only_owner_impl(input_fn: ItemFn) -> TokenStream2 {
    modifier_impl(
        input_fn,
        quote! {
            Self::owner(&env).require_auth();
        },
    )
}
