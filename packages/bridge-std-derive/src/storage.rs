use std::convert::TryFrom;

use heck::ToSnakeCase;
use itertools::Itertools;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Attribute, Data, DataEnum, DeriveInput, Fields, FieldsNamed, Meta, Type, Variant};

enum Value {
    Status,
    Type(Type),
}

impl TryFrom<&[Attribute]> for Value {
    type Error = String;

    fn try_from(attrs: &[Attribute]) -> Result<Self, Self::Error> {
        let attr = attrs
            .iter()
            .filter(|attr| attr.path().is_ident("status") || attr.path().is_ident("value"))
            .exactly_one()
            .map_err(|_| "exactly one of #[status] and #[value(Type)] must be provided")?;

        if attr.path().is_ident("status") {
            return Ok(Self::Status);
        }

        match &attr.meta {
            Meta::List(list) => list
                .parse_args::<Type>()
                .map(Self::Type)
                .map_err(|_| "failed to parse value type".into()),
            _ => Err("value attribute must contain a type parameter: #[value(Type)]".into()),
        }
    }
}

#[derive(Debug)]
enum StorageType {
    Instance,
    Persistent,
    Temporary,
}

impl TryFrom<&[Attribute]> for StorageType {
    type Error = String;

    fn try_from(attrs: &[Attribute]) -> Result<Self, Self::Error> {
        attrs
            .iter()
            .filter_map(|attr| match attr {
                _ if attr.path().is_ident("instance") => Some(Self::Instance),
                _ if attr.path().is_ident("persistent") => Some(Self::Persistent),
                _ if attr.path().is_ident("temporary") => Some(Self::Temporary),
                _ => None,
            })
            .exactly_one()
            .map_err(|_| {
                "storage type must be specified exactly once as 'instance', 'persistent', or 'temporary'"
                    .to_string()
            })
    }
}

impl StorageType {
    fn storage_method(&self) -> TokenStream {
        match self {
            Self::Instance => quote! { instance() },
            Self::Persistent => quote! { persistent() },
            Self::Temporary => quote! { temporary() },
        }
    }

    /// Temporary entries keep the TTL they were written with.
    fn extend_ttl(&self) -> TokenStream {
        match self {
            Self::Instance => quote! { bridge_std::ttl::extend_instance_ttl(env); },
            Self::Persistent => quote! { bridge_std::ttl::extend_persistent_ttl(env, &key); },
            Self::Temporary => quote! {},
        }
    }
}

/// A storage enum variant together with its parsed attributes.
struct StorageEntry<'a> {
    enum_name: &'a Ident,
    variant: &'a Variant,
    storage_type: StorageType,
    value: Value,
}

impl<'a> StorageEntry<'a> {
    fn new(enum_name: &'a Ident, variant: &'a Variant) -> Self {
        let attrs = variant.attrs.as_slice();

        Self {
            enum_name,
            variant,
            storage_type: StorageType::try_from(attrs).unwrap_or_else(|err| panic!("{err}")),
            value: Value::try_from(attrs).unwrap_or_else(|err| panic!("{err}")),
        }
    }

    fn field_names(&self) -> Vec<&Ident> {
        match &self.variant.fields {
            Fields::Unit => vec![],
            Fields::Named(fields) => fields.named.iter().filter_map(|f| f.ident.as_ref()).collect(),
            _ => panic!("only unit variants or named fields are supported in storage enums"),
        }
    }

    fn field_types(&self) -> Vec<&Type> {
        match &self.variant.fields {
            Fields::Unit => vec![],
            Fields::Named(fields) => fields.named.iter().map(|f| &f.ty).collect(),
            _ => panic!("only unit variants or named fields are supported in storage enums"),
        }
    }

    /// `env` followed by one parameter per key field.
    fn params(&self) -> TokenStream {
        let names = self.field_names();
        let types = self.field_types();

        quote! { env: &soroban_sdk::Env #(, #names: #types)* }
    }

    fn key(&self) -> TokenStream {
        let enum_name = self.enum_name;
        let variant_ident = &self.variant.ident;
        let names = self.field_names();

        if names.is_empty() {
            quote! { #enum_name::#variant_ident }
        } else {
            quote! { #enum_name::#variant_ident(#(#names),*) }
        }
    }

    fn fns(&self) -> TokenStream {
        let ident = self.variant.ident.to_string().to_snake_case();
        let params = self.params();
        let key = self.key();
        let storage = self.storage_type.storage_method();
        let extend_ttl = self.storage_type.extend_ttl();

        match &self.value {
            Value::Status => {
                let is_fn = format_ident!("is_{}", ident);
                let set_fn = format_ident!("set_{}_status", ident);
                let remove_fn = format_ident!("remove_{}_status", ident);

                quote! {
                    pub fn #is_fn(#params) -> bool {
                        let key = #key;
                        let value = env.storage().#storage.has(&key);

                        if value {
                            #extend_ttl
                        }

                        value
                    }

                    pub fn #set_fn(#params) {
                        let key = #key;
                        env.storage().#storage.set(&key, &());

                        #extend_ttl
                    }

                    pub fn #remove_fn(#params) {
                        let key = #key;
                        env.storage().#storage.remove(&key);
                    }
                }
            }
            Value::Type(value_type) => {
                let get_fn = format_ident!("{}", ident);
                let try_get_fn = format_ident!("try_{}", ident);
                let set_fn = format_ident!("set_{}", ident);
                let remove_fn = format_ident!("remove_{}", ident);

                quote! {
                    pub fn #get_fn(#params) -> #value_type {
                        let key = #key;
                        let value = env.storage()
                            .#storage
                            .get::<_, #value_type>(&key)
                            .unwrap();

                        #extend_ttl

                        value
                    }

                    pub fn #try_get_fn(#params) -> Option<#value_type> {
                        let key = #key;
                        let value = env.storage()
                            .#storage
                            .get::<_, #value_type>(&key);

                        if value.is_some() {
                            #extend_ttl
                        }

                        value
                    }

                    pub fn #set_fn(#params, value: &#value_type) {
                        let key = #key;
                        env.storage().#storage.set(&key, value);

                        #extend_ttl
                    }

                    pub fn #remove_fn(#params) {
                        let key = #key;
                        env.storage().#storage.remove(&key);
                    }
                }
            }
        }
    }
}

/// Turns a named-field variant into the tuple variant used as the storage key map.
///
/// ```rust,ignore
/// TokenId { token_id: BytesN<32> }  =>  TokenId(BytesN<32>)
/// ```
fn key_variant(variant: &Variant) -> TokenStream {
    let variant_name = &variant.ident;

    match &variant.fields {
        Fields::Unit => quote! { #variant_name },
        Fields::Named(FieldsNamed { named, .. }) => {
            let types = named.iter().map(|f| &f.ty);
            quote! { #variant_name(#(#types),*) }
        }
        _ => panic!("only unit variants or named fields are supported in storage enums"),
    }
}

/// Generates the storage key enum and its accessor functions.
pub fn contract_storage(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        panic!("contractstorage can only be used on enums");
    };

    let key_variants = variants.iter().map(key_variant);
    let fns = variants
        .iter()
        .map(|variant| StorageEntry::new(name, variant).fns());

    quote! {
        #[contracttype]
        enum #name {
            #(#key_variants,)*
        }

        #(#fns)*
    }
}
