use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ItemFn;

/// Prepends `guard` to the body of `input_fn`.
///
/// The guard refers to `env`, so the function's first parameter must be named `env`.
pub fn modifier_impl(input_fn: ItemFn, guard: TokenStream2) -> TokenStream2 {
    let fn_vis = &input_fn.vis;
    let fn_sig = &input_fn.sig;
    let fn_name = &fn_sig.ident;
    let fn_generics = &fn_sig.generics;
    let fn_inputs = &fn_sig.inputs;
    let fn_output = &fn_sig.output;
    let fn_body = &input_fn.block;
    let fn_attrs = &input_fn.attrs;

    let Some(syn::FnArg::Typed(pat_type)) = fn_inputs.first() else {
        panic!("first parameter must be a typed parameter")
    };
    let syn::Pat::Ident(pat_ident) = &*pat_type.pat else {
        panic!("first parameter must be a simple identifier")
    };
    assert!(
        pat_ident.ident == "env",
        "first parameter must be named 'env'"
    );

    quote! {
        #(#fn_attrs)*
        #fn_vis fn #fn_name #fn_generics(#fn_inputs) #fn_output {
            #guard

            #fn_body
        }
    }
}
