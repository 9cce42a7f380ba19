//! `#[derive(StaticName)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn expand_derive_static_name(input: DeriveInput) -> TokenStream {
    // A generic type has no single spelling; each instantiation names
    // itself through runtime resolution instead.
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "StaticName cannot be derived for generic types; use ty_lens::resolve for instantiations",
        )
        .to_compile_error();
    }

    let ident = &input.ident;
    let name = ident.to_string();
    quote! {
        ::ty_lens::__impl_static_name!(#ident, #name);
    }
}
