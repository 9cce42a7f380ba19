//! Procedural macros for ty-lens type-name introspection
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `static_name!` | type | Short display name as a string literal |
//! | `static_name_full!` | type | The written spelling, canonical spacing |
//! | `#[derive(StaticName)]` | struct/enum | Module-path-anchored name consts |
//!
//! The function-like macros render a *written* type at expansion time - no
//! extraction, no runtime cost, just tokens in and a `&'static str` out.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod derive;
mod render;

/// Render the short display name of a written type at expansion time.
///
/// # Usage
/// ```ignore
/// assert_eq!(static_name!(std::vec::Vec<i32>), "Vec<i32>");
/// assert_eq!(static_name!(fn(i32) -> bool), "fn(i32) -> bool");
/// ```
///
/// The output matches what runtime resolution produces for the same type
/// under the short style, with one caveat: the macro sees the type as
/// written, so aliases are not resolved.
#[proc_macro]
pub fn static_name(input: TokenStream) -> TokenStream {
    let ty = parse_macro_input!(input as syn::Type);
    render::expand_static_name(&ty, render::Paths::Short).into()
}

/// Render a written type with its full written paths and canonical spacing.
///
/// # Usage
/// ```ignore
/// assert_eq!(static_name_full!(std::vec::Vec<i32>), "std::vec::Vec<i32>");
/// ```
#[proc_macro]
pub fn static_name_full(input: TokenStream) -> TokenStream {
    let ty = parse_macro_input!(input as syn::Type);
    render::expand_static_name(&ty, render::Paths::Full).into()
}

/// Derive macro implementing the `StaticName` trait.
///
/// Emits a `ty_lens::__impl_static_name!` bridge call so that
/// `module_path!()` expands in the deriving crate - the proc-macro itself
/// cannot see the caller's module path.
///
/// # Usage
/// ```ignore
/// #[derive(StaticName)]
/// struct Widget;
///
/// assert_eq!(Widget::SHORT, "Widget");
/// assert!(Widget::FULL.ends_with("::Widget"));
/// ```
#[proc_macro_derive(StaticName)]
pub fn derive_static_name(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    derive::expand_derive_static_name(input).into()
}
