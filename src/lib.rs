#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables owned names in no_std
// - intrinsic / probe: extraction strategy selection
// - builtin: TypeId-keyed coarse identification

//! # ty-lens
//!
//! Deterministic type-name introspection for Rust.
//!
//! **Ask the compiler what a type is called, get a display-ready answer.**
//!
//! ## Architecture
//!
//! `ty-lens` turns a compile-time type parameter into a human-readable name
//! in two steps:
//!
//! ### 1. Extraction
//! A strategy behind the [`NameExtractor`] seam obtains the compiler's raw
//! spelling of the type:
//!
//! ```text
//! T -> "alloc::vec::Vec<core::option::Option<i32>>"
//! ```
//!
//! Two interchangeable strategies exist. [`IntrinsicLookup`] asks the
//! compiler directly; [`SignatureSlice`] embeds the type in a marker
//! generic's pretty name and slices it back out between a literal anchor and
//! its matching bracket. Cargo features pick the default.
//!
//! ### 2. Normalization
//! A single-pass scanner splits the spelling into path runs and structural
//! punctuation, then trims module paths per a [`Style`]:
//!
//! ```text
//! "alloc::vec::Vec<core::option::Option<i32>>" -> "Vec<Option<i32>>"
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Extraction                                              |
//! |  - NameExtractor (seam), IntrinsicLookup, SignatureSlice          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Normalization                                           |
//! |  - Scanner (path runs / punctuation), Style, NormalizedName       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - resolve, TypeDescriptor, StaticName, builtin::identify,        |
//! |    static_name! / static_name_full!                               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Guarantees
//!
//! - **Deterministic**: two calls for the same type are byte-identical.
//!   There is no cache, interning table, or other process-wide state behind
//!   any of it; each call reads compiler-embedded constant data and owns its
//!   buffers exclusively.
//! - **Total**: resolution cannot fail at runtime. The only failure mode is
//!   at build time, when no extraction strategy feature is enabled.
//! - **Pure**: no I/O, no blocking, freely callable from concurrent
//!   contexts without synchronization.
//!
//! ## Quick Start
//!
//! ```
//! use ty_lens::prelude::*;
//!
//! assert_eq!(resolve::<i32>(), "i32");
//! assert_eq!(resolve::<Vec<Option<i32>>>(), "Vec<Option<i32>>");
//! assert_eq!(resolve::<&mut [u8]>(), "&mut [u8]");
//!
//! // Full paths when short names are too coarse
//! assert!(resolve_full::<Vec<i32>>().ends_with("vec::Vec<i32>"));
//!
//! // Name the type of an expression
//! let v = vec![1u8, 2, 3];
//! assert_eq!(name_of_val(&v), "Vec<u8>");
//! ```

// Allow `::ty_lens` to work inside the crate itself
extern crate self as ty_lens;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for table-generation macros
pub use paste;

// =============================================================================
// Layer 0: Extraction
// =============================================================================
pub mod extract;

// =============================================================================
// Layer 1: Normalization
// =============================================================================
pub mod normalize;

// =============================================================================
// Layer 2: User API
// =============================================================================
pub mod descriptor;
pub mod fingerprint;

#[cfg(feature = "builtin")]
pub mod builtin;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use extract::{DefaultExtract, IntrinsicLookup, NameExtractor, SignatureSlice};
pub use normalize::{PathStyle, Style, write_normalized};
#[cfg(feature = "alloc")]
pub use normalize::{NormalizedName, normalize};
pub use descriptor::{StaticName, TypeDescriptor, descriptor, raw_name, write_name};
#[cfg(feature = "alloc")]
pub use descriptor::{name_of_val, resolve, resolve_full, resolve_with};
pub use fingerprint::fnv1a_64;

// Re-export proc-macros
pub use macros::{StaticName, static_name, static_name_full};

// =============================================================================
// Declarative Macro Bridge for #[derive(StaticName)]
// =============================================================================
//
// Three-layer macro architecture to get module_path!() into proc-macros:
// 1. #[derive(StaticName)] (proc-macro) generates __impl_static_name! call
// 2. __impl_static_name! (this decl-macro) expands concat!(module_path!(), ...)
//    in the deriving crate, where the path is visible

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(StaticName)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_static_name {
    ($ty:ty, $name:expr) => {
        impl $crate::StaticName for $ty {
            // FULL is anchored at the defining module; only module_path!()
            // expanded at the derive site can see it.
            const FULL: &'static str = concat!(module_path!(), "::", $name);
            const SHORT: &'static str = $name;
        }
    };
}

/// Common items for type-name introspection.
pub mod prelude {
    pub use crate::descriptor::{StaticName, TypeDescriptor, descriptor, raw_name, write_name};
    #[cfg(feature = "alloc")]
    pub use crate::descriptor::{name_of_val, resolve, resolve_full, resolve_with};
    #[cfg(feature = "alloc")]
    pub use crate::normalize::NormalizedName;
    pub use crate::normalize::{PathStyle, Style};
    pub use macros::{StaticName, static_name, static_name_full};
}
