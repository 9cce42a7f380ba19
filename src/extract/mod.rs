//! # Layer 0: Extraction
//!
//! Obtaining the compiler's raw spelling of a type.
//!
//! The raw spelling is the fully path-qualified form the compiler uses
//! internally (`alloc::vec::Vec<i32>`, `&mut [u8]`). Two strategies produce
//! it, both behind the single-method [`NameExtractor`] seam:
//!
//! - [`IntrinsicLookup`]: ask the compiler directly. The clean primitive.
//! - [`SignatureSlice`]: embed the type in a marker generic and slice its
//!   spelling out of the enclosing pretty name between a literal anchor and
//!   the matching terminator bracket.
//!
//! The strategies are interchangeable: same input type, byte-identical
//! output. Cargo features select which one backs [`DefaultExtract`];
//! `intrinsic` wins when both are enabled. Enabling neither is a build
//! configuration error, not a runtime fallback.

pub mod lookup;
pub mod slice;

pub use lookup::IntrinsicLookup;
pub use slice::SignatureSlice;

/// Strategy seam for raw-name extraction.
///
/// Implementations are pure: the returned string is compiler-embedded
/// constant data, so repeated calls for the same `T` are byte-identical.
pub trait NameExtractor {
    /// The compiler's spelling of `T`, untouched.
    fn raw_name<T: ?Sized>() -> &'static str;
}

/// The build-selected extraction strategy.
#[cfg(feature = "intrinsic")]
pub type DefaultExtract = IntrinsicLookup;

/// The build-selected extraction strategy.
#[cfg(all(feature = "probe", not(feature = "intrinsic")))]
pub type DefaultExtract = SignatureSlice;

#[cfg(not(any(feature = "intrinsic", feature = "probe")))]
compile_error!(
    "ty-lens: no extraction strategy selected; enable the `intrinsic` or `probe` feature"
);
