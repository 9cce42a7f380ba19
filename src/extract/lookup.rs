//! Direct pretty-name lookup.

use super::NameExtractor;

/// The portable strategy: ask the compiler for the spelling directly.
///
/// Nothing to slice, nothing to trim, so nothing to get wrong. Preferred
/// wherever the primitive exists; [`SignatureSlice`](super::SignatureSlice)
/// covers the template-slicing convention.
pub struct IntrinsicLookup;

impl NameExtractor for IntrinsicLookup {
    fn raw_name<T: ?Sized>() -> &'static str {
        core::any::type_name::<T>()
    }
}
