//! # Layer 2: User API
//!
//! Descriptors and the `resolve` family.
//!
//! [`TypeDescriptor`] is the handle form - a zero-sized value identifying a
//! type, for passing around, formatting, and fingerprinting. The free
//! functions are the call-site form: `resolve::<T>()` and friends answer
//! directly.

use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;

use crate::extract::{DefaultExtract, NameExtractor};
use crate::fingerprint::fnv1a_64;
use crate::normalize::{Style, write_normalized};

#[cfg(feature = "alloc")]
use crate::normalize::{NormalizedName, normalize};

// =============================================================================
// TypeDescriptor
// =============================================================================

/// Compile-time handle identifying a fully-qualified type.
///
/// Zero-sized; carries `T` only in its type parameter. The `fn() -> T`
/// marker keeps the handle `Copy + Send + Sync` regardless of `T`.
///
/// ```
/// use ty_lens::descriptor;
///
/// let d = descriptor::<Vec<i32>>();
/// assert_eq!(d.name(), "Vec<i32>");
/// assert_eq!(d.fingerprint(), d.fingerprint());
/// ```
pub struct TypeDescriptor<T: ?Sized> {
    marker: PhantomData<fn() -> T>,
}

impl<T: ?Sized> TypeDescriptor<T> {
    pub const fn new() -> Self {
        TypeDescriptor {
            marker: PhantomData,
        }
    }

    /// The compiler's spelling, exactly as extracted.
    pub fn raw(self) -> &'static str {
        DefaultExtract::raw_name::<T>()
    }

    /// Short display name.
    #[cfg(feature = "alloc")]
    pub fn name(self) -> NormalizedName {
        normalize(self.raw(), Style::SHORT)
    }

    /// Display name rendered with the given style.
    #[cfg(feature = "alloc")]
    pub fn name_with(self, style: Style) -> NormalizedName {
        normalize(self.raw(), style)
    }

    /// Render the name into a sink without allocating.
    pub fn write_name<W: fmt::Write>(self, style: Style, out: &mut W) -> fmt::Result {
        write_normalized(self.raw(), style, out)
    }

    /// 64-bit FNV-1a of the raw spelling.
    ///
    /// Cheap distinctness check across types. Collides only when two types
    /// share a spelling, the documented limit of textual identity.
    pub fn fingerprint(self) -> u64 {
        fnv1a_64(self.raw())
    }

    /// Runtime identity, for owned types.
    pub fn id(self) -> TypeId
    where
        T: 'static,
    {
        TypeId::of::<T>()
    }
}

// Manual impls: derives would bound T
impl<T: ?Sized> Clone for TypeDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeDescriptor<T> {}

impl<T: ?Sized> Default for TypeDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeDescriptor<")?;
        self.write_name(Style::SHORT, f)?;
        f.write_str(">")
    }
}

/// Descriptor for `T`.
pub const fn descriptor<T: ?Sized>() -> TypeDescriptor<T> {
    TypeDescriptor::new()
}

// =============================================================================
// The resolve family
// =============================================================================

/// The compiler's spelling of `T`, untouched.
pub fn raw_name<T: ?Sized>() -> &'static str {
    DefaultExtract::raw_name::<T>()
}

/// Short display name of `T`.
///
/// ```
/// use ty_lens::resolve;
///
/// assert_eq!(resolve::<i32>(), "i32");
/// assert_eq!(resolve::<Vec<i32>>(), "Vec<i32>");
/// ```
#[cfg(feature = "alloc")]
pub fn resolve<T: ?Sized>() -> NormalizedName {
    normalize(raw_name::<T>(), Style::SHORT)
}

/// Fully path-qualified display name of `T`.
#[cfg(feature = "alloc")]
pub fn resolve_full<T: ?Sized>() -> NormalizedName {
    normalize(raw_name::<T>(), Style::FULL)
}

/// Display name of `T` rendered with the given style.
#[cfg(feature = "alloc")]
pub fn resolve_with<T: ?Sized>(style: Style) -> NormalizedName {
    normalize(raw_name::<T>(), style)
}

/// Render the name of `T` into a sink without allocating.
pub fn write_name<T: ?Sized, W: fmt::Write>(style: Style, out: &mut W) -> fmt::Result {
    write_normalized(raw_name::<T>(), style, out)
}

/// Short display name of a value's type.
///
/// Deduces through a shared reference, so the expression's own top-level
/// reference-ness is not preserved; name the type explicitly when that
/// distinction matters.
///
/// ```
/// use ty_lens::name_of_val;
///
/// let v = vec![1u8, 2, 3];
/// assert_eq!(name_of_val(&v), "Vec<u8>");
/// assert_eq!(name_of_val("hello"), "str");
/// ```
#[cfg(feature = "alloc")]
pub fn name_of_val<T: ?Sized>(_val: &T) -> NormalizedName {
    resolve::<T>()
}

// =============================================================================
// StaticName
// =============================================================================

/// Nominal types with a name fixed at the definition site.
///
/// Implemented via `#[derive(StaticName)]`, which anchors [`FULL`] at the
/// defining module through `module_path!()` - the spelling is a `const`, no
/// extraction involved.
///
/// [`FULL`]: StaticName::FULL
pub trait StaticName {
    /// `module::path::Name` of the definition site.
    const FULL: &'static str;
    /// The bare type name.
    const SHORT: &'static str;
}
