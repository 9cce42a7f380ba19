//! Coarse builtin identification.
//!
//! `TypeId`-keyed fallback: maps a type to its fundamental keyword, or
//! `None`. Coarser than spelling extraction: qualified forms (`&i32`,
//! `*const i32`) are distinct `TypeId`s and never match the table, so this
//! path cannot see `const`, references, or pointers. Reach for it when
//! identity matters and spelling fidelity does not.

use core::any::TypeId;

macro_rules! builtin_table {
    ($($ty:ty => $name:literal),* $(,)?) => {
        /// Look up a fundamental type by runtime identity.
        ///
        /// Returns the canonical keyword for the fundamental types (every
        /// integer width, the floats, `bool`, `char`, `str`, `()`), `None`
        /// for anything else.
        pub fn identify<T: ?Sized + 'static>() -> Option<&'static str> {
            let id = TypeId::of::<T>();
            $(
                if id == TypeId::of::<$ty>() {
                    return Some($name);
                }
            )*
            None
        }
    };
}

builtin_table! {
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    str => "str",
    () => "()",
}

#[cfg(test)]
mod tests {
    use super::identify;

    macro_rules! keyword_tests {
        ($($ty:ident),* $(,)?) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<keyword_ $ty>]() {
                        assert_eq!(identify::<$ty>(), Some(stringify!($ty)));
                    }
                )*
            }
        };
    }

    keyword_tests!(
        bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    );

    #[test]
    fn keyword_unit() {
        assert_eq!(identify::<()>(), Some("()"));
    }
}
