//! Every fundamental type resolves to exactly its keyword.

use ty_lens::prelude::*;

macro_rules! primitive_resolves {
    ($($ty:ident),* $(,)?) => {
        ty_lens::paste::paste! {
            $(
                #[test]
                fn [<resolves_ $ty>]() {
                    assert_eq!(resolve::<$ty>(), stringify!($ty));
                }
            )*
        }
    };
}

primitive_resolves!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
);

#[test]
fn resolves_unit() {
    assert_eq!(resolve::<()>(), "()");
}

#[test]
fn int_is_not_widened_or_narrowed() {
    // A name, not a family: i32 must never read as i64 or i16
    let name = resolve::<i32>();
    assert_eq!(name, "i32");
    assert_ne!(name, resolve::<i64>());
    assert_ne!(name, resolve::<i16>());
}
