//! Normalization styles across the type grammar.

use ty_lens::prelude::*;

#[test]
fn short_names_strip_module_paths() {
    assert_eq!(resolve::<Vec<i32>>(), "Vec<i32>");
    assert_eq!(resolve::<String>(), "String");
    assert_eq!(resolve::<Option<Vec<String>>>(), "Option<Vec<String>>");
}

#[test]
fn full_names_keep_module_paths() {
    let name = resolve_full::<Vec<i32>>();
    assert!(name.ends_with("vec::Vec<i32>"), "got {name}");
    assert!(name.contains("::"));
}

#[test]
fn tail_keeps_the_requested_segments() {
    assert_eq!(resolve_with::<Vec<i32>>(Style::tail(2)), "vec::Vec<i32>");
    // More segments than the path has falls back to the whole path
    let all = resolve_with::<Vec<i32>>(Style::tail(99));
    assert_eq!(all, resolve_full::<Vec<i32>>());
}

#[test]
fn default_style_is_short() {
    assert_eq!(
        resolve_with::<Vec<i32>>(Style::default()),
        resolve::<Vec<i32>>()
    );
}

#[test]
fn tuples_keep_shape() {
    assert_eq!(resolve::<(i32, &str)>(), "(i32, &str)");
    assert_eq!(resolve::<(String,)>(), "(String,)");
}

#[test]
fn arrays_and_slices_keep_shape() {
    assert_eq!(resolve::<[u8; 4]>(), "[u8; 4]");
    assert_eq!(resolve::<&[i32]>(), "&[i32]");
    assert_eq!(resolve::<&mut [Vec<u8>]>(), "&mut [Vec<u8>]");
}

#[test]
fn fn_pointers_keep_signature() {
    assert_eq!(resolve::<fn(i32, f64) -> bool>(), "fn(i32, f64) -> bool");
    assert_eq!(resolve::<fn()>(), "fn()");
}

#[test]
fn trait_objects_trim_their_paths() {
    assert_eq!(
        resolve::<Box<dyn std::fmt::Debug>>(),
        "Box<dyn Debug>"
    );
}

#[test]
fn resolved_associated_types_name_the_projection_target() {
    assert_eq!(resolve::<<Vec<i32> as IntoIterator>::Item>(), "i32");
}

#[test]
fn write_name_matches_owned_rendering() {
    let mut out = String::new();
    ty_lens::write_name::<Option<i32>, _>(Style::SHORT, &mut out).unwrap();
    assert_eq!(out, resolve::<Option<i32>>().as_str());
}

#[test]
fn raw_name_is_the_untrimmed_spelling() {
    let raw = raw_name::<Vec<i32>>();
    assert!(raw.ends_with("Vec<i32>"), "got {raw}");
    assert_eq!(resolve_full::<Vec<i32>>(), raw);
}
