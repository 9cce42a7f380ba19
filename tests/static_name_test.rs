//! Compile-time naming: #[derive(StaticName)] and the static_name! macros.

use ty_lens::prelude::*;

#[derive(StaticName)]
struct Widget;

mod gadgets {
    #[derive(ty_lens::StaticName)]
    pub struct Gadget;
}

#[test]
fn short_is_the_bare_ident() {
    assert_eq!(Widget::SHORT, "Widget");
    assert_eq!(gadgets::Gadget::SHORT, "Gadget");
}

#[test]
fn full_is_anchored_at_the_defining_module() {
    assert!(Widget::FULL.ends_with("::Widget"), "got {}", Widget::FULL);
    assert!(
        gadgets::Gadget::FULL.contains("gadgets"),
        "got {}",
        gadgets::Gadget::FULL
    );
}

#[test]
fn derive_agrees_with_runtime_resolution() {
    assert_eq!(resolve::<Widget>(), Widget::SHORT);
    assert_eq!(resolve::<gadgets::Gadget>(), gadgets::Gadget::SHORT);
}

#[test]
fn static_name_renders_written_types() {
    assert_eq!(static_name!(std::vec::Vec<i32>), "Vec<i32>");
    assert_eq!(static_name!(&mut [u8]), "&mut [u8]");
    assert_eq!(static_name!(fn(i32) -> bool), "fn(i32) -> bool");
    assert_eq!(static_name!((i32, String)), "(i32, String)");
    assert_eq!(static_name!([u8; 4]), "[u8; 4]");
    assert_eq!(static_name!(*const i32), "*const i32");
}

#[test]
fn static_name_full_keeps_the_written_path() {
    assert_eq!(static_name_full!(std::vec::Vec<i32>), "std::vec::Vec<i32>");
    assert_eq!(
        static_name_full!(core::option::Option<alloc::string::String>),
        "core::option::Option<alloc::string::String>"
    );
}

#[test]
fn static_name_handles_trait_objects() {
    assert_eq!(
        static_name!(Box<dyn std::fmt::Debug + Send>),
        "Box<dyn Debug + Send>"
    );
}

#[test]
fn static_name_agrees_with_runtime_resolution() {
    assert_eq!(resolve::<Vec<i32>>(), static_name!(Vec<i32>));
    assert_eq!(
        resolve::<fn(i32, f64) -> bool>(),
        static_name!(fn(i32, f64) -> bool)
    );
    assert_eq!(resolve::<(u8, char)>(), static_name!((u8, char)));
}
