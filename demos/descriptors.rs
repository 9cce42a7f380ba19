//! Descriptors, styles, fingerprints, and compile-time names.
//!
//! Run with: cargo run --example descriptors

use ty_lens::builtin;
use ty_lens::prelude::*;

#[derive(StaticName)]
struct Invoice;

fn report<T: ?Sized>() {
    let d = descriptor::<T>();
    println!(
        "{:<28} full: {:<44} fp: {:016x}",
        d.name(),
        d.name_with(Style::FULL),
        d.fingerprint()
    );
}

fn main() {
    println!("--- One descriptor, three styles ---");
    let d = descriptor::<Vec<Option<String>>>();
    println!("short: {}", d.name());
    println!("tail2: {}", d.name_with(Style::tail(2)));
    println!("full:  {}", d.name_with(Style::FULL));

    println!("\n--- A battery of shapes ---");
    report::<i32>();
    report::<&mut [u8]>();
    report::<(char, [f32; 2])>();
    report::<fn(i32, f64) -> bool>();
    report::<Box<dyn std::fmt::Debug + Send>>();

    println!("\n--- Compile-time names ---");
    println!("derived short: {}", Invoice::SHORT);
    println!("derived full:  {}", Invoice::FULL);
    println!("written type:  {}", static_name!(std::collections::HashMap<String, Vec<u8>>));
    println!("written full:  {}", static_name_full!(std::collections::HashMap<String, Vec<u8>>));

    println!("\n--- Coarse identification ---");
    println!("i32      -> {:?}", builtin::identify::<i32>());
    println!("&i32     -> {:?}", builtin::identify::<&'static i32>());
    println!("Invoice  -> {:?}", builtin::identify::<Invoice>());
}
