//! How generic parameters deduce, shown by printing the deduced names.
//!
//! Run with: cargo run --example deduction

use ty_lens::prelude::*;

fn by_value<T>(_param: T) {
    println!("by_value   T = {}", resolve::<T>());
}

fn by_ref<T: ?Sized>(_param: &T) {
    println!("by_ref     T = {:<16} param: {}", resolve::<T>(), resolve::<&T>());
}

fn by_mut_ref<T>(_param: &mut T) {
    println!("by_mut_ref T = {:<16} param: {}", resolve::<T>(), resolve::<&mut T>());
}

fn some_func(_: i32, _: f64) -> bool {
    true
}

fn main() {
    println!("--- Deduction through references ---");
    let mut x = 10;
    let r = &x;
    by_ref(&x); //   T = i32, param = &i32
    by_ref(r); //    T = i32, the reference is consumed by the parameter
    by_mut_ref(&mut x);

    println!("\n--- Deduction by value ---");
    by_value(x); //  T = i32
    by_value(r); //  T = &i32, the reference is now part of T
    by_value(&&x); // T = &&i32

    println!("\n--- Unsized referents ---");
    by_ref("greetings"); // T = str
    let boxed: Box<[u8]> = vec![1u8, 2, 3].into_boxed_slice();
    by_ref(&*boxed); //      T = [u8]

    println!("\n--- Arrays do not decay ---");
    let arr = [1u8, 2, 3];
    by_value(arr); //     T = [u8; 3]
    by_ref(&arr); //      T = [u8; 3]
    by_value(&arr[..]); // T = &[u8]

    println!("\n--- Function items vs function pointers ---");
    by_value(some_func as fn(i32, f64) -> bool);
    by_ref(&some_func); // the zero-sized function item type

    println!("\n--- Closures are nameless but nameable ---");
    let doubler = |v: i32| v * 2;
    println!("doubler:   {}", name_of_val(&doubler));
    println!("full:      {}", resolve_full::<fn(i32) -> i32>());

    println!("\n--- Expression types ---");
    println!("1 + 2.0f64:          {}", name_of_val(&(1.0 + 2.0f64)));
    let v = vec![String::from("a")];
    println!("vec of String:       {}", name_of_val(&v));
    println!("its iterator:        {}", name_of_val(&v.iter()));
    println!("its item type:       {}", resolve::<<Vec<String> as IntoIterator>::Item>());
}
