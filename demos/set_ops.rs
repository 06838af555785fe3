//! Demonstrates set algebra with `BitSet`
#![allow(clippy::many_single_char_names)]

use dense_bitset::{BitSet, and, and_not, bitset, or, xor};

fn main() {
    println!("=== BitSet Set Operations ===\n");

    let a = bitset![1, 2, 3, 5, 8, 200];
    let b = bitset![2, 3, 5, 7, 11, 200];

    println!("Set A: {a}");
    println!("Set B: {b}");
    println!();

    println!("Union (A | B):                {}", or(&a, &b));
    println!("Intersection (A & B):         {}", and(&a, &b));
    println!("Difference (A - B):           {}", and_not(&a, &b));

    // The shared high element cancels, so the result fits in one word
    let sym_diff = xor(&a, &b);
    println!("Symmetric difference (A ^ B): {sym_diff}");
    println!("  words used: {}\n", sym_diff.as_words().len());

    // Operators are shorthand for the same functions
    assert_eq!(&a | &b, or(&a, &b));
    assert_eq!(&a - &b, and_not(&a, &b));

    println!("=== Set Comparisons ===\n");

    let subset = bitset![2, 3];
    println!("Subset: {subset}");
    println!("Is subset within A? {}", subset.is_subset(&a));
    println!("Does A contain subset? {}", a.is_superset(&subset));
    println!("Are A and B disjoint? {}", a.is_disjoint(&b));

    let far = bitset![20, 30, 40];
    println!("Are A and {far} disjoint? {}", a.is_disjoint(&far));

    println!("\n=== In-place Operations ===\n");

    let mut c = BitSet::new();
    c.set(&a);
    println!("C (copy of A): {c}");

    c.or_with(&b);
    println!("After C.or_with(B):      {c}");

    c.and_with(&a);
    println!("After C.and_with(A):     {c}");

    c.xor_with(&bitset![1, 2, 4]);
    println!("After C.xor_with({{1 2 4}}): {c}");

    c.and_not_with(&b);
    println!("After C.and_not_with(B): {c}");

    let mut d = a.clone();
    d -= &b;
    d |= bitset![100];
    println!("\nD = (A - B) | {{100}}: {d}");
}
