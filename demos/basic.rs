//! Basic usage examples for `BitSet`

use dense_bitset::BitSet;

fn main() {
    println!("=== BitSet Basic Usage ===\n");

    let mut set = BitSet::new();
    println!("Created new set: {set}");
    println!("Initial capacity: {} words\n", set.capacity());

    // Add some elements; negatives are ignored
    for n in [5, 10, 15, 100, -3] {
        set.add(n);
    }
    println!("Added 5, 10, 15, 100 and -3");
    println!("Set: {set}");
    println!("Size: {}", set.len());
    println!("Capacity: {} words\n", set.capacity());

    println!("Checking individual elements:");
    for n in [0, 5, 10, 15, 20, 100, 150, -3] {
        println!(
            "  {n}: {}",
            if set.contains(n) { "present" } else { "absent" }
        );
    }

    println!("\nRanges:");
    set.add_range(20, 30);
    println!("  after add_range(20, 30):    {set}");
    set.delete_range(22, 28);
    println!("  after delete_range(22, 28): {set}");

    println!("\nNavigation:");
    println!("  min = {:?}, max = {:?}", set.min(), set.max());
    println!("  next_after(15) = {:?}", set.next_after(15));
    println!("  prev_before(15) = {:?}", set.prev_before(15));
    println!("  next_after(100) = {:?}", set.next_after(100));

    print!("\nWalking upward with next_after: ");
    let mut m = -1;
    while let Some(n) = set.next_after(m) {
        print!("{n} ");
        m = n;
    }
    println!();

    // Stop at the first element above 20
    let mut first_big = None;
    let stopped = set.visit(|n| {
        if n > 20 {
            first_big = Some(n);
            return true;
        }
        false
    });
    println!("visit stopped early: {stopped}, first element above 20: {first_big:?}");

    // Delete every element below 25 while walking
    set.visit_mut(|set, n| {
        if n < 25 {
            set.delete(n);
        }
        false
    });
    println!("After visit_mut deleting elements below 25: {set}");

    // Round-trip through the text form
    let text = set.to_string();
    let parsed: BitSet = text.parse().unwrap_or_default();
    println!("\nParsed {text:?} back: equal = {}", parsed == set);

    println!("\nResetting");
    let cap = set.capacity();
    set.reset();
    println!("Set: {set}, is empty: {}", set.is_empty());
    println!("Capacity kept: {}", set.capacity() == cap);
}
