use dense_bitset::{BitSet, bitset};

#[test]
fn test_empty_bitset() {
    let set = bitset![];
    assert_eq!(set.capacity(), 0);
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set, BitSet::new());
}

#[test]
fn test_single_element() {
    let set = bitset![5];
    assert!(set.contains(5));
    assert!(!set.contains(0));
    assert!(!set.contains(4));
    assert!(!set.contains(6));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_multiple_elements() {
    let set = bitset![1, 5, 10, 20, 50, 100];

    for n in [1, 5, 10, 20, 50, 100] {
        assert!(set.contains(n));
    }
    for n in [0, 2, 15, 99, 101] {
        assert!(!set.contains(n));
    }
    assert_eq!(set.len(), 6);
    assert_eq!(set.as_words().len(), 2);
}

#[test]
fn test_trailing_comma() {
    let set = bitset![3, 4, 5,];
    assert_eq!(set.to_string(), "{3..5}");
}

#[test]
fn test_negatives_and_duplicates() {
    let set = bitset![-1, 7, 7, -100, 0];
    assert_eq!(set.to_string(), "{0 7}");
}

#[test]
fn test_expressions() {
    let base = 64;
    let set = bitset![base, base + 1, base * 2];
    assert_eq!(set.to_string(), "{64 65 128}");
}

#[test]
fn test_macro_matches_from_elems() {
    let set = bitset![1000, 3, 64];
    assert_eq!(set, BitSet::from_elems(&[3, 64, 1000]));
    assert_eq!(set, BitSet::from([64, 1000, 3]));
}
