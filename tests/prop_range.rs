use std::collections::BTreeSet;

use dense_bitset::{BitSet, and, and_not, or, xor};
use proptest::prelude::*;

// Strategy for generating sets with elements spread over a few words
prop_compose! {
    fn arb_set(max_elem: isize)
        (elems in prop::collection::vec(0..max_elem, 0..100))
        -> BitSet
    {
        BitSet::from_elems(&elems)
    }
}

// Strategy for generating dense sets straight from words
prop_compose! {
    fn dense_set()
        (words in prop::collection::vec(any::<u64>(), 0..=5))
        -> BitSet
    {
        BitSet::from(words)
    }
}

fn model(set: &BitSet) -> BTreeSet<isize> {
    set.iter().collect()
}

fn is_canonical(set: &BitSet) -> bool {
    set.as_words().last().is_none_or(|&w| w != 0)
}

proptest! {
    #[test]
    fn test_len_counts_distinct_non_negatives(
        elems in prop::collection::vec(-50isize..500, 0..200)
    ) {
        let set = BitSet::from_elems(&elems);
        let distinct: BTreeSet<isize> = elems.iter().copied().filter(|&n| n >= 0).collect();
        prop_assert_eq!(set.len(), distinct.len());
        prop_assert_eq!(model(&set), distinct);
        prop_assert!(is_canonical(&set));
    }

    #[test]
    fn test_add_range_sets_exactly_the_range(
        set in arb_set(400),
        m in -20isize..400,
        len in 0isize..300
    ) {
        let n = m + len;
        let mut ranged = set.clone();
        ranged.add_range(m, n);

        for i in -20..800 {
            let expect = set.contains(i) || (i >= m.max(0) && i < n);
            prop_assert_eq!(ranged.contains(i), expect, "element {}", i);
        }
        prop_assert!(is_canonical(&ranged));
    }

    #[test]
    fn test_delete_range_clears_exactly_the_range(
        set in dense_set(),
        m in -20isize..400,
        len in 0isize..300
    ) {
        let n = m + len;
        let mut ranged = set.clone();
        ranged.delete_range(m, n);

        for i in 0..400 {
            let expect = set.contains(i) && !(i >= m && i < n);
            prop_assert_eq!(ranged.contains(i), expect, "element {}", i);
        }
        prop_assert!(is_canonical(&ranged));
    }

    #[test]
    fn test_delete_range_undoes_add_range_on_empty(
        m in -20isize..500,
        len in 0isize..500
    ) {
        let mut set = BitSet::new();
        set.add_range(m, m + len);
        set.delete_range(m, m + len);
        prop_assert!(set.is_empty());
        prop_assert!(set.as_words().is_empty());
    }

    #[test]
    fn test_algebra_commutes(a in dense_set(), b in arb_set(500)) {
        prop_assert_eq!(and(&a, &b), and(&b, &a));
        prop_assert_eq!(or(&a, &b), or(&b, &a));
        prop_assert_eq!(xor(&a, &b), xor(&b, &a));
    }

    #[test]
    fn test_algebra_identities(a in dense_set(), b in arb_set(500)) {
        prop_assert!(xor(&a, &a).is_empty());
        prop_assert!(and_not(&a, &a).is_empty());
        prop_assert_eq!(or(&a, &a), a.clone());
        prop_assert_eq!(and(&a, &a), a.clone());

        // a ^ b == (a - b) | (b - a)
        prop_assert_eq!(xor(&a, &b), or(&and_not(&a, &b), &and_not(&b, &a)));
        // |a| + |b| == |a | b| + |a & b|
        prop_assert_eq!(a.len() + b.len(), or(&a, &b).len() + and(&a, &b).len());

        let i = and(&a, &b);
        prop_assert!(i.is_subset(&a));
        prop_assert!(i.is_subset(&b));
        prop_assert!(a.is_subset(&or(&a, &b)));
        prop_assert!(and_not(&a, &b).is_disjoint(&b));

        for r in [&i, &or(&a, &b), &xor(&a, &b), &and_not(&a, &b)] {
            prop_assert!(is_canonical(r));
        }
    }

    #[test]
    fn test_in_place_matches_allocating(a in arb_set(700), b in dense_set()) {
        let mut m = a.clone();
        m &= &b;
        prop_assert_eq!(&m, &and(&a, &b));

        let mut m = a.clone();
        m |= &b;
        prop_assert_eq!(&m, &or(&a, &b));

        let mut m = a.clone();
        m ^= &b;
        prop_assert_eq!(&m, &xor(&a, &b));

        let mut m = a.clone();
        m -= &b;
        prop_assert_eq!(&m, &and_not(&a, &b));
    }

    #[test]
    fn test_navigation_agrees_with_model(set in arb_set(400), m in -10isize..500) {
        let elems = model(&set);
        prop_assert_eq!(set.next_after(m), elems.range(m.saturating_add(1)..).next().copied());
        prop_assert_eq!(set.prev_before(m), elems.range(..m).next_back().copied());
    }

    #[test]
    fn test_display_parse_round_trip(set in dense_set()) {
        let text = set.to_string();
        let back: BitSet = text.parse().unwrap();
        prop_assert_eq!(back, set);
    }

    #[test]
    fn test_iter_matches_visit(set in dense_set()) {
        let mut visited = Vec::new();
        set.visit_all(|n| visited.push(n));
        prop_assert_eq!(set.iter().collect::<Vec<_>>(), visited.clone());
        prop_assert_eq!(set.iter().len(), visited.len());

        visited.reverse();
        prop_assert_eq!(set.iter().rev().collect::<Vec<_>>(), visited);
    }
}
