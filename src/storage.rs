//! Word layout constants and the low-level helpers shared by every operation.
//!
//! A set is a flat `Vec<u64>`: bit `b` of word `i` represents the integer
//! `i * 64 + b`. Nothing in this module knows about `BitSet` itself; it only
//! deals in words, masks, and capacities.

/// Bits per storage word.
pub(crate) const WORD_BITS: usize = 64;

/// `log2(WORD_BITS)`, the shift turning an element into its word index.
pub(crate) const WORD_SHIFT: u32 = 6;

/// Mask extracting the bit position of an element within its word.
pub(crate) const WORD_MASK: usize = WORD_BITS - 1;

/// Convert an element to (word index, bit position within word).
#[inline(always)]
pub(crate) const fn bitpos(n: usize) -> (usize, usize) {
    (n >> WORD_SHIFT, n & WORD_MASK)
}

/// Returns a word with bits `start..=end` set.
///
/// Requires `start <= end < 64`.
#[inline(always)]
pub(crate) const fn bit_mask(start: usize, end: usize) -> u64 {
    debug_assert!(start <= end && end < WORD_BITS);
    (!0u64 >> (WORD_MASK - (end - start))) << start
}

/// Returns the smallest power of two strictly greater than `n`.
///
/// Non-positive inputs yield `1`. When the next power of two is not
/// representable the result saturates at `isize::MAX` instead of wrapping, so
/// the function stays monotonic over the whole `isize` range.
#[must_use]
pub(crate) const fn next_pow2(n: isize) -> isize {
    if n <= 0 {
        return 1;
    }
    let k = usize::BITS - (n as usize).leading_zeros();
    if k < isize::BITS - 1 {
        1 << k
    } else {
        isize::MAX
    }
}

/// Capacity (in words) to reserve when growing storage of capacity `cap` to
/// hold `n` words. Capacity at least doubles so that repeated growth is
/// amortized.
#[inline]
pub(crate) fn grow_capacity(n: usize, cap: usize) -> usize {
    let cap = isize::try_from(cap).unwrap_or(isize::MAX);
    n.max(next_pow2(cap).unsigned_abs())
}

/// Removes trailing zero words from a slice.
#[inline(always)]
pub(crate) const fn rtrim0(mut slice: &[u64]) -> &[u64] {
    while let [rest @ .., 0] = slice {
        slice = rest;
    }
    slice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitpos() {
        assert_eq!(bitpos(0), (0, 0));
        assert_eq!(bitpos(63), (0, 63));
        assert_eq!(bitpos(64), (1, 0));
        assert_eq!(bitpos(300), (4, 44));
    }

    #[test]
    fn test_bit_mask() {
        assert_eq!(bit_mask(0, 0), 1);
        assert_eq!(bit_mask(0, 63), !0);
        assert_eq!(bit_mask(63, 63), 1 << 63);
        assert_eq!(bit_mask(2, 5), 0b11_1100);
        assert_eq!(bit_mask(32, 63), 0xFFFF_FFFF_0000_0000);
    }

    #[test]
    fn test_next_pow2() {
        let cases = [
            (isize::MIN, 1),
            (-1, 1),
            (0, 1),
            (1, 2),
            (2, 4),
            (3, 4),
            (4, 8),
            ((1 << 19) - 1, 1 << 19),
            (1 << 19, 1 << 20),
            (isize::MAX >> 1, (isize::MAX >> 1) + 1),
            ((isize::MAX >> 1) + 1, isize::MAX),
            (isize::MAX - 1, isize::MAX),
            (isize::MAX, isize::MAX),
        ];
        for (n, expected) in cases {
            assert_eq!(next_pow2(n), expected, "next_pow2({n})");
        }
    }

    #[test]
    fn test_next_pow2_monotonic() {
        let mut prev = next_pow2(isize::MIN);
        for shift in 1..isize::BITS - 1 {
            for n in [(1isize << shift) - 1, 1 << shift, (1 << shift) + 1] {
                let cur = next_pow2(n);
                assert!(cur >= prev, "next_pow2 not monotonic at {n}");
                assert!(cur > n || cur == isize::MAX);
                prev = cur;
            }
        }
    }

    #[test]
    fn test_grow_capacity() {
        assert_eq!(grow_capacity(1, 0), 1);
        assert_eq!(grow_capacity(3, 0), 3);
        assert_eq!(grow_capacity(2, 1), 2);
        assert_eq!(grow_capacity(5, 4), 8);
        assert_eq!(grow_capacity(100, 4), 100);
    }

    #[test]
    fn test_rtrim0() {
        assert!(rtrim0(&[]).is_empty());
        assert!(rtrim0(&[0, 0]).is_empty());
        assert_eq!(rtrim0(&[1, 0, 2, 0, 0]), &[1u64, 0, 2][..]);
        assert_eq!(rtrim0(&[0, 7]), &[0u64, 7][..]);
    }
}
