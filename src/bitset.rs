//! `BitSet` struct and core implementation.

use alloc::{collections::TryReserveError, vec, vec::Vec};

use crate::{
    iter::Iter,
    macros::trace_storage,
    storage::{WORD_MASK, WORD_SHIFT, bit_mask, bitpos, grow_capacity, rtrim0},
};

/// A dense set of non-negative integers packed into 64-bit words.
///
/// # Overview
///
/// Element `n` lives in bit `n % 64` of word `n / 64`. The word vector is kept
/// in canonical form at all times: the last word, if any, is non-zero, so an
/// empty set owns zero words and two equal sets always have identical words.
///
/// Elements are `isize`. Negative values are never stored; every mutator
/// treats them as a no-op and every query reports them as absent.
///
/// # Thread safety
///
/// `BitSet` has no interior synchronization. Shared reads are fine; callers
/// that mutate a set from more than one thread must supply their own lock.
///
/// # Examples
///
/// ```
/// use dense_bitset::BitSet;
///
/// let mut set = BitSet::new();
/// set.add(10);
/// set.add(100);
/// set.add(-5); // ignored
///
/// assert!(set.contains(10));
/// assert!(!set.contains(-5));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.max(), Some(100));
/// assert_eq!(set.to_string(), "{10 100}");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    pub(crate) words: Vec<u64>,
}

/// Recombines a word index and bit position into an element.
#[inline(always)]
pub(crate) const fn elem(wi: usize, bi: usize) -> isize {
    ((wi << WORD_SHIFT) | bi) as isize
}

/// Maps an element to its storage position, or `None` if it is negative.
#[inline(always)]
fn position(n: isize) -> Option<(usize, usize)> {
    usize::try_from(n).ok().map(bitpos)
}

/// Storage positions of the first and last element of `[m, n)`, with `m`
/// clamped to zero. `None` when the range holds no non-negative integer.
#[inline]
fn range_bounds(m: isize, n: isize) -> Option<((usize, usize), (usize, usize))> {
    if n < 1 || m >= n {
        return None;
    }
    Some((bitpos(m.max(0).unsigned_abs()), bitpos((n - 1).unsigned_abs())))
}

impl BitSet {
    /// Creates a new empty set. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates an empty set with room for at least `words` storage words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::with_capacity(4);
    /// assert!(set.capacity() >= 4);
    ///
    /// set.add(255); // fits in the reserved words, no reallocation
    /// assert!(set.capacity() >= 4);
    /// ```
    #[must_use]
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: Vec::with_capacity(words),
        }
    }

    /// Creates a set holding the non-negative values of `elems`.
    ///
    /// Storage is sized exactly for the largest element, so no growth happens
    /// while the elements are written. Duplicates collapse and negative values
    /// are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::from_elems(&[3, -1, 3, 70]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.to_string(), "{3 70}");
    ///
    /// assert!(BitSet::from_elems(&[-1, -2]).is_empty());
    /// ```
    #[must_use]
    pub fn from_elems(elems: &[isize]) -> Self {
        let Some((max_wi, _)) = elems.iter().copied().max().and_then(position) else {
            return Self::new();
        };
        let mut words = vec![0u64; max_wi + 1];
        for (wi, bi) in elems.iter().copied().filter_map(position) {
            words[wi] |= 1 << bi;
        }
        Self { words }
    }

    /// Returns the canonical word slice backing the set.
    ///
    /// The slice never ends in a zero word.
    #[must_use]
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Returns the number of words the set can hold without reallocating.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Releases storage capacity beyond the words currently in use.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::new();
    /// set.add(1000);
    /// set.delete(1000);
    /// set.add(3);
    ///
    /// set.shrink_to_fit();
    /// assert!(set.capacity() < 16);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        let old_capacity = self.words.capacity();
        self.words.shrink_to_fit();
        if old_capacity != self.words.capacity() {
            trace_storage!(
                words = self.words.len(),
                old_capacity,
                new_capacity = self.words.capacity(),
                "shrunk bitset storage"
            );
        }
    }

    /// Makes the logical length exactly `n` words.
    ///
    /// Growing reserves `max(n, next_pow2(capacity))` words so that capacity
    /// at least doubles; newly exposed words are zero. Shrinking drops the
    /// excess words, which are re-zeroed should the length grow again.
    pub(crate) fn resize(&mut self, n: usize) {
        if let Some(additional) = self.growth(n) {
            self.words.reserve_exact(additional);
        }
        self.words.resize(n, 0);
    }

    /// Like [`resize`](Self::resize), but reports allocation failure instead
    /// of aborting. The set is left unchanged on error.
    pub(crate) fn try_resize(&mut self, n: usize) -> Result<(), TryReserveError> {
        if let Some(additional) = self.growth(n) {
            self.words.try_reserve_exact(additional)?;
        }
        self.words.resize(n, 0);
        Ok(())
    }

    /// Words to reserve beyond the current length so that `n` words fit, or
    /// `None` when the capacity already suffices.
    fn growth(&self, n: usize) -> Option<usize> {
        let cap = self.words.capacity();
        if cap >= n {
            return None;
        }
        let new_capacity = grow_capacity(n, cap);
        trace_storage!(
            words = n,
            old_capacity = cap,
            new_capacity,
            "growing bitset storage"
        );
        Some(new_capacity - self.words.len())
    }

    /// Drops trailing zero words, restoring canonical form.
    #[inline]
    pub(crate) fn trim(&mut self) {
        let n = rtrim0(&self.words).len();
        self.words.truncate(n);
    }

    /// Empties the set, keeping its allocation for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::from_elems(&[1, 2, 500]);
    /// let cap = set.capacity();
    ///
    /// set.reset();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), cap);
    /// ```
    pub fn reset(&mut self) {
        self.words.clear();
    }

    /// Replaces the contents of `self` with a copy of `other`.
    ///
    /// The existing allocation is reused when it is large enough; the two
    /// sets never share storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let src = BitSet::from_elems(&[1, 2, 3]);
    /// let mut dst = BitSet::from_elems(&[400]);
    ///
    /// dst.set(&src);
    /// assert_eq!(dst, src);
    ///
    /// dst.add(9);
    /// assert!(!src.contains(9));
    /// ```
    pub fn set(&mut self, other: &Self) {
        self.words.clone_from(&other.words);
    }

    /// Adds `n` to the set. Negative `n` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::new();
    /// set.add(64);
    /// set.add(64);
    /// set.add(-1);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(64));
    /// ```
    #[inline]
    pub fn add(&mut self, n: isize) {
        let Some((wi, bi)) = position(n) else {
            return;
        };
        if wi >= self.words.len() {
            self.resize(wi + 1);
        }
        self.words[wi] |= 1 << bi;
    }

    /// Fallible [`add`](Self::add) for decoders handling untrusted input.
    pub(crate) fn try_add(&mut self, n: isize) -> Result<(), TryReserveError> {
        let Some((wi, bi)) = position(n) else {
            return Ok(());
        };
        if wi >= self.words.len() {
            self.try_resize(wi + 1)?;
        }
        self.words[wi] |= 1 << bi;
        Ok(())
    }

    /// Adds `n` to the set, returning `true` if it was not already present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::new();
    /// assert!(set.insert(10));
    /// assert!(!set.insert(10));
    /// assert!(!set.insert(-10));
    /// ```
    pub fn insert(&mut self, n: isize) -> bool {
        if n < 0 || self.contains(n) {
            return false;
        }
        self.add(n);
        true
    }

    /// Removes `n` from the set. Absent or negative `n` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::from_elems(&[1, 200]);
    /// set.delete(200);
    /// set.delete(5000);
    /// assert_eq!(set.as_words(), &[0b10]);
    /// ```
    #[inline]
    pub fn delete(&mut self, n: isize) {
        let Some((wi, bi)) = position(n) else {
            return;
        };
        if let Some(word) = self.words.get_mut(wi) {
            *word &= !(1 << bi);
            self.trim();
        }
    }

    /// Removes `n` from the set, returning `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::from_elems(&[10]);
    /// assert!(set.remove(10));
    /// assert!(!set.remove(10));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, n: isize) -> bool {
        if !self.contains(n) {
            return false;
        }
        self.delete(n);
        true
    }

    /// Adds every integer in the half-open range `[m, n)`.
    ///
    /// Does nothing when `n < 1` or `m >= n`; a negative `m` is clamped to
    /// zero. Interior words are filled whole and only the boundary words are
    /// masked.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::new();
    /// set.add_range(-3, 3);
    /// set.add_range(60, 130);
    /// set.add_range(9, 9); // empty range
    ///
    /// assert_eq!(set.to_string(), "{0..2 60..129}");
    /// ```
    pub fn add_range(&mut self, m: isize, n: isize) {
        let Some(((low, low_bit), (high, high_bit))) = range_bounds(m, n) else {
            return;
        };
        if high >= self.words.len() {
            self.resize(high + 1);
        }
        self.fill_bits(low, low_bit, high, high_bit);
    }

    /// Fallible [`add_range`](Self::add_range) for decoders handling
    /// untrusted input.
    pub(crate) fn try_add_range(&mut self, m: isize, n: isize) -> Result<(), TryReserveError> {
        let Some(((low, low_bit), (high, high_bit))) = range_bounds(m, n) else {
            return Ok(());
        };
        if high >= self.words.len() {
            self.try_resize(high + 1)?;
        }
        self.fill_bits(low, low_bit, high, high_bit);
        Ok(())
    }

    /// Sets bits from `low_bit` of word `low` through `high_bit` of word
    /// `high`. Both words must already exist.
    fn fill_bits(&mut self, low: usize, low_bit: usize, high: usize, high_bit: usize) {
        if low == high {
            self.words[low] |= bit_mask(low_bit, high_bit);
            return;
        }
        self.words[low] |= bit_mask(low_bit, WORD_MASK);
        self.words[low + 1..high].fill(!0);
        self.words[high] |= bit_mask(0, high_bit);
    }

    /// Removes every integer in the half-open range `[m, n)`.
    ///
    /// Does nothing when `n < 1`, `m >= n`, or the range lies entirely above
    /// the stored words. The part of the range beyond the stored words is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::new();
    /// set.add_range(0, 200);
    ///
    /// set.delete_range(10, 1000);
    /// assert_eq!(set.to_string(), "{0..9}");
    /// assert_eq!(set.as_words().len(), 1);
    /// ```
    pub fn delete_range(&mut self, m: isize, n: isize) {
        let Some(((low, low_bit), (mut high, mut high_bit))) = range_bounds(m, n) else {
            return;
        };
        let len = self.words.len();
        if low >= len {
            return;
        }
        if high >= len {
            high = len - 1;
            high_bit = WORD_MASK;
        }
        if low == high {
            self.words[low] &= !bit_mask(low_bit, high_bit);
        } else {
            self.words[low] &= !bit_mask(low_bit, WORD_MASK);
            self.words[low + 1..high].fill(0);
            self.words[high] &= !bit_mask(0, high_bit);
        }
        self.trim();
    }

    /// Returns `true` if `n` is in the set.
    ///
    /// Negative values and values beyond the stored words are never present.
    #[must_use]
    #[inline]
    pub fn contains(&self, n: isize) -> bool {
        position(n)
            .and_then(|(wi, bi)| self.words.get(wi).map(|w| (w >> bi) & 1 != 0))
            .unwrap_or(false)
    }

    /// Returns the number of elements in the set.
    ///
    /// Time complexity: O(n) where n is the number of words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::from_elems(&[0, 1, 1, 64, -3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the set has no elements.
    ///
    /// Canonical form makes this O(1).
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the smallest element, or [`None`] if the set is empty.
    #[must_use]
    pub fn min(&self) -> Option<isize> {
        self.words
            .iter()
            .position(|&w| w != 0)
            .map(|wi| elem(wi, self.words[wi].trailing_zeros() as usize))
    }

    /// Returns the largest element, or [`None`] if the set is empty.
    ///
    /// Read straight off the last word, which canonical form guarantees is
    /// non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// assert_eq!(BitSet::new().max(), None);
    /// assert_eq!(BitSet::from_elems(&[3, 64, 7]).max(), Some(64));
    /// ```
    #[must_use]
    #[inline]
    pub fn max(&self) -> Option<isize> {
        let (&last, rest) = self.words.split_last()?;
        debug_assert!(last != 0, "bitset is not trimmed");
        Some(elem(rest.len(), WORD_MASK - last.leading_zeros() as usize))
    }

    /// Returns the smallest element strictly greater than `m`.
    ///
    /// For negative `m` the search starts at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::from_elems(&[0, 2, 63, 64, 100, 300]);
    ///
    /// assert_eq!(set.next_after(-1), Some(0));
    /// assert_eq!(set.next_after(1), Some(2));
    /// assert_eq!(set.next_after(63), Some(64));
    /// assert_eq!(set.next_after(300), None);
    /// ```
    #[must_use]
    pub fn next_after(&self, m: isize) -> Option<isize> {
        if self.words.is_empty() {
            return None;
        }
        let m = if m < 0 {
            if self.contains(0) {
                return Some(0);
            }
            0
        } else {
            m
        };
        let (mut wi, bi) = bitpos(m.unsigned_abs());
        // Keep only the bits above m.
        let above = (!0u64).checked_shl(bi as u32 + 1).unwrap_or(0);
        let mut w = *self.words.get(wi)? & above;
        while w == 0 {
            wi += 1;
            w = *self.words.get(wi)?;
        }
        Some(elem(wi, w.trailing_zeros() as usize))
    }

    /// Returns the largest element strictly less than `m`.
    ///
    /// Returns [`None`] for `m <= 0`, and the maximum when `m` is above it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::from_elems(&[0, 2, 63, 64, 100, 300]);
    ///
    /// assert_eq!(set.prev_before(0), None);
    /// assert_eq!(set.prev_before(1), Some(0));
    /// assert_eq!(set.prev_before(64), Some(63));
    /// assert_eq!(set.prev_before(400), Some(300));
    /// ```
    #[must_use]
    pub fn prev_before(&self, m: isize) -> Option<isize> {
        if m <= 0 {
            return None;
        }
        let max = self.max()?;
        if m > max {
            return Some(max);
        }
        let (mut wi, bi) = bitpos(m.unsigned_abs());
        // Keep only the bits below m.
        let mut w = self.words[wi] & ((1u64 << bi) - 1);
        while w == 0 {
            if wi == 0 {
                return None;
            }
            wi -= 1;
            w = self.words[wi];
        }
        Some(elem(wi, WORD_MASK - w.leading_zeros() as usize))
    }

    /// Calls `f` on every element in ascending order.
    ///
    /// Stops as soon as `f` returns `true` and reports whether it stopped
    /// early.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::from_elems(&[1, 2, 3, 70]);
    ///
    /// let mut seen = Vec::new();
    /// let stopped = set.visit(|n| {
    ///     seen.push(n);
    ///     n == 2
    /// });
    /// assert!(stopped);
    /// assert_eq!(seen, [1, 2]);
    /// ```
    pub fn visit<F>(&self, mut f: F) -> bool
    where
        F: FnMut(isize) -> bool,
    {
        for (wi, &word) in self.words.iter().enumerate() {
            let mut w = word;
            while w != 0 {
                if f(elem(wi, w.trailing_zeros() as usize)) {
                    return true;
                }
                w &= w - 1;
            }
        }
        false
    }

    /// Calls `f` on every element in ascending order.
    pub fn visit_all<F>(&self, mut f: F)
    where
        F: FnMut(isize),
    {
        self.visit(|n| {
            f(n);
            false
        });
    }

    /// Like [`visit`](Self::visit), but hands the set itself to `f` so that it
    /// may be edited during the walk.
    ///
    /// Adding or deleting elements less than or equal to the element being
    /// visited is supported: the walk carries on with the next larger element
    /// as if nothing happened. Any other edit (touching elements above the
    /// current one) leaves the remainder of the walk unspecified, though
    /// never unsafe.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut set = BitSet::from_elems(&[1, 2, 3, 4, 100]);
    ///
    /// // Drop every odd element as it is reached.
    /// set.visit_mut(|set, n| {
    ///     if n % 2 == 1 {
    ///         set.delete(n);
    ///     }
    ///     false
    /// });
    /// assert_eq!(set.to_string(), "{2 4 100}");
    /// ```
    pub fn visit_mut<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&mut Self, isize) -> bool,
    {
        let mut wi = 0;
        while let Some(&word) = self.words.get(wi) {
            let mut w = word;
            while w != 0 {
                if f(self, elem(wi, w.trailing_zeros() as usize)) {
                    return true;
                }
                w &= w - 1;
            }
            wi += 1;
        }
        false
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::from_elems(&[5, 64, 3]);
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [3, 5, 64]);
    /// assert_eq!(set.iter().rev().collect::<Vec<_>>(), [64, 5, 3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words)
    }
}
