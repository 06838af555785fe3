//! Set algebra for `BitSet`.
//!
//! Every binary operator comes in two forms: a free function that borrows
//! both operands and returns a freshly allocated set, and an in-place method
//! (`*_with`) that rewrites the receiver. Both produce canonical results.

use alloc::vec::Vec;

use crate::BitSet;

/// Combines `a` and `b` word by word over `0..len`, treating missing words as
/// zero, and collects the canonical result.
///
/// The tail is located first so that the result is allocated at its final
/// size.
#[inline(always)]
fn combine(a: &[u64], b: &[u64], len: usize, op: impl Fn(u64, u64) -> u64) -> BitSet {
    let word = |i: usize| {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        op(x, y)
    };
    let n = (0..len).rposition(|i| word(i) != 0).map_or(0, |i| i + 1);
    let words: Vec<u64> = (0..n).map(word).collect();
    BitSet { words }
}

/// Returns the intersection of `a` and `b`.
///
/// The result is no longer than the shorter operand.
///
/// # Examples
///
/// ```
/// use dense_bitset::{BitSet, and};
///
/// let a = BitSet::from_elems(&[1, 2, 64, 200]);
/// let b = BitSet::from_elems(&[2, 64, 65]);
/// assert_eq!(and(&a, &b).to_string(), "{2 64}");
/// ```
#[must_use]
pub fn and(a: &BitSet, b: &BitSet) -> BitSet {
    let len = a.words.len().min(b.words.len());
    combine(&a.words, &b.words, len, |x, y| x & y)
}

/// Returns the union of `a` and `b`.
///
/// # Examples
///
/// ```
/// use dense_bitset::{BitSet, or};
///
/// let a = BitSet::from_elems(&[1, 2]);
/// let b = BitSet::from_elems(&[3, 300]);
/// assert_eq!(or(&a, &b).to_string(), "{1..3 300}");
/// ```
#[must_use]
pub fn or(a: &BitSet, b: &BitSet) -> BitSet {
    let len = a.words.len().max(b.words.len());
    combine(&a.words, &b.words, len, |x, y| x | y)
}

/// Returns the symmetric difference of `a` and `b`.
///
/// Equal high words cancel out, so the result is scanned from the longer
/// operand's tail down to its first non-zero word.
///
/// # Examples
///
/// ```
/// use dense_bitset::{BitSet, xor};
///
/// let a = BitSet::from_elems(&[1, 2, 100]);
/// let b = BitSet::from_elems(&[2, 3, 100]);
/// let x = xor(&a, &b);
/// assert_eq!(x.to_string(), "{1 3}");
/// assert_eq!(x.as_words().len(), 1);
///
/// assert!(xor(&a, &a).is_empty());
/// ```
#[must_use]
pub fn xor(a: &BitSet, b: &BitSet) -> BitSet {
    let len = a.words.len().max(b.words.len());
    combine(&a.words, &b.words, len, |x, y| x ^ y)
}

/// Returns the elements of `a` that are not in `b`.
///
/// The result is no longer than `a`.
///
/// # Examples
///
/// ```
/// use dense_bitset::{BitSet, and_not};
///
/// let a = BitSet::from_elems(&[1, 2, 3, 500]);
/// let b = BitSet::from_elems(&[2, 500, 900]);
/// assert_eq!(and_not(&a, &b).to_string(), "{1 3}");
/// ```
#[must_use]
pub fn and_not(a: &BitSet, b: &BitSet) -> BitSet {
    combine(&a.words, &b.words, a.words.len(), |x, y| x & !y)
}

impl BitSet {
    /// Keeps only the elements that are also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut a = BitSet::from_elems(&[10, 20, 300]);
    /// let b = BitSet::from_elems(&[10]);
    ///
    /// a.and_with(&b);
    /// assert_eq!(a.to_string(), "{10}");
    /// assert_eq!(a.as_words().len(), 1);
    /// ```
    pub fn and_with(&mut self, other: &Self) {
        let len = self.words.len().min(other.words.len());
        self.words.truncate(len);
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst &= *src;
        }
        self.trim();
    }

    /// Adds every element of `other`.
    ///
    /// Grows the receiver when `other` is longer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut a = BitSet::from_elems(&[10]);
    /// let b = BitSet::from_elems(&[20, 300]);
    ///
    /// a.or_with(&b);
    /// assert_eq!(a.to_string(), "{10 20 300}");
    /// ```
    pub fn or_with(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.resize(other.words.len());
        }
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst |= *src;
        }
        self.trim();
    }

    /// Toggles every element of `other`: keeps the elements in exactly one of
    /// the two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut a = BitSet::from_elems(&[1, 2, 300]);
    /// let b = BitSet::from_elems(&[2, 3, 300]);
    ///
    /// a.xor_with(&b);
    /// assert_eq!(a.to_string(), "{1 3}");
    /// assert_eq!(a.as_words().len(), 1);
    /// ```
    pub fn xor_with(&mut self, other: &Self) {
        if other.words.len() > self.words.len() {
            self.resize(other.words.len());
        }
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst ^= *src;
        }
        self.trim();
    }

    /// Removes every element of `other`.
    ///
    /// Words beyond `other`'s length are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let mut a = BitSet::from_elems(&[1, 2, 3, 300]);
    /// let b = BitSet::from_elems(&[2, 300]);
    ///
    /// a.and_not_with(&b);
    /// assert_eq!(a.to_string(), "{1 3}");
    /// ```
    pub fn and_not_with(&mut self, other: &Self) {
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst &= !*src;
        }
        self.trim();
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// Canonical form means a longer `self` always has an element beyond
    /// `other`'s range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let a = BitSet::from_elems(&[1, 64]);
    /// let b = BitSet::from_elems(&[1, 2, 64]);
    ///
    /// assert!(a.is_subset(&b));
    /// assert!(!b.is_subset(&a));
    /// assert!(BitSet::new().is_subset(&a));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words.len() <= other.words.len()
            && self
                .words
                .iter()
                .zip(&other.words)
                .all(|(&a, &b)| a & !b == 0)
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the two sets have no element in common.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let a = BitSet::from_elems(&[1, 3, 5]);
    /// let b = BitSet::from_elems(&[2, 4, 600]);
    ///
    /// assert!(a.is_disjoint(&b));
    /// assert!(!a.is_disjoint(&BitSet::from_elems(&[5])));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(&a, &b)| a & b == 0)
    }
}
