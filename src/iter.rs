//! Iterator implementations for `BitSet`.

use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    iter::{FromIterator, FusedIterator},
};

use crate::{
    BitSet,
    storage::{WORD_BITS, bitpos},
};

/// An iterator over the elements of a [`BitSet`] in ascending order.
///
/// Created by [`BitSet::iter`].
pub type Iter<'a> = BitIter<&'a [u64]>;

/// An owning iterator over the elements of a [`BitSet`].
///
/// Created by the [`IntoIterator`] implementation for [`BitSet`].
pub type IntoIter = BitIter<Vec<u64>>;

/// An iterator over the set bits of a word slice.
///
/// Double-ended and exact-size; whole zero words are skipped at once. The
/// generic parameter lets the same iterator borrow or own its words.
///
/// # Examples
///
/// ```
/// use dense_bitset::BitSet;
///
/// let set = BitSet::from_elems(&[5, 10, 15]);
///
/// let mut iter = set.iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(5));
/// assert_eq!(iter.next_back(), Some(15));
/// assert_eq!(iter.next(), Some(10));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Clone, Debug)]
pub struct BitIter<S: Borrow<[u64]>> {
    words: S,
    pos: usize,  // next bit position to inspect (forward)
    rpos: usize, // one past the last bit position to inspect (reverse)
}

impl<S: Borrow<[u64]>> BitIter<S> {
    pub(crate) fn new(words: S) -> Self {
        let rpos = words.borrow().len() * WORD_BITS;
        Self {
            words,
            pos: 0,
            rpos,
        }
    }
}

impl<S: Borrow<[u64]>> Iterator for BitIter<S> {
    type Item = isize;

    fn next(&mut self) -> Option<Self::Item> {
        let slice = self.words.borrow();

        while self.pos < self.rpos {
            let (mut wi, bi) = bitpos(self.pos);
            let word = slice[wi] >> bi;
            if word == 0 {
                wi += 1;
                while wi < slice.len() && slice[wi] == 0 {
                    wi += 1;
                }
                self.pos = wi * WORD_BITS;
                continue;
            }

            let result = self.pos + word.trailing_zeros() as usize;
            if result >= self.rpos {
                self.pos = self.rpos;
                return None;
            }
            self.pos = result + 1;
            return Some(result as isize);
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<S: Borrow<[u64]>> ExactSizeIterator for BitIter<S> {
    fn len(&self) -> usize {
        if self.pos >= self.rpos {
            return 0;
        }
        let (wmin, bmin) = bitpos(self.pos);
        let (wmax, bmax) = bitpos(self.rpos);
        self.words
            .borrow()
            .iter()
            .enumerate()
            .take(wmax + 1)
            .skip(wmin)
            .map(|(wi, &word)| {
                let mut w = word;
                if wi == wmin {
                    w &= !0u64 << bmin;
                }
                if wi == wmax {
                    w &= (1u64 << bmax) - 1;
                }
                w.count_ones() as usize
            })
            .sum()
    }
}

impl<S: Borrow<[u64]>> FusedIterator for BitIter<S> {}

impl<S: Borrow<[u64]>> DoubleEndedIterator for BitIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slice = self.words.borrow();

        while self.rpos > self.pos {
            let (wi, bi) = bitpos(self.rpos - 1);
            // Only bits up to and including bi are still in range.
            let masked = slice[wi] & (!0u64 >> (WORD_BITS - 1 - bi));
            if masked == 0 {
                self.rpos = wi * WORD_BITS;
                continue;
            }

            let result = wi * WORD_BITS + (WORD_BITS - 1 - masked.leading_zeros() as usize);
            if result < self.pos {
                self.rpos = self.pos;
                return None;
            }
            self.rpos = result;
            return Some(result as isize);
        }

        None
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type IntoIter = Iter<'a>;
    type Item = isize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BitSet {
    type IntoIter = IntoIter;
    type Item = isize;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self.words)
    }
}

impl FromIterator<isize> for BitSet {
    fn from_iter<I: IntoIterator<Item = isize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<isize> for BitSet {
    fn extend<I: IntoIterator<Item = isize>>(&mut self, iter: I) {
        for n in iter {
            self.add(n);
        }
    }
}

impl<'a> Extend<&'a isize> for BitSet {
    fn extend<I: IntoIterator<Item = &'a isize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
