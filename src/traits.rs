//! Trait implementations for `BitSet`.

use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Write},
    mem,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign},
    str::FromStr,
};

use crate::{
    BitSet,
    set_ops::{and, and_not, or, xor},
};

/// Errors that can occur when parsing the `{…}` form back into a [`BitSet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBitSetError {
    /// The input is not wrapped in `{` and `}`.
    #[error("bitset string must be enclosed in braces")]
    MissingBraces,

    /// A token is neither a non-negative integer nor an `a..b` range of them.
    #[error("invalid element `{token}` in bitset string")]
    InvalidElement {
        /// The offending token
        token: String,
    },

    /// A range whose end lies below its start.
    #[error("range {start}..{end} ends before it starts")]
    InvalidRange {
        /// First element of the range
        start: isize,
        /// Last element of the range
        end: isize,
    },

    /// An element whose storage could not be allocated.
    #[error("element {element} is too large to store")]
    TooLarge {
        /// The offending element
        element: isize,
    },
}

impl BitSet {
    /// Creates a set from raw storage words, dropping trailing zero words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dense_bitset::BitSet;
    /// let set = BitSet::from_words(&[0b101, 0, 0]);
    /// assert_eq!(set.to_string(), "{0 2}");
    /// assert_eq!(set.as_words().len(), 1);
    /// ```
    #[must_use]
    pub fn from_words(words: &[u64]) -> Self {
        Self::from(words.to_vec())
    }
}

impl From<Vec<u64>> for BitSet {
    fn from(words: Vec<u64>) -> Self {
        let mut set = Self { words };
        set.trim();
        set
    }
}

impl From<BitSet> for Vec<u64> {
    fn from(set: BitSet) -> Self {
        set.words
    }
}

impl From<&[isize]> for BitSet {
    fn from(elems: &[isize]) -> Self {
        Self::from_elems(elems)
    }
}

impl<const N: usize> From<[isize; N]> for BitSet {
    fn from(elems: [isize; N]) -> Self {
        Self::from_elems(&elems)
    }
}

impl AsRef<[u64]> for BitSet {
    fn as_ref(&self) -> &[u64] {
        self.as_words()
    }
}

/// Writes one maximal run `a..=b`: `a`, `a b`, or `a..b`.
fn write_run(f: &mut fmt::Formatter<'_>, (a, b): (isize, isize), first: &mut bool) -> fmt::Result {
    if !mem::replace(first, false) {
        f.write_char(' ')?;
    }
    match b - a {
        0 => write!(f, "{a}"),
        1 => write!(f, "{a} {b}"),
        _ => write!(f, "{a}..{b}"),
    }
}

impl fmt::Display for BitSet {
    /// Renders the set as `{…}` in ascending order, collapsing runs of three
    /// or more consecutive elements into `a..b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::new().to_string(), "{}");
    /// assert_eq!(BitSet::from_elems(&[0, 1, 2, 4, 5]).to_string(), "{0..2 4 5}");
    /// assert_eq!(BitSet::from_elems(&[100, 200, 300]).to_string(), "{100 200 300}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        let mut first = true;
        let mut pending: Option<(isize, isize)> = None;
        for n in self {
            pending = match pending {
                Some((a, b)) if n == b + 1 => Some((a, n)),
                Some(run) => {
                    write_run(f, run, &mut first)?;
                    Some((n, n))
                }
                None => Some((n, n)),
            };
        }
        if let Some(run) = pending {
            write_run(f, run, &mut first)?;
        }
        f.write_char('}')
    }
}

/// Parses a plain decimal element, without the sign `isize::from_str` allows.
fn parse_elem(s: &str, token: &str) -> Result<isize, ParseBitSetError> {
    let invalid = || ParseBitSetError::InvalidElement {
        token: token.into(),
    };
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse::<isize>().map_err(|_| invalid())
}

impl FromStr for BitSet {
    type Err = ParseBitSetError;

    /// Parses the `{…}` form produced by [`Display`](fmt::Display).
    ///
    /// Tokens are separated by whitespace; each is an element `n` or an
    /// inclusive range `a..b`. Tokens may repeat, overlap, or come in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitSetError`] if the braces are missing, a token is
    /// not a non-negative integer or range, or a range is reversed. Elements
    /// too large to allocate storage for yield
    /// [`TooLarge`](ParseBitSetError::TooLarge) rather than aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitset::BitSet;
    ///
    /// let set: BitSet = "{0..2 4 5}".parse()?;
    /// assert_eq!(set, BitSet::from_elems(&[0, 1, 2, 4, 5]));
    ///
    /// assert!("0 1 2".parse::<BitSet>().is_err());
    /// # Ok::<(), dense_bitset::ParseBitSetError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(ParseBitSetError::MissingBraces)?;

        let mut set = Self::new();
        for token in body.split_whitespace() {
            match token.split_once("..") {
                Some((a, b)) => {
                    let start = parse_elem(a, token)?;
                    let end = parse_elem(b, token)?;
                    if start > end {
                        return Err(ParseBitSetError::InvalidRange { start, end });
                    }
                    set.try_add_range(start, end)
                        .and_then(|()| set.try_add(end))
                        .map_err(|_| ParseBitSetError::TooLarge { element: end })?;
                }
                None => {
                    let n = parse_elem(token, token)?;
                    set.try_add(n)
                        .map_err(|_| ParseBitSetError::TooLarge { element: n })?;
                }
            }
        }
        Ok(set)
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

macro_rules! impl_set_op {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $alloc:ident, $with:ident, $what:literal) => {
        impl $Op for &BitSet {
            type Output = BitSet;

            #[doc = concat!("Returns the ", $what, " of two sets in a new allocation.")]
            fn $op(self, rhs: Self) -> Self::Output {
                $alloc(self, rhs)
            }
        }

        impl $Op for BitSet {
            type Output = Self;

            #[doc = concat!("Returns the ", $what, " of two sets, reusing the left operand's storage.")]
            fn $op(mut self, rhs: Self) -> Self::Output {
                self.$with(&rhs);
                self
            }
        }

        impl $OpAssign<&BitSet> for BitSet {
            fn $op_assign(&mut self, rhs: &BitSet) {
                self.$with(rhs);
            }
        }

        impl $OpAssign for BitSet {
            fn $op_assign(&mut self, rhs: Self) {
                self.$with(&rhs);
            }
        }
    };
}

impl_set_op!(BitAnd::bitand, BitAndAssign::bitand_assign, and, and_with, "intersection");
impl_set_op!(BitOr::bitor, BitOrAssign::bitor_assign, or, or_with, "union");
impl_set_op!(BitXor::bitxor, BitXorAssign::bitxor_assign, xor, xor_with, "symmetric difference");
impl_set_op!(Sub::sub, SubAssign::sub_assign, and_not, and_not_with, "difference");
