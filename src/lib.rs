//! A dense, word-packed set of non-negative integers.
//!
//! This crate provides [`BitSet`], a flat vector of 64-bit words where bit
//! `n % 64` of word `n / 64` records whether `n` is in the set. It is meant as
//! a low-level primitive for ID sets, flag sets, and graph node sets that are
//! dense enough for one bit per possible element to pay off.
//!
//! # Features
//!
//! - **Canonical representation**: trailing zero words are always trimmed, so
//!   equality is a plain word comparison and `max` is read off the last word
//! - **Range operations**: [`add_range`](BitSet::add_range) and
//!   [`delete_range`](BitSet::delete_range) fill or clear whole words at once
//! - **Ordered navigation**: [`next_after`](BitSet::next_after),
//!   [`prev_before`](BitSet::prev_before), early-stopping
//!   [`visit`](BitSet::visit), and double-ended iterators
//! - **Set algebra** in allocating ([`and`], [`or`], [`xor`], [`and_not`]) and
//!   in-place ([`BitSet::and_with`] and friends) forms, plus operator traits
//! - **Compact text form** such as `{0..2 4 5}`, both rendered and parsed
//! - **Serialization support** via serde and rkyv (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use dense_bitset::{BitSet, bitset, or};
//!
//! let mut set = bitset![0, 1, 2, 4, 5];
//! assert_eq!(set.to_string(), "{0..2 4 5}");
//!
//! set.add_range(10, 13);
//! set.delete(1);
//! assert_eq!(set.to_string(), "{0 2 4 5 10..12}");
//!
//! assert_eq!(set.next_after(5), Some(10));
//! assert_eq!(set.prev_before(10), Some(5));
//!
//! let other: BitSet = "{3 100}".parse()?;
//! assert_eq!(or(&set, &other).len(), set.len() + 2);
//! # Ok::<(), dense_bitset::ParseBitSetError>(())
//! ```
//!
//! # Negative values
//!
//! Elements are `isize` so that callers can pass signed values straight
//! through. Negative values are never stored: every mutator ignores them and
//! every query reports them absent. Nothing in the API fails on bad input.
//!
//! # Concurrency
//!
//! A `BitSet` has no internal synchronization. It may be read from several
//! threads at once, but mutation requires exclusive access, which Rust's
//! borrow rules enforce for a single owner. Sharing a mutable set across
//! threads needs an external lock.
//!
//! # Cargo features
//!
//! - `std` (default): link the standard library
//! - `serde`: `Serialize`/`Deserialize` and the [`serde`](crate::serde)
//!   helper modules
//! - `rkyv`: zero-copy archiving of the word vector
//! - `tracing`: trace events when storage is reallocated

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitset;
mod iter;
mod macros;
mod set_ops;
mod storage;
mod traits;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use crate::rkyv::{ArchivedBitSet, BitSetResolver};

#[cfg(feature = "serde")]
pub mod serde;

pub use bitset::BitSet;
pub use iter::{BitIter, IntoIter, Iter};
pub use set_ops::{and, and_not, or, xor};
pub use traits::ParseBitSetError;
