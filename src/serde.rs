//! Serde implementations for `BitSet`.
//!
//! The default [`Serialize`]/[`Deserialize`] impls write the compact `{…}`
//! text form for human-readable formats and the canonical word sequence for
//! binary ones. The modules below can be used with `#[serde(with = "…")]` to
//! pin a specific representation.

use alloc::{string::String, vec::Vec};
use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::BitSet;

/// Adds a decoded element, turning allocation failure into a decode error.
fn add_elem<E: de::Error>(set: &mut BitSet, n: isize) -> Result<(), E> {
    set.try_add(n).map_err(|_| {
        E::invalid_value(
            de::Unexpected::Signed(n as i64),
            &"an element small enough to store",
        )
    })
}

/// Serialize and deserialize [`BitSet`] as its sequence of `u64` words.
pub mod words {
    use super::*;

    /// Serialize the set as its canonical sequence of `u64` words.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(b: &BitSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        b.as_words().serialize(serializer)
    }

    /// Deserialize a set from a sequence of `u64` words.
    ///
    /// Trailing zero words are accepted and trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a sequence of `u64`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WordsVisitor;

        impl<'de> Visitor<'de> for WordsVisitor {
            type Value = BitSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of u64 words")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut words = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
                while let Some(word) = seq.next_element::<u64>()? {
                    words.push(word);
                }
                Ok(BitSet::from(words))
            }
        }

        deserializer.deserialize_seq(WordsVisitor)
    }
}

/// Serialize and deserialize [`BitSet`] as a strictly ascending sequence of
/// elements.
pub mod sorted_set {
    use super::*;

    /// Serialize the set as its elements in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(b: &BitSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut ser = serializer.serialize_seq(Some(b.len()))?;
        for n in b {
            ser.serialize_element(&n)?;
        }
        ser.end()
    }

    /// Deserialize a set from a strictly ascending sequence of non-negative
    /// elements.
    ///
    /// # Errors
    ///
    /// Returns an error if an element is negative, repeated, out of order, or
    /// too large to allocate storage for.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SortedVisitor;

        impl<'de> Visitor<'de> for SortedVisitor {
            type Value = BitSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sorted sequence of non-negative integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = BitSet::new();
                let mut last = None;
                while let Some(n) = seq.next_element::<isize>()? {
                    if n < 0 {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Signed(n as i64),
                            &"a non-negative integer",
                        ));
                    }
                    if last.is_some_and(|last| last >= n) {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Signed(n as i64),
                            &"sorted sequence",
                        ));
                    }
                    last = Some(n);
                    add_elem::<A::Error>(&mut set, n)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SortedVisitor)
    }
}

/// Serialize and deserialize [`BitSet`] as a sequence of elements in any
/// order.
pub mod unordered_set {
    use super::*;

    /// Serialize the set as its elements (written in ascending order).
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(b: &BitSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        sorted_set::serialize(b, serializer)
    }

    /// Deserialize a set from a sequence of elements in any order.
    ///
    /// Duplicates collapse and negative elements are ignored, as with
    /// [`BitSet::add`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a sequence of integers or an
    /// element is too large to allocate storage for.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnorderedVisitor;

        impl<'de> Visitor<'de> for UnorderedVisitor {
            type Value = BitSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = BitSet::new();
                while let Some(n) = seq.next_element::<isize>()? {
                    add_elem::<A::Error>(&mut set, n)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(UnorderedVisitor)
    }
}

/// Serialize and deserialize [`BitSet`] as its compact `{…}` string.
pub mod compact {
    use super::*;

    /// Serialize the set as a string such as `{0..2 4 5}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(b: &BitSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(b)
    }

    /// Deserialize a set from its compact string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not parse as a [`BitSet`].
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompactVisitor;

        impl Visitor<'_> for CompactVisitor {
            type Value = BitSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bitset string such as {0..2 4 5}")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CompactVisitor)
    }
}

/// Macro to implement byte-based serialization and deserialization for
/// [`BitSet`].
macro_rules! impl_bytes {
    ($mod:ident, $from_fn:path, $to_fn:path, $doc:literal) => {
        #[doc = $doc]
        pub mod $mod {
            use super::*;

            /// Serialize the set's words as bytes (base64 text for
            /// human-readable formats).
            ///
            /// # Errors
            ///
            /// Returns an error if the serializer fails.
            pub fn serialize<S>(b: &BitSet, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let bytes: Vec<u8> = b.as_words().iter().flat_map(|&w| $to_fn(w)).collect();
                binser::serialize(&bytes, serializer)
            }

            /// Deserialize a set from its words as bytes.
            ///
            /// # Errors
            ///
            /// Returns an error if the byte length is not a multiple of 8 or
            /// the base64 text is malformed.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<BitSet, D::Error>
            where
                D: Deserializer<'de>,
            {
                binser::deserialize(deserializer, $from_fn)
            }
        }
    };
}

impl_bytes!(
    le_bytes,
    u64::from_le_bytes,
    u64::to_le_bytes,
    "Serialize and deserialize [`BitSet`] words using little-endian byte order."
);
impl_bytes!(
    be_bytes,
    u64::from_be_bytes,
    u64::to_be_bytes,
    "Serialize and deserialize [`BitSet`] words using big-endian byte order."
);

impl Serialize for BitSet {
    /// Serialize as the compact string for human-readable formats and as the
    /// word sequence otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            compact::serialize(self, serializer)
        } else {
            words::serialize(self, serializer)
        }
    }
}

impl<'de> Deserialize<'de> for BitSet {
    /// Deserialize from the representation chosen by [`Serialize`].
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            compact::deserialize(deserializer)
        } else {
            words::deserialize(deserializer)
        }
    }
}

/// Helper module for byte serialization
mod binser {
    use super::*;

    fn words_from_bytes<E: de::Error>(bytes: &[u8], parse: fn([u8; 8]) -> u64) -> Result<BitSet, E> {
        if bytes.len() % 8 != 0 {
            return Err(E::invalid_length(bytes.len(), &"a multiple of 8 bytes"));
        }
        let words: Vec<u64> = bytes
            .chunks_exact(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(chunk);
                parse(buf)
            })
            .collect();
        Ok(BitSet::from(words))
    }

    /// Serialize raw bytes, as base64 text for human-readable formats.
    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let encoded: String = data_encoding::BASE64.encode(bytes);
            serializer.serialize_str(&encoded)
        } else {
            serializer.serialize_bytes(bytes)
        }
    }

    /// Deserialize raw bytes written by [`serialize`] and decode them into
    /// words with `parse`.
    pub fn deserialize<'de, D>(deserializer: D, parse: fn([u8; 8]) -> u64) -> Result<BitSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BytesVisitor(fn([u8; 8]) -> u64);

        impl<'de> Visitor<'de> for BytesVisitor {
            type Value = BitSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("bytes representation of a bitset")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let decoded = data_encoding::BASE64
                    .decode(v.as_bytes())
                    .map_err(E::custom)?;
                words_from_bytes(&decoded, self.0)
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                words_from_bytes(v, self.0)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                words_from_bytes(&bytes, self.0)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(BytesVisitor(parse))
        } else {
            deserializer.deserialize_bytes(BytesVisitor(parse))
        }
    }
}
