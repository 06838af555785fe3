//! Rkyv implementation for `BitSet`.

use alloc::vec::Vec;

use rkyv::{
    Archive, Deserialize, Serialize,
    rancor::Fallible,
    ser::{Allocator, Writer},
    vec::ArchivedVec,
};

use crate::BitSet;

/// The archived version of BitSet: its canonical word vector.
pub type ArchivedBitSet = ArchivedVec<<u64 as rkyv::Archive>::Archived>;

/// The resolver for BitSet.
pub type BitSetResolver = rkyv::vec::VecResolver;

impl Archive for BitSet {
    type Archived = ArchivedBitSet;
    type Resolver = BitSetResolver;

    fn resolve(&self, resolver: Self::Resolver, out: rkyv::Place<Self::Archived>) {
        ArchivedVec::resolve_from_slice(self.as_words(), resolver, out);
    }
}

impl<S: Fallible + Allocator + Writer + ?Sized> Serialize<S> for BitSet {
    #[inline]
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        ArchivedVec::<_>::serialize_from_slice(self.as_words(), serializer)
    }
}

// Archives written by hand may carry trailing zero words; `From` trims them.
impl<D: Fallible + ?Sized> Deserialize<BitSet, D> for ArchivedBitSet {
    #[inline]
    fn deserialize(&self, _deserializer: &mut D) -> Result<BitSet, D::Error> {
        let words: Vec<u64> = self.as_slice().iter().map(|w| w.to_native()).collect();
        Ok(BitSet::from(words))
    }
}
