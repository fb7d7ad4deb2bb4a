//! Sets serialize as a sequence of their values in insertion order.
//!
//! Deserializing collapses duplicates and rejects input holding more
//! distinct values than the set's capacity instead of dropping them.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::generic::bounded_set::BoundedSet;

impl<T: Serialize, const N: usize> Serialize for BoundedSet<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.as_slice() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct BoundedSetVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for BoundedSetVisitor<T, N>
where
    T: Deserialize<'de> + Default + Copy + PartialEq,
{
    type Value = BoundedSet<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of at most {} distinct values", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = BoundedSet::new();
        let mut seen = 0usize;
        while let Some(value) = seq.next_element::<T>()? {
            seen += 1;
            if set.try_add(value).is_err() {
                return Err(A::Error::invalid_length(seen, &self));
            }
        }
        Ok(set)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for BoundedSet<T, N>
where
    T: Deserialize<'de> + Default + Copy + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(BoundedSetVisitor::<T, N>(PhantomData))
    }
}
