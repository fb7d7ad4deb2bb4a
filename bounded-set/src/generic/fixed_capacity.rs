use crate::error::BoundedSetError;
use crate::generic::bounded_set::BoundedSet;

/// A duplicate-free collection whose capacity is fixed when the type is
/// chosen. Lets callers stay generic over the concrete set and its size.
pub trait FixedCapacitySet {
    type Item;

    /// `Ok(true)` if inserted, `Ok(false)` if already present.
    fn insert(&mut self, item: Self::Item) -> Result<bool, BoundedSetError>;
    fn remove(&mut self, item: &Self::Item) -> bool;
    fn contains(&self, item: &Self::Item) -> bool;
    fn clear(&mut self);
    fn as_slice(&self) -> &[Self::Item];
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

impl<T: Default + Copy + PartialEq, const N: usize> FixedCapacitySet for BoundedSet<T, N> {
    type Item = T;

    fn insert(&mut self, item: T) -> Result<bool, BoundedSetError> {
        self.try_add(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        self.remove(item)
    }

    fn contains(&self, item: &T) -> bool {
        self.contains(item)
    }

    fn clear(&mut self) {
        self.clear();
    }

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn capacity(&self) -> usize {
        N
    }
}
