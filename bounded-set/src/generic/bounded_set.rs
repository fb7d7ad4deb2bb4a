use core::fmt;
use core::ops::Index;

use crate::error::BoundedSetError;

/// Capacity used when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 20;

/// An insertion-ordered set of at most `N` values stored inline.
///
/// Valid values always occupy the prefix `items[..len]`, in the order they
/// were added (removal shifts later values left). Slots past `len` are stale
/// and never observed.
///
/// [`add`](Self::add) silently drops a new value once the set is full. Use
/// [`try_add`](Self::try_add) when the caller needs to know.
#[derive(Clone, Copy)]
pub struct BoundedSet<T, const N: usize = DEFAULT_CAPACITY> {
    items: [T; N],
    len: usize,
}

impl<T: Default + Copy + PartialEq, const N: usize> Default for BoundedSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Copy + PartialEq, const N: usize> BoundedSet<T, N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            len: 0,
        }
    }

    /// Adds `value` unless it is already present.
    ///
    /// When the set is full and `value` is absent the value is dropped
    /// without any signal to the caller. Check [`contains`](Self::contains)
    /// or [`len`](Self::len) afterwards, or call [`try_add`](Self::try_add).
    pub fn add(&mut self, value: T) {
        if self.try_add(value).is_err() {
            tracing::debug!(capacity = N, "bounded set full, value dropped");
        }
    }

    /// Adds `value` unless it is already present, reporting the outcome.
    ///
    /// Returns `Ok(true)` when the value was inserted, `Ok(false)` when it was
    /// already in the set and [`BoundedSetError::CapacityExceeded`] when the
    /// set is full. The set is left untouched on error.
    pub fn try_add(&mut self, value: T) -> Result<bool, BoundedSetError> {
        if self.contains(&value) {
            return Ok(false);
        }
        if self.len >= N {
            tracing::trace!(capacity = N, "rejecting insert into full bounded set");
            return Err(BoundedSetError::CapacityExceeded { capacity: N });
        }
        self.items[self.len] = value;
        self.len += 1;
        Ok(true)
    }

    /// Removes `value` if present, keeping the relative order of the rest.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => {
                self.items.copy_within(index + 1..self.len, index);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Index of `value` within the valid prefix.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|item| item == value)
    }

    /// Forgets every value. Stale slots keep their old contents until
    /// overwritten by later adds.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn extend_from_slice(&mut self, values: &[T]) {
        for &value in values {
            self.add(value);
        }
    }
}

impl<T, const N: usize> BoundedSet<T, N> {
    /// Number of values currently in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T, const N: usize> Index<usize> for BoundedSet<T, N> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= self.len()`.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedSet<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Default + Copy + PartialEq, const N: usize> Extend<T> for BoundedSet<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Default + Copy + PartialEq, const N: usize> FromIterator<T> for BoundedSet<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Set equality: insertion order and stale slots are ignored.
impl<T: PartialEq, const N: usize> PartialEq for BoundedSet<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .as_slice()
                .iter()
                .all(|item| other.as_slice().contains(item))
    }
}

impl<T: Eq, const N: usize> Eq for BoundedSet<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedSet<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.as_slice()).finish()
    }
}
