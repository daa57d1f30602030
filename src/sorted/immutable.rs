//! Immutable snapshot of a sorted map.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::iteration::{OrderedIterable, RichIterable};

use super::tree_sorted_map::{TreeSortedMap, Values};

/// A sorted map that can never change after it is built.
///
/// Produced by [`TreeSortedMap::to_immutable`]. The snapshot shares no
/// mutable state with the map it was taken from; clones share the same
/// frozen entries. Updates return a new snapshot and leave `self` as it was.
///
/// All read operations of [`TreeSortedMap`] are available through `Deref`.
///
/// # Examples
///
/// ```rust
/// use rich_collections::sorted::TreeSortedMap;
///
/// let mut map = TreeSortedMap::new();
/// map.put(1, "one");
/// let snapshot = map.to_immutable();
/// map.put(2, "two");
///
/// assert_eq!(snapshot.len(), 1);
/// let grown = snapshot.new_with_key_value(3, "three");
/// assert_eq!(grown.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(snapshot.len(), 1);
/// ```
pub struct ImmutableSortedMap<K, V> {
    inner: Arc<TreeSortedMap<K, V>>,
}

impl<K, V> Clone for ImmutableSortedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> ImmutableSortedMap<K, V> {
    pub(crate) fn from_map(map: TreeSortedMap<K, V>) -> Self {
        Self {
            inner: Arc::new(map),
        }
    }
}

impl<K: Clone, V: Clone> ImmutableSortedMap<K, V> {
    /// A new snapshot with `key` bound to `value`.
    #[must_use]
    pub fn new_with_key_value(&self, key: K, value: V) -> Self {
        let mut next = TreeSortedMap::clone(&self.inner);
        next.put(key, value);
        Self::from_map(next)
    }

    /// A new snapshot with every pair added.
    #[must_use]
    pub fn new_with_all_key_values<I>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut next = TreeSortedMap::clone(&self.inner);
        next.with_all_key_values(pairs);
        Self::from_map(next)
    }

    /// A new snapshot without `key`.
    #[must_use]
    pub fn new_without_key(&self, key: &K) -> Self {
        if !self.inner.contains_key(key) {
            return self.clone();
        }
        let mut next = TreeSortedMap::clone(&self.inner);
        next.remove_key(key);
        Self::from_map(next)
    }

    /// A mutable copy of this snapshot.
    #[must_use]
    pub fn to_mutable(&self) -> TreeSortedMap<K, V> {
        TreeSortedMap::clone(&self.inner)
    }
}

impl<K, V> Deref for ImmutableSortedMap<K, V> {
    type Target = TreeSortedMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K, V> RichIterable for ImmutableSortedMap<K, V> {
    type Element = V;
    type Iter<'a>
        = Values<'a, K, V>
    where
        Self: 'a;
    type Selected = Vec<V>;
    type Collected<U> = Vec<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.inner.values()
    }

    fn new_selected(&self) -> Self::Selected {
        Vec::new()
    }

    fn size(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> OrderedIterable for ImmutableSortedMap<K, V> {
    positional_operations_unsupported!("ImmutableSortedMap");
}

impl<K: PartialEq, V: PartialEq> PartialEq for ImmutableSortedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableSortedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, formatter)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for ImmutableSortedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, formatter)
    }
}
