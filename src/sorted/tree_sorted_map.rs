//! Mutable key/value map kept in comparator order.
//!
//! # Overview
//!
//! [`TreeSortedMap`] stores its entries in a vector sorted by a
//! [`Comparator`] over the keys. Lookups binary-search the vector, so every
//! query is `O(log n)`, while insertion and removal shift the tail and are
//! `O(n)`. Keys are unique under the comparator: putting a key that compares
//! equal to an existing one replaces that entry's value.
//!
//! Every map derived from a `TreeSortedMap` (selections, sub-maps,
//! [`new_empty`](TreeSortedMap::new_empty)) keeps its comparator.
//!
//! # Time Complexity
//!
//! | Operation               | Complexity |
//! |-------------------------|------------|
//! | `get` / `contains_key`  | O(log n)   |
//! | `put` / `remove_key`    | O(n)       |
//! | `first_key`/`last_key`  | O(1)       |
//! | `head_map`/`tail_map`   | O(log n + m) |
//! | `iter`                  | O(1) + O(n) |
//!
//! # Examples
//!
//! ```rust
//! use rich_collections::iteration::RichIterable;
//! use rich_collections::sorted::TreeSortedMap;
//!
//! let map: TreeSortedMap<i32, &str> = [(3, "three"), (1, "one"), (2, "two")]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(map.to_string(), "{1: one, 2: two, 3: three}");
//!
//! // The iteration protocol runs over the values, in key order.
//! assert_eq!(map.collect(|value| value.len()), vec![3, 3, 5]);
//! assert_eq!(map.detect(|value| value.starts_with('t')), Some(&"two"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::slice;

use crate::collection::SortedSetMultimap;
use crate::comparator::Comparator;
use crate::error::{CollectionError, CollectionResult};
use crate::iteration::{MapSink, OrderedIterable, RichIterable};

use super::immutable::ImmutableSortedMap;
use super::unmodifiable::UnmodifiableSortedMap;

/// A key-unique map kept in comparator order.
///
/// See the [module documentation](self) for details.
#[derive(Clone)]
pub struct TreeSortedMap<K, V> {
    entries: Vec<(K, V)>,
    comparator: Comparator<K>,
}

// =============================================================================
// Construction
// =============================================================================

impl<K: Ord, V> TreeSortedMap<K, V> {
    /// Creates an empty map in natural key order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<K: Ord, V> Default for TreeSortedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> TreeSortedMap<K, V> {
    /// Creates an empty map ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(comparator: Comparator<K>) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    /// Creates a map ordered by `comparator` from key/value pairs; a later
    /// pair replaces the value of an earlier pair with an equal key.
    pub fn from_pairs_with_comparator<I>(comparator: Comparator<K>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::with_comparator(comparator);
        map.with_all_key_values(pairs);
        map
    }

    /// An empty map with the same comparator.
    #[must_use]
    pub fn new_empty<W>(&self) -> TreeSortedMap<K, W> {
        TreeSortedMap::with_comparator(self.comparator.clone())
    }

    /// The comparator fixed at construction.
    pub const fn comparator(&self) -> &Comparator<K> {
        &self.comparator
    }

    /// Builds from entries that are already strictly sorted by `comparator`.
    pub(crate) fn from_sorted_entries(comparator: Comparator<K>, entries: Vec<(K, V)>) -> Self {
        let map = Self {
            entries,
            comparator,
        };
        debug_assert!(map.is_strictly_sorted());
        map
    }

    fn is_strictly_sorted(&self) -> bool {
        self.entries.windows(2).all(|pair| {
            self.comparator.compare(&pair[0].0, &pair[1].0) == Ordering::Less
        })
    }

    fn search(&self, key: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(probe, _)| self.comparator.compare(probe, key))
    }

    /// Index of the first entry whose key is not less than `key`.
    fn lower_bound(&self, key: &K) -> usize {
        self.entries
            .partition_point(|(probe, _)| self.comparator.compare(probe, key) == Ordering::Less)
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl<K, V> TreeSortedMap<K, V> {
    /// Associates `value` with `key`, returning the value it replaces.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            Err(position) => {
                self.entries.insert(position, (key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove_key(&mut self, key: &K) -> Option<V> {
        let position = self.search(key).ok()?;
        Some(self.entries.remove(position).1)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Puts `key` and `value` and returns this map for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rich_collections::sorted::TreeSortedMap;
    ///
    /// let mut map = TreeSortedMap::new();
    /// map.with_key_value(2, 'b').with_key_value(1, 'a').without_key(&2);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn with_key_value(&mut self, key: K, value: V) -> &mut Self {
        self.put(key, value);
        self
    }

    /// Puts every pair and returns this map.
    pub fn with_all_key_values<I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.put(key, value);
        }
        self
    }

    /// Removes `key` and returns this map.
    pub fn without_key(&mut self, key: &K) -> &mut Self {
        self.remove_key(key);
        self
    }

    /// Removes every key in `keys` and returns this map.
    pub fn without_all_keys<'k, I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        for key in keys {
            self.remove_key(key);
        }
        self
    }

    /// Puts a key and a value derived from every element of `iterable`.
    pub fn collect_keys_and_values<T, I, KF, VF>(
        &mut self,
        iterable: I,
        mut key_function: KF,
        mut value_function: VF,
    ) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
    {
        for element in iterable {
            self.put(key_function(&element), value_function(&element));
        }
        self
    }

    /// The value of `key`, inserting the supplied value first if absent.
    pub fn get_if_absent_put<F>(&mut self, key: K, supplier: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let position = match self.search(&key) {
            Ok(position) => position,
            Err(position) => {
                self.entries.insert(position, (key, supplier()));
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Mutable access to the value of `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = self.search(key).ok()?;
        Some(&mut self.entries[position].1)
    }
}

// =============================================================================
// Queries
// =============================================================================

impl<K, V> TreeSortedMap<K, V> {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value of `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).ok().map(|position| &self.entries[position].1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Returns `true` if some entry has a value equal to `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, candidate)| candidate == value)
    }

    /// The smallest key.
    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    /// The largest key.
    pub fn last_key(&self) -> Option<&K> {
        self.entries.last().map(|(key, _)| key)
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.iter(),
        }
    }

    /// The first entry, in key order, satisfying `predicate`.
    pub fn detect_entry<P>(&self, mut predicate: P) -> Option<(&K, &V)>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.iter().find(|(key, value)| predicate(key, value))
    }
}

// =============================================================================
// Derived maps
// =============================================================================

impl<K: Clone, V: Clone> TreeSortedMap<K, V> {
    fn copy_of_range(&self, entries: &[(K, V)]) -> Self {
        Self::from_sorted_entries(self.comparator.clone(), entries.to_vec())
    }

    /// The entries whose keys are strictly less than `to`.
    #[must_use]
    pub fn head_map(&self, to: &K) -> Self {
        self.copy_of_range(&self.entries[..self.lower_bound(to)])
    }

    /// The entries whose keys are greater than or equal to `from`.
    #[must_use]
    pub fn tail_map(&self, from: &K) -> Self {
        self.copy_of_range(&self.entries[self.lower_bound(from)..])
    }

    /// The entries whose keys lie in `[from, to)`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `from` is greater than `to`.
    pub fn sub_map(&self, from: &K, to: &K) -> CollectionResult<Self> {
        if self.comparator.compare(from, to) == Ordering::Greater {
            return Err(CollectionError::invalid_argument(
                "sub_map",
                "lower bound is greater than upper bound",
            ));
        }
        Ok(self.copy_of_range(&self.entries[self.lower_bound(from)..self.lower_bound(to)]))
    }

    /// A new map, with the same comparator, of the entries satisfying `predicate`.
    pub fn select_entries<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        let mut selected: Self = self.new_empty();
        selected.entries.extend(
            self.entries
                .iter()
                .filter(|(key, value)| predicate(key, value))
                .cloned(),
        );
        selected
    }

    /// A new map, with the same comparator, of the entries not satisfying `predicate`.
    pub fn reject_entries<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.select_entries(|key, value| !predicate(key, value))
    }

    /// An independent snapshot of this map.
    #[must_use]
    pub fn to_immutable(&self) -> ImmutableSortedMap<K, V> {
        tracing::trace!(entries = self.len(), "sorted map snapshot taken");
        ImmutableSortedMap::from_map(self.clone())
    }
}

impl<K: Clone, V> TreeSortedMap<K, V> {
    /// A new map with the same keys, in the same order, and transformed values.
    pub fn collect_values<W, F>(&self, mut function: F) -> TreeSortedMap<K, W>
    where
        F: FnMut(&K, &V) -> W,
    {
        let entries: Vec<(K, W)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), function(key, value)))
            .collect();
        TreeSortedMap::from_sorted_entries(self.comparator.clone(), entries)
    }
}

impl<K, V> TreeSortedMap<K, V>
where
    K: Clone,
    V: Hash + Eq + Clone,
{
    /// Inverts the map into a multimap from each value to the keys bound to
    /// it; every bucket is ordered by this map's comparator.
    ///
    /// Values are grouped by `Hash + Eq` only, so they need no ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rich_collections::sorted::TreeSortedMap;
    ///
    /// let map: TreeSortedMap<i32, &str> = [(3, "odd"), (2, "even"), (1, "odd")].into_iter().collect();
    /// let flipped = map.flip();
    /// assert_eq!(flipped.get(&"odd"), &[1, 3]);
    /// assert_eq!(flipped.get(&"even"), &[2]);
    /// ```
    pub fn flip(&self) -> SortedSetMultimap<V, K> {
        let mut flipped = SortedSetMultimap::with_comparator(self.comparator.clone());
        for (key, value) in &self.entries {
            flipped.put(value.clone(), key.clone());
        }
        flipped
    }
}

impl<K, V> TreeSortedMap<K, V> {
    /// A read-only view borrowing this map.
    pub fn as_unmodifiable(&self) -> UnmodifiableSortedMap<'_, K, V> {
        tracing::trace!(entries = self.len(), "read-only sorted map view created");
        UnmodifiableSortedMap::new(self)
    }

    /// Moves this map behind a lock and returns a shareable handle to it.
    #[cfg(feature = "synchronized")]
    pub fn as_synchronized(self) -> super::SynchronizedSortedMap<K, V> {
        tracing::trace!(entries = self.len(), "synchronized sorted map created");
        super::SynchronizedSortedMap::new(self)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the entries of a [`TreeSortedMap`] in key order.
#[derive(Clone)]
pub struct Entries<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Entries<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

/// Iterator over the keys of a [`TreeSortedMap`] in order.
#[derive(Clone)]
pub struct Keys<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`TreeSortedMap`] in key order.
#[derive(Clone)]
pub struct Values<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Ord, V> FromIterator<(K, V)> for TreeSortedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs_with_comparator(Comparator::natural(), iter)
    }
}

impl<K, V> Extend<(K, V)> for TreeSortedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.with_all_key_values(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a TreeSortedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for TreeSortedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Entry-wise equality in key order; the comparators are not compared.
impl<K: PartialEq, V: PartialEq> PartialEq for TreeSortedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for TreeSortedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeSortedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeSortedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Protocol Implementations
// =============================================================================

impl<K, V> MapSink<K, V> for TreeSortedMap<K, V> {
    fn contains_key_of(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        Self::put(self, key, value)
    }
}

impl<K, V> RichIterable for TreeSortedMap<K, V> {
    type Element = V;
    type Iter<'a>
        = Values<'a, K, V>
    where
        Self: 'a;
    type Selected = Vec<V>;
    type Collected<U> = Vec<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.values()
    }

    fn new_selected(&self) -> Self::Selected {
        Vec::new()
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn get_last(&self) -> Option<&V> {
        self.entries.last().map(|(_, value)| value)
    }
}

impl<K, V> OrderedIterable for TreeSortedMap<K, V> {
    positional_operations_unsupported!("TreeSortedMap");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    fn sample() -> TreeSortedMap<i32, String> {
        (1..=5).map(|key| (key, key.to_string())).collect()
    }

    #[rstest]
    fn test_put_replaces_and_returns_previous() {
        let mut map = TreeSortedMap::new();
        assert_eq!(map.put(1, "a"), None);
        assert_eq!(map.put(1, "b"), Some("a"));
        assert_eq!(map.get(&1), Some(&"b"));
        assert_eq!(map.len(), 1);
    }

    #[rstest]
    #[case(3, vec![1, 2])]
    #[case(0, vec![])]
    #[case(9, vec![1, 2, 3, 4, 5])]
    fn test_head_map(#[case] to: i32, #[case] expected: Vec<i32>) {
        let head = sample().head_map(&to);
        assert_eq!(head.keys().copied().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_sub_map_bounds() {
        let map = sample();
        let middle = map.sub_map(&2, &4).unwrap();
        assert_eq!(middle.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(
            map.sub_map(&4, &2).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(map.sub_map(&3, &3).unwrap().is_empty());
    }

    #[rstest]
    fn test_get_if_absent_put_inserts_once() {
        let mut map: TreeSortedMap<&str, Vec<i32>> = TreeSortedMap::new();
        map.get_if_absent_put("a", Vec::new).push(1);
        map.get_if_absent_put("a", || vec![99]).push(2);
        assert_eq!(map.get(&"a"), Some(&vec![1, 2]));
    }

    #[rstest]
    fn test_tail_map_keeps_comparator() {
        let map = TreeSortedMap::from_pairs_with_comparator(
            Comparator::<i32>::natural().reversed(),
            (1..=4).map(|key| (key, key)),
        );
        let tail = map.tail_map(&2);
        assert_eq!(tail.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
        assert!(!tail.comparator().is_natural());
    }

    #[rstest]
    fn test_index_operations_name_the_operation() {
        let map = sample();
        let error = map.index_of(&"1".to_string()).unwrap_err();
        assert_eq!(
            error,
            CollectionError::NotSupported {
                container: "TreeSortedMap",
                operation: "index_of",
            }
        );
        assert_eq!(map.to_stack().unwrap_err().operation(), "to_stack");
    }
}
