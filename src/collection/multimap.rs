//! Multimaps: keys bound to non-empty collections of values.
//!
//! Both multimaps drop a key as soon as its last value is removed, so a key
//! is never present with an empty bucket.

use std::fmt;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::collection::TreeSortedSet;
use crate::comparator::Comparator;
use crate::hashing::UnifiedMap;
use crate::iteration::MultimapSink;

/// Inline capacity of a [`ListMultimap`] bucket before it spills to the heap.
const INLINE_BUCKET: usize = 4;

type Bucket<V> = SmallVec<[V; INLINE_BUCKET]>;

// =============================================================================
// ListMultimap
// =============================================================================

/// A multimap that keeps every value per key, in insertion order.
///
/// `ListMultimap` is the default target of `group_by` and `group_by_each`.
///
/// # Examples
///
/// ```rust
/// use rich_collections::iteration::RichIterable;
///
/// let grouped = vec![1, 2, 3, 4, 5].group_by(|value| value % 2 == 0);
/// assert_eq!(grouped.get(&true), &[2, 4]);
/// assert_eq!(grouped.get(&false), &[1, 3, 5]);
/// assert_eq!(grouped.size(), 5);
/// assert_eq!(grouped.size_distinct(), 2);
/// ```
#[derive(Clone)]
pub struct ListMultimap<K, V> {
    buckets: UnifiedMap<K, Bucket<V>>,
    size: usize,
}

impl<K, V> Default for ListMultimap<K, V> {
    fn default() -> Self {
        Self {
            buckets: UnifiedMap::default(),
            size: 0,
        }
    }
}

impl<K: Hash + Eq, V> ListMultimap<K, V> {
    /// Creates an empty multimap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the bucket of `key`.
    pub fn put(&mut self, key: K, value: V) {
        self.buckets.entry(key).or_default().push(value);
        self.size += 1;
    }

    /// Appends every value to the bucket of `key`; returns `true` if any was added.
    pub fn put_all<I>(&mut self, key: K, values: I) -> bool
    where
        I: IntoIterator<Item = V>,
    {
        let mut incoming = values.into_iter().peekable();
        if incoming.peek().is_none() {
            return false;
        }
        let bucket = self.buckets.entry(key).or_default();
        let before = bucket.len();
        bucket.extend(incoming);
        self.size += bucket.len() - before;
        true
    }

    /// Removes the first occurrence of `value` under `key`.
    pub fn remove(&mut self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        let Some(bucket) = self.buckets.get_mut(key) else {
            return false;
        };
        let Some(position) = bucket.iter().position(|candidate| candidate == value) else {
            return false;
        };
        bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(key);
        }
        self.size -= 1;
        true
    }

    /// Removes `key` and returns its values, in insertion order.
    pub fn remove_all(&mut self, key: &K) -> Vec<V> {
        let removed: Vec<V> = self
            .buckets
            .remove(key)
            .map(SmallVec::into_vec)
            .unwrap_or_default();
        self.size -= removed.len();
        removed
    }

    /// The values under `key`; empty when the key is absent.
    pub fn get(&self, key: &K) -> &[V] {
        self.buckets
            .get(key)
            .map(|bucket| bucket.as_slice())
            .unwrap_or_default()
    }

    /// Returns `true` if `key` has at least one value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }
}

impl<K, V> ListMultimap<K, V> {
    /// Total number of values across all keys.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of keys.
    #[must_use]
    pub fn size_distinct(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if there are no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates over the keys, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.keys()
    }

    /// Iterates over each key with all of its values.
    pub fn key_multi_values(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.buckets
            .iter()
            .map(|(key, bucket)| (key, bucket.as_slice()))
    }
}

impl<K: Hash + Eq, V> MultimapSink<K, V> for ListMultimap<K, V> {
    #[inline]
    fn put(&mut self, key: K, value: V) {
        Self::put(self, key, value);
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for ListMultimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.buckets == other.buckets
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ListMultimap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.key_multi_values())
            .finish()
    }
}

// =============================================================================
// SortedSetMultimap
// =============================================================================

/// A multimap whose buckets are sorted sets under one shared comparator.
///
/// Produced by `TreeSortedMap::flip`, where every bucket holds the original
/// keys in the original map's order.
#[derive(Clone)]
pub struct SortedSetMultimap<K, V> {
    buckets: UnifiedMap<K, TreeSortedSet<V>>,
    comparator: Comparator<V>,
    size: usize,
}

impl<K: Hash + Eq, V: Ord> SortedSetMultimap<K, V> {
    /// Creates an empty multimap whose buckets use natural order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<K: Hash + Eq, V: Ord> Default for SortedSetMultimap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> SortedSetMultimap<K, V> {
    /// Creates an empty multimap whose buckets are ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: Comparator<V>) -> Self {
        Self {
            buckets: UnifiedMap::default(),
            comparator,
            size: 0,
        }
    }

    /// The comparator shared by every bucket.
    pub const fn comparator(&self) -> &Comparator<V> {
        &self.comparator
    }

    /// Adds `value` to the bucket of `key`; returns `false` if it was
    /// already there.
    pub fn put(&mut self, key: K, value: V) -> bool {
        let comparator = &self.comparator;
        let added = self
            .buckets
            .entry(key)
            .or_insert_with(|| TreeSortedSet::with_comparator(comparator.clone()))
            .add(value);
        if added {
            self.size += 1;
        }
        added
    }

    /// Adds every value to the bucket of `key`; returns `true` if any was new.
    pub fn put_all<I>(&mut self, key: K, values: I) -> bool
    where
        K: Clone,
        I: IntoIterator<Item = V>,
    {
        values
            .into_iter()
            .fold(false, |changed, value| self.put(key.clone(), value) || changed)
    }

    /// Removes `value` from the bucket of `key`.
    pub fn remove(&mut self, key: &K, value: &V) -> bool {
        let Some(bucket) = self.buckets.get_mut(key) else {
            return false;
        };
        if !bucket.remove(value) {
            return false;
        }
        if bucket.is_empty() {
            self.buckets.remove(key);
        }
        self.size -= 1;
        true
    }

    /// Removes `key` and returns its bucket.
    pub fn remove_all(&mut self, key: &K) -> Option<TreeSortedSet<V>> {
        let removed = self.buckets.remove(key)?;
        self.size -= removed.len();
        Some(removed)
    }

    /// The values under `key`, in comparator order; empty when absent.
    pub fn get(&self, key: &K) -> &[V] {
        self.buckets
            .get(key)
            .map(TreeSortedSet::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if `key` has at least one value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets.contains_key(key)
    }
}

impl<K, V> SortedSetMultimap<K, V> {
    /// Total number of values across all keys.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of keys.
    #[must_use]
    pub fn size_distinct(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if there are no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates over each key with its sorted bucket.
    pub fn key_multi_values(&self) -> impl Iterator<Item = (&K, &TreeSortedSet<V>)> {
        self.buckets.iter()
    }
}

impl<K: Hash + Eq, V> MultimapSink<K, V> for SortedSetMultimap<K, V> {
    #[inline]
    fn put(&mut self, key: K, value: V) {
        Self::put(self, key, value);
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for SortedSetMultimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.buckets == other.buckets
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedSetMultimap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.buckets.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_list_multimap_never_keeps_empty_bucket() {
        let mut multimap = ListMultimap::new();
        multimap.put("a", 1);
        multimap.put("a", 2);
        assert!(multimap.remove(&"a", &1));
        assert!(multimap.contains_key(&"a"));
        assert!(multimap.remove(&"a", &2));
        assert!(!multimap.contains_key(&"a"));
        assert!(multimap.is_empty());
        assert_eq!(multimap.get(&"a"), &[] as &[i32]);
    }

    #[rstest]
    fn test_list_multimap_put_all_and_remove_all() {
        let mut multimap = ListMultimap::new();
        assert!(!multimap.put_all("a", Vec::<i32>::new()));
        assert!(!multimap.contains_key(&"a"));
        assert!(multimap.put_all("a", (1..=6).collect::<Vec<_>>()));
        assert_eq!(multimap.size(), 6);
        assert_eq!(multimap.remove_all(&"a"), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(multimap.size(), 0);
    }

    #[rstest]
    fn test_sorted_set_multimap_orders_and_deduplicates() {
        let mut multimap = SortedSetMultimap::with_comparator(Comparator::<i32>::natural().reversed());
        multimap.put("a", 1);
        multimap.put("a", 3);
        assert!(!multimap.put("a", 3));
        multimap.put("b", 2);
        assert_eq!(multimap.get(&"a"), &[3, 1]);
        assert_eq!(multimap.size(), 3);
        assert_eq!(multimap.size_distinct(), 2);
        assert!(multimap.remove(&"b", &2));
        assert!(!multimap.contains_key(&"b"));
    }
}
