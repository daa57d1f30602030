//! Target containers for the iteration protocol.
//!
//! Every transformation of [`RichIterable`](super::RichIterable) has an
//! `_into` form that writes its results into a caller-supplied target and
//! hands back that same `&mut` reference. Any type that can absorb elements
//! one at a time can serve as a target by implementing one of the traits in
//! this module:
//!
//! - [`Sink`]: element-wise targets (lists, sets, bags, stacks, ...)
//! - [`MapSink`]: key/value targets with unique keys
//! - [`MultimapSink`]: key/value targets that keep every value per key
//!
//! # Examples
//!
//! ```rust
//! use rich_collections::iteration::{RichIterable, Sink};
//! use std::collections::BTreeSet;
//!
//! let source = vec![3, 1, 2, 3];
//! let mut target = BTreeSet::new();
//! let returned = source.select_into(|value| *value > 1, &mut target);
//! assert_eq!(returned.len(), 2);
//! assert_eq!(target.into_iter().collect::<Vec<_>>(), vec![2, 3]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A container that accepts elements one at a time.
pub trait Sink<T> {
    /// Adds one element to the container.
    fn accept(&mut self, element: T);

    /// Adds every element of `elements`, in order.
    fn accept_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for element in elements {
            self.accept(element);
        }
    }
}

/// A key/value container whose keys are unique.
pub trait MapSink<K, V> {
    /// Returns `true` if `key` already has a value.
    fn contains_key_of(&self, key: &K) -> bool;

    /// Associates `value` with `key`, returning the previous value.
    fn put(&mut self, key: K, value: V) -> Option<V>;
}

/// A key/value container that keeps a collection of values per key.
pub trait MultimapSink<K, V> {
    /// Associates one more `value` with `key`.
    fn put(&mut self, key: K, value: V);
}

// =============================================================================
// Standard Library Targets
// =============================================================================

impl<T> Sink<T> for Vec<T> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.push(element);
    }
}

impl<T> Sink<T> for VecDeque<T> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.push_back(element);
    }
}

impl<T: Hash + Eq, S: BuildHasher> Sink<T> for HashSet<T, S> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Ord> Sink<T> for BTreeSet<T> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.insert(element);
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MapSink<K, V> for HashMap<K, V, S> {
    fn contains_key_of(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Ord, V> MapSink<K, V> for BTreeMap<K, V> {
    fn contains_key_of(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MultimapSink<K, V> for HashMap<K, Vec<V>, S> {
    fn put(&mut self, key: K, value: V) {
        self.entry(key).or_default().push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_vec_sink_keeps_order_and_duplicates() {
        let mut target = Vec::new();
        target.accept_all([3, 1, 3]);
        assert_eq!(target, vec![3, 1, 3]);
    }

    #[rstest]
    fn test_hash_set_sink_deduplicates() {
        let mut target: HashSet<i32> = HashSet::new();
        target.accept_all([1, 1, 2]);
        assert_eq!(target.len(), 2);
    }

    #[rstest]
    fn test_hash_map_multimap_sink_appends() {
        let mut target: HashMap<bool, Vec<i32>> = HashMap::new();
        MultimapSink::put(&mut target, true, 1);
        MultimapSink::put(&mut target, true, 3);
        MultimapSink::put(&mut target, false, 2);
        assert_eq!(target[&true], vec![1, 3]);
        assert_eq!(target[&false], vec![2]);
    }
}
