//! Bidirectional hash map.

use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use crate::error::{CollectionError, CollectionResult};
use crate::hashing::{UnifiedMap, UnifiedSet, new_unified_map, new_unified_set};
use crate::iteration::{MapSink, RichIterable};

/// A map whose values are unique as well as its keys, so it can be looked
/// up in both directions.
///
/// The protocol of [`RichIterable`] runs over the values.
///
/// # Examples
///
/// ```rust
/// use rich_collections::collection::HashBiMap;
/// use rich_collections::error::ErrorKind;
///
/// let mut codes = HashBiMap::new();
/// codes.put("one", 1).unwrap();
/// codes.put("two", 2).unwrap();
///
/// assert_eq!(codes.get_key(&2), Some(&"two"));
/// assert_eq!(codes.put("uno", 1).unwrap_err().kind(), ErrorKind::DuplicateValue);
///
/// codes.force_put("uno", 1);
/// assert_eq!(codes.get(&"one"), None);
/// assert_eq!(codes.inverse().get(&1), Some(&"uno"));
/// ```
#[derive(Clone)]
pub struct HashBiMap<K, V> {
    forward: UnifiedMap<K, V>,
    backward: UnifiedMap<V, K>,
}

impl<K, V> Default for HashBiMap<K, V> {
    fn default() -> Self {
        Self {
            forward: UnifiedMap::default(),
            backward: UnifiedMap::default(),
        }
    }
}

impl<K, V> HashBiMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` pairs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: new_unified_map(capacity),
            backward: new_unified_map(capacity),
        }
    }

    /// Associates `value` with `key`, returning the value previously bound
    /// to `key`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateValue`] if `value` is already bound to a
    /// different key; the map is left unchanged.
    pub fn put(&mut self, key: K, value: V) -> CollectionResult<Option<V>> {
        if let Some(existing_key) = self.backward.get(&value) {
            if *existing_key != key {
                return Err(CollectionError::duplicate_value("put"));
            }
        }
        Ok(self.insert_unchecked(key, value))
    }

    /// Associates `value` with `key`, first evicting any other key bound to
    /// `value`. Returns the value previously bound to `key`.
    pub fn force_put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing_key) = self.backward.remove(&value) {
            self.forward.remove(&existing_key);
        }
        self.insert_unchecked(key, value)
    }

    fn insert_unchecked(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.forward.insert(key.clone(), value.clone());
        if let Some(previous_value) = &previous {
            self.backward.remove(previous_value);
        }
        self.backward.insert(value, key);
        previous
    }

    /// Removes `key` and its value; returns the value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        self.backward.remove(&value);
        Some(value)
    }

    /// The value bound to `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    /// The key bound to `value`.
    pub fn get_key(&self, value: &V) -> Option<&K> {
        self.backward.get(value)
    }

    /// Returns `true` if `key` is bound.
    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    /// Returns `true` if `value` is bound.
    pub fn contains_value(&self, value: &V) -> bool {
        self.backward.contains_key(value)
    }

    /// A new map with keys and values swapped.
    #[must_use]
    pub fn inverse(&self) -> HashBiMap<V, K> {
        HashBiMap {
            forward: self.backward.clone(),
            backward: self.forward.clone(),
        }
    }

    /// The keys, as a set.
    pub fn key_set(&self) -> UnifiedSet<K> {
        let mut keys = new_unified_set(self.forward.len());
        keys.extend(self.forward.keys().cloned());
        keys
    }
}

impl<K, V> HashBiMap<K, V> {
    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns `true` if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterates over the pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.forward.iter()
    }
}

impl<K, V> MapSink<K, V> for HashBiMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    fn contains_key_of(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    /// Binds like [`HashBiMap::force_put`].
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.force_put(key, value)
    }
}

impl<K, V> RichIterable for HashBiMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    type Element = V;
    type Iter<'a>
        = hash_map::Values<'a, K, V>
    where
        Self: 'a;
    type Selected = UnifiedSet<V>;
    type Collected<U> = Vec<U>;

    fn elements(&self) -> Self::Iter<'_> {
        self.forward.values()
    }

    fn new_selected(&self) -> Self::Selected {
        new_unified_set(0)
    }

    fn size(&self) -> usize {
        self.forward.len()
    }

    fn contains(&self, value: &V) -> bool {
        self.contains_value(value)
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for HashBiMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for HashBiMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.forward.iter()).finish()
    }
}
