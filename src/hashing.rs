//! Hasher selection for the hash-based containers.
//!
//! The hash-based defaults produced by the iteration protocol (`to_set`,
//! `group_by_unique_key`, `aggregate_by`, ...) are built on
//! [`DefaultBuildHasher`], which is chosen at compile time:
//!
//! - `fxhash` feature: [`rustc_hash::FxBuildHasher`]
//! - `ahash` feature (without `fxhash`): [`ahash::RandomState`]
//! - otherwise: [`std::collections::hash_map::RandomState`]
//!
//! Because the alias may name a hasher without a `new` constructor, always
//! build these containers with `Default::default()` or
//! [`new_unified_map`] / [`new_unified_set`].

use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
/// Hasher builder used by [`UnifiedMap`] and [`UnifiedSet`].
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Hasher builder used by [`UnifiedMap`] and [`UnifiedSet`].
pub type DefaultBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Hasher builder used by [`UnifiedMap`] and [`UnifiedSet`].
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// Hash map with the crate's configured hasher.
pub type UnifiedMap<K, V> = HashMap<K, V, DefaultBuildHasher>;

/// Hash set with the crate's configured hasher.
pub type UnifiedSet<T> = HashSet<T, DefaultBuildHasher>;

/// Creates an empty [`UnifiedMap`] with room for `capacity` entries.
#[must_use]
pub fn new_unified_map<K, V>(capacity: usize) -> UnifiedMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
}

/// Creates an empty [`UnifiedSet`] with room for `capacity` elements.
#[must_use]
pub fn new_unified_set<T>(capacity: usize) -> UnifiedSet<T> {
    HashSet::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unified_map_lookup_is_deterministic() {
        let mut map: UnifiedMap<String, i32> = new_unified_map(4);
        map.insert("alpha".to_string(), 1);
        map.insert("beta".to_string(), 2);
        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get("beta"), Some(&2));
        assert_eq!(map.get("gamma"), None);
    }

    #[rstest]
    fn test_unified_set_deduplicates() {
        let mut set: UnifiedSet<i32> = new_unified_set(0);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }
}
