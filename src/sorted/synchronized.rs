//! Lock-guarded sorted map handles.
//!
//! [`SynchronizedSortedMap`] owns a [`TreeSortedMap`] behind a single
//! `parking_lot::Mutex`. Each method takes the lock for the duration of that
//! one call, so a single call is atomic but two calls in a row are not. Use
//! [`with_lock_mut`](SynchronizedSortedMap::with_lock_mut) to run several
//! steps under one acquisition.
//!
//! Clones of a handle share the same map; a write through any clone is seen
//! by every other clone and by every [`ReadOnlySynchronizedSortedMap`]
//! derived from it.
//!
//! # Examples
//!
//! ```rust
//! use std::thread;
//! use rich_collections::sorted::TreeSortedMap;
//!
//! let shared = TreeSortedMap::<i32, i32>::new().as_synchronized();
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let shared = shared.clone();
//!         thread::spawn(move || {
//!             for key in 0..10 {
//!                 shared.put(worker * 10 + key, key);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(shared.len(), 40);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::immutable::ImmutableSortedMap;
use super::tree_sorted_map::TreeSortedMap;

/// A shareable handle to a sorted map guarded by one lock.
pub struct SynchronizedSortedMap<K, V> {
    inner: Arc<Mutex<TreeSortedMap<K, V>>>,
}

impl<K, V> Clone for SynchronizedSortedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SynchronizedSortedMap<K, V> {
    /// Moves `map` behind a new lock.
    pub fn new(map: TreeSortedMap<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(map)),
        }
    }

    /// Associates `value` with `key`, returning the value it replaces.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    /// Removes `key`, returning its value.
    pub fn remove_key(&self, key: &K) -> Option<V> {
        self.inner.lock().remove_key(key)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Returns `true` if `key` is bound.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.lock().contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `function` against the map while holding the lock.
    ///
    /// The lock is not reentrant: calling another method of this handle from
    /// inside `function` deadlocks.
    pub fn with_lock<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&TreeSortedMap<K, V>) -> R,
    {
        function(&self.inner.lock())
    }

    /// Runs `function` against the map mutably while holding the lock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rich_collections::sorted::TreeSortedMap;
    ///
    /// let shared = TreeSortedMap::<&str, u32>::new().as_synchronized();
    /// shared.with_lock_mut(|map| *map.get_if_absent_put("hits", || 0) += 1);
    /// shared.with_lock_mut(|map| *map.get_if_absent_put("hits", || 0) += 1);
    /// assert_eq!(shared.get(&"hits"), Some(2));
    /// ```
    pub fn with_lock_mut<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&mut TreeSortedMap<K, V>) -> R,
    {
        function(&mut self.inner.lock())
    }

    /// A read-only handle on the same map.
    #[must_use]
    pub fn as_unmodifiable(&self) -> ReadOnlySynchronizedSortedMap<K, V> {
        tracing::trace!("read-only synchronized sorted map handle created");
        ReadOnlySynchronizedSortedMap {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Takes the map back out if this is the last handle to it.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged while other handles are alive.
    pub fn try_into_inner(self) -> Result<TreeSortedMap<K, V>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<K, V: Clone> SynchronizedSortedMap<K, V> {
    /// A copy of the value bound to `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }
}

impl<K: Clone, V: Clone> SynchronizedSortedMap<K, V> {
    /// A new unsynchronized map of the entries satisfying `predicate`.
    pub fn select_entries<P>(&self, predicate: P) -> TreeSortedMap<K, V>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.inner.lock().select_entries(predicate)
    }

    /// A snapshot of the map as it is at the moment of the call.
    #[must_use]
    pub fn to_immutable(&self) -> ImmutableSortedMap<K, V> {
        self.inner.lock().to_immutable()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SynchronizedSortedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("SynchronizedSortedMap")
            .field(&*self.inner.lock())
            .finish()
    }
}

/// A read-only handle on a [`SynchronizedSortedMap`].
///
/// It reflects every write made through the writable handles and offers no
/// way to write itself.
pub struct ReadOnlySynchronizedSortedMap<K, V> {
    inner: Arc<Mutex<TreeSortedMap<K, V>>>,
}

impl<K, V> Clone for ReadOnlySynchronizedSortedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> ReadOnlySynchronizedSortedMap<K, V> {
    /// Returns `true` if `key` is bound.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.lock().contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `function` against the map while holding the lock.
    pub fn with_lock<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&TreeSortedMap<K, V>) -> R,
    {
        function(&self.inner.lock())
    }
}

impl<K, V: Clone> ReadOnlySynchronizedSortedMap<K, V> {
    /// A copy of the value bound to `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }
}

impl<K: Clone, V: Clone> ReadOnlySynchronizedSortedMap<K, V> {
    /// A snapshot of the map as it is now.
    #[must_use]
    pub fn to_immutable(&self) -> ImmutableSortedMap<K, V> {
        self.inner.lock().to_immutable()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ReadOnlySynchronizedSortedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ReadOnlySynchronizedSortedMap")
            .field(&*self.inner.lock())
            .finish()
    }
}
