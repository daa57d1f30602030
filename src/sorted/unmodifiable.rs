//! Read-only view of a sorted map.

use std::fmt;
use std::ops::Deref;

use crate::iteration::{OrderedIterable, RichIterable};

use super::tree_sorted_map::{TreeSortedMap, Values};

/// A read-only view borrowing a [`TreeSortedMap`].
///
/// The view copies nothing: every read goes to the backing map. While the
/// view is alive the borrow checker rules out mutation of the backing map,
/// and the view itself offers no mutating operation at all.
///
/// # Examples
///
/// ```rust
/// use rich_collections::iteration::RichIterable;
/// use rich_collections::sorted::TreeSortedMap;
///
/// let mut map = TreeSortedMap::new();
/// map.put("b", 2);
/// map.put("a", 1);
///
/// let view = map.as_unmodifiable();
/// assert_eq!(view.get(&"a"), Some(&1));
/// assert_eq!(view.inject_into(0, |sum, value| sum + value), 3);
/// ```
pub struct UnmodifiableSortedMap<'a, K, V> {
    backing: &'a TreeSortedMap<K, V>,
}

impl<K, V> Clone for UnmodifiableSortedMap<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for UnmodifiableSortedMap<'_, K, V> {}

impl<'a, K, V> UnmodifiableSortedMap<'a, K, V> {
    pub(crate) const fn new(backing: &'a TreeSortedMap<K, V>) -> Self {
        Self { backing }
    }

    /// The backing map, read-only.
    pub const fn backing(&self) -> &'a TreeSortedMap<K, V> {
        self.backing
    }
}

impl<K, V> Deref for UnmodifiableSortedMap<'_, K, V> {
    type Target = TreeSortedMap<K, V>;

    fn deref(&self) -> &Self::Target {
        self.backing
    }
}

impl<K, V> RichIterable for UnmodifiableSortedMap<'_, K, V> {
    type Element = V;
    type Iter<'b>
        = Values<'b, K, V>
    where
        Self: 'b;
    type Selected = Vec<V>;
    type Collected<U> = Vec<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.backing.values()
    }

    fn new_selected(&self) -> Self::Selected {
        Vec::new()
    }

    fn size(&self) -> usize {
        self.backing.len()
    }
}

impl<K, V> OrderedIterable for UnmodifiableSortedMap<'_, K, V> {
    positional_operations_unsupported!("UnmodifiableSortedMap");
}

impl<K: PartialEq, V: PartialEq> PartialEq for UnmodifiableSortedMap<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for UnmodifiableSortedMap<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.backing, formatter)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for UnmodifiableSortedMap<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.backing, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    fn test_view_reads_backing_map() {
        let map: TreeSortedMap<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
        let view = map.as_unmodifiable();
        assert_eq!(view.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(view.to_list(), vec!["one", "two"]);
        assert!(std::ptr::eq(view.backing(), &map));
    }

    #[rstest]
    fn test_new_view_reflects_later_puts() {
        let mut map: TreeSortedMap<i32, i32> = TreeSortedMap::new();
        map.put(1, 10);
        assert_eq!(map.as_unmodifiable().size(), 1);
        map.put(2, 20);
        assert_eq!(map.as_unmodifiable().size(), 2);
    }

    #[rstest]
    fn test_positional_operations_unsupported() {
        let map: TreeSortedMap<i32, i32> = [(1, 1)].into_iter().collect();
        let view = map.as_unmodifiable();
        let error = view.to_stack().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotSupported);
        assert_eq!(error.operation(), "to_stack");
        assert_eq!(
            view.index_of(&1).unwrap_err().to_string(),
            "UnmodifiableSortedMap::index_of is not supported"
        );
    }

    #[rstest]
    fn test_display_matches_backing() {
        let map: TreeSortedMap<i32, i32> = [(1, 1), (2, 4)].into_iter().collect();
        assert_eq!(map.as_unmodifiable().to_string(), map.to_string());
    }
}
