//! Comparator-ordered set over a sorted vector.

use std::cmp::Ordering;
use std::fmt;
use std::slice;

use crate::comparator::Comparator;
use crate::iteration::{OrderedIterable, RichIterable, Sink};

/// A set of unique elements kept in comparator order.
///
/// Two elements are the same element when the comparator reports them
/// [`Ordering::Equal`]; the first one added is kept. Lookups use binary
/// search, insertions and removals shift the tail of the backing vector.
///
/// Selections (`select`, `reject`, `partition`, `chunk`) keep the
/// comparator; transformations produce a `Vec`, since transformed elements
/// have no order of their own.
///
/// # Examples
///
/// ```rust
/// use rich_collections::collection::TreeSortedSet;
/// use rich_collections::comparator::Comparator;
/// use rich_collections::iteration::RichIterable;
///
/// let mut descending = TreeSortedSet::with_comparator(Comparator::<i32>::natural().reversed());
/// descending.add(1);
/// descending.add(3);
/// descending.add(2);
/// assert!(!descending.add(3));
///
/// let odd = descending.select(|value| value % 2 == 1);
/// assert_eq!(odd.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
/// ```
#[derive(Clone)]
pub struct TreeSortedSet<T> {
    elements: Vec<T>,
    comparator: Comparator<T>,
}

impl<T: Ord> TreeSortedSet<T> {
    /// Creates an empty set in natural order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord> Default for TreeSortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeSortedSet<T> {
    /// Creates an empty set ordered by `comparator`.
    #[must_use]
    pub const fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
        }
    }

    /// The comparator fixed at construction.
    pub const fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// An empty set with the same comparator.
    #[must_use]
    pub fn new_empty(&self) -> Self {
        Self::with_comparator(self.comparator.clone())
    }

    fn search(&self, element: &T) -> Result<usize, usize> {
        self.elements
            .binary_search_by(|probe| self.comparator.compare(probe, element))
    }

    /// Adds `element`; returns `false` if an equal element was already present.
    pub fn add(&mut self, element: T) -> bool {
        match self.search(&element) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, element);
                debug_assert!(self.is_strictly_sorted());
                true
            }
        }
    }

    /// Removes the element equal to `element`; returns `true` if it was present.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.search(element) {
            Ok(position) => {
                self.elements.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every element satisfying `predicate`; returns `true` if any was removed.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(|element| !predicate(element));
        self.elements.len() != before
    }

    /// Returns `true` if an element equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_ok()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The first element in comparator order.
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// The last element in comparator order.
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Iterates in comparator order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The elements in comparator order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn is_strictly_sorted(&self) -> bool {
        self.elements
            .windows(2)
            .all(|pair| self.comparator.compare(&pair[0], &pair[1]) == Ordering::Less)
    }
}

impl<T> Sink<T> for TreeSortedSet<T> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.add(element);
    }
}

impl<T: Ord> FromIterator<T> for TreeSortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for TreeSortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a TreeSortedSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> RichIterable for TreeSortedSet<T> {
    type Element = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type Selected = Self;
    type Collected<U> = Vec<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        self.new_empty()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn get_last(&self) -> Option<&T> {
        self.elements.last()
    }
}

impl<T> OrderedIterable for TreeSortedSet<T> {}

impl<T: PartialEq> PartialEq for TreeSortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for TreeSortedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for TreeSortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for TreeSortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(formatter, "[", ", ", "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_natural_order_and_uniqueness() {
        let set: TreeSortedSet<i32> = vec![5, 1, 3, 1, 5].into_iter().collect();
        assert_eq!(set.as_slice(), &[1, 3, 5]);
        assert_eq!(set.to_string(), "[1, 3, 5]");
    }

    #[rstest]
    fn test_comparator_defines_equality() {
        let mut by_length = TreeSortedSet::with_comparator(Comparator::by(|text: &&str| text.len()));
        assert!(by_length.add("one"));
        assert!(!by_length.add("two"));
        assert!(by_length.add("three"));
        assert_eq!(by_length.as_slice(), &["one", "three"]);
    }

    #[rstest]
    fn test_partition_keeps_comparator() {
        let set = TreeSortedSet::with_comparator(Comparator::<i32>::natural().reversed());
        let mut set = set;
        set.extend([1, 2, 3, 4]);
        let partition = set.partition(|value| value % 2 == 0);
        assert_eq!(partition.selected().as_slice(), &[4, 2]);
        assert_eq!(partition.rejected().as_slice(), &[3, 1]);
    }

    #[rstest]
    fn test_remove() {
        let mut set: TreeSortedSet<i32> = (1..=3).collect();
        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert_eq!(set.as_slice(), &[1, 3]);
    }
}
