//! Comparator-ordered multiset.

use std::cmp::Ordering;
use std::fmt;
use std::slice;

use crate::comparator::Comparator;
use crate::iteration::{OrderedIterable, RichIterable, Sink};

/// A multiset kept in comparator order.
///
/// Equal elements (under the comparator) are stored side by side in the
/// order they were added.
#[derive(Clone)]
pub struct TreeSortedBag<T> {
    elements: Vec<T>,
    comparator: Comparator<T>,
}

impl<T: Ord> TreeSortedBag<T> {
    /// Creates an empty bag in natural order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord> Default for TreeSortedBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeSortedBag<T> {
    /// Creates an empty bag ordered by `comparator`.
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

    /// An empty bag with the same comparator.
    #[must_use]
    pub fn new_empty(&self) -> Self {
        Self::with_comparator(self.comparator.clone())
    }

    /// Index range of the elements equal to `element`.
    fn equal_range(&self, element: &T) -> (usize, usize) {
        let start = self
            .elements
            .partition_point(|probe| self.comparator.compare(probe, element) == Ordering::Less);
        let end = self
            .elements
            .partition_point(|probe| self.comparator.compare(probe, element) != Ordering::Greater);
        (start, end)
    }

    /// Adds one occurrence of `element` after any equal elements.
    pub fn add(&mut self, element: T) {
        let (_, end) = self.equal_range(&element);
        self.elements.insert(end, element);
    }

    /// Removes one occurrence of `element`; returns `true` if one was present.
    pub fn remove(&mut self, element: &T) -> bool {
        let (start, end) = self.equal_range(element);
        if start == end {
            return false;
        }
        self.elements.remove(start);
        true
    }

    /// Number of occurrences of `element`.
    pub fn occurrences_of(&self, element: &T) -> usize {
        let (start, end) = self.equal_range(element);
        end - start
    }

    /// Number of distinct elements.
    pub fn size_distinct(&self) -> usize {
        self.elements
            .chunk_by(|left, right| self.comparator.compare(left, right) == Ordering::Equal)
            .count()
    }

    /// Total number of occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over every occurrence in comparator order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The occurrences in comparator order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T> Sink<T> for TreeSortedBag<T> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.add(element);
    }
}

impl<T: Ord> FromIterator<T> for TreeSortedBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.accept_all(iter);
        bag
    }
}

impl<T> RichIterable for TreeSortedBag<T> {
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
}

impl<T> OrderedIterable for TreeSortedBag<T> {}

impl<T: PartialEq> PartialEq for TreeSortedBag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeSortedBag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for TreeSortedBag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(formatter, "[", ", ", "]")
    }
}
