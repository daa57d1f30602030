//! Hash-based multiset.

use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use crate::hashing::{UnifiedMap, new_unified_map};
use crate::iteration::{RichIterable, Sink};

/// An unordered collection that counts occurrences of equal elements.
///
/// `HashBag` is the default target of `count_by` and `count_by_each`.
/// Iteration yields each distinct element once per occurrence; the order of
/// distinct elements is unspecified.
///
/// # Examples
///
/// ```rust
/// use rich_collections::collection::HashBag;
/// use rich_collections::iteration::RichIterable;
///
/// let words = vec!["apple", "avocado", "banana"];
/// let initials: HashBag<char> = words.count_by(|word| word.chars().next().unwrap_or(' '));
///
/// assert_eq!(initials.occurrences_of(&'a'), 2);
/// assert_eq!(initials.occurrences_of(&'b'), 1);
/// assert_eq!(initials.size_distinct(), 2);
/// assert_eq!(initials.size(), 3);
/// ```
#[derive(Clone)]
pub struct HashBag<T> {
    counts: UnifiedMap<T, usize>,
    size: usize,
}

impl<T> Default for HashBag<T> {
    fn default() -> Self {
        Self {
            counts: UnifiedMap::default(),
            size: 0,
        }
    }
}

impl<T: Hash + Eq> HashBag<T> {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bag with room for `capacity` distinct elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: new_unified_map(capacity),
            size: 0,
        }
    }

    /// Adds one occurrence of `element`.
    pub fn add(&mut self, element: T) {
        self.add_occurrences(element, 1);
    }

    /// Adds `occurrences` occurrences of `element`. Adding zero is a no-op.
    pub fn add_occurrences(&mut self, element: T, occurrences: usize) {
        if occurrences == 0 {
            return;
        }
        *self.counts.entry(element).or_insert(0) += occurrences;
        self.size += occurrences;
    }

    /// Removes one occurrence of `element`; returns `true` if one was present.
    pub fn remove(&mut self, element: &T) -> bool {
        self.remove_occurrences(element, 1)
    }

    /// Removes up to `occurrences` occurrences of `element`.
    ///
    /// Returns `true` if anything was removed. The element disappears
    /// entirely once its count reaches zero.
    pub fn remove_occurrences(&mut self, element: &T, occurrences: usize) -> bool {
        let Some(count) = self.counts.get_mut(element) else {
            return false;
        };
        if occurrences == 0 {
            return false;
        }
        let removed = occurrences.min(*count);
        *count -= removed;
        if *count == 0 {
            self.counts.remove(element);
        }
        self.size -= removed;
        true
    }

    /// Number of occurrences of `element`; zero when absent.
    pub fn occurrences_of(&self, element: &T) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Returns `true` if at least one occurrence of `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        self.counts.contains_key(element)
    }
}

impl<T> HashBag<T> {
    /// Total number of occurrences.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the bag holds no occurrences.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of distinct elements.
    #[must_use]
    pub fn size_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Runs `procedure` once per distinct element with its count.
    pub fn for_each_with_occurrences<P>(&self, mut procedure: P)
    where
        P: FnMut(&T, usize),
    {
        for (element, count) in &self.counts {
            procedure(element, *count);
        }
    }

    /// Iterates over every occurrence.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            entries: self.counts.iter(),
            current: None,
        }
    }
}

/// Iterator over the occurrences of a [`HashBag`].
pub struct Iter<'a, T> {
    entries: hash_map::Iter<'a, T, usize>,
    current: Option<(&'a T, usize)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.current {
                Some((element, remaining)) if *remaining > 0 => {
                    *remaining -= 1;
                    return Some(*element);
                }
                _ => {
                    let (element, count) = self.entries.next()?;
                    self.current = Some((element, *count));
                }
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a HashBag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> Sink<T> for HashBag<T> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.add(element);
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T: Hash + Eq> Extend<T> for HashBag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Hash + Eq> RichIterable for HashBag<T> {
    type Element = T;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;
    type Selected = Self;
    type Collected<U> = HashBag<U>;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        Self::new()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn contains(&self, value: &T) -> bool {
        Self::contains(self, value)
    }
}

impl<T: Hash + Eq> PartialEq for HashBag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.counts == other.counts
    }
}

impl<T: Hash + Eq> Eq for HashBag<T> {}

impl<T: fmt::Debug> fmt::Debug for HashBag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.counts.iter()).finish()
    }
}

impl<T: Hash + Eq + fmt::Display> fmt::Display for HashBag<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(formatter, "[", ", ", "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_add_and_remove_occurrences() {
        let mut bag = HashBag::new();
        bag.add_occurrences("a", 3);
        bag.add("b");
        assert_eq!(bag.len(), 4);

        assert!(bag.remove_occurrences(&"a", 2));
        assert_eq!(bag.occurrences_of(&"a"), 1);
        assert!(bag.remove_occurrences(&"a", 5));
        assert!(!bag.contains(&"a"));
        assert_eq!(bag.len(), 1);
        assert!(!bag.remove(&"z"));
    }

    #[rstest]
    fn test_iteration_yields_every_occurrence() {
        let bag: HashBag<i32> = vec![1, 1, 2].into_iter().collect();
        let mut occurrences: Vec<i32> = bag.iter().copied().collect();
        occurrences.sort_unstable();
        assert_eq!(occurrences, vec![1, 1, 2]);
    }

    #[rstest]
    fn test_equality_ignores_insertion_order() {
        let left: HashBag<i32> = vec![1, 2, 1].into_iter().collect();
        let right: HashBag<i32> = vec![2, 1, 1].into_iter().collect();
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_select_keeps_counts() {
        let bag: HashBag<i32> = vec![1, 1, 2, 3, 3, 3].into_iter().collect();
        let odd = bag.select(|value| value % 2 == 1);
        assert_eq!(odd.occurrences_of(&1), 2);
        assert_eq!(odd.occurrences_of(&3), 3);
        assert_eq!(odd.occurrences_of(&2), 0);
    }
}
