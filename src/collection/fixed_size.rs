//! Array-backed list whose length never changes.

use std::fmt;
use std::slice;

use crate::comparator::Comparator;
use crate::error::{CollectionError, CollectionResult};
use crate::iteration::{OrderedIterable, RichIterable};

use super::mutable::MutableCollection;

const CONTAINER: &str = "FixedSizeList";

/// A list whose elements can be replaced and reordered but never added or
/// removed.
///
/// `FixedSizeList` has no inherent add or remove methods at all. The
/// `with`/`without` family returns a new growable `Vec` instead, and the
/// uniform [`MutableCollection`] interface reports every call as
/// [`CollectionError::NotSupported`].
///
/// # Examples
///
/// ```rust
/// use rich_collections::collection::FixedSizeList;
///
/// let mut list = FixedSizeList::from(vec![3, 1, 2]);
/// list.sort_this();
/// assert_eq!(list.as_slice(), &[1, 2, 3]);
///
/// assert_eq!(list.set(0, 9).unwrap(), 1);
/// assert_eq!(list.with(4), vec![9, 2, 3, 4]);
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedSizeList<T> {
    elements: Box<[T]>,
}

impl<T> FixedSizeList<T> {
    /// An empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: Box::default(),
        }
    }

    /// A list holding `elements`.
    #[must_use]
    pub fn of<const N: usize>(elements: [T; N]) -> Self {
        Self {
            elements: Box::new(elements),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> CollectionResult<T> {
        let length = self.elements.len();
        let slot = self.elements.get_mut(index).ok_or_else(|| {
            CollectionError::invalid_argument(
                "set",
                format!("index {index} is out of bounds for size {length}"),
            )
        })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Sorts in place by natural order; equal elements keep their order.
    pub fn sort_this(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.elements.sort();
        self
    }

    /// Sorts in place by `comparator`.
    pub fn sort_this_with(&mut self, comparator: &Comparator<T>) -> &mut Self {
        self.elements
            .sort_by(|left, right| comparator.compare(left, right));
        self
    }

    /// Sorts in place by a derived key.
    pub fn sort_this_by<U, F>(&mut self, key_function: F) -> &mut Self
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        self.elements.sort_by_key(key_function);
        self
    }

    /// Reverses in place.
    pub fn reverse_this(&mut self) -> &mut Self {
        self.elements.reverse();
        self
    }

    /// Iterates in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The elements in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Clone> FixedSizeList<T> {
    /// A new growable list of these elements followed by `element`.
    #[must_use]
    pub fn with(&self, element: T) -> Vec<T> {
        let mut grown = Vec::with_capacity(self.elements.len() + 1);
        grown.extend_from_slice(&self.elements);
        grown.push(element);
        grown
    }

    /// A new growable list of these elements followed by `elements`.
    pub fn with_all<I>(&self, elements: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut grown = self.elements.to_vec();
        grown.extend(elements);
        grown
    }

    /// A new growable list without the first element equal to `element`.
    #[must_use]
    pub fn without(&self, element: &T) -> Vec<T>
    where
        T: PartialEq,
    {
        let mut shrunk = self.elements.to_vec();
        if let Some(position) = shrunk.iter().position(|candidate| candidate == element) {
            shrunk.remove(position);
        }
        shrunk
    }

    /// A new growable list without any element equal to one of `elements`.
    pub fn without_all<'v, I>(&self, elements: I) -> Vec<T>
    where
        I: IntoIterator<Item = &'v T>,
        T: PartialEq + 'v,
    {
        let doomed: Vec<&T> = elements.into_iter().collect();
        self.elements
            .iter()
            .filter(|element| !doomed.contains(element))
            .cloned()
            .collect()
    }
}

impl<T> From<Vec<T>> for FixedSizeList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for FixedSizeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a FixedSizeList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> RichIterable for FixedSizeList<T> {
    type Element = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type Selected = Vec<T>;
    type Collected<U> = Vec<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        Vec::new()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn get_last(&self) -> Option<&T> {
        self.elements.last()
    }
}

impl<T> OrderedIterable for FixedSizeList<T> {
    fn index_of(&self, value: &T) -> CollectionResult<Option<usize>>
    where
        T: PartialEq,
    {
        Ok(self.elements.iter().position(|element| element == value))
    }

    fn detect_last_index<P>(&self, mut predicate: P) -> CollectionResult<Option<usize>>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.elements.iter().rposition(|element| predicate(element)))
    }

    fn as_reversed(&self) -> CollectionResult<Box<dyn Iterator<Item = &T> + '_>> {
        Ok(Box::new(self.elements.iter().rev()))
    }
}

impl<T> MutableCollection for FixedSizeList<T> {
    fn try_add(&mut self, _element: T) -> CollectionResult<bool> {
        Err(CollectionError::not_supported(CONTAINER, "add"))
    }

    fn try_remove(&mut self, _element: &T) -> CollectionResult<bool> {
        Err(CollectionError::not_supported(CONTAINER, "remove"))
    }

    fn try_remove_if<P>(&mut self, _predicate: P) -> CollectionResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Err(CollectionError::not_supported(CONTAINER, "remove_if"))
    }

    fn try_clear(&mut self) -> CollectionResult<()> {
        Err(CollectionError::not_supported(CONTAINER, "clear"))
    }

    fn try_add_all<I>(&mut self, _elements: I) -> CollectionResult<bool>
    where
        I: IntoIterator<Item = T>,
    {
        Err(CollectionError::not_supported(CONTAINER, "add_all"))
    }

    fn try_remove_all<'v, I>(&mut self, _elements: I) -> CollectionResult<bool>
    where
        I: IntoIterator<Item = &'v T>,
        T: PartialEq + 'v,
    {
        Err(CollectionError::not_supported(CONTAINER, "remove_all"))
    }

    fn try_retain_all<'v, I>(&mut self, _elements: I) -> CollectionResult<bool>
    where
        I: IntoIterator<Item = &'v T>,
        T: PartialEq + 'v,
    {
        Err(CollectionError::not_supported(CONTAINER, "retain_all"))
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedSizeList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FixedSizeList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(formatter, "[", ", ", "]")
    }
}
