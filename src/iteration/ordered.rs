//! Positional operations for sources with a meaningful iteration index.

use super::rich_iterable::RichIterable;
use crate::collection::ArrayStack;
use crate::error::{CollectionError, CollectionResult};

/// Walks `from..=to` (backwards when `from > to`), naming `operation` in
/// the bounds error.
fn walk_range<S, P>(
    source: &S,
    from: usize,
    to: usize,
    operation: &'static str,
    mut procedure: P,
) -> CollectionResult<()>
where
    S: RichIterable + ?Sized,
    P: FnMut(&S::Element, usize),
{
    let size = source.size();
    if from >= size || to >= size {
        return Err(CollectionError::invalid_argument(
            operation,
            format!("range {from}..={to} is out of bounds for size {size}"),
        ));
    }
    let window: Vec<(usize, &S::Element)> = source
        .elements()
        .enumerate()
        .skip(from.min(to))
        .take(from.abs_diff(to) + 1)
        .collect();
    if from <= to {
        window
            .into_iter()
            .for_each(|(index, element)| procedure(element, index));
    } else {
        window
            .into_iter()
            .rev()
            .for_each(|(index, element)| procedure(element, index));
    }
    Ok(())
}

/// Positional operations over a source's iteration order.
///
/// Every method has a default built on [`RichIterable::elements`], so
/// sequences implement this trait with an empty `impl` block. Containers
/// whose shape cannot honour positional access override the methods to
/// return [`CollectionError::NotSupported`].
///
/// Ranges are inclusive on both ends. A range whose `from` is greater than
/// its `to` is walked backwards.
///
/// # Examples
///
/// ```rust
/// use rich_collections::iteration::OrderedIterable;
///
/// let letters = vec!['a', 'b', 'c', 'b'];
/// assert_eq!(letters.index_of(&'b'), Ok(Some(1)));
/// assert_eq!(letters.detect_last_index(|letter| *letter == 'b'), Ok(Some(3)));
///
/// let mut visited = Vec::new();
/// letters.for_each_in_range(2, 0, |letter| visited.push(*letter)).unwrap();
/// assert_eq!(visited, vec!['c', 'b', 'a']);
/// ```
pub trait OrderedIterable: RichIterable {
    /// Index of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NotSupported`] for containers without positions.
    fn index_of(&self, value: &Self::Element) -> CollectionResult<Option<usize>>
    where
        Self::Element: PartialEq,
    {
        Ok(self.elements().position(|element| element == value))
    }

    /// Index of the first element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NotSupported`] for containers without positions.
    fn detect_index<P>(&self, mut predicate: P) -> CollectionResult<Option<usize>>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        Ok(self.elements().position(|element| predicate(element)))
    }

    /// Index of the last element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NotSupported`] for containers without positions.
    fn detect_last_index<P>(&self, mut predicate: P) -> CollectionResult<Option<usize>>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        Ok(self
            .elements()
            .enumerate()
            .filter(|(_, element)| predicate(element))
            .map(|(index, _)| index)
            .last())
    }

    /// Runs `procedure` on the elements between `from` and `to`, inclusive.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if either bound is out of range,
    /// or [`CollectionError::NotSupported`] for containers without positions.
    fn for_each_in_range<P>(&self, from: usize, to: usize, mut procedure: P) -> CollectionResult<()>
    where
        P: FnMut(&Self::Element),
    {
        walk_range(self, from, to, "for_each_in_range", |element, _| procedure(element))
    }

    /// Runs `procedure` on the elements between `from` and `to`, inclusive,
    /// passing each element's index.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if either bound is out of range,
    /// or [`CollectionError::NotSupported`] for containers without positions.
    fn for_each_with_index_in_range<P>(&self, from: usize, to: usize, procedure: P) -> CollectionResult<()>
    where
        P: FnMut(&Self::Element, usize),
    {
        walk_range(self, from, to, "for_each_with_index_in_range", procedure)
    }

    /// Returns `true` if `other` has the same length and every pair of
    /// elements at the same position satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NotSupported`] for containers without positions.
    fn corresponds<U, P>(&self, other: &[U], mut predicate: P) -> CollectionResult<bool>
    where
        P: FnMut(&Self::Element, &U) -> bool,
    {
        if self.size() != other.len() {
            return Ok(false);
        }
        Ok(self
            .elements()
            .zip(other)
            .all(|(element, value)| predicate(element, value)))
    }

    /// A stack whose top is the last element in iteration order.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NotSupported`] for containers without positions.
    fn to_stack(&self) -> CollectionResult<ArrayStack<Self::Element>>
    where
        Self::Element: Clone,
    {
        Ok(self.elements().cloned().collect())
    }

    /// Iterates over the elements in reverse iteration order.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NotSupported`] for containers without positions.
    fn as_reversed(&self) -> CollectionResult<Box<dyn Iterator<Item = &Self::Element> + '_>> {
        let forward: Vec<&Self::Element> = self.elements().collect();
        Ok(Box::new(forward.into_iter().rev()))
    }
}
