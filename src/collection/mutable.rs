//! Uniform, fallible mutation across container shapes.
//!
//! Growable containers implement [`MutableCollection`] by delegating to
//! their own methods and always succeed. Shapes that cannot grow or shrink
//! (see [`FixedSizeList`](super::FixedSizeList)) implement it by failing with
//! [`CollectionError::NotSupported`](crate::error::CollectionError::NotSupported)
//! so that generic code can still call through one interface.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::collection::TreeSortedSet;
use crate::error::CollectionResult;
use crate::iteration::RichIterable;

/// Add/remove operations that report unsupported shapes as errors.
///
/// The `bool` results report whether the container changed.
///
/// # Examples
///
/// ```rust
/// use rich_collections::collection::{FixedSizeList, MutableCollection};
/// use rich_collections::error::ErrorKind;
///
/// fn append_zero<C: MutableCollection<Element = i32>>(container: &mut C) -> Option<ErrorKind> {
///     container.try_add(0).err().map(|error| error.kind())
/// }
///
/// let mut growable = vec![1, 2];
/// assert_eq!(append_zero(&mut growable), None);
/// assert_eq!(growable, vec![1, 2, 0]);
///
/// let mut fixed = FixedSizeList::from(vec![1, 2]);
/// assert_eq!(append_zero(&mut fixed), Some(ErrorKind::NotSupported));
/// ```
pub trait MutableCollection: RichIterable {
    /// Adds one element.
    ///
    /// # Errors
    ///
    /// `NotSupported` for fixed-size shapes.
    fn try_add(&mut self, element: Self::Element) -> CollectionResult<bool>;

    /// Removes one element equal to `element`.
    ///
    /// # Errors
    ///
    /// `NotSupported` for fixed-size shapes.
    fn try_remove(&mut self, element: &Self::Element) -> CollectionResult<bool>;

    /// Removes every element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// `NotSupported` for fixed-size shapes.
    fn try_remove_if<P>(&mut self, predicate: P) -> CollectionResult<bool>
    where
        P: FnMut(&Self::Element) -> bool;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// `NotSupported` for fixed-size shapes.
    fn try_clear(&mut self) -> CollectionResult<()>;

    /// Adds every element of `elements`.
    ///
    /// # Errors
    ///
    /// `NotSupported` for fixed-size shapes.
    fn try_add_all<I>(&mut self, elements: I) -> CollectionResult<bool>
    where
        I: IntoIterator<Item = Self::Element>,
    {
        elements
            .into_iter()
            .try_fold(false, |changed, element| Ok(self.try_add(element)? || changed))
    }

    /// Removes every element equal to any of `elements`.
    ///
    /// # Errors
    ///
    /// `NotSupported` for fixed-size shapes.
    fn try_remove_all<'v, I>(&mut self, elements: I) -> CollectionResult<bool>
    where
        I: IntoIterator<Item = &'v Self::Element>,
        Self::Element: PartialEq + 'v,
    {
        let doomed: Vec<&Self::Element> = elements.into_iter().collect();
        self.try_remove_if(|element| doomed.contains(&element))
    }

    /// Keeps only the elements equal to one of `elements`.
    ///
    /// # Errors
    ///
    /// `NotSupported` for fixed-size shapes.
    fn try_retain_all<'v, I>(&mut self, elements: I) -> CollectionResult<bool>
    where
        I: IntoIterator<Item = &'v Self::Element>,
        Self::Element: PartialEq + 'v,
    {
        let kept: Vec<&Self::Element> = elements.into_iter().collect();
        self.try_remove_if(|element| !kept.contains(&element))
    }
}

impl<T: PartialEq> MutableCollection for Vec<T> {
    fn try_add(&mut self, element: T) -> CollectionResult<bool> {
        self.push(element);
        Ok(true)
    }

    fn try_remove(&mut self, element: &T) -> CollectionResult<bool> {
        Ok(match self.iter().position(|candidate| candidate == element) {
            Some(position) => {
                self.remove(position);
                true
            }
            None => false,
        })
    }

    fn try_remove_if<P>(&mut self, mut predicate: P) -> CollectionResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.len();
        self.retain(|element| !predicate(element));
        Ok(self.len() != before)
    }

    fn try_clear(&mut self) -> CollectionResult<()> {
        self.clear();
        Ok(())
    }
}

impl<T, S> MutableCollection for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Clone,
{
    fn try_add(&mut self, element: T) -> CollectionResult<bool> {
        Ok(self.insert(element))
    }

    fn try_remove(&mut self, element: &T) -> CollectionResult<bool> {
        Ok(self.remove(element))
    }

    fn try_remove_if<P>(&mut self, mut predicate: P) -> CollectionResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.len();
        self.retain(|element| !predicate(element));
        Ok(self.len() != before)
    }

    fn try_clear(&mut self) -> CollectionResult<()> {
        self.clear();
        Ok(())
    }
}

impl<T> MutableCollection for TreeSortedSet<T> {
    fn try_add(&mut self, element: T) -> CollectionResult<bool> {
        Ok(self.add(element))
    }

    fn try_remove(&mut self, element: &T) -> CollectionResult<bool> {
        Ok(self.remove(element))
    }

    fn try_remove_if<P>(&mut self, predicate: P) -> CollectionResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        Ok(self.remove_if(predicate))
    }

    fn try_clear(&mut self) -> CollectionResult<()> {
        self.clear();
        Ok(())
    }
}
