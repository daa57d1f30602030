//! Null-checked ordering operations over sources of `Option<T>`.
//!
//! `None` elements play the role of absent values. Natural-order
//! operations cannot place them, so the checked variants here fail with
//! [`CollectionError::NullElement`] as soon as one is found. To order a
//! source that may hold `None`, pass a null-safe comparator built with
//! [`Comparator::nulls_low`] or [`Comparator::nulls_high`] to the
//! comparator-taking operations of [`RichIterable`] instead.
//!
//! [`Comparator::nulls_low`]: crate::comparator::Comparator::nulls_low
//! [`Comparator::nulls_high`]: crate::comparator::Comparator::nulls_high
//!
//! # Examples
//!
//! ```rust
//! use rich_collections::comparator::Comparator;
//! use rich_collections::error::ErrorKind;
//! use rich_collections::iteration::{NullCheckedIterable, RichIterable};
//!
//! let values = vec![Some(3), None, Some(1)];
//! assert_eq!(values.checked_max().unwrap_err().kind(), ErrorKind::NullElement);
//!
//! let sorted = values.to_sorted_list_with(&Comparator::nulls_low(Comparator::natural()));
//! assert_eq!(sorted, vec![None, Some(1), Some(3)]);
//! ```

use std::cmp::Ordering;

use super::rich_iterable::{RichIterable, first_extreme};
use crate::collection::{TreeSortedBag, TreeSortedSet};
use crate::error::{CollectionError, CollectionResult};
use crate::sorted::TreeSortedMap;

/// Present values of `elements`, failing on the first `None`.
fn present<'a, T: 'a>(
    elements: impl Iterator<Item = &'a Option<T>>,
    operation: &'static str,
) -> CollectionResult<Vec<&'a T>> {
    elements
        .map(|element| {
            element
                .as_ref()
                .ok_or_else(|| CollectionError::null_element(operation))
        })
        .collect()
}

fn first_extreme_present<'a, T, U, F>(
    values: Vec<&'a T>,
    mut key_function: F,
    wanted: Ordering,
    operation: &'static str,
) -> CollectionResult<&'a T>
where
    U: Ord,
    F: FnMut(&T) -> U,
{
    let mut best: Option<(&'a T, U)> = None;
    for candidate in values {
        let candidate_key = key_function(candidate);
        best = match best {
            Some((current, current_key)) if candidate_key.cmp(&current_key) != wanted => {
                Some((current, current_key))
            }
            _ => Some((candidate, candidate_key)),
        };
    }
    best.map(|(element, _)| element)
        .ok_or_else(|| CollectionError::empty_source(operation))
}

/// Natural-order operations that reject `None` elements.
///
/// Blanket-implemented for every [`RichIterable`] of `Option<T>`.
pub trait NullCheckedIterable<T>: RichIterable<Element = Option<T>> {
    /// The smallest present value; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NullElement`] if any element is `None`, otherwise
    /// [`CollectionError::EmptySource`] on an empty source.
    fn checked_min(&self) -> CollectionResult<&T>
    where
        T: Ord,
    {
        let values = present(self.elements(), "checked_min")?;
        first_extreme(values.into_iter(), Ord::cmp, Ordering::Less)
            .ok_or_else(|| CollectionError::empty_source("checked_min"))
    }

    /// The largest present value; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NullElement`] if any element is `None`, otherwise
    /// [`CollectionError::EmptySource`] on an empty source.
    fn checked_max(&self) -> CollectionResult<&T>
    where
        T: Ord,
    {
        let values = present(self.elements(), "checked_max")?;
        first_extreme(values.into_iter(), Ord::cmp, Ordering::Greater)
            .ok_or_else(|| CollectionError::empty_source("checked_max"))
    }

    /// The present value with the smallest derived key.
    ///
    /// # Errors
    ///
    /// Same as [`checked_min`](Self::checked_min).
    fn checked_min_by<U, F>(&self, key_function: F) -> CollectionResult<&T>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        let values = present(self.elements(), "checked_min_by")?;
        first_extreme_present(values, key_function, Ordering::Less, "checked_min_by")
    }

    /// The present value with the largest derived key.
    ///
    /// # Errors
    ///
    /// Same as [`checked_max`](Self::checked_max).
    fn checked_max_by<U, F>(&self, key_function: F) -> CollectionResult<&T>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        let values = present(self.elements(), "checked_max_by")?;
        first_extreme_present(values, key_function, Ordering::Greater, "checked_max_by")
    }

    /// The present values sorted by natural order.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NullElement`] if any element is `None`.
    fn checked_to_sorted_list(&self) -> CollectionResult<Vec<T>>
    where
        T: Ord + Clone,
    {
        let mut sorted: Vec<T> = present(self.elements(), "checked_to_sorted_list")?
            .into_iter()
            .cloned()
            .collect();
        sorted.sort();
        Ok(sorted)
    }

    /// The present values in a natural-order sorted set.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NullElement`] if any element is `None`.
    fn checked_to_sorted_set(&self) -> CollectionResult<TreeSortedSet<T>>
    where
        T: Ord + Clone,
    {
        Ok(present(self.elements(), "checked_to_sorted_set")?
            .into_iter()
            .cloned()
            .collect())
    }

    /// The present values in a natural-order sorted bag.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NullElement`] if any element is `None`.
    fn checked_to_sorted_bag(&self) -> CollectionResult<TreeSortedBag<T>>
    where
        T: Ord + Clone,
    {
        Ok(present(self.elements(), "checked_to_sorted_bag")?
            .into_iter()
            .cloned()
            .collect())
    }

    /// A natural-order sorted map keyed by `key_function`; later elements
    /// overwrite.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NullElement`] if a derived key is `None`. No map is
    /// returned in that case.
    fn checked_to_sorted_map<K, V, KF, VF>(
        &self,
        mut key_function: KF,
        mut value_function: VF,
    ) -> CollectionResult<TreeSortedMap<K, V>>
    where
        K: Ord,
        KF: FnMut(&Option<T>) -> Option<K>,
        VF: FnMut(&Option<T>) -> V,
    {
        let mut target = TreeSortedMap::new();
        for element in self.elements() {
            let key = key_function(element)
                .ok_or_else(|| CollectionError::null_element("checked_to_sorted_map"))?;
            target.put(key, value_function(element));
        }
        Ok(target)
    }
}

impl<T, R> NullCheckedIterable<T> for R where R: RichIterable<Element = Option<T>> + ?Sized {}
