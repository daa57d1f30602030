//! The eager iteration protocol shared by every container shape.
//!
//! [`RichIterable`] is defined once, over a borrowed iterator of elements,
//! and every container in this crate (plus `Vec`, `VecDeque`, `HashSet` and
//! `BTreeSet`) implements it by naming four things:
//!
//! - `Element`: the element type
//! - `Iter<'a>`: the borrowing iterator returned by `elements`
//! - `Selected`: the natural container for `select`/`reject`/`partition`,
//!   built by `new_selected` so that it inherits the source's ordering policy
//! - `Collected<U>`: the natural container for transformed elements
//!
//! All operations leave the source untouched and return new containers.
//! Each transformation also has an `_into` form that adds its results to a
//! caller-supplied [`Sink`] and returns that same reference.
//!
//! # Laws
//!
//! ## Select/reject complement
//!
//! ```text
//! source.select(p) ++ source.reject(p) == source   (as multisets)
//! ```
//!
//! ## Fold with seed
//!
//! ```text
//! empty.inject_into(seed, f) == seed
//! empty.reduce(f) == None
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rich_collections::iteration::RichIterable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(numbers.select(|value| value % 2 == 1), vec![1, 3, 5]);
//! assert_eq!(numbers.collect(|value| value * 10), vec![10, 20, 30, 40, 50]);
//! assert_eq!(numbers.max_element(), Ok(&5));
//! assert_eq!(numbers.min_element(), Ok(&1));
//! assert_eq!(numbers.inject_into(0, |sum, value| sum + value), 15);
//!
//! let chunks = numbers.chunk(2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::sync::Arc;

use super::partition::PartitionResult;
use super::sink::{MapSink, MultimapSink, Sink};
use super::statistics::{CompensatedSum, DoubleSummaryStatistics, IntegerSummaryStatistics};
use crate::collection::{HashBag, HashBiMap, ListMultimap, TreeSortedBag, TreeSortedSet};
use crate::comparator::Comparator;
use crate::error::{CollectionError, CollectionResult};
use crate::hashing::{UnifiedMap, UnifiedSet, new_unified_map, new_unified_set};
use crate::sorted::TreeSortedMap;

/// Returns the first element that is strictly better than every earlier one.
///
/// `wanted` is the ordering a candidate must have against the current best
/// to replace it, so ties always keep the first-encountered element.
pub(crate) fn first_extreme<'a, T, I, C>(elements: I, mut compare: C, wanted: Ordering) -> Option<&'a T>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    C: FnMut(&T, &T) -> Ordering,
{
    elements.fold(None, |best, candidate| match best {
        Some(current) if compare(candidate, current) != wanted => Some(current),
        _ => Some(candidate),
    })
}

fn first_extreme_by<'a, T, U, I, F>(elements: I, mut key_function: F, wanted: Ordering) -> Option<&'a T>
where
    T: 'a,
    U: Ord,
    I: Iterator<Item = &'a T>,
    F: FnMut(&T) -> U,
{
    elements
        .fold(None, |best: Option<(&'a T, U)>, candidate| {
            let candidate_key = key_function(candidate);
            match best {
                Some((current, current_key)) if candidate_key.cmp(&current_key) != wanted => {
                    Some((current, current_key))
                }
                _ => Some((candidate, candidate_key)),
            }
        })
        .map(|(element, _)| element)
}

/// The eager higher-order iteration protocol.
///
/// See the [module documentation](self) for an overview.
pub trait RichIterable {
    /// The element type.
    type Element;

    /// Borrowing iterator over the elements, in iteration order.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// The natural container for selections of this source.
    type Selected: Sink<Self::Element>;

    /// The natural container for transformed elements of this source.
    type Collected<U>;

    /// Iterates over the elements in iteration order.
    fn elements(&self) -> Self::Iter<'_>;

    /// Creates an empty container of the `Selected` type that follows this
    /// source's ordering policy (for example, the same comparator).
    fn new_selected(&self) -> Self::Selected;

    // =========================================================================
    // Size and membership
    // =========================================================================

    /// Number of elements.
    fn size(&self) -> usize {
        self.elements().count()
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.elements().next().is_none()
    }

    /// Returns `true` if there is at least one element.
    fn not_empty(&self) -> bool {
        !RichIterable::is_empty(self)
    }

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.elements().any(|element| element == value)
    }

    /// Returns `true` if some element's derived value equals `value`.
    fn contains_by<U, F>(&self, mut function: F, value: &U) -> bool
    where
        U: PartialEq,
        F: FnMut(&Self::Element) -> U,
    {
        self.elements().any(|element| function(element) == *value)
    }

    /// Returns `true` if every value in `values` is contained.
    fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Element>,
        Self::Element: PartialEq + 'v,
    {
        values
            .into_iter()
            .all(|value| RichIterable::contains(self, value))
    }

    /// Returns `true` if any value in `values` is contained.
    fn contains_any<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Element>,
        Self::Element: PartialEq + 'v,
    {
        values
            .into_iter()
            .any(|value| RichIterable::contains(self, value))
    }

    /// Returns `true` if no value in `values` is contained.
    fn contains_none<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Element>,
        Self::Element: PartialEq + 'v,
    {
        !self.contains_any(values)
    }

    // =========================================================================
    // Element access and traversal
    // =========================================================================

    /// The first element in iteration order.
    fn get_first(&self) -> Option<&Self::Element> {
        self.elements().next()
    }

    /// The last element in iteration order.
    fn get_last(&self) -> Option<&Self::Element> {
        self.elements().last()
    }

    /// Some element of the source.
    fn get_any(&self) -> Option<&Self::Element> {
        self.get_first()
    }

    /// The only element of the source.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IllegalState`] unless the source holds exactly one
    /// element.
    fn get_only(&self) -> CollectionResult<&Self::Element> {
        let mut elements = self.elements();
        match (elements.next(), elements.next()) {
            (Some(only), None) => Ok(only),
            (None, _) => Err(CollectionError::illegal_state(
                "get_only",
                "source is empty",
            )),
            (Some(_), Some(_)) => Err(CollectionError::illegal_state(
                "get_only",
                "source holds more than one element",
            )),
        }
    }

    /// Runs `procedure` on every element.
    fn for_each<P>(&self, procedure: P)
    where
        P: FnMut(&Self::Element),
    {
        self.elements().for_each(procedure);
    }

    /// Runs `procedure` on every element together with its iteration index.
    fn for_each_with_index<P>(&self, mut procedure: P)
    where
        P: FnMut(&Self::Element, usize),
    {
        for (index, element) in self.elements().enumerate() {
            procedure(element, index);
        }
    }

    /// Runs `procedure` on every element and returns the source itself.
    fn tap<P>(&self, procedure: P) -> &Self
    where
        P: FnMut(&Self::Element),
    {
        self.for_each(procedure);
        self
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Elements satisfying `predicate`, in iteration order.
    fn select<P>(&self, predicate: P) -> Self::Selected
    where
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        let mut target = self.new_selected();
        self.select_into(predicate, &mut target);
        target
    }

    /// Adds the elements satisfying `predicate` to `target`.
    fn select_into<'t, S, P>(&self, mut predicate: P, target: &'t mut S) -> &'t mut S
    where
        S: Sink<Self::Element> + ?Sized,
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        for element in self.elements() {
            if predicate(element) {
                target.accept(element.clone());
            }
        }
        target
    }

    /// Elements satisfying `predicate` applied with `parameter`.
    fn select_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> Self::Selected
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
        Self::Element: Clone,
    {
        self.select(|element| predicate(element, parameter))
    }

    /// Elements not satisfying `predicate`, in iteration order.
    fn reject<P>(&self, predicate: P) -> Self::Selected
    where
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        let mut target = self.new_selected();
        self.reject_into(predicate, &mut target);
        target
    }

    /// Adds the elements not satisfying `predicate` to `target`.
    fn reject_into<'t, S, P>(&self, mut predicate: P, target: &'t mut S) -> &'t mut S
    where
        S: Sink<Self::Element> + ?Sized,
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        self.select_into(|element| !predicate(element), target)
    }

    /// Elements not satisfying `predicate` applied with `parameter`.
    fn reject_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> Self::Selected
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
        Self::Element: Clone,
    {
        self.reject(|element| predicate(element, parameter))
    }

    /// Splits the source by `predicate` in a single pass.
    fn partition<P>(&self, mut predicate: P) -> PartitionResult<Self::Selected>
    where
        P: FnMut(&Self::Element) -> bool,
        Self::Element: Clone,
    {
        let mut result = PartitionResult::new(self.new_selected(), self.new_selected());
        let (selected, rejected) = result.halves_mut();
        for element in self.elements() {
            if predicate(element) {
                selected.accept(element.clone());
            } else {
                rejected.accept(element.clone());
            }
        }
        result
    }

    /// Splits the source by `predicate` applied with `parameter`.
    fn partition_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> PartitionResult<Self::Selected>
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
        Self::Element: Clone,
    {
        self.partition(|element| predicate(element, parameter))
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms every element.
    fn collect<U, F>(&self, function: F) -> Self::Collected<U>
    where
        F: FnMut(&Self::Element) -> U,
        Self::Collected<U>: Sink<U> + Default,
    {
        let mut target = Self::Collected::<U>::default();
        self.collect_into(function, &mut target);
        target
    }

    /// Adds every transformed element to `target`.
    fn collect_into<'t, U, S, F>(&self, function: F, target: &'t mut S) -> &'t mut S
    where
        S: Sink<U> + ?Sized,
        F: FnMut(&Self::Element) -> U,
    {
        self.elements().map(function).for_each(|value| target.accept(value));
        target
    }

    /// Transforms every element with `function` applied with `parameter`.
    fn collect_with<Q, U, F>(&self, mut function: F, parameter: &Q) -> Self::Collected<U>
    where
        Q: ?Sized,
        F: FnMut(&Self::Element, &Q) -> U,
        Self::Collected<U>: Sink<U> + Default,
    {
        self.collect(|element| function(element, parameter))
    }

    /// Transforms the elements satisfying `predicate`.
    fn collect_if<U, P, F>(&self, predicate: P, function: F) -> Self::Collected<U>
    where
        P: FnMut(&Self::Element) -> bool,
        F: FnMut(&Self::Element) -> U,
        Self::Collected<U>: Sink<U> + Default,
    {
        let mut target = Self::Collected::<U>::default();
        self.collect_if_into(predicate, function, &mut target);
        target
    }

    /// Adds the transformed elements satisfying `predicate` to `target`.
    fn collect_if_into<'t, U, S, P, F>(
        &self,
        mut predicate: P,
        mut function: F,
        target: &'t mut S,
    ) -> &'t mut S
    where
        S: Sink<U> + ?Sized,
        P: FnMut(&Self::Element) -> bool,
        F: FnMut(&Self::Element) -> U,
    {
        for element in self.elements() {
            if predicate(element) {
                target.accept(function(element));
            }
        }
        target
    }

    /// Transforms every element into a sub-sequence and concatenates them.
    fn flat_collect<U, I, F>(&self, function: F) -> Self::Collected<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&Self::Element) -> I,
        Self::Collected<U>: Sink<U> + Default,
    {
        let mut target = Self::Collected::<U>::default();
        self.flat_collect_into(function, &mut target);
        target
    }

    /// Adds every element of every produced sub-sequence to `target`.
    fn flat_collect_into<'t, U, I, S, F>(&self, mut function: F, target: &'t mut S) -> &'t mut S
    where
        I: IntoIterator<Item = U>,
        S: Sink<U> + ?Sized,
        F: FnMut(&Self::Element) -> I,
    {
        for element in self.elements() {
            for value in function(element) {
                target.accept(value);
            }
        }
        target
    }

    /// [`flat_collect`](Self::flat_collect) with a parameter.
    fn flat_collect_with<Q, U, I, F>(&self, mut function: F, parameter: &Q) -> Self::Collected<U>
    where
        Q: ?Sized,
        I: IntoIterator<Item = U>,
        F: FnMut(&Self::Element, &Q) -> I,
        Self::Collected<U>: Sink<U> + Default,
    {
        self.flat_collect(|element| function(element, parameter))
    }

    // =========================================================================
    // Detection
    // =========================================================================

    /// The first element satisfying `predicate`.
    fn detect<P>(&self, mut predicate: P) -> Option<&Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().find(|element| predicate(element))
    }

    /// The first element satisfying `predicate` applied with `parameter`.
    fn detect_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> Option<&Self::Element>
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
    {
        self.detect(|element| predicate(element, parameter))
    }

    /// The first element satisfying `predicate`, or the supplied default.
    fn detect_if_none<P, D>(&self, predicate: P, default: D) -> Self::Element
    where
        P: FnMut(&Self::Element) -> bool,
        D: FnOnce() -> Self::Element,
        Self::Element: Clone,
    {
        self.detect(predicate).cloned().unwrap_or_else(default)
    }

    /// [`detect_if_none`](Self::detect_if_none) with a parameter.
    fn detect_with_if_none<Q, P, D>(&self, mut predicate: P, parameter: &Q, default: D) -> Self::Element
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
        D: FnOnce() -> Self::Element,
        Self::Element: Clone,
    {
        self.detect_if_none(|element| predicate(element, parameter), default)
    }

    // =========================================================================
    // Extrema
    // =========================================================================

    /// The smallest element under natural ordering; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptySource`] on an empty source.
    fn min_element(&self) -> CollectionResult<&Self::Element>
    where
        Self::Element: Ord,
    {
        self.min_element_optional()
            .ok_or_else(|| CollectionError::empty_source("min_element"))
    }

    /// The largest element under natural ordering; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptySource`] on an empty source.
    fn max_element(&self) -> CollectionResult<&Self::Element>
    where
        Self::Element: Ord,
    {
        self.max_element_optional()
            .ok_or_else(|| CollectionError::empty_source("max_element"))
    }

    /// Like [`min_element`](Self::min_element), `None` when empty.
    fn min_element_optional(&self) -> Option<&Self::Element>
    where
        Self::Element: Ord,
    {
        first_extreme(self.elements(), Ord::cmp, Ordering::Less)
    }

    /// Like [`max_element`](Self::max_element), `None` when empty.
    fn max_element_optional(&self) -> Option<&Self::Element>
    where
        Self::Element: Ord,
    {
        first_extreme(self.elements(), Ord::cmp, Ordering::Greater)
    }

    /// The smallest element under `comparator`; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptySource`] on an empty source.
    fn min_with(&self, comparator: &Comparator<Self::Element>) -> CollectionResult<&Self::Element> {
        first_extreme(
            self.elements(),
            |left, right| comparator.compare(left, right),
            Ordering::Less,
        )
        .ok_or_else(|| CollectionError::empty_source("min_with"))
    }

    /// The largest element under `comparator`; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptySource`] on an empty source.
    fn max_with(&self, comparator: &Comparator<Self::Element>) -> CollectionResult<&Self::Element> {
        first_extreme(
            self.elements(),
            |left, right| comparator.compare(left, right),
            Ordering::Greater,
        )
        .ok_or_else(|| CollectionError::empty_source("max_with"))
    }

    /// The element with the smallest derived key; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptySource`] on an empty source.
    fn min_by<U, F>(&self, key_function: F) -> CollectionResult<&Self::Element>
    where
        U: Ord,
        F: FnMut(&Self::Element) -> U,
    {
        self.min_by_optional(key_function)
            .ok_or_else(|| CollectionError::empty_source("min_by"))
    }

    /// The element with the largest derived key; ties keep the first.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptySource`] on an empty source.
    fn max_by<U, F>(&self, key_function: F) -> CollectionResult<&Self::Element>
    where
        U: Ord,
        F: FnMut(&Self::Element) -> U,
    {
        self.max_by_optional(key_function)
            .ok_or_else(|| CollectionError::empty_source("max_by"))
    }

    /// Like [`min_by`](Self::min_by), `None` when empty.
    fn min_by_optional<U, F>(&self, key_function: F) -> Option<&Self::Element>
    where
        U: Ord,
        F: FnMut(&Self::Element) -> U,
    {
        first_extreme_by(self.elements(), key_function, Ordering::Less)
    }

    /// Like [`max_by`](Self::max_by), `None` when empty.
    fn max_by_optional<U, F>(&self, key_function: F) -> Option<&Self::Element>
    where
        U: Ord,
        F: FnMut(&Self::Element) -> U,
    {
        first_extreme_by(self.elements(), key_function, Ordering::Greater)
    }

    // =========================================================================
    // Boolean reductions and counting
    // =========================================================================

    /// Returns `true` if any element satisfies `predicate`; `false` when empty.
    fn any_satisfy<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().any(|element| predicate(element))
    }

    /// Returns `true` if every element satisfies `predicate`; `true` when empty.
    fn all_satisfy<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().all(|element| predicate(element))
    }

    /// Returns `true` if no element satisfies `predicate`; `true` when empty.
    fn none_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        !self.any_satisfy(predicate)
    }

    /// [`any_satisfy`](Self::any_satisfy) with a parameter.
    fn any_satisfy_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
    {
        self.any_satisfy(|element| predicate(element, parameter))
    }

    /// [`all_satisfy`](Self::all_satisfy) with a parameter.
    fn all_satisfy_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
    {
        self.all_satisfy(|element| predicate(element, parameter))
    }

    /// [`none_satisfy`](Self::none_satisfy) with a parameter.
    fn none_satisfy_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
    {
        self.none_satisfy(|element| predicate(element, parameter))
    }

    /// Number of elements satisfying `predicate`.
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.elements().filter(|element| predicate(element)).count()
    }

    /// [`count`](Self::count) with a parameter.
    fn count_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> usize
    where
        Q: ?Sized,
        P: FnMut(&Self::Element, &Q) -> bool,
    {
        self.count(|element| predicate(element, parameter))
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Left fold starting from `seed`; returns `seed` for an empty source.
    fn inject_into<B, F>(&self, seed: B, function: F) -> B
    where
        F: FnMut(B, &Self::Element) -> B,
    {
        self.elements().fold(seed, function)
    }

    /// Left fold without a seed; `None` for an empty source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rich_collections::iteration::RichIterable;
    ///
    /// assert_eq!(vec![1, 2, 3].reduce(|left, right| left + right), Some(6));
    /// assert_eq!(Vec::<i32>::new().reduce(|left, right| left + right), None);
    /// ```
    fn reduce<F>(&self, mut function: F) -> Option<Self::Element>
    where
        F: FnMut(Self::Element, &Self::Element) -> Self::Element,
        Self::Element: Clone,
    {
        let mut elements = self.elements();
        let first = elements.next()?.clone();
        Some(elements.fold(first, |accumulator, element| function(accumulator, element)))
    }

    // =========================================================================
    // Numeric reductions
    // =========================================================================

    /// Sum of `i32` values, accumulated as `i64`.
    fn sum_of_int<F>(&self, mut function: F) -> i64
    where
        F: FnMut(&Self::Element) -> i32,
    {
        self.inject_into(0_i64, |sum, element| {
            sum.wrapping_add(i64::from(function(element)))
        })
    }

    /// Sum of `i64` values.
    fn sum_of_long<F>(&self, mut function: F) -> i64
    where
        F: FnMut(&Self::Element) -> i64,
    {
        self.inject_into(0_i64, |sum, element| sum.wrapping_add(function(element)))
    }

    /// Compensated sum of `f32` values, accumulated as `f64` in iteration order.
    fn sum_of_float<F>(&self, mut function: F) -> f64
    where
        F: FnMut(&Self::Element) -> f32,
    {
        self.sum_of_double(|element| f64::from(function(element)))
    }

    /// Compensated sum of `f64` values in iteration order.
    fn sum_of_double<F>(&self, mut function: F) -> f64
    where
        F: FnMut(&Self::Element) -> f64,
    {
        self.inject_into(CompensatedSum::new(), |mut sum, element| {
            sum.add(function(element));
            sum
        })
        .value()
    }

    /// Count, sum, minimum and maximum of `i32` values.
    fn summarize_int<F>(&self, mut function: F) -> IntegerSummaryStatistics
    where
        F: FnMut(&Self::Element) -> i32,
    {
        self.summarize_long(|element| i64::from(function(element)))
    }

    /// Count, sum, minimum and maximum of `i64` values.
    fn summarize_long<F>(&self, mut function: F) -> IntegerSummaryStatistics
    where
        F: FnMut(&Self::Element) -> i64,
    {
        self.inject_into(IntegerSummaryStatistics::new(), |mut statistics, element| {
            statistics.accept(function(element));
            statistics
        })
    }

    /// Count, compensated sum, minimum and maximum of `f32` values.
    fn summarize_float<F>(&self, mut function: F) -> DoubleSummaryStatistics
    where
        F: FnMut(&Self::Element) -> f32,
    {
        self.summarize_double(|element| f64::from(function(element)))
    }

    /// Count, compensated sum, minimum and maximum of `f64` values.
    fn summarize_double<F>(&self, mut function: F) -> DoubleSummaryStatistics
    where
        F: FnMut(&Self::Element) -> f64,
    {
        self.inject_into(DoubleSummaryStatistics::new(), |mut statistics, element| {
            statistics.accept(function(element));
            statistics
        })
    }

    /// Per-group sums of `i32` values.
    fn sum_by_int<K, G, F>(&self, mut group_function: G, mut function: F) -> UnifiedMap<K, i64>
    where
        K: Hash + Eq,
        G: FnMut(&Self::Element) -> K,
        F: FnMut(&Self::Element) -> i32,
    {
        self.inject_into(new_unified_map(0), |mut sums: UnifiedMap<K, i64>, element| {
            let sum = sums.entry(group_function(element)).or_insert(0);
            *sum = sum.wrapping_add(i64::from(function(element)));
            sums
        })
    }

    /// Per-group sums of `i64` values.
    fn sum_by_long<K, G, F>(&self, mut group_function: G, mut function: F) -> UnifiedMap<K, i64>
    where
        K: Hash + Eq,
        G: FnMut(&Self::Element) -> K,
        F: FnMut(&Self::Element) -> i64,
    {
        self.inject_into(new_unified_map(0), |mut sums: UnifiedMap<K, i64>, element| {
            let sum = sums.entry(group_function(element)).or_insert(0);
            *sum = sum.wrapping_add(function(element));
            sums
        })
    }

    /// Per-group compensated sums of `f32` values.
    fn sum_by_float<K, G, F>(&self, group_function: G, mut function: F) -> UnifiedMap<K, f64>
    where
        K: Hash + Eq,
        G: FnMut(&Self::Element) -> K,
        F: FnMut(&Self::Element) -> f32,
    {
        self.sum_by_double(group_function, |element| f64::from(function(element)))
    }

    /// Per-group compensated sums of `f64` values, each in iteration order.
    fn sum_by_double<K, G, F>(&self, mut group_function: G, mut function: F) -> UnifiedMap<K, f64>
    where
        K: Hash + Eq,
        G: FnMut(&Self::Element) -> K,
        F: FnMut(&Self::Element) -> f64,
    {
        let sums = self.inject_into(
            new_unified_map(0),
            |mut sums: UnifiedMap<K, CompensatedSum>, element| {
                sums.entry(group_function(element))
                    .or_default()
                    .add(function(element));
                sums
            },
        );
        sums.into_iter()
            .map(|(key, sum)| (key, sum.value()))
            .collect()
    }

    // =========================================================================
    // Grouping and counting by key
    // =========================================================================

    /// Groups elements by a derived key.
    fn group_by<K, F>(&self, function: F) -> ListMultimap<K, Self::Element>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Element) -> K,
        Self::Element: Clone,
    {
        let mut target = ListMultimap::new();
        self.group_by_into(function, &mut target);
        target
    }

    /// Adds every element to `target` under its derived key.
    fn group_by_into<'t, K, M, F>(&self, mut function: F, target: &'t mut M) -> &'t mut M
    where
        M: MultimapSink<K, Self::Element> + ?Sized,
        F: FnMut(&Self::Element) -> K,
        Self::Element: Clone,
    {
        for element in self.elements() {
            target.put(function(element), element.clone());
        }
        target
    }

    /// Groups every element under each of the keys it produces.
    fn group_by_each<K, I, F>(&self, function: F) -> ListMultimap<K, Self::Element>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = K>,
        F: FnMut(&Self::Element) -> I,
        Self::Element: Clone,
    {
        let mut target = ListMultimap::new();
        self.group_by_each_into(function, &mut target);
        target
    }

    /// Adds every element to `target` under each of the keys it produces.
    fn group_by_each_into<'t, K, I, M, F>(&self, mut function: F, target: &'t mut M) -> &'t mut M
    where
        I: IntoIterator<Item = K>,
        M: MultimapSink<K, Self::Element> + ?Sized,
        F: FnMut(&Self::Element) -> I,
        Self::Element: Clone,
    {
        for element in self.elements() {
            for key in function(element) {
                target.put(key, element.clone());
            }
        }
        target
    }

    /// Maps every element by a derived key that must be unique.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateKey`] if two elements share a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rich_collections::iteration::RichIterable;
    ///
    /// let by_value = vec![1, 2, 3].group_by_unique_key(|value| *value).unwrap();
    /// assert_eq!(by_value.len(), 3);
    /// assert!(vec![1, 2, 3].group_by_unique_key(|_| 2).is_err());
    /// ```
    fn group_by_unique_key<K, F>(&self, function: F) -> CollectionResult<UnifiedMap<K, Self::Element>>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Element) -> K,
        Self::Element: Clone,
    {
        let mut target = new_unified_map(self.size());
        self.group_by_unique_key_into(function, &mut target)?;
        Ok(target)
    }

    /// Adds every element to `target` under a derived key that must be unique,
    /// both among the elements and against keys already in `target`.
    ///
    /// The keys are validated before `target` is touched, so on error the
    /// target is unchanged.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateKey`] on any key collision.
    fn group_by_unique_key_into<'t, K, M, F>(
        &self,
        mut function: F,
        target: &'t mut M,
    ) -> CollectionResult<&'t mut M>
    where
        K: Hash + Eq,
        M: MapSink<K, Self::Element> + ?Sized,
        F: FnMut(&Self::Element) -> K,
        Self::Element: Clone,
    {
        let staged: Vec<(K, &Self::Element)> = self
            .elements()
            .map(|element| (function(element), element))
            .collect();
        let mut seen = new_unified_set(staged.len());
        for (key, _) in &staged {
            if target.contains_key_of(key) || !seen.insert(key) {
                return Err(CollectionError::duplicate_key("group_by_unique_key"));
            }
        }
        drop(seen);
        for (key, element) in staged {
            target.put(key, element.clone());
        }
        Ok(target)
    }

    /// Tallies derived keys.
    fn count_by<K, F>(&self, function: F) -> HashBag<K>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Element) -> K,
    {
        let mut target = HashBag::new();
        self.count_by_into(function, &mut target);
        target
    }

    /// Adds every derived key to `target`.
    fn count_by_into<'t, K, S, F>(&self, function: F, target: &'t mut S) -> &'t mut S
    where
        S: Sink<K> + ?Sized,
        F: FnMut(&Self::Element) -> K,
    {
        self.collect_into(function, target)
    }

    /// Tallies keys derived with a parameter.
    fn count_by_with<Q, K, F>(&self, mut function: F, parameter: &Q) -> HashBag<K>
    where
        Q: ?Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Element, &Q) -> K,
    {
        self.count_by(|element| function(element, parameter))
    }

    /// Tallies every key produced for every element.
    fn count_by_each<K, I, F>(&self, function: F) -> HashBag<K>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = K>,
        F: FnMut(&Self::Element) -> I,
    {
        let mut target = HashBag::new();
        self.count_by_each_into(function, &mut target);
        target
    }

    /// Adds every key produced for every element to `target`.
    fn count_by_each_into<'t, K, I, S, F>(&self, function: F, target: &'t mut S) -> &'t mut S
    where
        I: IntoIterator<Item = K>,
        S: Sink<K> + ?Sized,
        F: FnMut(&Self::Element) -> I,
    {
        self.flat_collect_into(function, target)
    }

    /// Folds the elements of each key group, replacing the accumulator.
    fn aggregate_by<K, V, KF, Z, C>(&self, mut key_function: KF, mut zero: Z, mut combiner: C) -> UnifiedMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&Self::Element) -> K,
        Z: FnMut() -> V,
        C: FnMut(V, &Self::Element) -> V,
    {
        let mut aggregated: UnifiedMap<K, V> = new_unified_map(0);
        for element in self.elements() {
            let key = key_function(element);
            let accumulator = aggregated.remove(&key).unwrap_or_else(&mut zero);
            aggregated.insert(key, combiner(accumulator, element));
        }
        aggregated
    }

    /// Folds the elements of each key group by mutating one accumulator per key.
    fn aggregate_in_place_by<K, V, KF, Z, M>(&self, mut key_function: KF, mut zero: Z, mut mutator: M) -> UnifiedMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&Self::Element) -> K,
        Z: FnMut() -> V,
        M: FnMut(&mut V, &Self::Element),
    {
        let mut aggregated: UnifiedMap<K, V> = new_unified_map(0);
        for element in self.elements() {
            let accumulator = aggregated
                .entry(key_function(element))
                .or_insert_with(&mut zero);
            mutator(accumulator, element);
        }
        aggregated
    }

    // =========================================================================
    // Zipping and chunking
    // =========================================================================

    /// Pairs elements with `other`; the result is as long as the shorter side.
    fn zip<U, I>(&self, other: I) -> Self::Collected<(Self::Element, U)>
    where
        I: IntoIterator<Item = U>,
        Self::Element: Clone,
        Self::Collected<(Self::Element, U)>: Sink<(Self::Element, U)> + Default,
    {
        let mut target = Self::Collected::<(Self::Element, U)>::default();
        self.zip_into(other, &mut target);
        target
    }

    /// Adds the pairs of elements and `other` to `target`.
    fn zip_into<'t, U, I, S>(&self, other: I, target: &'t mut S) -> &'t mut S
    where
        I: IntoIterator<Item = U>,
        S: Sink<(Self::Element, U)> + ?Sized,
        Self::Element: Clone,
    {
        for (element, value) in self.elements().zip(other) {
            target.accept((element.clone(), value));
        }
        target
    }

    /// Pairs every element with its iteration index, starting at 0.
    fn zip_with_index(&self) -> Self::Collected<(Self::Element, usize)>
    where
        Self::Element: Clone,
        Self::Collected<(Self::Element, usize)>: Sink<(Self::Element, usize)> + Default,
    {
        let mut target = Self::Collected::<(Self::Element, usize)>::default();
        self.zip_with_index_into(&mut target);
        target
    }

    /// Adds every element paired with its iteration index to `target`.
    fn zip_with_index_into<'t, S>(&self, target: &'t mut S) -> &'t mut S
    where
        S: Sink<(Self::Element, usize)> + ?Sized,
        Self::Element: Clone,
    {
        for (index, element) in self.elements().enumerate() {
            target.accept((element.clone(), index));
        }
        target
    }

    /// Consecutive groups of at most `size` elements, in order.
    ///
    /// An empty source yields no chunks.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] when `size` is zero.
    fn chunk(&self, size: usize) -> CollectionResult<Vec<Self::Selected>>
    where
        Self::Element: Clone,
    {
        if size == 0 {
            return Err(CollectionError::invalid_argument(
                "chunk",
                "size must be greater than zero",
            ));
        }
        let mut chunks = Vec::new();
        let mut batch = self.new_selected();
        let mut filled = 0;
        for element in self.elements() {
            batch.accept(element.clone());
            filled += 1;
            if filled == size {
                chunks.push(std::mem::replace(&mut batch, self.new_selected()));
                filled = 0;
            }
        }
        if filled > 0 {
            chunks.push(batch);
        }
        Ok(chunks)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// A new `Vec` holding the elements in iteration order.
    fn to_list(&self) -> Vec<Self::Element>
    where
        Self::Element: Clone,
    {
        self.elements().cloned().collect()
    }

    /// An immutable shared slice holding the elements in iteration order.
    fn to_immutable_list(&self) -> Arc<[Self::Element]>
    where
        Self::Element: Clone,
    {
        self.elements().cloned().collect()
    }

    /// A new hash set of the elements.
    fn to_set(&self) -> UnifiedSet<Self::Element>
    where
        Self::Element: Clone + Hash + Eq,
    {
        let mut target = new_unified_set(0);
        target.extend(self.elements().cloned());
        target
    }

    /// A new bag counting the elements.
    fn to_bag(&self) -> HashBag<Self::Element>
    where
        Self::Element: Clone + Hash + Eq,
    {
        self.elements().cloned().collect()
    }

    /// The elements sorted by natural ordering; equal elements keep their order.
    fn to_sorted_list(&self) -> Vec<Self::Element>
    where
        Self::Element: Clone + Ord,
    {
        let mut sorted = self.to_list();
        sorted.sort();
        sorted
    }

    /// The elements sorted by `comparator`; equal elements keep their order.
    fn to_sorted_list_with(&self, comparator: &Comparator<Self::Element>) -> Vec<Self::Element>
    where
        Self::Element: Clone,
    {
        let mut sorted = self.to_list();
        sorted.sort_by(|left, right| comparator.compare(left, right));
        sorted
    }

    /// The elements sorted by a derived key; equal keys keep their order.
    fn to_sorted_list_by<U, F>(&self, key_function: F) -> Vec<Self::Element>
    where
        U: Ord,
        F: FnMut(&Self::Element) -> U,
        Self::Element: Clone,
    {
        let mut sorted = self.to_list();
        sorted.sort_by_key(key_function);
        sorted
    }

    /// A new sorted set under natural ordering.
    fn to_sorted_set(&self) -> TreeSortedSet<Self::Element>
    where
        Self::Element: Clone + Ord,
    {
        self.to_sorted_set_with(&Comparator::natural())
    }

    /// A new sorted set under `comparator`.
    fn to_sorted_set_with(&self, comparator: &Comparator<Self::Element>) -> TreeSortedSet<Self::Element>
    where
        Self::Element: Clone,
    {
        let mut target = TreeSortedSet::with_comparator(comparator.clone());
        target.accept_all(self.elements().cloned());
        target
    }

    /// A new sorted set ordered by a derived key.
    fn to_sorted_set_by<U, F>(&self, key_function: F) -> TreeSortedSet<Self::Element>
    where
        U: Ord,
        F: Fn(&Self::Element) -> U + Send + Sync + 'static,
        Self::Element: Clone,
    {
        self.to_sorted_set_with(&Comparator::by(key_function))
    }

    /// A new sorted bag under natural ordering.
    fn to_sorted_bag(&self) -> TreeSortedBag<Self::Element>
    where
        Self::Element: Clone + Ord,
    {
        self.to_sorted_bag_with(&Comparator::natural())
    }

    /// A new sorted bag under `comparator`.
    fn to_sorted_bag_with(&self, comparator: &Comparator<Self::Element>) -> TreeSortedBag<Self::Element>
    where
        Self::Element: Clone,
    {
        let mut target = TreeSortedBag::with_comparator(comparator.clone());
        target.accept_all(self.elements().cloned());
        target
    }

    /// A new sorted bag ordered by a derived key.
    fn to_sorted_bag_by<U, F>(&self, key_function: F) -> TreeSortedBag<Self::Element>
    where
        U: Ord,
        F: Fn(&Self::Element) -> U + Send + Sync + 'static,
        Self::Element: Clone,
    {
        self.to_sorted_bag_with(&Comparator::by(key_function))
    }

    /// A new hash map of derived keys and values; a later element
    /// overwrites an earlier one with the same key.
    fn to_map<K, V, KF, VF>(&self, key_function: KF, value_function: VF) -> UnifiedMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&Self::Element) -> K,
        VF: FnMut(&Self::Element) -> V,
    {
        let mut target = new_unified_map(self.size());
        self.to_map_into(key_function, value_function, &mut target);
        target
    }

    /// Puts derived keys and values into `target`, overwriting on collision.
    fn to_map_into<'t, K, V, M, KF, VF>(
        &self,
        mut key_function: KF,
        mut value_function: VF,
        target: &'t mut M,
    ) -> &'t mut M
    where
        M: MapSink<K, V> + ?Sized,
        KF: FnMut(&Self::Element) -> K,
        VF: FnMut(&Self::Element) -> V,
    {
        for element in self.elements() {
            target.put(key_function(element), value_function(element));
        }
        target
    }

    /// A new hash map of derived keys and values whose keys must be unique.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateKey`] if two elements produce the same key.
    fn to_unique_map<K, V, KF, VF>(&self, mut key_function: KF, mut value_function: VF) -> CollectionResult<UnifiedMap<K, V>>
    where
        K: Hash + Eq,
        KF: FnMut(&Self::Element) -> K,
        VF: FnMut(&Self::Element) -> V,
    {
        let mut target: UnifiedMap<K, V> = new_unified_map(self.size());
        for element in self.elements() {
            if target
                .insert(key_function(element), value_function(element))
                .is_some()
            {
                return Err(CollectionError::duplicate_key("to_unique_map"));
            }
        }
        Ok(target)
    }

    /// A new sorted map under natural key order; later elements overwrite.
    fn to_sorted_map<K, V, KF, VF>(&self, key_function: KF, value_function: VF) -> TreeSortedMap<K, V>
    where
        K: Ord,
        KF: FnMut(&Self::Element) -> K,
        VF: FnMut(&Self::Element) -> V,
    {
        self.to_sorted_map_with(Comparator::natural(), key_function, value_function)
    }

    /// A new sorted map under `comparator`; later elements overwrite.
    fn to_sorted_map_with<K, V, KF, VF>(
        &self,
        comparator: Comparator<K>,
        key_function: KF,
        value_function: VF,
    ) -> TreeSortedMap<K, V>
    where
        KF: FnMut(&Self::Element) -> K,
        VF: FnMut(&Self::Element) -> V,
    {
        let mut target = TreeSortedMap::with_comparator(comparator);
        self.to_map_into(key_function, value_function, &mut target);
        target
    }

    /// A new sorted map ordered by a key derived from each map key.
    fn to_sorted_map_by<K, V, U, SF, KF, VF>(
        &self,
        sort_key_function: SF,
        key_function: KF,
        value_function: VF,
    ) -> TreeSortedMap<K, V>
    where
        U: Ord,
        SF: Fn(&K) -> U + Send + Sync + 'static,
        KF: FnMut(&Self::Element) -> K,
        VF: FnMut(&Self::Element) -> V,
    {
        self.to_sorted_map_with(Comparator::by(sort_key_function), key_function, value_function)
    }

    /// A new bidirectional map; keys and values must both be unique.
    ///
    /// Every pair is validated before the map is built, so the failing
    /// element is the first one (in iteration order) whose key or value
    /// repeats an earlier one.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateKey`] or [`CollectionError::DuplicateValue`].
    fn to_bi_map<K, V, KF, VF>(&self, mut key_function: KF, mut value_function: VF) -> CollectionResult<HashBiMap<K, V>>
    where
        K: Hash + Eq + Clone,
        V: Hash + Eq + Clone,
        KF: FnMut(&Self::Element) -> K,
        VF: FnMut(&Self::Element) -> V,
    {
        let staged: Vec<(K, V)> = self
            .elements()
            .map(|element| (key_function(element), value_function(element)))
            .collect();
        let mut keys = new_unified_set(staged.len());
        let mut values = new_unified_set(staged.len());
        for (key, value) in &staged {
            if !keys.insert(key) {
                return Err(CollectionError::duplicate_key("to_bi_map"));
            }
            if !values.insert(value) {
                return Err(CollectionError::duplicate_value("to_bi_map"));
            }
        }
        drop(keys);
        drop(values);
        let mut target = HashBiMap::new();
        for (key, value) in staged {
            target.force_put(key, value);
        }
        Ok(target)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The elements joined by `", "`.
    fn make_string(&self) -> String
    where
        Self::Element: Display,
    {
        self.make_string_wrapped("", ", ", "")
    }

    /// The elements joined by `separator`.
    fn make_string_with(&self, separator: &str) -> String
    where
        Self::Element: Display,
    {
        self.make_string_wrapped("", separator, "")
    }

    /// The elements joined by `separator`, between `start` and `end`.
    fn make_string_wrapped(&self, start: &str, separator: &str, end: &str) -> String
    where
        Self::Element: Display,
    {
        let mut rendered = String::new();
        // Writing into a String cannot fail.
        let _ = self.append_string(&mut rendered, start, separator, end);
        rendered
    }

    /// Writes the elements joined by `separator`, between `start` and `end`.
    ///
    /// # Errors
    ///
    /// Propagates any error of `writer`.
    fn append_string<W>(&self, writer: &mut W, start: &str, separator: &str, end: &str) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        Self::Element: Display,
    {
        writer.write_str(start)?;
        for (index, element) in self.elements().enumerate() {
            if index > 0 {
                writer.write_str(separator)?;
            }
            write!(writer, "{element}")?;
        }
        writer.write_str(end)
    }
}
