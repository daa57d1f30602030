//! Total-order functions that live outside the element type.
//!
//! A [`Comparator`] is fixed at construction time by every sorted container
//! in this crate. Containers derived from a sorted container (selections,
//! sub-maps, "new empty" instances) reuse the same comparator, so their
//! iteration order is always the one the caller chose.
//!
//! # Examples
//!
//! ```rust
//! use rich_collections::comparator::Comparator;
//! use std::cmp::Ordering;
//!
//! let natural = Comparator::<i32>::natural();
//! assert_eq!(natural.compare(&1, &2), Ordering::Less);
//!
//! let reversed = natural.reversed();
//! assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
//!
//! let by_length = Comparator::by(|text: &String| text.len());
//! assert_eq!(by_length.compare(&"aa".to_string(), &"b".to_string()), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type CompareFunction<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

enum Strategy<T> {
    Natural(fn(&T, &T) -> Ordering),
    Custom(Arc<CompareFunction<T>>),
}

impl<T> Clone for Strategy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Natural(function) => Self::Natural(*function),
            Self::Custom(function) => Self::Custom(Arc::clone(function)),
        }
    }
}

/// A total order over `T`, supplied from outside `T`.
///
/// Cloning a comparator is cheap: custom comparators are reference counted.
/// Comparators are `Send + Sync`, so containers holding one can be shared
/// across threads whenever their elements can.
pub struct Comparator<T> {
    strategy: Strategy<T>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
        }
    }
}

impl<T: Ord> Comparator<T> {
    /// The natural ordering of `T`.
    #[must_use]
    pub fn natural() -> Self {
        Self {
            strategy: Strategy::Natural(<T as Ord>::cmp),
        }
    }
}

impl<T: Ord> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> Comparator<T> {
    /// Wraps an arbitrary comparison function.
    ///
    /// The function must describe a total order; containers rely on it for
    /// key uniqueness.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            strategy: Strategy::Custom(Arc::new(function)),
        }
    }

    /// Orders elements by the natural order of a derived key.
    pub fn by<U, F>(key_function: F) -> Self
    where
        U: Ord,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        Self::new(move |left, right| key_function(left).cmp(&key_function(right)))
    }

    /// Compares two elements.
    #[inline]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        match &self.strategy {
            Strategy::Natural(function) => function(left, right),
            Strategy::Custom(function) => function(left, right),
        }
    }

    /// Returns `true` for the comparator produced by [`Comparator::natural`].
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        matches!(self.strategy, Strategy::Natural(_))
    }
}

impl<T: 'static> Comparator<T> {
    /// The same order, reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let inner = self.clone();
        Self::new(move |left, right| inner.compare(right, left))
    }

    /// Breaks ties of this comparator with `next`.
    #[must_use]
    pub fn then(&self, next: Self) -> Self {
        let first = self.clone();
        Self::new(move |left, right| {
            first
                .compare(left, right)
                .then_with(|| next.compare(left, right))
        })
    }

    /// A null-safe comparator that places `None` before every present value.
    #[must_use]
    pub fn nulls_low(inner: Self) -> Comparator<Option<T>> {
        Comparator::new(move |left: &Option<T>, right: &Option<T>| match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => inner.compare(left, right),
        })
    }

    /// A null-safe comparator that places `None` after every present value.
    #[must_use]
    pub fn nulls_high(inner: Self) -> Comparator<Option<T>> {
        Comparator::new(move |left: &Option<T>, right: &Option<T>| match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(left), Some(right)) => inner.compare(left, right),
        })
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Strategy::Natural(_) => formatter.write_str("Comparator::Natural"),
            Strategy::Custom(_) => formatter.write_str("Comparator::Custom"),
        }
    }
}
