//! Comparator-ordered key/value containers and their views.
//!
//! - [`TreeSortedMap`]: the mutable sorted map
//! - [`UnmodifiableSortedMap`]: a borrowed read-only view
//! - [`ImmutableSortedMap`]: an independent snapshot with persistent-style updates
//! - [`SynchronizedSortedMap`]: a shared handle guarded by one lock
//!   (feature `synchronized`)
//!
//! Every sorted map runs the [`RichIterable`](crate::iteration::RichIterable)
//! protocol over its values in key order. Sorted maps have no positional
//! index, so each [`OrderedIterable`](crate::iteration::OrderedIterable)
//! method fails with `NotSupported` naming the container and the operation.

/// Implements every `OrderedIterable` method as a `NotSupported` failure.
macro_rules! positional_operations_unsupported {
    ($container:literal) => {
        fn index_of(
            &self,
            _value: &Self::Element,
        ) -> $crate::error::CollectionResult<Option<usize>>
        where
            Self::Element: PartialEq,
        {
            Err($crate::error::CollectionError::not_supported($container, "index_of"))
        }

        fn detect_index<P>(&self, _predicate: P) -> $crate::error::CollectionResult<Option<usize>>
        where
            P: FnMut(&Self::Element) -> bool,
        {
            Err($crate::error::CollectionError::not_supported($container, "detect_index"))
        }

        fn detect_last_index<P>(
            &self,
            _predicate: P,
        ) -> $crate::error::CollectionResult<Option<usize>>
        where
            P: FnMut(&Self::Element) -> bool,
        {
            Err($crate::error::CollectionError::not_supported(
                $container,
                "detect_last_index",
            ))
        }

        fn for_each_in_range<P>(
            &self,
            _from: usize,
            _to: usize,
            _procedure: P,
        ) -> $crate::error::CollectionResult<()>
        where
            P: FnMut(&Self::Element),
        {
            Err($crate::error::CollectionError::not_supported(
                $container,
                "for_each_in_range",
            ))
        }

        fn for_each_with_index_in_range<P>(
            &self,
            _from: usize,
            _to: usize,
            _procedure: P,
        ) -> $crate::error::CollectionResult<()>
        where
            P: FnMut(&Self::Element, usize),
        {
            Err($crate::error::CollectionError::not_supported(
                $container,
                "for_each_with_index_in_range",
            ))
        }

        fn corresponds<U, P>(&self, _other: &[U], _predicate: P) -> $crate::error::CollectionResult<bool>
        where
            P: FnMut(&Self::Element, &U) -> bool,
        {
            Err($crate::error::CollectionError::not_supported($container, "corresponds"))
        }

        fn to_stack(
            &self,
        ) -> $crate::error::CollectionResult<$crate::collection::ArrayStack<Self::Element>>
        where
            Self::Element: Clone,
        {
            Err($crate::error::CollectionError::not_supported($container, "to_stack"))
        }

        fn as_reversed(
            &self,
        ) -> $crate::error::CollectionResult<Box<dyn Iterator<Item = &Self::Element> + '_>> {
            Err($crate::error::CollectionError::not_supported($container, "as_reversed"))
        }
    };
}

mod immutable;
#[cfg(feature = "synchronized")]
mod synchronized;
mod tree_sorted_map;
mod unmodifiable;

pub use immutable::ImmutableSortedMap;
#[cfg(feature = "synchronized")]
pub use synchronized::{ReadOnlySynchronizedSortedMap, SynchronizedSortedMap};
pub use tree_sorted_map::{Entries, Keys, TreeSortedMap, Values};
pub use unmodifiable::UnmodifiableSortedMap;
