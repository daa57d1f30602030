//! # rich-collections
//!
//! A rich, eager iteration protocol for Rust collections, together with
//! comparator-ordered containers that speak it.
//!
//! ## Overview
//!
//! - **Iteration protocol**: [`RichIterable`](iteration::RichIterable) gives
//!   every container `select`, `reject`, `collect`, `partition`, `group_by`,
//!   `count_by`, `zip`, `chunk`, aggregation, numeric summaries and
//!   conversions. Each transformation either builds the container's natural
//!   result or writes into a caller-supplied target ([`Sink`](iteration::Sink)).
//! - **Positional operations**: [`OrderedIterable`](iteration::OrderedIterable)
//!   for index-addressable sources.
//! - **Sorted maps**: [`TreeSortedMap`](sorted::TreeSortedMap) keeps its keys in
//!   [`Comparator`](comparator::Comparator) order and runs the protocol over its
//!   values, with read-only, immutable and synchronized forms.
//! - **Containers**: bags, sorted sets and bags, bidirectional maps,
//!   multimaps, stacks and fixed-size lists.
//!
//! Contract violations never panic; they come back as a
//! [`CollectionError`](error::CollectionError).
//!
//! ## Feature Flags
//!
//! - `synchronized` (default): [`SynchronizedSortedMap`](sorted::SynchronizedSortedMap)
//! - `fxhash`: use `rustc-hash` for every hash-based container
//! - `ahash`: use `ahash` for every hash-based container
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use rich_collections::prelude::*;
//!
//! let words = vec!["apple", "avocado", "banana", "cherry", "blueberry"];
//!
//! let by_initial = words.group_by(|word| word.chars().next());
//! assert_eq!(by_initial.get(&Some('b')), &["banana", "blueberry"]);
//!
//! let lengths: TreeSortedMap<&str, usize> = words.to_sorted_map(|word| *word, |word| word.len());
//! assert_eq!(lengths.first_key(), Some(&"apple"));
//! assert_eq!(lengths.max_element(), Ok(&9));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use rich_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{
        ArrayStack, FixedSizeList, HashBag, HashBiMap, ListMultimap, MutableCollection,
        SortedSetMultimap, TreeSortedBag, TreeSortedSet,
    };
    pub use crate::comparator::Comparator;
    pub use crate::error::{CollectionError, CollectionResult, ErrorKind};
    pub use crate::hashing::{UnifiedMap, UnifiedSet};
    pub use crate::iteration::{
        MapSink, MultimapSink, NullCheckedIterable, OrderedIterable, PartitionResult,
        RichIterable, Sink,
    };
    #[cfg(feature = "synchronized")]
    pub use crate::sorted::{ReadOnlySynchronizedSortedMap, SynchronizedSortedMap};
    pub use crate::sorted::{ImmutableSortedMap, TreeSortedMap, UnmodifiableSortedMap};
}

pub mod collection;
pub mod comparator;
pub mod error;
pub mod hashing;
pub mod iteration;
pub mod sorted;
