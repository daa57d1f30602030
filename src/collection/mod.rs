//! Containers consumed and produced by the iteration protocol.
//!
//! - [`HashBag`]: counted multiset, the default `count_by` target
//! - [`TreeSortedSet`] / [`TreeSortedBag`]: comparator-ordered set and multiset
//! - [`HashBiMap`]: bidirectional map, the result of `to_bi_map`
//! - [`ListMultimap`] / [`SortedSetMultimap`]: the results of `group_by` and `flip`
//! - [`ArrayStack`]: LIFO stack, the result of `to_stack`
//! - [`FixedSizeList`]: a list that cannot grow or shrink
//! - [`MutableCollection`]: uniform fallible add/remove

mod bag;
mod bimap;
mod fixed_size;
mod multimap;
mod mutable;
mod sorted_bag;
mod sorted_set;
mod stack;

pub use bag::{HashBag, Iter as HashBagIter};
pub use bimap::HashBiMap;
pub use fixed_size::FixedSizeList;
pub use multimap::{ListMultimap, SortedSetMultimap};
pub use mutable::MutableCollection;
pub use sorted_bag::TreeSortedBag;
pub use sorted_set::TreeSortedSet;
pub use stack::ArrayStack;
