//! The shared eager iteration protocol.
//!
//! - [`RichIterable`]: every higher-order operation, defined once
//! - [`OrderedIterable`]: positional operations for ordered sources
//! - [`NullCheckedIterable`]: natural-order operations that reject `None`
//! - [`Sink`], [`MapSink`], [`MultimapSink`]: targets for the `_into` forms
//! - [`PartitionResult`]: the two halves of a `partition`
//! - [`CompensatedSum`] and the summary statistics used by numeric reductions

mod nullable;
mod ordered;
mod partition;
mod rich_iterable;
mod sink;
mod statistics;
mod std_impls;

pub use nullable::NullCheckedIterable;
pub use ordered::OrderedIterable;
pub use partition::PartitionResult;
pub use rich_iterable::RichIterable;
pub use sink::{MapSink, MultimapSink, Sink};
pub use statistics::{CompensatedSum, DoubleSummaryStatistics, IntegerSummaryStatistics};
