//! The result of splitting a source by a predicate in a single pass.

/// Two disjoint containers produced by one predicate pass over a source.
///
/// Together `selected` and `rejected` hold exactly the source's elements,
/// each exactly once. For ordered sources both halves keep the relative
/// order of the source.
///
/// # Examples
///
/// ```rust
/// use rich_collections::iteration::RichIterable;
///
/// let partition = vec![1, 2, 3, 4, 5].partition(|value| value % 2 == 0);
/// assert_eq!(partition.selected(), &vec![2, 4]);
/// assert_eq!(partition.rejected(), &vec![1, 3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartitionResult<C> {
    selected: C,
    rejected: C,
}

impl<C> PartitionResult<C> {
    /// Creates a partition from its two halves.
    pub const fn new(selected: C, rejected: C) -> Self {
        Self { selected, rejected }
    }

    /// Elements that satisfied the predicate.
    pub const fn selected(&self) -> &C {
        &self.selected
    }

    /// Elements that did not satisfy the predicate.
    pub const fn rejected(&self) -> &C {
        &self.rejected
    }

    pub(crate) fn halves_mut(&mut self) -> (&mut C, &mut C) {
        (&mut self.selected, &mut self.rejected)
    }

    /// Splits the result into `(selected, rejected)`.
    pub fn into_parts(self) -> (C, C) {
        (self.selected, self.rejected)
    }
}
