//! Array-backed LIFO stack.

use std::fmt;
use std::iter::Rev;
use std::slice;

use crate::iteration::{RichIterable, Sink};

/// A last-in first-out stack.
///
/// Iteration runs from the top of the stack to the bottom, so the
/// protocol of [`RichIterable`] sees the most recently pushed element first.
///
/// # Examples
///
/// ```rust
/// use rich_collections::collection::ArrayStack;
/// use rich_collections::iteration::RichIterable;
///
/// let mut stack = ArrayStack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.to_list(), vec![3, 2, 1]);
/// assert_eq!(stack.pop(), Some(3));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    elements: Vec<T>,
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Pushes `element` onto the top.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Removes up to `count` elements from the top, topmost first.
    pub fn pop_many(&mut self, count: usize) -> Vec<T> {
        let keep = self.elements.len().saturating_sub(count);
        self.elements.drain(keep..).rev().collect()
    }

    /// The top element.
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// The element `depth` positions below the top.
    pub fn peek_at(&self, depth: usize) -> Option<&T> {
        self.elements.iter().rev().nth(depth)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.elements.iter().rev()
    }
}

impl<T> Sink<T> for ArrayStack<T> {
    #[inline]
    fn accept(&mut self, element: T) {
        self.push(element);
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    /// Pushes the elements in order, so the last one ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> RichIterable for ArrayStack<T> {
    type Element = T;
    type Iter<'a>
        = Rev<slice::Iter<'a, T>>
    where
        Self: 'a;
    type Selected = Vec<T>;
    type Collected<U> = Vec<U>;

    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        Vec::new()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.append_string(formatter, "[", ", ", "]")
    }
}
