//! [`RichIterable`] for the standard library containers.
//!
//! Sequences keep their own shape for both selections and transformations.
//! `HashSet` keeps its hasher; `BTreeSet` selects into itself but
//! transforms into a `Vec`, since transformed elements have no order of
//! their own.

use std::collections::{BTreeSet, HashSet, VecDeque, btree_set, hash_set, vec_deque};
use std::hash::{BuildHasher, Hash};
use std::slice;

use super::ordered::OrderedIterable;
use super::rich_iterable::RichIterable;

impl<T> RichIterable for Vec<T> {
    type Element = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;
    type Selected = Self;
    type Collected<U> = Vec<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        Self::new()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn get_last(&self) -> Option<&T> {
        self.last()
    }
}

impl<T> OrderedIterable for Vec<T> {}

impl<T> RichIterable for VecDeque<T> {
    type Element = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;
    type Selected = Self;
    type Collected<U> = VecDeque<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        Self::new()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn get_last(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> OrderedIterable for VecDeque<T> {}

impl<T, S> RichIterable for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Clone,
{
    type Element = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;
    type Selected = Self;
    type Collected<U> = HashSet<U, S>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        Self::with_hasher(self.hasher().clone())
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }
}

impl<T: Ord> RichIterable for BTreeSet<T> {
    type Element = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;
    type Selected = Self;
    type Collected<U> = Vec<U>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn new_selected(&self) -> Self::Selected {
        Self::new()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn min_element_optional(&self) -> Option<&T> {
        self.first()
    }

    fn max_element_optional(&self) -> Option<&T> {
        self.last()
    }
}
