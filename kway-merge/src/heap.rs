//! An array-backed binary heap ordered by a [`Comparator`].
//!
//! Unlike [`std::collections::BinaryHeap`], which is a max-heap over [`Ord`], this heap keeps the
//! element that its comparator considers *smallest* at the root, and the comparator is a value
//! carried by the heap rather than a trait implementation on the element type. That allows
//! ordering elements (such as cursors) by some projection of their state.
//!
//! The backing storage is a [`Vec`] laid out as a complete binary tree: the parent of index `i`
//! is `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`. For every non-root index `i`,
//! `cmp(heap[parent(i)], heap[i])` is never [`Ordering::Greater`].

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::comparator::{Comparator, MinComparator};
use crate::config::BuildStrategy;
use crate::error::{Error, Result};

/// A binary min-heap parameterized by a [`Comparator`].
///
/// See [the module documentation](self) for more details.
#[derive(Clone)]
pub struct BinaryHeap<T, C = MinComparator> {
    data: Vec<T>,
    comparator: C,
}

impl<T: Debug, C> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty min-heap using the natural order of `T`
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(MinComparator)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, MinComparator)
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Returns the number of entries in the heap
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no entries
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every entry from the heap
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns a reference to the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Iterates over the entries in heap (not sorted) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing vector in heap order
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty heap ordered by `comparator`
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Creates an empty heap ordered by `comparator`, with space for at least `capacity` entries
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Builds a heap from an unordered vector in O(n) by sifting down every internal node,
    /// deepest first
    #[must_use]
    pub fn from_vec_with_comparator(data: Vec<T>, comparator: C) -> Self {
        let mut heap = Self { data, comparator };
        for pos in (0..heap.data.len() / 2).rev() {
            heap.sift_down(pos);
        }
        debug_assert!(heap.is_heap());
        heap
    }

    /// Builds a heap from `items` using the given [`BuildStrategy`]
    pub fn build<I>(items: I, comparator: C, strategy: BuildStrategy) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match strategy {
            BuildStrategy::Heapify => {
                Self::from_vec_with_comparator(items.into_iter().collect(), comparator)
            }
            BuildStrategy::Incremental => {
                let items = items.into_iter();
                let mut heap = Self::with_capacity_and_comparator(items.size_hint().0, comparator);
                heap.extend(items);
                heap
            }
        }
    }

    /// Inserts `item` into the heap in O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest entry in O(log n).
    ///
    /// Returns [`Error::EmptyHeap`] without modifying the heap if it has no entries.
    pub fn pop(&mut self) -> Result<T> {
        let mut item = self.data.pop().ok_or(Error::EmptyHeap)?;
        if let Some(root) = self.data.first_mut() {
            mem::swap(&mut item, root);
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Returns a reference to the smallest entry, or [`Error::EmptyHeap`]
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyHeap)
    }

    /// Returns a mutable handle to the smallest entry, or [`Error::EmptyHeap`].
    ///
    /// Heap order is restored with a single sift when the handle is dropped, so modifying the
    /// root in place costs half as much as popping it and pushing it back.
    pub fn peek_mut(&mut self) -> Result<PeekMut<'_, T, C>> {
        if self.data.is_empty() {
            return Err(Error::EmptyHeap);
        }
        Ok(PeekMut { heap: self })
    }

    /// Pushes `item` and then pops the smallest entry, with at most one sift.
    ///
    /// If `item` is not greater than the current root, it is handed straight back and the heap is
    /// not touched.
    pub fn push_pop(&mut self, mut item: T) -> T {
        if let Some(root) = self.data.first_mut() {
            if self.comparator.cmp(root, &item) == Ordering::Less {
                mem::swap(root, &mut item);
                self.sift_down(0);
            }
        }
        item
    }

    /// Consumes the heap, returning its entries sorted smallest first
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns `true` if every entry compares not greater than both of its children
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|pos| {
            self.comparator.cmp(&self.data[(pos - 1) / 2], &self.data[pos]) != Ordering::Greater
        })
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator.cmp(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

/// A mutable handle to the root of a non-empty [`BinaryHeap`]. Constructed via
/// [`BinaryHeap::peek_mut`].
pub struct PeekMut<'a, T, C>
where
    C: Comparator<T>,
{
    heap: &'a mut BinaryHeap<T, C>,
}

impl<T, C> PeekMut<'_, T, C>
where
    C: Comparator<T>,
{
    /// Removes the root from the heap
    pub fn pop(this: Self) -> T {
        // The last entry fills the gap, and is sifted into place on drop
        this.heap.data.swap_remove(0)
    }
}

impl<T, C> Deref for PeekMut<'_, T, C>
where
    C: Comparator<T>,
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.heap.data[0]
    }
}

impl<T, C> DerefMut for PeekMut<'_, T, C>
where
    C: Comparator<T>,
{
    fn deref_mut(&mut self) -> &mut T {
        &mut self.heap.data[0]
    }
}

impl<T, C> Drop for PeekMut<'_, T, C>
where
    C: Comparator<T>,
{
    fn drop(&mut self) {
        self.heap.sift_down(0);
    }
}

impl<T: Debug, C> Debug for PeekMut<'_, T, C>
where
    C: Comparator<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&**self).finish()
    }
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}
