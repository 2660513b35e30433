use std::cmp::Ordering;
use std::iter::FusedIterator;

use streaming_iterator::StreamingIterator;
use tracing::{debug, trace};

use crate::comparator::{Comparator, MinComparator};
use crate::config::MergeConfig;
use crate::cursor::{Cursor, IndexedCursor, LinkedCursor, TakeCursor};
use crate::heap::{BinaryHeap, PeekMut};
use crate::list::LinkedList;

/// Orders cursors by their current value. Exhausted cursors never enter the heap, but sort last
/// if they do.
#[derive(Debug, Clone)]
pub(crate) struct CursorOrder<Cmp>(Cmp);

impl<C, Cmp> Comparator<C> for CursorOrder<Cmp>
where
    C: Cursor,
    Cmp: Comparator<C::Item>,
{
    #[inline(always)]
    fn cmp(&self, a: &C, b: &C) -> Ordering {
        match (a.value(), b.value()) {
            (Some(a), Some(b)) => self.0.cmp(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// A lazy k-way merge over sorted [`Cursor`]s.
///
/// The merger holds one heap entry per source that still has elements, so merging `n` elements
/// from `k` sources takes O(n log k) time and O(k) space. It is a [`StreamingIterator`]: elements
/// are borrowed from the source that produced them until the merger is advanced again. Merging
/// is forward-only; dropping the merger part-way through simply discards the remaining sources.
///
/// Elements from the same source come out in their original order. The relative order of equal
/// elements from different sources is unspecified.
///
/// ```
/// use kway_merge::{IndexedCursor, KWayMerger};
/// use streaming_iterator::StreamingIterator;
///
/// let sources = [vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]];
/// let merger = KWayMerger::new_min(sources.iter().map(|s| IndexedCursor::new(s)));
/// assert_eq!(merger.cloned().collect::<Vec<_>>(), [1, 1, 2, 3, 4, 4, 5, 6]);
/// ```
#[derive(Debug)]
pub struct KWayMerger<C, Cmp> {
    heap: BinaryHeap<C, CursorOrder<Cmp>>,
    /// The cursor positioned at the element last yielded
    current: Option<C>,
    started: bool,
}

impl<C> KWayMerger<C, MinComparator>
where
    C: Cursor,
    C::Item: Ord,
{
    /// Merges `cursors` in ascending order of their items
    pub fn new_min<I>(cursors: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        Self::new(cursors, MinComparator)
    }
}

impl<C, Cmp> KWayMerger<C, Cmp>
where
    C: Cursor,
    Cmp: Comparator<C::Item>,
{
    /// Merges `cursors`, each of which must be sorted according to `comparator`
    pub fn new<I>(cursors: I, comparator: Cmp) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        Self::with_config(cursors, comparator, &MergeConfig::default())
    }

    /// Merges `cursors` under `comparator`, building the initial heap as `config` specifies.
    /// Sources that are exhausted from the start never enter the heap.
    pub fn with_config<I>(cursors: I, comparator: Cmp, config: &MergeConfig) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        let mut sources = 0usize;
        let live = cursors.into_iter().filter(|cursor| {
            sources += 1;
            !cursor.is_exhausted()
        });
        let heap = BinaryHeap::build(live, CursorOrder(comparator), config.build);
        debug!(
            sources,
            live = heap.len(),
            build = ?config.build,
            "Initialized k-way merge"
        );

        Self {
            heap,
            current: None,
            started: false,
        }
    }

    /// Returns the number of sources that are not exhausted. The source of the element most
    /// recently yielded is counted until the merger advances past that element.
    pub fn live_sources(&self) -> usize {
        let current = self
            .current
            .as_ref()
            .map_or(0, |cursor| usize::from(!cursor.is_exhausted()));
        self.heap.len() + current
    }

    /// Converts this merger into an [`Iterator`] over the elements it has not yet yielded, taking
    /// each one out of its source by value
    pub fn into_owned(self) -> OwnedMerge<C, Cmp>
    where
        C: TakeCursor,
    {
        let KWayMerger { mut heap, current, .. } = self;
        if let Some(mut cursor) = current {
            // The current element has already been yielded
            cursor.advance();
            if !cursor.is_exhausted() {
                heap.push(cursor);
            }
        }
        OwnedMerge { heap }
    }
}

impl<C, Cmp> StreamingIterator for KWayMerger<C, Cmp>
where
    C: Cursor,
    Cmp: Comparator<C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) {
        self.current = match self.current.take() {
            Some(mut cursor) => {
                cursor.advance();
                if cursor.is_exhausted() {
                    trace!(remaining = self.heap.len(), "Source exhausted");
                    self.heap.pop().ok()
                } else {
                    // Stays current without touching the heap if it is still the smallest
                    Some(self.heap.push_pop(cursor))
                }
            }
            None if !self.started => self.heap.pop().ok(),
            None => None,
        };
        self.started = true;
    }

    #[inline(always)]
    fn get(&self) -> Option<&C::Item> {
        self.current.as_ref().and_then(|cursor| cursor.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), None)
    }
}

/// An [`Iterator`] over the owned elements of a k-way merge. Constructed via
/// [`KWayMerger::into_owned`].
#[derive(Debug)]
pub struct OwnedMerge<C, Cmp> {
    heap: BinaryHeap<C, CursorOrder<Cmp>>,
}

impl<C, Cmp> Iterator for OwnedMerge<C, Cmp>
where
    C: TakeCursor,
    Cmp: Comparator<C::Item>,
{
    type Item = C::Owned;

    fn next(&mut self) -> Option<C::Owned> {
        let mut cursor = self.heap.peek_mut().ok()?;
        let item = cursor.take();
        if cursor.is_exhausted() {
            PeekMut::pop(cursor);
            trace!(remaining = self.heap.len(), "Source exhausted");
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), None)
    }
}

impl<C, Cmp> FusedIterator for OwnedMerge<C, Cmp>
where
    C: TakeCursor,
    Cmp: Comparator<C::Item>,
{
}

/// Merges sorted slices into a single ascending vector
///
/// ```
/// let merged = kway_merge::merge_slices(&[vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]]);
/// assert_eq!(merged, [1, 1, 2, 3, 4, 4, 5, 6]);
/// ```
pub fn merge_slices<T, S>(sources: &[S]) -> Vec<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    merge_slices_with(sources, MinComparator)
}

/// Merges slices, each sorted according to `compare`, into a single vector
pub fn merge_slices_by<T, S, F>(sources: &[S], compare: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> Ordering,
{
    merge_slices_with(sources, compare)
}

fn merge_slices_with<T, S, Cmp>(sources: &[S], comparator: Cmp) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    Cmp: Comparator<T>,
{
    let total = sources.iter().map(|s| s.as_ref().len()).sum();
    let mut merged = Vec::with_capacity(total);
    merged.extend(
        KWayMerger::new(
            sources.iter().map(|s| IndexedCursor::new(s.as_ref())),
            comparator,
        )
        .into_owned()
        .cloned(),
    );
    merged
}

/// Merges sorted linked lists into a single ascending list.
///
/// The input lists are consumed, and their nodes are relinked into the result rather than copied.
pub fn merge_lists<T, I>(lists: I) -> LinkedList<T>
where
    T: Ord,
    I: IntoIterator<Item = LinkedList<T>>,
{
    merge_lists_with(lists, MinComparator)
}

/// Merges linked lists, each sorted according to `compare`, into a single list
pub fn merge_lists_by<T, I, F>(lists: I, compare: F) -> LinkedList<T>
where
    I: IntoIterator<Item = LinkedList<T>>,
    F: Fn(&T, &T) -> Ordering,
{
    merge_lists_with(lists, compare)
}

fn merge_lists_with<T, I, Cmp>(lists: I, comparator: Cmp) -> LinkedList<T>
where
    I: IntoIterator<Item = LinkedList<T>>,
    Cmp: Comparator<T>,
{
    LinkedList::from_nodes(
        KWayMerger::new(lists.into_iter().map(LinkedCursor::new), comparator).into_owned(),
    )
}
