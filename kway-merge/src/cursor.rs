//! Cursors over sorted sources.
//!
//! A [`Cursor`] is a position within one sorted sequence: it either holds a current value, or it
//! is exhausted. The k-way merge is written against this capability only, so it does not care
//! whether a source is a slice ([`IndexedCursor`]), an owned linked list ([`LinkedCursor`]) or a
//! [`StreamingIterator`] ([`StreamingCursor`]).

use streaming_iterator::StreamingIterator;

use crate::list::{LinkedList, ListNode};

/// A position within a sorted source.
///
/// A freshly constructed cursor is positioned at the first element of its source. Once
/// [`value`](Cursor::value) returns `None` the cursor is exhausted, and advancing it further has
/// no effect.
pub trait Cursor {
    type Item: ?Sized;

    /// Returns the element the cursor is positioned at, or `None` if it is exhausted
    fn value(&self) -> Option<&Self::Item>;

    /// Moves the cursor to the next element of its source
    fn advance(&mut self);

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.value().is_none()
    }
}

/// A [`Cursor`] that can hand out its current element by value.
pub trait TakeCursor: Cursor {
    type Owned;

    /// Removes the current element and advances past it
    fn take(&mut self) -> Option<Self::Owned>;
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline(always)]
    fn value(&self) -> Option<&Self::Item> {
        (**self).value()
    }

    #[inline(always)]
    fn advance(&mut self) {
        (**self).advance()
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline(always)]
    fn value(&self) -> Option<&Self::Item> {
        (**self).value()
    }

    #[inline(always)]
    fn advance(&mut self) {
        (**self).advance()
    }
}

impl<C> TakeCursor for Box<C>
where
    C: TakeCursor + ?Sized,
{
    type Owned = C::Owned;

    #[inline(always)]
    fn take(&mut self) -> Option<Self::Owned> {
        (**self).take()
    }
}

/// A non-destructive cursor over a slice
#[derive(Debug, Clone)]
pub struct IndexedCursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T> IndexedCursor<'a, T> {
    /// Positions a cursor at the first element of `data`
    pub fn new(data: &'a [T]) -> Self {
        Self { data, pos: 0 }
    }

    /// Index of the current element within the slice
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The elements not yet passed over, starting at the current one
    pub fn remaining(&self) -> &'a [T] {
        self.data.get(self.pos..).unwrap_or_default()
    }
}

impl<T> Cursor for IndexedCursor<'_, T> {
    type Item = T;

    #[inline(always)]
    fn value(&self) -> Option<&T> {
        self.data.get(self.pos)
    }

    #[inline(always)]
    fn advance(&mut self) {
        if self.pos < self.data.len() {
            self.pos += 1;
        }
    }
}

impl<'a, T> TakeCursor for IndexedCursor<'a, T> {
    type Owned = &'a T;

    #[inline]
    fn take(&mut self) -> Option<&'a T> {
        let value = self.data.get(self.pos)?;
        self.pos += 1;
        Some(value)
    }
}

/// A destructive cursor over an owned [`LinkedList`].
///
/// Constructing the cursor consumes the list: advancing frees the nodes passed over, and
/// [`take`](TakeCursor::take) detaches the current node so it can be linked into another list.
#[derive(Debug)]
pub struct LinkedCursor<T> {
    rest: LinkedList<T>,
}

impl<T> LinkedCursor<T> {
    /// Positions a cursor at the head of `list`
    pub fn new(list: LinkedList<T>) -> Self {
        Self { rest: list }
    }

    /// Consumes the cursor, returning the nodes that have not been passed over
    pub fn into_remaining(self) -> LinkedList<T> {
        self.rest
    }
}

impl<T> From<LinkedList<T>> for LinkedCursor<T> {
    fn from(list: LinkedList<T>) -> Self {
        Self::new(list)
    }
}

impl<T> Cursor for LinkedCursor<T> {
    type Item = T;

    #[inline(always)]
    fn value(&self) -> Option<&T> {
        self.rest.head().map(|node| &node.value)
    }

    #[inline]
    fn advance(&mut self) {
        self.rest.pop_front_node();
    }
}

impl<T> TakeCursor for LinkedCursor<T> {
    type Owned = Box<ListNode<T>>;

    #[inline]
    fn take(&mut self) -> Option<Box<ListNode<T>>> {
        self.rest.pop_front_node()
    }
}

/// Adapts a [`StreamingIterator`], which starts *before* its first element, into a [`Cursor`],
/// which starts *at* it.
#[derive(Debug, Clone)]
pub struct StreamingCursor<I> {
    inner: I,
}

impl<I: StreamingIterator> StreamingCursor<I> {
    /// Advances `inner` onto its first element
    pub fn new(mut inner: I) -> Self {
        inner.advance();
        Self { inner }
    }
}

impl<I: StreamingIterator> Cursor for StreamingCursor<I> {
    type Item = I::Item;

    #[inline(always)]
    fn value(&self) -> Option<&I::Item> {
        self.inner.get()
    }

    #[inline(always)]
    fn advance(&mut self) {
        // Not every streaming iterator is fused
        if self.inner.get().is_some() {
            self.inner.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn drain<C>(mut cursor: C) -> Vec<C::Item>
    where
        C: Cursor,
        C::Item: Clone,
    {
        let mut out = vec![];
        while let Some(v) = cursor.value() {
            out.push(v.clone());
            cursor.advance();
        }
        out
    }

    #[test]
    fn indexed_cursor() {
        let data = [1, 3, 5];
        let mut cursor = IndexedCursor::new(&data);
        assert_eq!(cursor.value(), Some(&1));
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), &[3, 5]);
        assert_eq!(cursor.take(), Some(&3));
        assert_eq!(cursor.take(), Some(&5));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.take(), None);
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), &[] as &[i32]);

        // The source is untouched
        assert_eq!(drain(IndexedCursor::new(&data)), vec![1, 3, 5]);
    }

    #[test]
    fn empty_cursors_start_exhausted() {
        assert!(IndexedCursor::<u8>::new(&[]).is_exhausted());
        assert!(LinkedCursor::<u8>::new(LinkedList::new()).is_exhausted());
        assert!(StreamingCursor::new(streaming_iterator::empty::<u8>()).is_exhausted());
    }

    #[test]
    fn linked_cursor_take_detaches() {
        let mut cursor = LinkedCursor::new(LinkedList::from(vec![1, 2, 3]));
        let node = cursor.take().unwrap();
        assert_eq!(node.value, 1);
        assert!(node.next().is_none());
        assert_eq!(cursor.value(), Some(&2));

        cursor.advance();
        assert_eq!(cursor.into_remaining().into_vec(), vec![3]);
    }

    #[test]
    fn long_linked_cursor_drops_iteratively() {
        let mut cursor = LinkedCursor::new((0..1_000_000u32).collect());
        cursor.advance();
        assert_eq!(cursor.value(), Some(&1));
        drop(cursor);

        let remaining = LinkedCursor::new((0..1_000_000u32).collect()).into_remaining();
        assert_eq!(remaining.len(), 1_000_000);
        drop(remaining);
    }

    #[test]
    fn linked_cursor_advance() {
        let cursor = LinkedCursor::from(LinkedList::from(vec![4, 4, 9]));
        assert_eq!(drain(cursor), vec![4, 4, 9]);
    }

    #[test]
    fn streaming_cursor() {
        let cursor = StreamingCursor::new(streaming_iterator::convert(vec![2, 4, 6]));
        assert_eq!(drain(cursor), vec![2, 4, 6]);
    }

    #[test]
    fn boxed_and_borrowed_cursors() {
        let data = [7, 8];
        let mut indexed = IndexedCursor::new(&data);
        indexed.advance();
        assert_eq!(drain(&mut indexed), vec![8]);
        assert!(indexed.is_exhausted());

        let boxed: Box<dyn Cursor<Item = i32>> = Box::new(LinkedCursor::new((1..=3).collect()));
        assert_eq!(drain(boxed), vec![1, 2, 3]);
    }
}
