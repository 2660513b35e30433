//! An owned, singly linked list whose nodes can be detached and relinked.
//!
//! The k-way merge over linked sources does not allocate: it moves each node out of its source
//! list and splices it onto the tail of the output list, reusing the node's own `next` slot.

use std::fmt::{self, Debug};
use std::iter::FusedIterator;

/// A link to the next node of a list, or `None` at the end
pub(crate) type Link<T> = Option<Box<ListNode<T>>>;

/// A single node of a [`LinkedList`].
///
/// Nodes can only be chained together by a [`LinkedList`], which owns the chain and frees it one
/// node at a time. A node handed out on its own is always detached.
pub struct ListNode<T> {
    pub value: T,
    pub(crate) next: Link<T>,
}

impl<T> ListNode<T> {
    /// Creates a detached node
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Returns the node following this one in its list
    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.as_deref()
    }

    /// Consumes a boxed node, returning its value
    pub fn into_value(self: Box<Self>) -> T {
        let ListNode { value, next } = *self;
        drop_link(next);
        value
    }
}

impl<T: Debug> Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("value", &self.value)
            .field("next", &Chain(self.next()))
            .finish()
    }
}

/// Formats the values of a chain of nodes as a flat list
struct Chain<'a, T>(Option<&'a ListNode<T>>);

impl<T: Debug> Debug for Chain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(Iter { next: self.0 }).finish()
    }
}

/// Drops a chain of nodes one at a time, so that long lists don't recurse through [`Box`]'s drop
fn drop_link<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// An owned singly linked list.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of values in the list, in O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first node of the list, if any
    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    /// Prepends `value` to the list
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    /// Removes the first value of the list, or returns `None` if it is empty
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_front_node().map(|node| node.value)
    }

    /// Unlinks the first node, returning it detached from the rest of the list
    pub(crate) fn pop_front_node(&mut self) -> Option<Box<ListNode<T>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Links detached nodes together in iteration order, without reallocating them
    pub(crate) fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Box<ListNode<T>>>,
    {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for node in nodes {
            debug_assert!(node.next.is_none(), "node was not detached from its source");
            tail = &mut tail.insert(node).next;
            list.len += 1;
        }
        list
    }

    #[must_use]
    pub fn into_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        while let Some(value) = self.pop_front() {
            out.push(value);
        }
        out
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        drop_link(self.head.take());
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_nodes(iter.into_iter().map(|v| Box::new(ListNode::new(v))))
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

/// A borrowing iterator over the values of a [`LinkedList`]. Constructed via
/// [`LinkedList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over the values of a [`LinkedList`]
#[derive(Debug)]
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn collect_and_iterate() {
        let list: LinkedList<_> = (1..=4).collect();
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(list.head().map(|n| n.value), Some(1));
        assert_eq!(list.into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn push_and_pop_front() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        list.push_front(2);
        list.push_front(1);
        assert_eq!(format!("{list:?}"), "[1, 2]");
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn node_links() {
        let list = LinkedList::from(vec!['a', 'b', 'c']);
        let second = list.head().and_then(ListNode::next);
        assert_eq!(second.map(|n| n.value), Some('b'));
        assert_eq!(
            format!("{:?}", list.head().unwrap()),
            "ListNode { value: 'a', next: ['b', 'c'] }"
        );
        assert_eq!(list.clone(), list);
        assert_eq!(list.into_iter().collect::<String>(), "abc");
    }

    #[test]
    fn detached_nodes() {
        let mut list = LinkedList::from(vec![1, 2, 3]);
        let node = list.pop_front_node().unwrap();
        assert!(node.next().is_none());
        assert_eq!(format!("{node:?}"), "ListNode { value: 1, next: [] }");
        assert_eq!(node.into_value(), 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.into_vec(), vec![2, 3]);
    }

    #[test]
    fn long_list_drops_iteratively() {
        let list: LinkedList<u32> = (0..1_000_000).collect();
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    #[test]
    fn long_list_formats_iteratively() {
        let list: LinkedList<u8> = std::iter::repeat(0).take(1_000_000).collect();
        let formatted = format!("{:?}", list.head().unwrap());
        assert!(formatted.starts_with("ListNode { value: 0, next: [0, 0"));
    }
}
