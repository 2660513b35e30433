//! A comparator-driven binary heap, and a `k`-way merge built on it.
//!
//! The `k`-way merge is useful when, given `k` sets of sorted data, you want to combine them into
//! one sorted sequence, or find the `n` smallest elements in between the sets, without sorting
//! the entire data set. The merge keeps one heap entry per source, so it runs in O(n log k) time
//! and O(k) space.
//!
//! Sources are abstracted behind the [`Cursor`] trait: a position within one sorted sequence.
//! Slices are read through an [`IndexedCursor`], owned linked lists are consumed through a
//! [`LinkedCursor`] (whose nodes are relinked into the output rather than copied), and any
//! [`StreamingIterator`](streaming_iterator::StreamingIterator) can be wrapped in a
//! [`StreamingCursor`].
//!
//! ```
//! use kway_merge::{IndexedCursor, KWayMerger};
//! use streaming_iterator::StreamingIterator;
//!
//! let (a, b, c): (Vec<u32>, Vec<u32>, Vec<u32>) =
//!     ((1..2000).collect(), (1..20000).collect(), (1..50000).collect());
//! let merger = KWayMerger::new_min([&a, &b, &c].map(|s| IndexedCursor::new(s)));
//! assert_eq!(merger.cloned().take(5).collect::<Vec<_>>(), [1, 1, 1, 2, 2]);
//! ```
//!
//! Order-statistic queries stop after `k` extractions:
//!
//! ```
//! use kway_merge::{kth_smallest_in_lists, LinkedList};
//!
//! let lists = vec![
//!     LinkedList::from(vec![1, 4, 5]),
//!     LinkedList::from(vec![1, 3, 4]),
//!     LinkedList::from(vec![2, 6]),
//! ];
//! assert_eq!(kth_smallest_in_lists(lists, 4), Ok(3));
//! ```
mod comparator;
mod config;
mod cursor;
mod error;
pub mod heap;
pub mod list;
mod merge;
mod select;

pub use comparator::{Comparator, MaxComparator, MinComparator};
pub use config::{BuildStrategy, MergeConfig};
pub use cursor::{Cursor, IndexedCursor, LinkedCursor, StreamingCursor, TakeCursor};
pub use error::{Error, Result};
pub use heap::{BinaryHeap, PeekMut};
pub use list::{LinkedList, ListNode};
pub use merge::{
    merge_lists, merge_lists_by, merge_slices, merge_slices_by, KWayMerger, OwnedMerge,
};
pub use select::{kth_smallest, kth_smallest_by, kth_smallest_in_lists};
