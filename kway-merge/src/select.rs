//! Order-statistic queries over sorted sources.
//!
//! Finding the k-th smallest element across `k'` sorted sources only needs `k` extractions from
//! the merge heap, i.e. O(k log k') work, regardless of how many elements the sources hold.

use std::cmp::Ordering;

use streaming_iterator::StreamingIterator;
use tracing::debug;

use crate::comparator::{Comparator, MinComparator};
use crate::cursor::{Cursor, IndexedCursor, LinkedCursor, TakeCursor};
use crate::error::{Error, Result};
use crate::list::{LinkedList, ListNode};
use crate::merge::{KWayMerger, OwnedMerge};

/// Ranks are 1-indexed
fn check_rank(k: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidRange { k });
    }
    Ok(())
}

fn not_found(k: usize, available: usize) -> Error {
    debug!(k, available, "Sources exhausted before reaching requested rank");
    Error::NotFound { k, available }
}

impl<C, Cmp> KWayMerger<C, Cmp>
where
    C: Cursor,
    Cmp: Comparator<C::Item>,
{
    /// Advances the merger `k` times, returning the `k`-th smallest of the elements not yet
    /// yielded.
    ///
    /// Returns [`Error::InvalidRange`] without advancing if `k` is 0, and [`Error::NotFound`] if
    /// the sources run out first.
    pub fn nth_smallest(&mut self, k: usize) -> Result<&C::Item> {
        check_rank(k)?;
        for available in 0..k {
            self.advance();
            if self.get().is_none() {
                return Err(not_found(k, available));
            }
        }
        (*self).get().ok_or(Error::NotFound { k, available: k })
    }
}

impl<C, Cmp> OwnedMerge<C, Cmp>
where
    C: TakeCursor,
    Cmp: Comparator<C::Item>,
{
    /// Consumes the merge, returning the `k`-th smallest of its remaining elements by value
    pub fn nth_smallest(mut self, k: usize) -> Result<C::Owned> {
        check_rank(k)?;
        let mut available = 0;
        for item in self.by_ref() {
            available += 1;
            if available == k {
                return Ok(item);
            }
        }
        Err(not_found(k, available))
    }
}

/// Returns the `k`-th smallest (1-indexed) element across sorted slices
///
/// ```
/// use kway_merge::{kth_smallest, Error};
///
/// let sources = [vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// assert_eq!(kth_smallest(&sources, 5), Ok(5));
/// assert_eq!(kth_smallest(&sources, 0), Err(Error::InvalidRange { k: 0 }));
/// assert_eq!(
///     kth_smallest(&sources, 10),
///     Err(Error::NotFound { k: 10, available: 9 })
/// );
/// ```
pub fn kth_smallest<T, S>(sources: &[S], k: usize) -> Result<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    kth_smallest_with(sources, k, MinComparator)
}

/// Returns the `k`-th element, under `compare`, across slices each sorted by `compare`
pub fn kth_smallest_by<T, S, F>(sources: &[S], k: usize, compare: F) -> Result<T>
where
    T: Clone,
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> Ordering,
{
    kth_smallest_with(sources, k, compare)
}

fn kth_smallest_with<T, S, Cmp>(sources: &[S], k: usize, comparator: Cmp) -> Result<T>
where
    T: Clone,
    S: AsRef<[T]>,
    Cmp: Comparator<T>,
{
    check_rank(k)?;
    KWayMerger::new(
        sources.iter().map(|s| IndexedCursor::new(s.as_ref())),
        comparator,
    )
    .into_owned()
    .nth_smallest(k)
    .cloned()
}

/// Returns the `k`-th smallest (1-indexed) element across sorted linked lists, consuming them
pub fn kth_smallest_in_lists<T, I>(lists: I, k: usize) -> Result<T>
where
    T: Ord,
    I: IntoIterator<Item = LinkedList<T>>,
{
    check_rank(k)?;
    KWayMerger::new_min(lists.into_iter().map(LinkedCursor::new))
        .into_owned()
        .nth_smallest(k)
        .map(ListNode::into_value)
}
