use thiserror::Error;

/// Errors returned by heap operations and order-statistic queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// [`BinaryHeap::pop`](crate::BinaryHeap::pop) or [`BinaryHeap::peek`](crate::BinaryHeap::peek)
    /// was called on a heap with no entries
    #[error("Attempted to access the minimum of an empty heap")]
    EmptyHeap,

    /// An order-statistic query was made with a rank below 1
    #[error("Invalid rank {k}; ranks are 1-indexed")]
    InvalidRange { k: usize },

    /// An order-statistic query asked for more elements than the sources hold
    #[error("Rank {k} requested, but only {available} elements are available")]
    NotFound { k: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
