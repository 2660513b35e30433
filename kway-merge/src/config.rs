use serde::{Deserialize, Serialize};

/// How a heap is populated from a batch of initial entries
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStrategy {
    /// Collect the batch and sift every internal node down once, in O(n)
    #[default]
    Heapify,
    /// Push each entry in turn, in O(n log n)
    Incremental,
}

/// Options for constructing a [`KWayMerger`](crate::KWayMerger)
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Strategy used to build the heap over the initial source frontier
    pub build: BuildStrategy,
}

impl MergeConfig {
    /// Sets the heap build strategy
    pub fn with_build(mut self, build: BuildStrategy) -> Self {
        self.build = build;
        self
    }
}
