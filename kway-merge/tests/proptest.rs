use std::cmp::Reverse;

use kway_merge::{
    kth_smallest, kth_smallest_in_lists, merge_lists, merge_slices, BinaryHeap, BuildStrategy,
    Error, IndexedCursor, KWayMerger, LinkedList, MergeConfig, MinComparator,
};
use proptest::collection::vec;
use proptest::prelude::*;
use streaming_iterator::StreamingIterator;
use test_strategy::{proptest, Arbitrary};

fn sorted_sources() -> impl Strategy<Value = Vec<Vec<i16>>> {
    vec(vec(any::<i16>(), 0..40), 0..12).prop_map(|mut sources| {
        for source in &mut sources {
            source.sort();
        }
        sources
    })
}

fn build_strategy() -> impl Strategy<Value = BuildStrategy> {
    prop_oneof![Just(BuildStrategy::Heapify), Just(BuildStrategy::Incremental)]
}

fn sorted_concat(sources: &[Vec<i16>]) -> Vec<i16> {
    let mut all = sources.concat();
    all.sort();
    all
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum HeapOp {
    Push(i8),
    Pop,
    Peek,
}

#[proptest]
fn heap_matches_model(
    ops: Vec<HeapOp>,
    #[strategy(build_strategy())] build: BuildStrategy,
    initial: Vec<i8>,
) {
    let mut heap = BinaryHeap::build(initial.clone(), MinComparator, build);
    let mut model = initial
        .into_iter()
        .map(Reverse)
        .collect::<std::collections::BinaryHeap<_>>();
    assert!(heap.is_heap());

    for op in ops {
        match op {
            HeapOp::Push(v) => {
                heap.push(v);
                model.push(Reverse(v));
            }
            HeapOp::Pop => match model.pop() {
                Some(Reverse(v)) => assert_eq!(heap.pop(), Ok(v)),
                None => assert_eq!(heap.pop(), Err(Error::EmptyHeap)),
            },
            HeapOp::Peek => match model.peek() {
                Some(Reverse(v)) => assert_eq!(heap.peek(), Ok(v)),
                None => assert_eq!(heap.peek(), Err(Error::EmptyHeap)),
            },
        }
        assert!(heap.is_heap());
        assert_eq!(heap.len(), model.len());
    }
}

#[proptest]
fn merge_is_sorted_union(#[strategy(sorted_sources())] sources: Vec<Vec<i16>>) {
    let merged = merge_slices(&sources);
    assert_eq!(merged.len(), sources.iter().map(Vec::len).sum::<usize>());
    assert_eq!(merged, sorted_concat(&sources));
}

#[proptest]
fn streaming_merge_matches_owned(
    #[strategy(sorted_sources())] sources: Vec<Vec<i16>>,
    #[strategy(build_strategy())] build: BuildStrategy,
) {
    let config = MergeConfig::default().with_build(build);
    let merger = KWayMerger::with_config(
        sources.iter().map(|s| IndexedCursor::new(s)),
        MinComparator,
        &config,
    );
    assert_eq!(merger.cloned().collect::<Vec<_>>(), merge_slices(&sources));
}

#[proptest]
fn linked_merge_matches_slices(#[strategy(sorted_sources())] sources: Vec<Vec<i16>>) {
    let lists = sources.iter().cloned().map(LinkedList::from);
    let merged = merge_lists(lists);
    assert_eq!(merged.len(), sources.iter().map(Vec::len).sum::<usize>());
    assert_eq!(merged.into_vec(), sorted_concat(&sources));
}

#[proptest]
fn kth_smallest_is_sorted_index(
    #[strategy(sorted_sources())] sources: Vec<Vec<i16>>,
    #[strategy(1usize..500)] k: usize,
) {
    let all = sorted_concat(&sources);
    let expected = all.get(k - 1).copied().ok_or(Error::NotFound {
        k,
        available: all.len(),
    });
    assert_eq!(kth_smallest(&sources, k), expected);

    let lists = sources.iter().cloned().map(LinkedList::from).collect::<Vec<_>>();
    assert_eq!(kth_smallest_in_lists(lists, k), expected);
}

#[proptest]
fn extreme_ranks(#[strategy(sorted_sources())] sources: Vec<Vec<i16>>) {
    let all = sorted_concat(&sources);
    prop_assume!(!all.is_empty());
    assert_eq!(kth_smallest(&sources, 1), Ok(all[0]));
    assert_eq!(kth_smallest(&sources, all.len()), Ok(all[all.len() - 1]));
}
