//! Crate-internal view of the heap layout
//!
//! Unit tests use these helpers to check the heap property directly on the
//! backing buffer and to drive `heapify`/`percolate_down` on buffers in
//! arbitrary order. Nothing here is part of the public API.

use crate::priority_queue::PriorityQueue;
use crate::storage::Storage;
use crate::traits::Compare;

/// Backing buffer of `queue` in heap order
pub(crate) fn storage_of<T, S: Storage<T>, C: Compare<T>>(queue: &PriorityQueue<T, S, C>) -> &S {
    queue.raw_storage()
}

/// Wraps `storage` without restoring heap order
pub(crate) fn from_raw_parts<T, S: Storage<T>, C: Compare<T>>(
    storage: S,
    cmp: C,
) -> PriorityQueue<T, S, C> {
    PriorityQueue::from_raw_parts(storage, cmp)
}

pub(crate) fn heapify<T, S: Storage<T>, C: Compare<T>>(queue: &mut PriorityQueue<T, S, C>) {
    queue.heapify();
}

pub(crate) fn percolate_down<T, S: Storage<T>, C: Compare<T>>(
    queue: &mut PriorityQueue<T, S, C>,
    index: usize,
) -> bool {
    queue.percolate_down(index)
}

/// Returns true if no child outranks its parent anywhere in the buffer
pub(crate) fn is_heap<T, S: Storage<T>, C: Compare<T>>(queue: &PriorityQueue<T, S, C>) -> bool {
    let storage = storage_of(queue);
    let cmp = queue.comparator();
    (2..=storage.len()).all(|index| {
        match (storage.get(index / 2 - 1), storage.get(index - 1)) {
            (Some(parent), Some(child)) => !cmp.less(parent, child),
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{KeyComparator, MaxComparator, MinComparator};
    use proptest::prelude::*;
    use std::collections::VecDeque;

    fn snapshot<T: Clone, S: Storage<T>, C>(queue: &PriorityQueue<T, S, C>) -> Vec<T>
    where
        C: Compare<T>,
    {
        let storage = storage_of(queue);
        (0..storage.len()).filter_map(|offset| storage.get(offset).cloned()).collect()
    }

    #[test]
    fn test_percolate_down_reports_movement() {
        let mut queue = from_raw_parts(vec![1, 9, 4], MaxComparator);
        assert!(percolate_down(&mut queue, 1));
        assert_eq!(snapshot(&queue), vec![9, 1, 4]);
        assert!(!percolate_down(&mut queue, 1));
    }

    #[test]
    fn test_percolate_down_prefers_left_on_tie() {
        let by_rank = KeyComparator(|entry: &(i32, char)| entry.0);
        let mut queue = from_raw_parts(vec![(0, 'r'), (5, 'a'), (5, 'b')], by_rank);
        assert!(percolate_down(&mut queue, 1));
        assert_eq!(snapshot(&queue), vec![(5, 'a'), (0, 'r'), (5, 'b')]);
    }

    #[test]
    fn test_percolate_down_walks_to_leaf() {
        let mut queue = from_raw_parts(vec![0, 8, 7, 6, 5, 4, 3], MaxComparator);
        assert!(percolate_down(&mut queue, 1));
        assert_eq!(snapshot(&queue), vec![8, 6, 7, 0, 5, 4, 3]);
        assert!(is_heap(&queue));
    }

    #[test]
    fn test_percolate_down_on_leaf_and_empty() {
        let mut queue = from_raw_parts(vec![1, 2, 3], MaxComparator);
        assert!(!percolate_down(&mut queue, 3));

        let mut empty = from_raw_parts(Vec::<i32>::new(), MaxComparator);
        assert!(!percolate_down(&mut empty, 1));
    }

    #[test]
    fn test_heapify_arbitrary_order() {
        let mut queue = from_raw_parts(vec![3, 1, 6, 5, 2, 4], MaxComparator);
        assert!(!is_heap(&queue));
        heapify(&mut queue);
        assert!(is_heap(&queue));
        assert_eq!(queue.top(), Ok(&6));
    }

    #[test]
    fn test_is_heap_min_order() {
        let queue = from_raw_parts(vec![1, 3, 2, 7], MinComparator);
        assert!(is_heap(&queue));
        let queue = from_raw_parts(vec![3, 1, 2], MinComparator);
        assert!(!is_heap(&queue));
    }

    #[test]
    fn test_push_starts_at_parent_of_new_leaf() {
        // Six elements: the seventh leaf lands at heap index 7, parent 3
        let mut queue = PriorityQueue::from_storage(MaxComparator, vec![10, 9, 3, 8, 7, 2]);
        queue.push(5);
        assert_eq!(snapshot(&queue), vec![10, 9, 5, 8, 7, 2, 3]);
        assert!(is_heap(&queue));
    }

    proptest! {
        #[test]
        fn test_heap_invariant_under_operations(
            ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)
        ) {
            let mut queue = PriorityQueue::new();
            for (should_pop, value) in ops {
                if should_pop {
                    queue.pop();
                } else {
                    queue.push(value);
                }
                prop_assert!(is_heap(&queue));
            }
        }

        #[test]
        fn test_min_heap_invariant_with_deque(
            ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)
        ) {
            let mut queue: PriorityQueue<i32, VecDeque<i32>, MinComparator> =
                PriorityQueue::default();
            for (should_pop, value) in ops {
                if should_pop {
                    queue.pop();
                } else {
                    queue.push(value);
                }
                prop_assert!(is_heap(&queue));
            }
        }

        #[test]
        fn test_heapify_establishes_invariant(values in prop::collection::vec(any::<i16>(), 0..300)) {
            let queue = PriorityQueue::from_storage(MaxComparator, values);
            prop_assert!(is_heap(&queue));
        }

        #[test]
        fn test_heapify_is_idempotent(values in prop::collection::vec(-50i32..50, 0..300)) {
            let mut queue = from_raw_parts(values, MaxComparator);
            heapify(&mut queue);
            let once = snapshot(&queue);
            heapify(&mut queue);
            prop_assert_eq!(snapshot(&queue), once);
        }

        #[test]
        fn test_heapify_preserves_multiset(values in prop::collection::vec(-50i32..50, 0..300)) {
            let mut expected = values.clone();
            let mut queue = from_raw_parts(values, MaxComparator);
            heapify(&mut queue);

            let mut actual = snapshot(&queue);
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
        }
    }
}
