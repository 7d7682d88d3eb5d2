//! Standard library compatibility layer
//!
//! Conversions between [`PriorityQueue`] and `std::collections::BinaryHeap`.
//! Both are max-heaps over `T: Ord` by default, so a queue using
//! [`MaxComparator`] round-trips through `BinaryHeap` without changing which
//! element is on top.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BinaryHeap;
//! use rust_priority_queue::PriorityQueue;
//!
//! let heap = BinaryHeap::from(vec![3, 8, 1]);
//! let mut queue = PriorityQueue::from(heap);
//! assert_eq!(queue.pop(), Some(8));
//!
//! let heap: BinaryHeap<i32> = queue.into();
//! assert_eq!(heap.peek(), Some(&3));
//! ```

use std::collections::BinaryHeap;

use crate::compare::MaxComparator;
use crate::priority_queue::PriorityQueue;
use crate::storage::Storage;

impl<T: Ord> From<BinaryHeap<T>> for PriorityQueue<T> {
    /// Adopts the heap's buffer and heapifies it under [`MaxComparator`]
    fn from(heap: BinaryHeap<T>) -> Self {
        PriorityQueue::from_storage(MaxComparator, heap.into_vec())
    }
}

impl<T: Ord, S: Storage<T>> From<PriorityQueue<T, S, MaxComparator>> for BinaryHeap<T> {
    fn from(queue: PriorityQueue<T, S, MaxComparator>) -> Self {
        BinaryHeap::from(queue.into_storage().into_vec())
    }
}
