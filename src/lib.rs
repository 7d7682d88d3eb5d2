//! Binary-Heap Priority Queue for Rust
//!
//! This crate provides [`PriorityQueue`], an array-backed binary heap that is
//! generic over three things:
//!
//! - **Element type** `T`
//! - **Comparator** `C`: any [`Compare`] implementation decides which element
//!   ranks highest; [`MaxComparator`] (the default) puts the greatest on top
//! - **Storage** `S`: any [`Storage`] buffer offering indexed access, append
//!   and remove-last; `Vec<T>` is the default
//!
//! # Features
//!
//! - `push` and `pop` in O(log n), `top` in O(1)
//! - Linear-time adoption of an existing buffer with [`PriorityQueue::from_storage`]
//! - `smallvec-storage`: enables a `SmallVec` backend for small, allocation-free queues
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(5);
//! queue.push(1);
//! queue.push(9);
//!
//! assert_eq!(queue.top(), Ok(&9));
//! assert_eq!(queue.pop(), Some(9));
//! assert_eq!(queue.pop(), Some(5));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.top(), Err(QueueError::Empty));
//! ```

pub mod compare;
pub mod priority_queue;
pub mod stdlib_compat;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod inspect;

// Re-export the main types for convenience
pub use compare::{FnComparator, KeyComparator, MaxComparator, MinComparator};
pub use priority_queue::{swap, IntoIterSorted, PopIter, PriorityQueue};
pub use storage::Storage;
pub use traits::{Compare, QueueError};
