//! Pluggable storage backends for the heap buffer
//!
//! The queue never manages memory itself. It keeps its elements in a linear,
//! index-addressable buffer supplied by a [`Storage`] implementation and acts
//! on it purely through index arithmetic.
//!
//! - `Vec<T>`: Default backend
//! - `VecDeque<T>`: Ring-buffer backend, useful when the buffer is handed in
//!   from code that already works with a deque
//! - `SmallVec<[T; N]>`: Inline backend that avoids allocating for small
//!   queues (requires the `smallvec-storage` feature)
//!
//! # Example
//!
//! ```rust
//! use std::collections::VecDeque;
//! use rust_priority_queue::PriorityQueue;
//!
//! let mut queue: PriorityQueue<i32, VecDeque<i32>> = PriorityQueue::default();
//! queue.push(2);
//! queue.push(7);
//! assert_eq!(queue.pop(), Some(7));
//! ```

use std::collections::VecDeque;

#[cfg(feature = "smallvec-storage")]
use smallvec::{Array, SmallVec};

/// Trait for the linear buffer backing a priority queue
///
/// Offsets are 0-based; the queue converts its 1-based heap indices before
/// calling in. `swap` panics on out-of-bounds offsets like slice indexing
/// does, and the queue never passes one.
pub trait Storage<T>: Default {
    /// Number of elements in the buffer
    fn len(&self) -> usize;

    /// Returns true if the buffer holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `offset`, or `None` past the end
    fn get(&self, offset: usize) -> Option<&T>;

    /// Element at offset 0
    fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Exchange the elements at two offsets
    fn swap(&mut self, a: usize, b: usize);

    /// Append an element at the end
    fn push(&mut self, item: T);

    /// Remove and return the last element
    fn pop(&mut self) -> Option<T>;

    /// Capacity hint for at least `additional` more elements
    fn reserve(&mut self, additional: usize);

    /// Remove every element
    fn clear(&mut self);

    /// Convert into a `Vec` in storage order
    fn into_vec(self) -> Vec<T>;
}

impl<T> Storage<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, offset: usize) -> Option<&T> {
        self.as_slice().get(offset)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn into_vec(self) -> Vec<T> {
        self
    }
}

impl<T> Storage<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, offset: usize) -> Option<&T> {
        VecDeque::get(self, offset)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    #[inline]
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn into_vec(self) -> Vec<T> {
        Vec::from(self)
    }
}

#[cfg(feature = "smallvec-storage")]
impl<T, const N: usize> Storage<T> for SmallVec<[T; N]>
where
    [T; N]: Array<Item = T>,
{
    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn get(&self, offset: usize) -> Option<&T> {
        self.as_slice().get(offset)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline]
    fn push(&mut self, item: T) {
        SmallVec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        SmallVec::pop(self)
    }

    fn reserve(&mut self, additional: usize) {
        SmallVec::reserve(self, additional);
    }

    fn clear(&mut self) {
        SmallVec::clear(self);
    }

    fn into_vec(self) -> Vec<T> {
        SmallVec::into_vec(self)
    }
}
