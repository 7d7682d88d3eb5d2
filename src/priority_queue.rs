//! Binary-heap priority queue
//!
//! [`PriorityQueue`] keeps its elements in an implicit binary heap laid out
//! over a linear [`Storage`] buffer. Heap index `i` (1-based, root at 1) maps
//! to storage offset `i - 1`, and node `i` has children `2i` and `2i + 1`.
//! Which element counts as "highest" is decided by a [`Compare`] value.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `push`           | O(log n)   |
//! | `pop`            | O(log n)   |
//! | `top` / `peek`   | O(1)       |
//! | `from_storage`   | O(n)       |
//! | `from_iter_with` | O(n log n) |
//! | `swap`           | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! for value in [5, 1, 9, 3, 7] {
//!     queue.push(value);
//! }
//!
//! assert_eq!(queue.top(), Ok(&9));
//! assert_eq!(queue.pop(), Some(9));
//! assert_eq!(queue.pop(), Some(7));
//! assert_eq!(queue.len(), 3);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use tracing::trace;

use crate::compare::{FnComparator, KeyComparator, MaxComparator, MinComparator};
use crate::storage::Storage;
use crate::traits::{Compare, QueueError};

/// A priority queue backed by a binary heap
///
/// - `T`: element type
/// - `S`: backing buffer, `Vec<T>` by default
/// - `C`: ordering predicate, [`MaxComparator`] by default (greatest on top)
///
/// The top element is the one no other element outranks under `C`. Among
/// elements that compare equal the extraction order is unspecified.
pub struct PriorityQueue<T, S = Vec<T>, C = MaxComparator> {
    storage: S,
    cmp: C,
    _marker: PhantomData<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty max-queue ordered by `T: Ord`
    pub fn new() -> Self {
        Self::with_comparator(MaxComparator)
    }

    /// Creates an empty max-queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MaxComparator)
    }
}

impl<T: Ord> PriorityQueue<T, Vec<T>, MinComparator> {
    /// Creates an empty min-queue: the least element is on top
    ///
    /// ```rust
    /// use rust_priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new_min();
    /// queue.push(3);
    /// queue.push(1);
    /// assert_eq!(queue.pop(), Some(1));
    /// ```
    pub fn new_min() -> Self {
        Self::with_comparator(MinComparator)
    }
}

impl<T, F> PriorityQueue<T, Vec<T>, FnComparator<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by a `less` closure
    ///
    /// `less(a, b)` returns true when `a` ranks strictly below `b`.
    pub fn new_by(less: F) -> Self {
        Self::with_comparator(FnComparator(less))
    }
}

impl<T, F, K> PriorityQueue<T, Vec<T>, KeyComparator<F>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Creates an empty queue that puts the element with the greatest key on top
    pub fn new_by_key(key: F) -> Self {
        Self::with_comparator(KeyComparator(key))
    }
}

impl<T, S: Storage<T>, C: Compare<T>> PriorityQueue<T, S, C> {
    /// Creates an empty queue with the given comparator
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            storage: S::default(),
            cmp,
            _marker: PhantomData,
        }
    }

    /// Creates an empty queue with the given comparator and capacity hint
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        let mut queue = Self::with_comparator(cmp);
        queue.storage.reserve(capacity);
        queue
    }

    /// Builds a queue by pushing every element of `iter` in turn
    ///
    /// Each push restores the heap on its own, so no bulk pass follows.
    /// Use [`from_storage`](Self::from_storage) to adopt a whole buffer in
    /// linear time instead.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity_and_comparator(iter.size_hint().0, cmp);
        for item in iter {
            queue.push(item);
        }
        queue
    }

    /// Adopts an existing buffer in arbitrary order and heapifies it
    ///
    /// The buffer is moved in; clone it first to keep the original.
    ///
    /// # Time Complexity
    /// O(n)
    ///
    /// ```rust
    /// use rust_priority_queue::{MinComparator, PriorityQueue};
    ///
    /// let mut queue = PriorityQueue::from_storage(MinComparator, vec![4, 8, 1]);
    /// assert_eq!(queue.pop(), Some(1));
    /// ```
    pub fn from_storage(cmp: C, storage: S) -> Self {
        trace!(len = storage.len(), "adopting storage");
        let mut queue = Self {
            storage,
            cmp,
            _marker: PhantomData,
        };
        queue.heapify();
        queue
    }

    /// Returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn top(&self) -> Result<&T, QueueError> {
        self.storage.first().ok_or(QueueError::Empty)
    }

    /// Returns the highest-priority element, or `None` if the queue is empty
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.storage.push(item);
        self.sift_up(self.storage.len());
    }

    /// Removes and returns the highest-priority element
    ///
    /// Popping an empty queue is a no-op that returns `None`.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let len = self.storage.len();
        if len == 0 {
            return None;
        }

        self.storage.swap(0, len - 1);
        let item = self.storage.pop();
        self.percolate_down(1);
        item
    }

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] and leaves the queue untouched if it
    /// holds no elements.
    pub fn try_pop(&mut self) -> Result<T, QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the comparator ordering this queue
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Reserves capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Exchanges the contents and comparators of two queues without
    /// touching individual elements
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// When `other` is large relative to `self` the combined buffer is
    /// rebuilt with one heapify pass instead of pushing element by element.
    pub fn append(&mut self, other: &mut Self) {
        let incoming = mem::take(&mut other.storage).into_vec();
        let rebuild = incoming.len() * 2 >= self.storage.len();
        trace!(incoming = incoming.len(), rebuild, "appending queue");

        self.storage.reserve(incoming.len());
        if rebuild {
            for item in incoming {
                self.storage.push(item);
            }
            self.heapify();
        } else {
            for item in incoming {
                self.push(item);
            }
        }
    }

    /// Consumes the queue, returning its elements lowest priority first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted.reverse();
        sorted
    }

    /// Returns an iterator that pops elements highest priority first
    ///
    /// Elements the iterator does not reach stay in the queue, including
    /// when the iterator is dropped early.
    ///
    /// ```rust
    /// use rust_priority_queue::PriorityQueue;
    ///
    /// let mut queue: PriorityQueue<i32> = (1..=6).collect();
    /// assert_eq!(queue.pop_iter().next(), Some(6));
    /// assert_eq!(queue.len(), 5);
    /// ```
    pub fn pop_iter(&mut self) -> PopIter<'_, T, S, C> {
        PopIter { queue: self }
    }

    /// Consumes the queue, returning the backing buffer in heap order
    pub(crate) fn into_storage(self) -> S {
        self.storage
    }

    /// Restores heap order over the whole buffer
    ///
    /// Walks from the last node with children back to the root, so each
    /// subtree below the current node is already a heap.
    pub(crate) fn heapify(&mut self) {
        let mut moved = 0usize;
        for index in (1..=self.storage.len() / 2).rev() {
            if self.percolate_down(index) {
                moved += 1;
            }
        }
        trace!(len = self.storage.len(), moved, "heapified");
    }

    /// Moves the node at 1-based heap `index` down until no child outranks it
    ///
    /// Ties between the two children go to the left one. Returns true if the
    /// node moved at all.
    pub(crate) fn percolate_down(&mut self, mut index: usize) -> bool {
        let len = self.storage.len();
        let mut moved = false;

        loop {
            let left = 2 * index;
            let right = left + 1;
            let bigger = if right <= len && self.less_at(left, right) {
                right
            } else {
                left
            };

            if bigger <= len && self.less_at(index, bigger) {
                self.storage.swap(index - 1, bigger - 1);
                index = bigger;
                moved = true;
            } else {
                return moved;
            }
        }
    }

    /// Moves the leaf at 1-based heap `index` up while its parent ranks below it
    fn sift_up(&mut self, mut index: usize) {
        let mut parent = index / 2;
        while parent > 0 && self.less_at(parent, index) {
            self.storage.swap(parent - 1, index - 1);
            index = parent;
            parent = index / 2;
        }
    }

    /// Compares the nodes at two 1-based heap indices
    ///
    /// # Panics
    /// Panics if either index is 0 or past the end of the heap.
    #[inline]
    fn less_at(&self, a: usize, b: usize) -> bool {
        match (self.node(a), self.node(b)) {
            (Some(x), Some(y)) => self.cmp.less(x, y),
            _ => panic!(
                "heap index out of bounds: {a} or {b} outside 1..={}",
                self.storage.len()
            ),
        }
    }

    #[inline]
    fn node(&self, index: usize) -> Option<&T> {
        index.checked_sub(1).and_then(|offset| self.storage.get(offset))
    }

    #[cfg(test)]
    pub(crate) fn from_raw_parts(storage: S, cmp: C) -> Self {
        Self {
            storage,
            cmp,
            _marker: PhantomData,
        }
    }

    #[cfg(test)]
    pub(crate) fn raw_storage(&self) -> &S {
        &self.storage
    }
}

/// Exchanges the contents and comparators of two queues
///
/// ```rust
/// use rust_priority_queue::{swap, PriorityQueue};
///
/// let mut a = PriorityQueue::from(vec![1, 2]);
/// let mut b = PriorityQueue::from(vec![9]);
/// swap(&mut a, &mut b);
/// assert_eq!(a.top(), Ok(&9));
/// assert_eq!(b.len(), 2);
/// ```
pub fn swap<T, S: Storage<T>, C: Compare<T>>(
    a: &mut PriorityQueue<T, S, C>,
    b: &mut PriorityQueue<T, S, C>,
) {
    a.swap(b);
}

impl<T, S: Storage<T>, C: Compare<T> + Default> Default for PriorityQueue<T, S, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, S: Clone, C: Clone> Clone for PriorityQueue<T, S, C> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            cmp: self.cmp.clone(),
            _marker: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
        self.cmp.clone_from(&source.cmp);
    }
}

impl<T: fmt::Debug, S: Storage<T>, C> fmt::Debug for PriorityQueue<T, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.storage.len()).filter_map(|offset| self.storage.get(offset)))
            .finish()
    }
}

impl<T, S: Storage<T>, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, S, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, S: Storage<T>, C: Compare<T>> Extend<T> for PriorityQueue<T, S, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, S: Storage<T>, C: Compare<T>> Extend<&'a T> for PriorityQueue<T, S, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_storage(MaxComparator, vec)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for PriorityQueue<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_storage(MaxComparator, Vec::from(array))
    }
}

impl<T: Ord> From<VecDeque<T>> for PriorityQueue<T, VecDeque<T>> {
    fn from(deque: VecDeque<T>) -> Self {
        Self::from_storage(MaxComparator, deque)
    }
}

impl<T, S: Storage<T>, C: Compare<T>> IntoIterator for PriorityQueue<T, S, C> {
    type Item = T;
    type IntoIter = IntoIterSorted<T, S, C>;

    /// Consumes the queue, yielding elements highest priority first
    fn into_iter(self) -> Self::IntoIter {
        IntoIterSorted { queue: self }
    }
}

/// Owning iterator yielding elements highest priority first
///
/// Created by [`PriorityQueue::into_iter`].
pub struct IntoIterSorted<T, S = Vec<T>, C = MaxComparator> {
    queue: PriorityQueue<T, S, C>,
}

impl<T, S: Storage<T>, C: Compare<T>> Iterator for IntoIterSorted<T, S, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, S: Storage<T>, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, S, C> {}

impl<T, S: Storage<T>, C: Compare<T>> FusedIterator for IntoIterSorted<T, S, C> {}

/// Borrowing iterator that pops elements highest priority first
///
/// Created by [`PriorityQueue::pop_iter`].
pub struct PopIter<'a, T, S = Vec<T>, C = MaxComparator> {
    queue: &'a mut PriorityQueue<T, S, C>,
}

impl<T, S: Storage<T>, C: Compare<T>> Iterator for PopIter<'_, T, S, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, S: Storage<T>, C: Compare<T>> ExactSizeIterator for PopIter<'_, T, S, C> {}

impl<T, S: Storage<T>, C: Compare<T>> FusedIterator for PopIter<'_, T, S, C> {}
