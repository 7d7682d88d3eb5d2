//! Common traits for the priority queue
//!
//! This module provides the two seams the queue is generic over besides the
//! element type itself:
//!
//! - [`Compare`]: the ordering predicate deciding which element ranks higher
//! - [`QueueError`]: the error type for fallible accessors
//!
//! The storage seam lives in [`crate::storage`].

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no elements, so there is no top to access or remove
    #[error("priority queue is empty")]
    Empty,
}

/// An ordering predicate over elements of type `T`
///
/// `less(a, b)` returns true when `a` has strictly lower priority than `b`,
/// that is, when `a` should sink below `b` in the heap. The element for
/// which no other element compares greater ends up at the top.
///
/// Implementations must describe a strict weak ordering. An inconsistent
/// predicate never causes memory unsafety but leaves extraction order
/// unspecified.
///
/// # Example
///
/// ```rust
/// use rust_priority_queue::Compare;
///
/// struct ByLength;
///
/// impl Compare<String> for ByLength {
///     fn less(&self, a: &String, b: &String) -> bool {
///         a.len() < b.len()
///     }
/// }
///
/// assert!(ByLength.less(&"ab".to_string(), &"abc".to_string()));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` ranks strictly below `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (**self).less(a, b)
    }
}
