//! Stock comparators
//!
//! | Comparator         | Top element                    |
//! |--------------------|--------------------------------|
//! | [`MaxComparator`]  | greatest by `Ord` (default)    |
//! | [`MinComparator`]  | least by `Ord`                 |
//! | [`FnComparator`]   | decided by a `less` closure    |
//! | [`KeyComparator`]  | greatest by an extracted key   |

use crate::traits::Compare;

/// Orders by `T: Ord` ascending, so the greatest element is on top
///
/// This is the "less-than" predicate and the default comparator of
/// [`PriorityQueue`](crate::PriorityQueue), giving a max-heap.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MaxComparator;

impl<T: Ord + ?Sized> Compare<T> for MaxComparator {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders by `T: Ord` descending, so the least element is on top
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MinComparator;

impl<T: Ord + ?Sized> Compare<T> for MinComparator {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Wraps a closure `Fn(&T, &T) -> bool` with [`Compare::less`] semantics
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FnComparator<F>(pub F);

impl<T, F> Compare<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Orders by a key extracted with `Fn(&T) -> K`; the greatest key is on top
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct KeyComparator<F>(pub F);

impl<K: Ord, T, F> Compare<T> for KeyComparator<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}
