//! Heap orderings

use core::cmp::Ordering;

/// The ordering a [`BinaryHeap`](crate::BinaryHeap) maintains.
///
/// `compare(a, b)` returns `Greater` when `a` has strictly higher priority than `b`, i.e. when
/// `a` must sit closer to the root. Implementations must be a total order and must not change
/// their answer for two given items while those items are in a heap.
///
/// Every `Fn(&T, &T) -> Ordering` closure is a comparator.
pub trait Compare<T: ?Sized> {
    /// Compares the priorities of `a` and `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` has strictly higher priority than `b`.
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Max-heap ordering: the greatest item is on top.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Max;

/// Min-heap ordering: the smallest item is on top.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Min;

impl<T: Ord + ?Sized> Compare<T> for Max {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> Compare<T> for Min {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
