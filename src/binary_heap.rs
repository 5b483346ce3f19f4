//! A priority queue implemented with a binary heap.
//!
//! Insertion and popping the top element have `O(log n)` time complexity. Checking the top
//! element is `O(1)`. Converting a vector to a binary heap is done in-place and has `O(n)`
//! complexity. A binary heap can also be converted to a sorted vector in-place, which is an
//! `O(n log n)` heapsort.

use alloc::vec::Vec;
use core::{
    fmt,
    mem::{self, ManuallyDrop},
    ptr, slice,
};

use crate::{
    config::{Growth, HeapConfig, DEFAULT_CAPACITY},
    error::{CapacityError, EmptyHeap, InvariantViolation},
    order::{Compare, Max},
};

/// A priority queue implemented with a binary heap.
///
/// The ordering is a [`Compare`] implementation: [`Max`] (the default), [`Min`](crate::Min) or
/// any `Fn(&T, &T) -> Ordering` closure. What the heap does when it is full is decided once, at
/// construction, by its [`Growth`] policy.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the comparator, changes while it is in the heap. This is
/// normally only possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
///
/// ```
/// use binheap::{BinaryHeap, EmptyHeap, Max};
///
/// let mut heap: BinaryHeap<_, Max> = BinaryHeap::new();
///
/// // We can use peek to look at the next item in the heap. In this case,
/// // there's no items in there yet so we get an error.
/// assert_eq!(heap.peek(), Err(EmptyHeap));
///
/// // Let's add some scores...
/// heap.push(1).unwrap();
/// heap.push(5).unwrap();
/// heap.push(2).unwrap();
///
/// // Now peek shows the most important item in the heap.
/// assert_eq!(heap.peek(), Ok(&5));
///
/// // We can check the length of a heap.
/// assert_eq!(heap.len(), 3);
///
/// // We can iterate over the items in the heap, although they are returned in
/// // heap order, not sorted order.
/// for x in &heap {
///     println!("{}", x);
/// }
///
/// // If we instead pop these scores, they should come back in order.
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Err(EmptyHeap));
///
/// // We can clear the heap of any remaining items.
/// heap.clear();
///
/// // The heap should now be empty.
/// assert!(heap.is_empty())
/// ```
#[derive(Clone)]
pub struct BinaryHeap<T, C = Max> {
    data: Vec<T>,
    capacity: usize,
    growth: Growth,
    cmp: C,
}

impl<T, C: Default> BinaryHeap<T, C> {
    /// Creates an empty heap with the default configuration: room for
    /// [`DEFAULT_CAPACITY`] items, doubling when full.
    ///
    /// ```
    /// use binheap::{BinaryHeap, Min};
    ///
    /// let mut heap: BinaryHeap<_, Min> = BinaryHeap::new();
    /// heap.push(4).unwrap();
    /// assert_eq!(heap.capacity(), 100);
    /// ```
    pub fn new() -> Self {
        Self::with_config(C::default(), HeapConfig::default())
    }
}

impl<T, C> BinaryHeap<T, C> {
    /* Constructors */
    /// Creates an empty heap ordered by `cmp`, with the default configuration.
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(cmp, HeapConfig::default())
    }

    /// Creates an empty heap ordered by `cmp`, with the given capacity and growth policy.
    ///
    /// ```
    /// use binheap::{BinaryHeap, Growth, HeapConfig, Min};
    ///
    /// let heap: BinaryHeap<u8, _> = BinaryHeap::with_config(Min, HeapConfig::fixed(16));
    /// assert_eq!(heap.capacity(), 16);
    /// assert_eq!(heap.growth(), Growth::Fixed);
    /// ```
    pub fn with_config(cmp: C, config: HeapConfig) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(config.capacity.min(PREALLOCATION)),
            capacity: config.capacity,
            growth: config.growth,
            cmp,
        }
    }

    /* Public API */
    /// Returns the capacity of the binary heap.
    ///
    /// The capacity only ever grows: by doubling on a full push under [`Growth::Doubling`], or
    /// through [`reserve`](Self::reserve).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the growth policy chosen at construction.
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Returns the current capacity and growth policy.
    pub fn config(&self) -> HeapConfig {
        HeapConfig {
            capacity: self.capacity,
            growth: self.growth,
        }
    }

    /// Returns the comparator ordering this heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Drops all items from the binary heap. The capacity is kept.
    ///
    /// ```
    /// use binheap::{BinaryHeap, Max};
    ///
    /// let mut heap: BinaryHeap<_, Max> = BinaryHeap::new();
    /// heap.push(1).unwrap();
    /// heap.push(3).unwrap();
    ///
    /// assert!(!heap.is_empty());
    ///
    /// heap.clear();
    ///
    /// assert!(heap.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.data.clear()
    }

    /// Returns the length of the binary heap.
    ///
    /// ```
    /// use binheap::{BinaryHeap, Max};
    ///
    /// let mut heap: BinaryHeap<_, Max> = BinaryHeap::new();
    /// heap.push(1).unwrap();
    /// heap.push(3).unwrap();
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the next push needs more capacity.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Returns an iterator visiting all values in the underlying buffer, in heap order.
    ///
    /// ```
    /// use binheap::{BinaryHeap, Max};
    ///
    /// let mut heap: BinaryHeap<_, Max> = BinaryHeap::new();
    /// heap.push(1).unwrap();
    /// heap.push(2).unwrap();
    /// heap.push(3).unwrap();
    /// heap.push(4).unwrap();
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.iter() {
    ///     println!("{}", x);
    /// }
    /// ```
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the *top* (greatest if max-heap, smallest if min-heap) item in the binary heap.
    ///
    /// ```
    /// use binheap::{BinaryHeap, EmptyHeap, Max};
    ///
    /// let mut heap: BinaryHeap<_, Max> = BinaryHeap::new();
    /// assert_eq!(heap.peek(), Err(EmptyHeap));
    ///
    /// heap.push(1).unwrap();
    /// heap.push(5).unwrap();
    /// heap.push(2).unwrap();
    /// assert_eq!(heap.peek(), Ok(&5));
    /// ```
    pub fn peek(&self) -> Result<&T, EmptyHeap> {
        self.data.first().ok_or(EmptyHeap)
    }

    /// Returns a copy of the live items in heap order.
    ///
    /// Only the root is guaranteed to be in place; the rest is *not* sorted.
    ///
    /// ```
    /// use binheap::{BinaryHeap, Min};
    ///
    /// let mut heap: BinaryHeap<_, Min> = BinaryHeap::new();
    /// heap.push(3).unwrap();
    /// heap.push(1).unwrap();
    /// heap.push(2).unwrap();
    ///
    /// assert_eq!(heap.snapshot(), [1, 3, 2]);
    /// ```
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }

    /// Makes room for at least `additional` more items, regardless of the growth policy.
    ///
    /// This is how a full [`Growth::Fixed`] heap is enlarged after a
    /// [`CapacityError`](crate::CapacityError).
    ///
    /// ```
    /// use binheap::{BinaryHeap, HeapConfig, Max};
    ///
    /// let mut heap = BinaryHeap::with_config(Max, HeapConfig::fixed(1));
    /// heap.push(1).unwrap();
    ///
    /// let rejected = heap.push(2).unwrap_err().into_inner();
    /// heap.reserve(1);
    /// heap.push(rejected).unwrap();
    ///
    /// assert_eq!(heap.capacity(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self
            .len()
            .checked_add(additional)
            .expect("capacity overflow");
        if needed > self.capacity {
            self.set_capacity(needed);
        }
    }

    /// Consumes the heap and returns the underlying vector in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // `capacity` is the logical bound; the buffer itself only reserves a bounded step ahead.
    fn set_capacity(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len());
        self.data.reserve((capacity - self.len()).min(PREALLOCATION));
        self.capacity = capacity;
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Compare<T>,
{
    /// Builds a heap from `data` in `O(n)`.
    ///
    /// Under [`Growth::Fixed`] a batch larger than `config.capacity` is handed back in a
    /// [`CapacityError`]. Under [`Growth::Doubling`] the capacity doubles until the batch fits.
    ///
    /// ```
    /// use binheap::{BinaryHeap, HeapConfig, Max};
    ///
    /// let heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2], Max, HeapConfig::doubling(4)).unwrap();
    /// assert_eq!(heap.capacity(), 8);
    /// assert_eq!(heap.peek(), Ok(&9));
    ///
    /// let err = BinaryHeap::from_vec(vec![5, 3, 8], Max, HeapConfig::fixed(2)).unwrap_err();
    /// assert_eq!(err.into_inner(), [5, 3, 8]);
    /// ```
    pub fn from_vec(
        data: Vec<T>,
        cmp: C,
        config: HeapConfig,
    ) -> Result<Self, CapacityError<Vec<T>>> {
        let capacity = match config.growth {
            Growth::Fixed if data.len() > config.capacity => {
                return Err(CapacityError::new(config.capacity, data.len(), data));
            }
            Growth::Fixed => config.capacity,
            Growth::Doubling => fitted_capacity(config.capacity, data.len()),
        };

        Ok(Self::build(data, cmp, capacity, config.growth))
    }

    /// Pushes an item onto the binary heap.
    ///
    /// A full [`Growth::Doubling`] heap doubles its capacity first; a full [`Growth::Fixed`]
    /// heap returns the item in a [`CapacityError`].
    ///
    /// ```
    /// use binheap::{BinaryHeap, Max};
    ///
    /// let mut heap: BinaryHeap<_, Max> = BinaryHeap::new();
    /// heap.push(3).unwrap();
    /// heap.push(5).unwrap();
    /// heap.push(1).unwrap();
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Ok(&5));
    /// ```
    pub fn push(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            match self.growth {
                Growth::Fixed => {
                    return Err(CapacityError::new(self.capacity, self.len() + 1, item));
                }
                Growth::Doubling => self.grow(),
            }
        }

        let old_len = self.len();
        self.data.push(item);
        self.sift_up(old_len);
        Ok(())
    }

    /// Removes the *top* (greatest if max-heap, smallest if min-heap) item from the binary heap and
    /// returns it.
    ///
    /// ```
    /// use binheap::{BinaryHeap, EmptyHeap, Max};
    ///
    /// let mut heap: BinaryHeap<_, Max> = BinaryHeap::new();
    /// heap.push(1).unwrap();
    /// heap.push(3).unwrap();
    ///
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Err(EmptyHeap));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyHeap> {
        let mut item = self.data.pop().ok_or(EmptyHeap)?;

        if !self.is_empty() {
            mem::swap(&mut item, &mut self.data[0]);
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Consumes the heap and returns its items sorted from lowest to highest priority.
    ///
    /// ```
    /// use binheap::{BinaryHeap, Max, Min};
    ///
    /// let heap: BinaryHeap<_, Max> = vec![4, 1, 3, 2].into_iter().collect();
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4]);
    ///
    /// let heap: BinaryHeap<_, Min> = vec![4, 1, 3, 2].into_iter().collect();
    /// assert_eq!(heap.into_sorted_vec(), [4, 3, 2, 1]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        self.into_vec()
    }

    /// Checks the heap property over every parent/child pair and reports the first pair where
    /// the child outranks its parent.
    ///
    /// This can only fail if an item's ordering changed while it was in the heap.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        for child in 1..self.len() {
            let parent = (child - 1) / 2;
            if self.cmp.outranks(&self.data[child], &self.data[parent]) {
                return Err(InvariantViolation { parent, child });
            }
        }
        Ok(())
    }

    /* Private API */
    fn build(data: Vec<T>, cmp: C, capacity: usize, growth: Growth) -> Self {
        let mut heap = BinaryHeap {
            data,
            capacity,
            growth,
            cmp,
        };
        heap.set_capacity(capacity);
        heap.rebuild();
        heap
    }

    fn grow(&mut self) {
        let capacity = doubled(self.capacity);
        log::trace!(
            "binary heap full at {} items, growing capacity to {}",
            self.len(),
            capacity
        );
        self.set_capacity(capacity);
    }

    // Bottom-up heapify: every parent, last one first.
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            self.sift_down(n);
        }
    }

    fn sift_down(&mut self, pos: usize) {
        let end = self.len();
        self.sift_down_range(pos, end);
    }

    /// Moves the item at `pos` down until neither child in `..end` outranks it.
    fn sift_down_range(&mut self, pos: usize, end: usize) {
        if pos >= end || end > self.len() {
            invariant_violation(pos, end);
        }

        let cmp = &self.cmp;
        // SAFETY: pos < end <= len
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        while child < end {
            let right = child + 1;
            // SAFETY: child < right < end and both are below the hole
            unsafe {
                // compare with the higher priority of the two children
                if right < end && cmp.outranks(hole.get(right), hole.get(child)) {
                    child = right;
                }
                if !cmp.outranks(hole.get(child), hole.element()) {
                    break;
                }
                hole.move_to(child);
            }
            child = 2 * hole.pos() + 1;
        }
    }

    /// Moves the item at `pos` up until its parent is not outranked by it.
    fn sift_up(&mut self, pos: usize) {
        if pos >= self.len() {
            invariant_violation(pos, self.len());
        }

        let cmp = &self.cmp;
        // SAFETY: pos < len
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;
            // SAFETY: parent < hole.pos()
            unsafe {
                if !cmp.outranks(hole.element(), hole.get(parent)) {
                    break;
                }
                hole.move_to(parent);
            }
        }
    }
}

/// Most slots allocated ahead of the items actually pushed.
const PREALLOCATION: usize = DEFAULT_CAPACITY;

fn doubled(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(1)
}

fn fitted_capacity(mut capacity: usize, len: usize) -> usize {
    while capacity < len {
        capacity = doubled(capacity);
    }
    capacity
}

#[cold]
#[track_caller]
fn invariant_violation(pos: usize, end: usize) -> ! {
    panic!(
        "binary heap invariant violated: sift position {} is outside of 0..{}",
        pos, end
    )
}

/// Hole represents a hole in a slice i.e. an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new Hole at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        let elt = ptr::read(data.get_unchecked(pos));
        Hole {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        self.data.get_unchecked(index)
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        let index_ptr: *const _ = self.data.get_unchecked(index);
        let hole_ptr = self.data.get_unchecked_mut(self.pos);
        ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::write(self.data.get_unchecked_mut(pos), ptr::read(&*self.elt));
        }
    }
}

impl<T, C: Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for BinaryHeap<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> FromIterator<T> for BinaryHeap<T, C>
where
    C: Compare<T> + Default,
{
    /// Collects into a doubling heap with at least [`DEFAULT_CAPACITY`] slots, heapified in
    /// `O(n)`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let data: Vec<T> = iter.into_iter().collect();
        let capacity = fitted_capacity(DEFAULT_CAPACITY, data.len());
        Self::build(data, C::default(), capacity, Growth::Doubling)
    }
}
