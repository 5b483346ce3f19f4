use core::{error::Error, fmt};

/// Error returned when the top of an empty heap is requested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyHeap;

impl fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl Error for EmptyHeap {}

/// Error returned when a fixed-capacity heap has no room for the requested elements.
///
/// It carries the value that could not be inserted so the caller can [`reserve`] more room and
/// retry.
///
/// [`reserve`]: crate::BinaryHeap::reserve
#[derive(Clone, Eq, PartialEq)]
pub struct CapacityError<T> {
    /// Capacity of the heap at the time of the failure.
    pub capacity: usize,
    /// Number of elements the operation needed room for.
    pub requested: usize,
    rest: T,
}

impl<T> CapacityError<T> {
    pub(crate) fn new(capacity: usize, requested: usize, rest: T) -> Self {
        CapacityError {
            capacity,
            requested,
            rest,
        }
    }

    /// Returns a reference to the rejected value.
    pub fn rest(&self) -> &T {
        &self.rest
    }

    /// Extracts the rejected value and consumes the error.
    pub fn into_inner(self) -> T {
        self.rest
    }
}

// `T` may be a whole batch of elements; keep it out of the debug output.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .field("requested", &self.requested)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insufficient capacity: maximum {}, encountered {}",
            self.capacity, self.requested
        )
    }
}

impl<T> Error for CapacityError<T> {}

/// A parent/child pair that breaks the heap property, as reported by
/// [`BinaryHeap::verify`](crate::BinaryHeap::verify).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvariantViolation {
    /// Index of the parent.
    pub parent: usize,
    /// Index of the child that outranks its parent.
    pub child: usize,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heap property violated: child {} outranks parent {}",
            self.child, self.parent
        )
    }
}

impl Error for InvariantViolation {}
